//! Size-specific notation dialects.
//!
//! Each puzzle size understands a different shorthand vocabulary; the
//! dialect rewrites a token into the canonical grammar before parsing. Only
//! the first character is examined; suffixes and numeric specs pass through
//! verbatim.

use qturn_core::{CubeSize, Face};

use crate::{Move, NotationError, ParseMoveError, parse_move};

/// Whole-cube reorientation aliases, valid on every size.
fn whole_cube_alias(c: char) -> Option<&'static str> {
    match c {
        'X' => Some("CR"),
        'Y' => Some("CU"),
        'Z' => Some("CF"),
        _ => None,
    }
}

/// Middle-slice aliases of 3-deep puzzles: layer 2 on the L, D, and B axes.
fn slice_alias(c: char) -> Option<&'static str> {
    match c {
        'M' => Some("NL"),
        'E' => Some("ND"),
        'S' => Some("NF"),
        _ => None,
    }
}

/// Notation dialect for a puzzle size.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// 1×1×1: only `X`/`Y`/`Z` reorientations exist.
    Size1,
    /// 2×2×2: face turns plus `X`/`Y`/`Z`; no slices.
    Size2,
    /// 3×3×3: face turns, lowercase wide moves, `M`/`E`/`S` slices, and
    /// `X`/`Y`/`Z`.
    #[default]
    Size3,
    /// Any other (or non-cubic) size: `X`/`Y`/`Z` are rewritten and
    /// everything else goes straight to the canonical parser.
    Big,
}
impl Dialect {
    /// Returns the dialect for a puzzle size.
    pub fn for_size(size: CubeSize) -> Self {
        match size.as_cubic() {
            Some(1) => Dialect::Size1,
            Some(2) => Dialect::Size2,
            Some(3) => Dialect::Size3,
            _ => Dialect::Big,
        }
    }

    /// Rewrites a shorthand token into canonical notation.
    pub fn translate(self, input: &str) -> Result<String, NotationError> {
        let mut chars = input.chars();
        let Some(first) = chars.next() else {
            return Err(ParseMoveError::MissingFace.into());
        };
        let rest = chars.as_str();

        let unsupported = || NotationError::UnsupportedMove(input.to_string());
        match self {
            Dialect::Size1 => match whole_cube_alias(first) {
                Some(alias) => Ok(format!("{alias}{rest}")),
                None => Err(unsupported()),
            },
            Dialect::Size2 => {
                if Face::from_symbol(first).is_some() {
                    Ok(input.to_string())
                } else if let Some(alias) = whole_cube_alias(first) {
                    Ok(format!("{alias}{rest}"))
                } else {
                    Err(unsupported())
                }
            }
            Dialect::Size3 => {
                if Face::from_symbol(first).is_some() {
                    Ok(input.to_string())
                } else if Face::from_symbol(first.to_ascii_uppercase()).is_some() {
                    // Lowercase face letter: wide move, i.e. a 2-deep tier.
                    Ok(format!("T{}{rest}", first.to_ascii_uppercase()))
                } else if let Some(alias) = slice_alias(first).or_else(|| whole_cube_alias(first)) {
                    Ok(format!("{alias}{rest}"))
                } else {
                    Err(unsupported())
                }
            }
            Dialect::Big => match whole_cube_alias(first) {
                Some(alias) => Ok(format!("{alias}{rest}")),
                None => Ok(input.to_string()),
            },
        }
    }

    /// Translates and parses a token in one step.
    pub fn parse(self, input: &str) -> Result<Move, NotationError> {
        Ok(parse_move(&self.translate(input)?)?)
    }
}
