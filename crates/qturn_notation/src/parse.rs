//! Single-pass parser for canonical move tokens.

use std::iter::Peekable;
use std::str::Chars;

use qturn_core::{Face, Layer};

use crate::{LayerPrefix, LayerSpec, Move, ParseMoveError, Turn};

/// Parses one canonical move token.
///
/// The whole input must be consumed; trailing characters are an error.
pub fn parse_move(s: &str) -> Result<Move, ParseMoveError> {
    let mut chars = s.chars().peekable();

    let prefix = match chars.peek() {
        Some('C') => {
            chars.next();
            LayerPrefix::Cube
        }
        Some('T') => {
            chars.next();
            LayerPrefix::Tier(parse_number(&mut chars)?)
        }
        Some('N') => {
            chars.next();
            LayerPrefix::Numbered(parse_layer_spec(&mut chars)?)
        }
        _ => LayerPrefix::Outer,
    };

    let face = match chars.next() {
        Some(c) => Face::from_symbol(c).ok_or(ParseMoveError::BadFace(c))?,
        None => return Err(ParseMoveError::MissingFace),
    };

    let turn = match chars.next() {
        None => Turn::Clockwise,
        Some('\'') => Turn::Counter,
        Some('2') => Turn::Double,
        Some(c) => return Err(ParseMoveError::UnexpectedChar(c)),
    };

    match chars.next() {
        None => Ok(Move { prefix, face, turn }),
        Some(c) => Err(ParseMoveError::UnexpectedChar(c)),
    }
}

/// Consumes a run of digits, if any.
fn parse_number(chars: &mut Peekable<Chars<'_>>) -> Result<Option<Layer>, ParseMoveError> {
    let mut digits = String::new();
    while let Some(&c) = chars.peek() {
        if !c.is_ascii_digit() {
            break;
        }
        digits.push(c);
        chars.next();
    }
    if digits.is_empty() {
        Ok(None)
    } else {
        digits
            .parse()
            .map(Some)
            .map_err(|_| ParseMoveError::BadLayerNumber)
    }
}

/// Consumes the numeric spec of a numbered prefix: nothing, a single layer,
/// or an inclusive `a-b` range.
fn parse_layer_spec(chars: &mut Peekable<Chars<'_>>) -> Result<Option<LayerSpec>, ParseMoveError> {
    let Some(start) = parse_number(chars)? else {
        return match chars.peek() {
            Some('-') => Err(ParseMoveError::MalformedRange),
            _ => Ok(None),
        };
    };
    if chars.peek() == Some(&'-') {
        chars.next();
        let end = parse_number(chars)?.ok_or(ParseMoveError::MalformedRange)?;
        Ok(Some(LayerSpec::Range(start, end)))
    } else {
        Ok(Some(LayerSpec::Single(start)))
    }
}
