//! Structured moves and their resolution to concrete layer lists.

use std::fmt;

use qturn_core::{Face, Float, Layer};
use smallvec::SmallVec;

/// Concrete list of 1-based layer indices affected by a move.
pub type LayerList = SmallVec<[Layer; 8]>;

/// A parsed canonical move: layer prefix, face, and turn suffix.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    /// Which layers along the face's axis the move affects.
    pub prefix: LayerPrefix,
    /// Face letter, which determines the twist axis.
    pub face: Face,
    /// Turn suffix, which determines the angle multiplier.
    pub turn: Turn,
}
impl Move {
    /// Constructs an outer face turn with the default (clockwise) suffix.
    pub fn face_turn(face: Face) -> Self {
        Self {
            prefix: LayerPrefix::Outer,
            face,
            turn: Turn::Clockwise,
        }
    }

    /// Resolves the layer prefix to a concrete list of 1-based layer
    /// indices for a puzzle with `layer_count` layers along this move's
    /// axis.
    ///
    /// Indices beyond `layer_count` may appear in the list (a tier or range
    /// can ask for more layers than exist); they select no cubies and are
    /// harmless.
    pub fn layer_list(&self, layer_count: Layer) -> LayerList {
        match self.prefix {
            LayerPrefix::Outer => smallvec::smallvec![1],
            LayerPrefix::Cube => (1..=layer_count).collect(),
            LayerPrefix::Tier(count) => {
                // Layer 1 plus everything down to the requested depth.
                let depth = count.unwrap_or(2);
                std::iter::once(1).chain(2..=depth).collect()
            }
            LayerPrefix::Numbered(None) => smallvec::smallvec![2],
            LayerPrefix::Numbered(Some(LayerSpec::Single(layer))) => {
                smallvec::smallvec![layer]
            }
            LayerPrefix::Numbered(Some(LayerSpec::Range(start, end))) => (start..=end).collect(),
        }
    }

    /// Returns the signed angle multiplier for this move's turn suffix.
    pub fn multiplier(&self) -> Float {
        self.turn.multiplier()
    }
}
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.prefix, self.face.symbol(), self.turn)
    }
}

/// Layer prefix of a move.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LayerPrefix {
    /// Bare face letter; the outermost layer only.
    #[default]
    Outer,
    /// `C` prefix; every layer along the axis.
    Cube,
    /// `T` prefix; layers 1 through the given depth (default 2).
    ///
    /// Example: `T3R`
    Tier(Option<Layer>),
    /// `N` prefix; the given layer or range (default layer 2).
    ///
    /// Examples: `NL`, `N3R`, `N2-4R`
    Numbered(Option<LayerSpec>),
}
impl fmt::Display for LayerPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayerPrefix::Outer => Ok(()),
            LayerPrefix::Cube => write!(f, "C"),
            LayerPrefix::Tier(None) => write!(f, "T"),
            LayerPrefix::Tier(Some(depth)) => write!(f, "T{depth}"),
            LayerPrefix::Numbered(None) => write!(f, "N"),
            LayerPrefix::Numbered(Some(spec)) => write!(f, "N{spec}"),
        }
    }
}

/// Numeric layer spec of a numbered move.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LayerSpec {
    /// A single layer.
    Single(Layer),
    /// An inclusive range of layers. An inverted range selects nothing.
    Range(Layer, Layer),
}
impl fmt::Display for LayerSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayerSpec::Single(layer) => write!(f, "{layer}"),
            LayerSpec::Range(start, end) => write!(f, "{start}-{end}"),
        }
    }
}

/// Turn suffix of a move.
///
/// The default (unmarked) turn carries multiplier -1 and the prime suffix
/// carries +1; the visual rotation sense of standard notation depends on
/// this asymmetry.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Turn {
    /// Unmarked; multiplier -1.
    #[default]
    Clockwise,
    /// `'` suffix; multiplier +1.
    Counter,
    /// `2` suffix; multiplier 2.
    Double,
}
impl Turn {
    /// Returns the signed angle multiplier.
    pub fn multiplier(self) -> Float {
        match self {
            Turn::Clockwise => -1.0,
            Turn::Counter => 1.0,
            Turn::Double => 2.0,
        }
    }
}
impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Turn::Clockwise => Ok(()),
            Turn::Counter => write!(f, "'"),
            Turn::Double => write!(f, "2"),
        }
    }
}
