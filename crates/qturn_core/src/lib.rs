//! Geometric model of an N×N×N twisty puzzle: cubies, layer selection, and
//! the rotate operation.
//!
//! The model is purely geometric. It knows nothing about notation or
//! animation timing; those live in `qturn_notation` and `qturn_view`
//! respectively. A renderer reads back each cubie's current transform and
//! sticker colors to draw it.

pub use cgmath;

/// Floating-point type used for geometry.
pub type Float = f64;

/// Tolerance for deciding whether a cubie face lies on the puzzle's outer
/// boundary at construction time.
pub const STICKER_EPSILON: Float = 1e-3;

/// Tolerance for layer membership tests. Cubie positions drift from the
/// lattice by far less than this over any whole number of quarter turns.
pub const LAYER_EPSILON: Float = 1e-6;

/// Asserts that both arguments are approximately equal.
#[cfg(test)]
macro_rules! assert_approx_eq {
    ($a:expr, $b:expr $(,)?) => {
        approx::assert_abs_diff_eq!($a, $b, epsilon = $crate::LAYER_EPSILON)
    };
}

mod axis;
mod cube;
mod cubie;

pub use axis::{Axis, Face, Sign};
pub use cube::{Cube, CubeSize, Layer};
pub use cubie::{Cubie, StickerColor};
