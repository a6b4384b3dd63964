//! A single sub-cube of the puzzle.

use cgmath::{InnerSpace, Quaternion, Rad, Rotation, Rotation3, Vector3};

use crate::{CubeSize, Face, Float, STICKER_EPSILON};

/// Fixed sticker color for each face direction.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StickerColor {
    /// +X face.
    Red,
    /// -X face.
    Orange,
    /// +Y face.
    Yellow,
    /// -Y face.
    White,
    /// +Z face.
    Blue,
    /// -Z face.
    Green,
}
impl StickerColor {
    /// Returns the color assigned to a face direction.
    pub fn of(face: Face) -> Self {
        use Face::*;

        match face {
            R => StickerColor::Red,
            L => StickerColor::Orange,
            U => StickerColor::Yellow,
            D => StickerColor::White,
            F => StickerColor::Blue,
            B => StickerColor::Green,
        }
    }
}

/// One visible sub-cube.
///
/// Sticker flags are computed once from the construction-time position and
/// never change; only `position` and `orientation` mutate as layers turn.
#[derive(Debug, Clone, PartialEq)]
pub struct Cubie {
    position: Vector3<Float>,
    orientation: Quaternion<Float>,
    stickers: [bool; 6],
}
impl Cubie {
    /// Constructs a cubie at a lattice-centered position, marking a sticker
    /// on each face that lies on the puzzle's outer boundary.
    pub fn new(position: Vector3<Float>, orientation: Quaternion<Float>, size: &CubeSize) -> Self {
        let mut stickers = [false; 6];
        for axis in crate::Axis::iter() {
            let extent = (size.along(axis) - 1) as Float / 2.0;
            let coord = position.dot(axis.unit_vec3());
            stickers[axis as usize * 2] = (coord - extent).abs() < STICKER_EPSILON;
            stickers[axis as usize * 2 + 1] = (coord + extent).abs() < STICKER_EPSILON;
        }
        Self {
            position,
            orientation,
            stickers,
        }
    }

    /// Returns the cubie's current position.
    pub fn position(&self) -> Vector3<Float> {
        self.position
    }

    /// Returns the cubie's current orientation.
    pub fn orientation(&self) -> Quaternion<Float> {
        self.orientation
    }

    /// Returns the sticker color on a face direction, or `None` if that face
    /// was not on the outer boundary at construction.
    pub fn sticker(&self, face: Face) -> Option<StickerColor> {
        self.stickers[face as usize].then(|| StickerColor::of(face))
    }

    /// Returns how many faces of this cubie carry a sticker.
    pub fn sticker_count(&self) -> usize {
        self.stickers.iter().filter(|&&s| s).count()
    }

    /// Rotates the cubie rigidly about a world axis through the puzzle
    /// center: the orientation composes with the world-axis rotation and the
    /// position revolves about the origin.
    pub(crate) fn rotate_about(&mut self, axis: Vector3<Float>, angle: Rad<Float>) {
        let rotation = Quaternion::from_axis_angle(axis, angle);
        self.orientation = rotation * self.orientation;
        self.position = rotation.rotate_vector(self.position);
    }
}
