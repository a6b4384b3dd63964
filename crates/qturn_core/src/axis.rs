//! Principal axes, signs, and the six faces of the cube.

use cgmath::Vector3;
use strum::EnumIter;

use crate::Float;

/// 3-dimensional axis.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    /// X axis (right).
    X = 0,
    /// Y axis (up).
    Y = 1,
    /// Z axis (towards the camera).
    Z = 2,
}
impl Axis {
    /// Returns an iterator over all axes.
    pub fn iter() -> impl Iterator<Item = Axis> {
        [Axis::X, Axis::Y, Axis::Z].into_iter()
    }

    /// Returns the unit vector along this axis.
    pub fn unit_vec3(self) -> Vector3<Float> {
        match self {
            Axis::X => Vector3::unit_x(),
            Axis::Y => Vector3::unit_y(),
            Axis::Z => Vector3::unit_z(),
        }
    }
}

/// Positive or negative.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Sign {
    /// Positive.
    Pos,
    /// Negative.
    Neg,
}
impl Sign {
    /// Returns the sign as a float.
    pub fn float(self) -> Float {
        match self {
            Sign::Pos => 1.0,
            Sign::Neg => -1.0,
        }
    }
}

/// Face of the cube, which doubles as a twist axis. Named per standard cube
/// notation: Right, Left, Up, Down, Front, Back.
#[derive(EnumIter, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Face {
    /// Right face (+X).
    R = 0,
    /// Left face (-X).
    L = 1,
    /// Up face (+Y).
    U = 2,
    /// Down face (-Y).
    D = 3,
    /// Front face (+Z).
    F = 4,
    /// Back face (-Z).
    B = 5,
}
impl Face {
    /// Returns the face for an uppercase notation symbol.
    pub fn from_symbol(c: char) -> Option<Self> {
        use Face::*;

        match c {
            'R' => Some(R),
            'L' => Some(L),
            'U' => Some(U),
            'D' => Some(D),
            'F' => Some(F),
            'B' => Some(B),
            _ => None,
        }
    }

    /// Returns the uppercase notation symbol for this face.
    pub fn symbol(self) -> char {
        use Face::*;

        match self {
            R => 'R',
            L => 'L',
            U => 'U',
            D => 'D',
            F => 'F',
            B => 'B',
        }
    }

    /// Returns the axis perpendicular to this face.
    pub fn axis(self) -> Axis {
        use Face::*;

        match self {
            R | L => Axis::X,
            U | D => Axis::Y,
            F | B => Axis::Z,
        }
    }

    /// Returns the sign of the face along its axis.
    pub fn sign(self) -> Sign {
        use Face::*;

        match self {
            R | U | F => Sign::Pos,
            L | D | B => Sign::Neg,
        }
    }

    /// Returns the face on the opposite side of the puzzle.
    #[must_use]
    pub fn opposite(self) -> Self {
        use Face::*;

        match self {
            R => L,
            L => R,
            U => D,
            D => U,
            F => B,
            B => F,
        }
    }

    /// Returns the signed unit vector pointing out of this face.
    pub fn vector(self) -> Vector3<Float> {
        self.axis().unit_vec3() * self.sign().float()
    }
}
