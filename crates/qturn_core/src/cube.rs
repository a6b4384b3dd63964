//! The puzzle model: the cubie shell and the layer-rotation operation.

use cgmath::{InnerSpace, One, Quaternion, Rad, Vector3, vec3};
use itertools::iproduct;

use crate::{Axis, Cubie, Face, Float, LAYER_EPSILON};

/// 1-based layer index, counted from the face a twist axis points out of.
pub type Layer = u16;

/// Puzzle dimensions along each axis. Typically equal (a classic N×N×N
/// cube), but nothing in the model requires it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CubeSize {
    /// Number of cubies along the X axis.
    pub x: u16,
    /// Number of cubies along the Y axis.
    pub y: u16,
    /// Number of cubies along the Z axis.
    pub z: u16,
}
impl CubeSize {
    /// Constructs a puzzle size.
    ///
    /// # Panics
    ///
    /// Panics if any dimension is zero.
    pub fn new(x: u16, y: u16, z: u16) -> Self {
        assert!(x >= 1 && y >= 1 && z >= 1, "puzzle dimensions must be >= 1");
        Self { x, y, z }
    }

    /// Constructs an N×N×N puzzle size.
    pub fn cubic(n: u16) -> Self {
        Self::new(n, n, n)
    }

    /// Returns the dimension along an axis.
    pub fn along(&self, axis: Axis) -> u16 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    /// Returns the number of layers along a twist axis.
    pub fn layer_count(&self, face: Face) -> Layer {
        self.along(face.axis())
    }

    /// Returns `Some(n)` if the puzzle is a cubic N×N×N.
    pub fn as_cubic(&self) -> Option<u16> {
        (self.x == self.y && self.y == self.z).then_some(self.x)
    }

    fn to_vec3(self) -> Vector3<Float> {
        vec3(self.x as Float, self.y as Float, self.z as Float)
    }
}

/// The puzzle model: a hollow shell of cubies.
///
/// Cubie identity is stable for the lifetime of the puzzle; rotating a layer
/// only mutates positions and orientations.
#[derive(Debug, Clone)]
pub struct Cube {
    size: CubeSize,
    cubies: Vec<Cubie>,
}
impl Cube {
    /// Constructs a solved puzzle.
    ///
    /// Only the visible shell is instantiated: a lattice cell is skipped iff
    /// it is interior along every axis simultaneously. For sizes ≤ 2 no cell
    /// is interior, so every cell is included.
    pub fn new(size: CubeSize) -> Self {
        fn is_inside(index: u16, extent: u16) -> bool {
            index > 0 && index < extent - 1
        }

        let mut cubies = vec![];
        for (i, j, k) in iproduct!(0..size.x, 0..size.y, 0..size.z) {
            if is_inside(i, size.x) && is_inside(j, size.y) && is_inside(k, size.z) {
                continue;
            }
            let position = vec3(
                i as Float - (size.x - 1) as Float / 2.0,
                j as Float - (size.y - 1) as Float / 2.0,
                k as Float - (size.z - 1) as Float / 2.0,
            );
            cubies.push(Cubie::new(position, Quaternion::one(), &size));
        }
        Self { size, cubies }
    }

    /// Returns the puzzle size.
    pub fn size(&self) -> CubeSize {
        self.size
    }

    /// Returns all cubies.
    pub fn cubies(&self) -> &[Cubie] {
        &self.cubies
    }

    /// Returns the cubies currently occupying a layer. Layer indices are
    /// 1-based, counted inward from the face the twist axis points out of;
    /// an out-of-range index selects nothing.
    pub fn cubies_in_layer(&self, face: Face, layer: Layer) -> impl Iterator<Item = &Cubie> {
        let axis = face.vector();
        let span = self.layer_span(axis);
        self.cubies
            .iter()
            .filter(move |cubie| layer_test(span, axis, cubie, layer))
    }

    /// Rotates one layer by `angle` radians about the face's twist axis.
    ///
    /// The rotation is rigid and applied about the fixed world axis through
    /// the puzzle center. Out-of-range layer indices are a silent no-op.
    pub fn rotate_layer(&mut self, face: Face, layer: Layer, angle: Rad<Float>) {
        let axis = face.vector();
        let span = self.layer_span(axis);
        for cubie in &mut self.cubies {
            if layer_test(span, axis, cubie, layer) {
                cubie.rotate_about(axis, angle);
            }
        }
    }

    /// Rotates every listed layer by `angle` radians about the face's twist
    /// axis.
    pub fn rotate_layers(&mut self, face: Face, layers: &[Layer], angle: Rad<Float>) {
        for &layer in layers {
            self.rotate_layer(face, layer, angle);
        }
    }

    /// Half-extent of the lattice along a signed twist axis.
    fn layer_span(&self, axis: Vector3<Float>) -> Float {
        (self.size.to_vec3().dot(axis).abs() - 1.0) / 2.0
    }
}

/// Converts a cubie's signed projection onto the twist axis into a 1-based
/// layer count from the far face and compares against `layer`. The
/// projection along the twist axis is invariant under rotation about it, so
/// this test stays exact mid-turn.
fn layer_test(span: Float, axis: Vector3<Float>, cubie: &Cubie, layer: Layer) -> bool {
    ((span - cubie.position().dot(axis) + 1.0) - layer as Float).abs() < LAYER_EPSILON
}
