//! Animation sequencer for the qturn puzzle model.
//!
//! [`CubeSimulation`] is the surface external render/input adapters talk
//! to: input handlers feed it notation strings, the render loop ticks it
//! once per frame with an angular step, and the renderer reads back cubie
//! transforms through [`CubeSimulation::cube`].

mod simulation;

pub use qturn_core::{Cube, CubeSize, Cubie, Face, Float, StickerColor};
pub use qturn_notation::{Dialect, Move, NotationError};
pub use simulation::CubeSimulation;
