//! The simulation facade: puzzle state plus the twist-queue state machine.

use std::collections::VecDeque;

use cgmath::Rad;
use qturn_core::{Cube, CubeSize, Float};
use qturn_notation::{Dialect, LayerList, Move, NotationError};

/// Target angle for every queued move: a quarter turn. Double turns reach
/// 180° through the doubled multiplier, not a larger target.
const TURN_TARGET: Rad<Float> = Rad(std::f64::consts::FRAC_PI_2);

/// Tolerance when comparing the remaining angle against the tick step.
const REMAINDER_SLACK: Float = 1e-9;

/// The move currently being animated.
#[derive(Debug, Clone)]
struct CurrentTwist {
    mv: Move,
    layers: LayerList,
    accumulated: Rad<Float>,
}

/// Queue of pending moves plus the one in flight.
///
/// Exactly one move animates at a time; moves execute in entry order.
#[derive(Debug, Default, Clone)]
struct TwistAnimationState {
    queue: VecDeque<Move>,
    current: Option<CurrentTwist>,
}

/// A puzzle together with its move queue and animation state.
///
/// All mutation happens synchronously inside [`CubeSimulation::tick`],
/// which an external render loop invokes once per frame. Input handlers
/// only append to the queue via [`CubeSimulation::enqueue`]; invalid input
/// is rejected without touching the puzzle or the queue.
#[derive(Debug, Clone)]
pub struct CubeSimulation {
    cube: Cube,
    dialect: Dialect,
    anim: TwistAnimationState,
}
impl CubeSimulation {
    /// Constructs a simulation with a solved puzzle of the given size.
    pub fn new(size: CubeSize) -> Self {
        Self {
            cube: Cube::new(size),
            dialect: Dialect::for_size(size),
            anim: TwistAnimationState::default(),
        }
    }

    /// Returns the puzzle model, for reading cubie transforms and stickers.
    pub fn cube(&self) -> &Cube {
        &self.cube
    }

    /// Returns the puzzle size.
    pub fn size(&self) -> CubeSize {
        self.cube.size()
    }

    /// Returns the notation dialect in use.
    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Returns whether no move is animating and none are queued.
    pub fn is_idle(&self) -> bool {
        self.anim.current.is_none() && self.anim.queue.is_empty()
    }

    /// Returns the number of moves enqueued and not yet finished.
    pub fn pending_moves(&self) -> usize {
        self.anim.queue.len() + usize::from(self.anim.current.is_some())
    }

    /// Returns the move currently being animated.
    pub fn current_move(&self) -> Option<Move> {
        Some(self.anim.current.as_ref()?.mv)
    }

    /// Validates a notation string for this puzzle's dialect and appends it
    /// to the move queue.
    pub fn enqueue(&mut self, input: &str) -> Result<(), NotationError> {
        match self.dialect.parse(input) {
            Ok(mv) => {
                self.anim.queue.push_back(mv);
                Ok(())
            }
            Err(err) => {
                log::debug!("rejected input {input:?}: {err}");
                Err(err)
            }
        }
    }

    /// Advances the animation by one step of at most `step` radians.
    ///
    /// If a move is in flight, its layers rotate by `step` times the move's
    /// multiplier; the final sub-step is clamped to the exact remaining
    /// angle so every move lands on a 90°-multiple orientation. If no move
    /// is in flight, the next queued move is started and advanced within
    /// the same tick. With an empty queue this is a no-op.
    pub fn tick(&mut self, step: Rad<Float>) {
        if self.anim.current.is_none() {
            let Some(mv) = self.anim.queue.pop_front() else {
                return;
            };
            let layer_count = self.cube.size().layer_count(mv.face);
            log::trace!("twist {mv} started");
            self.anim.current = Some(CurrentTwist {
                layers: mv.layer_list(layer_count),
                mv,
                accumulated: Rad(0.0),
            });
        }

        let Some(twist) = &mut self.anim.current else {
            return;
        };
        let remaining = TURN_TARGET - twist.accumulated;
        let finishing = remaining.0 <= step.0 + REMAINDER_SLACK;
        let angle = if finishing { remaining } else { step };
        let mv = twist.mv;
        self.cube
            .rotate_layers(mv.face, &twist.layers, angle * mv.multiplier());
        twist.accumulated += angle;
        if finishing {
            self.anim.current = None;
            log::trace!("twist {mv} finished");
        }
    }
}
