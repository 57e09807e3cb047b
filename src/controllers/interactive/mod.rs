//! Interactive session driving the visualizers from UI input.
//!
//! Every accepted control event mutates one visualizer's parameters and triggers a
//! full redraw of that visualizer, on the calling thread, before `handle` returns.

pub mod control_event;
pub mod errors;
mod session;

pub use control_event::{
    ControlEvent, EpsilonDeltaControl, RiemannControl, TaylorControl, WeierstrassControl,
};
pub use errors::ControlError;
pub use session::{Readouts, VisualizerSession};
