use std::fmt;

use crate::core::visualizers::errors::RenderError;
use crate::core::visualizers::visualizer_kinds::VisualizerKinds;

/// A parametrised plot that redraws its whole surface on every `render`.
pub trait Visualizer {
    /// Derived values shown next to the plot after a render.
    type Readout: fmt::Display;

    fn kind(&self) -> VisualizerKinds;

    /// Full redraw from the current parameters. Never draws incrementally.
    fn render(&mut self) -> Result<Self::Readout, RenderError>;
}
