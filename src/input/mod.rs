//! Input adapters for the visualizers.
//!
//! Adapters here receive input from a concrete UI toolkit and translate it into
//! control events for the interactive session.

#[cfg(feature = "gui")]
pub mod gui;
