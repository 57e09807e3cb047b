//! Windowed front end: winit for the window, pixels for the framebuffer and egui
//! for the control panel.

pub mod app;
pub mod commands;

pub use commands::run_gui::RunGuiCommand;
