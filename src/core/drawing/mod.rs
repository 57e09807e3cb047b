pub mod axes;
pub mod pixel_canvas;
pub mod ports;
pub mod recorder;
pub mod style;
