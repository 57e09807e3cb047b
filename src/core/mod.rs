pub mod data;
pub mod drawing;
pub mod util;
pub mod visualizers;
