pub mod containment;
pub mod errors;
pub mod params;
pub mod visualizer;
