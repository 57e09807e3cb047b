pub mod errors;
pub mod integral;
pub mod params;
pub mod sampling_rule;
pub mod visualizer;
