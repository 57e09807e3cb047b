pub mod errors;
pub mod function_family;
pub mod params;
pub mod polynomial;
pub mod visualizer;
