pub mod errors;
pub mod pan;
pub mod params;
pub mod series;
pub mod visualizer;
