pub mod visualizer;
