pub mod epsilon_delta;
pub mod errors;
pub mod palette;
pub mod ports;
pub mod riemann;
pub mod taylor;
pub mod visualizer_kinds;
pub mod weierstrass;
