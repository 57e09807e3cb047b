//! Colours shared by the visualizers.

use crate::core::data::colour::{Colour, Rgba};

pub const BACKGROUND: Colour = Colour::WHITE;
pub const AXIS_LIGHT: Colour = Colour::rgb(0xcc, 0xcc, 0xcc);
pub const AXIS: Colour = Colour::rgb(0xaa, 0xaa, 0xaa);
pub const CURVE: Colour = Colour::rgb(0x33, 0x33, 0x33);
pub const WEIERSTRASS_CURVE: Colour = Colour::rgb(0x00, 0x7b, 0xff);

pub const EPSILON_BAND: Rgba = Colour::rgb(0, 255, 0).with_alpha(0.1);
pub const EPSILON_EDGE: Colour = Colour::rgb(0, 128, 0);
pub const DELTA_BAND: Rgba = Colour::rgb(0, 0, 255).with_alpha(0.1);
pub const DELTA_EDGE: Colour = Colour::rgb(0, 0, 255);
pub const LIMIT_POINT: Colour = Colour::rgb(255, 0, 0);

pub const RIEMANN_FILL: Rgba = Colour::rgb(79, 172, 254).with_alpha(0.3);
pub const RIEMANN_EDGE: Rgba = Colour::rgb(79, 172, 254).with_alpha(0.8);

pub const TAYLOR_TARGET: Rgba = Colour::BLACK.with_alpha(0.3);
pub const TAYLOR_POLYNOMIAL: Colour = Colour::rgb(0xff, 0x00, 0x55);
