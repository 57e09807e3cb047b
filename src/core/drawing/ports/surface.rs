use crate::core::data::colour::{Colour, Rgba};
use crate::core::data::screen_point::{ScreenPoint, ScreenRect};
use crate::core::drawing::style::Stroke;

/// A 2D target the visualizers draw into, in surface pixel coordinates.
///
/// Implementations must tolerate geometry that lies partly or wholly off the surface.
pub trait DrawSurface {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    fn clear(&mut self, colour: Colour);
    fn stroke_line(&mut self, from: ScreenPoint, to: ScreenPoint, stroke: &Stroke);
    fn stroke_polyline(&mut self, points: &[ScreenPoint], stroke: &Stroke);
    fn fill_rect(&mut self, rect: ScreenRect, colour: Rgba);
    fn stroke_rect(&mut self, rect: ScreenRect, stroke: &Stroke);
    fn fill_circle(&mut self, center: ScreenPoint, radius: f64, colour: Rgba);
}
