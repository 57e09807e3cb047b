use crate::core::data::screen_point::ScreenPoint;
use crate::core::drawing::ports::surface::DrawSurface;
use crate::core::drawing::style::Stroke;
use crate::core::util::coordinate_mapper::CoordinateMapper;

/// Draws the horizontal line `y = 0` and the vertical line `x = 0` across the whole surface.
pub fn draw_axes<S: DrawSurface + ?Sized>(surface: &mut S, mapper: &CoordinateMapper, stroke: &Stroke) {
    let width = surface.width() as f64;
    let height = surface.height() as f64;
    let x_axis_row = mapper.y.to_screen(0.0);
    let y_axis_column = mapper.x.to_screen(0.0);

    surface.stroke_line(
        ScreenPoint::new(0.0, x_axis_row),
        ScreenPoint::new(width, x_axis_row),
        stroke,
    );
    surface.stroke_line(
        ScreenPoint::new(y_axis_column, 0.0),
        ScreenPoint::new(y_axis_column, height),
        stroke,
    );
}
