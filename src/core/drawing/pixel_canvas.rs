use crate::core::data::colour::{Colour, Rgba};
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::pixel_rect::{PixelRect, PixelRectError};
use crate::core::data::screen_point::{ScreenPoint, ScreenRect};
use crate::core::drawing::ports::surface::DrawSurface;
use crate::core::drawing::style::{Dash, Stroke};

/// Inclusive pixel bounds touched by the current stroke.
#[derive(Debug, Copy, Clone)]
struct Span {
    x0: u32,
    y0: u32,
    x1: u32,
    y1: u32,
}

impl Span {
    fn union(self, other: Self) -> Self {
        Self {
            x0: self.x0.min(other.x0),
            y0: self.y0.min(other.y0),
            x1: self.x1.max(other.x1),
            y1: self.y1.max(other.y1),
        }
    }
}

/// Software rasteriser drawing anti-aliased shapes into a `PixelBuffer`.
///
/// Each stroke is accumulated into a coverage mask first and composited once,
/// so translucent polylines keep a uniform tone where segments meet.
#[derive(Debug, Clone)]
pub struct PixelCanvas {
    buffer: PixelBuffer,
    coverage: Vec<f32>,
}

impl PixelCanvas {
    pub fn new(width: u32, height: u32) -> Result<Self, PixelRectError> {
        let pixel_rect = PixelRect::from_size(width, height)?;
        let mut buffer = PixelBuffer::new(pixel_rect);
        buffer.fill(Colour::WHITE);

        Ok(Self {
            buffer,
            coverage: vec![0.0; pixel_rect.size() as usize],
        })
    }

    /// Reallocates the canvas for a new size. The contents are cleared to white.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), PixelRectError> {
        *self = Self::new(width, height)?;
        Ok(())
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    #[must_use]
    pub fn into_buffer(self) -> PixelBuffer {
        self.buffer
    }

    /// Pixel bounds of `[min, max]` on an axis of `extent` pixels, or `None` when off-surface.
    fn clamp_range(min: f64, max: f64, extent: u32) -> Option<(u32, u32)> {
        if !min.is_finite() || !max.is_finite() {
            return None;
        }

        let last = (extent - 1) as f64;
        let lo = min.floor();
        let hi = max.ceil();

        if hi < 0.0 || lo > last {
            return None;
        }

        Some((lo.max(0.0) as u32, hi.min(last) as u32))
    }

    /// Writes the max-coverage of one capsule-shaped segment into the mask.
    fn rasterise_segment(&mut self, a: ScreenPoint, b: ScreenPoint, half_width: f64) -> Option<Span> {
        if !(a.x.is_finite() && a.y.is_finite() && b.x.is_finite() && b.y.is_finite()) {
            return None;
        }

        let reach = half_width + 1.0;
        let (x0, x1) = Self::clamp_range(a.x.min(b.x) - reach, a.x.max(b.x) + reach, self.width())?;
        let (y0, y1) = Self::clamp_range(a.y.min(b.y) - reach, a.y.max(b.y) + reach, self.height())?;

        let width = self.width() as usize;
        let dx = b.x - a.x;
        let dy = b.y - a.y;
        let length_squared = dx * dx + dy * dy;

        for y in y0..=y1 {
            let py = y as f64 + 0.5;

            for x in x0..=x1 {
                let px = x as f64 + 0.5;
                let t = if length_squared > 0.0 {
                    (((px - a.x) * dx + (py - a.y) * dy) / length_squared).clamp(0.0, 1.0)
                } else {
                    0.0
                };
                let distance = ((px - (a.x + t * dx)).powi(2) + (py - (a.y + t * dy)).powi(2)).sqrt();
                let coverage = (half_width + 0.5 - distance).clamp(0.0, 1.0) as f32;

                if coverage > 0.0 {
                    let cell = &mut self.coverage[y as usize * width + x as usize];
                    *cell = cell.max(coverage);
                }
            }
        }

        Some(Span { x0, y0, x1, y1 })
    }

    /// Composites the mask inside `span` with `colour` and zeroes it again.
    fn flush_coverage(&mut self, span: Span, colour: Rgba) {
        let width = self.width() as usize;

        for y in span.y0..=span.y1 {
            for x in span.x0..=span.x1 {
                let cell = &mut self.coverage[y as usize * width + x as usize];

                if *cell > 0.0 {
                    self.buffer.blend_at(x, y, colour, *cell);
                    *cell = 0.0;
                }
            }
        }
    }
}

/// Cuts a polyline into the visible pieces of a dash pattern, carrying the
/// pattern phase across vertices.
fn dash_segments(points: &[ScreenPoint], dash: Dash) -> Vec<(ScreenPoint, ScreenPoint)> {
    let period = dash.on + dash.off;

    if !(dash.on > 0.0) || !(period > 0.0) || !period.is_finite() {
        return points.windows(2).map(|pair| (pair[0], pair[1])).collect();
    }

    let mut pieces = Vec::new();
    let mut phase = 0.0;

    for pair in points.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        let length = ((b.x - a.x).powi(2) + (b.y - a.y).powi(2)).sqrt();

        if !length.is_finite() || length == 0.0 {
            continue;
        }

        let at = |distance: f64| ScreenPoint {
            x: a.x + (b.x - a.x) * distance / length,
            y: a.y + (b.y - a.y) * distance / length,
        };
        let mut travelled = 0.0;

        while travelled < length {
            let in_on = phase < dash.on;
            let remaining_in_state = if in_on { dash.on - phase } else { period - phase };
            let step = remaining_in_state.min(length - travelled);

            if in_on {
                pieces.push((at(travelled), at(travelled + step)));
            }

            travelled += step;
            phase = (phase + step) % period;
        }
    }

    pieces
}

impl DrawSurface for PixelCanvas {
    fn width(&self) -> u32 {
        self.buffer.pixel_rect().width()
    }

    fn height(&self) -> u32 {
        self.buffer.pixel_rect().height()
    }

    fn clear(&mut self, colour: Colour) {
        self.buffer.fill(colour);
    }

    fn stroke_line(&mut self, from: ScreenPoint, to: ScreenPoint, stroke: &Stroke) {
        self.stroke_polyline(&[from, to], stroke);
    }

    fn stroke_polyline(&mut self, points: &[ScreenPoint], stroke: &Stroke) {
        if points.len() < 2 || !(stroke.width > 0.0) {
            return;
        }

        let pieces = match stroke.dash {
            Some(dash) => dash_segments(points, dash),
            None => points.windows(2).map(|pair| (pair[0], pair[1])).collect(),
        };
        let half_width = stroke.width / 2.0;
        let mut touched: Option<Span> = None;

        for (a, b) in pieces {
            if let Some(span) = self.rasterise_segment(a, b, half_width) {
                touched = Some(touched.map_or(span, |t| t.union(span)));
            }
        }

        if let Some(span) = touched {
            self.flush_coverage(span, stroke.colour);
        }
    }

    fn fill_rect(&mut self, rect: ScreenRect, colour: Rgba) {
        let rect = rect.normalized();
        // A pixel is inside when its centre is; the far edge is exclusive.
        let first_x = (rect.x - 0.5).ceil();
        let end_x = (rect.right() - 0.5).ceil();
        let first_y = (rect.y - 0.5).ceil();
        let end_y = (rect.bottom() - 0.5).ceil();

        if end_x <= first_x || end_y <= first_y {
            return;
        }

        let Some((x0, x1)) = Self::clamp_range(first_x, end_x - 1.0, self.width()) else {
            return;
        };
        let Some((y0, y1)) = Self::clamp_range(first_y, end_y - 1.0, self.height()) else {
            return;
        };

        for y in y0..=y1 {
            for x in x0..=x1 {
                self.buffer.blend_at(x, y, colour, 1.0);
            }
        }
    }

    fn stroke_rect(&mut self, rect: ScreenRect, stroke: &Stroke) {
        let rect = rect.normalized();
        let outline = [
            ScreenPoint::new(rect.x, rect.y),
            ScreenPoint::new(rect.right(), rect.y),
            ScreenPoint::new(rect.right(), rect.bottom()),
            ScreenPoint::new(rect.x, rect.bottom()),
            ScreenPoint::new(rect.x, rect.y),
        ];

        self.stroke_polyline(&outline, stroke);
    }

    fn fill_circle(&mut self, center: ScreenPoint, radius: f64, colour: Rgba) {
        if !(radius > 0.0) {
            return;
        }

        let Some((x0, x1)) =
            Self::clamp_range(center.x - radius - 1.0, center.x + radius + 1.0, self.width())
        else {
            return;
        };
        let Some((y0, y1)) =
            Self::clamp_range(center.y - radius - 1.0, center.y + radius + 1.0, self.height())
        else {
            return;
        };

        for y in y0..=y1 {
            for x in x0..=x1 {
                let distance =
                    ((x as f64 + 0.5 - center.x).powi(2) + (y as f64 + 0.5 - center.y).powi(2)).sqrt();
                let coverage = (radius + 0.5 - distance).clamp(0.0, 1.0) as f32;

                self.buffer.blend_at(x, y, colour, coverage);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::point::Point;

    const RED: Colour = Colour::rgb(255, 0, 0);

    fn pixel(canvas: &PixelCanvas, x: i32, y: i32) -> Colour {
        canvas.buffer().pixel(Point { x, y }).unwrap()
    }

    #[test]
    fn test_new_canvas_is_white() {
        let canvas = PixelCanvas::new(4, 3).unwrap();

        assert_eq!(canvas.width(), 4);
        assert_eq!(canvas.height(), 3);
        assert!(canvas.buffer().buffer().iter().all(|&b| b == 255));
    }

    #[test]
    fn test_new_canvas_rejects_degenerate_size() {
        assert!(PixelCanvas::new(1, 10).is_err());
    }

    #[test]
    fn test_clear_fills_with_colour() {
        let mut canvas = PixelCanvas::new(4, 4).unwrap();

        canvas.clear(RED);

        assert_eq!(pixel(&canvas, 3, 3), RED);
    }

    #[test]
    fn test_fill_rect_covers_pixel_centres() {
        let mut canvas = PixelCanvas::new(10, 10).unwrap();

        canvas.fill_rect(ScreenRect::new(2.0, 3.0, 3.0, 2.0), RED.opaque());

        assert_eq!(pixel(&canvas, 2, 3), RED);
        assert_eq!(pixel(&canvas, 4, 4), RED);
        assert_eq!(pixel(&canvas, 5, 4), Colour::WHITE);
        assert_eq!(pixel(&canvas, 2, 5), Colour::WHITE);
        assert_eq!(pixel(&canvas, 1, 3), Colour::WHITE);
    }

    #[test]
    fn test_fill_rect_with_negative_height() {
        let mut canvas = PixelCanvas::new(10, 10).unwrap();

        canvas.fill_rect(ScreenRect::new(0.0, 8.0, 2.0, -3.0), RED.opaque());

        assert_eq!(pixel(&canvas, 0, 5), RED);
        assert_eq!(pixel(&canvas, 1, 7), RED);
        assert_eq!(pixel(&canvas, 1, 8), Colour::WHITE);
    }

    #[test]
    fn test_fill_rect_off_surface_is_ignored() {
        let mut canvas = PixelCanvas::new(10, 10).unwrap();
        let before = canvas.buffer().clone();

        canvas.fill_rect(ScreenRect::new(20.0, 20.0, 5.0, 5.0), RED.opaque());
        canvas.fill_rect(ScreenRect::new(-9.0, 0.0, 5.0, 5.0), RED.opaque());

        assert_eq!(canvas.buffer(), &before);
    }

    #[test]
    fn test_translucent_fill_blends() {
        let mut canvas = PixelCanvas::new(4, 4).unwrap();

        canvas.fill_rect(ScreenRect::new(0.0, 0.0, 4.0, 4.0), Colour::BLACK.with_alpha(0.5));

        assert_eq!(pixel(&canvas, 1, 1), Colour::rgb(128, 128, 128));
    }

    #[test]
    fn test_horizontal_line_covers_its_row() {
        let mut canvas = PixelCanvas::new(20, 10).unwrap();

        canvas.stroke_line(
            ScreenPoint::new(0.0, 5.5),
            ScreenPoint::new(20.0, 5.5),
            &Stroke::solid(RED, 1.0),
        );

        for x in 0..20 {
            assert_eq!(pixel(&canvas, x, 5), RED);
        }
        assert_eq!(pixel(&canvas, 10, 2), Colour::WHITE);
        assert_eq!(pixel(&canvas, 10, 8), Colour::WHITE);
    }

    #[test]
    fn test_translucent_polyline_does_not_double_blend_at_joints() {
        let mut canvas = PixelCanvas::new(20, 10).unwrap();
        let stroke = Stroke::solid(Colour::BLACK.with_alpha(0.5), 1.0);

        canvas.stroke_polyline(
            &[
                ScreenPoint::new(0.0, 5.5),
                ScreenPoint::new(10.5, 5.5),
                ScreenPoint::new(20.0, 5.5),
            ],
            &stroke,
        );

        assert_eq!(pixel(&canvas, 10, 5), pixel(&canvas, 3, 5));
        assert_eq!(pixel(&canvas, 10, 5), Colour::rgb(128, 128, 128));
    }

    #[test]
    fn test_dashed_line_leaves_gaps() {
        let mut canvas = PixelCanvas::new(20, 4).unwrap();

        canvas.stroke_line(
            ScreenPoint::new(0.0, 1.5),
            ScreenPoint::new(20.0, 1.5),
            &Stroke::solid(RED, 1.0).dashed(5.0, 5.0),
        );

        assert_eq!(pixel(&canvas, 2, 1), RED);
        assert_eq!(pixel(&canvas, 7, 1), Colour::WHITE);
        assert_eq!(pixel(&canvas, 12, 1), RED);
        assert_eq!(pixel(&canvas, 17, 1), Colour::WHITE);
    }

    #[test]
    fn test_dash_phase_carries_across_vertices() {
        let points = [
            ScreenPoint::new(0.0, 0.0),
            ScreenPoint::new(3.0, 0.0),
            ScreenPoint::new(10.0, 0.0),
        ];

        let pieces = dash_segments(&points, Dash { on: 5.0, off: 5.0 });

        assert_eq!(pieces.len(), 2);
        assert_eq!(pieces[0], (ScreenPoint::new(0.0, 0.0), ScreenPoint::new(3.0, 0.0)));
        assert_eq!(pieces[1], (ScreenPoint::new(3.0, 0.0), ScreenPoint::new(5.0, 0.0)));
    }

    #[test]
    fn test_far_off_surface_line_is_ignored() {
        let mut canvas = PixelCanvas::new(10, 10).unwrap();
        let before = canvas.buffer().clone();

        canvas.stroke_line(
            ScreenPoint::new(0.0, -5000.0),
            ScreenPoint::new(1.0, -4000.0),
            &Stroke::solid(RED, 2.0),
        );
        canvas.stroke_line(
            ScreenPoint::new(f64::NAN, 0.0),
            ScreenPoint::new(1.0, 1.0),
            &Stroke::solid(RED, 2.0),
        );

        assert_eq!(canvas.buffer(), &before);
    }

    #[test]
    fn test_fill_circle_paints_centre_not_corners() {
        let mut canvas = PixelCanvas::new(20, 20).unwrap();

        canvas.fill_circle(ScreenPoint::new(10.0, 10.0), 4.0, RED.opaque());

        assert_eq!(pixel(&canvas, 10, 10), RED);
        assert_eq!(pixel(&canvas, 9, 9), RED);
        assert_eq!(pixel(&canvas, 4, 4), Colour::WHITE);
        assert_eq!(pixel(&canvas, 16, 16), Colour::WHITE);
    }

    #[test]
    fn test_stroke_rect_outlines_without_filling() {
        let mut canvas = PixelCanvas::new(20, 20).unwrap();

        canvas.stroke_rect(ScreenRect::new(2.5, 2.5, 10.0, 10.0), &Stroke::solid(RED, 1.0));

        assert_eq!(pixel(&canvas, 2, 7), RED);
        assert_eq!(pixel(&canvas, 7, 12), RED);
        assert_eq!(pixel(&canvas, 7, 7), Colour::WHITE);
    }

    #[test]
    fn test_resize_reallocates_blank_canvas() {
        let mut canvas = PixelCanvas::new(4, 4).unwrap();
        canvas.clear(RED);

        canvas.resize(8, 6).unwrap();

        assert_eq!(canvas.width(), 8);
        assert_eq!(canvas.height(), 6);
        assert_eq!(pixel(&canvas, 7, 5), Colour::WHITE);
    }
}
