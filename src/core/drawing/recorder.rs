use crate::core::data::colour::{Colour, Rgba};
use crate::core::data::screen_point::{ScreenPoint, ScreenRect};
use crate::core::drawing::ports::surface::DrawSurface;
use crate::core::drawing::style::Stroke;

/// One call made against a `DrawSurface`.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Colour),
    Line {
        from: ScreenPoint,
        to: ScreenPoint,
        stroke: Stroke,
    },
    Polyline {
        points: Vec<ScreenPoint>,
        stroke: Stroke,
    },
    FillRect {
        rect: ScreenRect,
        colour: Rgba,
    },
    StrokeRect {
        rect: ScreenRect,
        stroke: Stroke,
    },
    FillCircle {
        center: ScreenPoint,
        radius: f64,
        colour: Rgba,
    },
}

/// Surface that keeps the draw calls instead of rasterising them.
///
/// `clear` drops everything recorded so far, mirroring a full redraw.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCommandRecorder {
    width: u32,
    height: u32,
    commands: Vec<DrawCommand>,
}

impl DrawCommandRecorder {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn polylines(&self) -> impl Iterator<Item = (&[ScreenPoint], &Stroke)> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Polyline { points, stroke } => Some((points.as_slice(), stroke)),
            _ => None,
        })
    }

    pub fn filled_rects(&self) -> impl Iterator<Item = (&ScreenRect, &Rgba)> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::FillRect { rect, colour } => Some((rect, colour)),
            _ => None,
        })
    }

    pub fn circles(&self) -> impl Iterator<Item = (&ScreenPoint, f64)> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::FillCircle { center, radius, .. } => Some((center, *radius)),
            _ => None,
        })
    }

    pub fn lines(&self) -> impl Iterator<Item = (&ScreenPoint, &ScreenPoint, &Stroke)> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Line { from, to, stroke } => Some((from, to, stroke)),
            _ => None,
        })
    }
}

impl DrawSurface for DrawCommandRecorder {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn clear(&mut self, colour: Colour) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear(colour));
    }

    fn stroke_line(&mut self, from: ScreenPoint, to: ScreenPoint, stroke: &Stroke) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            stroke: *stroke,
        });
    }

    fn stroke_polyline(&mut self, points: &[ScreenPoint], stroke: &Stroke) {
        self.commands.push(DrawCommand::Polyline {
            points: points.to_vec(),
            stroke: *stroke,
        });
    }

    fn fill_rect(&mut self, rect: ScreenRect, colour: Rgba) {
        self.commands.push(DrawCommand::FillRect { rect, colour });
    }

    fn stroke_rect(&mut self, rect: ScreenRect, stroke: &Stroke) {
        self.commands.push(DrawCommand::StrokeRect {
            rect,
            stroke: *stroke,
        });
    }

    fn fill_circle(&mut self, center: ScreenPoint, radius: f64, colour: Rgba) {
        self.commands.push(DrawCommand::FillCircle {
            center,
            radius,
            colour,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_calls_in_order() {
        let mut recorder = DrawCommandRecorder::new(10, 10);
        let stroke = Stroke::solid(Colour::BLACK, 1.0);

        recorder.stroke_line(ScreenPoint::new(0.0, 0.0), ScreenPoint::new(1.0, 1.0), &stroke);
        recorder.fill_circle(ScreenPoint::new(5.0, 5.0), 2.0, Colour::WHITE.opaque());

        assert_eq!(recorder.commands().len(), 2);
        assert!(matches!(recorder.commands()[0], DrawCommand::Line { .. }));
        assert_eq!(recorder.circles().count(), 1);
    }

    #[test]
    fn test_clear_starts_a_new_frame() {
        let mut recorder = DrawCommandRecorder::new(10, 10);
        recorder.fill_rect(ScreenRect::new(0.0, 0.0, 1.0, 1.0), Colour::BLACK.opaque());

        recorder.clear(Colour::WHITE);

        assert_eq!(recorder.commands(), &[DrawCommand::Clear(Colour::WHITE)]);
    }
}
