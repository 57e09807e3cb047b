use std::fmt;

use crate::core::drawing::axes::draw_axes;
use crate::core::drawing::ports::surface::DrawSurface;
use crate::core::drawing::style::Stroke;
use crate::core::util::coordinate_mapper::{
    AxisDirection, AxisMapping, CoordinateMapper, CoordinateMapperError,
};
use crate::core::util::sample_columns::sample_columns;
use crate::core::visualizers::errors::RenderError;
use crate::core::visualizers::palette;
use crate::core::visualizers::ports::visualizer::Visualizer;
use crate::core::visualizers::visualizer_kinds::VisualizerKinds;
use crate::core::visualizers::weierstrass::errors::WeierstrassError;
use crate::core::visualizers::weierstrass::pan::DragPan;
use crate::core::visualizers::weierstrass::params::WeierstrassParams;
use crate::core::visualizers::weierstrass::series::{geometric_bound, weierstrass};

/// Horizontal pixels per world unit at zoom 1.
pub const PIXELS_PER_UNIT: f64 = 100.0;
/// Vertical pixels per world unit. Fixed, zoom only stretches x.
pub const VERTICAL_SCALE: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeierstrassReadout {
    pub a: f64,
    pub b: u32,
    pub zoom: f64,
    pub pan_offset: f64,
    pub bound: f64,
}

impl fmt::Display for WeierstrassReadout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "a = {}, b = {}, zoom = {}x, pan = {:.4}, |f| <= {:.4}",
            self.a, self.b, self.zoom, self.pan_offset, self.bound
        )
    }
}

/// Plots the Weierstrass partial sum with drag-to-pan and zoom.
#[derive(Debug)]
pub struct WeierstrassVisualizer<S: DrawSurface> {
    surface: S,
    params: WeierstrassParams,
    drag: DragPan,
}

impl<S: DrawSurface> WeierstrassVisualizer<S> {
    pub fn new(surface: S, params: WeierstrassParams) -> Self {
        Self {
            surface,
            params,
            drag: DragPan::default(),
        }
    }

    #[must_use]
    pub fn params(&self) -> &WeierstrassParams {
        &self.params
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    pub fn set_a(&mut self, a: f64) -> Result<(), WeierstrassError> {
        self.params.set_a(a)
    }

    pub fn set_b(&mut self, b: u32) -> Result<(), WeierstrassError> {
        self.params.set_b(b)
    }

    pub fn set_zoom(&mut self, zoom: f64) -> f64 {
        self.params.set_zoom(zoom)
    }

    pub fn zoom_by(&mut self, factor: f64) -> f64 {
        self.params.zoom_by(factor)
    }

    pub fn reset_view(&mut self) {
        self.params.reset_view();
    }

    pub fn pointer_pressed(&mut self, x: f64) {
        self.drag.press(x);
    }

    /// Pans by the pointer travel, converted at the current zoom. Returns whether the view moved.
    pub fn pointer_moved(&mut self, x: f64) -> bool {
        let Some(dx) = self.drag.move_to(x) else {
            return false;
        };

        self.params.pan_by(-dx / self.horizontal_scale());
        true
    }

    pub fn pointer_released(&mut self) {
        self.drag.release();
    }

    fn horizontal_scale(&self) -> f64 {
        PIXELS_PER_UNIT * self.params.zoom()
    }

    /// Current pan/zoom view: world `pan_offset` at the horizontal centre, `y = 0` at mid-height.
    pub fn mapper(&self) -> Result<CoordinateMapper, CoordinateMapperError> {
        let x = AxisMapping::new(
            self.params.pan_offset(),
            self.horizontal_scale(),
            self.surface.width() as f64 / 2.0,
            AxisDirection::Increasing,
        )?;
        let y = AxisMapping::new(
            0.0,
            VERTICAL_SCALE,
            self.surface.height() as f64 / 2.0,
            AxisDirection::Decreasing,
        )?;

        Ok(CoordinateMapper::new(x, y))
    }

    fn readout(&self) -> WeierstrassReadout {
        WeierstrassReadout {
            a: self.params.a(),
            b: self.params.b(),
            zoom: self.params.zoom(),
            pan_offset: self.params.pan_offset(),
            bound: geometric_bound(self.params.a()),
        }
    }
}

impl<S: DrawSurface> Visualizer for WeierstrassVisualizer<S> {
    type Readout = WeierstrassReadout;

    fn kind(&self) -> VisualizerKinds {
        VisualizerKinds::Weierstrass
    }

    fn render(&mut self) -> Result<Self::Readout, RenderError> {
        let mapper = self.mapper()?;
        let a = self.params.a();
        let b = self.params.b() as f64;

        self.surface.clear(palette::BACKGROUND);
        draw_axes(&mut self.surface, &mapper, &Stroke::solid(palette::AXIS_LIGHT, 1.0));

        let samples = sample_columns(&mapper, self.surface.width(), |x| weierstrass(a, b, x));
        self.surface.stroke_polyline(
            &samples.polyline(&mapper),
            &Stroke::solid(palette::WEIERSTRASS_CURVE, 1.5),
        );

        let readout = self.readout();
        log::debug!("rendered weierstrass: {}", readout);

        Ok(readout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::screen_point::ScreenPoint;
    use crate::core::drawing::recorder::{DrawCommand, DrawCommandRecorder};
    use approx::assert_abs_diff_eq;

    fn visualizer() -> WeierstrassVisualizer<DrawCommandRecorder> {
        WeierstrassVisualizer::new(DrawCommandRecorder::new(600, 400), WeierstrassParams::default())
    }

    #[test]
    fn test_render_draws_axes_then_one_sample_per_column() {
        let mut visualizer = visualizer();

        visualizer.render().unwrap();

        let recorder = visualizer.surface();
        assert!(matches!(recorder.commands()[0], DrawCommand::Clear(_)));
        assert_eq!(recorder.lines().count(), 2);
        let polylines: Vec<_> = recorder.polylines().collect();
        assert_eq!(polylines.len(), 1);
        assert_eq!(polylines[0].0.len(), 600);
    }

    #[test]
    fn test_curve_at_centre_column_is_value_at_pan_offset() {
        let mut visualizer = visualizer();

        visualizer.render().unwrap();

        let (points, _) = visualizer.surface().polylines().next().unwrap();
        let expected_y = 200.0 - weierstrass(0.5, 7.0, 0.0) * VERTICAL_SCALE;
        assert_abs_diff_eq!(points[300].y, expected_y, epsilon = 1e-9);
    }

    #[test]
    fn test_y_axis_follows_pan_and_zoom() {
        let mut visualizer = visualizer();
        visualizer.set_zoom(2.0);
        visualizer.pointer_pressed(0.0);
        visualizer.pointer_moved(-100.0);

        visualizer.render().unwrap();

        // dragging 100px left at zoom 2 pans +0.5 world units
        assert_abs_diff_eq!(visualizer.params().pan_offset(), 0.5, epsilon = 1e-12);
        let lines: Vec<_> = visualizer.surface().lines().collect();
        assert_eq!(lines[0].0, &ScreenPoint::new(0.0, 200.0));
        assert_abs_diff_eq!(lines[1].0.x, 300.0 - 0.5 * 200.0, epsilon = 1e-9);
    }

    #[test]
    fn test_pan_speed_is_consistent_across_zoom() {
        let mut slow = visualizer();
        let mut fast = visualizer();
        slow.set_zoom(1.0);
        fast.set_zoom(4.0);

        for v in [&mut slow, &mut fast] {
            v.pointer_pressed(10.0);
            v.pointer_moved(50.0);
        }

        let slow_screen = slow.params().pan_offset() * PIXELS_PER_UNIT * 1.0;
        let fast_screen = fast.params().pan_offset() * PIXELS_PER_UNIT * 4.0;
        assert_abs_diff_eq!(slow_screen, fast_screen, epsilon = 1e-9);
        assert_abs_diff_eq!(slow_screen, -40.0, epsilon = 1e-9);
    }

    #[test]
    fn test_move_after_release_does_not_pan() {
        let mut visualizer = visualizer();
        visualizer.pointer_pressed(0.0);
        visualizer.pointer_released();

        assert!(!visualizer.pointer_moved(250.0));
        assert_eq!(visualizer.params().pan_offset(), 0.0);
    }

    #[test]
    fn test_reset_restores_view() {
        let mut visualizer = visualizer();
        visualizer.set_zoom(8.0);
        visualizer.pointer_pressed(0.0);
        visualizer.pointer_moved(30.0);

        visualizer.reset_view();
        let readout = visualizer.render().unwrap();

        assert_eq!(readout.zoom, 1.0);
        assert_eq!(readout.pan_offset, 0.0);
    }

    #[test]
    fn test_readout_formats_zoom_with_suffix() {
        let mut visualizer = visualizer();

        let readout = visualizer.render().unwrap();

        assert_eq!(
            readout.to_string(),
            "a = 0.5, b = 7, zoom = 1x, pan = 0.0000, |f| <= 2.0000"
        );
    }
}
