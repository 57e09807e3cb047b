use std::fmt;

use crate::core::data::screen_point::{ScreenPoint, ScreenRect};
use crate::core::data::world_point::WorldPoint;
use crate::core::drawing::axes::draw_axes;
use crate::core::drawing::ports::surface::DrawSurface;
use crate::core::drawing::style::Stroke;
use crate::core::util::coordinate_mapper::{
    AxisDirection, AxisMapping, CoordinateMapper, CoordinateMapperError,
};
use crate::core::util::sample_columns::sample_columns;
use crate::core::visualizers::epsilon_delta::containment::{
    ContainmentStatus, check_containment, target,
};
use crate::core::visualizers::epsilon_delta::errors::EpsilonDeltaError;
use crate::core::visualizers::epsilon_delta::params::EpsilonDeltaParams;
use crate::core::visualizers::errors::RenderError;
use crate::core::visualizers::palette;
use crate::core::visualizers::ports::visualizer::Visualizer;
use crate::core::visualizers::visualizer_kinds::VisualizerKinds;

pub const PIXELS_PER_UNIT: f64 = 50.0;
/// Distance from the bottom edge to the row of `y = 0`.
pub const BASELINE_MARGIN: f64 = 50.0;
pub const MARKER_RADIUS: f64 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EpsilonDeltaReadout {
    pub c: f64,
    pub epsilon: f64,
    pub delta: f64,
    pub limit: f64,
    pub status: ContainmentStatus,
}

impl fmt::Display for EpsilonDeltaReadout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "c = {}, epsilon = {}, delta = {}, L = {:.4}. {}",
            self.c,
            self.epsilon,
            self.delta,
            self.limit,
            self.status.message()
        )
    }
}

/// Draws `f(x) = x² / 2` with its epsilon band around `L = f(c)` and the delta box around `c`.
#[derive(Debug)]
pub struct EpsilonDeltaVisualizer<S: DrawSurface> {
    surface: S,
    params: EpsilonDeltaParams,
}

impl<S: DrawSurface> EpsilonDeltaVisualizer<S> {
    pub fn new(surface: S, params: EpsilonDeltaParams) -> Self {
        Self { surface, params }
    }

    #[must_use]
    pub fn params(&self) -> &EpsilonDeltaParams {
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

    pub fn set_c(&mut self, c: f64) -> Result<(), EpsilonDeltaError> {
        self.params.set_c(c)
    }

    pub fn set_epsilon(&mut self, epsilon: f64) -> Result<(), EpsilonDeltaError> {
        self.params.set_epsilon(epsilon)
    }

    pub fn set_delta(&mut self, delta: f64) -> Result<(), EpsilonDeltaError> {
        self.params.set_delta(delta)
    }

    /// World origin at the horizontal centre, `y = 0` just above the bottom edge.
    pub fn mapper(&self) -> Result<CoordinateMapper, CoordinateMapperError> {
        let x = AxisMapping::new(
            0.0,
            PIXELS_PER_UNIT,
            self.surface.width() as f64 / 2.0,
            AxisDirection::Increasing,
        )?;
        let y = AxisMapping::new(
            0.0,
            PIXELS_PER_UNIT,
            self.surface.height() as f64 - BASELINE_MARGIN,
            AxisDirection::Decreasing,
        )?;

        Ok(CoordinateMapper::new(x, y))
    }

    fn draw_epsilon_band(&mut self, mapper: &CoordinateMapper, limit: f64) {
        let width = self.surface.width() as f64;
        let top = mapper.y.to_screen(limit + self.params.epsilon());
        let bottom = mapper.y.to_screen(limit - self.params.epsilon());
        let edge = Stroke::solid(palette::EPSILON_EDGE, 1.0).dashed(5.0, 5.0);

        self.surface
            .fill_rect(ScreenRect::new(0.0, top, width, bottom - top), palette::EPSILON_BAND);
        for row in [top, bottom] {
            self.surface
                .stroke_line(ScreenPoint::new(0.0, row), ScreenPoint::new(width, row), &edge);
        }
    }

    fn draw_delta_band(&mut self, mapper: &CoordinateMapper) {
        let height = self.surface.height() as f64;
        let left = mapper.x.to_screen(self.params.c() - self.params.delta());
        let right = mapper.x.to_screen(self.params.c() + self.params.delta());
        let edge = Stroke::solid(palette::DELTA_EDGE, 1.0).dashed(5.0, 5.0);

        self.surface
            .fill_rect(ScreenRect::new(left, 0.0, right - left, height), palette::DELTA_BAND);
        for column in [left, right] {
            self.surface.stroke_line(
                ScreenPoint::new(column, 0.0),
                ScreenPoint::new(column, height),
                &edge,
            );
        }
    }
}

impl<S: DrawSurface> Visualizer for EpsilonDeltaVisualizer<S> {
    type Readout = EpsilonDeltaReadout;

    fn kind(&self) -> VisualizerKinds {
        VisualizerKinds::EpsilonDelta
    }

    fn render(&mut self) -> Result<Self::Readout, RenderError> {
        let mapper = self.mapper()?;
        let c = self.params.c();
        let limit = target(c);

        self.surface.clear(palette::BACKGROUND);
        draw_axes(&mut self.surface, &mapper, &Stroke::solid(palette::AXIS_LIGHT, 1.0));
        self.draw_epsilon_band(&mapper, limit);
        self.draw_delta_band(&mapper);

        let samples = sample_columns(&mapper, self.surface.width(), target);
        self.surface
            .stroke_polyline(&samples.polyline(&mapper), &Stroke::solid(palette::CURVE, 2.0));
        self.surface.fill_circle(
            mapper.to_screen(WorldPoint::new(c, limit)),
            MARKER_RADIUS,
            palette::LIMIT_POINT.into(),
        );

        let status = check_containment(target, c, self.params.epsilon(), self.params.delta());
        let readout = EpsilonDeltaReadout {
            c,
            epsilon: self.params.epsilon(),
            delta: self.params.delta(),
            limit,
            status,
        };
        log::debug!("rendered epsilon-delta: {}", readout);

        Ok(readout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::drawing::recorder::DrawCommandRecorder;
    use approx::assert_abs_diff_eq;

    fn visualizer(params: EpsilonDeltaParams) -> EpsilonDeltaVisualizer<DrawCommandRecorder> {
        EpsilonDeltaVisualizer::new(DrawCommandRecorder::new(600, 400), params)
    }

    #[test]
    fn test_narrow_delta_reports_success() {
        let mut visualizer = visualizer(EpsilonDeltaParams::new(2.0, 0.5, 0.1).unwrap());

        let readout = visualizer.render().unwrap();

        assert_eq!(readout.limit, 2.0);
        assert_eq!(readout.status, ContainmentStatus::Success);
        assert_eq!(readout.status.style_class(), "status-success");
    }

    #[test]
    fn test_wide_delta_reports_fail() {
        let mut visualizer = visualizer(EpsilonDeltaParams::new(2.0, 0.5, 2.0).unwrap());

        let readout = visualizer.render().unwrap();

        assert!(!readout.status.is_success());
        assert!(readout.to_string().ends_with(
            "Status: FAIL! The function escapes the epsilon band within your delta range."
        ));
    }

    #[test]
    fn test_bands_span_the_surface() {
        let mut visualizer = visualizer(EpsilonDeltaParams::default());

        visualizer.render().unwrap();

        let rects: Vec<_> = visualizer.surface().filled_rects().collect();
        assert_eq!(rects.len(), 2);

        // epsilon band: L = 2, rows for y = 2.5 and y = 1.5
        let (band, colour) = rects[0];
        assert_eq!(*colour, palette::EPSILON_BAND);
        assert_abs_diff_eq!(band.x, 0.0);
        assert_abs_diff_eq!(band.width, 600.0);
        assert_abs_diff_eq!(band.y, 350.0 - 2.5 * 50.0, epsilon = 1e-9);
        assert_abs_diff_eq!(band.bottom(), 350.0 - 1.5 * 50.0, epsilon = 1e-9);

        // delta box: x in [1.5, 2.5]
        let (column, colour) = rects[1];
        assert_eq!(*colour, palette::DELTA_BAND);
        assert_abs_diff_eq!(column.x, 300.0 + 1.5 * 50.0, epsilon = 1e-9);
        assert_abs_diff_eq!(column.right(), 300.0 + 2.5 * 50.0, epsilon = 1e-9);
        assert_abs_diff_eq!(column.height, 400.0);
    }

    #[test]
    fn test_band_edges_are_dashed() {
        let mut visualizer = visualizer(EpsilonDeltaParams::default());

        visualizer.render().unwrap();

        let dashed = visualizer
            .surface()
            .lines()
            .filter(|(_, _, stroke)| stroke.dash.is_some())
            .count();
        assert_eq!(dashed, 4);
    }

    #[test]
    fn test_marks_limit_point() {
        let mut visualizer = visualizer(EpsilonDeltaParams::new(-2.0, 0.3, 0.2).unwrap());

        visualizer.render().unwrap();

        let circles: Vec<_> = visualizer.surface().circles().collect();
        assert_eq!(circles.len(), 1);
        assert_eq!(circles[0].0, &ScreenPoint::new(200.0, 250.0));
        assert_eq!(circles[0].1, MARKER_RADIUS);
    }

    #[test]
    fn test_parameter_change_recomputes_status() {
        let mut visualizer = visualizer(EpsilonDeltaParams::new(2.0, 0.5, 0.1).unwrap());
        assert!(visualizer.render().unwrap().status.is_success());

        visualizer.set_delta(2.0).unwrap();

        assert!(!visualizer.render().unwrap().status.is_success());
    }
}
