use std::fmt;

use crate::core::data::screen_point::ScreenRect;
use crate::core::data::world_point::WorldPoint;
use crate::core::data::world_rect::{WorldRect, WorldRectError};
use crate::core::drawing::axes::draw_axes;
use crate::core::drawing::ports::surface::DrawSurface;
use crate::core::drawing::style::Stroke;
use crate::core::util::coordinate_mapper::CoordinateMapper;
use crate::core::util::sample_columns::sample_columns;
use crate::core::visualizers::errors::RenderError;
use crate::core::visualizers::palette;
use crate::core::visualizers::ports::visualizer::Visualizer;
use crate::core::visualizers::riemann::errors::RiemannError;
use crate::core::visualizers::riemann::integral::{
    LOWER_BOUND, RiemannSummary, UPPER_BOUND, curve, subintervals,
};
use crate::core::visualizers::riemann::params::RiemannParams;
use crate::core::visualizers::riemann::sampling_rule::SamplingRule;
use crate::core::visualizers::visualizer_kinds::VisualizerKinds;

/// Visible part of the plane: `x ∈ [-2, 5]`, `y ∈ [-1, 6]`.
pub fn display_region() -> Result<WorldRect, WorldRectError> {
    WorldRect::new(WorldPoint::new(-2.0, -1.0), WorldPoint::new(5.0, 6.0))
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiemannReadout {
    pub subdivisions: u32,
    pub rule: SamplingRule,
    pub summary: RiemannSummary,
}

impl fmt::Display for RiemannReadout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n = {}, {}: {}", self.subdivisions, self.rule, self.summary)
    }
}

/// Shades the rectangles of a Riemann sum under a fixed cubic.
#[derive(Debug)]
pub struct RiemannVisualizer<S: DrawSurface> {
    surface: S,
    params: RiemannParams,
}

impl<S: DrawSurface> RiemannVisualizer<S> {
    pub fn new(surface: S, params: RiemannParams) -> Self {
        Self { surface, params }
    }

    #[must_use]
    pub fn params(&self) -> &RiemannParams {
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

    pub fn set_subdivisions(&mut self, n: u32) -> Result<(), RiemannError> {
        self.params.set_subdivisions(n)
    }

    pub fn set_rule(&mut self, rule: SamplingRule) {
        self.params.set_rule(rule);
    }

    pub fn mapper(&self) -> Result<CoordinateMapper, RenderError> {
        Ok(CoordinateMapper::from_world_rect(
            display_region()?,
            self.surface.width(),
            self.surface.height(),
        )?)
    }
}

impl<S: DrawSurface> Visualizer for RiemannVisualizer<S> {
    type Readout = RiemannReadout;

    fn kind(&self) -> VisualizerKinds {
        VisualizerKinds::Riemann
    }

    fn render(&mut self) -> Result<Self::Readout, RenderError> {
        let mapper = self.mapper()?;
        let n = self.params.subdivisions();
        let rule = self.params.rule();

        self.surface.clear(palette::BACKGROUND);
        draw_axes(&mut self.surface, &mapper, &Stroke::solid(palette::AXIS, 1.0));

        let samples = sample_columns(&mapper, self.surface.width(), curve);
        self.surface
            .stroke_polyline(&samples.polyline(&mapper), &Stroke::solid(palette::CURVE, 2.0));

        let parts = subintervals(curve, LOWER_BOUND, UPPER_BOUND, n, rule);
        let edge = Stroke::solid(palette::RIEMANN_EDGE, 1.0);
        for part in &parts {
            let rect = ScreenRect::from_corners(
                mapper.to_screen(WorldPoint::new(part.left, part.height)),
                mapper.to_screen(WorldPoint::new(part.right, 0.0)),
            );

            self.surface.fill_rect(rect, palette::RIEMANN_FILL);
            self.surface.stroke_rect(rect, &edge);
        }

        let readout = RiemannReadout {
            subdivisions: n,
            rule,
            summary: RiemannSummary::from_parts(&parts),
        };
        log::debug!("rendered riemann: {}", readout);

        Ok(readout)
    }
}
