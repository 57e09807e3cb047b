use std::fmt;

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
use crate::core::visualizers::taylor::errors::TaylorError;
use crate::core::visualizers::taylor::function_family::FunctionFamily;
use crate::core::visualizers::taylor::params::TaylorParams;
use crate::core::visualizers::taylor::polynomial::{is_plottable, taylor_polynomial};
use crate::core::visualizers::visualizer_kinds::VisualizerKinds;

pub const MARKER_RADIUS: f64 = 5.0;

/// Visible part of the plane: `x ∈ [-8, 8]`, `y ∈ [-4, 4]`.
pub fn display_region() -> Result<WorldRect, WorldRectError> {
    WorldRect::new(WorldPoint::new(-8.0, -4.0), WorldPoint::new(8.0, 4.0))
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaylorReadout {
    pub family: FunctionFamily,
    pub degree: u32,
    pub center: f64,
    pub value_at_center: f64,
    /// Pixel columns dropped because the polynomial left the plot limit.
    pub skipped_columns: usize,
}

impl fmt::Display for TaylorReadout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} degree {} about {}: f(c) = {:.4}",
            self.family, self.degree, self.center, self.value_at_center
        )?;

        if self.skipped_columns > 0 {
            write!(f, ", {} columns off scale", self.skipped_columns)?;
        }

        Ok(())
    }
}

/// Overlays a Taylor polynomial on the function it approximates.
#[derive(Debug)]
pub struct TaylorVisualizer<S: DrawSurface> {
    surface: S,
    params: TaylorParams,
}

impl<S: DrawSurface> TaylorVisualizer<S> {
    pub fn new(surface: S, params: TaylorParams) -> Self {
        Self { surface, params }
    }

    #[must_use]
    pub fn params(&self) -> &TaylorParams {
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

    pub fn set_degree(&mut self, degree: u32) -> Result<(), TaylorError> {
        self.params.set_degree(degree)
    }

    pub fn set_center(&mut self, center: f64) -> Result<(), TaylorError> {
        self.params.set_center(center)
    }

    pub fn set_family(&mut self, family: FunctionFamily) {
        self.params.set_family(family);
    }

    pub fn mapper(&self) -> Result<CoordinateMapper, RenderError> {
        Ok(CoordinateMapper::from_world_rect(
            display_region()?,
            self.surface.width(),
            self.surface.height(),
        )?)
    }
}

impl<S: DrawSurface> Visualizer for TaylorVisualizer<S> {
    type Readout = TaylorReadout;

    fn kind(&self) -> VisualizerKinds {
        VisualizerKinds::Taylor
    }

    fn render(&mut self) -> Result<Self::Readout, RenderError> {
        let mapper = self.mapper()?;
        let family = self.params.family();
        let degree = self.params.degree();
        let center = self.params.center();
        let width = self.surface.width();

        self.surface.clear(palette::BACKGROUND);
        draw_axes(&mut self.surface, &mapper, &Stroke::solid(palette::AXIS, 1.0));

        let target = sample_columns(&mapper, width, |x| family.evaluate(x));
        self.surface
            .stroke_polyline(&target.polyline(&mapper), &Stroke::solid(palette::TAYLOR_TARGET, 3.0));

        let polynomial = sample_columns(&mapper, width, |x| taylor_polynomial(family, degree, center, x));
        let runs = polynomial.polylines_where(&mapper, is_plottable);
        let polynomial_stroke = Stroke::solid(palette::TAYLOR_POLYNOMIAL, 2.0);
        for run in &runs {
            self.surface.stroke_polyline(run, &polynomial_stroke);
        }

        let value_at_center = family.evaluate(center);
        self.surface.fill_circle(
            mapper.to_screen(WorldPoint::new(center, value_at_center)),
            MARKER_RADIUS,
            palette::TAYLOR_POLYNOMIAL.into(),
        );

        let drawn: usize = runs.iter().map(Vec::len).sum();
        let readout = TaylorReadout {
            family,
            degree,
            center,
            value_at_center,
            skipped_columns: polynomial.len() - drawn,
        };
        log::debug!("rendered taylor: {}", readout);

        Ok(readout)
    }
}
