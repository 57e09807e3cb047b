use crate::core::data::screen_point::ScreenPoint;
use crate::core::data::world_point::WorldPoint;
use crate::core::data::world_rect::WorldRect;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum CoordinateMapperError {
    NonPositiveScale { scale: f64 },
    NonFiniteAnchor { origin: f64, center: f64 },
    EmptyRange { min: f64, max: f64 },
    EmptyExtent { extent: f64 },
}

impl fmt::Display for CoordinateMapperError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveScale { scale } => {
                write!(f, "axis scale must be finite and positive, got {}", scale)
            }
            Self::NonFiniteAnchor { origin, center } => {
                write!(
                    f,
                    "axis origin and center must be finite, got origin {} center {}",
                    origin, center
                )
            }
            Self::EmptyRange { min, max } => {
                write!(f, "world range [{}, {}] is empty", min, max)
            }
            Self::EmptyExtent { extent } => {
                write!(f, "pixel extent must be positive, got {}", extent)
            }
        }
    }
}

impl Error for CoordinateMapperError {}

/// Which way pixel coordinates run relative to world coordinates.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AxisDirection {
    /// Pixels grow with world values (horizontal axis).
    Increasing,
    /// Pixels grow as world values shrink (vertical axis, rows run downward).
    Decreasing,
}

impl AxisDirection {
    const fn sign(self) -> f64 {
        match self {
            Self::Increasing => 1.0,
            Self::Decreasing => -1.0,
        }
    }
}

/// Affine map for one axis: `pixel = center ± (world - origin) * scale`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AxisMapping {
    origin: f64,
    scale: f64,
    center: f64,
    direction: AxisDirection,
}

impl AxisMapping {
    /// `origin` is the world value drawn at pixel `center`; `scale` is pixels per world unit.
    pub fn new(
        origin: f64,
        scale: f64,
        center: f64,
        direction: AxisDirection,
    ) -> Result<Self, CoordinateMapperError> {
        if !(scale.is_finite() && scale > 0.0) {
            return Err(CoordinateMapperError::NonPositiveScale { scale });
        }

        if !origin.is_finite() || !center.is_finite() {
            return Err(CoordinateMapperError::NonFiniteAnchor { origin, center });
        }

        Ok(Self {
            origin,
            scale,
            center,
            direction,
        })
    }

    /// Maps the world interval `[min, max]` onto `extent` pixels.
    ///
    /// An increasing axis puts `min` at pixel 0, a decreasing one puts `min` at `extent`.
    pub fn from_range(
        min: f64,
        max: f64,
        extent: f64,
        direction: AxisDirection,
    ) -> Result<Self, CoordinateMapperError> {
        if !(max - min > 0.0) || !(max - min).is_finite() {
            return Err(CoordinateMapperError::EmptyRange { min, max });
        }

        if !(extent > 0.0) {
            return Err(CoordinateMapperError::EmptyExtent { extent });
        }

        let center = match direction {
            AxisDirection::Increasing => 0.0,
            AxisDirection::Decreasing => extent,
        };

        Self::new(min, extent / (max - min), center, direction)
    }

    #[must_use]
    pub fn origin(&self) -> f64 {
        self.origin
    }

    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    #[must_use]
    pub fn center(&self) -> f64 {
        self.center
    }

    #[must_use]
    pub fn direction(&self) -> AxisDirection {
        self.direction
    }

    #[must_use]
    pub fn to_screen(&self, world: f64) -> f64 {
        self.center + self.direction.sign() * (world - self.origin) * self.scale
    }

    #[must_use]
    pub fn to_world(&self, pixel: f64) -> f64 {
        self.origin + self.direction.sign() * (pixel - self.center) / self.scale
    }

    /// Converts a pixel distance into the matching world distance.
    #[must_use]
    pub fn pixels_to_world(&self, pixels: f64) -> f64 {
        pixels / self.scale
    }
}

/// Independent horizontal and vertical axis maps for one drawing surface.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CoordinateMapper {
    pub x: AxisMapping,
    pub y: AxisMapping,
}

impl CoordinateMapper {
    #[must_use]
    pub const fn new(x: AxisMapping, y: AxisMapping) -> Self {
        Self { x, y }
    }

    /// Stretches `region` over a `width` x `height` surface, world `y` pointing up.
    pub fn from_world_rect(
        region: WorldRect,
        width: u32,
        height: u32,
    ) -> Result<Self, CoordinateMapperError> {
        let x = AxisMapping::from_range(
            region.min().x,
            region.max().x,
            width as f64,
            AxisDirection::Increasing,
        )?;
        let y = AxisMapping::from_range(
            region.min().y,
            region.max().y,
            height as f64,
            AxisDirection::Decreasing,
        )?;

        Ok(Self { x, y })
    }

    #[must_use]
    pub fn to_screen(&self, world: WorldPoint) -> ScreenPoint {
        ScreenPoint {
            x: self.x.to_screen(world.x),
            y: self.y.to_screen(world.y),
        }
    }

    #[must_use]
    pub fn to_world(&self, screen: ScreenPoint) -> WorldPoint {
        WorldPoint {
            x: self.x.to_world(screen.x),
            y: self.y.to_world(screen.y),
        }
    }
}
