use std::error::Error;
use std::fmt;

use crate::core::data::world_rect::WorldRectError;
use crate::core::util::coordinate_mapper::CoordinateMapperError;

#[derive(Debug, Clone, PartialEq)]
pub enum RenderError {
    Mapping(CoordinateMapperError),
    Region(WorldRectError),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mapping(err) => write!(f, "cannot map world to surface: {}", err),
            Self::Region(err) => write!(f, "invalid display region: {}", err),
        }
    }
}

impl Error for RenderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Mapping(err) => Some(err),
            Self::Region(err) => Some(err),
        }
    }
}

impl From<CoordinateMapperError> for RenderError {
    fn from(err: CoordinateMapperError) -> Self {
        Self::Mapping(err)
    }
}

impl From<WorldRectError> for RenderError {
    fn from(err: WorldRectError) -> Self {
        Self::Region(err)
    }
}
