use std::error::Error;
use std::fmt;

use crate::core::visualizers::epsilon_delta::errors::EpsilonDeltaError;
use crate::core::visualizers::errors::RenderError;
use crate::core::visualizers::riemann::errors::RiemannError;
use crate::core::visualizers::taylor::errors::TaylorError;
use crate::core::visualizers::weierstrass::errors::WeierstrassError;

/// A rejected control event. The parameters are left as they were.
#[derive(Debug, Clone, PartialEq)]
pub enum ControlError {
    Weierstrass(WeierstrassError),
    EpsilonDelta(EpsilonDeltaError),
    Riemann(RiemannError),
    Taylor(TaylorError),
    Render(RenderError),
}

impl fmt::Display for ControlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Weierstrass(err) => write!(f, "weierstrass: {}", err),
            Self::EpsilonDelta(err) => write!(f, "epsilon-delta: {}", err),
            Self::Riemann(err) => write!(f, "riemann: {}", err),
            Self::Taylor(err) => write!(f, "taylor: {}", err),
            Self::Render(err) => write!(f, "render failed: {}", err),
        }
    }
}

impl Error for ControlError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Weierstrass(err) => Some(err),
            Self::EpsilonDelta(err) => Some(err),
            Self::Riemann(err) => Some(err),
            Self::Taylor(err) => Some(err),
            Self::Render(err) => Some(err),
        }
    }
}

impl From<WeierstrassError> for ControlError {
    fn from(err: WeierstrassError) -> Self {
        Self::Weierstrass(err)
    }
}

impl From<EpsilonDeltaError> for ControlError {
    fn from(err: EpsilonDeltaError) -> Self {
        Self::EpsilonDelta(err)
    }
}

impl From<RiemannError> for ControlError {
    fn from(err: RiemannError) -> Self {
        Self::Riemann(err)
    }
}

impl From<TaylorError> for ControlError {
    fn from(err: TaylorError) -> Self {
        Self::Taylor(err)
    }
}

impl From<RenderError> for ControlError {
    fn from(err: RenderError) -> Self {
        Self::Render(err)
    }
}
