use std::{error::Error, fmt};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TaylorError {
    DegreeTooLarge { degree: u32, max: u32 },
    NonFiniteCenter { center: f64 },
    UnknownFamily(UnknownFamilyError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownFamilyError;

impl fmt::Display for TaylorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegreeTooLarge { degree, max } => {
                write!(f, "degree {} is above the maximum of {}", degree, max)
            }
            Self::NonFiniteCenter { center } => {
                write!(f, "expansion center must be finite, got {}", center)
            }
            Self::UnknownFamily(err) => write!(f, "{}", err),
        }
    }
}

impl fmt::Display for UnknownFamilyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "function must be one of: sin, cos, exp")
    }
}

impl Error for TaylorError {}
impl Error for UnknownFamilyError {}

impl From<UnknownFamilyError> for TaylorError {
    fn from(err: UnknownFamilyError) -> Self {
        Self::UnknownFamily(err)
    }
}
