use std::{error::Error, fmt};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WeierstrassError {
    AmplitudeOutOfRange { a: f64 },
    ZeroFrequency,
}

impl fmt::Display for WeierstrassError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AmplitudeOutOfRange { a } => {
                write!(f, "amplitude ratio a must lie strictly between 0 and 1, got {}", a)
            }
            Self::ZeroFrequency => {
                write!(f, "frequency multiplier b must be greater than zero")
            }
        }
    }
}

impl Error for WeierstrassError {}
