use std::{error::Error, fmt};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EpsilonDeltaError {
    NonFiniteCenter { c: f64 },
    NonPositiveEpsilon { epsilon: f64 },
    NonPositiveDelta { delta: f64 },
}

impl fmt::Display for EpsilonDeltaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFiniteCenter { c } => write!(f, "limit point c must be finite, got {}", c),
            Self::NonPositiveEpsilon { epsilon } => {
                write!(f, "epsilon must be finite and positive, got {}", epsilon)
            }
            Self::NonPositiveDelta { delta } => {
                write!(f, "delta must be finite and positive, got {}", delta)
            }
        }
    }
}

impl Error for EpsilonDeltaError {}
