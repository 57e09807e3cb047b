use std::{error::Error, fmt};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiemannError {
    ZeroSubdivisions,
    TooManySubdivisions { n: u32, max: u32 },
    UnknownRule(UnknownRuleError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownRuleError;

impl fmt::Display for RiemannError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroSubdivisions => write!(f, "at least one subdivision is required"),
            Self::TooManySubdivisions { n, max } => {
                write!(f, "{} subdivisions requested, at most {} are drawn", n, max)
            }
            Self::UnknownRule(err) => write!(f, "{}", err),
        }
    }
}

impl fmt::Display for UnknownRuleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sampling rule must be one of: left, mid, right")
    }
}

impl Error for RiemannError {}
impl Error for UnknownRuleError {}

impl From<UnknownRuleError> for RiemannError {
    fn from(err: UnknownRuleError) -> Self {
        Self::UnknownRule(err)
    }
}
