use std::fmt;
use std::str::FromStr;

use crate::core::visualizers::taylor::errors::UnknownFamilyError;

/// Functions whose derivatives at any point are known in closed form.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum FunctionFamily {
    #[default]
    Sin,
    Cos,
    Exp,
}

impl FunctionFamily {
    pub const ALL: &'static [Self] = &[Self::Sin, Self::Cos, Self::Exp];

    #[must_use]
    pub const fn id(&self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Exp => "exp",
        }
    }

    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Sin => "sin(x)",
            Self::Cos => "cos(x)",
            Self::Exp => "e^x",
        }
    }

    #[must_use]
    pub fn evaluate(&self, x: f64) -> f64 {
        match self {
            Self::Sin => x.sin(),
            Self::Cos => x.cos(),
            Self::Exp => x.exp(),
        }
    }

    /// The `k`-th derivative at `at`. Sine and cosine repeat every four derivatives.
    #[must_use]
    pub fn derivative(&self, k: u32, at: f64) -> f64 {
        match (self, k % 4) {
            (Self::Exp, _) => at.exp(),
            (Self::Sin, 0) | (Self::Cos, 3) => at.sin(),
            (Self::Sin, 1) | (Self::Cos, 0) => at.cos(),
            (Self::Sin, 2) | (Self::Cos, 1) => -at.sin(),
            (Self::Sin, _) | (Self::Cos, _) => -at.cos(),
        }
    }
}

impl fmt::Display for FunctionFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for FunctionFamily {
    type Err = UnknownFamilyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|family| family.id() == s)
            .ok_or(UnknownFamilyError)
    }
}
