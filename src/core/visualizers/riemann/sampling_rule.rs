use std::fmt;
use std::str::FromStr;

use crate::core::visualizers::riemann::errors::UnknownRuleError;

/// Where in each subinterval the rectangle height is taken.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum SamplingRule {
    #[default]
    Left,
    Midpoint,
    Right,
}

impl SamplingRule {
    pub const ALL: &'static [Self] = &[Self::Left, Self::Midpoint, Self::Right];

    #[must_use]
    pub const fn id(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Midpoint => "mid",
            Self::Right => "right",
        }
    }

    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Left => "Left endpoint",
            Self::Midpoint => "Midpoint",
            Self::Right => "Right endpoint",
        }
    }

    #[must_use]
    pub fn sample_point(&self, left: f64, right: f64) -> f64 {
        match self {
            Self::Left => left,
            Self::Midpoint => (left + right) / 2.0,
            Self::Right => right,
        }
    }
}

impl fmt::Display for SamplingRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for SamplingRule {
    type Err = UnknownRuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|rule| rule.id() == s)
            .ok_or(UnknownRuleError)
    }
}
