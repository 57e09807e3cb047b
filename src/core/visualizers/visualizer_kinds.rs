#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VisualizerKinds {
    #[default]
    Weierstrass,
    EpsilonDelta,
    Riemann,
    Taylor,
}

impl VisualizerKinds {
    pub const ALL: &'static [Self] = &[
        Self::Weierstrass,
        Self::EpsilonDelta,
        Self::Riemann,
        Self::Taylor,
    ];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Weierstrass => "Weierstrass function",
            Self::EpsilonDelta => "Epsilon-delta limit",
            Self::Riemann => "Riemann sums",
            Self::Taylor => "Taylor series",
        }
    }

    /// Short lowercase name used for file names and log lines.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Weierstrass => "weierstrass",
            Self::EpsilonDelta => "epsilon_delta",
            Self::Riemann => "riemann",
            Self::Taylor => "taylor",
        }
    }
}

impl std::fmt::Display for VisualizerKinds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}
