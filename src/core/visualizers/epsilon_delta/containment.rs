//! Discrete check of the epsilon-delta condition around a limit point.
//!
//! The check samples the delta neighbourhood at a fixed density. A function that
//! leaves the epsilon band and comes back strictly between two samples is reported
//! as contained: this is an approximation for display, not a proof of the limit.

/// Number of steps across `[c - delta, c + delta]`; both endpoints are sampled.
pub const SAMPLE_STEPS: u32 = 100;
/// Samples closer than this to `c` are skipped, the limit ignores `f(c)` itself.
pub const CENTER_EXCLUSION: f64 = 1e-4;

/// The plotted function `f(x) = x² / 2`.
#[must_use]
pub fn target(x: f64) -> f64 {
    0.5 * x * x
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ContainmentStatus {
    Success,
    /// `witness` is the first sampled x whose value leaves the band.
    Fail { witness: f64 },
}

impl ContainmentStatus {
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::Success => {
                "Status: SUCCESS! The delta box is contained within the epsilon band."
            }
            Self::Fail { .. } => {
                "Status: FAIL! The function escapes the epsilon band within your delta range."
            }
        }
    }

    /// Style class the UI uses to colour the status line.
    #[must_use]
    pub const fn style_class(&self) -> &'static str {
        match self {
            Self::Success => "status-success",
            Self::Fail { .. } => "status-fail",
        }
    }
}

/// Checks `|f(x) - f(c)| < epsilon` at every sample `x = c - delta + i * delta / 50`.
pub fn check_containment<F>(f: F, c: f64, epsilon: f64, delta: f64) -> ContainmentStatus
where
    F: Fn(f64) -> f64,
{
    let limit = f(c);
    let step = 2.0 * delta / SAMPLE_STEPS as f64;

    for i in 0..=SAMPLE_STEPS {
        let x = c - delta + i as f64 * step;

        if (x - c).abs() < CENTER_EXCLUSION {
            continue;
        }

        if !((f(x) - limit).abs() < epsilon) {
            return ContainmentStatus::Fail { witness: x };
        }
    }

    ContainmentStatus::Success
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_narrow_delta_is_contained() {
        // f on [1.9, 2.1] stays within [1.805, 2.205], inside [1.5, 2.5]
        let status = check_containment(target, 2.0, 0.5, 0.1);

        assert_eq!(status, ContainmentStatus::Success);
        assert!(status.is_success());
    }

    #[test]
    fn test_wide_delta_escapes() {
        // f(4) = 8 is 6 away from L = 2
        let status = check_containment(target, 2.0, 0.5, 2.0);

        assert!(!status.is_success());
    }

    #[test]
    fn test_witness_is_leftmost_escaping_sample() {
        let status = check_containment(target, 2.0, 0.5, 2.0);

        assert_eq!(status, ContainmentStatus::Fail { witness: 0.0 });
    }

    #[test]
    fn test_band_edge_counts_as_escape() {
        // f(x) = x on [c - 1, c + 1] touches |f - L| = 1 at the endpoints
        let status = check_containment(|x| x, 0.0, 1.0, 1.0);

        assert_eq!(status, ContainmentStatus::Fail { witness: -1.0 });
    }

    #[test]
    fn test_limit_is_value_at_center() {
        let spiked = |x: f64| if x == 3.0 { 100.0 } else { 1.0 };

        let status = check_containment(spiked, 3.0, 0.1, 0.5);

        assert_eq!(status, ContainmentStatus::Fail { witness: 2.5 });
    }

    #[test]
    fn test_samples_next_to_center_are_skipped() {
        // sample 50 lands on c up to rounding; its neighbourhood is excluded
        let hole = |x: f64| {
            if x != 2.0 && (x - 2.0).abs() < CENTER_EXCLUSION {
                100.0
            } else {
                2.0
            }
        };

        assert!(check_containment(hole, 2.0, 0.5, 0.5).is_success());
    }

    #[test]
    fn test_excursion_between_samples_is_missed() {
        // spike narrower than one sampling step, placed between samples 50 and 51
        let spike = |x: f64| if (x - 2.0025).abs() < 1e-4 { 50.0 } else { 2.0 };

        assert!(check_containment(spike, 2.0, 0.5, 0.25).is_success());
    }

    #[test]
    fn test_status_messages_and_classes() {
        let fail = ContainmentStatus::Fail { witness: 1.0 };

        assert!(ContainmentStatus::Success.message().contains("SUCCESS"));
        assert!(fail.message().contains("FAIL"));
        assert_eq!(ContainmentStatus::Success.style_class(), "status-success");
        assert_eq!(fail.style_class(), "status-fail");
    }
}
