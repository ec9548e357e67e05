//! Progress reporting for long-running analyses.

use serde::Serialize;

/// Pipeline phase, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum::Display)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Fetching,
    Analyzing,
    #[strum(serialize = "Tooling Detection")]
    ToolingDetection,
    Complete,
}

/// A point-in-time progress snapshot, delivered synchronously to the caller's
/// callback as the pipeline advances.
#[derive(Debug, Clone, Serialize)]
pub struct ProgressUpdate {
    pub phase: Phase,
    /// 0 to 100.
    pub percent: u8,
    pub message: String,
}

impl ProgressUpdate {
    #[must_use]
    pub fn new(phase: Phase, percent: u8, message: impl Into<String>) -> Self {
        Self {
            phase,
            percent: percent.min(100),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_clamped() {
        let update = ProgressUpdate::new(Phase::Fetching, 150, "over");
        assert_eq!(update.percent, 100);
    }

    #[test]
    fn test_phase_display() {
        assert_eq!(Phase::Fetching.to_string(), "Fetching");
        assert_eq!(Phase::ToolingDetection.to_string(), "Tooling Detection");
    }
}
