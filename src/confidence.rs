//! Detection confidence scoring.
//!
//! Every heuristic in the pipeline (content detection, navigation
//! detection, order resolution) reports how trustworthy its result is as
//! a value in `[0, 1]`, with named buckets for human-readable reporting.

use serde::{Deserialize, Serialize};

/// A `[0, 1]` score summarizing how trustworthy a detection result is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DetectionConfidence(f64);

impl DetectionConfidence {
    /// Build a confidence from a raw value, clamped to `[0, 1]`.
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self(value.clamp(0.0, 1.0))
    }

    /// No detection (0.0).
    #[must_use]
    pub fn none() -> Self {
        Self(0.0)
    }

    /// Low confidence (0.3).
    #[must_use]
    pub fn low() -> Self {
        Self(0.3)
    }

    /// Medium confidence (0.6).
    #[must_use]
    pub fn medium() -> Self {
        Self(0.6)
    }

    /// High confidence (0.8).
    #[must_use]
    pub fn high() -> Self {
        Self(0.8)
    }

    /// Raw value in `[0, 1]`.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Whether the result can be relied on without review (>= 0.5).
    #[must_use]
    pub fn is_reliable(self) -> bool {
        self.0 >= 0.5
    }

    /// Bucket name for reporting.
    #[must_use]
    pub fn bucket(self) -> &'static str {
        if self.0 >= 0.8 {
            "high"
        } else if self.0 >= 0.6 {
            "medium"
        } else if self.0 >= 0.3 {
            "low"
        } else {
            "none"
        }
    }
}

impl Default for DetectionConfidence {
    fn default() -> Self {
        Self::none()
    }
}

impl std::fmt::Display for DetectionConfidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({:.2})", self.bucket(), self.0)
    }
}
