use crate::error::{PostureError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// ComplianceScore
// ---------------------------------------------------------------------------

/// A compliance percentage in [0, 100], computed upstream and passed in.
/// Absent scores default to 0.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "u32", into = "u32")]
pub struct ComplianceScore(u8);

impl TryFrom<u32> for ComplianceScore {
    type Error = PostureError;

    fn try_from(value: u32) -> Result<Self> {
        Self::new(value)
    }
}

impl From<ComplianceScore> for u32 {
    fn from(score: ComplianceScore) -> u32 {
        u32::from(score.0)
    }
}

impl ComplianceScore {
    pub fn new(value: u32) -> Result<Self> {
        if value > 100 {
            return Err(PostureError::InvalidScore(value));
        }
        Ok(Self(value as u8))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Badge label and severity for the overall framework card.
    /// Bands are evaluated top-down; lower bounds are inclusive.
    pub fn badge(self) -> StatusBadge {
        if self.0 >= 95 {
            StatusBadge {
                label: "Compliant",
                severity: BadgeSeverity::Positive,
            }
        } else if self.0 >= 80 {
            StatusBadge {
                label: "Nearly Compliant",
                severity: BadgeSeverity::Secondary,
            }
        } else if self.0 >= 50 {
            StatusBadge {
                label: "In Progress",
                severity: BadgeSeverity::Neutral,
            }
        } else {
            StatusBadge {
                label: "Needs Attention",
                severity: BadgeSeverity::Destructive,
            }
        }
    }

    /// Text color for the inline live percentage number. Uses its own
    /// threshold set (80/60), distinct from the badge bands (95/80/50);
    /// the two serve different display purposes and must not be unified.
    pub fn color(self) -> ScoreColor {
        if self.0 >= 80 {
            ScoreColor::Positive
        } else if self.0 >= 60 {
            ScoreColor::Warning
        } else {
            ScoreColor::Negative
        }
    }
}

impl fmt::Display for ComplianceScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

// ---------------------------------------------------------------------------
// StatusBadge
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeSeverity {
    Positive,
    Secondary,
    Neutral,
    Destructive,
}

impl fmt::Display for BadgeSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BadgeSeverity::Positive => "positive",
            BadgeSeverity::Secondary => "secondary",
            BadgeSeverity::Neutral => "neutral",
            BadgeSeverity::Destructive => "destructive",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusBadge {
    pub label: &'static str,
    pub severity: BadgeSeverity,
}

// ---------------------------------------------------------------------------
// ScoreColor
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreColor {
    Positive,
    Warning,
    Negative,
}

impl fmt::Display for ScoreColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ScoreColor::Positive => "positive",
            ScoreColor::Warning => "warning",
            ScoreColor::Negative => "negative",
        };
        f.write_str(s)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn badge_label(value: u32) -> &'static str {
        ComplianceScore::new(value).unwrap().badge().label
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(ComplianceScore::new(101).is_err());
        assert!(ComplianceScore::new(100).is_ok());
    }

    #[test]
    fn default_is_zero() {
        let score = ComplianceScore::default();
        assert_eq!(score.value(), 0);
        assert_eq!(score.badge().label, "Needs Attention");
    }

    #[test]
    fn badge_band_boundaries() {
        assert_eq!(badge_label(100), "Compliant");
        assert_eq!(badge_label(95), "Compliant");
        assert_eq!(badge_label(94), "Nearly Compliant");
        assert_eq!(badge_label(80), "Nearly Compliant");
        assert_eq!(badge_label(79), "In Progress");
        assert_eq!(badge_label(50), "In Progress");
        assert_eq!(badge_label(49), "Needs Attention");
        assert_eq!(badge_label(0), "Needs Attention");
    }

    #[test]
    fn badge_severities() {
        assert_eq!(
            ComplianceScore::new(97).unwrap().badge().severity,
            BadgeSeverity::Positive
        );
        assert_eq!(
            ComplianceScore::new(85).unwrap().badge().severity,
            BadgeSeverity::Secondary
        );
        assert_eq!(
            ComplianceScore::new(60).unwrap().badge().severity,
            BadgeSeverity::Neutral
        );
        assert_eq!(
            ComplianceScore::new(10).unwrap().badge().severity,
            BadgeSeverity::Destructive
        );
    }

    #[test]
    fn badge_is_monotonic_in_score() {
        // Higher score never yields a stricter (worse) badge.
        fn rank(label: &str) -> u8 {
            match label {
                "Needs Attention" => 0,
                "In Progress" => 1,
                "Nearly Compliant" => 2,
                "Compliant" => 3,
                other => panic!("unexpected label {other}"),
            }
        }
        let mut prev = 0;
        for value in 0..=100 {
            let r = rank(badge_label(value));
            assert!(r >= prev, "badge regressed at score {value}");
            prev = r;
        }
    }

    #[test]
    fn color_thresholds_differ_from_badge_bands() {
        let color = |v: u32| ComplianceScore::new(v).unwrap().color();
        assert_eq!(color(80), ScoreColor::Positive);
        assert_eq!(color(79), ScoreColor::Warning);
        assert_eq!(color(60), ScoreColor::Warning);
        assert_eq!(color(59), ScoreColor::Negative);
        // A score of 85 is only "Nearly Compliant" as a badge but already
        // renders positive as an inline number.
        let score = ComplianceScore::new(85).unwrap();
        assert_eq!(score.badge().label, "Nearly Compliant");
        assert_eq!(score.color(), ScoreColor::Positive);
    }

    #[test]
    fn display_renders_percent() {
        assert_eq!(ComplianceScore::new(42).unwrap().to_string(), "42%");
    }

    #[test]
    fn serde_roundtrip_validates_range() {
        let score: ComplianceScore = serde_json::from_str("87").unwrap();
        assert_eq!(score.value(), 87);
        assert_eq!(serde_json::to_string(&score).unwrap(), "87");
        assert!(serde_json::from_str::<ComplianceScore>("150").is_err());
    }
}
