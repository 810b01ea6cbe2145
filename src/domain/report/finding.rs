//! Risk findings and trend direction.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Display color attached to a finding or trend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeverityColor {
    Red,
    Yellow,
    Green,
}

impl fmt::Display for SeverityColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SeverityColor::Red => "red",
            SeverityColor::Yellow => "yellow",
            SeverityColor::Green => "green",
        };
        write!(f, "{}", s)
    }
}

/// How far a parameter sits from where it should be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    High,
    Borderline,
    Low,
    Normal,
    Unknown,
}

impl RiskLevel {
    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::High => "High",
            RiskLevel::Borderline => "Borderline",
            RiskLevel::Low => "Low",
            RiskLevel::Normal => "Normal",
            RiskLevel::Unknown => "Unknown",
        }
    }

    /// Default color for this level.
    pub fn severity_color(&self) -> SeverityColor {
        match self {
            RiskLevel::High | RiskLevel::Low => SeverityColor::Red,
            RiskLevel::Borderline | RiskLevel::Unknown => SeverityColor::Yellow,
            RiskLevel::Normal => SeverityColor::Green,
        }
    }
}

/// A flagged parameter with severity level and display color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskFinding {
    pub parameter: String,
    pub level: RiskLevel,
    #[serde(rename = "color")]
    pub severity_color: SeverityColor,
}

impl RiskFinding {
    /// Creates a finding with an explicit color.
    pub fn new(parameter: impl Into<String>, level: RiskLevel, severity_color: SeverityColor) -> Self {
        Self {
            parameter: parameter.into(),
            level,
            severity_color,
        }
    }

    /// Creates a finding colored by its level.
    pub fn for_level(parameter: impl Into<String>, level: RiskLevel) -> Self {
        Self::new(parameter, level, level.severity_color())
    }
}

/// Qualitative direction of health markers across reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Improving,
    Worsening,
    #[default]
    Stable,
}

impl Trend {
    /// Indicator text shown next to the trend.
    pub fn label(&self) -> &'static str {
        match self {
            Trend::Improving => "↑ Improving",
            Trend::Worsening => "↓ Worsening",
            Trend::Stable => "→ Stable",
        }
    }

    /// Indicator color.
    pub fn color(&self) -> SeverityColor {
        match self {
            Trend::Improving => SeverityColor::Green,
            Trend::Worsening => SeverityColor::Red,
            Trend::Stable => SeverityColor::Yellow,
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Trend::Improving => "improving",
            Trend::Worsening => "worsening",
            Trend::Stable => "stable",
        };
        write!(f, "{}", s)
    }
}
