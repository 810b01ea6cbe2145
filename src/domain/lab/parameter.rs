//! Extracted lab parameters and their classification against reference ranges.

use serde::{Deserialize, Serialize};

use crate::domain::report::{RiskFinding, RiskLevel};

/// Share of the reference range, measured from either bound, that counts as borderline.
pub const BORDERLINE_MARGIN: f64 = 0.10;

/// Position of a value relative to its reference range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskFlag {
    Normal,
    Low,
    High,
    #[default]
    Unknown,
}

/// Classifies a value; without both bounds the flag is `Unknown`.
pub fn classify(value: f64, ref_min: Option<f64>, ref_max: Option<f64>) -> RiskFlag {
    match (ref_min, ref_max) {
        (Some(min), Some(max)) => {
            if value < min {
                RiskFlag::Low
            } else if value > max {
                RiskFlag::High
            } else {
                RiskFlag::Normal
            }
        }
        _ => RiskFlag::Unknown,
    }
}

/// One lab row, e.g. `Hemoglobin 11.2 g/dL 12-16`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabParameter {
    pub name: String,
    pub value: f64,
    pub unit: String,
    pub ref_min: Option<f64>,
    pub ref_max: Option<f64>,
    pub risk_flag: RiskFlag,
}

impl LabParameter {
    /// Builds a parameter and classifies it.
    pub fn new(
        name: impl Into<String>,
        value: f64,
        unit: impl Into<String>,
        ref_min: Option<f64>,
        ref_max: Option<f64>,
    ) -> Self {
        Self {
            name: name.into(),
            value,
            unit: unit.into(),
            ref_min,
            ref_max,
            risk_flag: classify(value, ref_min, ref_max),
        }
    }

    pub fn has_unit(&self) -> bool {
        !self.unit.trim().is_empty()
    }

    pub fn has_reference_range(&self) -> bool {
        self.ref_min.is_some() && self.ref_max.is_some()
    }

    fn range_width(&self) -> Option<f64> {
        match (self.ref_min, self.ref_max) {
            (Some(min), Some(max)) if max > min => Some(max - min),
            (Some(min), Some(max)) => Some(min.abs().max(max.abs()).max(1.0)),
            _ => None,
        }
    }

    /// In range, but within [`BORDERLINE_MARGIN`] of a bound.
    pub fn is_borderline(&self) -> bool {
        if self.risk_flag != RiskFlag::Normal {
            return false;
        }
        match (self.ref_min, self.ref_max, self.range_width()) {
            (Some(min), Some(max), Some(width)) => {
                let margin = width * BORDERLINE_MARGIN;
                self.value - min <= margin || max - self.value <= margin
            }
            _ => false,
        }
    }

    /// Which bound a borderline value is closer to.
    pub fn nearer_upper_bound(&self) -> bool {
        match (self.ref_min, self.ref_max) {
            (Some(min), Some(max)) => (max - self.value) < (self.value - min),
            _ => false,
        }
    }

    pub fn risk_level(&self) -> RiskLevel {
        match self.risk_flag {
            RiskFlag::High => RiskLevel::High,
            RiskFlag::Low => RiskLevel::Low,
            RiskFlag::Normal if self.is_borderline() => RiskLevel::Borderline,
            RiskFlag::Normal => RiskLevel::Normal,
            RiskFlag::Unknown => RiskLevel::Unknown,
        }
    }

    /// Distance outside the reference range in units of range width (0 inside).
    pub fn deviation(&self) -> Option<f64> {
        let width = self.range_width()?;
        let min = self.ref_min?;
        let max = self.ref_max?;
        let outside = if self.value < min {
            min - self.value
        } else if self.value > max {
            self.value - max
        } else {
            0.0
        };
        Some(outside / width)
    }

    /// A finding for anything that is not plainly normal or unassessed.
    pub fn to_finding(&self) -> Option<RiskFinding> {
        match self.risk_level() {
            RiskLevel::Normal | RiskLevel::Unknown => None,
            level => Some(RiskFinding::for_level(self.name.clone(), level)),
        }
    }

    /// `11.2 g/dL`, or just `11.2` without a unit.
    pub fn display_value(&self) -> String {
        if self.has_unit() {
            format!("{} {}", format_number(self.value), self.unit)
        } else {
            format_number(self.value)
        }
    }

    /// `12-16`, if both bounds are known.
    pub fn display_range(&self) -> Option<String> {
        match (self.ref_min, self.ref_max) {
            (Some(min), Some(max)) => Some(format!("{}-{}", format_number(min), format_number(max))),
            _ => None,
        }
    }
}

/// Drops a trailing `.0` from whole numbers.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{:.0}", value)
    } else {
        format!("{}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::report::SeverityColor;

    #[test]
    fn classify_uses_both_bounds() {
        assert_eq!(classify(11.2, Some(12.0), Some(16.0)), RiskFlag::Low);
        assert_eq!(classify(17.0, Some(12.0), Some(16.0)), RiskFlag::High);
        assert_eq!(classify(14.0, Some(12.0), Some(16.0)), RiskFlag::Normal);
        assert_eq!(classify(12.0, Some(12.0), Some(16.0)), RiskFlag::Normal);
        assert_eq!(classify(14.0, Some(12.0), None), RiskFlag::Unknown);
        assert_eq!(classify(14.0, None, None), RiskFlag::Unknown);
    }

    #[test]
    fn borderline_is_near_a_bound_but_inside() {
        let near_low = LabParameter::new("Hemoglobin", 12.3, "g/dL", Some(12.0), Some(16.0));
        let middle = LabParameter::new("Hemoglobin", 14.0, "g/dL", Some(12.0), Some(16.0));
        let near_high = LabParameter::new("Glucose", 108.0, "mg/dL", Some(70.0), Some(110.0));

        assert!(near_low.is_borderline());
        assert!(!near_low.nearer_upper_bound());
        assert_eq!(near_low.risk_level(), RiskLevel::Borderline);
        assert!(!middle.is_borderline());
        assert_eq!(middle.risk_level(), RiskLevel::Normal);
        assert!(near_high.nearer_upper_bound());
    }

    #[test]
    fn findings_only_for_flagged_parameters() {
        let high = LabParameter::new("Cholesterol", 250.0, "mg/dL", Some(125.0), Some(200.0));
        let normal = LabParameter::new("WBC", 7000.0, "cells/uL", Some(4000.0), Some(11000.0));
        let unknown = LabParameter::new("Vitamin D", 30.0, "ng/mL", None, None);

        let finding = high.to_finding().unwrap();
        assert_eq!(finding.level, RiskLevel::High);
        assert_eq!(finding.severity_color, SeverityColor::Red);
        assert!(normal.to_finding().is_none());
        assert!(unknown.to_finding().is_none());
    }

    #[test]
    fn deviation_is_relative_to_range_width() {
        let high = LabParameter::new("Cholesterol", 250.0, "mg/dL", Some(100.0), Some(200.0));
        assert_eq!(high.deviation(), Some(0.5));

        let inside = LabParameter::new("Cholesterol", 150.0, "mg/dL", Some(100.0), Some(200.0));
        assert_eq!(inside.deviation(), Some(0.0));

        let no_range = LabParameter::new("Cholesterol", 150.0, "mg/dL", None, None);
        assert_eq!(no_range.deviation(), None);
    }

    #[test]
    fn display_helpers_trim_whole_numbers() {
        let param = LabParameter::new("WBC", 7000.0, "cells/uL", Some(4000.0), Some(11000.0));
        assert_eq!(param.display_value(), "7000 cells/uL");
        assert_eq!(param.display_range().unwrap(), "4000-11000");
        assert_eq!(format_number(11.2), "11.2");
    }
}
