//! Comparison of two reports for the same person.

use serde::Serialize;

use crate::domain::report::Trend;

use super::{format_number, LabParameter};

/// Maximum number of per-parameter changes listed in a hint.
pub const MAX_LISTED_CHANGES: usize = 5;

const EPSILON: f64 = 1e-9;

/// Change of one parameter between two reports.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParameterChange {
    pub name: String,
    pub previous: f64,
    pub current: f64,
}

impl ParameterChange {
    pub fn delta(&self) -> f64 {
        self.current - self.previous
    }

    /// `Hemoglobin increased by 1.20`
    pub fn describe(&self) -> String {
        let delta = self.delta();
        if delta > EPSILON {
            format!("{} increased by {:.2}", self.name, delta)
        } else if delta < -EPSILON {
            format!("{} decreased by {:.2}", self.name, delta.abs())
        } else {
            format!("{} stayed stable", self.name)
        }
    }
}

/// Direction plus a one-line explanation of how it was reached.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendSnapshot {
    pub direction: Trend,
    pub changes: Vec<ParameterChange>,
    pub hint: String,
}

impl TrendSnapshot {
    /// Only one report to look at.
    pub fn single_report() -> Self {
        Self {
            direction: Trend::Stable,
            changes: Vec::new(),
            hint: "Only one report is available, so trend direction is limited.".to_string(),
        }
    }
}

/// Compares parameters shared by name (case-insensitive) between two reports.
///
/// The direction follows the total out-of-range deviation: less is improving,
/// more is worsening.
pub fn compare_reports(previous: &[LabParameter], current: &[LabParameter]) -> TrendSnapshot {
    let mut changes = Vec::new();
    let mut previous_deviation = 0.0;
    let mut current_deviation = 0.0;

    for param in current {
        let Some(before) = previous
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(&param.name))
        else {
            continue;
        };

        changes.push(ParameterChange {
            name: param.name.clone(),
            previous: before.value,
            current: param.value,
        });

        if let (Some(prev_dev), Some(cur_dev)) = (before.deviation(), param.deviation()) {
            previous_deviation += prev_dev;
            current_deviation += cur_dev;
        }
    }

    if changes.is_empty() {
        return TrendSnapshot {
            direction: Trend::Stable,
            changes,
            hint: "Not enough comparable parameters for trend analysis.".to_string(),
        };
    }

    let shift = current_deviation - previous_deviation;
    let direction = if shift < -EPSILON {
        Trend::Improving
    } else if shift > EPSILON {
        Trend::Worsening
    } else {
        Trend::Stable
    };

    let listed: Vec<String> = changes
        .iter()
        .take(MAX_LISTED_CHANGES)
        .map(ParameterChange::describe)
        .collect();

    TrendSnapshot {
        direction,
        changes,
        hint: format!("Trend snapshot: {}.", listed.join("; ")),
    }
}

/// `Cholesterol 250 -> 210 mg/dL`
pub fn describe_movement(change: &ParameterChange, unit: &str) -> String {
    let arrow = format!(
        "{} -> {}",
        format_number(change.previous),
        format_number(change.current)
    );
    if unit.is_empty() {
        format!("{} {}", change.name, arrow)
    } else {
        format!("{} {} {}", change.name, arrow, unit)
    }
}
