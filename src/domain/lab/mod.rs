//! Lab report parsing, classification, trends and narrative text.

mod narrative;
mod parameter;
mod parser;
mod trend;

pub use narrative::{ExplanationKind, LabNarrative};
pub use parameter::{classify, format_number, LabParameter, RiskFlag, BORDERLINE_MARGIN};
pub use parser::{parse_lab_lines, to_float};
pub use trend::{compare_reports, describe_movement, ParameterChange, TrendSnapshot, MAX_LISTED_CHANGES};
