//! Line-oriented lab report parser.
//!
//! Two passes: a strict grammar (`Name value [unit] [min-max]`) and, when no
//! line fits it, a permissive pass that takes the first standalone number on
//! each line as the value.

use once_cell::sync::Lazy;
use regex::Regex;

use super::LabParameter;

static STRICT_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^(?P<name>[a-z][a-z0-9\-()/\s]*?)\s*:?\s+(?P<value>[-+]?(?:\d+(?:,\d{3})*(?:\.\d+)?|\.\d+))(?:\s*(?P<unit>(?:[a-z%µ/]|10\^)[a-z0-9%/^.µ]*))?(?:\s+(?P<min>\d+(?:,\d{3})*(?:\.\d+)?|\.\d+)\s*(?:-|–|to)\s*(?P<max>\d+(?:,\d{3})*(?:\.\d+)?|\.\d+))?$",
    )
    .expect("strict lab line pattern is valid")
});

static NUMBER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[-+]?(?:\d+(?:,\d{3})*(?:\.\d+)?|\.\d+)").expect("number pattern is valid")
});

static RANGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)(?P<min>\d+(?:,\d{3})*(?:\.\d+)?|\.\d+)\s*(?:-|–|to)\s*(?P<max>\d+(?:,\d{3})*(?:\.\d+)?|\.\d+)",
    )
    .expect("range pattern is valid")
});

/// Parses pasted report text into classified lab parameters.
pub fn parse_lab_lines(text: &str) -> Vec<LabParameter> {
    let lines: Vec<String> = text.lines().map(collapse_whitespace).filter(|l| !l.is_empty()).collect();

    let strict: Vec<LabParameter> = lines.iter().filter_map(|line| parse_strict(line)).collect();
    if !strict.is_empty() {
        return strict;
    }

    lines.iter().filter_map(|line| parse_permissive(line)).collect()
}

fn parse_strict(line: &str) -> Option<LabParameter> {
    let caps = STRICT_LINE.captures(line)?;
    let name = caps.name("name")?.as_str().trim();
    let value = to_float(caps.name("value")?.as_str())?;
    let unit = caps.name("unit").map(|m| m.as_str().trim()).unwrap_or_default();
    let ref_min = caps.name("min").and_then(|m| to_float(m.as_str()));
    let ref_max = caps.name("max").and_then(|m| to_float(m.as_str()));

    Some(LabParameter::new(name, value, unit, ref_min, ref_max))
}

fn parse_permissive(line: &str) -> Option<LabParameter> {
    let number = NUMBER
        .find_iter(line)
        .find(|m| !preceded_by_alphanumeric(line, m.start()))?;
    let value = to_float(number.as_str())?;

    let name = line[..number.start()].trim_matches(|c: char| matches!(c, ' ' | ':' | '-' | '='));
    if name.is_empty() {
        return None;
    }

    let (ref_min, ref_max) = RANGE
        .captures(&line[number.end()..])
        .map(|caps| {
            (
                caps.name("min").and_then(|m| to_float(m.as_str())),
                caps.name("max").and_then(|m| to_float(m.as_str())),
            )
        })
        .unwrap_or((None, None));

    Some(LabParameter::new(name, value, "", ref_min, ref_max))
}

fn preceded_by_alphanumeric(line: &str, index: usize) -> bool {
    line[..index]
        .chars()
        .next_back()
        .is_some_and(|c| c.is_alphanumeric())
}

fn collapse_whitespace(line: &str) -> String {
    line.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Parses a number, tolerating thousands separators.
pub fn to_float(raw: &str) -> Option<f64> {
    raw.replace(',', "").trim().parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::lab::RiskFlag;

    #[test]
    fn parses_full_strict_line() {
        let params = parse_lab_lines("Hemoglobin 11.2 g/dL 12-16");

        assert_eq!(params.len(), 1);
        let hb = &params[0];
        assert_eq!(hb.name, "Hemoglobin");
        assert_eq!(hb.value, 11.2);
        assert_eq!(hb.unit, "g/dL");
        assert_eq!(hb.ref_min, Some(12.0));
        assert_eq!(hb.ref_max, Some(16.0));
        assert_eq!(hb.risk_flag, RiskFlag::Low);
    }

    #[test]
    fn parses_multiple_lines_and_skips_blank_ones() {
        let text = "Hemoglobin 12.8 g/dL 12-16\n\n   WBC   6500 cells/uL 4000-11000  \n";
        let params = parse_lab_lines(text);

        assert_eq!(params.len(), 2);
        assert_eq!(params[1].name, "WBC");
        assert_eq!(params[1].value, 6500.0);
        assert_eq!(params[1].unit, "cells/uL");
        assert_eq!(params[1].risk_flag, RiskFlag::Normal);
    }

    #[test]
    fn range_without_unit_is_not_swallowed_as_unit() {
        let params = parse_lab_lines("Glucose 90 70-110");

        assert_eq!(params[0].unit, "");
        assert_eq!(params[0].ref_min, Some(70.0));
        assert_eq!(params[0].ref_max, Some(110.0));
    }

    #[test]
    fn accepts_colon_to_ranges_and_thousands_separators() {
        let params = parse_lab_lines("Platelets: 2,50,000\nWBC 7,000 cells/uL 4,000 to 11,000");
        let wbc = params.iter().find(|p| p.name == "WBC").unwrap();
        assert_eq!(wbc.value, 7000.0);
        assert_eq!(wbc.ref_min, Some(4000.0));
        assert_eq!(wbc.ref_max, Some(11000.0));
    }

    #[test]
    fn multi_word_names_and_digits_in_names() {
        let params = parse_lab_lines("Total Cholesterol 250 mg/dL 125-200\nHbA1c 5.6 % 4-5.6");

        assert_eq!(params[0].name, "Total Cholesterol");
        assert_eq!(params[0].risk_flag, RiskFlag::High);
        assert_eq!(params[1].name, "HbA1c");
        assert_eq!(params[1].unit, "%");
    }

    #[test]
    fn strict_value_without_range_is_unknown() {
        let params = parse_lab_lines("Cholesterol: 250");

        assert_eq!(params.len(), 1);
        assert_eq!(params[0].name, "Cholesterol");
        assert_eq!(params[0].value, 250.0);
        assert_eq!(params[0].risk_flag, RiskFlag::Unknown);
    }

    #[test]
    fn permissive_pass_handles_loose_formatting() {
        let params = parse_lab_lines("Hemoglobin = 11.2 (ref 12 - 16) g/dL");

        assert_eq!(params.len(), 1);
        assert_eq!(params[0].name, "Hemoglobin");
        assert_eq!(params[0].value, 11.2);
        assert_eq!(params[0].ref_min, Some(12.0));
        assert_eq!(params[0].ref_max, Some(16.0));
    }

    #[test]
    fn permissive_pass_skips_digits_inside_words() {
        let params = parse_lab_lines("HbA1c reading was 6.1 (4 to 5.6)");

        assert_eq!(params.len(), 1);
        assert_eq!(params[0].name, "HbA1c reading was");
        assert_eq!(params[0].value, 6.1);
        assert_eq!(params[0].risk_flag, RiskFlag::High);
    }

    #[test]
    fn free_text_yields_nothing() {
        assert!(parse_lab_lines("Patient feels fine today").is_empty());
        assert!(parse_lab_lines("").is_empty());
        assert!(parse_lab_lines("250").is_empty());
    }

    #[test]
    fn to_float_strips_separators() {
        assert_eq!(to_float("1,234.5"), Some(1234.5));
        assert_eq!(to_float("abc"), None);
    }
}
