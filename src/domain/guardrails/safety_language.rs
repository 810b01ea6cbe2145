//! Rewrites generated text away from diagnostic, alarming or prescriptive phrasing.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// Appended to any text that does not already carry it.
pub const EDUCATIONAL_NOTICE: &str =
    "This is educational support only, not a diagnosis or prescription.";

const PRESCRIPTION_REPLACEMENT: &str = "discuss treatment options with your clinician";

static DIAGNOSIS_PATTERNS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    [
        (r"(?i)\byou have ([a-z\s-]+)\b", "This pattern may be associated with ${1}"),
        (r"(?i)\bthis confirms ([a-z\s-]+)\b", "This may suggest ${1}"),
        (r"(?i)\bdiagnosed with ([a-z\s-]+)\b", "shows findings related to ${1}"),
    ]
    .into_iter()
    .map(|(pattern, replacement)| {
        (
            Regex::new(pattern).expect("diagnosis pattern is valid"),
            replacement,
        )
    })
    .collect()
});

static ALARM_SOFTENERS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    [
        ("dangerous", "concerning"),
        ("severe", "significant"),
        ("critical", "important"),
        ("emergency", "prompt clinical review"),
        ("immediately", "soon"),
    ]
    .into_iter()
    .map(|(harsh, softer)| {
        (
            Regex::new(&format!(r"(?i)\b{}\b", regex::escape(harsh)))
                .expect("alarm pattern is valid"),
            softer,
        )
    })
    .collect()
});

static PRESCRIPTION_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [r"(?i)\b(start|take|use)\s+[a-z0-9\s-]+\s+mg\b", r"(?i)\bprescribe\b"]
        .into_iter()
        .map(|pattern| Regex::new(pattern).expect("prescription pattern is valid"))
        .collect()
});

/// How many rewrites were made.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LanguageAudit {
    pub diagnosis_rewrites: usize,
    pub alarm_softened: usize,
    pub prescription_removed: usize,
}

impl LanguageAudit {
    pub fn total(&self) -> usize {
        self.diagnosis_rewrites + self.alarm_softened + self.prescription_removed
    }

    pub fn merge(self, other: LanguageAudit) -> LanguageAudit {
        LanguageAudit {
            diagnosis_rewrites: self.diagnosis_rewrites + other.diagnosis_rewrites,
            alarm_softened: self.alarm_softened + other.alarm_softened,
            prescription_removed: self.prescription_removed + other.prescription_removed,
        }
    }
}

fn rewrite(pattern: &Regex, text: String, replacement: &str) -> (String, usize) {
    let count = pattern.find_iter(&text).count();
    if count == 0 {
        return (text, 0);
    }
    (pattern.replace_all(&text, replacement).into_owned(), count)
}

/// Rewrites diagnostic, alarming and prescriptive phrasing without adding
/// the notice. Used for short items such as observations.
pub fn soften_phrasing(text: &str) -> (String, LanguageAudit) {
    let mut value = text.trim().to_string();
    let mut audit = LanguageAudit::default();
    if value.is_empty() {
        return (value, audit);
    }

    for (pattern, replacement) in DIAGNOSIS_PATTERNS.iter() {
        let (next, count) = rewrite(pattern, value, replacement);
        value = next;
        audit.diagnosis_rewrites += count;
    }

    for (pattern, replacement) in ALARM_SOFTENERS.iter() {
        let (next, count) = rewrite(pattern, value, replacement);
        value = next;
        audit.alarm_softened += count;
    }

    for pattern in PRESCRIPTION_PATTERNS.iter() {
        let (next, count) = rewrite(pattern, value, PRESCRIPTION_REPLACEMENT);
        value = next;
        audit.prescription_removed += count;
    }

    (value, audit)
}

/// Returns the rewritten text and what was changed. Blank input stays blank.
pub fn validate_language(text: &str) -> (String, LanguageAudit) {
    let (mut value, audit) = soften_phrasing(text);
    if value.is_empty() {
        return (value, audit);
    }

    if !value.to_lowercase().contains("educational support only") {
        value = format!("{} {}", value.trim_end(), EDUCATIONAL_NOTICE);
    }

    (value, audit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_text_is_untouched() {
        let (text, audit) = validate_language("   ");
        assert_eq!(text, "");
        assert_eq!(audit.total(), 0);
    }

    #[test]
    fn diagnostic_phrasing_is_rewritten() {
        let (text, audit) = validate_language("You have anemia");

        assert!(text.starts_with("This pattern may be associated with anemia"));
        assert_eq!(audit.diagnosis_rewrites, 1);
    }

    #[test]
    fn alarm_words_are_softened() {
        let (text, audit) =
            validate_language("This is dangerous and needs emergency care immediately.");

        assert!(text.starts_with(
            "This is concerning and needs prompt clinical review care soon."
        ));
        assert_eq!(audit.alarm_softened, 3);
    }

    #[test]
    fn prescriptions_are_replaced() {
        let (text, audit) = validate_language("Take atorvastatin 10 mg daily.");

        assert!(text.starts_with("discuss treatment options with your clinician daily."));
        assert_eq!(audit.prescription_removed, 1);
    }

    #[test]
    fn notice_is_appended_once() {
        let (text, _) = validate_language("Values look fine.");
        assert_eq!(text, format!("Values look fine. {}", EDUCATIONAL_NOTICE));

        let (again, _) = validate_language(&text);
        assert_eq!(again, text);
    }

    #[test]
    fn softening_leaves_out_the_notice() {
        let (text, audit) = soften_phrasing("You have diabetes, take metformin 500 mg immediately.");

        assert_eq!(
            text,
            "This pattern may be associated with diabetes, discuss treatment options with your clinician soon."
        );
        assert_eq!(audit.diagnosis_rewrites, 1);
        assert_eq!(audit.prescription_removed, 1);
        assert_eq!(audit.alarm_softened, 1);
    }

    #[test]
    fn audits_merge() {
        let a = LanguageAudit {
            diagnosis_rewrites: 1,
            alarm_softened: 0,
            prescription_removed: 2,
        };
        let b = LanguageAudit {
            diagnosis_rewrites: 0,
            alarm_softened: 3,
            prescription_removed: 0,
        };
        assert_eq!(a.merge(b).total(), 6);
    }
}
