//! Patient-facing text derived from parsed lab parameters.

use crate::domain::report::{
    Language, RiskLevel, EXPLANATION_ENGLISH, EXPLANATION_HINDI,
};

use super::{LabParameter, TrendSnapshot};

/// Which explanation a report gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExplanationKind {
    NeedsAttention,
    AllClear,
    NothingParsed,
}

impl ExplanationKind {
    pub fn for_parameters(params: &[LabParameter]) -> Self {
        if params.is_empty() {
            ExplanationKind::NothingParsed
        } else if params.iter().any(|p| p.to_finding().is_some()) {
            ExplanationKind::NeedsAttention
        } else {
            ExplanationKind::AllClear
        }
    }

    pub fn text(&self, language: Language) -> &'static str {
        match (self, language) {
            (ExplanationKind::NeedsAttention, Language::English) => EXPLANATION_ENGLISH,
            (ExplanationKind::NeedsAttention, Language::Hindi) => EXPLANATION_HINDI,
            (ExplanationKind::NeedsAttention, Language::Tamil) => {
                "சில அளவுகள் இயல்பான வரம்பிற்கு வெளியே உள்ளன. வாழ்க்கை முறை மேம்பாடுகளைக் கருத்தில் கொண்டு மருத்துவரை அணுகவும்."
            }
            (ExplanationKind::NeedsAttention, Language::Kannada) => {
                "ಕೆಲವು ಮೌಲ್ಯಗಳು ಸಾಮಾನ್ಯ ಮಿತಿಯಿಂದ ಹೊರಗಿವೆ. ಜೀವನಶೈಲಿ ಸುಧಾರಣೆಗಳನ್ನು ಪರಿಗಣಿಸಿ ಮತ್ತು ವೈದ್ಯರನ್ನು ಸಂಪರ್ಕಿಸಿ."
            }
            (ExplanationKind::NeedsAttention, Language::Malayalam) => {
                "ചില മൂല്യങ്ങൾ സാധാരണ പരിധിക്ക് പുറത്താണ്. ജീവിതശൈലി മെച്ചപ്പെടുത്തലുകൾ പരിഗണിക്കുകയും ഡോക്ടറെ സമീപിക്കുകയും ചെയ്യുക."
            }
            (ExplanationKind::AllClear, Language::English) => {
                "Your reported values are within their reference ranges. Keep up your current healthy habits."
            }
            (ExplanationKind::AllClear, Language::Hindi) => {
                "आपके सभी मान सामान्य सीमा के भीतर हैं। अपनी स्वस्थ आदतें जारी रखें।"
            }
            (ExplanationKind::AllClear, Language::Tamil) => {
                "உங்கள் அனைத்து அளவுகளும் இயல்பான வரம்பிற்குள் உள்ளன. உங்கள் ஆரோக்கியமான பழக்கங்களைத் தொடருங்கள்."
            }
            (ExplanationKind::AllClear, Language::Kannada) => {
                "ನಿಮ್ಮ ಎಲ್ಲಾ ಮೌಲ್ಯಗಳು ಸಾಮಾನ್ಯ ಮಿತಿಯೊಳಗಿವೆ. ನಿಮ್ಮ ಆರೋಗ್ಯಕರ ಅಭ್ಯಾಸಗಳನ್ನು ಮುಂದುವರಿಸಿ."
            }
            (ExplanationKind::AllClear, Language::Malayalam) => {
                "നിങ്ങളുടെ എല്ലാ മൂല്യങ്ങളും സാധാരണ പരിധിക്കുള്ളിലാണ്. നിങ്ങളുടെ ആരോഗ്യകരമായ ശീലങ്ങൾ തുടരുക."
            }
            (ExplanationKind::NothingParsed, Language::English) => {
                "We could not read any lab values from this report. Paste one parameter per line, for example: Hemoglobin 11.2 g/dL 12-16."
            }
            (ExplanationKind::NothingParsed, Language::Hindi) => {
                "इस रिपोर्ट से कोई लैब मान नहीं पढ़ा जा सका। कृपया हर पंक्ति में एक मान लिखें।"
            }
            (ExplanationKind::NothingParsed, Language::Tamil) => {
                "இந்த அறிக்கையிலிருந்து எந்த ஆய்வக மதிப்புகளையும் படிக்க முடியவில்லை. ஒவ்வொரு வரியிலும் ஒரு மதிப்பை ஒட்டவும்."
            }
            (ExplanationKind::NothingParsed, Language::Kannada) => {
                "ಈ ವರದಿಯಿಂದ ಯಾವುದೇ ಪ್ರಯೋಗಾಲಯ ಮೌಲ್ಯಗಳನ್ನು ಓದಲು ಸಾಧ್ಯವಾಗಲಿಲ್ಲ. ದಯವಿಟ್ಟು ಪ್ರತಿ ಸಾಲಿನಲ್ಲಿ ಒಂದು ಮೌಲ್ಯವನ್ನು ಅಂಟಿಸಿ."
            }
            (ExplanationKind::NothingParsed, Language::Malayalam) => {
                "ഈ റിപ്പോർട്ടിൽ നിന്ന് ലാബ് മൂല്യങ്ങളൊന്നും വായിക്കാൻ കഴിഞ്ഞില്ല. ഓരോ വരിയിലും ഒരു മൂല്യം ഒട്ടിക്കുക."
            }
        }
    }
}

/// Observations, explanation and doctor summary for a set of parameters.
pub struct LabNarrative<'a> {
    params: &'a [LabParameter],
}

impl<'a> LabNarrative<'a> {
    pub fn new(params: &'a [LabParameter]) -> Self {
        Self { params }
    }

    pub fn explanation(&self, language: Language) -> String {
        ExplanationKind::for_parameters(self.params)
            .text(language)
            .to_string()
    }

    /// One line per flagged parameter, framed by counts and the trend hint.
    pub fn key_observations(&self, trend: Option<&TrendSnapshot>) -> Vec<String> {
        let mut observations = Vec::new();
        if self.params.is_empty() {
            observations.push("No lab parameters could be read from the report.".to_string());
            return observations;
        }

        let assessed: Vec<&LabParameter> =
            self.params.iter().filter(|p| p.has_reference_range()).collect();
        let in_range = assessed
            .iter()
            .filter(|p| matches!(p.risk_level(), RiskLevel::Normal | RiskLevel::Borderline))
            .count();

        if !assessed.is_empty() {
            observations.push(format!(
                "{} of {} parameters are within their reference ranges.",
                in_range,
                assessed.len()
            ));
        }

        for param in self.params {
            let range = param.display_range().unwrap_or_default();
            let line = match param.risk_level() {
                RiskLevel::High => format!(
                    "{} is above the reference range ({}, range {}).",
                    param.name,
                    param.display_value(),
                    range
                ),
                RiskLevel::Low => format!(
                    "{} is below the reference range ({}, range {}).",
                    param.name,
                    param.display_value(),
                    range
                ),
                RiskLevel::Borderline => {
                    let side = if param.nearer_upper_bound() { "upper" } else { "lower" };
                    format!(
                        "{} is close to the {} limit ({}, range {}).",
                        param.name,
                        side,
                        param.display_value(),
                        range
                    )
                }
                RiskLevel::Normal | RiskLevel::Unknown => continue,
            };
            observations.push(line);
        }

        let unassessed = self.params.len() - assessed.len();
        if unassessed > 0 {
            observations.push(format!(
                "{} parameter(s) had no reference range and were not assessed.",
                unassessed
            ));
        }

        if let Some(snapshot) = trend {
            observations.push(snapshot.hint.clone());
        }

        observations
    }

    /// `Flagged for review: Cholesterol (high), Hemoglobin (low). ...`
    pub fn doctor_summary(&self) -> String {
        if self.params.is_empty() {
            return "No lab parameters could be extracted; the report needs manual review."
                .to_string();
        }

        let flagged: Vec<String> = self
            .params
            .iter()
            .filter_map(|p| {
                let level = p.risk_level();
                match level {
                    RiskLevel::High | RiskLevel::Low | RiskLevel::Borderline => Some(format!(
                        "{} ({})",
                        p.name,
                        level.label().to_lowercase()
                    )),
                    RiskLevel::Normal | RiskLevel::Unknown => None,
                }
            })
            .collect();

        if flagged.is_empty() {
            "No parameters outside reference ranges in the submitted report. \
             Routine follow-up as clinically appropriate."
                .to_string()
        } else {
            format!(
                "Flagged for review: {}. Please review flagged parameters against symptoms and history.",
                flagged.join(", ")
            )
        }
    }
}
