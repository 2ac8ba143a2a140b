use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Resume-vs-JD analysis produced by the generative service.
/// Stored and forwarded as-is; the wizard never looks inside.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnalysisResult(pub Value);

/// Structured resume content produced by the enhancement step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResumeData(pub Value);

impl AnalysisResult {
    /// The only shape guarantee the wizard relies on: a JSON object.
    pub fn is_well_formed(&self) -> bool {
        self.0.as_object().is_some_and(|o| !o.is_empty())
    }
}

impl ResumeData {
    pub fn is_well_formed(&self) -> bool {
        self.0.as_object().is_some_and(|o| !o.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_object_payload_is_well_formed() {
        let result = AnalysisResult(json!({"match_score": 72, "gaps": ["kubernetes"]}));
        assert!(result.is_well_formed());
    }

    #[test]
    fn test_null_and_empty_payloads_are_malformed() {
        assert!(!AnalysisResult(Value::Null).is_well_formed());
        assert!(!AnalysisResult(json!({})).is_well_formed());
        assert!(!ResumeData(json!(["not", "an", "object"])).is_well_formed());
    }

    #[test]
    fn test_transparent_serialization() {
        let result = AnalysisResult(json!({"summary": "strong fit"}));
        assert_eq!(
            serde_json::to_string(&result).unwrap(),
            r#"{"summary":"strong fit"}"#
        );
    }
}
