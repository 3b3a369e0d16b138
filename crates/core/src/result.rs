//! Typed view of the analysis shape requested from the model
//!
//! The server relays whatever JSON the model produced; these types are only
//! used to notice (and log) when the model drifted from the requested shape.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Overall risk label requested of the model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    #[serde(rename = "低リスク")]
    Low,
    #[serde(rename = "中リスク")]
    Medium,
    #[serde(rename = "高リスク")]
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "低リスク",
            RiskLevel::Medium => "中リスク",
            RiskLevel::High => "高リスク",
        }
    }
}

/// A single finding about one medication
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    pub medication: String,
    pub issue: String,
    pub recommendation: String,
    pub evidence: String,
    pub reference_url: String,
}

/// Prescription review result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub overall_assessment: String,
    pub medication_count: String,
    pub risk_level: RiskLevel,
    pub issues: Vec<Issue>,
    pub positive_points: Vec<String>,
    pub overall_recommendations: Vec<String>,
}

impl AnalysisResult {
    /// Interpret an arbitrary JSON value as an `AnalysisResult`.
    ///
    /// Returns the deserialization error describing the first deviation.
    pub fn inspect(value: &JsonValue) -> Result<Self, serde_json::Error> {
        Self::deserialize(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> JsonValue {
        json!({
            "overall_assessment": "全体として大きな問題はありません。",
            "medication_count": "2剤",
            "risk_level": "中リスク",
            "issues": [{
                "medication": "ロキソニン60mg",
                "issue": "高齢者ではNSAIDsによる腎機能低下に注意が必要です。",
                "recommendation": "アセトアミノフェンへの変更を医師に提案することが考えられます。",
                "evidence": "高齢者の安全な薬物療法ガイドライン2015",
                "reference_url": ""
            }],
            "positive_points": ["降圧薬の用量は適切です。"],
            "overall_recommendations": ["定期的な腎機能検査を推奨します。"]
        })
    }

    #[test]
    fn inspects_well_formed_result() {
        let result = AnalysisResult::inspect(&sample()).unwrap();
        assert_eq!(result.risk_level, RiskLevel::Medium);
        assert_eq!(result.issues.len(), 1);
        assert_eq!(result.issues[0].medication, "ロキソニン60mg");
    }

    #[test]
    fn unknown_risk_label_is_a_deviation() {
        let mut value = sample();
        value["risk_level"] = json!("やや高い");
        assert!(AnalysisResult::inspect(&value).is_err());
    }

    #[test]
    fn missing_field_is_a_deviation() {
        let mut value = sample();
        value.as_object_mut().unwrap().remove("positive_points");
        let err = AnalysisResult::inspect(&value).unwrap_err();
        assert!(err.to_string().contains("positive_points"));
    }

    #[test]
    fn risk_label_text_matches_wire_form() {
        for level in [RiskLevel::Low, RiskLevel::Medium, RiskLevel::High] {
            assert_eq!(serde_json::to_value(level).unwrap(), json!(level.as_str()));
        }
    }
}
