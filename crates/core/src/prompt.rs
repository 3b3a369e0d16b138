//! Prescription review prompt rendering
//!
//! The template frames the model as a community pharmacist specialising in
//! geriatric pharmacotherapy, asks for at least one caution even when the
//! prescription looks fine, asks for suggestions rather than directives, and
//! demands a bare JSON document in the `AnalysisResult` shape.
//!
//! Field values are interpolated verbatim with no escaping. The upstream model
//! reads them as natural language, so a prescription text can steer the model
//! (prompt injection). That is an accepted trust boundary: the response is
//! only ever relayed, never executed or stored.

use crate::request::AnalysisRequest;

/// A fully rendered prompt, ready to send upstream
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisPrompt(String);

impl AnalysisPrompt {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Render the review prompt for a validated request.
pub fn build_prompt(request: &AnalysisRequest) -> AnalysisPrompt {
    let AnalysisRequest {
        age,
        gender,
        prescription,
    } = request;

    AnalysisPrompt(format!(
        r#"
あなたは日本の保険薬局で勤務する経験豊富な薬剤師であり、
高齢者薬物療法・ポリファーマシー対策の専門家です。

以下の患者情報および処方内容について、
「高齢者の安全な薬物療法ガイドライン2015」、
日本老年医学会、日本高血圧学会、日本糖尿病学会などの
国内ガイドラインおよび一般的な薬学的知見に基づき評価してください。

【重要な前提】
・本評価は薬局での服薬指導・処方監査・疑義照会検討を目的とします
・明らかな問題がない場合でも、高齢者特有の注意点を必ず1点以上挙げてください
・表現は薬剤師が医師に相談・提案しやすい内容としてください
・過度に断定的な表現は避けてください

【患者情報】
年齢: {age}歳
性別: {gender}

【処方内容】
{prescription}

以下の形式で **JSONのみ** を出力してください（説明文・マークダウン禁止）：

{{
  "overall_assessment": "処方全体の評価（薬局視点、3〜4文）",
  "medication_count": "処方薬剤数（○剤）",
  "risk_level": "低リスク/中リスク/高リスク",
  "issues": [
    {{
      "medication": "該当薬剤名",
      "issue": "薬学的に注意すべき点",
      "recommendation": "薬剤師として考えられる対応・提案",
      "evidence": "国内ガイドラインや一般的根拠の要約",
      "reference_url": "参考URL（存在する場合）"
    }}
  ],
  "positive_points": [
    "適切と評価できる点"
  ],
  "overall_recommendations": [
    "服薬指導や継続的フォローに関する総合的提案"
  ]
}}
"#
    ))
}
