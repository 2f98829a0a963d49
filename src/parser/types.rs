//! Typed evaluation records produced by the parsers.

use serde::{Deserialize, Serialize};

/// A single rubric leaf: free-text analysis plus a 0-100 score.
///
/// Scores default to 0 when the model output carries no digits. For the
/// tone rubric the score is the percentage of challenging content:
/// 0 = fully supportive, 100 = fully challenging.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RubricScore {
    pub analysis: String,
    pub score: u32,
}

/// The two brand personality rubrics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalityScores {
    pub supportive_challenger: RubricScore,
    pub white_collar_mechanic: RubricScore,
}

/// The four brand voice rubrics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoiceScores {
    pub natural_conversational: RubricScore,
    pub authentic_approachable: RubricScore,
    pub gender_neutral: RubricScore,
    pub channel_tailored: RubricScore,
}

/// Result of the voice/personality evaluation.
///
/// `tone.score` is the measured challenging percentage; the tone-adjustment
/// follow-up takes it as an explicit argument.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoicePersonalityEvaluation {
    pub personality: PersonalityScores,
    pub voice: VoiceScores,
    pub tone: RubricScore,
}

/// Result of the target-audience evaluation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetAudienceEvaluation {
    pub user_buyer_focus: RubricScore,
    pub customer_type_focus: RubricScore,
}

/// One messaging pillar scored against the text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PillarScore {
    pub pillar: String,
    pub analysis: String,
    pub score: u32,
}

/// One brand value scored against the text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueScore {
    pub value: String,
    pub analysis: String,
    pub score: u32,
}

/// Result of the messaging/values evaluation. Both lists preserve the order
/// blocks appeared in the model output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessagingValuesEvaluation {
    pub messaging_alignment: Vec<PillarScore>,
    pub value_alignment: Vec<ValueScore>,
}

/// Result of the overall brand evaluation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverallEvaluation {
    pub overall: RubricScore,
    pub strengths: Vec<String>,
    pub improvement_areas: Vec<String>,
    pub suggestions: Vec<String>,
}

/// One concrete rewrite suggested by the tone-adjustment evaluation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhrasingChange {
    pub original: String,
    pub suggested: String,
    pub rationale: String,
}

/// One channel-specific adjustment suggested by the tone-adjustment
/// evaluation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentTypeAdjustment {
    pub adjustment: String,
    pub example: String,
    pub rationale: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentStateAnalysis {
    pub tone_balance: String,
}

/// Result of the tone-adjustment follow-up.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToneAdjustmentEvaluation {
    pub current_state: CurrentStateAnalysis,
    pub phrasing_changes: Vec<PhrasingChange>,
    pub content_type_adjustments: Vec<ContentTypeAdjustment>,
}
