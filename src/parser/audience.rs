use super::extract::{extract_content, rubric};
use super::types::TargetAudienceEvaluation;

/// Parses the target-audience response.
pub fn parse_target_audience(response: &str) -> TargetAudienceEvaluation {
    let section = extract_content(response, "target_audience_evaluation");

    TargetAudienceEvaluation {
        user_buyer_focus: rubric(&extract_content(&section, "user_buyer_focus")),
        customer_type_focus: rubric(&extract_content(&section, "customer_type_focus")),
    }
}
