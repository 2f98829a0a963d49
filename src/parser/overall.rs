use super::extract::{extract_content, extract_list, rubric};
use super::types::OverallEvaluation;

/// Parses the overall brand evaluation response.
pub fn parse_overall(response: &str) -> OverallEvaluation {
    let section = extract_content(response, "overall_evaluation");
    let score_section = extract_content(&section, "overall_score");

    OverallEvaluation {
        overall: rubric(&score_section),
        strengths: extract_list(&extract_content(&section, "strengths")),
        improvement_areas: extract_list(&extract_content(&section, "improvement_areas")),
        suggestions: extract_list(&extract_content(&section, "suggestions")),
    }
}
