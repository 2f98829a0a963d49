use super::extract::{extract_blocks, extract_content};
use super::types::{
    ContentTypeAdjustment, CurrentStateAnalysis, PhrasingChange, ToneAdjustmentEvaluation,
};

/// Parses the tone-adjustment follow-up response.
pub fn parse_tone_adjustment(response: &str) -> ToneAdjustmentEvaluation {
    let current = extract_content(response, "current_state_analysis");
    let adjustments = extract_content(response, "specific_adjustments");

    ToneAdjustmentEvaluation {
        current_state: CurrentStateAnalysis {
            tone_balance: extract_content(&current, "tone_balance"),
        },
        phrasing_changes: extract_blocks(&adjustments, "phrasing_changes")
            .into_iter()
            .map(|block| PhrasingChange {
                original: extract_content(&block.body, "original"),
                suggested: extract_content(&block.body, "suggested"),
                rationale: extract_content(&block.body, "rationale"),
            })
            .collect(),
        content_type_adjustments: extract_blocks(&adjustments, "content_type_adjustments")
            .into_iter()
            .map(|block| ContentTypeAdjustment {
                adjustment: extract_content(&block.body, "adjustment"),
                example: extract_content(&block.body, "example"),
                rationale: extract_content(&block.body, "rationale"),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use crate::backends::testing::TONE_ADJUSTMENT_FIXTURE;

    use super::*;

    #[test]
    fn parses_the_full_fixture() {
        let parsed = parse_tone_adjustment(TONE_ADJUSTMENT_FIXTURE);
        assert!(parsed.current_state.tone_balance.contains("35% challenging"));
        assert_eq!(parsed.phrasing_changes.len(), 2);
        assert_eq!(
            parsed.phrasing_changes[0].original,
            "You might want to consider automation."
        );
        assert_eq!(parsed.content_type_adjustments.len(), 1);
        assert!(parsed.content_type_adjustments[0]
            .example
            .contains("statistic"));
    }

    #[test]
    fn malformed_output_degrades_to_an_empty_record() {
        let parsed = parse_tone_adjustment("<specific_adjustments>unclosed");
        assert_eq!(parsed.current_state.tone_balance, "");
        assert!(parsed.phrasing_changes.is_empty());
        assert!(parsed.content_type_adjustments.is_empty());
    }
}
