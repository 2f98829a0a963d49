use super::extract::{extract_blocks, extract_content, extract_score};
use super::types::{MessagingValuesEvaluation, PillarScore, ValueScore};

const UNNAMED_PILLAR: &str = "Unnamed Pillar";
const UNNAMED_VALUE: &str = "Unnamed Value";

/// Parses the messaging/values response.
///
/// Every matched `<pillar>` and `<value>` block yields a record, in order of
/// appearance; blocks without a `name` attribute get a sentinel name.
pub fn parse_messaging_values(response: &str) -> MessagingValuesEvaluation {
    let messaging = extract_content(response, "messaging_alignment");
    let values = extract_content(response, "value_alignment");

    MessagingValuesEvaluation {
        messaging_alignment: extract_blocks(&messaging, "pillar")
            .into_iter()
            .map(|block| PillarScore {
                pillar: block.name.unwrap_or_else(|| UNNAMED_PILLAR.to_string()),
                analysis: extract_content(&block.body, "analysis"),
                score: extract_score(&block.body),
            })
            .collect(),
        value_alignment: extract_blocks(&values, "value")
            .into_iter()
            .map(|block| ValueScore {
                value: block.name.unwrap_or_else(|| UNNAMED_VALUE.to_string()),
                analysis: extract_content(&block.body, "analysis"),
                score: extract_score(&block.body),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use crate::backends::testing::MESSAGING_VALUES_FIXTURE;

    use super::*;

    #[test]
    fn repeated_pillar_names_are_kept_in_appearance_order() {
        let parsed = parse_messaging_values(MESSAGING_VALUES_FIXTURE);

        assert_eq!(parsed.messaging_alignment.len(), 2);
        assert_eq!(parsed.messaging_alignment[0].pillar, "Agile Marketing");
        assert_eq!(parsed.messaging_alignment[0].score, 85);
        assert_eq!(parsed.messaging_alignment[1].pillar, "Agile Marketing");
        assert_eq!(parsed.messaging_alignment[1].score, 90);
    }

    #[test]
    fn unnamed_value_blocks_get_the_sentinel_name() {
        let parsed = parse_messaging_values(MESSAGING_VALUES_FIXTURE);

        assert_eq!(parsed.value_alignment.len(), 2);
        assert_eq!(parsed.value_alignment[0].value, "Put People First");
        assert_eq!(parsed.value_alignment[1].value, "Unnamed Value");
        assert_eq!(parsed.value_alignment[1].score, 40);
    }

    #[test]
    fn absent_sections_yield_empty_lists() {
        let parsed = parse_messaging_values("nothing structured");
        assert!(parsed.messaging_alignment.is_empty());
        assert!(parsed.value_alignment.is_empty());
    }
}
