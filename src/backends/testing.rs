//! Deterministic stub provider for offline runs and tests.
//!
//! Selects a canned response by recognizing the output-format tags each
//! prompt template asks for, so the full pipeline can run without network
//! access.

use async_trait::async_trait;

use crate::completion::CompletionProvider;
use crate::error::EvalError;

/// Provider that answers every prompt with a fixed, well-formed fixture.
#[derive(Debug, Clone, Default)]
pub struct TestProvider;

#[async_trait]
impl CompletionProvider for TestProvider {
    async fn complete(&self, prompt: &str) -> Result<String, EvalError> {
        Ok(fixture_for(prompt).to_string())
    }
}

fn fixture_for(prompt: &str) -> &'static str {
    if prompt.contains("<personality_evaluation>") {
        VOICE_PERSONALITY_FIXTURE
    } else if prompt.contains("<target_audience_evaluation>") {
        TARGET_AUDIENCE_FIXTURE
    } else if prompt.contains("<messaging_alignment>") {
        MESSAGING_VALUES_FIXTURE
    } else if prompt.contains("<overall_evaluation>") {
        OVERALL_FIXTURE
    } else if prompt.contains("<current_state_analysis>") {
        TONE_ADJUSTMENT_FIXTURE
    } else {
        ""
    }
}

pub(crate) const VOICE_PERSONALITY_FIXTURE: &str = r#"<personality_evaluation>
<supportive_challenger>
<analysis>The text encourages readers to rethink their workflow while offering concrete help.</analysis>
<score>72</score>
</supportive_challenger>
<white_collar_mechanic>
<analysis>Technical depth is present but stays approachable throughout.</analysis>
<score>64</score>
</white_collar_mechanic>
</personality_evaluation>

<voice_evaluation>
<natural_conversational>
<analysis>Sentences are direct without slang.</analysis>
<score>80</score>
</natural_conversational>
<authentic_approachable>
<analysis>Claims are confident and backed by examples.</analysis>
<score>76</score>
</authentic_approachable>
<gender_neutral>
<analysis>No exclusionary language found.</analysis>
<score>95</score>
</gender_neutral>
<channel_tailored>
<analysis>Tone fits a long-form blog post.</analysis>
<score>70</score>
</channel_tailored>
</voice_evaluation>

<tone_evaluation>
<analysis>Roughly one third of the content pushes the reader; the rest reassures.</analysis>
<score>35</score>
</tone_evaluation>"#;

pub(crate) const TARGET_AUDIENCE_FIXTURE: &str = r#"<target_audience_evaluation>
<user_buyer_focus>
<analysis>Mostly practitioner language: 70% user-focused, 30% buyer-focused.</analysis>
<score>30</score>
</user_buyer_focus>
<customer_type_focus>
<analysis>Assumes basic email experience and introduces automation step by step.</analysis>
<score>25</score>
</customer_type_focus>
</target_audience_evaluation>"#;

pub(crate) const MESSAGING_VALUES_FIXTURE: &str = r#"<messaging_alignment>
<pillar name="Agile Marketing">
<analysis>Speed from idea to launch is the dominant theme.</analysis>
<score>85</score>
</pillar>
<pillar name="Agile Marketing">
<analysis>The closing section repeats the acceleration message.</analysis>
<score>90</score>
</pillar>
</messaging_alignment>

<value_alignment>
<value name="Put People First">
<analysis>Customer anecdotes open every section.</analysis>
<score>78</score>
</value>
<value>
<analysis>Collaboration is implied but never named.</analysis>
<score>40</score>
</value>
</value_alignment>"#;

pub(crate) const OVERALL_FIXTURE: &str = r#"<overall_evaluation>
<overall_score>
<analysis>Strong alignment overall with a few flat passages.</analysis>
<score>81</score>
</overall_score>

<strengths>
- Clear practitioner voice throughout
- Concrete examples in every claim
</strengths>

<improvement_areas>
- The middle section drifts into jargon
- Closing call to action is generic
</improvement_areas>

<suggestions>
1. Replace the jargon-heavy paragraph with a walkthrough
2. End with a channel-specific next step
</suggestions>
</overall_evaluation>"#;

pub(crate) const TONE_ADJUSTMENT_FIXTURE: &str = r#"<current_state_analysis>
<tone_balance>The content sits at 35% challenging, 65% supportive, led by reassurance-heavy openings.</tone_balance>
</current_state_analysis>

<specific_adjustments>
<phrasing_changes>
<original>You might want to consider automation.</original>
<suggested>Your current process is costing you launches; automate it.</suggested>
<rationale>Moves the sentence from hedging to a direct challenge.</rationale>
</phrasing_changes>
<phrasing_changes>
<original>We are here to help whenever you need us.</original>
<suggested>Set a migration date and we will hold you to it.</suggested>
<rationale>Keeps support present while adding accountability.</rationale>
</phrasing_changes>
<content_type_adjustments>
<adjustment>Open emails with the problem, not the greeting.</adjustment>
<example>Start with the missed-deadline statistic.</example>
<rationale>Email tolerates a sharper opening than long-form content.</rationale>
</content_type_adjustments>
</specific_adjustments>"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unknown_prompts_yield_an_empty_completion() {
        let text = TestProvider.complete("no known tags here").await.unwrap();
        assert!(text.is_empty());
    }

    #[tokio::test]
    async fn messaging_prompts_get_the_messaging_fixture() {
        let text = TestProvider
            .complete("respond using <messaging_alignment> blocks")
            .await
            .unwrap();
        assert!(text.contains("<pillar name=\"Agile Marketing\">"));
    }
}
