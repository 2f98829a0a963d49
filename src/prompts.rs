//! Prompt templates, one per evaluation kind.
//!
//! The pipeline treats these as opaque formatting functions; the guideline
//! wording itself is interchangeable. Each template ends with the exact tag
//! vocabulary the matching parser expects.

use crate::evaluation::ToneTarget;

/// Prompt for the voice/personality evaluation.
pub fn format_voice_personality(text: &str, platform: &str) -> String {
    format!(
        r#"You are a brand voice expert analyzing text against the brand guidelines. Focus on voice, personality, and tone.

Analyze this text for voice and personality alignment:
<input_text>
{text}
</input_text>

Consider:
1. Supportive Challenger personality: balance of support and challenge, empathy while encouraging growth, proactive solutions.
2. White-Collar Mechanic personality: technical expertise that stays approachable, professionalism with hands-on knowledge.
3. Brand voice: natural and conversational, authentic and approachable, gender-neutral and inclusive, tone suitable for {platform}.
4. Challenging vs supportive balance: score the percentage of challenging content, where 0 is fully supportive and 100 is fully challenging.

Provide your evaluation in this format:

<personality_evaluation>
<supportive_challenger>
<analysis>Specific examples and analysis of Supportive Challenger alignment</analysis>
<score>75</score>
</supportive_challenger>
<white_collar_mechanic>
<analysis>Specific examples and analysis of White-Collar Mechanic alignment</analysis>
<score>75</score>
</white_collar_mechanic>
</personality_evaluation>

<voice_evaluation>
<natural_conversational>
<analysis>Analyze natural and conversational qualities with examples</analysis>
<score>75</score>
</natural_conversational>
<authentic_approachable>
<analysis>Evaluate authenticity and approachability with examples</analysis>
<score>75</score>
</authentic_approachable>
<gender_neutral>
<analysis>Assess inclusivity and gender-neutral language with examples</analysis>
<score>75</score>
</gender_neutral>
<channel_tailored>
<analysis>Evaluate channel appropriateness with context</analysis>
<score>75</score>
</channel_tailored>
</voice_evaluation>

<tone_evaluation>
<analysis>Analyze the balance between supportive and challenging elements, citing examples</analysis>
<score>75</score>
</tone_evaluation>"#
    )
}

/// Prompt for the target-audience evaluation.
pub fn format_target_audience(text: &str) -> String {
    format!(
        r#"You are a brand targeting expert analyzing text against the brand guidelines. Focus on audience alignment.

Analyze this text for target audience alignment:
<input_text>
{text}
</input_text>

Consider:
1. User vs. buyer focus: users are hands-on practitioners, buyers are decision-makers. Score 0 for fully user-focused, 100 for fully buyer-focused.
2. Customer journey stage: graduators moving up from basic email need guidance, disenfranchised veterans need solutions. Score 0 for fully graduator-focused, 100 for fully disenfranchised-focused.

Provide your evaluation in this format:

<target_audience_evaluation>
<user_buyer_focus>
<analysis>Detailed analysis of user vs. buyer targeting with language examples and pain points addressed</analysis>
<score>75</score>
</user_buyer_focus>
<customer_type_focus>
<analysis>Detailed analysis of customer journey targeting with terminology and assumed knowledge</analysis>
<score>75</score>
</customer_type_focus>
</target_audience_evaluation>"#
    )
}

/// Prompt for the messaging/values evaluation.
pub fn format_messaging_values(text: &str) -> String {
    format!(
        r#"You are a brand messaging expert analyzing text against the brand guidelines. Focus on messaging pillars and core values.

Analyze this text:
<input_text>
{text}
</input_text>

Provide your evaluation in this format:

<messaging_alignment>
<pillar name="[Pillar Name]">
<analysis>Evaluate how well the text addresses this messaging pillar</analysis>
<score>75</score>
</pillar>
[Repeat for each relevant messaging pillar]
</messaging_alignment>

<value_alignment>
<value name="[Value Name]">
<analysis>Evaluate how well the text embodies this value</analysis>
<score>75</score>
</value>
[Repeat for each relevant value]
</value_alignment>"#
    )
}

/// Prompt for the overall brand evaluation.
pub fn format_overall(text: &str, platform: &str) -> String {
    format!(
        r#"You are a brand alignment expert providing a comprehensive evaluation of text against the brand guidelines.

Analyze this text for overall brand alignment; it is intended for {platform}:
<input_text>
{text}
</input_text>

Consider overall alignment, key strengths, areas for improvement, and actionable suggestions.

Format your response as follows:

<overall_evaluation>
<overall_score>
<analysis>Comprehensive analysis of brand alignment, citing specific examples</analysis>
<score>75</score>
</overall_score>

<strengths>
- [Specific strength with example]
</strengths>

<improvement_areas>
- [Specific area for improvement with example]
</improvement_areas>

<suggestions>
1. [Actionable suggestion with implementation example]
</suggestions>
</overall_evaluation>"#
    )
}

/// Prompt for the tone-adjustment follow-up.
///
/// `measured_tone` is the challenging percentage reported by the voice
/// evaluation for the same submission; it is threaded through explicitly so
/// the follow-up never reads stale state.
pub fn format_tone_adjustment(
    text: &str,
    measured_tone: u32,
    target: &ToneTarget,
    platform: &str,
) -> String {
    let supportive = 100u32.saturating_sub(measured_tone);
    let shift = target.challenging_pct as i64 - measured_tone as i64;
    format!(
        r#"You are a tone analysis expert, tasked with adjusting content toward a target challenging/supportive balance.

<content_to_analyze>
{text}
</content_to_analyze>

<tone_analysis>
Current balance: {measured_tone}% challenging, {supportive}% supportive
Content is intended for: {platform}
Target balance: {challenging}% challenging, {supportive_target}% supportive
Required shift: {shift}% more challenging
</tone_analysis>

Recommend specific, immediately actionable changes that reach the target balance while staying on brand.

Return your analysis in this format:

<current_state_analysis>
<tone_balance>Detailed analysis of the current balance with examples of each tone type</tone_balance>
</current_state_analysis>

<specific_adjustments>
<phrasing_changes>
<original>Exact quote from the content</original>
<suggested>Revised version matching the target balance</suggested>
<rationale>How this change helps reach the target</rationale>
</phrasing_changes>
[Repeat for each suggested change]
<content_type_adjustments>
<adjustment>Channel-specific adjustment</adjustment>
<example>Concrete example</example>
<rationale>Why this fits the channel</rationale>
</content_type_adjustments>
[Repeat as needed]
</specific_adjustments>"#,
        challenging = target.challenging_pct,
        supportive_target = target.supportive_pct,
    )
}
