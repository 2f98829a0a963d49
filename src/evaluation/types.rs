use std::fmt;

use serde::{Deserialize, Serialize};

use crate::completion::ProviderKind;
use crate::parser::{
    MessagingValuesEvaluation, OverallEvaluation, TargetAudienceEvaluation,
    ToneAdjustmentEvaluation, VoicePersonalityEvaluation,
};
use crate::prompts;

/// The fixed categories of brand analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvaluationKind {
    VoicePersonality,
    TargetAudience,
    MessagingValues,
    Overall,
    ToneAdjustment,
}

impl EvaluationKind {
    /// The four kinds fanned out concurrently per submission. Tone
    /// adjustment is excluded: it is sequenced after the voice evaluation
    /// whose tone score it consumes.
    pub const BASE: [EvaluationKind; 4] = [
        EvaluationKind::VoicePersonality,
        EvaluationKind::TargetAudience,
        EvaluationKind::MessagingValues,
        EvaluationKind::Overall,
    ];

    /// Human-readable name used in error reports.
    pub fn label(&self) -> &'static str {
        match self {
            EvaluationKind::VoicePersonality => "Voice Personality",
            EvaluationKind::TargetAudience => "Target Audience",
            EvaluationKind::MessagingValues => "Messaging Values",
            EvaluationKind::Overall => "Overall",
            EvaluationKind::ToneAdjustment => "Tone Adjustment",
        }
    }
}

impl fmt::Display for EvaluationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Target challenging/supportive balance for the tone-adjustment follow-up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToneTarget {
    pub challenging_pct: u32,
    pub supportive_pct: u32,
}

impl Default for ToneTarget {
    fn default() -> Self {
        Self {
            challenging_pct: 50,
            supportive_pct: 50,
        }
    }
}

/// Inputs specific to a tone-adjustment request: the score measured by this
/// submission's voice evaluation and the balance to steer toward.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToneRequest {
    pub measured_score: u32,
    pub target: ToneTarget,
}

/// Per-submission options shared by the prompt templates.
#[derive(Debug, Clone, Default)]
pub struct EvaluationOptions {
    /// Channel or content type the text is intended for, e.g. "blog post"
    pub platform: String,
    /// Present only on tone-adjustment requests
    pub tone: Option<ToneRequest>,
}

/// One dispatched call: a source text bound to an evaluation kind and a
/// provider. Immutable once created.
#[derive(Debug, Clone)]
pub struct EvaluationRequest {
    pub source_text: String,
    pub kind: EvaluationKind,
    pub provider: ProviderKind,
    pub options: EvaluationOptions,
}

impl EvaluationRequest {
    /// Renders the prompt for this request's evaluation kind.
    pub fn prompt(&self) -> String {
        match self.kind {
            EvaluationKind::VoicePersonality => {
                prompts::format_voice_personality(&self.source_text, &self.options.platform)
            }
            EvaluationKind::TargetAudience => {
                prompts::format_target_audience(&self.source_text)
            }
            EvaluationKind::MessagingValues => {
                prompts::format_messaging_values(&self.source_text)
            }
            EvaluationKind::Overall => {
                prompts::format_overall(&self.source_text, &self.options.platform)
            }
            EvaluationKind::ToneAdjustment => {
                let tone = self.options.tone.clone().unwrap_or_default();
                prompts::format_tone_adjustment(
                    &self.source_text,
                    tone.measured_score,
                    &tone.target,
                    &self.options.platform,
                )
            }
        }
    }
}

/// Best-effort combined result of one submission.
///
/// Kinds that failed leave their slot empty and append to `errors`; the
/// caller renders whatever subset succeeded. Discarded after presentation,
/// never persisted.
#[derive(Debug, Default, Serialize)]
pub struct AggregateEvaluation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voice_personality: Option<VoicePersonalityEvaluation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_audience: Option<TargetAudienceEvaluation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub messaging_values: Option<MessagingValuesEvaluation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overall: Option<OverallEvaluation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tone_adjustment: Option<ToneAdjustmentEvaluation>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

impl AggregateEvaluation {
    /// True when no evaluation kind produced a result.
    pub fn is_total_failure(&self) -> bool {
        self.voice_personality.is_none()
            && self.target_audience.is_none()
            && self.messaging_values.is_none()
            && self.overall.is_none()
            && self.tone_adjustment.is_none()
    }
}
