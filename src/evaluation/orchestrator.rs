use futures::future::join_all;
use tokio_util::sync::CancellationToken;

use crate::completion::ProviderKind;
use crate::dispatch::ResilientDispatcher;
use crate::error::EvalError;
use crate::parser::{
    parse_messaging_values, parse_overall, parse_target_audience, parse_tone_adjustment,
    parse_voice_personality, ToneAdjustmentEvaluation,
};

use super::types::{
    AggregateEvaluation, EvaluationKind, EvaluationOptions, EvaluationRequest, ToneRequest,
    ToneTarget,
};

/// Fans out the base evaluation kinds concurrently and assembles a
/// best-effort aggregate.
///
/// Failures are isolated per kind: a failing branch records an error entry
/// and leaves its slot empty, without aborting siblings already in flight.
pub struct EvaluationOrchestrator {
    dispatcher: ResilientDispatcher,
}

impl EvaluationOrchestrator {
    pub fn new(dispatcher: ResilientDispatcher) -> Self {
        Self { dispatcher }
    }

    /// Runs all four base evaluation kinds concurrently against `provider`
    /// and collects whatever subset succeeded.
    ///
    /// Cancelling `cancel` aborts every in-flight dispatch; the aggregate
    /// then reports each unfinished kind as failed.
    pub async fn evaluate_all(
        &self,
        text: &str,
        provider: ProviderKind,
        options: &EvaluationOptions,
        cancel: &CancellationToken,
    ) -> AggregateEvaluation {
        log::debug!("starting evaluation fan-out via {provider}");

        let request = |kind| EvaluationRequest {
            source_text: text.to_string(),
            kind,
            provider,
            options: options.clone(),
        };

        let outcomes = join_all(EvaluationKind::BASE.map(|kind| {
            let request = request(kind);
            async move { (kind, self.run(request, cancel).await) }
        }))
        .await;

        let mut aggregate = AggregateEvaluation::default();
        for (kind, raw) in outcomes {
            record_into(&mut aggregate, kind, raw);
        }

        log::debug!(
            "evaluation fan-out finished with {} error(s)",
            aggregate.errors.len()
        );
        aggregate
    }

    /// Runs the tone-adjustment follow-up.
    ///
    /// Must be sequenced after [`evaluate_all`](Self::evaluate_all):
    /// `measured_score` is the tone score from that aggregate's voice
    /// evaluation, passed explicitly so concurrent submissions can never
    /// observe each other's state.
    pub async fn adjust_tone(
        &self,
        text: &str,
        provider: ProviderKind,
        measured_score: u32,
        target: ToneTarget,
        options: &EvaluationOptions,
        cancel: &CancellationToken,
    ) -> Result<ToneAdjustmentEvaluation, EvalError> {
        let request = EvaluationRequest {
            source_text: text.to_string(),
            kind: EvaluationKind::ToneAdjustment,
            provider,
            options: EvaluationOptions {
                platform: options.platform.clone(),
                tone: Some(ToneRequest {
                    measured_score,
                    target,
                }),
            },
        };
        let raw = self.run(request, cancel).await?;
        Ok(parse_tone_adjustment(&raw))
    }

    async fn run(
        &self,
        request: EvaluationRequest,
        cancel: &CancellationToken,
    ) -> Result<String, EvalError> {
        log::debug!("requesting {} evaluation", request.kind);
        self.dispatcher
            .dispatch(&request.prompt(), request.provider, cancel)
            .await
    }
}

/// Parses a raw completion into the slot matching its kind, or appends an
/// error entry. Total over every kind so the fan-out can stay data-driven.
fn record_into(
    aggregate: &mut AggregateEvaluation,
    kind: EvaluationKind,
    raw: Result<String, EvalError>,
) {
    match kind {
        EvaluationKind::VoicePersonality => record(
            &mut aggregate.voice_personality,
            &mut aggregate.errors,
            kind,
            raw.map(|raw| parse_voice_personality(&raw)),
        ),
        EvaluationKind::TargetAudience => record(
            &mut aggregate.target_audience,
            &mut aggregate.errors,
            kind,
            raw.map(|raw| parse_target_audience(&raw)),
        ),
        EvaluationKind::MessagingValues => record(
            &mut aggregate.messaging_values,
            &mut aggregate.errors,
            kind,
            raw.map(|raw| parse_messaging_values(&raw)),
        ),
        EvaluationKind::Overall => record(
            &mut aggregate.overall,
            &mut aggregate.errors,
            kind,
            raw.map(|raw| parse_overall(&raw)),
        ),
        EvaluationKind::ToneAdjustment => record(
            &mut aggregate.tone_adjustment,
            &mut aggregate.errors,
            kind,
            raw.map(|raw| parse_tone_adjustment(&raw)),
        ),
    }
}

fn record<T>(
    slot: &mut Option<T>,
    errors: &mut Vec<String>,
    kind: EvaluationKind,
    outcome: Result<T, EvalError>,
) {
    match outcome {
        Ok(value) => *slot = Some(value),
        Err(err) => {
            log::warn!("{kind} evaluation failed: {err}");
            errors.push(format!("{kind}: {err}"));
        }
    }
}
