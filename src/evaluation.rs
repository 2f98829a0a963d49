#[path = "evaluation/types.rs"]
mod types;

#[path = "evaluation/orchestrator.rs"]
mod orchestrator;

pub use orchestrator::EvaluationOrchestrator;
pub use types::{
    AggregateEvaluation, EvaluationKind, EvaluationOptions, EvaluationRequest, ToneRequest,
    ToneTarget,
};
