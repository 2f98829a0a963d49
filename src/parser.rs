#[path = "parser/extract.rs"]
mod extract;

#[path = "parser/types.rs"]
mod types;

#[path = "parser/voice.rs"]
mod voice;

#[path = "parser/audience.rs"]
mod audience;

#[path = "parser/messaging.rs"]
mod messaging;

#[path = "parser/overall.rs"]
mod overall;

#[path = "parser/tone.rs"]
mod tone;

pub use extract::{extract_blocks, extract_content, extract_list, extract_score, TagBlock};
pub use types::{
    ContentTypeAdjustment, CurrentStateAnalysis, MessagingValuesEvaluation, OverallEvaluation,
    PersonalityScores, PhrasingChange, PillarScore, RubricScore, TargetAudienceEvaluation,
    ToneAdjustmentEvaluation, ValueScore, VoicePersonalityEvaluation, VoiceScores,
};

pub use audience::parse_target_audience;
pub use messaging::parse_messaging_values;
pub use overall::parse_overall;
pub use tone::parse_tone_adjustment;
pub use voice::parse_voice_personality;
