use super::extract::{extract_content, rubric};
use super::types::{PersonalityScores, VoicePersonalityEvaluation, VoiceScores};

/// Parses the voice/personality response.
///
/// The returned record carries the measured tone score; callers building a
/// tone-adjustment follow-up read it from `tone.score` and pass it along
/// explicitly.
pub fn parse_voice_personality(response: &str) -> VoicePersonalityEvaluation {
    let personality = extract_content(response, "personality_evaluation");
    let voice = extract_content(response, "voice_evaluation");
    let tone = extract_content(response, "tone_evaluation");

    VoicePersonalityEvaluation {
        personality: PersonalityScores {
            supportive_challenger: rubric(&extract_content(&personality, "supportive_challenger")),
            white_collar_mechanic: rubric(&extract_content(&personality, "white_collar_mechanic")),
        },
        voice: VoiceScores {
            natural_conversational: rubric(&extract_content(&voice, "natural_conversational")),
            authentic_approachable: rubric(&extract_content(&voice, "authentic_approachable")),
            gender_neutral: rubric(&extract_content(&voice, "gender_neutral")),
            channel_tailored: rubric(&extract_content(&voice, "channel_tailored")),
        },
        tone: rubric(&tone),
    }
}
