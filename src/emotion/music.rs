// Emotion to musical parameter mapping
// Fixed per-emotion suggestions for mode, tempo, register, key, dynamics

use serde::{Deserialize, Serialize};

use crate::emotion::lexicon::EmotionCategory;
use crate::emotion::va::{va_to_emotion, VAPoint};

/// Musical modes suggested by the emotion mapping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    Major,
    Minor,
    Dorian,
    Phrygian,
    Lydian,
    Mixolydian,
}

/// Pitch register for the melody
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Register {
    Low,
    Mid,
    High,
}

/// Dynamic level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dynamics {
    Soft,
    Moderate,
    Loud,
}

/// Complete musical parameter suggestion for a poem
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MusicalParams {
    pub mode: Mode,

    /// Suggested BPM range
    pub tempo_range: (u32, u32),

    pub register: Register,

    /// Suggested key, e.g. "C major"
    pub suggested_key: String,

    pub dynamics: Dynamics,
}

/// Fixed mapping from emotion category to musical parameters
///
/// Tempo ranges and keys follow common affective-music conventions:
/// positive high-arousal emotions get faster major-mode settings,
/// negative low-arousal emotions get slower minor-mode ones.
pub fn params_for_emotion(emotion: EmotionCategory) -> MusicalParams {
    match emotion {
        EmotionCategory::Happy => MusicalParams {
            mode: Mode::Major,
            tempo_range: (110, 140),
            register: Register::High,
            suggested_key: "C major".to_string(),
            dynamics: Dynamics::Loud,
        },
        EmotionCategory::Sad => MusicalParams {
            mode: Mode::Minor,
            tempo_range: (60, 80),
            register: Register::Low,
            suggested_key: "D minor".to_string(),
            dynamics: Dynamics::Soft,
        },
        EmotionCategory::Angry => MusicalParams {
            mode: Mode::Phrygian,
            tempo_range: (130, 170),
            register: Register::Low,
            suggested_key: "E minor".to_string(),
            dynamics: Dynamics::Loud,
        },
        EmotionCategory::Peaceful => MusicalParams {
            mode: Mode::Major,
            tempo_range: (60, 85),
            register: Register::Mid,
            suggested_key: "F major".to_string(),
            dynamics: Dynamics::Soft,
        },
        EmotionCategory::Tense => MusicalParams {
            mode: Mode::Minor,
            tempo_range: (120, 150),
            register: Register::Mid,
            suggested_key: "B minor".to_string(),
            dynamics: Dynamics::Moderate,
        },
        EmotionCategory::Nostalgic => MusicalParams {
            mode: Mode::Dorian,
            tempo_range: (70, 95),
            register: Register::Mid,
            suggested_key: "A minor".to_string(),
            dynamics: Dynamics::Soft,
        },
        EmotionCategory::Hopeful => MusicalParams {
            mode: Mode::Lydian,
            tempo_range: (95, 120),
            register: Register::High,
            suggested_key: "G major".to_string(),
            dynamics: Dynamics::Moderate,
        },
        EmotionCategory::Fearful => MusicalParams {
            mode: Mode::Minor,
            tempo_range: (110, 140),
            register: Register::Low,
            suggested_key: "C minor".to_string(),
            dynamics: Dynamics::Soft,
        },
        EmotionCategory::Loving => MusicalParams {
            mode: Mode::Major,
            tempo_range: (75, 100),
            register: Register::Mid,
            suggested_key: "A major".to_string(),
            dynamics: Dynamics::Moderate,
        },
        EmotionCategory::Lonely => MusicalParams {
            mode: Mode::Minor,
            tempo_range: (55, 75),
            register: Register::Low,
            suggested_key: "F sharp minor".to_string(),
            dynamics: Dynamics::Soft,
        },
    }
}

/// Suggest musical parameters for a poem's emotional profile
///
/// If a dominant emotion exists its mapping is returned verbatim;
/// otherwise the nearest category in valence/arousal space decides.
pub fn suggest_musical_parameters(
    dominant_emotions: &[EmotionCategory],
    va: VAPoint,
) -> MusicalParams {
    match dominant_emotions.first() {
        Some(&emotion) => params_for_emotion(emotion),
        None => params_for_emotion(va_to_emotion(va)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emotion::lexicon::ALL_EMOTIONS;
    use crate::emotion::va::emotion_va;

    #[test]
    fn test_every_emotion_has_params() {
        for emotion in ALL_EMOTIONS {
            let params = params_for_emotion(emotion);
            assert!(params.tempo_range.0 < params.tempo_range.1);
            assert!(!params.suggested_key.is_empty());
        }
    }

    #[test]
    fn test_happy_and_sad_mappings() {
        let happy = params_for_emotion(EmotionCategory::Happy);
        assert_eq!(happy.mode, Mode::Major);
        assert_eq!(happy.suggested_key, "C major");

        let sad = params_for_emotion(EmotionCategory::Sad);
        assert_eq!(sad.mode, Mode::Minor);
        assert!(sad.tempo_range.1 <= happy.tempo_range.0);
    }

    #[test]
    fn test_dominant_emotion_wins() {
        let params = suggest_musical_parameters(
            &[EmotionCategory::Angry],
            emotion_va(EmotionCategory::Peaceful),
        );
        assert_eq!(params, params_for_emotion(EmotionCategory::Angry));
    }

    #[test]
    fn test_fallback_derives_from_va() {
        let params = suggest_musical_parameters(&[], emotion_va(EmotionCategory::Peaceful));
        assert_eq!(params, params_for_emotion(EmotionCategory::Peaceful));
    }
}
