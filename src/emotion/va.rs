// Valence/arousal mapping
// Russell circumplex coordinates for sentiment scores and emotion keywords

use serde::{Deserialize, Serialize};

use crate::emotion::lexicon::{EmotionCategory, EmotionKeyword, ALL_EMOTIONS};
use crate::emotion::sentiment::SentimentScore;

/// Weight of the raw sentiment score in the final blend
pub const SENTIMENT_WEIGHT: f32 = 0.4;

/// Weight of keyword-derived evidence in the final blend
pub const KEYWORD_WEIGHT: f32 = 0.6;

/// A point on Russell's circumplex: valence is positive/negative affect,
/// arousal is energy level; both in [0.0, 1.0]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VAPoint {
    pub valence: f32,
    pub arousal: f32,
}

impl VAPoint {
    /// The neutral midpoint
    pub const NEUTRAL: VAPoint = VAPoint {
        valence: 0.5,
        arousal: 0.5,
    };

    /// Euclidean distance to another point
    pub fn distance_to(&self, other: &VAPoint) -> f32 {
        let dv = self.valence - other.valence;
        let da = self.arousal - other.arousal;
        (dv * dv + da * da).sqrt()
    }
}

/// Circumplex coordinates for each emotion category
pub fn emotion_va(emotion: EmotionCategory) -> VAPoint {
    let (valence, arousal) = match emotion {
        EmotionCategory::Happy => (0.9, 0.7),
        EmotionCategory::Sad => (0.15, 0.25),
        EmotionCategory::Angry => (0.15, 0.85),
        EmotionCategory::Peaceful => (0.7, 0.2),
        EmotionCategory::Tense => (0.3, 0.8),
        EmotionCategory::Nostalgic => (0.45, 0.35),
        EmotionCategory::Hopeful => (0.75, 0.55),
        EmotionCategory::Fearful => (0.2, 0.75),
        EmotionCategory::Loving => (0.85, 0.5),
        EmotionCategory::Lonely => (0.2, 0.3),
    };

    VAPoint { valence, arousal }
}

/// Map a sentiment score onto the circumplex
///
/// Valence rescales the clamped comparative into [0, 1]. Arousal averages
/// two magnitude signals: total score strength and matched-word count.
pub fn map_to_valence_arousal(sentiment: &SentimentScore) -> VAPoint {
    let valence = (sentiment.comparative.clamp(-1.0, 1.0) + 1.0) / 2.0;

    let score_strength = (sentiment.score.abs() as f32 / 10.0).min(1.0);
    let word_strength =
        ((sentiment.positive.len() + sentiment.negative.len()) as f32 / 5.0).min(1.0);
    let arousal = (score_strength + word_strength) / 2.0;

    VAPoint { valence, arousal }
}

/// Intensity-weighted average of matched keywords' category coordinates
/// Neutral when no keywords matched
pub fn blend_keyword_emotions(keywords: &[EmotionKeyword]) -> VAPoint {
    let total: f32 = keywords.iter().map(|k| k.intensity).sum();

    if total <= 0.0 {
        return VAPoint::NEUTRAL;
    }

    let mut valence = 0.0;
    let mut arousal = 0.0;

    for keyword in keywords {
        let va = emotion_va(keyword.emotion);
        valence += va.valence * keyword.intensity;
        arousal += va.arousal * keyword.intensity;
    }

    VAPoint {
        valence: valence / total,
        arousal: arousal / total,
    }
}

/// Blend sentiment-derived and keyword-derived points
/// Keyword evidence is weighted higher than raw lexical sentiment
pub fn blend_va(sentiment_va: VAPoint, keyword_va: VAPoint) -> VAPoint {
    VAPoint {
        valence: SENTIMENT_WEIGHT * sentiment_va.valence + KEYWORD_WEIGHT * keyword_va.valence,
        arousal: SENTIMENT_WEIGHT * sentiment_va.arousal + KEYWORD_WEIGHT * keyword_va.arousal,
    }
}

/// Nearest emotion category to a point, by Euclidean distance
/// Ties resolve to the earliest category in [`ALL_EMOTIONS`]
pub fn va_to_emotion(va: VAPoint) -> EmotionCategory {
    let mut best = ALL_EMOTIONS[0];
    let mut best_distance = f32::MAX;

    for emotion in ALL_EMOTIONS {
        let distance = va.distance_to(&emotion_va(emotion));
        if distance < best_distance {
            best_distance = distance;
            best = emotion;
        }
    }

    best
}
