// Emotion analysis module
// Sentiment scoring, emotion keywords, valence/arousal, musical suggestions

pub mod analyze;
pub mod arc;
pub mod lexicon;
pub mod music;
pub mod sentiment;
pub mod va;

pub use analyze::{analyze_emotion, EmotionalAnalysis};
pub use arc::{analyze_emotional_arc, ArcEntry, EmotionalArc, Trajectory};
pub use lexicon::{detect_emotional_keywords, EmotionCategory, EmotionKeyword, ALL_EMOTIONS};
pub use music::{
    params_for_emotion, suggest_musical_parameters, Dynamics, Mode, MusicalParams, Register,
};
pub use sentiment::{analyze_sentiment, SentimentScore};
pub use va::{
    blend_keyword_emotions, blend_va, emotion_va, map_to_valence_arousal, va_to_emotion, VAPoint,
};
