// Top-level emotion analysis
// Blends sentiment and keyword evidence into a poem-level emotional profile

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::emotion::arc::{analyze_emotional_arc, EmotionalArc};
use crate::emotion::lexicon::{
    detect_emotional_keywords, EmotionCategory, EmotionKeyword, ALL_EMOTIONS,
};
use crate::emotion::music::{suggest_musical_parameters, MusicalParams};
use crate::emotion::sentiment::analyze_sentiment;
use crate::emotion::va::{
    blend_keyword_emotions, blend_va, map_to_valence_arousal, va_to_emotion, VAPoint,
};

/// Maximum number of dominant emotions reported
const MAX_DOMINANT_EMOTIONS: usize = 3;

/// Poem-level emotional analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionalAnalysis {
    /// Overall sentiment in [-1.0, 1.0]
    pub overall_sentiment: f32,

    /// Blended arousal in [0.0, 1.0]
    pub arousal: f32,

    /// Most significant emotions first; 1 to 3 entries
    pub dominant_emotions: Vec<EmotionCategory>,

    /// Stanza-by-stanza sentiment trajectory
    pub emotional_arc: EmotionalArc,

    /// Musical parameters suggested by the dominant emotion
    pub suggested_music_params: MusicalParams,
}

/// Analyze the emotional content of a poem
///
/// `text` is the full poem; `stanzas` are its stanza texts in order
/// (used for the emotional arc). The result is deterministic for
/// identical inputs.
pub fn analyze_emotion(text: &str, stanzas: &[String]) -> EmotionalAnalysis {
    let sentiment = analyze_sentiment(text);
    let keywords = detect_emotional_keywords(text);

    let sentiment_va = map_to_valence_arousal(&sentiment);
    let keyword_va = blend_keyword_emotions(&keywords);
    let blended = blend_va(sentiment_va, keyword_va);

    let dominant_emotions = dominant_emotions(&keywords, blended);
    let suggested_music_params = suggest_musical_parameters(&dominant_emotions, blended);

    EmotionalAnalysis {
        overall_sentiment: sentiment.comparative.clamp(-1.0, 1.0),
        arousal: blended.arousal,
        dominant_emotions,
        emotional_arc: analyze_emotional_arc(stanzas),
        suggested_music_params,
    }
}

/// Top categories by summed keyword intensity, strongest first
///
/// Falls back to the nearest valence/arousal category when no keywords
/// matched, so the result always has at least one entry.
fn dominant_emotions(keywords: &[EmotionKeyword], blended: VAPoint) -> Vec<EmotionCategory> {
    let mut totals: HashMap<EmotionCategory, f32> = HashMap::new();
    for keyword in keywords {
        *totals.entry(keyword.emotion).or_insert(0.0) += keyword.intensity;
    }

    if totals.is_empty() {
        return vec![va_to_emotion(blended)];
    }

    // Fixed category order keeps equal-intensity ordering deterministic
    let mut ranked: Vec<(EmotionCategory, f32)> = ALL_EMOTIONS
        .iter()
        .filter_map(|&emotion| totals.get(&emotion).map(|&total| (emotion, total)))
        .collect();

    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    ranked
        .into_iter()
        .take(MAX_DOMINANT_EMOTIONS)
        .map(|(emotion, _)| emotion)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emotion::music::Mode;

    #[test]
    fn test_happy_poem() {
        let text = "joy and laughter fill the morning\nwe dance and smile in sunshine";
        let result = analyze_emotion(text, &[text.to_string()]);

        assert!(result.overall_sentiment > 0.0);
        assert_eq!(result.dominant_emotions[0], EmotionCategory::Happy);
        assert_eq!(result.suggested_music_params.mode, Mode::Major);
    }

    #[test]
    fn test_sad_poem() {
        let text = "sorrow and tears and weeping grief";
        let result = analyze_emotion(text, &[text.to_string()]);

        assert!(result.overall_sentiment < 0.0);
        assert_eq!(result.dominant_emotions[0], EmotionCategory::Sad);
        assert_eq!(result.suggested_music_params.mode, Mode::Minor);
    }

    #[test]
    fn test_empty_input() {
        let result = analyze_emotion("", &[]);

        assert_eq!(result.overall_sentiment, 0.0);
        assert_eq!(result.dominant_emotions.len(), 1);
        assert!(result.emotional_arc.entries.is_empty());
    }

    #[test]
    fn test_no_keywords_falls_back_to_va() {
        let result = analyze_emotion("the tree stands on the hill", &[]);
        // Nothing matched: one category derived from the neutral-ish blend
        assert_eq!(result.dominant_emotions.len(), 1);
    }

    #[test]
    fn test_at_most_three_dominant_emotions() {
        let text = "joy sorrow rage peace fear memory hope love lonely tense";
        let result = analyze_emotion(text, &[]);
        assert!(result.dominant_emotions.len() <= 3);
        assert!(!result.dominant_emotions.is_empty());
    }

    #[test]
    fn test_determinism() {
        let text = "joy and sorrow and the quiet rain";
        let stanzas = vec![text.to_string()];
        let a = analyze_emotion(text, &stanzas);
        let b = analyze_emotion(text, &stanzas);
        assert_eq!(a, b);
    }

    #[test]
    fn test_overall_sentiment_clamped() {
        // comparative 3.0 clamps to 1.0
        let result = analyze_emotion("joy joy", &[]);
        assert_eq!(result.overall_sentiment, 1.0);
    }
}
