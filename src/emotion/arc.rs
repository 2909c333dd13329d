// Emotional arc tracking
// Per-stanza sentiment trajectory across a poem

use serde::{Deserialize, Serialize};

use crate::emotion::lexicon::{detect_emotional_keywords, EmotionKeyword};
use crate::emotion::sentiment::analyze_sentiment;

/// First-third versus last-third mean difference beyond which the arc
/// counts as rising or falling
pub const TRAJECTORY_THRESHOLD: f32 = 0.15;

/// Sentiment variance beyond which a non-directional arc counts as varied
pub const VARIANCE_THRESHOLD: f32 = 0.15;

/// Overall direction of a poem's emotional arc
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trajectory {
    Rising,
    Falling,
    Varied,
    Stable,
}

/// Sentiment snapshot of a single stanza
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArcEntry {
    pub stanza_index: usize,

    /// Normalized stanza sentiment in [-1.0, 1.0]
    pub sentiment: f32,

    /// Emotion keywords matched in this stanza
    pub keywords: Vec<EmotionKeyword>,
}

/// Emotional arc across a poem's stanzas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionalArc {
    pub entries: Vec<ArcEntry>,
    pub trajectory: Trajectory,

    /// Spread between the most positive and most negative stanza
    pub range: f32,

    /// Index of the stanza with the strongest sentiment (first on ties)
    pub peak_stanza: usize,
}

impl EmotionalArc {
    /// Flat arc for empty input
    pub fn empty() -> Self {
        EmotionalArc {
            entries: Vec::new(),
            trajectory: Trajectory::Stable,
            range: 0.0,
            peak_stanza: 0,
        }
    }
}

/// Track sentiment stanza by stanza and classify the overall trajectory
///
/// Trajectory compares the mean sentiment of the first third of stanzas
/// against the last third: a difference beyond [`TRAJECTORY_THRESHOLD`]
/// reads as rising or falling; otherwise high variance reads as varied,
/// and anything else as stable.
pub fn analyze_emotional_arc(stanzas: &[String]) -> EmotionalArc {
    if stanzas.is_empty() {
        return EmotionalArc::empty();
    }

    let mut entries = Vec::with_capacity(stanzas.len());
    for (stanza_index, stanza) in stanzas.iter().enumerate() {
        let sentiment = analyze_sentiment(stanza);
        entries.push(ArcEntry {
            stanza_index,
            sentiment: sentiment.comparative.clamp(-1.0, 1.0),
            keywords: detect_emotional_keywords(stanza),
        });
    }

    let sentiments: Vec<f32> = entries.iter().map(|e| e.sentiment).collect();

    let min = sentiments.iter().cloned().fold(f32::MAX, f32::min);
    let max = sentiments.iter().cloned().fold(f32::MIN, f32::max);
    let range = max - min;

    let peak_stanza = sentiments
        .iter()
        .enumerate()
        .max_by(|(_, a), (_, b)| {
            a.abs()
                .partial_cmp(&b.abs())
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|(i, _)| i)
        .unwrap_or(0);

    EmotionalArc {
        trajectory: classify_trajectory(&sentiments),
        entries,
        range,
        peak_stanza,
    }
}

fn classify_trajectory(sentiments: &[f32]) -> Trajectory {
    let n = sentiments.len();
    if n < 2 {
        return Trajectory::Stable;
    }

    let third = (n / 3).max(1);
    let first_mean = mean(&sentiments[..third]);
    let last_mean = mean(&sentiments[n - third..]);
    let diff = last_mean - first_mean;

    if diff > TRAJECTORY_THRESHOLD {
        return Trajectory::Rising;
    }
    if diff < -TRAJECTORY_THRESHOLD {
        return Trajectory::Falling;
    }

    if variance(sentiments) > VARIANCE_THRESHOLD {
        Trajectory::Varied
    } else {
        Trajectory::Stable
    }
}

fn mean(values: &[f32]) -> f32 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f32>() / values.len() as f32
}

fn variance(values: &[f32]) -> f32 {
    if values.is_empty() {
        return 0.0;
    }
    let m = mean(values);
    values.iter().map(|v| (v - m) * (v - m)).sum::<f32>() / values.len() as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        let arc = analyze_emotional_arc(&[]);
        assert!(arc.entries.is_empty());
        assert_eq!(arc.trajectory, Trajectory::Stable);
        assert_eq!(arc.range, 0.0);
        assert_eq!(arc.peak_stanza, 0);
    }

    #[test]
    fn test_falling_arc() {
        // joy → shadow → sorrow: first third clearly above last third
        let stanzas = vec![
            "the morning sun brings joy and laughter".to_string(),
            "the shadow falls across the field".to_string(),
            "the cold night brings sorrow and tears".to_string(),
        ];
        let arc = analyze_emotional_arc(&stanzas);
        assert_eq!(arc.entries.len(), 3);
        assert_eq!(arc.trajectory, Trajectory::Falling);
        assert!(arc.range > 0.0);
    }

    #[test]
    fn test_rising_arc() {
        let stanzas = vec![
            "sorrow and grief and tears".to_string(),
            "the field lies quiet".to_string(),
            "hope and joy and love return".to_string(),
        ];
        let arc = analyze_emotional_arc(&stanzas);
        assert_eq!(arc.trajectory, Trajectory::Rising);
    }

    #[test]
    fn test_stable_arc() {
        let stanzas = vec![
            "the tree stands on the hill".to_string(),
            "the river runs to the sea".to_string(),
            "the road winds through the vale".to_string(),
        ];
        let arc = analyze_emotional_arc(&stanzas);
        assert_eq!(arc.trajectory, Trajectory::Stable);
        assert_eq!(arc.range, 0.0);
    }

    #[test]
    fn test_peak_stanza_is_strongest() {
        let stanzas = vec![
            "the field".to_string(),
            "sorrow grief tears weeping anguish".to_string(),
            "a quiet morning".to_string(),
        ];
        let arc = analyze_emotional_arc(&stanzas);
        assert_eq!(arc.peak_stanza, 1);
    }

    #[test]
    fn test_single_stanza_is_stable() {
        let arc = analyze_emotional_arc(&["joy and delight".to_string()]);
        assert_eq!(arc.entries.len(), 1);
        assert_eq!(arc.trajectory, Trajectory::Stable);
    }
}
