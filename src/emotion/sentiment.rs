// Lexicon-based sentiment scoring
// AFINN-style signed word polarities summed over the text

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::poem::tokenize_words;

/// Sentiment score for a piece of text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentScore {
    /// Sum of matched word polarities
    pub score: i32,

    /// Score normalized by word count; typically within [-2, 2]
    pub comparative: f32,

    /// Matched positive words, in match order
    pub positive: Vec<String>,

    /// Matched negative words, in match order
    pub negative: Vec<String>,
}

impl SentimentScore {
    /// All-zero result for empty input
    pub fn zero() -> Self {
        SentimentScore {
            score: 0,
            comparative: 0.0,
            positive: Vec::new(),
            negative: Vec::new(),
        }
    }
}

lazy_static::lazy_static! {
    /// Word → polarity table, AFINN convention: -5 (most negative) to +5
    static ref POLARITY: HashMap<&'static str, i32> = {
        let mut m = HashMap::new();

        // positive
        m.insert("love", 3);
        m.insert("loved", 3);
        m.insert("loving", 3);
        m.insert("lovely", 3);
        m.insert("joy", 3);
        m.insert("joyful", 3);
        m.insert("happy", 3);
        m.insert("happiness", 3);
        m.insert("bliss", 3);
        m.insert("blissful", 3);
        m.insert("delight", 3);
        m.insert("glad", 3);
        m.insert("beautiful", 3);
        m.insert("beauty", 3);
        m.insert("radiant", 3);
        m.insert("adore", 3);
        m.insert("cherish", 3);
        m.insert("blessed", 3);
        m.insert("paradise", 3);
        m.insert("wonderful", 4);
        m.insert("triumph", 4);
        m.insert("victory", 3);
        m.insert("hope", 2);
        m.insert("hopeful", 2);
        m.insert("sweet", 2);
        m.insert("bright", 2);
        m.insert("smile", 2);
        m.insert("laugh", 2);
        m.insert("laughter", 2);
        m.insert("peace", 2);
        m.insert("peaceful", 2);
        m.insert("calm", 2);
        m.insert("gentle", 2);
        m.insert("warm", 2);
        m.insert("tender", 2);
        m.insert("dear", 2);
        m.insert("grace", 2);
        m.insert("golden", 2);
        m.insert("heaven", 2);
        m.insert("wonder", 2);
        m.insert("shine", 2);
        m.insert("shining", 2);
        m.insert("embrace", 2);
        m.insert("kind", 2);
        m.insert("friend", 2);
        m.insert("free", 1);
        m.insert("alive", 1);
        m.insert("dream", 1);
        m.insert("dreams", 1);
        m.insert("spring", 1);

        // negative
        m.insert("sad", -2);
        m.insert("sadness", -2);
        m.insert("sorrow", -3);
        m.insert("grief", -3);
        m.insert("mourn", -2);
        m.insert("mourning", -2);
        m.insert("pain", -2);
        m.insert("ache", -2);
        m.insert("tears", -2);
        m.insert("weep", -2);
        m.insert("weeping", -2);
        m.insert("cry", -1);
        m.insert("dark", -1);
        m.insert("darkness", -1);
        m.insert("death", -2);
        m.insert("dead", -3);
        m.insert("die", -3);
        m.insert("dying", -3);
        m.insert("grave", -2);
        m.insert("lonely", -2);
        m.insert("alone", -1);
        m.insert("fear", -2);
        m.insert("fearful", -2);
        m.insert("afraid", -2);
        m.insert("terror", -3);
        m.insert("dread", -3);
        m.insert("despair", -3);
        m.insert("anguish", -3);
        m.insert("misery", -3);
        m.insert("broken", -1);
        m.insert("lost", -1);
        m.insert("cold", -1);
        m.insert("bitter", -2);
        m.insert("anger", -3);
        m.insert("angry", -3);
        m.insert("rage", -3);
        m.insert("fury", -3);
        m.insert("hate", -3);
        m.insert("hatred", -3);
        m.insert("cruel", -3);
        m.insert("war", -2);
        m.insert("empty", -1);
        m.insert("hollow", -1);
        m.insert("weary", -2);
        m.insert("ghost", -1);
        m.insert("wound", -2);
        m.insert("winter", -1);

        m
    };
}

/// Score the sentiment of a text against the polarity table
///
/// Every occurrence of a matched word contributes its polarity to the
/// total; `comparative` divides by the full word count. Empty input
/// yields the all-zero result.
pub fn analyze_sentiment(text: &str) -> SentimentScore {
    let words = tokenize_words(text);

    if words.is_empty() {
        return SentimentScore::zero();
    }

    let mut score = 0;
    let mut positive = Vec::new();
    let mut negative = Vec::new();

    for word in &words {
        if let Some(&polarity) = POLARITY.get(word.as_str()) {
            score += polarity;
            if polarity > 0 {
                positive.push(word.clone());
            } else {
                negative.push(word.clone());
            }
        }
    }

    SentimentScore {
        score,
        comparative: score as f32 / words.len() as f32,
        positive,
        negative,
    }
}
