// Emotion keyword lexicons
// Ten emotion categories, each a word → intensity table

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::poem::tokenize_words;

/// The ten emotion categories tracked by the analyzer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmotionCategory {
    Happy,
    Sad,
    Angry,
    Peaceful,
    Tense,
    Nostalgic,
    Hopeful,
    Fearful,
    Loving,
    Lonely,
}

/// All categories in a fixed order; ties elsewhere resolve to the
/// earliest entry
pub const ALL_EMOTIONS: [EmotionCategory; 10] = [
    EmotionCategory::Happy,
    EmotionCategory::Sad,
    EmotionCategory::Angry,
    EmotionCategory::Peaceful,
    EmotionCategory::Tense,
    EmotionCategory::Nostalgic,
    EmotionCategory::Hopeful,
    EmotionCategory::Fearful,
    EmotionCategory::Loving,
    EmotionCategory::Lonely,
];

impl EmotionCategory {
    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            EmotionCategory::Happy => "happy",
            EmotionCategory::Sad => "sad",
            EmotionCategory::Angry => "angry",
            EmotionCategory::Peaceful => "peaceful",
            EmotionCategory::Tense => "tense",
            EmotionCategory::Nostalgic => "nostalgic",
            EmotionCategory::Hopeful => "hopeful",
            EmotionCategory::Fearful => "fearful",
            EmotionCategory::Loving => "loving",
            EmotionCategory::Lonely => "lonely",
        }
    }

    /// Convert from string representation
    pub fn from_string(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "happy" => Some(EmotionCategory::Happy),
            "sad" => Some(EmotionCategory::Sad),
            "angry" => Some(EmotionCategory::Angry),
            "peaceful" => Some(EmotionCategory::Peaceful),
            "tense" => Some(EmotionCategory::Tense),
            "nostalgic" => Some(EmotionCategory::Nostalgic),
            "hopeful" => Some(EmotionCategory::Hopeful),
            "fearful" => Some(EmotionCategory::Fearful),
            "loving" => Some(EmotionCategory::Loving),
            "lonely" => Some(EmotionCategory::Lonely),
            _ => None,
        }
    }
}

/// A word matched against an emotion category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionKeyword {
    pub word: String,
    pub emotion: EmotionCategory,

    /// How strongly the word evokes the category [0.0, 1.0]
    pub intensity: f32,
}

lazy_static::lazy_static! {
    /// Per-category keyword tables; intensities in [0.0, 1.0]
    static ref EMOTION_LEXICON: HashMap<EmotionCategory, HashMap<&'static str, f32>> = {
        let mut lex = HashMap::new();

        let mut happy = HashMap::new();
        happy.insert("happy", 0.9);
        happy.insert("joy", 0.9);
        happy.insert("joyful", 0.9);
        happy.insert("delight", 0.8);
        happy.insert("laughter", 0.8);
        happy.insert("laugh", 0.7);
        happy.insert("smile", 0.7);
        happy.insert("glad", 0.7);
        happy.insert("merry", 0.8);
        happy.insert("cheer", 0.7);
        happy.insert("sunshine", 0.6);
        happy.insert("dance", 0.6);
        happy.insert("dancing", 0.6);
        happy.insert("singing", 0.6);
        happy.insert("bright", 0.5);
        happy.insert("golden", 0.4);
        happy.insert("bliss", 0.9);
        happy.insert("celebrate", 0.8);
        lex.insert(EmotionCategory::Happy, happy);

        let mut sad = HashMap::new();
        sad.insert("sad", 0.9);
        sad.insert("sadness", 0.9);
        sad.insert("sorrow", 0.9);
        sad.insert("grief", 0.9);
        sad.insert("mourn", 0.8);
        sad.insert("mourning", 0.8);
        sad.insert("tears", 0.8);
        sad.insert("weep", 0.8);
        sad.insert("weeping", 0.8);
        sad.insert("cry", 0.7);
        sad.insert("loss", 0.7);
        sad.insert("grave", 0.6);
        sad.insert("farewell", 0.6);
        sad.insert("goodbye", 0.6);
        sad.insert("broken", 0.6);
        sad.insert("ashes", 0.5);
        sad.insert("rain", 0.3);
        sad.insert("grey", 0.4);
        lex.insert(EmotionCategory::Sad, sad);

        let mut angry = HashMap::new();
        angry.insert("anger", 0.9);
        angry.insert("angry", 0.9);
        angry.insert("rage", 0.9);
        angry.insert("fury", 0.9);
        angry.insert("furious", 0.9);
        angry.insert("wrath", 0.9);
        angry.insert("hate", 0.8);
        angry.insert("hatred", 0.8);
        angry.insert("burn", 0.6);
        angry.insert("burning", 0.6);
        angry.insert("storm", 0.5);
        angry.insert("fire", 0.5);
        angry.insert("curse", 0.7);
        angry.insert("scream", 0.7);
        angry.insert("fight", 0.6);
        angry.insert("war", 0.6);
        lex.insert(EmotionCategory::Angry, angry);

        let mut peaceful = HashMap::new();
        peaceful.insert("peace", 0.9);
        peaceful.insert("peaceful", 0.9);
        peaceful.insert("calm", 0.8);
        peaceful.insert("serene", 0.9);
        peaceful.insert("serenity", 0.9);
        peaceful.insert("quiet", 0.7);
        peaceful.insert("still", 0.6);
        peaceful.insert("stillness", 0.7);
        peaceful.insert("gentle", 0.6);
        peaceful.insert("meadow", 0.5);
        peaceful.insert("breeze", 0.5);
        peaceful.insert("slumber", 0.6);
        peaceful.insert("rest", 0.5);
        peaceful.insert("tranquil", 0.9);
        peaceful.insert("hush", 0.6);
        lex.insert(EmotionCategory::Peaceful, peaceful);

        let mut tense = HashMap::new();
        tense.insert("tense", 0.9);
        tense.insert("tension", 0.9);
        tense.insert("anxious", 0.8);
        tense.insert("restless", 0.7);
        tense.insert("trembling", 0.7);
        tense.insert("tremble", 0.7);
        tense.insert("racing", 0.6);
        tense.insert("pounding", 0.6);
        tense.insert("edge", 0.5);
        tense.insert("waiting", 0.4);
        tense.insert("thunder", 0.5);
        tense.insert("lightning", 0.5);
        tense.insert("shiver", 0.6);
        tense.insert("breathless", 0.6);
        lex.insert(EmotionCategory::Tense, tense);

        let mut nostalgic = HashMap::new();
        nostalgic.insert("memory", 0.8);
        nostalgic.insert("memories", 0.8);
        nostalgic.insert("remember", 0.8);
        nostalgic.insert("yesterday", 0.7);
        nostalgic.insert("childhood", 0.7);
        nostalgic.insert("faded", 0.6);
        nostalgic.insert("echo", 0.5);
        nostalgic.insert("echoes", 0.5);
        nostalgic.insert("long", 0.3);
        nostalgic.insert("once", 0.5);
        nostalgic.insert("old", 0.4);
        nostalgic.insert("ago", 0.6);
        nostalgic.insert("autumn", 0.5);
        nostalgic.insert("photograph", 0.7);
        nostalgic.insert("return", 0.4);
        lex.insert(EmotionCategory::Nostalgic, nostalgic);

        let mut hopeful = HashMap::new();
        hopeful.insert("hope", 0.9);
        hopeful.insert("hopeful", 0.9);
        hopeful.insert("dawn", 0.7);
        hopeful.insert("sunrise", 0.7);
        hopeful.insert("tomorrow", 0.6);
        hopeful.insert("promise", 0.7);
        hopeful.insert("rise", 0.6);
        hopeful.insert("rising", 0.6);
        hopeful.insert("spring", 0.5);
        hopeful.insert("seed", 0.5);
        hopeful.insert("bloom", 0.6);
        hopeful.insert("blossom", 0.6);
        hopeful.insert("light", 0.4);
        hopeful.insert("wings", 0.5);
        hopeful.insert("dream", 0.5);
        hopeful.insert("dreams", 0.5);
        lex.insert(EmotionCategory::Hopeful, hopeful);

        let mut fearful = HashMap::new();
        fearful.insert("fear", 0.9);
        fearful.insert("fearful", 0.9);
        fearful.insert("afraid", 0.9);
        fearful.insert("terror", 0.9);
        fearful.insert("dread", 0.9);
        fearful.insert("horror", 0.9);
        fearful.insert("nightmare", 0.8);
        fearful.insert("ghost", 0.6);
        fearful.insert("shadow", 0.4);
        fearful.insert("shadows", 0.4);
        fearful.insert("darkness", 0.5);
        fearful.insert("creeping", 0.6);
        fearful.insert("haunted", 0.7);
        fearful.insert("grave", 0.5);
        fearful.insert("bones", 0.5);
        lex.insert(EmotionCategory::Fearful, fearful);

        let mut loving = HashMap::new();
        loving.insert("love", 0.9);
        loving.insert("loved", 0.9);
        loving.insert("loving", 0.9);
        loving.insert("beloved", 0.9);
        loving.insert("heart", 0.6);
        loving.insert("kiss", 0.8);
        loving.insert("embrace", 0.7);
        loving.insert("tender", 0.7);
        loving.insert("darling", 0.8);
        loving.insert("dear", 0.6);
        loving.insert("devotion", 0.8);
        loving.insert("adore", 0.9);
        loving.insert("cherish", 0.8);
        loving.insert("sweetheart", 0.9);
        loving.insert("rose", 0.5);
        lex.insert(EmotionCategory::Loving, loving);

        let mut lonely = HashMap::new();
        lonely.insert("lonely", 0.9);
        lonely.insert("loneliness", 0.9);
        lonely.insert("alone", 0.8);
        lonely.insert("lonesome", 0.9);
        lonely.insert("solitude", 0.7);
        lonely.insert("solitary", 0.7);
        lonely.insert("empty", 0.6);
        lonely.insert("hollow", 0.6);
        lonely.insert("abandoned", 0.8);
        lonely.insert("forsaken", 0.8);
        lonely.insert("distant", 0.5);
        lonely.insert("stranger", 0.5);
        lonely.insert("silence", 0.4);
        lonely.insert("nobody", 0.7);
        lex.insert(EmotionCategory::Lonely, lonely);

        lex
    };
}

/// Look up a word's intensity in one category's lexicon
pub fn keyword_intensity(word: &str, emotion: EmotionCategory) -> Option<f32> {
    EMOTION_LEXICON
        .get(&emotion)
        .and_then(|table| table.get(word).copied())
}

/// Detect emotion keywords in a text
///
/// Words are matched case-insensitively against every category lexicon;
/// a word may match several categories and is reported once per matching
/// category. Repeated words are skipped after their first occurrence.
pub fn detect_emotional_keywords(text: &str) -> Vec<EmotionKeyword> {
    let words = tokenize_words(text);
    let mut seen: HashSet<String> = HashSet::new();
    let mut keywords = Vec::new();

    for word in words {
        if !seen.insert(word.clone()) {
            continue;
        }

        for emotion in ALL_EMOTIONS {
            if let Some(intensity) = keyword_intensity(&word, emotion) {
                keywords.push(EmotionKeyword {
                    word: word.clone(),
                    emotion,
                    intensity,
                });
            }
        }
    }

    keywords
}
