// Form detection types
// Known poem forms, detection input, evidence, and results

use serde::{Deserialize, Serialize};

use crate::stress::FootType;

/// Named poem forms the detector recognizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PoemForm {
    ShakespeareanSonnet,
    PetrarchanSonnet,
    SpenserianSonnet,
    Villanelle,
    Sestina,
    Limerick,
    Haiku,
    Tanka,
    Cinquain,
    TerzaRima,
    CommonMeter,
    Ballad,
    HeroicCouplet,
    BlankVerse,
    Quatrain,
    Tercet,
    Couplet,
    Ode,
    FreeVerse,
    Unknown,
}

impl PoemForm {
    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            PoemForm::ShakespeareanSonnet => "Shakespearean sonnet",
            PoemForm::PetrarchanSonnet => "Petrarchan sonnet",
            PoemForm::SpenserianSonnet => "Spenserian sonnet",
            PoemForm::Villanelle => "villanelle",
            PoemForm::Sestina => "sestina",
            PoemForm::Limerick => "limerick",
            PoemForm::Haiku => "haiku",
            PoemForm::Tanka => "tanka",
            PoemForm::Cinquain => "cinquain",
            PoemForm::TerzaRima => "terza rima",
            PoemForm::CommonMeter => "common meter",
            PoemForm::Ballad => "ballad",
            PoemForm::HeroicCouplet => "heroic couplet",
            PoemForm::BlankVerse => "blank verse",
            PoemForm::Quatrain => "quatrain",
            PoemForm::Tercet => "tercet",
            PoemForm::Couplet => "couplet",
            PoemForm::Ode => "ode",
            PoemForm::FreeVerse => "free verse",
            PoemForm::Unknown => "unknown",
        }
    }
}

/// Broad family a form belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormCategory {
    /// Forms with a fully prescribed shape (sonnets, villanelle, ...)
    FixedForm,

    /// Forms defined by syllable counts (haiku, tanka, cinquain)
    Syllabic,

    /// Forms defined primarily by meter (blank verse, common meter, ...)
    Metrical,

    /// Forms defined by stanza grouping (quatrain, tercet, couplet, ...)
    Stanzaic,

    /// No fixed constraints
    Free,
}

/// Everything the form detector needs to know about a poem
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormDetectionInput {
    pub line_count: usize,
    pub stanza_count: usize,
    pub lines_per_stanza: Vec<usize>,
    pub meter_foot_type: FootType,
    pub meter_name: String,
    pub meter_confidence: f32,

    /// One letter per line, e.g. "ABABCDCDEFEFGG"
    pub rhyme_scheme: String,

    pub syllables_per_line: Vec<usize>,
    pub avg_syllables_per_line: f32,

    /// Metrical regularity of the poem [0.0, 1.0]
    pub regularity: f32,
}

impl FormDetectionInput {
    /// Input for an empty poem
    pub fn empty() -> Self {
        FormDetectionInput {
            line_count: 0,
            stanza_count: 0,
            lines_per_stanza: Vec::new(),
            meter_foot_type: FootType::Unknown,
            meter_name: String::new(),
            meter_confidence: 0.0,
            rhyme_scheme: String::new(),
            syllables_per_line: Vec::new(),
            avg_syllables_per_line: 0.0,
            regularity: 0.0,
        }
    }
}

/// Which criteria contributed to the winning form, plus free-text notes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormEvidence {
    pub line_count_match: bool,
    pub rhyme_scheme_match: bool,
    pub meter_match: bool,
    pub syllable_pattern_match: bool,
    pub stanza_structure_match: bool,

    /// Human-readable observations for debugging or display
    pub notes: Vec<String>,
}

impl FormEvidence {
    /// No criteria matched
    pub fn none() -> Self {
        FormEvidence {
            line_count_match: false,
            rhyme_scheme_match: false,
            meter_match: false,
            syllable_pattern_match: false,
            stanza_structure_match: false,
            notes: Vec::new(),
        }
    }
}

/// A runner-up form with its score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormCandidate {
    pub form_type: PoemForm,
    pub form_name: String,
    pub category: FormCategory,
    pub score: f32,
}

/// Result of form detection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormDetectionResult {
    pub form_type: PoemForm,
    pub form_name: String,
    pub category: FormCategory,

    /// Winning score [0.0, 1.0]
    pub confidence: f32,

    pub evidence: FormEvidence,

    /// Remaining scored candidates, best first
    pub alternatives: Vec<FormCandidate>,
}

impl FormDetectionResult {
    /// Zero-confidence verdict for empty or unclassifiable poems
    pub fn unknown() -> Self {
        FormDetectionResult {
            form_type: PoemForm::Unknown,
            form_name: PoemForm::Unknown.display_name().to_string(),
            category: FormCategory::Free,
            confidence: 0.0,
            evidence: FormEvidence::none(),
            alternatives: Vec::new(),
        }
    }
}
