// Form catalog - declarative signatures for every recognized poem form
// Evaluated by the generic scorer in detect.rs; order doubles as a
// specificity tie-break (stricter forms come first)

use crate::form::types::{FormCategory, PoemForm};
use crate::meter::LineLength;
use crate::stress::FootType;

/// Expected stanza grouping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StanzaShape {
    /// Every stanza has the same number of lines
    Uniform(usize),

    /// Exact lines-per-stanza sequence
    Exact(&'static [usize]),
}

/// Expected rhyme scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RhymeRule {
    /// Scheme must match this pattern exactly
    Exact(&'static str),

    /// Scheme must match one of these patterns
    AnyOf(&'static [&'static str]),

    /// Adjacent pairs rhyme: AABBCC...
    Couplets,

    /// Four-line groups rhyme ABAB
    AlternatingQuatrains,

    /// Four-line groups rhyme ABCB (second and fourth lines only)
    BalladQuatrains,

    /// Interlocking tercets: ABA BCB CDC...
    InterlockingTercets,

    /// No two lines rhyme
    Unrhymed,
}

/// Expected meter: a foot, optionally pinned to a line length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeterRule {
    pub foot: FootType,
    pub length: Option<LineLength>,
}

/// Expected syllable counts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyllableRule {
    /// One count per line, e.g. 5-7-5
    Exact(&'static [usize]),

    /// A repeating per-line cycle, e.g. 8-6-8-6
    Repeating(&'static [usize]),

    /// Every line has roughly this count
    PerLine(usize),
}

/// Declarative signature of one poem form
#[derive(Debug, Clone, Copy)]
pub struct FormSignature {
    pub form: PoemForm,
    pub category: FormCategory,

    /// Inclusive expected line-count range
    pub line_count: Option<(usize, usize)>,

    pub stanza_shape: Option<StanzaShape>,
    pub rhyme: Option<RhymeRule>,
    pub meter: Option<MeterRule>,
    pub syllables: Option<SyllableRule>,

    /// Score rises as metrical regularity falls (free-verse catch-all)
    pub low_regularity: bool,

    /// Cap on this form's score; loose signatures (a bare line count)
    /// must not reach full confidence
    pub max_confidence: f32,
}

const IAMBIC_PENTAMETER: MeterRule = MeterRule {
    foot: FootType::Iamb,
    length: Some(LineLength::Pentameter),
};

/// All recognized forms, strictest first
pub const FORM_CATALOG: &[FormSignature] = &[
    FormSignature {
        form: PoemForm::ShakespeareanSonnet,
        category: FormCategory::FixedForm,
        line_count: Some((14, 14)),
        stanza_shape: None,
        rhyme: Some(RhymeRule::Exact("ABABCDCDEFEFGG")),
        meter: Some(IAMBIC_PENTAMETER),
        syllables: Some(SyllableRule::PerLine(10)),
        low_regularity: false,
        max_confidence: 1.0,
    },
    FormSignature {
        form: PoemForm::PetrarchanSonnet,
        category: FormCategory::FixedForm,
        line_count: Some((14, 14)),
        stanza_shape: None,
        rhyme: Some(RhymeRule::AnyOf(&[
            "ABBAABBACDECDE",
            "ABBAABBACDCDCD",
            "ABBAABBACDCCDC",
        ])),
        meter: Some(IAMBIC_PENTAMETER),
        syllables: Some(SyllableRule::PerLine(10)),
        low_regularity: false,
        max_confidence: 1.0,
    },
    FormSignature {
        form: PoemForm::SpenserianSonnet,
        category: FormCategory::FixedForm,
        line_count: Some((14, 14)),
        stanza_shape: None,
        rhyme: Some(RhymeRule::Exact("ABABBCBCCDCDEE")),
        meter: Some(IAMBIC_PENTAMETER),
        syllables: Some(SyllableRule::PerLine(10)),
        low_regularity: false,
        max_confidence: 1.0,
    },
    FormSignature {
        form: PoemForm::Villanelle,
        category: FormCategory::FixedForm,
        line_count: Some((19, 19)),
        stanza_shape: Some(StanzaShape::Exact(&[3, 3, 3, 3, 3, 4])),
        rhyme: Some(RhymeRule::Exact("ABAABAABAABAABAABAA")),
        meter: None,
        syllables: None,
        low_regularity: false,
        max_confidence: 1.0,
    },
    FormSignature {
        form: PoemForm::Sestina,
        category: FormCategory::FixedForm,
        line_count: Some((39, 39)),
        stanza_shape: Some(StanzaShape::Exact(&[6, 6, 6, 6, 6, 6, 3])),
        rhyme: None,
        meter: None,
        syllables: None,
        low_regularity: false,
        max_confidence: 1.0,
    },
    FormSignature {
        form: PoemForm::Limerick,
        category: FormCategory::FixedForm,
        line_count: Some((5, 5)),
        stanza_shape: None,
        rhyme: Some(RhymeRule::Exact("AABBA")),
        meter: None,
        syllables: None,
        low_regularity: false,
        max_confidence: 1.0,
    },
    FormSignature {
        form: PoemForm::Haiku,
        category: FormCategory::Syllabic,
        line_count: Some((3, 3)),
        stanza_shape: None,
        rhyme: None,
        meter: None,
        syllables: Some(SyllableRule::Exact(&[5, 7, 5])),
        low_regularity: false,
        max_confidence: 1.0,
    },
    FormSignature {
        form: PoemForm::Tanka,
        category: FormCategory::Syllabic,
        line_count: Some((5, 5)),
        stanza_shape: None,
        rhyme: None,
        meter: None,
        syllables: Some(SyllableRule::Exact(&[5, 7, 5, 7, 7])),
        low_regularity: false,
        max_confidence: 1.0,
    },
    FormSignature {
        form: PoemForm::Cinquain,
        category: FormCategory::Syllabic,
        line_count: Some((5, 5)),
        stanza_shape: None,
        rhyme: None,
        meter: None,
        syllables: Some(SyllableRule::Exact(&[2, 4, 6, 8, 2])),
        low_regularity: false,
        max_confidence: 1.0,
    },
    FormSignature {
        form: PoemForm::TerzaRima,
        category: FormCategory::Stanzaic,
        line_count: Some((9, 60)),
        stanza_shape: Some(StanzaShape::Uniform(3)),
        rhyme: Some(RhymeRule::InterlockingTercets),
        meter: None,
        syllables: None,
        low_regularity: false,
        max_confidence: 1.0,
    },
    FormSignature {
        form: PoemForm::CommonMeter,
        category: FormCategory::Metrical,
        line_count: None,
        stanza_shape: Some(StanzaShape::Uniform(4)),
        rhyme: Some(RhymeRule::AlternatingQuatrains),
        meter: Some(MeterRule {
            foot: FootType::Iamb,
            length: None,
        }),
        syllables: Some(SyllableRule::Repeating(&[8, 6, 8, 6])),
        low_regularity: false,
        max_confidence: 1.0,
    },
    FormSignature {
        form: PoemForm::Ballad,
        category: FormCategory::Metrical,
        line_count: None,
        stanza_shape: Some(StanzaShape::Uniform(4)),
        rhyme: Some(RhymeRule::BalladQuatrains),
        meter: None,
        syllables: Some(SyllableRule::Repeating(&[8, 6, 8, 6])),
        low_regularity: false,
        max_confidence: 0.95,
    },
    FormSignature {
        form: PoemForm::HeroicCouplet,
        category: FormCategory::Metrical,
        line_count: None,
        stanza_shape: None,
        rhyme: Some(RhymeRule::Couplets),
        meter: Some(IAMBIC_PENTAMETER),
        syllables: Some(SyllableRule::PerLine(10)),
        low_regularity: false,
        max_confidence: 1.0,
    },
    FormSignature {
        form: PoemForm::BlankVerse,
        category: FormCategory::Metrical,
        line_count: None,
        stanza_shape: None,
        rhyme: Some(RhymeRule::Unrhymed),
        meter: Some(IAMBIC_PENTAMETER),
        syllables: Some(SyllableRule::PerLine(10)),
        low_regularity: false,
        max_confidence: 0.95,
    },
    FormSignature {
        form: PoemForm::Quatrain,
        category: FormCategory::Stanzaic,
        line_count: Some((4, 4)),
        stanza_shape: None,
        rhyme: None,
        meter: None,
        syllables: None,
        low_regularity: false,
        max_confidence: 0.65,
    },
    FormSignature {
        form: PoemForm::Tercet,
        category: FormCategory::Stanzaic,
        line_count: Some((3, 3)),
        stanza_shape: None,
        rhyme: None,
        meter: None,
        syllables: None,
        low_regularity: false,
        max_confidence: 0.6,
    },
    FormSignature {
        form: PoemForm::Couplet,
        category: FormCategory::Stanzaic,
        line_count: Some((2, 2)),
        stanza_shape: None,
        rhyme: Some(RhymeRule::Couplets),
        meter: None,
        syllables: None,
        low_regularity: false,
        max_confidence: 0.7,
    },
    FormSignature {
        form: PoemForm::Ode,
        category: FormCategory::Stanzaic,
        line_count: Some((20, 200)),
        stanza_shape: None,
        rhyme: None,
        meter: None,
        syllables: None,
        low_regularity: false,
        max_confidence: 0.5,
    },
    FormSignature {
        form: PoemForm::FreeVerse,
        category: FormCategory::Free,
        line_count: None,
        stanza_shape: None,
        rhyme: None,
        meter: None,
        syllables: None,
        low_regularity: true,
        max_confidence: 0.75,
    },
];
