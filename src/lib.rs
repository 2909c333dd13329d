// Calliope - Poem analysis to musical parameter suggestions
// Module declarations and public API surface

pub mod emotion;
pub mod form;
pub mod meter;
pub mod phonetics;
pub mod pipeline;
pub mod poem;
pub mod rhyme;
pub mod stress;

pub use emotion::{analyze_emotion, EmotionalAnalysis, MusicalParams};
pub use form::{detect_poem_form, FormDetectionInput, FormDetectionResult, PoemForm};
pub use meter::{analyze_multi_line_meter, detect_meter, MeterAnalysis};
pub use phonetics::{install, StressDictionary};
pub use pipeline::{analyze_poem, analyze_poem_traced, PoemAnalysis};
pub use poem::{parse_poem, Poem};
pub use rhyme::analyze_rhyme_scheme;
pub use stress::{analyze_line_stress, analyze_poem_stress, StressAnalysis};
