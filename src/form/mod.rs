// Form detection module
// Declarative form catalog evaluated by one generic weighted scorer

pub mod catalog;
pub mod detect;
pub mod types;

pub use catalog::{FormSignature, MeterRule, RhymeRule, StanzaShape, SyllableRule, FORM_CATALOG};
pub use detect::detect_poem_form;
pub use types::{
    FormCandidate, FormCategory, FormDetectionInput, FormDetectionResult, FormEvidence, PoemForm,
};
