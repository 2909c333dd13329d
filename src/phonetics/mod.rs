// Phonetics module
// Dictionary-backed stress lookup with a heuristic fallback for unknown words

pub mod dictionary;
pub mod estimate;

pub use dictionary::{dictionary, install, DictionaryError, StressDictionary};
pub use estimate::{estimate_stress_pattern, estimate_syllable_count};
