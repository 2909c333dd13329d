// Stress analysis module
// Per-line stress patterns, metrical foot classification, deviation detection

pub mod analyze;
pub mod types;

pub use analyze::{
    analyze_line_stress, analyze_poem_stress, classify_foot, detect_deviations,
    get_dominant_foot, get_line_stress_pattern, get_word_stress_pattern, normalize_stress,
};
pub use types::{FootType, StressAnalysis, StressLevel, ALL_FEET};
