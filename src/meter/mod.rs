// Meter detection module
// Fuzzy matching of stress patterns against named meters

pub mod detect;
pub mod types;

pub use detect::{
    analyze_multi_line_meter, build_ideal_pattern, calculate_regularity, classify_line_length,
    detect_meter, find_best_meter_match, find_deviations, levenshtein_distance,
    string_similarity, MeterCandidate,
};
pub use types::{LineLength, MeterAnalysis};
