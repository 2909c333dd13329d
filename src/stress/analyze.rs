// Stress pattern extraction and foot classification
// Builds per-line stress strings and classifies the dominant metrical foot

use crate::phonetics::{dictionary, estimate_stress_pattern};
use crate::stress::types::{FootType, StressAnalysis, StressLevel, ALL_FEET};

/// Minimum cyclic match score to accept a foot classification
pub const FOOT_MATCH_THRESHOLD: f32 = 0.70;

/// Minimum share of lines the winning foot must cover to be dominant
pub const DOMINANT_FOOT_THRESHOLD: f32 = 0.40;

/// Stress pattern for a single word: dictionary lookup with heuristic
/// fallback for unknown words. Blank input yields an empty pattern.
pub fn get_word_stress_pattern(word: &str) -> String {
    if word.trim().is_empty() {
        return String::new();
    }

    match dictionary().stress_pattern_for(word) {
        Some(pattern) => pattern.to_string(),
        None => estimate_stress_pattern(word),
    }
}

/// Stress pattern for a whole line: per-word patterns concatenated in order
pub fn get_line_stress_pattern(words: &[String]) -> String {
    words
        .iter()
        .map(|w| get_word_stress_pattern(w))
        .collect::<Vec<_>>()
        .concat()
}

/// Fold secondary stress into primary ('2' → '1')
pub fn normalize_stress(pattern: &str) -> String {
    pattern
        .chars()
        .map(|c| if c == '2' { '1' } else { c })
        .collect()
}

/// Classify the metrical foot of a stress pattern
///
/// Two-syllable patterns are a direct table lookup. Longer patterns are
/// scored against each foot's canonical pattern repeated cyclically; the
/// best foot wins if its score reaches [`FOOT_MATCH_THRESHOLD`].
pub fn classify_foot(pattern: &str) -> FootType {
    let normalized = normalize_stress(pattern);

    match normalized.len() {
        0 | 1 => FootType::Unknown,
        2 => match normalized.as_str() {
            "01" => FootType::Iamb,
            "10" => FootType::Trochee,
            "11" => FootType::Spondee,
            _ => FootType::Unknown,
        },
        _ => {
            let mut best_foot = FootType::Unknown;
            let mut best_score = 0.0_f32;

            for foot in ALL_FEET {
                let score = cyclic_match_score(&normalized, foot);
                if score > best_score {
                    best_score = score;
                    best_foot = foot;
                }
            }

            if best_score >= FOOT_MATCH_THRESHOLD {
                best_foot
            } else {
                FootType::Unknown
            }
        }
    }
}

/// Fraction of positions where the pattern agrees with the foot's
/// canonical pattern repeated to cover the full length
fn cyclic_match_score(normalized: &str, foot: FootType) -> f32 {
    let canon = match foot.canonical_pattern() {
        Some(c) => c.as_bytes(),
        None => return 0.0,
    };

    if normalized.is_empty() {
        return 0.0;
    }

    let bytes = normalized.as_bytes();
    let matches = bytes
        .iter()
        .enumerate()
        .filter(|(i, &b)| b == canon[i % canon.len()])
        .count();

    matches as f32 / bytes.len() as f32
}

/// Positions where the pattern disagrees with the foot's cyclic pattern
///
/// Unknown foot or empty pattern yields no deviations. Secondary stress
/// is folded to primary before comparison.
pub fn detect_deviations(pattern: &str, foot_type: FootType) -> Vec<usize> {
    let canon = match foot_type.canonical_pattern() {
        Some(c) => c.as_bytes(),
        None => return Vec::new(),
    };

    let normalized = normalize_stress(pattern);
    if normalized.is_empty() {
        return Vec::new();
    }

    normalized
        .as_bytes()
        .iter()
        .enumerate()
        .filter(|(i, &b)| b != canon[i % canon.len()])
        .map(|(i, _)| i)
        .collect()
}

/// Full stress analysis of one line of words
pub fn analyze_line_stress(words: &[String]) -> StressAnalysis {
    let pattern = get_line_stress_pattern(words);
    let syllable_stresses: Vec<StressLevel> =
        pattern.chars().map(StressLevel::from_char).collect();
    let foot_type = classify_foot(&pattern);
    let deviations = detect_deviations(&pattern, foot_type);

    StressAnalysis {
        pattern,
        syllable_stresses,
        foot_type,
        deviations,
    }
}

/// Stress analysis for every line of a poem
pub fn analyze_poem_stress(lines: &[Vec<String>]) -> Vec<StressAnalysis> {
    lines.iter().map(|words| analyze_line_stress(words)).collect()
}

/// Dominant foot across line analyses
///
/// Tallies foot occurrence (excluding Unknown); the winner must cover at
/// least [`DOMINANT_FOOT_THRESHOLD`] of all lines, else Unknown. Ties
/// resolve by [`ALL_FEET`] order.
pub fn get_dominant_foot(analyses: &[StressAnalysis]) -> FootType {
    if analyses.is_empty() {
        return FootType::Unknown;
    }

    let mut best_foot = FootType::Unknown;
    let mut best_count = 0_usize;

    for foot in ALL_FEET {
        let count = analyses.iter().filter(|a| a.foot_type == foot).count();
        if count > best_count {
            best_count = count;
            best_foot = foot;
        }
    }

    let share = best_count as f32 / analyses.len() as f32;
    if share >= DOMINANT_FOOT_THRESHOLD {
        best_foot
    } else {
        FootType::Unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(line: &[&str]) -> Vec<String> {
        line.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_word_pattern_dictionary_hit() {
        assert_eq!(get_word_stress_pattern("shadow"), "10");
        assert_eq!(get_word_stress_pattern("away"), "01");
    }

    #[test]
    fn test_word_pattern_fallback() {
        // Not in the builtin dictionary; estimator takes over
        assert_eq!(get_word_stress_pattern("zyzzyva"), "100");
        assert_eq!(get_word_stress_pattern(""), "");
        assert_eq!(get_word_stress_pattern("   "), "");
    }

    #[test]
    fn test_line_pattern_concatenation() {
        // the(0) golden(10) light(1) → 0101
        let pattern = get_line_stress_pattern(&words(&["the", "golden", "light"]));
        assert_eq!(pattern, "0101");
    }

    #[test]
    fn test_line_pattern_empty() {
        assert_eq!(get_line_stress_pattern(&[]), "");
    }

    #[test]
    fn test_normalize_stress() {
        assert_eq!(normalize_stress("012"), "011");
        assert_eq!(normalize_stress(""), "");
    }

    #[test]
    fn test_two_syllable_table() {
        assert_eq!(classify_foot("01"), FootType::Iamb);
        assert_eq!(classify_foot("10"), FootType::Trochee);
        assert_eq!(classify_foot("11"), FootType::Spondee);
        assert_eq!(classify_foot("00"), FootType::Unknown);
    }

    #[test]
    fn test_short_patterns_are_unknown() {
        assert_eq!(classify_foot(""), FootType::Unknown);
        assert_eq!(classify_foot("1"), FootType::Unknown);
    }

    #[test]
    fn test_cyclic_classification() {
        assert_eq!(classify_foot("0101010101"), FootType::Iamb);
        assert_eq!(classify_foot("10101010"), FootType::Trochee);
        assert_eq!(classify_foot("001001001"), FootType::Anapest);
        assert_eq!(classify_foot("100100100"), FootType::Dactyl);
    }

    #[test]
    fn test_secondary_stress_normalized_before_classification() {
        // 02 folds to 01 per foot cycle
        assert_eq!(classify_foot("020102"), FootType::Iamb);
    }

    #[test]
    fn test_threshold_rejects_noisy_pattern() {
        // Half the positions disagree with every foot
        assert_eq!(classify_foot("011010011010"), FootType::Unknown);
    }

    #[test]
    fn test_tolerates_single_substitution() {
        // One trochaic substitution in iambic pentameter still reads iambic
        assert_eq!(classify_foot("1001010101"), FootType::Iamb);
    }

    #[test]
    fn test_detect_deviations() {
        assert_eq!(detect_deviations("0101", FootType::Iamb), Vec::<usize>::new());
        assert_eq!(detect_deviations("0111", FootType::Iamb), vec![2]);
        assert_eq!(detect_deviations("1001010101", FootType::Iamb), vec![0, 1]);
    }

    #[test]
    fn test_deviations_unknown_foot_or_empty() {
        assert!(detect_deviations("0101", FootType::Unknown).is_empty());
        assert!(detect_deviations("", FootType::Iamb).is_empty());
    }

    #[test]
    fn test_analyze_line_stress_invariant() {
        let analysis = analyze_line_stress(&words(&["the", "golden", "light"]));
        assert_eq!(analysis.pattern.len(), analysis.syllable_stresses.len());
        assert_eq!(analysis.foot_type, FootType::Iamb);
        assert!(analysis.deviations.iter().all(|&d| d < analysis.pattern.len()));
    }

    #[test]
    fn test_dominant_foot_majority() {
        let analyses = vec![
            analyze_line_stress(&words(&["the", "golden", "light"])),
            analyze_line_stress(&words(&["a", "silver", "moon"])),
            analyze_line_stress(&words(&["the", "quiet", "sea"])),
        ];
        assert_eq!(get_dominant_foot(&analyses), FootType::Iamb);
    }

    #[test]
    fn test_dominant_foot_empty() {
        assert_eq!(get_dominant_foot(&[]), FootType::Unknown);
    }

    #[test]
    fn test_dominant_foot_below_threshold() {
        // One iambic line among four unknowns is under the 40% bar
        let mut analyses = vec![analyze_line_stress(&words(&["the", "golden", "light"]))];
        for _ in 0..4 {
            analyses.push(StressAnalysis {
                pattern: "0".to_string(),
                syllable_stresses: vec![StressLevel::Unstressed],
                foot_type: FootType::Unknown,
                deviations: vec![],
            });
        }
        assert_eq!(get_dominant_foot(&analyses), FootType::Unknown);
    }
}
