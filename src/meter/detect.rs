// Meter detection via edit-distance similarity against canonical patterns
// Single-line best-fit search and multi-line aggregation

use crate::meter::types::{LineLength, MeterAnalysis};
use crate::stress::{normalize_stress, FootType, ALL_FEET};

/// Patterns shorter than this many syllables get proportionally lower
/// confidence; a couple of syllables is not enough to trust a meter guess
pub const SHORT_PATTERN_SYLLABLES: usize = 4;

/// A scored (foot type × feet count) meter hypothesis
#[derive(Debug, Clone, PartialEq)]
pub struct MeterCandidate {
    pub foot_type: FootType,
    pub feet: usize,

    /// Length of this candidate's ideal pattern in syllables
    pub ideal_len: usize,

    /// Similarity of the observed pattern to the ideal [0.0, 1.0]
    pub score: f32,
}

/// Classic Levenshtein edit distance
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=b.len() {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// Similarity in [0.0, 1.0]: 1 minus normalized edit distance
///
/// Two empty strings are identical (1.0); empty versus non-empty is 0.0.
/// Unlike the cyclic position matcher in the stress module, this tolerates
/// insertions and deletions, not just substitutions.
pub fn string_similarity(a: &str, b: &str) -> f32 {
    let max_len = a.chars().count().max(b.chars().count());

    if max_len == 0 {
        return 1.0;
    }

    1.0 - levenshtein_distance(a, b) as f32 / max_len as f32
}

/// Classify a syllable count into a named line length for a given foot
///
/// Anapest and dactyl are triple feet (3 syllables per foot); all others
/// count 2. The feet count rounds to nearest and clamps to 1..=8.
pub fn classify_line_length(syllable_count: usize, foot_type: FootType) -> LineLength {
    let per_foot = foot_type.syllables_per_foot();
    let feet = ((syllable_count as f32 / per_foot as f32).round() as usize).clamp(1, 8);
    LineLength::from_feet(feet)
}

/// The foot's canonical pattern repeated to cover `len` syllables
/// Empty for Unknown
pub fn build_ideal_pattern(foot_type: FootType, len: usize) -> String {
    let canon = match foot_type.canonical_pattern() {
        Some(c) => c,
        None => return String::new(),
    };

    canon.chars().cycle().take(len).collect()
}

/// Similarity of a pattern to its own ideal cyclic pattern
/// 0 for an empty pattern or unrecognized foot
pub fn calculate_regularity(pattern: &str, foot_type: FootType) -> f32 {
    if pattern.is_empty() || foot_type == FootType::Unknown {
        return 0.0;
    }

    let ideal = build_ideal_pattern(foot_type, pattern.chars().count());
    string_similarity(pattern, &ideal)
}

/// Positions where the pattern disagrees with its ideal cyclic pattern
pub fn find_deviations(pattern: &str, foot_type: FootType) -> Vec<usize> {
    if foot_type == FootType::Unknown {
        return Vec::new();
    }

    let ideal = build_ideal_pattern(foot_type, pattern.chars().count());
    pattern
        .chars()
        .zip(ideal.chars())
        .enumerate()
        .filter(|(_, (p, i))| p != i)
        .map(|(idx, _)| idx)
        .collect()
}

/// Score every (foot type × feet count 1..=8) hypothesis against a pattern
///
/// Candidates come back sorted by score descending; equal scores keep
/// their enumeration order. Empty input yields no candidates.
pub fn find_best_meter_match(pattern: &str) -> Vec<MeterCandidate> {
    if pattern.is_empty() {
        return Vec::new();
    }

    let mut candidates = Vec::with_capacity(ALL_FEET.len() * 8);

    for foot in ALL_FEET {
        let foot_len = foot.syllables_per_foot();
        for feet in 1..=8 {
            let ideal_len = foot_len * feet;
            let ideal = build_ideal_pattern(foot, ideal_len);
            candidates.push(MeterCandidate {
                foot_type: foot,
                feet,
                ideal_len,
                score: string_similarity(pattern, &ideal),
            });
        }
    }

    // Stable sort keeps enumeration order for tied scores
    candidates.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
    candidates
}

/// Detect the best-fit named meter for a single stress pattern
///
/// Secondary stress folds to primary before matching. Empty input yields
/// the zero-confidence irregular verdict. Confidence is regularity scaled
/// down when the pattern is shorter than the matched ideal or shorter
/// than [`SHORT_PATTERN_SYLLABLES`].
pub fn detect_meter(pattern: &str) -> MeterAnalysis {
    let normalized = normalize_stress(pattern);

    if normalized.is_empty() {
        return MeterAnalysis::irregular();
    }

    let candidates = find_best_meter_match(&normalized);
    let best = match candidates.first() {
        Some(best) => best.clone(),
        None => return MeterAnalysis::irregular(),
    };

    let line_length = LineLength::from_feet(best.feet);
    let meter_name = format!("{} {}", best.foot_type.adjective(), line_length.display_name());
    let regularity = calculate_regularity(&normalized, best.foot_type);

    let len = normalized.chars().count();
    let ideal_ratio = (len as f32 / best.ideal_len as f32).min(1.0);
    let short_penalty = (len as f32 / SHORT_PATTERN_SYLLABLES as f32).min(1.0);
    let confidence = regularity * ideal_ratio * short_penalty;

    MeterAnalysis {
        pattern: normalized,
        foot_type: best.foot_type,
        line_length,
        feet_per_line: best.feet,
        meter_name,
        regularity,
        confidence,
    }
}

/// Aggregate per-line meter detections into one poem-level verdict
///
/// The most frequent line meter wins (first seen on ties); confidence is
/// the mean confidence of the agreeing lines scaled by the fraction of
/// lines that agree, so disagreement lowers the verdict. Regularity is
/// averaged across all lines.
pub fn analyze_multi_line_meter(patterns: &[String]) -> MeterAnalysis {
    if patterns.is_empty() {
        return MeterAnalysis::irregular();
    }

    let line_results: Vec<MeterAnalysis> = patterns.iter().map(|p| detect_meter(p)).collect();

    // Tally meter names in first-seen order
    let mut tally: Vec<(&str, usize)> = Vec::new();
    for result in &line_results {
        match tally.iter_mut().find(|(name, _)| *name == result.meter_name) {
            Some((_, count)) => *count += 1,
            None => tally.push((&result.meter_name, 1)),
        }
    }

    // First-seen wins ties, keeping the verdict deterministic
    let mut dominant: Option<(&str, usize)> = None;
    for &(name, count) in &tally {
        if dominant.map_or(true, |(_, best)| count > best) {
            dominant = Some((name, count));
        }
    }
    let (dominant_name, dominant_count) = match dominant {
        Some((name, count)) => (name.to_string(), count),
        None => return MeterAnalysis::irregular(),
    };

    let agreeing: Vec<&MeterAnalysis> = line_results
        .iter()
        .filter(|r| r.meter_name == dominant_name)
        .collect();

    let representative = agreeing[0];
    let agreement = dominant_count as f32 / line_results.len() as f32;
    let mean_confidence =
        agreeing.iter().map(|r| r.confidence).sum::<f32>() / agreeing.len() as f32;
    let mean_regularity =
        line_results.iter().map(|r| r.regularity).sum::<f32>() / line_results.len() as f32;

    MeterAnalysis {
        pattern: representative.pattern.clone(),
        foot_type: representative.foot_type,
        line_length: representative.line_length,
        feet_per_line: representative.feet_per_line,
        meter_name: dominant_name,
        regularity: mean_regularity,
        confidence: mean_confidence * agreement,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levenshtein_basics() {
        assert_eq!(levenshtein_distance("", ""), 0);
        assert_eq!(levenshtein_distance("01", ""), 2);
        assert_eq!(levenshtein_distance("0101", "0101"), 0);
        assert_eq!(levenshtein_distance("0101", "0111"), 1);
        assert_eq!(levenshtein_distance("010", "0101"), 1);
    }

    #[test]
    fn test_similarity_edges() {
        assert_eq!(string_similarity("", ""), 1.0);
        assert_eq!(string_similarity("01", ""), 0.0);
        assert_eq!(string_similarity("0101", "0101"), 1.0);
    }

    #[test]
    fn test_classify_line_length() {
        assert_eq!(classify_line_length(10, FootType::Iamb), LineLength::Pentameter);
        assert_eq!(classify_line_length(8, FootType::Trochee), LineLength::Tetrameter);
        // Triple feet divide by 3
        assert_eq!(classify_line_length(12, FootType::Anapest), LineLength::Tetrameter);
        assert_eq!(classify_line_length(9, FootType::Dactyl), LineLength::Trimeter);
        // Clamped to the named range
        assert_eq!(classify_line_length(0, FootType::Iamb), LineLength::Monometer);
        assert_eq!(classify_line_length(40, FootType::Iamb), LineLength::Octameter);
    }

    #[test]
    fn test_build_ideal_pattern() {
        assert_eq!(build_ideal_pattern(FootType::Iamb, 6), "010101");
        assert_eq!(build_ideal_pattern(FootType::Anapest, 7), "0010010");
        assert_eq!(build_ideal_pattern(FootType::Unknown, 4), "");
    }

    #[test]
    fn test_regularity_perfect_on_canonical_repeats() {
        for foot in ALL_FEET {
            let canon = foot.canonical_pattern().unwrap();
            let pattern = canon.repeat(4);
            assert_eq!(calculate_regularity(&pattern, foot), 1.0);
        }
    }

    #[test]
    fn test_regularity_degraded_input() {
        assert_eq!(calculate_regularity("", FootType::Iamb), 0.0);
        assert_eq!(calculate_regularity("0101", FootType::Unknown), 0.0);
    }

    #[test]
    fn test_find_deviations_against_ideal() {
        assert_eq!(find_deviations("0101", FootType::Iamb), Vec::<usize>::new());
        assert_eq!(find_deviations("0111", FootType::Iamb), vec![2]);
        assert!(find_deviations("0101", FootType::Unknown).is_empty());
    }

    #[test]
    fn test_find_best_meter_match_empty() {
        assert!(find_best_meter_match("").is_empty());
    }

    #[test]
    fn test_find_best_meter_match_exact() {
        let candidates = find_best_meter_match("0101010101");
        let best = &candidates[0];
        assert_eq!(best.foot_type, FootType::Iamb);
        assert_eq!(best.feet, 5);
        assert_eq!(best.score, 1.0);
    }

    #[test]
    fn test_detect_iambic_pentameter() {
        let result = detect_meter("0101010101");
        assert_eq!(result.meter_name, "iambic pentameter");
        assert_eq!(result.regularity, 1.0);
        assert_eq!(result.confidence, 1.0);
    }

    #[test]
    fn test_detect_trochaic_tetrameter() {
        let result = detect_meter("10101010");
        assert_eq!(result.meter_name, "trochaic tetrameter");
    }

    #[test]
    fn test_detect_anapestic_tetrameter() {
        let result = detect_meter("001001001001");
        assert_eq!(result.meter_name, "anapestic tetrameter");
    }

    #[test]
    fn test_detect_normalizes_secondary_stress() {
        let result = detect_meter("0201020102");
        assert_eq!(result.meter_name, "iambic pentameter");
        assert_eq!(result.regularity, 1.0);
    }

    #[test]
    fn test_detect_empty_is_irregular() {
        let result = detect_meter("");
        assert_eq!(result.foot_type, FootType::Unknown);
        assert_eq!(result.confidence, 0.0);
    }

    #[test]
    fn test_short_pattern_confidence_is_scaled() {
        let result = detect_meter("01");
        assert_eq!(result.foot_type, FootType::Iamb);
        assert!(result.confidence < result.regularity);
    }

    #[test]
    fn test_detect_is_deterministic() {
        let a = detect_meter("0101011101");
        let b = detect_meter("0101011101");
        assert_eq!(a, b);
    }

    #[test]
    fn test_multi_line_consistent_poem() {
        let patterns: Vec<String> = (0..4).map(|_| "0101010101".to_string()).collect();
        let result = analyze_multi_line_meter(&patterns);
        assert_eq!(result.meter_name, "iambic pentameter");
        assert_eq!(result.confidence, 1.0);
    }

    #[test]
    fn test_multi_line_disagreement_lowers_confidence() {
        let patterns = vec![
            "0101010101".to_string(),
            "0101010101".to_string(),
            "0101010101".to_string(),
            "10101010".to_string(),
        ];
        let result = analyze_multi_line_meter(&patterns);
        assert_eq!(result.meter_name, "iambic pentameter");
        assert!(result.confidence < 1.0);
        assert!(result.confidence > 0.5);
    }

    #[test]
    fn test_multi_line_empty() {
        let result = analyze_multi_line_meter(&[]);
        assert_eq!(result.foot_type, FootType::Unknown);
        assert_eq!(result.confidence, 0.0);
    }
}
