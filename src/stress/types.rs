// Stress analysis types
// Metrical feet, per-syllable stress levels, and line analysis results

use serde::{Deserialize, Serialize};

/// The five classical metrical feet, plus Unknown for irregular lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FootType {
    /// Unstressed-stressed (da-DUM), e.g. "away"
    Iamb,

    /// Stressed-unstressed (DUM-da), e.g. "garden"
    Trochee,

    /// Two unstressed then stressed (da-da-DUM), e.g. "understand"
    Anapest,

    /// Stressed then two unstressed (DUM-da-da), e.g. "beautiful"
    Dactyl,

    /// Two stressed (DUM-DUM), e.g. "heartbreak"
    Spondee,

    /// No recognizable foot
    Unknown,
}

/// Recognized feet in scoring order; ties resolve to the earliest entry
pub const ALL_FEET: [FootType; 5] = [
    FootType::Iamb,
    FootType::Trochee,
    FootType::Anapest,
    FootType::Dactyl,
    FootType::Spondee,
];

impl FootType {
    /// Canonical binary stress pattern for this foot
    /// Unknown has no pattern
    pub fn canonical_pattern(&self) -> Option<&'static str> {
        match self {
            FootType::Iamb => Some("01"),
            FootType::Trochee => Some("10"),
            FootType::Anapest => Some("001"),
            FootType::Dactyl => Some("100"),
            FootType::Spondee => Some("11"),
            FootType::Unknown => None,
        }
    }

    /// Syllables per foot (anapest and dactyl are triple feet)
    pub fn syllables_per_foot(&self) -> usize {
        match self {
            FootType::Anapest | FootType::Dactyl => 3,
            _ => 2,
        }
    }

    /// Noun form, e.g. "iamb"
    pub fn display_name(&self) -> &'static str {
        match self {
            FootType::Iamb => "iamb",
            FootType::Trochee => "trochee",
            FootType::Anapest => "anapest",
            FootType::Dactyl => "dactyl",
            FootType::Spondee => "spondee",
            FootType::Unknown => "unknown",
        }
    }

    /// Adjective form used in meter names, e.g. "iambic"
    pub fn adjective(&self) -> &'static str {
        match self {
            FootType::Iamb => "iambic",
            FootType::Trochee => "trochaic",
            FootType::Anapest => "anapestic",
            FootType::Dactyl => "dactylic",
            FootType::Spondee => "spondaic",
            FootType::Unknown => "irregular",
        }
    }

    /// Convert from string representation
    pub fn from_string(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "iamb" | "iambic" => FootType::Iamb,
            "trochee" | "trochaic" => FootType::Trochee,
            "anapest" | "anapestic" => FootType::Anapest,
            "dactyl" | "dactylic" => FootType::Dactyl,
            "spondee" | "spondaic" => FootType::Spondee,
            _ => FootType::Unknown,
        }
    }
}

/// Stress level of a single syllable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StressLevel {
    Unstressed,
    Primary,
    Secondary,
}

impl StressLevel {
    /// Parse a pattern digit ('0', '1' or '2')
    /// Anything else reads as unstressed
    pub fn from_char(c: char) -> Self {
        match c {
            '1' => StressLevel::Primary,
            '2' => StressLevel::Secondary,
            _ => StressLevel::Unstressed,
        }
    }

    /// The pattern digit for this level
    pub fn to_char(&self) -> char {
        match self {
            StressLevel::Unstressed => '0',
            StressLevel::Primary => '1',
            StressLevel::Secondary => '2',
        }
    }
}

/// Stress analysis of a single line of verse
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StressAnalysis {
    /// Stress string over {'0','1','2'}, one character per syllable
    pub pattern: String,

    /// Per-syllable stress levels; always the same length as `pattern`
    pub syllable_stresses: Vec<StressLevel>,

    /// Dominant metrical foot for this line
    pub foot_type: FootType,

    /// 0-indexed syllable positions disagreeing with the canonical
    /// cyclic foot pattern
    pub deviations: Vec<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_foot_type_string_round_trip() {
        for foot in ALL_FEET {
            let parsed = FootType::from_string(foot.display_name());
            assert_eq!(foot, parsed);
        }
    }

    #[test]
    fn test_foot_type_adjective_round_trip() {
        assert_eq!(FootType::from_string("iambic"), FootType::Iamb);
        assert_eq!(FootType::from_string("trochaic"), FootType::Trochee);
        assert_eq!(FootType::from_string("nonsense"), FootType::Unknown);
    }

    #[test]
    fn test_canonical_patterns() {
        assert_eq!(FootType::Iamb.canonical_pattern(), Some("01"));
        assert_eq!(FootType::Dactyl.canonical_pattern(), Some("100"));
        assert_eq!(FootType::Unknown.canonical_pattern(), None);
    }

    #[test]
    fn test_syllables_per_foot() {
        assert_eq!(FootType::Iamb.syllables_per_foot(), 2);
        assert_eq!(FootType::Anapest.syllables_per_foot(), 3);
        assert_eq!(FootType::Dactyl.syllables_per_foot(), 3);
    }

    #[test]
    fn test_stress_level_chars() {
        assert_eq!(StressLevel::from_char('0'), StressLevel::Unstressed);
        assert_eq!(StressLevel::from_char('1'), StressLevel::Primary);
        assert_eq!(StressLevel::from_char('2'), StressLevel::Secondary);
        assert_eq!(StressLevel::Primary.to_char(), '1');
    }
}
