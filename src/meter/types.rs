// Meter analysis types
// Named line lengths and the per-line / per-poem meter verdict

use serde::{Deserialize, Serialize};

use crate::stress::FootType;

/// Classical line lengths by feet per line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineLength {
    Monometer,
    Dimeter,
    Trimeter,
    Tetrameter,
    Pentameter,
    Hexameter,
    Heptameter,
    Octameter,
}

impl LineLength {
    /// Line length for a feet count; clamps to the 1..=8 range
    pub fn from_feet(feet: usize) -> Self {
        match feet {
            0 | 1 => LineLength::Monometer,
            2 => LineLength::Dimeter,
            3 => LineLength::Trimeter,
            4 => LineLength::Tetrameter,
            5 => LineLength::Pentameter,
            6 => LineLength::Hexameter,
            7 => LineLength::Heptameter,
            _ => LineLength::Octameter,
        }
    }

    /// Feet per line for this length
    pub fn feet(&self) -> usize {
        match self {
            LineLength::Monometer => 1,
            LineLength::Dimeter => 2,
            LineLength::Trimeter => 3,
            LineLength::Tetrameter => 4,
            LineLength::Pentameter => 5,
            LineLength::Hexameter => 6,
            LineLength::Heptameter => 7,
            LineLength::Octameter => 8,
        }
    }

    /// Name used in meter labels, e.g. "pentameter"
    pub fn display_name(&self) -> &'static str {
        match self {
            LineLength::Monometer => "monometer",
            LineLength::Dimeter => "dimeter",
            LineLength::Trimeter => "trimeter",
            LineLength::Tetrameter => "tetrameter",
            LineLength::Pentameter => "pentameter",
            LineLength::Hexameter => "hexameter",
            LineLength::Heptameter => "heptameter",
            LineLength::Octameter => "octameter",
        }
    }
}

/// Meter verdict for a line or a whole poem
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeterAnalysis {
    /// Normalized stress pattern (secondary stress folded to primary)
    pub pattern: String,

    /// Detected foot type
    pub foot_type: FootType,

    /// Named line length
    pub line_length: LineLength,

    /// Feet per line
    pub feet_per_line: usize,

    /// Full meter name, e.g. "iambic pentameter"
    pub meter_name: String,

    /// Similarity of the actual pattern to its ideal cyclic pattern [0.0, 1.0]
    pub regularity: f32,

    /// Regularity scaled down for very short patterns [0.0, 1.0]
    pub confidence: f32,
}

impl MeterAnalysis {
    /// Zero-confidence verdict for empty or unanalyzable input
    pub fn irregular() -> Self {
        MeterAnalysis {
            pattern: String::new(),
            foot_type: FootType::Unknown,
            line_length: LineLength::Monometer,
            feet_per_line: 1,
            meter_name: "irregular".to_string(),
            regularity: 0.0,
            confidence: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_feet_clamps() {
        assert_eq!(LineLength::from_feet(0), LineLength::Monometer);
        assert_eq!(LineLength::from_feet(5), LineLength::Pentameter);
        assert_eq!(LineLength::from_feet(12), LineLength::Octameter);
    }

    #[test]
    fn test_feet_round_trip() {
        for feet in 1..=8 {
            assert_eq!(LineLength::from_feet(feet).feet(), feet);
        }
    }

    #[test]
    fn test_irregular_verdict() {
        let verdict = MeterAnalysis::irregular();
        assert_eq!(verdict.foot_type, FootType::Unknown);
        assert_eq!(verdict.confidence, 0.0);
        assert_eq!(verdict.meter_name, "irregular");
    }
}
