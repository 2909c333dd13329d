// Poem ingestion module
// Splits raw text into stanzas, lines, and words for the analysis stages

use serde::{Deserialize, Serialize};

/// A single line of verse with its tokenized words
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    /// Original line text, trimmed
    pub text: String,

    /// Words in order, lowercased with surrounding punctuation stripped
    pub words: Vec<String>,
}

/// A group of consecutive lines separated from its neighbors by blank lines
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stanza {
    pub lines: Vec<Line>,
}

impl Stanza {
    /// Full stanza text with lines joined by newlines
    pub fn text(&self) -> String {
        self.lines
            .iter()
            .map(|l| l.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// A parsed poem: the normalized input every analysis stage consumes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Poem {
    pub stanzas: Vec<Stanza>,
}

impl Poem {
    /// All lines across all stanzas, in order
    pub fn lines(&self) -> Vec<&Line> {
        self.stanzas.iter().flat_map(|s| s.lines.iter()).collect()
    }

    /// Total line count across stanzas
    pub fn line_count(&self) -> usize {
        self.stanzas.iter().map(|s| s.lines.len()).sum()
    }

    /// Line counts per stanza, in order
    pub fn lines_per_stanza(&self) -> Vec<usize> {
        self.stanzas.iter().map(|s| s.lines.len()).collect()
    }

    /// Stanza texts in order (for per-stanza emotion analysis)
    pub fn stanza_texts(&self) -> Vec<String> {
        self.stanzas.iter().map(|s| s.text()).collect()
    }
}

/// Parse raw poem text into stanzas, lines, and words
///
/// Stanza breaks are one or more blank lines. Lines keep their original
/// text; words are lowercased with surrounding punctuation stripped.
/// Empty input yields a poem with no stanzas.
pub fn parse_poem(text: &str) -> Poem {
    let mut stanzas = Vec::new();
    let mut current: Vec<Line> = Vec::new();

    for raw_line in text.lines() {
        let trimmed = raw_line.trim();

        if trimmed.is_empty() {
            if !current.is_empty() {
                stanzas.push(Stanza {
                    lines: std::mem::take(&mut current),
                });
            }
            continue;
        }

        current.push(Line {
            text: trimmed.to_string(),
            words: tokenize_words(trimmed),
        });
    }

    if !current.is_empty() {
        stanzas.push(Stanza { lines: current });
    }

    Poem { stanzas }
}

/// Split a line into normalized words
///
/// Splits on whitespace, strips leading/trailing non-alphabetic characters,
/// and lowercases. Interior apostrophes and hyphens survive ("don't",
/// "ever-fixed"). Tokens with no alphabetic content are dropped.
pub fn tokenize_words(line: &str) -> Vec<String> {
    line.split_whitespace()
        .filter_map(normalize_word)
        .collect()
}

/// Normalize a single token: trim punctuation, lowercase
/// Returns None if nothing alphabetic remains
fn normalize_word(token: &str) -> Option<String> {
    let trimmed = token.trim_matches(|c: char| !c.is_alphabetic());

    if trimmed.is_empty() {
        return None;
    }

    Some(trimmed.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty() {
        let poem = parse_poem("");
        assert!(poem.stanzas.is_empty());
        assert_eq!(poem.line_count(), 0);
    }

    #[test]
    fn test_parse_single_stanza() {
        let poem = parse_poem("The sun is bright\nThe moon is pale");
        assert_eq!(poem.stanzas.len(), 1);
        assert_eq!(poem.line_count(), 2);
        assert_eq!(poem.stanzas[0].lines[0].words, vec!["the", "sun", "is", "bright"]);
    }

    #[test]
    fn test_parse_stanza_breaks() {
        let text = "First line\nSecond line\n\nThird line\n\n\nFourth line";
        let poem = parse_poem(text);
        assert_eq!(poem.stanzas.len(), 3);
        assert_eq!(poem.lines_per_stanza(), vec![2, 1, 1]);
    }

    #[test]
    fn test_tokenize_strips_punctuation() {
        let words = tokenize_words("Shall I compare thee to a summer's day?");
        assert_eq!(
            words,
            vec!["shall", "i", "compare", "thee", "to", "a", "summer's", "day"]
        );
    }

    #[test]
    fn test_tokenize_drops_bare_punctuation() {
        let words = tokenize_words("one -- two ...");
        assert_eq!(words, vec!["one", "two"]);
    }

    #[test]
    fn test_stanza_text_round_trip() {
        let poem = parse_poem("A line\nAnother line");
        assert_eq!(poem.stanzas[0].text(), "A line\nAnother line");
    }
}
