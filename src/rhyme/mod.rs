// Rhyme analysis module
// Letter-per-line rhyme scheme labeling from line-ending rime keys

/// Compute the rime key of a word: the part that has to match for two
/// words to count as rhyming
///
/// Orthographic approximation: strip a silent final "e" (consonant-
/// preceded, non-"le"), then keep everything from the last vowel group to
/// the end, with 'y' folded into 'i' ("time"/"rhyme" → "im"). Empty for
/// words with no vowels.
pub fn rime_key(word: &str) -> String {
    let mut chars: Vec<char> = word
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphabetic())
        .collect();

    // Silent final "e" hides the real rime ("stone" rhymes on "on(e)")
    let n = chars.len();
    if n >= 3 && chars[n - 1] == 'e' && !is_vowel(chars[n - 2]) && chars[n - 2] != 'l' {
        chars.pop();
    }

    // Last vowel-group start
    let mut start = None;
    let mut i = chars.len();
    while i > 0 {
        i -= 1;
        if is_vowel(chars[i]) {
            start = Some(i);
        } else if start.is_some() {
            break;
        }
    }

    match start {
        Some(start) => chars[start..]
            .iter()
            .map(|&c| if c == 'y' { 'i' } else { c })
            .collect(),
        None => String::new(),
    }
}

/// Whether two line-ending words rhyme
///
/// Identical words rhyme (refrains); otherwise rime keys must match and
/// be non-empty.
pub fn words_rhyme(a: &str, b: &str) -> bool {
    let a = a.to_lowercase();
    let b = b.to_lowercase();

    if a == b && !a.is_empty() {
        return true;
    }

    let key_a = rime_key(&a);
    let key_b = rime_key(&b);
    !key_a.is_empty() && key_a == key_b
}

/// Label each line with a rhyme letter based on its final word
///
/// Letters are assigned in order of first appearance ('A', 'B', ...);
/// a line whose ending rhymes with an earlier line reuses that line's
/// letter. Lines with no words get a fresh letter. Empty input yields an
/// empty scheme.
pub fn analyze_rhyme_scheme(lines: &[Vec<String>]) -> String {
    let mut scheme = String::with_capacity(lines.len());
    let mut groups: Vec<String> = Vec::new(); // final word of each group's first line

    for words in lines {
        let last_word = words.last().map(|w| w.as_str()).unwrap_or("");

        let existing = if last_word.is_empty() {
            None
        } else {
            groups.iter().position(|g| words_rhyme(g, last_word))
        };

        let index = match existing {
            Some(index) => index,
            None => {
                groups.push(last_word.to_string());
                groups.len() - 1
            }
        };

        scheme.push((b'A' + (index % 26) as u8) as char);
    }

    scheme
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(endings: &[&str]) -> Vec<Vec<String>> {
        endings
            .iter()
            .map(|e| vec!["the".to_string(), e.to_string()])
            .collect()
    }

    #[test]
    fn test_rime_key() {
        assert_eq!(rime_key("night"), "ight");
        assert_eq!(rime_key("light"), "ight");
        assert_eq!(rime_key("day"), "ai");
        assert_eq!(rime_key("time"), "im");
        assert_eq!(rime_key("rhyme"), "im");
        assert_eq!(rime_key("tsk"), "");
    }

    #[test]
    fn test_words_rhyme() {
        assert!(words_rhyme("night", "light"));
        assert!(words_rhyme("day", "may"));
        assert!(words_rhyme("love", "dove"));
        assert!(!words_rhyme("night", "day"));
        // refrain: identical word rhymes with itself
        assert!(words_rhyme("nevermore", "nevermore"));
        assert!(!words_rhyme("", ""));
    }

    #[test]
    fn test_alternating_quatrain() {
        let scheme = analyze_rhyme_scheme(&lines(&["night", "day", "light", "may"]));
        assert_eq!(scheme, "ABAB");
    }

    #[test]
    fn test_couplets() {
        let scheme = analyze_rhyme_scheme(&lines(&["night", "light", "day", "may"]));
        assert_eq!(scheme, "AABB");
    }

    #[test]
    fn test_unrhymed_lines_get_fresh_letters() {
        let scheme = analyze_rhyme_scheme(&lines(&["night", "sun", "gold"]));
        assert_eq!(scheme, "ABC");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(analyze_rhyme_scheme(&[]), "");
    }

    #[test]
    fn test_line_without_words() {
        let input = vec![vec![], vec!["day".to_string()]];
        let scheme = analyze_rhyme_scheme(&input);
        assert_eq!(scheme, "AB");
    }
}
