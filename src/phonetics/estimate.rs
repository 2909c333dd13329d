// Heuristic stress estimation for out-of-vocabulary words
// Orthographic syllable counting with rule-of-thumb stress assignment

/// Estimate a stress pattern for a word not found in the dictionary
///
/// Syllable count comes from vowel-group counting (see
/// [`estimate_syllable_count`]); stress placement follows rough English
/// defaults rather than articulation:
/// - 1 syllable  → "1" (monosyllables default stressed)
/// - 2 syllables → "10" (trochaic default)
/// - 3 syllables → "100" (dactylic default)
/// - 4+ syllables → alternating, starting unstressed
///
/// Returns an empty string for blank input. This is a fallback, not a
/// replacement for dictionary lookup.
pub fn estimate_stress_pattern(word: &str) -> String {
    let syllables = estimate_syllable_count(word);

    match syllables {
        0 => String::new(),
        1 => "1".to_string(),
        2 => "10".to_string(),
        3 => "100".to_string(),
        n => (0..n).map(|i| if i % 2 == 1 { '1' } else { '0' }).collect(),
    }
}

/// Estimate the syllable count of a word from its spelling
///
/// Counts vowel-group clusters ([aeiouy]+) as a syllable proxy, then
/// adjusts for two common silent endings:
/// - trailing "e" preceded by a consonant (unless the word ends in "le")
/// - "-ed" not preceded by t or d ("loved" is one syllable, "wanted" two)
///
/// Non-blank words count at least 1. Blank input counts 0.
pub fn estimate_syllable_count(word: &str) -> usize {
    let chars: Vec<char> = word.to_lowercase().chars().collect();

    if chars.is_empty() {
        return 0;
    }

    // Count vowel groups
    let mut count: usize = 0;
    let mut in_group = false;
    for &c in &chars {
        if is_vowel(c) {
            if !in_group {
                count += 1;
            }
            in_group = true;
        } else {
            in_group = false;
        }
    }

    let n = chars.len();

    // Silent trailing "e": "stone" is one syllable, "little" keeps its "le"
    if n >= 2 && chars[n - 1] == 'e' && !is_vowel(chars[n - 2]) && chars[n - 2] != 'l' {
        count = count.saturating_sub(1);
    }

    // Silent "-ed": "whispered" loses a syllable, "wanted"/"faded" keep it
    if n >= 3
        && chars[n - 2] == 'e'
        && chars[n - 1] == 'd'
        && chars[n - 3] != 't'
        && chars[n - 3] != 'd'
    {
        count = count.saturating_sub(1);
    }

    count.max(1)
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}
