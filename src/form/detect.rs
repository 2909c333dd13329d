// Generic form scoring over the declarative catalog
// Weighted sub-scores per criterion, evidence, and ranked alternatives

use crate::form::catalog::{
    FormSignature, MeterRule, RhymeRule, StanzaShape, SyllableRule, FORM_CATALOG,
};
use crate::form::types::{
    FormCandidate, FormDetectionInput, FormDetectionResult, FormEvidence, PoemForm,
};
use crate::meter::string_similarity;

/// Criterion weights: rhyme and syllable templates discriminate harder
/// than bare line counts
const LINE_COUNT_WEIGHT: f32 = 1.0;
const RHYME_WEIGHT: f32 = 1.5;
const METER_WEIGHT: f32 = 1.0;
const SYLLABLE_WEIGHT: f32 = 1.5;
const STANZA_WEIGHT: f32 = 1.0;

/// Winning scores below this floor yield an Unknown verdict
const MIN_FORM_SCORE: f32 = 0.25;

/// Sub-scores at or above this count as a matched criterion in evidence
const EVIDENCE_THRESHOLD: f32 = 0.8;

/// Per-criterion sub-scores for one signature; None when the signature
/// does not constrain that criterion
#[derive(Debug, Clone, Default)]
struct SubScores {
    line_count: Option<f32>,
    rhyme: Option<f32>,
    meter: Option<f32>,
    syllables: Option<f32>,
    stanza: Option<f32>,
}

/// Classify a poem against the form catalog
///
/// Every signature gets a weighted score; the best one wins if it clears
/// [`MIN_FORM_SCORE`], otherwise the verdict is Unknown. All other
/// candidates with a positive score come back as alternatives, best
/// first. Deterministic for identical inputs.
pub fn detect_poem_form(input: &FormDetectionInput) -> FormDetectionResult {
    if input.line_count == 0 {
        return FormDetectionResult::unknown();
    }

    let mut scored: Vec<(&FormSignature, SubScores, f32)> = FORM_CATALOG
        .iter()
        .map(|signature| {
            let (subs, total) = score_signature(signature, input);
            (signature, subs, total)
        })
        .collect();

    // Stable sort: catalog order (strictest first) breaks ties
    scored.sort_by(|a, b| b.2.partial_cmp(&a.2).unwrap_or(std::cmp::Ordering::Equal));

    let (best_signature, best_subs, best_score) = match scored.first() {
        Some((signature, subs, score)) if *score >= MIN_FORM_SCORE => {
            (*signature, subs.clone(), *score)
        }
        _ => {
            let mut result = FormDetectionResult::unknown();
            result.alternatives = alternatives_from(&scored);
            return result;
        }
    };

    FormDetectionResult {
        form_type: best_signature.form,
        form_name: best_signature.form.display_name().to_string(),
        category: best_signature.category,
        confidence: best_score,
        evidence: build_evidence(input, best_signature, &best_subs),
        alternatives: alternatives_from(&scored[1..]),
    }
}

/// Positive-scoring candidates from a ranked slice, in order
fn alternatives_from(rest: &[(&FormSignature, SubScores, f32)]) -> Vec<FormCandidate> {
    rest.iter()
        .filter(|(_, _, score)| *score > 0.0)
        .map(|(signature, _, score)| FormCandidate {
            form_type: signature.form,
            form_name: signature.form.display_name().to_string(),
            category: signature.category,
            score: *score,
        })
        .collect()
}

/// Weighted score of one signature against the input
fn score_signature(signature: &FormSignature, input: &FormDetectionInput) -> (SubScores, f32) {
    if signature.low_regularity {
        // Free-verse affinity: strong when nothing metrical or rhymed holds
        let irregularity = 1.0 - input.regularity.clamp(0.0, 1.0);
        let unrhymed = 1.0 - rhyme_density(&input.rhyme_scheme);
        let score = (irregularity * 0.6 + unrhymed * 0.4).min(signature.max_confidence);
        return (SubScores::default(), score);
    }

    let mut subs = SubScores::default();
    let mut weighted = 0.0;
    let mut total_weight = 0.0;

    if let Some((min, max)) = signature.line_count {
        let score = if input.line_count >= min && input.line_count <= max {
            1.0
        } else {
            0.0
        };
        subs.line_count = Some(score);
        weighted += score * LINE_COUNT_WEIGHT;
        total_weight += LINE_COUNT_WEIGHT;
    }

    if let Some(rule) = signature.rhyme {
        let score = score_rhyme(rule, &input.rhyme_scheme);
        subs.rhyme = Some(score);
        weighted += score * RHYME_WEIGHT;
        total_weight += RHYME_WEIGHT;
    }

    if let Some(rule) = signature.meter {
        let score = score_meter(rule, input);
        subs.meter = Some(score);
        weighted += score * METER_WEIGHT;
        total_weight += METER_WEIGHT;
    }

    if let Some(rule) = signature.syllables {
        let score = score_syllables(rule, &input.syllables_per_line);
        subs.syllables = Some(score);
        weighted += score * SYLLABLE_WEIGHT;
        total_weight += SYLLABLE_WEIGHT;
    }

    if let Some(shape) = signature.stanza_shape {
        let score = score_stanza_shape(shape, &input.lines_per_stanza);
        subs.stanza = Some(score);
        weighted += score * STANZA_WEIGHT;
        total_weight += STANZA_WEIGHT;
    }

    if total_weight == 0.0 {
        return (subs, 0.0);
    }

    let score = (weighted / total_weight).min(signature.max_confidence);
    (subs, score)
}

/// Fraction of lines that share a rhyme letter with another line
fn rhyme_density(scheme: &str) -> f32 {
    let letters = scheme.as_bytes();
    if letters.len() < 2 {
        return 0.0;
    }

    let mut distinct: Vec<u8> = letters.to_vec();
    distinct.sort_unstable();
    distinct.dedup();

    (letters.len() - distinct.len()) as f32 / (letters.len() - 1) as f32
}

fn score_rhyme(rule: RhymeRule, scheme: &str) -> f32 {
    let scheme = scheme.to_uppercase();
    let letters = scheme.as_bytes();

    match rule {
        RhymeRule::Exact(expected) => string_similarity(&scheme, expected),

        RhymeRule::AnyOf(patterns) => patterns
            .iter()
            .map(|p| string_similarity(&scheme, p))
            .fold(0.0, f32::max),

        RhymeRule::Couplets => {
            let pairs = letters.len() / 2;
            if pairs == 0 {
                return 0.0;
            }
            let matched = (0..pairs)
                .filter(|&i| letters[2 * i] == letters[2 * i + 1])
                .count();
            matched as f32 / pairs as f32
        }

        RhymeRule::AlternatingQuatrains => {
            let quatrains = letters.len() / 4;
            if quatrains == 0 {
                return 0.0;
            }
            let matched = (0..quatrains)
                .filter(|&i| {
                    let q = &letters[4 * i..4 * i + 4];
                    q[0] == q[2] && q[1] == q[3] && q[0] != q[1]
                })
                .count();
            matched as f32 / quatrains as f32
        }

        RhymeRule::BalladQuatrains => {
            let quatrains = letters.len() / 4;
            if quatrains == 0 {
                return 0.0;
            }
            let matched = (0..quatrains)
                .filter(|&i| letters[4 * i + 1] == letters[4 * i + 3])
                .count();
            matched as f32 / quatrains as f32
        }

        RhymeRule::InterlockingTercets => {
            let tercets = letters.len() / 3;
            if tercets == 0 {
                return 0.0;
            }

            let mut conditions = 0;
            let mut matched = 0;
            for i in 0..tercets {
                // Outer lines of each tercet rhyme
                conditions += 1;
                if letters[3 * i] == letters[3 * i + 2] {
                    matched += 1;
                }
                // Middle line seeds the next tercet
                if i + 1 < tercets {
                    conditions += 1;
                    if letters[3 * i + 1] == letters[3 * (i + 1)] {
                        matched += 1;
                    }
                }
            }
            matched as f32 / conditions as f32
        }

        RhymeRule::Unrhymed => {
            if letters.is_empty() {
                return 0.0;
            }
            let mut distinct: Vec<u8> = letters.to_vec();
            distinct.sort_unstable();
            distinct.dedup();
            distinct.len() as f32 / letters.len() as f32
        }
    }
}

fn score_meter(rule: MeterRule, input: &FormDetectionInput) -> f32 {
    match rule.length {
        Some(length) => {
            let expected = format!("{} {}", rule.foot.adjective(), length.display_name());
            if input.meter_name.eq_ignore_ascii_case(&expected) {
                1.0
            } else if input.meter_foot_type == rule.foot {
                0.5
            } else {
                0.0
            }
        }
        None => {
            if input.meter_foot_type == rule.foot {
                1.0
            } else {
                0.0
            }
        }
    }
}

/// Per-line syllable scoring: exact counts score 1, off-by-one scores
/// 0.5 (a near-5-7-5 still reads as haiku, just weaker), further misses 0
fn score_syllables(rule: SyllableRule, syllables: &[usize]) -> f32 {
    let line_score = |actual: usize, expected: usize| -> f32 {
        if actual == expected {
            1.0
        } else if actual.abs_diff(expected) == 1 {
            0.5
        } else {
            0.0
        }
    };

    match rule {
        SyllableRule::Exact(expected) => {
            if expected.is_empty() {
                return 0.0;
            }
            let total: f32 = expected
                .iter()
                .enumerate()
                .map(|(i, &want)| syllables.get(i).map_or(0.0, |&got| line_score(got, want)))
                .sum();
            total / expected.len() as f32
        }

        SyllableRule::Repeating(cycle) => {
            if cycle.is_empty() || syllables.is_empty() {
                return 0.0;
            }
            let total: f32 = syllables
                .iter()
                .enumerate()
                .map(|(i, &got)| line_score(got, cycle[i % cycle.len()]))
                .sum();
            total / syllables.len() as f32
        }

        SyllableRule::PerLine(expected) => {
            if syllables.is_empty() {
                return 0.0;
            }
            let total: f32 = syllables.iter().map(|&got| line_score(got, expected)).sum();
            total / syllables.len() as f32
        }
    }
}

fn score_stanza_shape(shape: StanzaShape, lines_per_stanza: &[usize]) -> f32 {
    match shape {
        StanzaShape::Uniform(n) => {
            if lines_per_stanza.is_empty() {
                return 0.0;
            }
            let matched = lines_per_stanza.iter().filter(|&&len| len == n).count();
            matched as f32 / lines_per_stanza.len() as f32
        }
        StanzaShape::Exact(expected) => {
            if lines_per_stanza == expected {
                1.0
            } else {
                0.0
            }
        }
    }
}

fn build_evidence(
    input: &FormDetectionInput,
    signature: &FormSignature,
    subs: &SubScores,
) -> FormEvidence {
    let matched = |sub: Option<f32>| sub.is_some_and(|s| s >= EVIDENCE_THRESHOLD);

    let mut notes = Vec::new();
    notes.push(format!("{} lines", input.line_count));
    if input.stanza_count > 1 {
        notes.push(format!("{} stanzas", input.stanza_count));
    }
    if !input.rhyme_scheme.is_empty() {
        notes.push(format!("rhyme scheme {}", input.rhyme_scheme));
    }

    // Sonnet-shaped schemes ending GG get the couplet called out
    let letters = input.rhyme_scheme.as_bytes();
    if input.line_count == 14
        && letters.len() >= 2
        && letters[letters.len() - 1] == letters[letters.len() - 2]
    {
        notes.push("ends with a rhyming couplet".to_string());
    }

    if input.meter_confidence > 0.5 && !input.meter_name.is_empty() {
        notes.push(input.meter_name.clone());
    }

    if let Some(score) = subs.syllables {
        if score > 0.0 && score < 1.0 {
            notes.push("syllable counts approximate the expected pattern".to_string());
        }
    }

    if signature.form == PoemForm::FreeVerse {
        notes.push("low metrical regularity".to_string());
    }

    FormEvidence {
        line_count_match: matched(subs.line_count),
        rhyme_scheme_match: matched(subs.rhyme),
        meter_match: matched(subs.meter),
        syllable_pattern_match: matched(subs.syllables),
        stanza_structure_match: matched(subs.stanza),
        notes,
    }
}
