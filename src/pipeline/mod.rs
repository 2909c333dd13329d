// Analysis pipeline module
// Orchestrates the full poem-to-musical-suggestion analysis

pub mod trace;

pub use trace::{read_trace_file, TraceBuilder, TraceEntry, TraceError, TraceWriter};

use serde::{Deserialize, Serialize};

use crate::emotion::{analyze_emotion, EmotionalAnalysis};
use crate::form::{detect_poem_form, FormDetectionInput, FormDetectionResult};
use crate::meter::{analyze_multi_line_meter, MeterAnalysis};
use crate::poem::{parse_poem, Poem};
use crate::rhyme::analyze_rhyme_scheme;
use crate::stress::{analyze_poem_stress, get_dominant_foot, FootType, StressAnalysis};

/// Complete analysis of one poem
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoemAnalysis {
    /// The parsed poem the analysis ran over
    pub poem: Poem,

    /// Per-line stress analyses
    pub stress: Vec<StressAnalysis>,

    /// Dominant foot across lines
    pub dominant_foot: FootType,

    /// Poem-level meter verdict
    pub meter: MeterAnalysis,

    /// One rhyme letter per line
    pub rhyme_scheme: String,

    /// Emotional profile and musical suggestions
    pub emotion: EmotionalAnalysis,

    /// Detected poem form
    pub form: FormDetectionResult,
}

/// Run the full analysis pipeline over raw poem text
///
/// Stages: parse → stress → meter → rhyme → emotion → form. Every stage
/// degrades gracefully on thin input, so empty text yields a well-typed
/// neutral analysis rather than an error.
pub fn analyze_poem(text: &str) -> PoemAnalysis {
    let poem = parse_poem(text);
    log::info!(
        "Analyzing poem: {} lines in {} stanzas",
        poem.line_count(),
        poem.stanzas.len()
    );

    let line_words: Vec<Vec<String>> = poem
        .lines()
        .iter()
        .map(|line| line.words.clone())
        .collect();

    let stress = analyze_poem_stress(&line_words);
    let dominant_foot = get_dominant_foot(&stress);

    let patterns: Vec<String> = stress.iter().map(|s| s.pattern.clone()).collect();
    let meter = analyze_multi_line_meter(&patterns);
    log::debug!("Detected meter: {} ({:.2})", meter.meter_name, meter.confidence);

    let rhyme_scheme = analyze_rhyme_scheme(&line_words);

    let emotion = analyze_emotion(text, &poem.stanza_texts());

    let form_input = build_form_input(&poem, &stress, &meter, &rhyme_scheme);
    let form = detect_poem_form(&form_input);
    log::debug!("Detected form: {} ({:.2})", form.form_name, form.confidence);

    PoemAnalysis {
        poem,
        stress,
        dominant_foot,
        meter,
        rhyme_scheme,
        emotion,
        form,
    }
}

/// Run the pipeline while appending stage entries to a trace file
pub fn analyze_poem_traced(text: &str, writer: &TraceWriter) -> Result<PoemAnalysis, TraceError> {
    writer.write(&TraceBuilder::stage("parse").start("Parsing poem text"))?;
    let analysis = analyze_poem(text);

    writer.write(&TraceBuilder::stage("parse").with_data(
        1.0,
        "Parsed poem",
        serde_json::json!({
            "line_count": analysis.poem.line_count(),
            "stanza_count": analysis.poem.stanzas.len(),
        }),
    ))?;
    writer.write(&TraceBuilder::stage("stress_analysis").with_data(
        1.0,
        "Extracted stress patterns",
        serde_json::json!({
            "dominant_foot": analysis.dominant_foot.display_name(),
        }),
    ))?;
    writer.write(&TraceBuilder::stage("meter_detection").with_data(
        1.0,
        "Detected meter",
        serde_json::json!({
            "meter_name": analysis.meter.meter_name,
            "confidence": analysis.meter.confidence,
        }),
    ))?;
    writer.write(&TraceBuilder::stage("rhyme_analysis").with_data(
        1.0,
        "Labeled rhyme scheme",
        serde_json::json!({ "rhyme_scheme": analysis.rhyme_scheme }),
    ))?;
    writer.write(&TraceBuilder::stage("emotion_analysis").with_data(
        1.0,
        "Analyzed emotional profile",
        serde_json::json!({
            "overall_sentiment": analysis.emotion.overall_sentiment,
        }),
    ))?;
    writer.write(&TraceBuilder::stage("form_detection").with_data(
        1.0,
        "Detected form",
        serde_json::json!({
            "form_name": analysis.form.form_name,
            "confidence": analysis.form.confidence,
        }),
    ))?;

    Ok(analysis)
}

/// Assemble the form detector's input from earlier stage outputs
fn build_form_input(
    poem: &Poem,
    stress: &[StressAnalysis],
    meter: &MeterAnalysis,
    rhyme_scheme: &str,
) -> FormDetectionInput {
    let syllables_per_line: Vec<usize> = stress.iter().map(|s| s.pattern.len()).collect();
    let avg_syllables_per_line = if syllables_per_line.is_empty() {
        0.0
    } else {
        syllables_per_line.iter().sum::<usize>() as f32 / syllables_per_line.len() as f32
    };

    FormDetectionInput {
        line_count: poem.line_count(),
        stanza_count: poem.stanzas.len(),
        lines_per_stanza: poem.lines_per_stanza(),
        meter_foot_type: meter.foot_type,
        meter_name: meter.meter_name.clone(),
        meter_confidence: meter.confidence,
        rhyme_scheme: rhyme_scheme.to_string(),
        syllables_per_line,
        avg_syllables_per_line,
        regularity: meter.regularity,
    }
}
