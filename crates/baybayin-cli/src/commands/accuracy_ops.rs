use std::fs;
use std::process;

use serde::{Deserialize, Serialize};

use baybayin_engine::convert;

#[derive(Debug, Deserialize)]
pub struct AccuracyCorpus {
    pub cases: Vec<AccuracyCase>,
}

#[derive(Debug, Deserialize)]
pub struct AccuracyCase {
    pub input: String,
    pub expected: String,
    #[serde(default = "default_canceller")]
    pub canceller: String,
    #[serde(default = "default_font")]
    pub font: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub skip: bool,
    #[serde(default)]
    pub note: Option<String>,
}

fn default_canceller() -> String {
    "+".to_string()
}

fn default_font() -> String {
    "Baybayin Simple".to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AccuracyStatus {
    Pass,
    Fail,
    Skip,
}

#[derive(Debug, Serialize)]
pub struct AccuracyResult {
    pub input: String,
    pub expected: String,
    pub actual: String,
    pub canceller: String,
    pub font: String,
    pub status: AccuracyStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

pub fn parse_corpus(content: &str) -> Result<AccuracyCorpus, toml::de::Error> {
    toml::from_str(content)
}

/// Run every case (optionally only those carrying `tag`).
pub fn evaluate(corpus: &AccuracyCorpus, tag: Option<&str>) -> Vec<AccuracyResult> {
    corpus
        .cases
        .iter()
        .filter(|case| tag.map_or(true, |t| case.tags.iter().any(|ct| ct == t)))
        .map(|case| {
            let actual = convert(&case.input, &case.canceller, &case.font);
            let status = if case.skip {
                AccuracyStatus::Skip
            } else if actual == case.expected {
                AccuracyStatus::Pass
            } else {
                AccuracyStatus::Fail
            };
            AccuracyResult {
                input: case.input.clone(),
                expected: case.expected.clone(),
                actual,
                canceller: case.canceller.clone(),
                font: case.font.clone(),
                status,
                note: case.note.clone(),
            }
        })
        .collect()
}

pub fn accuracy_cmd(corpus_file: &str, tag: Option<&str>, verbose: bool, json: bool) {
    let content = die!(
        fs::read_to_string(corpus_file),
        "Error reading {corpus_file}: {}"
    );
    let corpus = die!(parse_corpus(&content), "Error parsing corpus: {}");
    let results = evaluate(&corpus, tag);

    let count = |s: AccuracyStatus| results.iter().filter(|r| r.status == s).count();
    let (pass, fail, skip) = (
        count(AccuracyStatus::Pass),
        count(AccuracyStatus::Fail),
        count(AccuracyStatus::Skip),
    );

    if json {
        let out = die!(
            serde_json::to_string_pretty(&results),
            "Error serializing results: {}"
        );
        println!("{out}");
    } else {
        for r in &results {
            let label = match r.status {
                AccuracyStatus::Pass if !verbose => continue,
                AccuracyStatus::Pass => "PASS",
                AccuracyStatus::Fail => "FAIL",
                AccuracyStatus::Skip => "SKIP",
            };
            println!(
                "  {label}  {} [{} / {}] -> {} (expected {})",
                r.input, r.canceller, r.font, r.actual, r.expected
            );
            if let Some(note) = &r.note {
                println!("        {note}");
            }
        }
        println!();
        println!("=== Summary ===");
        println!("  Total:  {}", results.len());
        println!("  Pass:   {pass}");
        println!("  Fail:   {fail}");
        println!("  Skip:   {skip}");
    }

    if fail > 0 {
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CORPUS: &str = r#"
[[cases]]
input = "kumusta"
expected = "ᜃᜓᜋᜓᜐ+ᜆ"
tags = ["basic"]

[[cases]]
input = "aklat"
expected = "aᜃ]ᜎᜆ]"
font = "Baybayin Kariktan"

[[cases]]
input = "bata"
expected = "wrong"
tags = ["basic"]

[[cases]]
input = "o"
expected = ""
skip = true
note = "bare o has no glyph in the default table"
"#;

    #[test]
    fn test_parse_defaults() {
        let corpus = parse_corpus(CORPUS).unwrap();
        assert_eq!(corpus.cases.len(), 4);
        assert_eq!(corpus.cases[0].canceller, "+");
        assert_eq!(corpus.cases[0].font, "Baybayin Simple");
        assert_eq!(corpus.cases[1].font, "Baybayin Kariktan");
        assert!(corpus.cases[3].skip);
    }

    #[test]
    fn test_evaluate_statuses() {
        let corpus = parse_corpus(CORPUS).unwrap();
        let statuses: Vec<AccuracyStatus> =
            evaluate(&corpus, None).iter().map(|r| r.status).collect();
        assert_eq!(
            statuses,
            vec![
                AccuracyStatus::Pass,
                AccuracyStatus::Pass,
                AccuracyStatus::Fail,
                AccuracyStatus::Skip
            ]
        );
    }

    #[test]
    fn test_evaluate_tag_filter() {
        let corpus = parse_corpus(CORPUS).unwrap();
        let results = evaluate(&corpus, Some("basic"));
        assert_eq!(results.len(), 2);
        assert_eq!(results[1].actual, "ᜊᜆ");
    }

    #[test]
    fn test_bundled_corpus_passes() {
        let corpus = parse_corpus(include_str!("../../testdata/corpus.toml")).unwrap();
        let failures: Vec<_> = evaluate(&corpus, None)
            .into_iter()
            .filter(|r| r.status == AccuracyStatus::Fail)
            .map(|r| format!("{} -> {} (expected {})", r.input, r.actual, r.expected))
            .collect();
        assert!(failures.is_empty(), "{failures:#?}");
    }
}
