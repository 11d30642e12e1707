//! Evaluation parser — reads the `RATING:` / `FEEDBACK:` / `GRAMMAR:` block
//! the evaluation prompt asks the model to produce.
//!
//! Best effort only: anything missing or malformed falls back to defaults and
//! never fails the request.

use serde::Serialize;

pub const DEFAULT_RATING: u8 = 3;
pub const DEFAULT_FEEDBACK: &str = "Good effort! Keep practicing.";

const RATING_PREFIX: &str = "RATING:";
const FEEDBACK_PREFIX: &str = "FEEDBACK:";
const GRAMMAR_PREFIX: &str = "GRAMMAR:";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationResult {
    /// 1 – 5
    pub rating: u8,
    pub feedback: String,
    pub grammar_issues: Vec<String>,
}

impl Default for EvaluationResult {
    fn default() -> Self {
        Self {
            rating: DEFAULT_RATING,
            feedback: DEFAULT_FEEDBACK.to_string(),
            grammar_issues: Vec::new(),
        }
    }
}

/// Parses the model's evaluation text line by line. Later lines win.
pub fn parse_evaluation(text: &str) -> EvaluationResult {
    let mut result = EvaluationResult::default();

    for line in text.lines() {
        if line.starts_with(RATING_PREFIX) {
            result.rating = parse_rating(line).unwrap_or(DEFAULT_RATING);
        } else if let Some(feedback) = line.strip_prefix(FEEDBACK_PREFIX) {
            result.feedback = feedback.trim().to_string();
        } else if let Some(grammar) = line.strip_prefix(GRAMMAR_PREFIX) {
            let grammar = grammar.trim();
            if !grammar.eq_ignore_ascii_case("none") {
                result.grammar_issues = grammar.split(',').map(|g| g.trim().to_string()).collect();
            }
        }
    }

    result
}

/// Reads the first character of the text between the first and second colon.
/// "RATING: 4/5" is 4 and "RATING: 10" is 1. Digits outside 1–5 are rejected.
fn parse_rating(line: &str) -> Option<u8> {
    let segment = line.split(':').nth(1)?;
    let digit = segment.trim().chars().next()?.to_digit(10)?;
    (1..=5).contains(&digit).then_some(digit as u8)
}
