//! Question records and their JSON input shape
//!
//!     The input is a JSON array of positional 4-tuples:
//!
//!         [prompt, [option, ...], answer, explanation]
//!
//!     Each element is deserialized as a tuple and turned into a [`QuestionRecord`] with named
//!     fields. Anything that does not fit the shape becomes a [`KuisError::MalformedRecord`] that
//!     names the offending record.

use crate::error::KuisError;
use log::{debug, warn};
use serde::Deserialize;
use serde_json::Value;

/// Labels assigned to options by position.
pub const OPTION_LABELS: [&str; 5] = ["A", "B", "C", "D", "E"];

/// Maximum number of options a question may carry.
pub const MAX_OPTIONS: usize = OPTION_LABELS.len();

/// Wire shape of one record.
#[derive(Deserialize)]
struct RawRecord(String, Vec<String>, String, String);

/// One multiple-choice question. Never holds more than [`MAX_OPTIONS`] options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionRecord {
    prompt: String,
    options: Vec<String>,
    answer: String,
    explanation: String,
}

impl QuestionRecord {
    /// # Errors
    ///
    /// [`KuisError::MalformedRecord`] when there are more options than labels.
    pub fn new(
        prompt: impl Into<String>,
        options: Vec<String>,
        answer: impl Into<String>,
        explanation: impl Into<String>,
    ) -> Result<Self, KuisError> {
        check_option_count(options.len()).map_err(|reason| KuisError::MalformedRecord {
            index: None,
            reason,
        })?;

        Ok(Self {
            prompt: prompt.into(),
            options,
            answer: answer.into(),
            explanation: explanation.into(),
        })
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Label of the correct option, free-form (usually "A".."E").
    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    /// Options paired with their A-E label.
    pub fn labeled_options(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        OPTION_LABELS
            .iter()
            .copied()
            .zip(self.options.iter().map(String::as_str))
    }

    fn from_value(index: usize, value: &Value) -> Result<Self, KuisError> {
        let RawRecord(prompt, options, answer, explanation) =
            RawRecord::deserialize(value).map_err(|e| KuisError::malformed(index, e.to_string()))?;
        check_option_count(options.len()).map_err(|reason| KuisError::malformed(index, reason))?;

        Ok(Self {
            prompt,
            options,
            answer,
            explanation,
        })
    }
}

fn check_option_count(count: usize) -> Result<(), String> {
    if count > MAX_OPTIONS {
        return Err(format!(
            "at most {MAX_OPTIONS} options (A-E) are supported, found {count}"
        ));
    }
    Ok(())
}

/// Parse raw JSON text into question records, preserving input order.
///
/// # Errors
///
/// - [`KuisError::InvalidJson`] if the text is not JSON at all
/// - [`KuisError::MalformedRecord`] if the JSON is not an array of well-formed records
pub fn parse_questions(input: &str) -> Result<Vec<QuestionRecord>, KuisError> {
    let value: Value = serde_json::from_str(input).map_err(|e| {
        warn!("rejecting quiz input: {e}");
        KuisError::from(e)
    })?;

    let records = Vec::<Value>::deserialize(&value)
        .map_err(|e| KuisError::MalformedRecord {
            index: None,
            reason: format!("expected an array of questions: {e}"),
        })
        .and_then(|items| {
            items
                .iter()
                .enumerate()
                .map(|(index, item)| QuestionRecord::from_value(index, item))
                .collect::<Result<Vec<_>, _>>()
        })
        .inspect_err(|e| warn!("rejecting quiz input: {e}"))?;

    debug!("parsed {} question record(s)", records.len());
    Ok(records)
}
