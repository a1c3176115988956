//! Parsing of freeform service responses into suggestion strings
//!
//! Expected format:
//! ```text
//! 1. Patients miss follow-up appointments
//! 2. Clinics lack real-time inventory of dental supplies
//! ```
//! Numbering is stripped when present; anything else is passed through
//! line by line.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::GenerationError;

/// Leading "N. " list numbering
static NUMBERING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*\d+\.(\s+|$)").expect("numbering pattern is valid"));

/// Strip numbering and surrounding whitespace from one line
pub fn clean_line(line: &str) -> &str {
    let without_number = match NUMBERING.find(line) {
        Some(m) => &line[m.end()..],
        None => line,
    };
    without_number.trim()
}

/// Split a response into cleaned, non-blank lines in their original order.
///
/// Fails when nothing usable remains.
pub fn parse_suggestions(response: &str) -> Result<Vec<String>, GenerationError> {
    let suggestions: Vec<String> = response
        .lines()
        .map(clean_line)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    if suggestions.is_empty() {
        return Err(GenerationError::EmptySuggestions);
    }
    Ok(suggestions)
}
