//! Remediation feedback generation.

use secrecy::{ExposeSecret, SecretString};

use crate::patterns::contains_common_pattern;
use crate::signals::has_repeated_run;
use crate::types::Charset;

/// Builds the ordered list of remediation messages for a candidate.
///
/// Checks run in a fixed order and each appends at most one message;
/// callers must not reorder or deduplicate the result. The list is
/// empty only for a strong-but-not-excellent candidate with nothing to
/// improve.
pub fn generate_feedback(
    password: &SecretString,
    charset: &Charset,
    length: usize,
    score: u8,
) -> Vec<String> {
    let pwd = password.expose_secret();
    let mut feedback = Vec::new();

    if length < 8 {
        feedback.push("Use at least 8 characters".to_string());
    }

    if length < 12 {
        feedback.push("Consider 12+ characters for better security".to_string());
    }

    if !charset.lowercase {
        feedback.push("Add lowercase letters".to_string());
    }

    if !charset.uppercase {
        feedback.push("Add uppercase letters".to_string());
    }

    if !charset.numbers {
        feedback.push("Add digits".to_string());
    }

    if !charset.symbols {
        feedback.push("Add special characters".to_string());
    }

    if has_repeated_run(pwd) {
        feedback.push("Avoid repeated characters".to_string());
    }

    if contains_common_pattern(pwd) {
        feedback.push("Avoid common patterns and words".to_string());
    }

    if score >= 80 {
        feedback.push("Excellent! Your password is very secure".to_string());
    }

    feedback
}
