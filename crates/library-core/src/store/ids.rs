//! Identifier and code generation.
//!
//! Ids and code suffixes are compared and incremented as digit strings, so
//! there is no upper bound and the next value never collides with an
//! existing one.

use std::cmp::Ordering;

use crate::models::{artifact::CODE_PREFIX, Artifact, Visitor};

/// Next visitor id: one past the largest numeric id, or 1 for an empty table.
///
/// Ids that are not plain digit strings are ignored.
pub fn next_visitor_id(visitors: &[Visitor]) -> String {
    visitors
        .iter()
        .filter_map(Visitor::numeric_id)
        .max_by(|a, b| numeric_cmp(a, b))
        .map_or_else(|| "1".to_string(), increment)
}

/// Next generated artifact code, `ART<n>` with `n` one past the largest
/// existing `ART<digits>` suffix. Codes of any other shape are ignored.
pub fn next_artifact_code(artifacts: &[Artifact]) -> String {
    let next = artifacts
        .iter()
        .filter_map(Artifact::generated_suffix)
        .max_by(|a, b| numeric_cmp(a, b))
        .map_or_else(|| "1".to_string(), increment);
    format!("{CODE_PREFIX}{next}")
}

/// `value` without leading zeros when it is a non-empty run of ASCII digits
/// (`"007"` -> `"7"`, `"000"` -> `"0"`).
pub(crate) fn canonical_digits(value: &str) -> Option<&str> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let trimmed = value.trim_start_matches('0');
    Some(if trimmed.is_empty() { "0" } else { trimmed })
}

/// Orders canonical digit strings by numeric value.
fn numeric_cmp(a: &str, b: &str) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// Adds one to a canonical digit string.
fn increment(digits: &str) -> String {
    let mut out: Vec<u8> = digits.bytes().collect();
    let mut carry = true;
    for digit in out.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            carry = false;
            break;
        }
    }
    if carry {
        out.insert(0, b'1');
    }
    out.into_iter().map(char::from).collect()
}
