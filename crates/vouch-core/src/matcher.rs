//! The criteria matcher.
//!
//! Walks a parsed [`CriteriaSet`] against an actual JSON document and
//! produces a [`Report`]. The matcher is a pure function of its two inputs:
//! no I/O, no shared state, no short-circuiting across criteria. Every
//! criterion is resolved independently and contributes findings whether or
//! not its siblings passed.

use chrono::Utc;
use regex::Regex;
use serde_json::Value;
use tracing::debug;

use crate::criteria::{render_scalar, CriteriaSet, Criterion, ItemPattern};
use crate::report::{Code, Finding, Report};

/// Field name where whitespace-insensitive substring containment replaces
/// exact equality when the exact comparison fails.
pub const FUZZY_TEXT_FIELD: &str = "Description";

/// Match a criteria set against a document and report every check.
///
/// Findings come back in criteria declaration order, successes and errors
/// separately. Neither input is mutated.
pub fn check(criteria: &CriteriaSet, document: &Value) -> Report {
    debug!(criteria = criteria.len(), "matching criteria against document");

    let mut successes = Vec::new();
    let mut errors = Vec::new();

    for criterion in criteria.iter() {
        let key = criterion.key();
        let Some(actual) = document.get(key) else {
            errors.push(Finding::fail(
                Code::KeyNotDetected,
                format!("the key({key}) is not detected in the document"),
            ));
            continue;
        };

        match criterion {
            Criterion::Scalar { expected, .. } => {
                if actual == expected {
                    successes.push(Finding::pass(format!("{key} = {}", render_scalar(actual))));
                } else {
                    debug!(key, "scalar criterion mismatched");
                    errors.push(Finding::fail(
                        Code::UnexpectedValue,
                        format!(
                            "the value of the key({key}) is unexpected. Actual: {}, Target: {}",
                            render_scalar(actual),
                            render_scalar(expected)
                        ),
                    ));
                }
            }
            Criterion::List { patterns, .. } => {
                let Some(items) = actual.as_array() else {
                    // Shape error preempts all item patterns for this key.
                    errors.push(Finding::fail(
                        Code::UnexpectedFormat,
                        format!("the format type of the key({key}) is unexpected: a list was expected"),
                    ));
                    continue;
                };

                for pattern in patterns {
                    let rendered = pattern.render();
                    if pattern_detected(pattern, items) {
                        successes.push(Finding::pass(format!("the content({rendered}) is detected")));
                    } else {
                        debug!(key, pattern = %rendered, "item pattern not matched");
                        errors.push(Finding::fail(
                            Code::ContentNotMatched,
                            format!("the content({rendered}) is not matched"),
                        ));
                    }
                }
            }
        }
    }

    Report {
        successes,
        errors,
        checked_at: Utc::now(),
    }
}

/// Scan the actual list items for a pattern, accumulating per-field
/// satisfaction across items.
///
/// For each item the pattern's fields are walked in declaration order. A
/// field absent from the item abandons the item; an exact match marks the
/// field and moves on; an inexact value on the fuzzy text field may still
/// mark it via [`fuzzy_contains`] but abandons the item either way. A
/// field's mark survives into later items, so the pattern counts as
/// detected once every field has been marked by some item, not necessarily
/// the same one. This accumulation is compatibility-critical behavior
/// inherited from the original tool; do not tighten it to single-item
/// conjunctive matching without a policy decision.
fn pattern_detected(pattern: &ItemPattern, items: &[Value]) -> bool {
    let fields = pattern.fields();
    let mut satisfied = vec![false; fields.len()];

    for item in items {
        for (slot, (field, expected)) in satisfied.iter_mut().zip(fields) {
            let Some(actual) = item.get(field) else {
                break;
            };
            if actual == expected {
                *slot = true;
                continue;
            }
            if field == FUZZY_TEXT_FIELD {
                if let (Some(expected), Some(actual)) = (expected.as_str(), actual.as_str()) {
                    if fuzzy_contains(expected, actual) {
                        *slot = true;
                    }
                }
            }
            // Any inexact value abandons this item, marks kept.
            break;
        }
    }

    satisfied.iter().all(|s| *s)
}

/// Whitespace-insensitive substring containment.
///
/// The expected text is trimmed, split on whitespace runs, and rejoined as
/// a regex where each run boundary matches any whitespace run, so
/// `"Good position in category"` is found inside
/// `"Good  position\nin category!"`.
fn fuzzy_contains(expected: &str, actual: &str) -> bool {
    let words: Vec<String> = expected.split_whitespace().map(|w| regex::escape(w)).collect();
    if words.is_empty() {
        return true;
    }
    let pattern = words.join(r"\s+");
    Regex::new(&pattern)
        .map(|re| re.is_match(actual))
        .unwrap_or(false)
}
