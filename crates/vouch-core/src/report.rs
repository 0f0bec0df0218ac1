//! Findings and the validation report.
//!
//! The matcher never prints or logs results itself; it returns a [`Report`]
//! and a rendering collaborator decides how to surface it. Findings are
//! constructed once and never mutated, and they keep the order in which
//! criteria were declared.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable diagnostic codes for failed checks.
///
/// The numbering is inherited from the original validation tool and must not
/// be renumbered: downstream consumers key off these strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Code {
    /// `2-1`: a criterion key is absent from the document.
    KeyNotDetected,

    /// `2-2`: a scalar criterion value differs from the document value.
    UnexpectedValue,

    /// `2-3`: a list criterion met a non-list document value.
    UnexpectedFormat,

    /// `2-4`: no document list item satisfied an item pattern.
    ContentNotMatched,
}

impl Code {
    /// The wire/log representation of the code.
    pub fn as_str(&self) -> &'static str {
        match self {
            Code::KeyNotDetected => "2-1",
            Code::UnexpectedValue => "2-2",
            Code::UnexpectedFormat => "2-3",
            Code::ContentNotMatched => "2-4",
        }
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a single check passed or failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Outcome {
    Pass,
    Fail,
}

/// One reported check result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    /// Diagnostic code; present on failures, absent on passes.
    pub code: Option<Code>,

    /// Human-readable explanation of what was checked.
    pub message: String,

    /// PASS or FAIL.
    pub outcome: Outcome,
}

impl Finding {
    /// Create a passing finding.
    pub fn pass(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
            outcome: Outcome::Pass,
        }
    }

    /// Create a failing finding with its diagnostic code.
    pub fn fail(code: Code, message: impl Into<String>) -> Self {
        Self {
            code: Some(code),
            message: message.into(),
            outcome: Outcome::Fail,
        }
    }
}

/// The full result of matching one criteria set against one document.
///
/// Successes and errors are kept separate so the renderer can show what
/// passed before what failed; both preserve criteria declaration order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// PASS findings, in criteria order.
    pub successes: Vec<Finding>,

    /// FAIL findings, in criteria order.
    pub errors: Vec<Finding>,

    /// When the check ran.
    pub checked_at: DateTime<Utc>,
}

impl Report {
    /// Overall verdict: PASS only when nothing failed.
    pub fn passed(&self) -> bool {
        self.errors.is_empty()
    }
}
