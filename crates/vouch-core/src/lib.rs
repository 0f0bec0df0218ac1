//! # vouch-core
//!
//! Deterministic acceptance-criteria matching for JSON documents.
//!
//! Given a declared criteria tree and a retrieved document tree, the matcher
//! reconciles scalar fields by exact equality, list-of-object fields by
//! unordered matching with per-field exact-or-fuzzy comparison, and returns
//! a structured pass/fail report.
//!
//! ## Key Guarantees
//!
//! 1. **Deterministic**: Same inputs always produce the same findings
//! 2. **Pure**: No I/O, no shared state, neither input is mutated
//! 3. **Order-preserving**: Findings follow criteria declaration order
//! 4. **Traceable**: Every FAIL carries a stable diagnostic code
//!
//! ## Example
//!
//! ```rust
//! use vouch_core::{check, CriteriaSet};
//! use serde_json::json;
//!
//! let criteria = CriteriaSet::from_json(
//!     r#"{"Name": "Carbon credits", "CanRelist": true}"#,
//! ).unwrap();
//! let document = json!({"Name": "Carbon credits", "CanRelist": true});
//!
//! let report = check(&criteria, &document);
//! assert!(report.passed());
//! ```

pub mod criteria;
pub mod matcher;
pub mod report;

// Re-export main types at crate root
pub use criteria::{CriteriaError, CriteriaSet, Criterion, ItemPattern};
pub use matcher::{check, FUZZY_TEXT_FIELD};
pub use report::{Code, Finding, Outcome, Report};
