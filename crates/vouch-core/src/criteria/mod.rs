//! Criteria parsing and validation.
//!
//! Acceptance criteria are declared as a JSON object and parsed once into a
//! typed [`CriteriaSet`]; the matcher never re-inspects raw JSON shapes.

mod parser;

pub use parser::{CriteriaError, CriteriaSet, Criterion, ItemPattern};

pub(crate) use parser::render_scalar;
