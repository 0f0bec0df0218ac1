//! Criteria parsing from JSON.

use serde_json::Value;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur when loading or validating criteria.
///
/// All of these are fatal to a run: structurally broken criteria are
/// rejected before matching begins, they never become per-key findings.
#[derive(Error, Debug)]
pub enum CriteriaError {
    #[error("failed to read criteria file: {0}")]
    Io(#[from] std::io::Error),

    #[error("criteria are not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("criteria must be a JSON object at the top level")]
    NotAnObject,

    #[error("item pattern for key({0}) must be an object")]
    PatternNotAnObject(String),

    #[error("field({field}) of an item pattern for key({key}) must be a scalar")]
    PatternFieldNotScalar { key: String, field: String },
}

/// A declared object of field/value pairs that some element of an actual
/// list field is expected to satisfy.
///
/// Fields keep declaration order; the matcher scans them in that order.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemPattern {
    fields: Vec<(String, Value)>,
}

impl ItemPattern {
    /// The declared field/value pairs, in declaration order.
    pub fn fields(&self) -> &[(String, Value)] {
        &self.fields
    }

    /// Render the pattern as `field = value, field = value` for messages.
    pub fn render(&self) -> String {
        self.fields
            .iter()
            .map(|(field, value)| format!("{field} = {}", render_scalar(value)))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// One declared expectation about a document field.
///
/// The scalar/list decision is made here, once, at parse time.
#[derive(Debug, Clone, PartialEq)]
pub enum Criterion {
    /// The document value for `key` must equal `expected` exactly.
    Scalar { key: String, expected: Value },

    /// The document value for `key` must be a list containing, for each
    /// pattern, some item satisfying it.
    List {
        key: String,
        patterns: Vec<ItemPattern>,
    },
}

impl Criterion {
    /// The document key this criterion applies to.
    pub fn key(&self) -> &str {
        match self {
            Criterion::Scalar { key, .. } | Criterion::List { key, .. } => key,
        }
    }
}

/// An ordered set of acceptance criteria.
///
/// Iteration order is the declaration order of the source JSON object, which
/// the report's finding order follows.
#[derive(Debug, Clone, PartialEq)]
pub struct CriteriaSet {
    criteria: Vec<Criterion>,
}

impl CriteriaSet {
    /// Build a criteria set from an already-parsed JSON value.
    ///
    /// The top level must be an object. A list-valued entry becomes a
    /// [`Criterion::List`] whose elements must all be objects of scalar
    /// fields; any other value becomes a [`Criterion::Scalar`].
    pub fn from_value(value: Value) -> Result<Self, CriteriaError> {
        let Value::Object(map) = value else {
            return Err(CriteriaError::NotAnObject);
        };

        let mut criteria = Vec::with_capacity(map.len());
        for (key, expected) in map {
            let criterion = match expected {
                Value::Array(items) => {
                    let mut patterns = Vec::with_capacity(items.len());
                    for item in items {
                        let Value::Object(fields) = item else {
                            return Err(CriteriaError::PatternNotAnObject(key));
                        };
                        let mut pairs = Vec::with_capacity(fields.len());
                        for (field, value) in fields {
                            if value.is_array() || value.is_object() {
                                return Err(CriteriaError::PatternFieldNotScalar { key, field });
                            }
                            pairs.push((field, value));
                        }
                        patterns.push(ItemPattern { fields: pairs });
                    }
                    Criterion::List { key, patterns }
                }
                other => Criterion::Scalar {
                    key,
                    expected: other,
                },
            };
            criteria.push(criterion);
        }

        Ok(Self { criteria })
    }

    /// Parse criteria from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, CriteriaError> {
        Self::from_value(serde_json::from_str(json)?)
    }

    /// Parse criteria from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CriteriaError> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Iterate the criteria in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Criterion> {
        self.criteria.iter()
    }

    pub fn len(&self) -> usize {
        self.criteria.len()
    }

    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }
}

impl Default for CriteriaSet {
    /// The built-in criteria used when no criteria file is available.
    fn default() -> Self {
        let value = serde_json::json!({
            "Name": "Carbon credits",
            "CanRelist": true,
            "Promotions": [
                {
                    "Name": "Gallery",
                    "Description": "Good position in category"
                }
            ]
        });
        Self::from_value(value).expect("built-in default criteria are well formed")
    }
}

/// Render a scalar for messages: strings bare, everything else as JSON.
pub(crate) fn render_scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
