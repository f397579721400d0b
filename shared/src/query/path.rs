//! Field paths into untyped GraphQL response data.

use serde_json::Value;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur while parsing a dotted path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    /// The path string was empty.
    #[error("Extraction path cannot be empty")]
    Empty,

    /// A segment between dots was empty (e.g. `deployment..logs`).
    #[error("Extraction path '{0}' contains an empty segment")]
    EmptySegment(String),
}

/// An ordered sequence of field names locating a value inside a response's
/// `data` subtree.
///
/// # Example
///
/// ```
/// use shared::query::ExtractionPath;
/// use serde_json::json;
///
/// let path: ExtractionPath = "deployment.logs".parse().unwrap();
/// let data = json!({"deployment": {"id": "d1", "logs": "boot ok"}});
///
/// assert_eq!(path.resolve(&data), Some(&json!("boot ok")));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionPath {
    steps: Vec<String>,
}

impl ExtractionPath {
    /// Creates a path from its field-name steps.
    #[must_use]
    pub fn new<I, S>(steps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            steps: steps.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the field-name steps.
    #[must_use]
    pub fn steps(&self) -> &[String] {
        &self.steps
    }

    /// Walks the path through `data`, stopping at the first missing step.
    ///
    /// A step misses when the current value is not an object, lacks the
    /// field, or holds JSON `null`. An empty path resolves to `data` itself
    /// unless `data` is `null`.
    #[must_use]
    pub fn resolve<'a>(&self, data: &'a Value) -> Option<&'a Value> {
        let found = self
            .steps
            .iter()
            .try_fold(data, |current, step| current.as_object()?.get(step))?;
        (!found.is_null()).then_some(found)
    }
}

impl FromStr for ExtractionPath {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(PathError::Empty);
        }
        let steps: Vec<&str> = s.split('.').collect();
        if steps.iter().any(|step| step.is_empty()) {
            return Err(PathError::EmptySegment(s.to_string()));
        }
        Ok(Self::new(steps))
    }
}

impl std::fmt::Display for ExtractionPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.steps.join("."))
    }
}
