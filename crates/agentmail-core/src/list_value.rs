//! JSON-or-scalar list arguments
//!
//! Flags such as `--labels` accept either a JSON array (`'["a","b"]'`) or a
//! bare value (`a`). Repeatable flags (`--to`, `--cc`, `--bcc`) accumulate
//! one value per occurrence. Command-line flags parse straight into
//! [`ListValue`], and both shapes are resolved into a plain `Vec<String>`
//! here, once, before anything reaches the API layer.

use crate::error::ApiError;

/// A list argument as supplied on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListValue {
    /// A single raw string, possibly holding a JSON array
    Scalar(String),
    /// Values already collected into a sequence
    Sequence(Vec<String>),
}

impl ListValue {
    /// Resolve into a vector.
    ///
    /// Sequences are returned unchanged. Scalars go through
    /// [`normalize_list_value`]. `Ok(None)` means the argument was empty.
    pub fn into_vec(self) -> Result<Option<Vec<String>>, ApiError> {
        match self {
            Self::Sequence(values) => Ok(Some(values)),
            Self::Scalar(raw) => normalize_list_value(Some(&raw)),
        }
    }

    /// Resolve an optional flag. An absent flag yields `Ok(None)`.
    pub fn resolve(value: Option<Self>) -> Result<Option<Vec<String>>, ApiError> {
        value.map_or(Ok(None), Self::into_vec)
    }
}

impl From<String> for ListValue {
    fn from(raw: String) -> Self {
        Self::Scalar(raw)
    }
}

impl From<Vec<String>> for ListValue {
    fn from(values: Vec<String>) -> Self {
        Self::Sequence(values)
    }
}

/// Parse a JSON-or-scalar list argument.
///
/// - `None` or `""` yields `Ok(None)`
/// - a value starting with `[` must be a JSON array of strings
/// - anything else becomes a one-element vector, without validation
pub fn normalize_list_value(raw: Option<&str>) -> Result<Option<Vec<String>>, ApiError> {
    let Some(raw) = raw else {
        return Ok(None);
    };
    if raw.is_empty() {
        return Ok(None);
    }

    if raw.starts_with('[') {
        let values: Vec<String> =
            serde_json::from_str(raw).map_err(|source| ApiError::InvalidListValue {
                value: raw.to_string(),
                source,
            })?;
        return Ok(Some(values));
    }

    Ok(Some(vec![raw.to_string()]))
}

/// Append one occurrence of a repeatable flag, keeping order and duplicates.
pub fn accumulate(value: String, mut existing: Vec<String>) -> Vec<String> {
    existing.push(value);
    existing
}

/// Fold every occurrence of a repeatable flag into one list.
///
/// Each occurrence is itself list-normalized, so `--to a --to '["b","c"]'`
/// collects `["a", "b", "c"]`.
pub fn collect_values(occurrences: Vec<ListValue>) -> Result<Vec<String>, ApiError> {
    let mut collected = Vec::new();
    for occurrence in occurrences {
        if let Some(values) = occurrence.into_vec()? {
            for value in values {
                collected = accumulate(value, collected);
            }
        }
    }
    Ok(collected)
}
