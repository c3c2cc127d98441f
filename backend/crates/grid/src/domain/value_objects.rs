//! Domain Value Objects

use serde_json::Value;

use crate::error::{GridError, GridResult};

/// Grid title: non-empty, optionally bounded in length
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridTitle(String);

impl GridTitle {
    /// Validate a title, with an optional maximum length in characters
    ///
    /// Only the empty string is rejected; whitespace is kept verbatim.
    pub fn new(raw: impl Into<String>, max_len: Option<usize>) -> GridResult<Self> {
        let raw = raw.into();

        if raw.is_empty() {
            return Err(GridError::Validation("title is required".to_string()));
        }

        if let Some(max_len) = max_len.filter(|&max| raw.chars().count() > max) {
            return Err(GridError::Validation(format!(
                "title must be at most {} characters",
                max_len
            )));
        }

        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Grid payload: any JSON value, `null` included
///
/// The shape is owned by the client and never inspected. Numbers keep
/// their exact textual form (`serde_json/arbitrary_precision`).
#[derive(Debug, Clone, PartialEq)]
pub struct GridData(Value);

impl GridData {
    /// `None` means the field was absent from the request
    pub fn new(raw: Option<Value>) -> GridResult<Self> {
        raw.map(Self)
            .ok_or_else(|| GridError::Validation("data is required".to_string()))
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }
}
