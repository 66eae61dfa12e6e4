//! Error types for a validation run.

use thiserror::Error;

use crate::document::RecordKind;
use crate::pubkey::byte_dump;

/// Coarse classification of a [`ValidationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Input was not well-formed JSON.
    Parse,
    /// A required field was absent (or falsy) on a record.
    MissingField,
    /// A field was present but failed its format check.
    InvalidField,
    /// A value had the wrong JSON type for its position.
    Shape,
}

/// The first failure encountered during a run. Validation stops here.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// The input could not be parsed as JSON.
    #[error("{0}")]
    Parse(#[from] serde_json::Error),

    /// Record `index` lacks `field`.
    #[error("{record} {index} missing {field}")]
    MissingField {
        record: RecordKind,
        index: usize,
        field: &'static str,
    },

    /// Record `index` carries a `field` that fails its format check.
    #[error("{record} {index} has invalid {field}: '{value}' len={len}")]
    InvalidField {
        record: RecordKind,
        index: usize,
        field: &'static str,
        /// The offending value, verbatim.
        value: String,
        /// Length of `value` in characters.
        len: usize,
    },

    /// A value at `path` is not of the expected JSON type.
    #[error("{path} must be {expected}, found {found}")]
    Shape {
        path: String,
        expected: &'static str,
        found: &'static str,
    },
}

impl ValidationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Parse(_) => ErrorKind::Parse,
            Self::MissingField { .. } => ErrorKind::MissingField,
            Self::InvalidField { .. } => ErrorKind::InvalidField,
            Self::Shape { .. } => ErrorKind::Shape,
        }
    }

    /// Index of the offending record, if the failure is tied to one.
    pub fn index(&self) -> Option<usize> {
        match self {
            Self::MissingField { index, .. } | Self::InvalidField { index, .. } => Some(*index),
            Self::Parse(_) | Self::Shape { .. } => None,
        }
    }

    /// Lowercase hex of the offending value's UTF-8 bytes.
    ///
    /// Only [`ValidationError::InvalidField`] carries a value; the dump makes
    /// invisible or non-ASCII characters visible in the diagnostic.
    pub fn byte_dump(&self) -> Option<String> {
        match self {
            Self::InvalidField { value, .. } => Some(byte_dump(value)),
            _ => None,
        }
    }

    pub(crate) fn shape(
        path: impl Into<String>,
        expected: &'static str,
        found: &serde_json::Value,
    ) -> Self {
        Self::Shape {
            path: path.into(),
            expected,
            found: crate::document::json_type_name(found),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_missing_field_message() {
        let err = ValidationError::MissingField {
            record: RecordKind::Transaction,
            index: 4,
            field: "spent_outputs",
        };
        assert_eq!(err.to_string(), "Transaction 4 missing spent_outputs");
        assert_eq!(err.kind(), ErrorKind::MissingField);
        assert_eq!(err.index(), Some(4));
        assert!(err.byte_dump().is_none());
    }

    #[test]
    fn test_invalid_field_carries_dump() {
        let err = ValidationError::InvalidField {
            record: RecordKind::Output,
            index: 0,
            field: "tx_pub_key",
            value: "xyz".into(),
            len: 3,
        };
        assert_eq!(err.to_string(), "Output 0 has invalid tx_pub_key: 'xyz' len=3");
        assert_eq!(err.byte_dump().as_deref(), Some("78797a"));
    }

    #[test]
    fn test_shape_names_found_type() {
        let err = ValidationError::shape("outputs", "an array", &json!({"a": 1}));
        assert_eq!(err.to_string(), "outputs must be an array, found object");
        assert_eq!(err.kind(), ErrorKind::Shape);
        assert_eq!(err.index(), None);
    }

    #[test]
    fn test_parse_error_from_serde() {
        let err: ValidationError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert_eq!(err.kind(), ErrorKind::Parse);
        assert!(err.to_string().contains("EOF"));
    }
}
