//! Typed view of an input document.
//!
//! Parsing produces a generic [`Value`]; [`Document::from_value`] then decides
//! which shape the document has. Individual records are decoded lazily, one at
//! a time, so that validation can stop at the first bad record.

use std::fmt;

use serde_json::Value;

use crate::error::ValidationError;

/// Top-level key holding a list of outputs.
pub const OUTPUTS_KEY: &str = "outputs";
/// Top-level key holding a list of transactions.
pub const TRANSACTIONS_KEY: &str = "transactions";
/// Public-key field required on every output.
pub const TX_PUB_KEY_FIELD: &str = "tx_pub_key";
/// Collection field required on every transaction.
pub const SPENT_OUTPUTS_FIELD: &str = "spent_outputs";

/// The kind of record being validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Output,
    Transaction,
}

impl RecordKind {
    /// Top-level key the records of this kind live under.
    pub fn collection_key(self) -> &'static str {
        match self {
            Self::Output => OUTPUTS_KEY,
            Self::Transaction => TRANSACTIONS_KEY,
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Output => f.write_str("Output"),
            Self::Transaction => f.write_str("Transaction"),
        }
    }
}

/// A parsed document, classified by which known key it carries.
#[derive(Debug, Clone, PartialEq)]
pub enum Document {
    /// `outputs` was present. Takes precedence over `transactions`.
    Outputs(Vec<Value>),
    /// `transactions` was present and `outputs` was not.
    Transactions(Vec<Value>),
    /// Neither key was present; there is nothing to check.
    Unrecognized,
}

impl Document {
    /// Parse raw bytes and classify the result.
    pub fn parse(input: &[u8]) -> Result<Self, ValidationError> {
        let value: Value = serde_json::from_slice(input)?;
        Self::from_value(value)
    }

    /// Classify an already-parsed value.
    ///
    /// When both `outputs` and `transactions` are present, only `outputs` is
    /// kept. An array or string that does not mention either key has nothing
    /// to check; one that does cannot be indexed by it and is a shape error.
    pub fn from_value(value: Value) -> Result<Self, ValidationError> {
        let mut map = match value {
            Value::Object(map) => map,
            Value::Array(_) | Value::String(_) => {
                if mentions(&value, OUTPUTS_KEY) || mentions(&value, TRANSACTIONS_KEY) {
                    return Err(ValidationError::shape("document", "a JSON object", &value));
                }
                tracing::debug!(found = json_type_name(&value), "document is not an object");
                return Ok(Self::Unrecognized);
            }
            other => return Err(ValidationError::shape("document", "a JSON object", &other)),
        };

        if let Some(outputs) = map.remove(OUTPUTS_KEY) {
            if map.contains_key(TRANSACTIONS_KEY) {
                tracing::warn!("document has both outputs and transactions; ignoring transactions");
            }
            return into_records(OUTPUTS_KEY, outputs).map(Self::Outputs);
        }

        if let Some(transactions) = map.remove(TRANSACTIONS_KEY) {
            return into_records(TRANSACTIONS_KEY, transactions).map(Self::Transactions);
        }

        Ok(Self::Unrecognized)
    }

    /// The record kind this document holds, if any.
    pub fn record_kind(&self) -> Option<RecordKind> {
        match self {
            Self::Outputs(_) => Some(RecordKind::Output),
            Self::Transactions(_) => Some(RecordKind::Transaction),
            Self::Unrecognized => None,
        }
    }
}

/// Records under `key`. An empty string or object holds no records.
fn into_records(key: &str, value: Value) -> Result<Vec<Value>, ValidationError> {
    match value {
        Value::Array(records) => Ok(records),
        Value::String(s) if s.is_empty() => Ok(Vec::new()),
        Value::Object(o) if o.is_empty() => Ok(Vec::new()),
        other => Err(ValidationError::shape(key, "an array", &other)),
    }
}

/// Membership test on a non-object container: substring for strings,
/// string element for arrays.
fn mentions(value: &Value, key: &str) -> bool {
    match value {
        Value::String(s) => s.contains(key),
        Value::Array(items) => items.iter().any(|item| item.as_str() == Some(key)),
        _ => false,
    }
}

/// An output whose `tx_pub_key` is present and a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputRecord<'a> {
    pub index: usize,
    pub tx_pub_key: &'a str,
}

impl<'a> OutputRecord<'a> {
    /// Decode the output at `index`.
    ///
    /// A falsy `tx_pub_key` counts as missing. A truthy non-string is a shape
    /// error. The string itself is not format-checked here.
    pub fn decode(index: usize, value: &'a Value) -> Result<Self, ValidationError> {
        let record = as_record(RecordKind::Output, index, value)?;
        let tx_pub_key = match record.get(TX_PUB_KEY_FIELD) {
            None => None,
            Some(field) if is_falsy(field) => None,
            Some(field) => Some(field),
        }
        .ok_or(ValidationError::MissingField {
            record: RecordKind::Output,
            index,
            field: TX_PUB_KEY_FIELD,
        })?;

        match tx_pub_key {
            Value::String(s) => Ok(Self {
                index,
                tx_pub_key: s,
            }),
            other => Err(ValidationError::shape(
                format!("{OUTPUTS_KEY}[{index}].{TX_PUB_KEY_FIELD}"),
                "a string",
                other,
            )),
        }
    }
}

/// A transaction with a countable `spent_outputs` collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransactionRecord {
    pub index: usize,
    pub spent_output_count: usize,
}

impl TransactionRecord {
    /// Decode the transaction at `index`.
    ///
    /// Only presence of `spent_outputs` is required; its contents are not
    /// inspected beyond taking a length. A string or array record that does
    /// not mention `spent_outputs` is reported as missing it.
    pub fn decode(index: usize, value: &Value) -> Result<Self, ValidationError> {
        let missing = ValidationError::MissingField {
            record: RecordKind::Transaction,
            index,
            field: SPENT_OUTPUTS_FIELD,
        };
        if matches!(value, Value::String(_) | Value::Array(_))
            && !mentions(value, SPENT_OUTPUTS_FIELD)
        {
            return Err(missing);
        }

        let record = as_record(RecordKind::Transaction, index, value)?;
        let spent = record.get(SPENT_OUTPUTS_FIELD).ok_or(missing)?;

        let spent_output_count = collection_len(spent).ok_or_else(|| {
            ValidationError::shape(
                format!("{TRANSACTIONS_KEY}[{index}].{SPENT_OUTPUTS_FIELD}"),
                "a collection",
                spent,
            )
        })?;

        Ok(Self {
            index,
            spent_output_count,
        })
    }
}

fn as_record<'a>(
    kind: RecordKind,
    index: usize,
    value: &'a Value,
) -> Result<&'a serde_json::Map<String, Value>, ValidationError> {
    value.as_object().ok_or_else(|| {
        ValidationError::shape(
            format!("{}[{index}]", kind.collection_key()),
            "an object",
            value,
        )
    })
}

/// Values treated as absent: `null`, `false`, zero, and empty strings,
/// arrays and objects.
pub fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

/// Element count of a collection-like value. Strings count characters.
pub fn collection_len(value: &Value) -> Option<usize> {
    match value {
        Value::Array(a) => Some(a.len()),
        Value::Object(o) => Some(o.len()),
        Value::String(s) => Some(s.chars().count()),
        Value::Null | Value::Bool(_) | Value::Number(_) => None,
    }
}

/// JSON type name used in diagnostics.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
