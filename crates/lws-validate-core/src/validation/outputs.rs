//! Output validation: every `tx_pub_key` must be a fixed-width hex string.

use serde_json::Value;

use crate::config::ValidateOptions;
use crate::document::{OutputRecord, RecordKind, TX_PUB_KEY_FIELD};
use crate::error::ValidationError;
use crate::pubkey::is_valid_hex;
use crate::report::Event;

/// Validate `records` as outputs, returning how many passed.
pub fn validate_outputs(
    records: &[Value],
    options: &ValidateOptions,
    events: &mut Vec<Event>,
) -> Result<usize, ValidationError> {
    events.push(Event::OutputsHeader {
        count: records.len(),
    });

    for (index, value) in records.iter().enumerate() {
        let record = OutputRecord::decode(index, value)?;
        check_tx_pub_key(&record, options)?;
        tracing::debug!(index, tx_pub_key = record.tx_pub_key, "output ok");
        events.push(Event::OutputValid {
            index,
            tx_pub_key: record.tx_pub_key.to_owned(),
        });
    }

    Ok(records.len())
}

fn check_tx_pub_key(
    record: &OutputRecord<'_>,
    options: &ValidateOptions,
) -> Result<(), ValidationError> {
    if is_valid_hex(record.tx_pub_key, options.tx_pub_key_len) {
        return Ok(());
    }
    Err(ValidationError::InvalidField {
        record: RecordKind::Output,
        index: record.index,
        field: TX_PUB_KEY_FIELD,
        value: record.tx_pub_key.to_owned(),
        len: record.tx_pub_key.chars().count(),
    })
}
