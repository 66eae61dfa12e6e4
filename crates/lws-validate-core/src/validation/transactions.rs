//! Transaction validation: every record must carry `spent_outputs`.

use serde_json::Value;

use crate::document::TransactionRecord;
use crate::error::ValidationError;
use crate::report::Event;

/// Validate `records` as transactions, returning how many passed.
pub fn validate_transactions(
    records: &[Value],
    events: &mut Vec<Event>,
) -> Result<usize, ValidationError> {
    events.push(Event::TransactionsHeader {
        count: records.len(),
    });

    for (index, value) in records.iter().enumerate() {
        let record = TransactionRecord::decode(index, value)?;
        tracing::debug!(index, spent_outputs = record.spent_output_count, "transaction ok");
        events.push(Event::TransactionChecked {
            index,
            spent_outputs: record.spent_output_count,
        });
    }

    Ok(records.len())
}
