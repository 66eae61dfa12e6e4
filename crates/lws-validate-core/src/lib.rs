//! # lws-validate-core — Light-Wallet-Server Document Checks
//!
//! Shallow structural validation of JSON documents exchanged with a light
//! wallet server. A document carries either a list of `outputs` or a list of
//! `transactions`:
//!
//! - **Outputs:** every record needs a `tx_pub_key` that is exactly 64 hex
//!   characters.
//! - **Transactions:** every record needs a `spent_outputs` collection; only
//!   its size is reported.
//!
//! `outputs` wins when both keys are present. A document with neither key
//! passes without checking anything.
//!
//! ## Design
//!
//! [`validate_bytes`] is a pure function from input to [`Report`]: it never
//! prints and never exits. Records are checked in order and the run stops at
//! the first failure, which becomes the report's `outcome`. Callers render
//! the report with [`Report::lines`] and map it to a status with
//! [`Report::exit_code`].

pub mod config;
pub mod document;
pub mod error;
pub mod pubkey;
pub mod report;
pub mod validation;

pub use config::{ValidateOptions, TX_PUB_KEY_HEX_LEN};
pub use document::{Document, OutputRecord, RecordKind, TransactionRecord};
pub use error::{ErrorKind, ValidationError};
pub use pubkey::{byte_dump, is_valid_hex};
pub use report::{Event, Report, Summary, SUCCESS_LINE};

/// Validate a document with the default options.
pub fn validate_bytes(input: &[u8]) -> Report {
    validate_bytes_with(input, &ValidateOptions::default())
}

/// Validate a document held in a string with the default options.
pub fn validate_str(input: &str) -> Report {
    validate_bytes(input.as_bytes())
}

/// Validate a document with explicit options.
pub fn validate_bytes_with(input: &[u8], options: &ValidateOptions) -> Report {
    let mut events = Vec::new();
    let outcome = run(input, options, &mut events);
    match &outcome {
        Ok(summary) => tracing::info!(checked = summary.checked, "validation succeeded"),
        Err(err) => tracing::info!(kind = ?err.kind(), index = ?err.index(), "validation failed"),
    }
    Report { events, outcome }
}

fn run(
    input: &[u8],
    options: &ValidateOptions,
    events: &mut Vec<Event>,
) -> Result<Summary, ValidationError> {
    let document = Document::parse(input)?;
    let kind = document.record_kind();

    let checked = match document {
        Document::Outputs(records) => validation::validate_outputs(&records, options, events)?,
        Document::Transactions(records) => validation::validate_transactions(&records, events)?,
        Document::Unrecognized => {
            tracing::debug!("no outputs or transactions key; nothing to check");
            0
        }
    };

    Ok(Summary { kind, checked })
}
