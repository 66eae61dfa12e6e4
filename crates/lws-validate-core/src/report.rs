//! The result of a run and its console rendering.

use std::fmt;

use crate::document::RecordKind;
use crate::error::{ErrorKind, ValidationError};

/// Final line printed when every record passes.
pub const SUCCESS_LINE: &str = "Validation Successful";

/// Progress emitted while walking records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    OutputsHeader { count: usize },
    OutputValid { index: usize, tx_pub_key: String },
    TransactionsHeader { count: usize },
    TransactionChecked { index: usize, spent_outputs: usize },
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutputsHeader { count } => write!(f, "Checking {count} outputs..."),
            Self::OutputValid { index, tx_pub_key } => {
                write!(f, "Output {index} tx_pub_key valid: {tx_pub_key}")
            }
            Self::TransactionsHeader { count } => write!(f, "Checking {count} transactions..."),
            Self::TransactionChecked {
                index,
                spent_outputs,
            } => write!(f, "Transaction {index} has spent_outputs ({spent_outputs} items)"),
        }
    }
}

/// What a successful run checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// `None` when the document had neither known key.
    pub kind: Option<RecordKind>,
    pub checked: usize,
}

/// Everything a run produced: progress so far, then success or the failure.
#[derive(Debug)]
pub struct Report {
    pub events: Vec<Event>,
    pub outcome: Result<Summary, ValidationError>,
}

impl Report {
    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }

    /// Process exit status for this report: 0 on success, 1 otherwise.
    pub fn exit_code(&self) -> u8 {
        if self.is_success() {
            0
        } else {
            1
        }
    }

    /// Console lines in output order.
    pub fn lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = self.events.iter().map(ToString::to_string).collect();
        match &self.outcome {
            Ok(_) => lines.push(SUCCESS_LINE.to_owned()),
            Err(err) => lines.extend(diagnostic_lines(err)),
        }
        lines
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Render a failure the way the console shows it.
///
/// Record-level failures are prefixed `Error:`; document-level ones
/// (parse and shape) are prefixed `Validation Error:`.
pub fn diagnostic_lines(err: &ValidationError) -> Vec<String> {
    match err.kind() {
        ErrorKind::Parse | ErrorKind::Shape => vec![format!("Validation Error: {err}")],
        ErrorKind::MissingField => vec![format!("Error: {err}")],
        ErrorKind::InvalidField => {
            let mut lines = vec![format!("Error: {err}")];
            if let Some(dump) = err.byte_dump() {
                lines.push(format!("Hex repr: {dump}"));
            }
            lines
        }
    }
}
