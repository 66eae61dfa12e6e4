//! Validation options.
//!
//! The CLI always runs with [`ValidateOptions::default`]; the struct exists so
//! library callers and tests can exercise the predicate at other widths.

/// Hex characters in an encoded 32-byte transaction public key.
pub const TX_PUB_KEY_HEX_LEN: usize = 64;

/// Options controlling a validation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidateOptions {
    /// Exact number of characters every `tx_pub_key` must have.
    pub tx_pub_key_len: usize,
}

impl Default for ValidateOptions {
    fn default() -> Self {
        Self {
            tx_pub_key_len: TX_PUB_KEY_HEX_LEN,
        }
    }
}
