//! Per-shape record validators.
//!
//! Each validator walks its records in order, pushes one [`Event`] per record
//! that passes, and returns at the first failure.
//!
//! [`Event`]: crate::report::Event

pub mod outputs;
pub mod transactions;

pub use outputs::validate_outputs;
pub use transactions::validate_transactions;
