//! chip-tool integration
//!
//! The Matter commissioning protocol itself (PASE/CASE, discovery,
//! certificate exchange) lives entirely in the external `chip-tool`
//! binary. This crate launches it, captures its text output, and turns
//! failure text into operator-facing messages.

pub mod classify;
pub mod invoker;

pub use classify::{classify_pair_failure, classify_unpair_failure};
pub use invoker::{CommissionOutcome, Commissioner};
