//! Deterministic, pure logic shared by the guide.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! records and return deterministic outputs suitable for tests.

pub mod display;
pub mod filter;
pub mod invariants;
pub mod payment;
pub mod projection;
pub mod ranking;
pub mod sort_state;
pub mod types;
