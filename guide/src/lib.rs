//! Ranking and filtering for an affiliate casino comparison page.
//!
//! The crate keeps a strict separation:
//!
//! - **[`core`]**: Pure, deterministic logic (projections, ranking, filter
//!   predicate, sort/filter selection state). No I/O, fully testable in
//!   isolation.
//! - **[`io`]**: Side-effecting operations (catalog and config files, page
//!   rendering).
//!
//! Orchestration modules ([`view`], [`validate`]) combine the two for the
//! `guide` CLI and the `guide-ui` server.

pub mod catalog;
pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
pub mod validate;
pub mod view;
