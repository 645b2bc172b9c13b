//! Unit tests for the reporting module.
//!
//! Each aggregation function gets its own test file; shared task builders
//! live in [`fixtures`].
