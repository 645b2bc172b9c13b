//! Unit tests for the workflow module.
//!
//! Tests are organised by domain concept, covering happy paths, error
//! cases, and edge cases for all public APIs.

mod support;
