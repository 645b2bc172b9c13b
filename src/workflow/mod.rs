//! Task workflow management for Tablero.
//!
//! This module implements the task side of the board: creating validated
//! task records, moving them through the four-status workflow
//! (`pendiente → en_proceso → en_revision → cerrada`, with wrap-around
//! reopen), evaluating deadlines, and filtering task lists. The module
//! follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
