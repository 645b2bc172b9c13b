//! Tablero: task workflow and reporting engine.
//!
//! This crate provides the domain core of a team task board: task entities
//! with a four-status workflow, deadline evaluation, list filtering, and the
//! aggregation engine that computes dashboard metrics, trend series, and
//! per-assignee leaderboards from a task snapshot.
//!
//! # Architecture
//!
//! Tablero follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports
//!
//! # Modules
//!
//! - [`workflow`]: Task aggregate, status transitions, deadline evaluation,
//!   filtering, and lifecycle orchestration
//! - [`reporting`]: Aggregation functions over task snapshots and the
//!   dashboard service

pub mod reporting;
pub mod workflow;
