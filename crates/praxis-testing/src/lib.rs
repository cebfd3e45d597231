//! Testing infrastructure for praxis integration tests.
//!
//! This crate provides utilities for writing robust integration tests:
//! - `TestWorld`: Fluent interface for an isolated data directory plus CLI runner
//! - `fixtures`: Raw items in the inconsistent shapes remotes actually send
//! - `flaky`: A resource client with failure injection, call recording and latency
//! - `assertions`: Custom assertions for view states and CLI JSON output

pub mod assertions;
pub mod fixtures;
pub mod flaky;
pub mod world;

pub use flaky::{Call, FlakyClient, Op};
pub use world::{CliResult, TestWorld};
