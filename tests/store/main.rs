//! Store Integration Tests
//!
//! Conditional-write semantics seen through every backend and client route.

#[path = "../common/mod.rs"]
mod common;

mod concurrency;
mod decision_table;
