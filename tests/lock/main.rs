//! Lock Integration Tests
//!
//! Mutual exclusion among many lock instances sharing one store.

#[path = "../common/mod.rs"]
mod common;

mod lifecycle;
