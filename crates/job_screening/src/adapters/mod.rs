// Rust guideline compliant 2026-10-12

//! Adapters (secondary ports) shared by the screening binaries.
//!
//! Each sub-module implements one or more hexagonal port traits defined in the
//! `domain` crate. The SQLite adapter is loaded by its own binary only.

pub mod in_memory_storage;
pub mod job_queue;
pub mod log_alarm;
