//! # TaskFlow Shared Library
//!
//! Domain models and the storage/query layer shared between the API server
//! and its tests.
//!
//! ## Modules
//!
//! - `models`: Domain entities (users, projects, tasks, subtasks, time logs,
//!   project members) and their insert shapes
//! - `storage`: The `Storage` trait, the in-memory `MemStorage` backend, and
//!   the derived-analytics operations

pub mod models;
pub mod storage;
