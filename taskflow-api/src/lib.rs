//! # TaskFlow API Server Library
//!
//! This library provides the core functionality for the TaskFlow API server:
//! a REST/JSON layer over the shared storage/query layer, plus the AI
//! suggestion adapter.
//!
//! ## Modules
//!
//! - `app`: Application state and router builder
//! - `config`: Configuration management
//! - `error`: Error handling and HTTP response mapping
//! - `routes`: API route handlers
//! - `ai`: AI suggestion adapter (trait, OpenAI implementation, mock)

pub mod ai;
pub mod app;
pub mod config;
pub mod error;
pub mod routes;
