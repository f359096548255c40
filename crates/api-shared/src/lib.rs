//! # API Shared
//!
//! Shared definitions for the notes APIs.
//!
//! Contains:
//! - JSON request/response types (`dto` module)
//! - Shared services like `HealthService`
//!
//! Used by `notes-core`, `api-rest` and the CLI so every surface speaks the same shapes.

pub mod dto;
pub mod health;

pub use dto::*;
pub use health::HealthService;
