//! Shared configuration, errors, and money helpers for Siklus.
//!
//! This crate provides common pieces used across all other crates:
//! - Money helpers with currency precision
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
