//! # Fyyur Common Library
//!
//! Shared code for the Fyyur booking directory:
//! - Error type
//! - Bootstrap configuration loading
//! - Database initialization, models and repositories
//! - Show scheduling helpers (past/upcoming classification)
//! - Display date formatting

pub mod config;
pub mod datefmt;
pub mod db;
pub mod error;
pub mod schedule;

pub use datefmt::{format_datetime, DateFormat};
pub use error::{Error, Result};
