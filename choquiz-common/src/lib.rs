//! Shared foundation for the choquiz service
//!
//! Holds the pieces both the server binary and its tests lean on:
//! the common error type, configuration resolution, and the SQLite-backed
//! quiz pool store.

pub mod config;
pub mod db;
pub mod error;

pub use error::{Error, Result};
