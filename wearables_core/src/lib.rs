#![forbid(unsafe_code)]

//! Core library for synthesizing wearable-reading CSV datasets.
//!
//! This crate provides:
//! - Domain types (reading rows, validated generation parameters)
//! - A seeded, lazy row generator
//! - Buffered CSV output with progress reporting
//! - Configuration and logging setup

pub mod types;
pub mod error;
pub mod config;
pub mod logging;
pub mod generator;
pub mod csv_writer;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use config::{Config, GenerateConfig};
pub use generator::RowGenerator;
pub use csv_writer::{format_thousands, write_dataset, write_rows, NullProgress, ProgressSink};
