//! Error types for cfncovlib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while regenerating coverage tables
#[derive(Error, Debug)]
pub enum CfnCovError {
    /// The coverage catalog is not well-formed JSON or has the wrong shape
    #[error("invalid JSON in coverage catalog{}: {source}", display_path(.path))]
    CatalogParse {
        path: Option<PathBuf>,
        source: serde_json::Error,
    },

    /// A required heading pattern has no match in the document
    #[error("could not find section with heading pattern: {pattern:?}")]
    SectionNotFound { pattern: String },

    /// A boundary pattern failed to compile
    #[error("invalid section pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        source: regex::Error,
    },

    /// Failed to read a file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to write the updated document
    #[error("failed to write file '{path}': {source}")]
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },
}

fn display_path(path: &Option<PathBuf>) -> String {
    match path {
        Some(p) => format!(" '{}'", p.display()),
        None => String::new(),
    }
}
