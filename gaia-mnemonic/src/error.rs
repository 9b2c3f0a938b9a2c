//! # Error Module.
//!
//! This module features the `GaiaError` enum for error handling throughout the project.

use thiserror::Error;

/// The crate-wide error variants.
#[derive(Debug, Error)]
pub enum GaiaError {
	/// Configuration error
	#[error("ConfigurationError: {0}")]
	ConfigurationError(String),

	/// File read/write error
	#[error("FileIOError: {0}")]
	FileIOError(String),

	/// Mnemonic generation error, never retried
	#[error("GenerationFailure: {0}")]
	GenerationFailure(String),

	/// Invalid argument error
	#[error("InvalidArgument: {0}")]
	InvalidArgument(String),

	/// Output stream error
	#[error("IOFailure: {0}")]
	IOFailure(std::io::Error),

	/// Parsing error
	#[error("ParsingError: {0}")]
	ParsingError(String),
}
