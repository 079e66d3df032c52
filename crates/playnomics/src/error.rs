// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for the Playnomics SDK.

use playnomics_common_config::EnvError;
use playnomics_core::CoreError;
use thiserror::Error;

/// Result type alias for SDK operations.
pub type Result<T> = std::result::Result<T, PlaynomicsError>;

/// Failure to GET a signed URL.
#[derive(Debug, Error)]
pub enum TransportError {
	/// The request could not be sent or the body could not be read.
	#[error("HTTP request failed: {0}")]
	Request(#[from] reqwest::Error),

	/// The API answered with a non-success status.
	#[error("server error (status {status}): {body}")]
	Status {
		/// HTTP status code.
		status: u16,
		/// Response body, possibly empty.
		body: String,
	},

	/// The HTTP client could not be constructed.
	#[error("failed to build HTTP client: {0}")]
	ClientBuild(#[source] reqwest::Error),
}

/// Errors that can occur in the Playnomics SDK.
#[derive(Debug, Error)]
pub enum PlaynomicsError {
	/// An event was called without one of its required fields.
	#[error("invalid argument: {0}")]
	InvalidArgument(#[from] CoreError),

	/// Missing or blank application id.
	#[error("application id is required")]
	InvalidApplicationId,

	/// Missing or empty shared secret.
	#[error("shared secret is required")]
	MissingSecret,

	/// The proxy URL could not be parsed.
	#[error("invalid proxy `{proxy}`: {source}")]
	InvalidProxy {
		proxy: String,
		#[source]
		source: reqwest::Error,
	},

	/// A signed request could not be delivered.
	#[error("request to {url} failed: {source}")]
	Transport {
		url: String,
		#[source]
		source: TransportError,
	},

	/// Configuration could not be read from the environment.
	#[error("configuration error: {0}")]
	Config(#[from] EnvError),
}
