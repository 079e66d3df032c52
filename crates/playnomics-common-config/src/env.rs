// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Environment variable helpers.
//!
//! Secrets follow the `VAR` / `VAR_FILE` convention used by Docker and
//! Kubernetes secret mounts: when `VAR_FILE` is set the secret is read from
//! that path, otherwise `VAR` is used directly.

use std::path::PathBuf;
use std::{env, fs};

use thiserror::Error;

use crate::secret::Secret;

/// Errors that can occur when loading values from environment variables.
#[derive(Debug, Error)]
pub enum EnvError {
	/// Failed to read the secret file.
	#[error("failed to read secret file at {path}: {source}")]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	/// The secret file path was empty.
	#[error("secret file path in {var} is empty")]
	EmptyPath { var: String },

	/// A boolean variable held something other than a recognised flag.
	#[error("{var} must be one of 1/0, true/false, yes/no, on/off (got {value:?})")]
	InvalidFlag { var: String, value: String },
}

/// Load a secret using the `VAR` / `VAR_FILE` convention.
///
/// 1. If `{var}_FILE` is set, read the secret from that path. A single
///    trailing newline is stripped.
/// 2. Otherwise, if `{var}` is set, use its value.
/// 3. Otherwise return `Ok(None)`.
///
/// ```no_run
/// use playnomics_common_config::load_secret_env;
///
/// if let Some(secret) = load_secret_env("PLAYNOMICS_APP_SECRET")? {
///     println!("secret configured: {secret}"); // prints "[REDACTED]"
/// }
/// # Ok::<(), playnomics_common_config::EnvError>(())
/// ```
pub fn load_secret_env(var: &str) -> Result<Option<Secret<String>>, EnvError> {
	let file_var = format!("{var}_FILE");

	if let Ok(path_str) = env::var(&file_var) {
		if path_str.is_empty() {
			return Err(EnvError::EmptyPath { var: file_var });
		}

		let path = PathBuf::from(&path_str);
		let content = fs::read_to_string(&path).map_err(|e| EnvError::Io {
			path: path.clone(),
			source: e,
		})?;

		let secret = content.strip_suffix('\n').unwrap_or(&content).to_string();
		return Ok(Some(Secret::new(secret)));
	}

	if let Ok(value) = env::var(var) {
		return Ok(Some(Secret::new(value)));
	}

	Ok(None)
}

/// Load a plain, non-secret variable. Unset and empty both yield `None`.
pub fn load_env(var: &str) -> Option<String> {
	env::var(var).ok().filter(|v| !v.trim().is_empty())
}

/// Load a boolean flag. Unset or empty yields `Ok(None)`.
pub fn load_flag_env(var: &str) -> Result<Option<bool>, EnvError> {
	let Some(value) = load_env(var) else {
		return Ok(None);
	};

	match value.trim().to_ascii_lowercase().as_str() {
		"1" | "true" | "yes" | "on" => Ok(Some(true)),
		"0" | "false" | "no" | "off" => Ok(Some(false)),
		_ => Err(EnvError::InvalidFlag {
			var: var.to_string(),
			value,
		}),
	}
}
