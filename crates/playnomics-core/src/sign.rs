// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Canonical query strings and request signatures.
//!
//! The API recomputes the signature from the URL it receives, so the steps
//! here are fixed:
//!
//! 1. Drop parameters whose value is the empty string.
//! 2. Sort by key in byte order.
//! 3. Encode `key=value` pairs, join with `&`, prefix with `?`.
//! 4. HMAC-SHA256 over `path + query`, hex encoded.
//! 5. Append `sig=<hex>` with `&`, or `?` when there were no parameters.
//! 6. Prefix with the environment's base URL.

use std::fmt;

use playnomics_common_signing::{compute_hmac_sha256, encode_query_component, verify_hmac_sha256};
use serde::{Deserialize, Serialize};

use crate::params::ParameterSet;

/// Signature parameter name. Always the last query parameter.
pub const SIGNATURE_KEY: &str = "sig";

/// Which API host requests go to. Fixed when a client is constructed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
	#[default]
	Production,
	/// Test mode. Events are accepted but kept out of production reports.
	Sandbox,
}

impl Environment {
	pub fn base_url(&self) -> &'static str {
		match self {
			Environment::Production => "http://api.a.playnomics.net",
			Environment::Sandbox => "http://api.b.playnomics.net",
		}
	}

	pub fn from_test_mode(test_mode: bool) -> Self {
		if test_mode {
			Environment::Sandbox
		} else {
			Environment::Production
		}
	}

	pub fn is_test_mode(&self) -> bool {
		matches!(self, Environment::Sandbox)
	}
}

impl fmt::Display for Environment {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Environment::Production => f.write_str("production"),
			Environment::Sandbox => f.write_str("sandbox"),
		}
	}
}

/// A fully signed request, ready to be sent with GET.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignedRequest {
	/// Absolute URL including the trailing `sig` parameter.
	pub url: String,
	/// Endpoint path, e.g. `/v1/milestone`.
	pub path: String,
	/// Canonical query the signature covers, with its leading `?`; empty when
	/// there were no parameters.
	pub query: String,
	/// Lowercase hex HMAC-SHA256 digest.
	pub signature: String,
}

/// Build the canonical query string for a parameter set.
///
/// Returns `""` when no non-empty parameters remain, otherwise `?k=v&k=v`.
pub fn canonical_query(params: &ParameterSet) -> String {
	let pairs: Vec<String> = params
		.iter()
		.filter(|(key, value)| !key.is_empty() && !value.is_empty())
		.map(|(key, value)| {
			format!(
				"{}={}",
				encode_query_component(key),
				encode_query_component(&value.to_string())
			)
		})
		.collect();

	if pairs.is_empty() {
		String::new()
	} else {
		format!("?{}", pairs.join("&"))
	}
}

/// Sign `path` plus `params` with the application's shared secret.
pub fn sign_request(
	environment: Environment,
	path: &str,
	params: &ParameterSet,
	secret: &[u8],
) -> SignedRequest {
	let query = canonical_query(params);
	let signed_part = format!("{path}{query}");
	let signature = compute_hmac_sha256(secret, signed_part.as_bytes());
	let separator = if query.is_empty() { '?' } else { '&' };

	let url = format!(
		"{}{signed_part}{separator}{SIGNATURE_KEY}={}",
		environment.base_url(),
		encode_query_component(&signature)
	);

	SignedRequest {
		url,
		path: path.to_string(),
		query,
		signature,
	}
}

/// Check the trailing `sig` of a URL produced by [`sign_request`], the way
/// the API does on receipt. Accepts an absolute URL or a bare path+query.
pub fn verify_signed_url(url: &str, secret: &[u8]) -> bool {
	let path_and_query = match url.find("://") {
		Some(scheme_end) => {
			let after_scheme = &url[scheme_end + 3..];
			match after_scheme.find('/') {
				Some(path_start) => &after_scheme[path_start..],
				None => return false,
			}
		}
		None => url,
	};

	let marker = format!("{SIGNATURE_KEY}=");
	let Some(sig_start) = path_and_query.rfind(&marker) else {
		return false;
	};
	if sig_start == 0 {
		return false;
	}

	let separator = path_and_query.as_bytes()[sig_start - 1];
	if separator != b'&' && separator != b'?' {
		return false;
	}

	let signed_part = &path_and_query[..sig_start - 1];
	let signature = &path_and_query[sig_start + marker.len()..];
	verify_hmac_sha256(secret, signed_part.as_bytes(), signature)
}
