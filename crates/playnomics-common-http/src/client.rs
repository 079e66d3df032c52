// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Blocking HTTP client with the standard Playnomics User-Agent header.

use reqwest::blocking::{Client, ClientBuilder};
use reqwest::Proxy;
use std::time::Duration;
use tracing::debug;

/// Request timeout used when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Transport options supplied at client construction.
#[derive(Debug, Clone)]
pub struct HttpOptions {
	/// Forward proxy every request is sent through, e.g. `http://localhost:1088`.
	pub proxy: Option<String>,
	/// Total timeout for a single request.
	pub timeout: Duration,
}

impl Default for HttpOptions {
	fn default() -> Self {
		Self {
			proxy: None,
			timeout: DEFAULT_TIMEOUT,
		}
	}
}

/// Creates a blocking client builder with the standard User-Agent header.
///
/// Use this when you need to customize the client beyond [`HttpOptions`].
pub fn builder() -> ClientBuilder {
	Client::builder().user_agent(user_agent())
}

/// Creates a blocking client from the given options.
///
/// Fails if the proxy URL cannot be parsed or the TLS backend cannot be
/// initialised.
pub fn new_client(options: &HttpOptions) -> Result<Client, reqwest::Error> {
	let mut builder = builder().timeout(options.timeout);

	if let Some(proxy) = &options.proxy {
		debug!(proxy = %proxy, "Routing requests through forward proxy");
		builder = builder.proxy(Proxy::all(proxy.as_str())?);
	}

	builder.build()
}

/// Returns the standard User-Agent string.
///
/// Format: `playnomics-rust/{version}`
pub fn user_agent() -> String {
	format!("playnomics-rust/{}", env!("CARGO_PKG_VERSION"))
}
