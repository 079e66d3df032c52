// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Delivery of signed URLs.

use std::sync::Arc;

use playnomics_common_http::{new_client, HttpOptions};
use reqwest::blocking::Client;
use tracing::debug;

use crate::error::TransportError;

/// Performs a GET on an already signed URL and returns the response body.
///
/// Implementations must not retry and must not interpret the body.
pub trait Transport: Send + Sync {
	fn get(&self, url: &str) -> Result<String, TransportError>;
}

impl<T> Transport for Arc<T>
where
	T: Transport + ?Sized,
{
	fn get(&self, url: &str) -> Result<String, TransportError> {
		(**self).get(url)
	}
}

/// Blocking `reqwest` transport. Honours the configured proxy and timeout.
#[derive(Debug, Clone)]
pub struct HttpTransport {
	client: Client,
}

impl HttpTransport {
	pub fn new(options: &HttpOptions) -> Result<Self, TransportError> {
		let client = new_client(options).map_err(TransportError::ClientBuild)?;
		Ok(Self { client })
	}

	/// Wraps a preconfigured client.
	pub fn from_client(client: Client) -> Self {
		Self { client }
	}
}

impl Transport for HttpTransport {
	fn get(&self, url: &str) -> Result<String, TransportError> {
		let response = self.client.get(url).send()?;
		let status = response.status();
		let body = response.text()?;

		if status.is_success() {
			debug!(status = status.as_u16(), bytes = body.len(), "Request accepted");
			Ok(body)
		} else {
			Err(TransportError::Status {
				status: status.as_u16(),
				body,
			})
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::sync::Mutex;

	struct Echo(Mutex<Vec<String>>);

	impl Transport for Echo {
		fn get(&self, url: &str) -> Result<String, TransportError> {
			self.0.lock().unwrap().push(url.to_string());
			Ok(url.to_string())
		}
	}

	#[test]
	fn arc_forwards_to_inner() {
		let inner = Arc::new(Echo(Mutex::new(Vec::new())));
		let shared: Arc<dyn Transport> = Arc::new(inner.clone());

		assert_eq!(shared.get("http://x/1").unwrap(), "http://x/1");
		assert_eq!(inner.0.lock().unwrap().as_slice(), ["http://x/1"]);
	}

	#[test]
	fn http_transport_builds_from_defaults() {
		assert!(HttpTransport::new(&HttpOptions::default()).is_ok());
	}

	#[test]
	fn http_transport_rejects_bad_proxy() {
		let options = HttpOptions {
			proxy: Some("http://bad host:1088".to_string()),
			..HttpOptions::default()
		};
		assert!(matches!(
			HttpTransport::new(&options),
			Err(TransportError::ClientBuild(_))
		));
	}
}
