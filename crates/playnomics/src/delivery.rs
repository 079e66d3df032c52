// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Outcome of a tracking call.

use playnomics_core::SignedRequest;

use crate::error::{PlaynomicsError, Result, TransportError};

/// What happened to a signed request.
///
/// Transport failures are reported here rather than as an `Err`, since
/// analytics delivery is best effort. Use [`Delivery::into_result`] when a
/// failure should propagate.
#[derive(Debug)]
#[must_use]
pub enum Delivery {
	/// The API accepted the request.
	Delivered { request: SignedRequest, body: String },
	/// The request was signed but could not be delivered.
	Failed {
		request: SignedRequest,
		error: TransportError,
	},
}

impl Delivery {
	/// The signed request, regardless of outcome.
	pub fn request(&self) -> &SignedRequest {
		match self {
			Delivery::Delivered { request, .. } | Delivery::Failed { request, .. } => request,
		}
	}

	pub fn url(&self) -> &str {
		&self.request().url
	}

	pub fn is_delivered(&self) -> bool {
		matches!(self, Delivery::Delivered { .. })
	}

	pub fn error(&self) -> Option<&TransportError> {
		match self {
			Delivery::Delivered { .. } => None,
			Delivery::Failed { error, .. } => Some(error),
		}
	}

	/// Converts a failure into [`PlaynomicsError::Transport`], keeping the URL.
	pub fn into_result(self) -> Result<String> {
		match self {
			Delivery::Delivered { body, .. } => Ok(body),
			Delivery::Failed { request, error } => Err(PlaynomicsError::Transport {
				url: request.url,
				source: error,
			}),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn request() -> SignedRequest {
		SignedRequest {
			url: "http://api.a.playnomics.net/v1/gameStart?a=1&sig=ab".to_string(),
			path: "/v1/gameStart".to_string(),
			query: "?a=1".to_string(),
			signature: "ab".to_string(),
		}
	}

	#[test]
	fn delivered_into_result_returns_body() {
		let delivery = Delivery::Delivered {
			request: request(),
			body: "ok".to_string(),
		};
		assert!(delivery.is_delivered());
		assert!(delivery.error().is_none());
		assert_eq!(delivery.into_result().unwrap(), "ok");
	}

	#[test]
	fn failed_into_result_keeps_url() {
		let delivery = Delivery::Failed {
			request: request(),
			error: TransportError::Status {
				status: 500,
				body: String::new(),
			},
		};
		assert!(!delivery.is_delivered());
		assert_eq!(delivery.url(), request().url);

		match delivery.into_result() {
			Err(PlaynomicsError::Transport { url, source }) => {
				assert_eq!(url, request().url);
				assert!(matches!(source, TransportError::Status { status: 500, .. }));
			}
			other => panic!("expected transport error, got {other:?}"),
		}
	}
}
