// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! HMAC-SHA256 request signatures and query-string encoding.
//!
//! The Playnomics API authenticates a request by recomputing an HMAC over the
//! exact bytes of its path and query string. Both helpers here therefore have
//! to be bit-for-bit stable: any change to the encoding alphabet breaks every
//! signed call.

use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Compute an HMAC-SHA256 signature for a payload.
///
/// Returns the lowercase hex-encoded digest without any prefix.
pub fn compute_hmac_sha256(secret: &[u8], payload: &[u8]) -> String {
	let mut mac = HmacSha256::new_from_slice(secret).expect("HMAC can take key of any size");
	mac.update(payload);
	let result = mac.finalize();
	hex::encode(result.into_bytes())
}

/// Verify an HMAC-SHA256 signature for a payload in constant time.
///
/// The `signature` is the raw hex digest (either case).
pub fn verify_hmac_sha256(secret: &[u8], payload: &[u8], signature: &str) -> bool {
	let expected_bytes = match hex::decode(signature) {
		Ok(bytes) => bytes,
		Err(_) => return false,
	};

	let mut mac = match HmacSha256::new_from_slice(secret) {
		Ok(m) => m,
		Err(_) => return false,
	};

	mac.update(payload);
	mac.verify_slice(&expected_bytes).is_ok()
}

/// Percent-encode a query key or value the way the API's form decoder
/// expects it.
///
/// ASCII alphanumerics and `-`, `_`, `.` pass through, a space becomes `+`
/// and every other byte of the UTF-8 encoding becomes `%XX` (uppercase hex).
/// Notably `~` is escaped as `%7E`.
pub fn encode_query_component(value: &str) -> String {
	urlencoding::encode(value)
		.replace("%20", "+")
		.replace('~', "%7E")
}
