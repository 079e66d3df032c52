// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Redacting wrapper for credentials.
//!
//! The application shared secret keys every request signature. Anyone holding
//! it can forge events for the application, so it must never show up in a log
//! line, a panic message or a serialized config.
//!
//! ```
//! use playnomics_common_config::SharedSecret;
//!
//! let secret = SharedSecret::from("s3cr3t");
//!
//! assert_eq!(format!("{secret:?}"), "Secret(\"[REDACTED]\")");
//! assert_eq!(format!("{secret}"), "[REDACTED]");
//! assert_eq!(secret.expose(), b"s3cr3t");
//! ```

use std::fmt;
use zeroize::Zeroize;

/// The placeholder printed instead of a secret value.
pub const REDACTED: &str = "[REDACTED]";

/// A value that is redacted in `Debug`, `Display` and `Serialize`, and
/// zeroized on drop. Use [`Secret::expose`] to read it.
#[derive(Zeroize)]
#[zeroize(drop)]
pub struct Secret<T>
where
	T: Zeroize,
{
	inner: T,
}

/// The HMAC key shared between an application and the Playnomics API.
pub type SharedSecret = Secret<Vec<u8>>;

impl<T> Secret<T>
where
	T: Zeroize,
{
	pub fn new(inner: T) -> Self {
		Self { inner }
	}

	/// Explicitly access the inner value.
	pub fn expose(&self) -> &T {
		&self.inner
	}
}

impl SharedSecret {
	/// Returns true if the secret holds no bytes.
	pub fn is_empty(&self) -> bool {
		self.inner.is_empty()
	}
}

impl From<&str> for SharedSecret {
	fn from(value: &str) -> Self {
		Secret::new(value.as_bytes().to_vec())
	}
}

impl From<String> for SharedSecret {
	fn from(value: String) -> Self {
		Secret::new(value.into_bytes())
	}
}

impl From<&[u8]> for SharedSecret {
	fn from(value: &[u8]) -> Self {
		Secret::new(value.to_vec())
	}
}

impl From<Vec<u8>> for SharedSecret {
	fn from(value: Vec<u8>) -> Self {
		Secret::new(value)
	}
}

impl From<Secret<String>> for SharedSecret {
	fn from(value: Secret<String>) -> Self {
		Secret::new(value.expose().as_bytes().to_vec())
	}
}

impl<T> Clone for Secret<T>
where
	T: Zeroize + Clone,
{
	fn clone(&self) -> Self {
		Self {
			inner: self.inner.clone(),
		}
	}
}

impl<T> fmt::Debug for Secret<T>
where
	T: Zeroize,
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("Secret").field(&REDACTED).finish()
	}
}

impl<T> fmt::Display for Secret<T>
where
	T: Zeroize,
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(REDACTED)
	}
}

impl<T> PartialEq for Secret<T>
where
	T: Zeroize + PartialEq,
{
	fn eq(&self, other: &Self) -> bool {
		self.inner == other.inner
	}
}

impl<T> Eq for Secret<T> where T: Zeroize + Eq {}

#[cfg(feature = "serde")]
mod serde_impl {
	use super::{Secret, REDACTED};
	use serde::{Deserialize, Deserializer, Serialize, Serializer};
	use zeroize::Zeroize;

	impl<T> Serialize for Secret<T>
	where
		T: Serialize + Zeroize,
	{
		fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
		where
			S: Serializer,
		{
			serializer.serialize_str(REDACTED)
		}
	}

	impl<'de, T> Deserialize<'de> for Secret<T>
	where
		T: Deserialize<'de> + Zeroize,
	{
		fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
		where
			D: Deserializer<'de>,
		{
			let inner = T::deserialize(deserializer)?;
			Ok(Secret::new(inner))
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	#[test]
	fn debug_is_redacted() {
		let secret = SharedSecret::from("app-shared-secret");
		let debug_output = format!("{secret:?}");

		assert!(!debug_output.contains("app-shared-secret"));
		assert!(debug_output.contains(REDACTED));
	}

	#[test]
	fn display_is_redacted() {
		let secret = SharedSecret::from("app-shared-secret");
		assert_eq!(format!("{secret}"), REDACTED);
	}

	#[test]
	fn expose_returns_raw_bytes() {
		let secret = SharedSecret::from("s3cr3t");
		assert_eq!(secret.expose().as_slice(), b"s3cr3t");
	}

	#[test]
	fn string_and_byte_constructors_agree() {
		let from_str = SharedSecret::from("key");
		let from_string = SharedSecret::from("key".to_string());
		let from_bytes = SharedSecret::from(&b"key"[..]);
		let from_secret_string = SharedSecret::from(Secret::new("key".to_string()));

		assert_eq!(from_str, from_string);
		assert_eq!(from_str, from_bytes);
		assert_eq!(from_str, from_secret_string);
	}

	#[test]
	fn empty_secret_is_detected() {
		assert!(SharedSecret::from("").is_empty());
		assert!(!SharedSecret::from("x").is_empty());
	}

	#[test]
	fn option_secret_debug_is_redacted() {
		let secret: Option<SharedSecret> = Some(SharedSecret::from("app-shared-secret"));
		let debug = format!("{secret:?}");
		assert!(debug.contains(REDACTED));
		assert!(!debug.contains("app-shared-secret"));
	}

	#[cfg(feature = "serde")]
	#[test]
	fn serialize_is_redacted() {
		let secret = Secret::new("app-shared-secret".to_string());
		let json = serde_json::to_string(&secret).unwrap();

		assert!(!json.contains("app-shared-secret"));
		assert!(json.contains(REDACTED));
	}

	#[cfg(feature = "serde")]
	#[test]
	fn deserialize_populates_secret() {
		let secret: Secret<String> = serde_json::from_str(r#""s3cr3t""#).unwrap();
		assert_eq!(secret.expose(), "s3cr3t");
	}

	proptest! {
		#[test]
		fn display_never_contains_secret(inner in "[a-zA-Z0-9!@#$%^&*_+=;:,.<>?/-]{3,50}") {
			prop_assume!(!"Secret(\"[REDACTED]\")".contains(inner.as_str()));

			let secret = SharedSecret::from(inner.as_str());
			let display_output = format!("{secret}");
			let debug_output = format!("{secret:?}");
			prop_assert!(!display_output.contains(&inner));
			prop_assert!(!debug_output.contains(&inner));
		}

		#[test]
		fn expose_roundtrips(inner in ".*") {
			let secret = SharedSecret::from(inner.as_str());
			prop_assert_eq!(secret.expose().as_slice(), inner.as_bytes());
		}
	}
}
