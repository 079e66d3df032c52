// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The wire-level parameter map that gets signed.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::value::ParamValue;

/// Query parameters keyed by their short wire key.
///
/// Iteration is always in ascending byte order of the key, which is the
/// order the signature is computed over. How the set was built has no
/// bearing on that order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ParameterSet {
	inner: BTreeMap<String, ParamValue>,
}

impl ParameterSet {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
		self.inner.insert(key.into(), value.into());
	}

	pub fn get(&self, key: &str) -> Option<&ParamValue> {
		self.inner.get(key)
	}

	pub fn contains_key(&self, key: &str) -> bool {
		self.inner.contains_key(key)
	}

	pub fn len(&self) -> usize {
		self.inner.len()
	}

	pub fn is_empty(&self) -> bool {
		self.inner.is_empty()
	}

	/// Keys in signing order.
	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.inner.keys().map(String::as_str)
	}

	/// Entries in signing order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
		self.inner.iter().map(|(k, v)| (k.as_str(), v))
	}
}

impl<K, V> FromIterator<(K, V)> for ParameterSet
where
	K: Into<String>,
	V: Into<ParamValue>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		let mut params = ParameterSet::new();
		for (key, value) in iter {
			params.insert(key, value);
		}
		params
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn keys_come_out_in_byte_order() {
		let params: ParameterSet = [("u", "42"), ("ss", "x"), ("a", "app1"), ("t", "1000"), ("s", "7")]
			.into_iter()
			.collect();

		let keys: Vec<_> = params.keys().collect();
		assert_eq!(keys, ["a", "s", "ss", "t", "u"]);
	}

	#[test]
	fn ordinal_keys_sort_lexicographically_not_numerically() {
		let params: ParameterSet = ["tc1", "tc10", "tc2", "ta1", "tv1"]
			.into_iter()
			.map(|k| (k, "x"))
			.collect();

		let keys: Vec<_> = params.keys().collect();
		assert_eq!(keys, ["ta1", "tc1", "tc10", "tc2", "tv1"]);
	}

	#[test]
	fn uppercase_sorts_before_lowercase() {
		let params: ParameterSet = [("b", "1"), ("B", "2"), ("a", "3")].into_iter().collect();
		let keys: Vec<_> = params.keys().collect();
		assert_eq!(keys, ["B", "a", "b"]);
	}

	#[test]
	fn serializes_as_flat_object() {
		let mut params = ParameterSet::new();
		params.insert("a", "app1");
		params.insert("t", 1000i64);

		let json = serde_json::to_value(&params).unwrap();
		assert_eq!(json, serde_json::json!({"a": "app1", "t": 1000}));
	}
}
