// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Builder for the logical fields of one tracking call.

use std::collections::BTreeMap;

use crate::currency::TransactionCurrency;
use crate::error::{CoreError, Result};
use crate::value::ParamValue;

/// Caller-supplied fields for a tracking call, keyed by logical name.
///
/// A field that is never inserted is "not supplied" and will be omitted from
/// the request. Inserting `None` through [`EventArgs::insert_opt`] has the
/// same effect, so optional fields can be forwarded without branching.
///
/// # Example
///
/// ```
/// use playnomics_core::{EventArgs, TransactionCurrency, TransactionType};
///
/// let args = EventArgs::new()
///     .insert("user_id", 1)
///     .insert("transaction_id", 17)
///     .insert("type", TransactionType::CurrencyConvert)
///     .insert_opt("item_id", None::<&str>)
///     .currency(TransactionCurrency::virtual_currency("coins", 50))
///     .currency(TransactionCurrency::real_currency("USD", -1));
///
/// assert_eq!(args.len(), 3);
/// assert_eq!(args.currencies().len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventArgs {
	fields: BTreeMap<String, ParamValue>,
	currencies: Vec<TransactionCurrency>,
}

impl EventArgs {
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets a field. A later insert of the same name replaces the earlier one.
	pub fn insert<K, V>(mut self, key: K, value: V) -> Self
	where
		K: Into<String>,
		V: Into<ParamValue>,
	{
		self.fields.insert(key.into(), value.into());
		self
	}

	/// Sets a field only when a value is present.
	pub fn insert_opt<K, V>(self, key: K, value: Option<V>) -> Self
	where
		K: Into<String>,
		V: Into<ParamValue>,
	{
		match value {
			Some(value) => self.insert(key, value),
			None => self,
		}
	}

	/// Appends a currency movement. Order is preserved and determines the
	/// ordinal in `tc<N>`/`tv<N>`/`ta<N>`.
	pub fn currency(mut self, currency: TransactionCurrency) -> Self {
		self.currencies.push(currency);
		self
	}

	pub fn currencies_from<I>(mut self, currencies: I) -> Self
	where
		I: IntoIterator<Item = TransactionCurrency>,
	{
		self.currencies.extend(currencies);
		self
	}

	/// Parses `key=value` pairs, as typed on a command line. Values are kept
	/// as text; the wire format does not distinguish types.
	pub fn parse_pairs<I, S>(pairs: I) -> Result<Self>
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let mut args = Self::new();
		for pair in pairs {
			let pair = pair.as_ref();
			let (key, value) = pair
				.split_once('=')
				.filter(|(key, _)| !key.is_empty())
				.ok_or_else(|| CoreError::MalformedArgument(pair.to_string()))?;
			args = args.insert(key, value);
		}
		Ok(args)
	}

	/// Merges another set of args into this one. Fields from `other` win;
	/// currencies are appended.
	pub fn merge(mut self, other: EventArgs) -> Self {
		self.fields.extend(other.fields);
		self.currencies.extend(other.currencies);
		self
	}

	pub fn get(&self, key: &str) -> Option<&ParamValue> {
		self.fields.get(key)
	}

	pub fn contains(&self, key: &str) -> bool {
		self.fields.contains_key(key)
	}

	/// Number of scalar fields (currencies not included).
	pub fn len(&self) -> usize {
		self.fields.len()
	}

	pub fn is_empty(&self) -> bool {
		self.fields.is_empty() && self.currencies.is_empty()
	}

	pub fn currencies(&self) -> &[TransactionCurrency] {
		&self.currencies
	}

	pub fn fields(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
		self.fields.iter().map(|(k, v)| (k.as_str(), v))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	#[test]
	fn new_is_empty() {
		let args = EventArgs::new();
		assert!(args.is_empty());
		assert_eq!(args.len(), 0);
	}

	#[test]
	fn insert_keeps_zero_values() {
		let args = EventArgs::new().insert("quantity", 0).insert("birth_year", 0);
		assert_eq!(args.get("quantity"), Some(&ParamValue::Integer(0)));
		assert_eq!(args.get("birth_year"), Some(&ParamValue::Integer(0)));
	}

	#[test]
	fn insert_opt_skips_none() {
		let args = EventArgs::new()
			.insert_opt("site", None::<String>)
			.insert_opt("reason", Some("quit"));

		assert!(!args.contains("site"));
		assert_eq!(args.get("reason"), Some(&ParamValue::from("quit")));
	}

	#[test]
	fn later_insert_wins() {
		let args = EventArgs::new().insert("session_id", 1).insert("session_id", 2);
		assert_eq!(args.get("session_id"), Some(&ParamValue::Integer(2)));
	}

	#[test]
	fn currencies_keep_caller_order() {
		let args = EventArgs::new()
			.currency(TransactionCurrency::virtual_currency("coins", 50))
			.currencies_from([
				TransactionCurrency::real_currency("USD", -1),
				TransactionCurrency::virtual_currency("gems", 2),
			]);

		let names: Vec<_> = args.currencies().iter().map(|c| c.name()).collect();
		assert_eq!(names, ["coins", "USD", "gems"]);
		assert!(!args.is_empty());
	}

	#[test]
	fn merge_prefers_other_and_appends_currencies() {
		let base = EventArgs::new()
			.insert("user_id", 1)
			.insert("reason", "quit")
			.currency(TransactionCurrency::real_currency("USD", 1));
		let other = EventArgs::new()
			.insert("reason", "timeout")
			.currency(TransactionCurrency::virtual_currency("coins", 5));

		let merged = base.merge(other);
		assert_eq!(merged.get("user_id"), Some(&ParamValue::Integer(1)));
		assert_eq!(merged.get("reason"), Some(&ParamValue::from("timeout")));
		assert_eq!(merged.currencies().len(), 2);
	}

	#[test]
	fn parse_pairs_splits_on_first_equals() {
		let args = EventArgs::parse_pairs(["user_id=42", "site=http://x.com/?a=b"]).unwrap();
		assert_eq!(args.get("user_id"), Some(&ParamValue::from("42")));
		assert_eq!(args.get("site"), Some(&ParamValue::from("http://x.com/?a=b")));
	}

	#[test]
	fn parse_pairs_rejects_missing_equals() {
		let result = EventArgs::parse_pairs(["user_id"]);
		assert!(matches!(result, Err(CoreError::MalformedArgument(_))));

		let result = EventArgs::parse_pairs(["=42"]);
		assert!(matches!(result, Err(CoreError::MalformedArgument(_))));
	}

	proptest! {
		#[test]
		fn len_matches_unique_keys(keys in proptest::collection::vec("[a-z_]{1,12}", 0..20)) {
			let unique: std::collections::HashSet<_> = keys.iter().cloned().collect();
			let mut args = EventArgs::new();
			for key in &keys {
				args = args.insert(key.clone(), 1);
			}
			prop_assert_eq!(args.len(), unique.len());
		}
	}
}
