// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Scalar query parameter values.

use std::fmt;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::transaction::TransactionType;

/// A single query parameter value.
///
/// The wire format is always text; the variants only control how a value is
/// rendered. Integers and decimals are never treated as "empty", so a
/// legitimate `0` is always sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ParamValue {
	Integer(i64),
	Decimal(Decimal),
	Text(String),
}

impl ParamValue {
	/// Returns true for the empty string, which is never signed or sent.
	pub fn is_empty(&self) -> bool {
		matches!(self, ParamValue::Text(s) if s.is_empty())
	}
}

impl fmt::Display for ParamValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			ParamValue::Integer(n) => write!(f, "{n}"),
			ParamValue::Decimal(d) => write!(f, "{}", d.normalize()),
			ParamValue::Text(s) => f.write_str(s),
		}
	}
}

impl From<&str> for ParamValue {
	fn from(value: &str) -> Self {
		ParamValue::Text(value.to_string())
	}
}

impl From<String> for ParamValue {
	fn from(value: String) -> Self {
		ParamValue::Text(value)
	}
}

impl From<&String> for ParamValue {
	fn from(value: &String) -> Self {
		ParamValue::Text(value.clone())
	}
}

impl From<i32> for ParamValue {
	fn from(value: i32) -> Self {
		ParamValue::Integer(i64::from(value))
	}
}

impl From<u32> for ParamValue {
	fn from(value: u32) -> Self {
		ParamValue::Integer(i64::from(value))
	}
}

impl From<i64> for ParamValue {
	fn from(value: i64) -> Self {
		ParamValue::Integer(value)
	}
}

impl From<u64> for ParamValue {
	fn from(value: u64) -> Self {
		match i64::try_from(value) {
			Ok(n) => ParamValue::Integer(n),
			Err(_) => ParamValue::Decimal(Decimal::from(value)),
		}
	}
}

impl From<Decimal> for ParamValue {
	fn from(value: Decimal) -> Self {
		ParamValue::Decimal(value)
	}
}

impl From<TransactionType> for ParamValue {
	fn from(value: TransactionType) -> Self {
		ParamValue::Text(value.as_str().to_string())
	}
}
