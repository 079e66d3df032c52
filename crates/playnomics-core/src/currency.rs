// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Currency movements attached to a transaction.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Whether a currency is real-world money or an in-game currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CurrencyCategory {
	Real,
	Virtual,
}

impl CurrencyCategory {
	/// The single-letter code sent as `ta<N>`.
	pub fn code(&self) -> &'static str {
		match self {
			CurrencyCategory::Real => "r",
			CurrencyCategory::Virtual => "v",
		}
	}
}

impl fmt::Display for CurrencyCategory {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.code())
	}
}

/// A named amount of currency moved by a transaction.
///
/// Negative amounts are allowed; a currency conversion typically spends one
/// currency (`-1 USD`) to gain another (`+50 coins`).
///
/// ```
/// use playnomics_core::{CurrencyCategory, TransactionCurrency};
///
/// let usd = TransactionCurrency::real_currency("USD", -1);
/// let coins = TransactionCurrency::virtual_currency("coins", 50);
///
/// assert_eq!(usd.category(), CurrencyCategory::Real);
/// assert_eq!(coins.category().code(), "v");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionCurrency {
	name: String,
	amount: Decimal,
	category: CurrencyCategory,
}

impl TransactionCurrency {
	/// Real-world money, e.g. `USD`.
	pub fn real_currency(name: impl Into<String>, amount: impl Into<Decimal>) -> Self {
		Self {
			name: name.into(),
			amount: amount.into(),
			category: CurrencyCategory::Real,
		}
	}

	/// An in-game currency, e.g. `coins`.
	pub fn virtual_currency(name: impl Into<String>, amount: impl Into<Decimal>) -> Self {
		Self {
			name: name.into(),
			amount: amount.into(),
			category: CurrencyCategory::Virtual,
		}
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn amount(&self) -> Decimal {
		self.amount
	}

	pub fn category(&self) -> CurrencyCategory {
		self.category
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::str::FromStr;

	#[test]
	fn constructors_tag_category() {
		let real = TransactionCurrency::real_currency("USD", 1);
		let virt = TransactionCurrency::virtual_currency("coins", 10);

		assert_eq!(real.category(), CurrencyCategory::Real);
		assert_eq!(real.category().code(), "r");
		assert_eq!(virt.category(), CurrencyCategory::Virtual);
		assert_eq!(virt.category().code(), "v");
	}

	#[test]
	fn accepts_fractional_amounts() {
		let price = Decimal::from_str("0.99").unwrap();
		let currency = TransactionCurrency::real_currency("USD", price);
		assert_eq!(currency.amount(), price);
		assert_eq!(currency.name(), "USD");
	}

	#[test]
	fn category_serializes_lowercase() {
		let json = serde_json::to_string(&CurrencyCategory::Virtual).unwrap();
		assert_eq!(json, r#""virtual""#);
	}
}
