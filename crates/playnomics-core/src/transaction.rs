// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Transaction types accepted by `/v1/transaction`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// The kind of economic activity a transaction records. Sent verbatim as `tt`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionType {
	BuyItem,
	SellItem,
	ReturnItem,
	BuyService,
	SellService,
	ReturnService,
	CurrencyConvert,
	Initial,
	Free,
	Reward,
	GiftSend,
	GiftReceive,
}

impl TransactionType {
	pub const ALL: [TransactionType; 12] = [
		TransactionType::BuyItem,
		TransactionType::SellItem,
		TransactionType::ReturnItem,
		TransactionType::BuyService,
		TransactionType::SellService,
		TransactionType::ReturnService,
		TransactionType::CurrencyConvert,
		TransactionType::Initial,
		TransactionType::Free,
		TransactionType::Reward,
		TransactionType::GiftSend,
		TransactionType::GiftReceive,
	];

	pub fn as_str(&self) -> &'static str {
		match self {
			TransactionType::BuyItem => "BuyItem",
			TransactionType::SellItem => "SellItem",
			TransactionType::ReturnItem => "ReturnItem",
			TransactionType::BuyService => "BuyService",
			TransactionType::SellService => "SellService",
			TransactionType::ReturnService => "ReturnService",
			TransactionType::CurrencyConvert => "CurrencyConvert",
			TransactionType::Initial => "Initial",
			TransactionType::Free => "Free",
			TransactionType::Reward => "Reward",
			TransactionType::GiftSend => "GiftSend",
			TransactionType::GiftReceive => "GiftReceive",
		}
	}
}

impl fmt::Display for TransactionType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for TransactionType {
	type Err = CoreError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		TransactionType::ALL
			.into_iter()
			.find(|t| t.as_str() == s)
			.ok_or_else(|| CoreError::UnknownTransactionType(s.to_string()))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn display_parses_back() {
		for kind in TransactionType::ALL {
			assert_eq!(kind.to_string().parse::<TransactionType>().unwrap(), kind);
		}
	}

	#[test]
	fn names_are_unique() {
		let names: std::collections::HashSet<_> =
			TransactionType::ALL.iter().map(|t| t.as_str()).collect();
		assert_eq!(names.len(), TransactionType::ALL.len());
	}

	#[test]
	fn parsing_is_case_sensitive() {
		assert!(matches!(
			"buyitem".parse::<TransactionType>(),
			Err(CoreError::UnknownTransactionType(_))
		));
	}
}
