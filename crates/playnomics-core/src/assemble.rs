// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Turns an event and its logical fields into a [`ParameterSet`].

use tracing::warn;

use crate::args::EventArgs;
use crate::error::{CoreError, Result};
use crate::event::Event;
use crate::params::ParameterSet;
use crate::value::ParamValue;

/// Application id key.
pub const APPLICATION_KEY: &str = "a";
/// Request timestamp key (UTC Unix seconds).
pub const TIMESTAMP_KEY: &str = "t";

/// Assemble the parameters for one tracking call.
///
/// Always injects `a` and `t`, maps every supplied field through the event's
/// table, appends the event constants and, for transactions, one
/// `tc<N>`/`tv<N>`/`ta<N>` triple per currency starting at `N = 1`.
///
/// A required field that is missing or an empty string fails with
/// [`CoreError::InvalidArgument`]. Optional fields that were not supplied are
/// left out entirely. Zero values are kept.
pub fn assemble(
	event: Event,
	application_id: &str,
	timestamp: i64,
	args: &EventArgs,
) -> Result<ParameterSet> {
	let mut params = ParameterSet::new();
	params.insert(APPLICATION_KEY, application_id);
	params.insert(TIMESTAMP_KEY, timestamp);

	for field in event.fields() {
		match args.get(field.name).filter(|value| !value.is_empty()) {
			Some(value) => params.insert(field.key, value.clone()),
			None if field.required => {
				return Err(CoreError::InvalidArgument {
					event,
					field: field.name,
				});
			}
			None => {}
		}
	}

	for (name, _) in args.fields() {
		if event.field(name).is_none() {
			warn!(event = %event, field = %name, "Ignoring field not defined for event");
		}
	}

	for (key, value) in event.constants() {
		params.insert(*key, *value);
	}

	if event.accepts_currencies() {
		for (index, currency) in args.currencies().iter().enumerate() {
			let ordinal = index + 1;
			params.insert(format!("tc{ordinal}"), currency.name());
			params.insert(format!("tv{ordinal}"), ParamValue::Decimal(currency.amount()));
			params.insert(format!("ta{ordinal}"), currency.category().code());
		}
	} else if !args.currencies().is_empty() {
		warn!(
			event = %event,
			count = args.currencies().len(),
			"Ignoring currencies on non-transaction event"
		);
	}

	Ok(params)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::currency::TransactionCurrency;
	use crate::transaction::TransactionType;

	fn keys(params: &ParameterSet) -> Vec<&str> {
		params.keys().collect()
	}

	#[test]
	fn session_start_scenario() {
		let args = EventArgs::new()
			.insert("user_id", 42)
			.insert("session_id", 7)
			.insert("site", "http://x.com");

		let params = assemble(Event::SessionStart, "app1", 1000, &args).unwrap();

		assert_eq!(keys(&params), ["a", "s", "ss", "t", "u"]);
		assert_eq!(params.get("a"), Some(&ParamValue::from("app1")));
		assert_eq!(params.get("u"), Some(&ParamValue::Integer(42)));
		assert_eq!(params.get("t"), Some(&ParamValue::Integer(1000)));
		assert_eq!(params.get("s"), Some(&ParamValue::Integer(7)));
		assert_eq!(params.get("ss"), Some(&ParamValue::from("http://x.com")));
	}

	#[test]
	fn omitted_optional_fields_produce_no_keys() {
		let args = EventArgs::new().insert("user_id", 1).insert("session_id", 1);
		let params = assemble(Event::SessionEnd, "app1", 1, &args).unwrap();

		assert_eq!(keys(&params), ["a", "s", "t", "u"]);
		assert!(!params.contains_key("r"));
	}

	#[test]
	fn empty_optional_text_is_dropped() {
		let args = EventArgs::new()
			.insert("user_id", 1)
			.insert("session_id", 1)
			.insert("site", "");
		let params = assemble(Event::SessionStart, "app1", 1, &args).unwrap();
		assert!(!params.contains_key("ss"));
	}

	#[test]
	fn zero_values_are_kept() {
		let args = EventArgs::new()
			.insert("user_id", 0)
			.insert("birth_year", 0);
		let params = assemble(Event::UserInfo, "app1", 1, &args).unwrap();

		assert_eq!(params.get("u"), Some(&ParamValue::Integer(0)));
		assert_eq!(params.get("pb"), Some(&ParamValue::Integer(0)));
	}

	#[test]
	fn missing_user_id_is_invalid() {
		let args = EventArgs::new().insert("session_id", 7);
		let err = assemble(Event::SessionStart, "app1", 1, &args).unwrap_err();
		assert_eq!(
			err,
			CoreError::InvalidArgument {
				event: Event::SessionStart,
				field: "user_id"
			}
		);
	}

	#[test]
	fn milestone_without_name_is_invalid() {
		let args = EventArgs::new()
			.insert("user_id", 1)
			.insert("milestone_id", 3);
		let err = assemble(Event::Milestone, "app1", 1, &args).unwrap_err();
		assert_eq!(
			err,
			CoreError::InvalidArgument {
				event: Event::Milestone,
				field: "milestone_name"
			}
		);
	}

	#[test]
	fn empty_required_text_is_invalid() {
		let args = EventArgs::new()
			.insert("user_id", 1)
			.insert("invitation_id", "");
		let err = assemble(Event::InvitationSent, "app1", 1, &args).unwrap_err();
		assert!(matches!(
			err,
			CoreError::InvalidArgument {
				field: "invitation_id",
				..
			}
		));
	}

	#[test]
	fn transaction_without_currencies_has_no_currency_keys() {
		let args = EventArgs::new()
			.insert("user_id", 1)
			.insert("transaction_id", 9)
			.insert("type", TransactionType::Reward);
		let params = assemble(Event::Transaction, "app1", 1, &args).unwrap();

		assert_eq!(keys(&params), ["a", "r", "t", "tt", "u"]);
		assert!(params
			.keys()
			.all(|k| !k.starts_with("tc") && !k.starts_with("tv") && !k.starts_with("ta")));
	}

	#[test]
	fn transaction_currencies_are_one_indexed_in_caller_order() {
		let args = EventArgs::new()
			.insert("user_id", 1)
			.insert("transaction_id", 9)
			.insert("type", TransactionType::CurrencyConvert)
			.currency(TransactionCurrency::virtual_currency("coins", 50))
			.currency(TransactionCurrency::real_currency("USD", -1));
		let params = assemble(Event::Transaction, "app1", 1, &args).unwrap();

		let currency_keys: Vec<_> = params
			.keys()
			.filter(|k| k.starts_with("tc") || k.starts_with("tv") || k.starts_with("ta"))
			.collect();
		assert_eq!(currency_keys, ["ta1", "ta2", "tc1", "tc2", "tv1", "tv2"]);

		assert_eq!(params.get("tc1"), Some(&ParamValue::from("coins")));
		assert_eq!(params.get("tv1").unwrap().to_string(), "50");
		assert_eq!(params.get("ta1"), Some(&ParamValue::from("v")));
		assert_eq!(params.get("tc2"), Some(&ParamValue::from("USD")));
		assert_eq!(params.get("tv2").unwrap().to_string(), "-1");
		assert_eq!(params.get("ta2"), Some(&ParamValue::from("r")));
	}

	#[test]
	fn transaction_quantity_zero_is_sent() {
		let args = EventArgs::new()
			.insert("user_id", 1)
			.insert("transaction_id", 9)
			.insert("type", TransactionType::Free)
			.insert("quantity", 0);
		let params = assemble(Event::Transaction, "app1", 1, &args).unwrap();
		assert_eq!(params.get("tq"), Some(&ParamValue::Integer(0)));
	}

	#[test]
	fn currencies_on_other_events_are_ignored() {
		let args = EventArgs::new()
			.insert("user_id", 1)
			.currency(TransactionCurrency::real_currency("USD", 1));
		let params = assemble(Event::GameStart, "app1", 1, &args).unwrap();
		assert_eq!(keys(&params), ["a", "t", "u"]);
	}

	#[test]
	fn unknown_fields_are_ignored() {
		let args = EventArgs::new()
			.insert("user_id", 1)
			.insert("session_id", 1)
			.insert("colour", "blue");
		let params = assemble(Event::SessionEnd, "app1", 1, &args).unwrap();
		assert_eq!(keys(&params), ["a", "s", "t", "u"]);
	}

	#[test]
	fn event_constants_are_injected() {
		let args = EventArgs::new().insert("user_id", 1);
		let params = assemble(Event::UserInfo, "app1", 1, &args).unwrap();
		assert_eq!(params.get("pt"), Some(&ParamValue::from("update")));

		let args = EventArgs::new()
			.insert("user_id", 2)
			.insert("invitation_id", 5)
			.insert("recipient_user_id", 2);
		let params = assemble(Event::InvitationResponse, "app1", 1, &args).unwrap();
		assert_eq!(keys(&params), ["a", "ie", "ii", "ir", "t", "u"]);
		assert_eq!(params.get("ie"), Some(&ParamValue::from("accepted")));
	}

	#[test]
	fn every_event_succeeds_with_only_required_fields() {
		for event in Event::ALL {
			let args = event
				.fields()
				.iter()
				.filter(|f| f.required)
				.fold(EventArgs::new(), |args, f| args.insert(f.name, "x"));

			let params = assemble(event, "app1", 1, &args).unwrap();
			let expected = event.fields().iter().filter(|f| f.required).count()
				+ event.constants().len()
				+ 2;
			assert_eq!(params.len(), expected, "{event}");
		}
	}

	#[test]
	fn every_required_field_is_enforced() {
		for event in Event::ALL {
			for missing in event.fields().iter().filter(|f| f.required) {
				let args = event
					.fields()
					.iter()
					.filter(|f| f.required && f.name != missing.name)
					.fold(EventArgs::new(), |args, f| args.insert(f.name, "x"));

				let err = assemble(event, "app1", 1, &args).unwrap_err();
				assert_eq!(
					err,
					CoreError::InvalidArgument {
						event,
						field: missing.name
					}
				);
			}
		}
	}
}
