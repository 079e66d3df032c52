// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Sample two-player flow: one player buys, reaches a milestone and invites a
//! friend, who then signs up and plays.

use playnomics::{
	Event, EventArgs, PlaynomicsClient, TransactionCurrency, TransactionType,
};
use playnomics_common_signing::compute_hmac_sha256;
use tracing::{info, warn};

const PLAYER_ONE: i64 = 1;
const PLAYER_TWO: i64 = 2;
const PLAYER_TWO_EMAIL: &str = "player2@gmail.com";
const INVITATION_KEY: &[u8] = b"INVITATION_KEY";
const SITE: &str = "http://awesomegames.com";
const GAME_SITE: &str = "http://awesomegames.com/mmorpg";

/// Builds the sequence of calls. `seed` varies the transaction, milestone and
/// invitation ids between runs.
pub fn script(seed: i64) -> Vec<(Event, EventArgs)> {
	let id = |offset: i64| seed.rem_euclid(100) + offset;
	let invitation_id = id(4);
	let mut steps = Vec::new();

	let (session, instance) = (1, 1);
	steps.push((
		Event::SessionStart,
		EventArgs::new()
			.insert("user_id", PLAYER_ONE)
			.insert("session_id", session)
			.insert("site", SITE),
	));
	steps.push((Event::GameStart, game_start(PLAYER_ONE, session, instance)));
	steps.push((
		Event::Transaction,
		EventArgs::new()
			.insert("user_id", PLAYER_ONE)
			.insert("transaction_id", id(1))
			.insert("type", TransactionType::CurrencyConvert)
			.currency(TransactionCurrency::virtual_currency("coins", 50))
			.currency(TransactionCurrency::real_currency("USD", -1)),
	));
	steps.push((
		Event::Transaction,
		EventArgs::new()
			.insert("user_id", PLAYER_ONE)
			.insert("transaction_id", id(2))
			.insert("type", TransactionType::BuyItem)
			.insert("quantity", 1)
			.insert("item_id", "Sword")
			.currency(TransactionCurrency::real_currency("USD", 1)),
	));
	steps.push((
		Event::Transaction,
		EventArgs::new()
			.insert("user_id", PLAYER_ONE)
			.insert("transaction_id", id(3))
			.insert("type", TransactionType::BuyItem)
			.insert("quantity", 1)
			.insert("item_id", "Sword")
			.currency(TransactionCurrency::virtual_currency("coins", 10)),
	));
	steps.push((
		Event::Milestone,
		EventArgs::new()
			.insert("user_id", PLAYER_ONE)
			.insert("milestone_id", id(5))
			.insert("milestone_name", "CUSTOM1"),
	));
	steps.push((
		Event::InvitationSent,
		EventArgs::new()
			.insert("user_id", PLAYER_ONE)
			.insert("invitation_id", invitation_id)
			.insert(
				"recipient_address",
				compute_hmac_sha256(INVITATION_KEY, PLAYER_TWO_EMAIL.as_bytes()),
			),
	));
	steps.push((Event::GameEnd, game_end(PLAYER_ONE, session, instance)));
	steps.push((Event::SessionEnd, session_end(PLAYER_ONE, session)));

	let (session, instance) = (session + 1, instance + 1);
	steps.push((
		Event::SessionStart,
		EventArgs::new()
			.insert("user_id", PLAYER_TWO)
			.insert("session_id", session)
			.insert("site", SITE),
	));
	steps.push((
		Event::UserInfo,
		EventArgs::new()
			.insert("user_id", PLAYER_TWO)
			.insert("country", "USA")
			.insert("subdivision", "94131")
			.insert("sex", "F")
			.insert("birth_year", 1980)
			.insert("source", "invitation")
			.insert("source_user", PLAYER_ONE),
	));
	steps.push((Event::GameStart, game_start(PLAYER_TWO, session, instance)));
	steps.push((
		Event::InvitationResponse,
		EventArgs::new()
			.insert("user_id", PLAYER_TWO)
			.insert("recipient_user_id", PLAYER_TWO)
			.insert("invitation_id", invitation_id),
	));
	steps.push((Event::GameEnd, game_end(PLAYER_TWO, session, instance)));
	steps.push((Event::SessionEnd, session_end(PLAYER_TWO, session)));

	steps
}

fn game_start(user: i64, session: i64, instance: i64) -> EventArgs {
	EventArgs::new()
		.insert("user_id", user)
		.insert("session_id", session)
		.insert("instance_id", instance)
		.insert("site", GAME_SITE)
		.insert("type", "mmorpg")
		.insert("game_id", 1)
}

fn game_end(user: i64, session: i64, instance: i64) -> EventArgs {
	EventArgs::new()
		.insert("user_id", user)
		.insert("session_id", session)
		.insert("instance_id", instance)
		.insert("reason", "quit")
}

fn session_end(user: i64, session: i64) -> EventArgs {
	EventArgs::new()
		.insert("user_id", user)
		.insert("session_id", session)
		.insert("reason", "quit")
}

/// Runs the script. With `dry_run` the signed URLs are printed and nothing
/// is sent. Returns the number of calls that were not delivered.
pub fn run(client: &PlaynomicsClient, seed: i64, dry_run: bool) -> anyhow::Result<usize> {
	let mut failed = 0;

	for (step, (event, args)) in script(seed).into_iter().enumerate() {
		if dry_run {
			let request = client.sign(event, &args)?;
			println!("{}", request.url);
			continue;
		}

		let delivery = client.track(event, &args)?;
		if delivery.is_delivered() {
			info!(step, event = %event, "Demo step delivered");
		} else {
			warn!(step, event = %event, url = delivery.url(), "Demo step not delivered");
			failed += 1;
		}
	}

	Ok(failed)
}
