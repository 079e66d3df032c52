// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The fixed set of tracking endpoints and their field tables.
//!
//! Every endpoint maps logical field names (what callers pass in
//! [`EventArgs`](crate::EventArgs)) to the short query keys the API expects.
//! The tables below are the whole contract; the assembler has no per-event
//! logic of its own.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// One row of an event's field table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
	/// Logical name supplied by the caller, e.g. `session_id`.
	pub name: &'static str,
	/// Query key sent on the wire, e.g. `s`.
	pub key: &'static str,
	pub required: bool,
}

const fn required(name: &'static str, key: &'static str) -> FieldSpec {
	FieldSpec {
		name,
		key,
		required: true,
	}
}

const fn optional(name: &'static str, key: &'static str) -> FieldSpec {
	FieldSpec {
		name,
		key,
		required: false,
	}
}

const SESSION_START: &[FieldSpec] = &[
	required("user_id", "u"),
	required("session_id", "s"),
	optional("site", "ss"),
];

const SESSION_END: &[FieldSpec] = &[
	required("user_id", "u"),
	required("session_id", "s"),
	optional("reason", "r"),
];

const GAME_START: &[FieldSpec] = &[
	required("user_id", "u"),
	optional("instance_id", "g"),
	optional("session_id", "s"),
	optional("site", "ss"),
	optional("game_id", "gi"),
	optional("type", "gt"),
];

const GAME_END: &[FieldSpec] = &[
	required("user_id", "u"),
	required("instance_id", "g"),
	optional("session_id", "s"),
	optional("reason", "gr"),
];

const TRANSACTION: &[FieldSpec] = &[
	required("user_id", "u"),
	required("transaction_id", "r"),
	required("type", "tt"),
	optional("item_id", "i"),
	optional("quantity", "tq"),
	optional("other_user_id", "to"),
];

const MILESTONE: &[FieldSpec] = &[
	required("user_id", "u"),
	required("milestone_id", "mi"),
	required("milestone_name", "mn"),
];

const USER_INFO: &[FieldSpec] = &[
	required("user_id", "u"),
	optional("country", "pc"),
	optional("subdivision", "ps"),
	optional("sex", "px"),
	optional("birth_year", "pb"),
	optional("source", "po"),
	optional("source_campaign", "pm"),
	optional("source_user", "pu"),
	optional("install_time", "pi"),
];

const INVITATION_SENT: &[FieldSpec] = &[
	required("user_id", "u"),
	required("invitation_id", "ii"),
	optional("recipient_user_id", "ir"),
	optional("recipient_address", "ia"),
	optional("method", "im"),
];

const INVITATION_RESPONSE: &[FieldSpec] = &[
	required("user_id", "u"),
	required("invitation_id", "ii"),
	optional("recipient_user_id", "ir"),
];

/// A tracking endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Event {
	SessionStart,
	SessionEnd,
	GameStart,
	GameEnd,
	Transaction,
	Milestone,
	UserInfo,
	InvitationSent,
	InvitationResponse,
}

impl Event {
	pub const ALL: [Event; 9] = [
		Event::SessionStart,
		Event::SessionEnd,
		Event::GameStart,
		Event::GameEnd,
		Event::Transaction,
		Event::Milestone,
		Event::UserInfo,
		Event::InvitationSent,
		Event::InvitationResponse,
	];

	/// The endpoint name as it appears in the path, e.g. `sessionStart`.
	pub fn name(&self) -> &'static str {
		match self {
			Event::SessionStart => "sessionStart",
			Event::SessionEnd => "sessionEnd",
			Event::GameStart => "gameStart",
			Event::GameEnd => "gameEnd",
			Event::Transaction => "transaction",
			Event::Milestone => "milestone",
			Event::UserInfo => "userInfo",
			Event::InvitationSent => "invitationSent",
			Event::InvitationResponse => "invitationResponse",
		}
	}

	/// Snake-case alias accepted by [`FromStr`], e.g. `session_start`.
	pub fn snake_name(&self) -> &'static str {
		match self {
			Event::SessionStart => "session_start",
			Event::SessionEnd => "session_end",
			Event::GameStart => "game_start",
			Event::GameEnd => "game_end",
			Event::Transaction => "transaction",
			Event::Milestone => "milestone",
			Event::UserInfo => "user_info",
			Event::InvitationSent => "invitation_sent",
			Event::InvitationResponse => "invitation_response",
		}
	}

	pub fn path(&self) -> &'static str {
		match self {
			Event::SessionStart => "/v1/sessionStart",
			Event::SessionEnd => "/v1/sessionEnd",
			Event::GameStart => "/v1/gameStart",
			Event::GameEnd => "/v1/gameEnd",
			Event::Transaction => "/v1/transaction",
			Event::Milestone => "/v1/milestone",
			Event::UserInfo => "/v1/userInfo",
			Event::InvitationSent => "/v1/invitationSent",
			Event::InvitationResponse => "/v1/invitationResponse",
		}
	}

	/// The field table for this event, `user_id` first.
	pub fn fields(&self) -> &'static [FieldSpec] {
		match self {
			Event::SessionStart => SESSION_START,
			Event::SessionEnd => SESSION_END,
			Event::GameStart => GAME_START,
			Event::GameEnd => GAME_END,
			Event::Transaction => TRANSACTION,
			Event::Milestone => MILESTONE,
			Event::UserInfo => USER_INFO,
			Event::InvitationSent => INVITATION_SENT,
			Event::InvitationResponse => INVITATION_RESPONSE,
		}
	}

	/// Fixed key/value pairs the endpoint always carries.
	pub fn constants(&self) -> &'static [(&'static str, &'static str)] {
		match self {
			Event::UserInfo => &[("pt", "update")],
			Event::InvitationResponse => &[("ie", "accepted")],
			_ => &[],
		}
	}

	/// Only transactions carry `tc<N>`/`tv<N>`/`ta<N>` currency triples.
	pub fn accepts_currencies(&self) -> bool {
		matches!(self, Event::Transaction)
	}

	pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
		self.fields().iter().find(|f| f.name == name)
	}
}

impl fmt::Display for Event {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

impl FromStr for Event {
	type Err = CoreError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Event::ALL
			.into_iter()
			.find(|e| e.name() == s || e.snake_name() == s || e.path() == s)
			.ok_or_else(|| CoreError::UnknownEvent(s.to_string()))
	}
}
