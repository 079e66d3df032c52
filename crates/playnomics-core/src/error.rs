// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for parameter assembly.

use thiserror::Error;

use crate::event::Event;

/// Errors raised before any request is built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
	/// A field the event requires was not supplied (or was empty).
	#[error("{event} requires `{field}`")]
	InvalidArgument { event: Event, field: &'static str },

	/// An event name did not match any known endpoint.
	#[error("unknown event: {0}")]
	UnknownEvent(String),

	/// A transaction type name did not match the fixed enumeration.
	#[error("unknown transaction type: {0}")]
	UnknownTransactionType(String),

	/// A `key=value` argument could not be parsed.
	#[error("malformed argument `{0}`, expected key=value")]
	MalformedArgument(String),
}

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
