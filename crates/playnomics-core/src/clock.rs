// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Request timestamps.

use chrono::Utc;

/// Source of the `t` parameter.
pub trait Clock: Send + Sync {
	/// Seconds since the Unix epoch, in UTC.
	fn unix_timestamp(&self) -> i64;
}

/// Reads the system clock in UTC. The host's local timezone has no effect.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
	fn unix_timestamp(&self) -> i64 {
		Utc::now().timestamp()
	}
}

/// Always returns the same instant. Useful for reproducible signatures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub i64);

impl Clock for FixedClock {
	fn unix_timestamp(&self) -> i64 {
		self.0
	}
}
