// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Core types for the Playnomics game-analytics API.
//!
//! This crate is pure computation with no I/O. It turns caller-supplied
//! [`EventArgs`] into a [`ParameterSet`] using the per-event field table in
//! [`Event::fields`], and turns a parameter set into a [`SignedRequest`] whose
//! signature the API can recompute.
//!
//! ```
//! use playnomics_core::{assemble, sign_request, Environment, Event, EventArgs};
//!
//! let args = EventArgs::new()
//!     .insert("user_id", 42)
//!     .insert("session_id", 7)
//!     .insert("site", "http://x.com");
//!
//! let params = assemble(Event::SessionStart, "app1", 1000, &args).unwrap();
//! let request = sign_request(Environment::Production, Event::SessionStart.path(), &params, b"s3cr3t");
//!
//! assert!(request
//!     .url
//!     .starts_with("http://api.a.playnomics.net/v1/sessionStart?a=app1&s=7&ss=http%3A%2F%2Fx.com&t=1000&u=42&sig="));
//! ```

pub mod args;
pub mod assemble;
pub mod clock;
pub mod currency;
pub mod error;
pub mod event;
pub mod params;
pub mod sign;
pub mod transaction;
pub mod value;

pub use args::EventArgs;
pub use assemble::assemble;
pub use clock::{Clock, FixedClock, SystemClock};
pub use currency::{CurrencyCategory, TransactionCurrency};
pub use error::{CoreError, Result};
pub use event::{Event, FieldSpec};
pub use params::ParameterSet;
pub use sign::{canonical_query, sign_request, verify_signed_url, Environment, SignedRequest};
pub use transaction::TransactionType;
pub use value::ParamValue;
