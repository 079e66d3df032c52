// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Playnomics game-analytics SDK.
//!
//! Reports player sessions, games, transactions, milestones, profile updates
//! and invitations to the Playnomics tracking API. Each call is turned into a
//! signed GET request:
//!
//! ```text
//! http://api.a.playnomics.net/v1/sessionStart?a=app1&s=7&ss=http%3A%2F%2Fx.com&t=1000&u=42&sig=…
//! ```
//!
//! # Example
//!
//! ```no_run
//! use playnomics::{EventArgs, PlaynomicsClient, TransactionCurrency, TransactionType};
//!
//! let client = PlaynomicsClient::builder()
//!     .application_id("app1")
//!     .shared_secret("s3cr3t")
//!     .build()?;
//!
//! client.transaction(
//!     &EventArgs::new()
//!         .insert("user_id", 42)
//!         .insert("transaction_id", 17)
//!         .insert("type", TransactionType::CurrencyConvert)
//!         .currency(TransactionCurrency::virtual_currency("coins", 50))
//!         .currency(TransactionCurrency::real_currency("USD", -1)),
//! )?;
//! # Ok::<(), playnomics::PlaynomicsError>(())
//! ```

mod client;
mod delivery;
mod error;
mod transport;

pub use client::{PlaynomicsClient, PlaynomicsClientBuilder, ENV_PREFIX};
pub use delivery::Delivery;
pub use error::{PlaynomicsError, Result, TransportError};
pub use transport::{HttpTransport, Transport};

pub use playnomics_common_config::SharedSecret;
pub use playnomics_core::{
	CurrencyCategory, Clock, Environment, Event, EventArgs, FixedClock, ParamValue, SignedRequest,
	SystemClock, TransactionCurrency, TransactionType,
};
