// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Shared HTTP utilities for the Playnomics SDK.
//!
//! This crate provides a pre-configured blocking HTTP client with a
//! consistent User-Agent header, request timeout and optional forward proxy.

mod client;

pub use client::{builder, new_client, user_agent, HttpOptions, DEFAULT_TIMEOUT};
