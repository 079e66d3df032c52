// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Configuration primitives shared by the Playnomics crates.
//!
//! - [`Secret<T>`]: keeps the application shared secret out of logs and
//!   config dumps
//! - [`load_secret_env`]: loads a secret from `VAR` or a file named by
//!   `VAR_FILE`
//! - [`load_env`] / [`load_flag_env`]: plain string and boolean variables

pub mod env;
pub mod secret;

pub use env::{load_env, load_flag_env, load_secret_env, EnvError};
pub use secret::{Secret, SharedSecret, REDACTED};
