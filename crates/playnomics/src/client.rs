// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Playnomics SDK client.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use playnomics_common_config::{load_env, load_flag_env, load_secret_env, SharedSecret};
use playnomics_common_http::{HttpOptions, DEFAULT_TIMEOUT};
use playnomics_core::{
	assemble, sign_request, Clock, Environment, Event, EventArgs, SignedRequest, SystemClock,
};
use tracing::{debug, error, info};

use crate::delivery::Delivery;
use crate::error::{PlaynomicsError, Result};
use crate::transport::{HttpTransport, Transport};

/// SDK version for identification.
const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");
/// SDK name for identification.
const SDK_NAME: &str = "playnomics-rust";

/// Prefix of the environment variables read by [`PlaynomicsClientBuilder::from_env`].
pub const ENV_PREFIX: &str = "PLAYNOMICS";

/// Builder for constructing a PlaynomicsClient.
pub struct PlaynomicsClientBuilder {
	application_id: Option<String>,
	shared_secret: Option<SharedSecret>,
	environment: Environment,
	proxy: Option<String>,
	request_timeout: Duration,
	transport: Option<Arc<dyn Transport>>,
	clock: Option<Arc<dyn Clock>>,
}

impl PlaynomicsClientBuilder {
	/// Creates a new builder targeting production.
	pub fn new() -> Self {
		Self {
			application_id: None,
			shared_secret: None,
			environment: Environment::Production,
			proxy: None,
			request_timeout: DEFAULT_TIMEOUT,
			transport: None,
			clock: None,
		}
	}

	/// Creates a builder from `PLAYNOMICS_*` environment variables.
	///
	/// | Variable | Setting |
	/// |---|---|
	/// | `PLAYNOMICS_APP_ID` | application id |
	/// | `PLAYNOMICS_APP_SECRET` / `PLAYNOMICS_APP_SECRET_FILE` | shared secret |
	/// | `PLAYNOMICS_TEST_MODE` | sandbox when true |
	/// | `PLAYNOMICS_PROXY` | forward proxy |
	///
	/// Unset variables leave the setting untouched, so the result can be
	/// further customised before [`build`](Self::build).
	pub fn from_env() -> Result<Self> {
		Self::from_env_with_prefix(ENV_PREFIX)
	}

	/// Same as [`from_env`](Self::from_env) with a different variable prefix.
	pub fn from_env_with_prefix(prefix: &str) -> Result<Self> {
		let mut builder = Self::new();

		if let Some(id) = load_env(&format!("{prefix}_APP_ID")) {
			builder = builder.application_id(id);
		}
		if let Some(secret) = load_secret_env(&format!("{prefix}_APP_SECRET"))? {
			builder.shared_secret = Some(SharedSecret::from(secret));
		}
		if let Some(test_mode) = load_flag_env(&format!("{prefix}_TEST_MODE"))? {
			builder = builder.test_mode(test_mode);
		}
		if let Some(proxy) = load_env(&format!("{prefix}_PROXY")) {
			builder = builder.proxy(proxy);
		}

		Ok(builder)
	}

	/// Sets the application id issued by Playnomics.
	pub fn application_id(mut self, id: impl Into<String>) -> Self {
		self.application_id = Some(id.into());
		self
	}

	/// Sets the shared secret used to sign every request.
	pub fn shared_secret(mut self, secret: impl Into<SharedSecret>) -> Self {
		self.shared_secret = Some(secret.into());
		self
	}

	/// Sets the target environment. Cannot be changed after `build`.
	pub fn environment(mut self, environment: Environment) -> Self {
		self.environment = environment;
		self
	}

	/// Shorthand for `environment(Environment::Sandbox)` when `true`.
	pub fn test_mode(self, test_mode: bool) -> Self {
		self.environment(Environment::from_test_mode(test_mode))
	}

	/// Routes requests through a forward proxy.
	///
	/// Example: `http://localhost:1088`
	pub fn proxy(mut self, proxy: impl Into<String>) -> Self {
		self.proxy = Some(proxy.into());
		self
	}

	/// Sets the HTTP request timeout.
	pub fn request_timeout(mut self, timeout: Duration) -> Self {
		self.request_timeout = timeout;
		self
	}

	/// Replaces the HTTP transport. Proxy and timeout settings are ignored
	/// when a custom transport is supplied.
	pub fn transport(mut self, transport: impl Transport + 'static) -> Self {
		self.transport = Some(Arc::new(transport));
		self
	}

	/// Replaces the clock used for the `t` parameter.
	pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
		self.clock = Some(Arc::new(clock));
		self
	}

	/// Builds the PlaynomicsClient.
	pub fn build(self) -> Result<PlaynomicsClient> {
		let application_id = self
			.application_id
			.map(|id| id.trim().to_string())
			.filter(|id| !id.is_empty())
			.ok_or(PlaynomicsError::InvalidApplicationId)?;
		let shared_secret = self
			.shared_secret
			.filter(|secret| !secret.is_empty())
			.ok_or(PlaynomicsError::MissingSecret)?;

		if let Some(proxy) = &self.proxy {
			reqwest::Proxy::all(proxy.as_str()).map_err(|source| PlaynomicsError::InvalidProxy {
				proxy: proxy.clone(),
				source,
			})?;
		}

		let transport: Arc<dyn Transport> = match self.transport {
			Some(transport) => transport,
			None => {
				let options = HttpOptions {
					proxy: self.proxy.clone(),
					timeout: self.request_timeout,
				};
				let transport = HttpTransport::new(&options).map_err(|source| {
					PlaynomicsError::Transport {
						url: self.environment.base_url().to_string(),
						source,
					}
				})?;
				Arc::new(transport)
			}
		};
		let clock = self.clock.unwrap_or_else(|| Arc::new(SystemClock));

		info!(
			application_id = %application_id,
			environment = %self.environment,
			base_url = self.environment.base_url(),
			proxy = self.proxy.as_deref().unwrap_or("none"),
			sdk_name = SDK_NAME,
			sdk_version = SDK_VERSION,
			"Playnomics client initialized"
		);

		Ok(PlaynomicsClient {
			inner: Arc::new(PlaynomicsClientInner {
				application_id,
				shared_secret,
				environment: self.environment,
				transport,
				clock,
			}),
		})
	}
}

impl Default for PlaynomicsClientBuilder {
	fn default() -> Self {
		Self::new()
	}
}

/// Internal client state.
struct PlaynomicsClientInner {
	application_id: String,
	shared_secret: SharedSecret,
	environment: Environment,
	transport: Arc<dyn Transport>,
	clock: Arc<dyn Clock>,
}

/// Client for the Playnomics tracking API.
///
/// Every call assembles the event's parameters, signs them and performs one
/// blocking GET before returning. Missing required fields fail with
/// [`PlaynomicsError::InvalidArgument`] before anything is sent; delivery
/// problems come back as [`Delivery::Failed`].
///
/// # Example
///
/// ```no_run
/// use playnomics::{EventArgs, PlaynomicsClient};
///
/// let client = PlaynomicsClient::builder()
///     .application_id("app1")
///     .shared_secret("s3cr3t")
///     .test_mode(true)
///     .build()?;
///
/// let delivery = client.session_start(
///     &EventArgs::new()
///         .insert("user_id", 42)
///         .insert("session_id", 7)
///         .insert("site", "http://x.com"),
/// )?;
///
/// if !delivery.is_delivered() {
///     eprintln!("not delivered: {}", delivery.url());
/// }
/// # Ok::<(), playnomics::PlaynomicsError>(())
/// ```
#[derive(Clone)]
pub struct PlaynomicsClient {
	inner: Arc<PlaynomicsClientInner>,
}

impl PlaynomicsClient {
	/// Creates a new builder for configuring the client.
	pub fn builder() -> PlaynomicsClientBuilder {
		PlaynomicsClientBuilder::new()
	}

	pub fn application_id(&self) -> &str {
		&self.inner.application_id
	}

	pub fn environment(&self) -> Environment {
		self.inner.environment
	}

	/// Assembles and signs a request without sending it.
	pub fn sign(&self, event: Event, args: &EventArgs) -> Result<SignedRequest> {
		let timestamp = self.inner.clock.unix_timestamp();
		let params = assemble(event, &self.inner.application_id, timestamp, args)?;
		let request = sign_request(
			self.inner.environment,
			event.path(),
			&params,
			self.inner.shared_secret.expose(),
		);

		debug!(
			event = %event,
			path = %request.path,
			params = params.len(),
			"Signed request"
		);

		Ok(request)
	}

	/// Signs and sends one event.
	pub fn track(&self, event: Event, args: &EventArgs) -> Result<Delivery> {
		let request = self.sign(event, args)?;

		match self.inner.transport.get(&request.url) {
			Ok(body) => {
				debug!(event = %event, url = %request.url, "Event delivered");
				Ok(Delivery::Delivered { request, body })
			}
			Err(err) => {
				error!(event = %event, url = %request.url, error = %err, "Failed to deliver event");
				Ok(Delivery::Failed {
					request,
					error: err,
				})
			}
		}
	}

	/// Requires `user_id`, `session_id`. Optional: `site`.
	pub fn session_start(&self, args: &EventArgs) -> Result<Delivery> {
		self.track(Event::SessionStart, args)
	}

	/// Requires `user_id`, `session_id`. Optional: `reason`.
	pub fn session_end(&self, args: &EventArgs) -> Result<Delivery> {
		self.track(Event::SessionEnd, args)
	}

	/// Requires `user_id`. Optional: `instance_id`, `session_id`, `site`,
	/// `game_id`, `type`.
	pub fn game_start(&self, args: &EventArgs) -> Result<Delivery> {
		self.track(Event::GameStart, args)
	}

	/// Requires `user_id`, `instance_id`. Optional: `session_id`, `reason`.
	pub fn game_end(&self, args: &EventArgs) -> Result<Delivery> {
		self.track(Event::GameEnd, args)
	}

	/// Requires `user_id`, `transaction_id`, `type`. Optional: `item_id`,
	/// `quantity`, `other_user_id` and any number of currencies.
	pub fn transaction(&self, args: &EventArgs) -> Result<Delivery> {
		self.track(Event::Transaction, args)
	}

	/// Requires `user_id`, `milestone_id`, `milestone_name`.
	pub fn milestone(&self, args: &EventArgs) -> Result<Delivery> {
		self.track(Event::Milestone, args)
	}

	/// Requires `user_id`. Optional: `country`, `subdivision`, `sex`,
	/// `birth_year`, `source`, `source_campaign`, `source_user`,
	/// `install_time`.
	pub fn user_info(&self, args: &EventArgs) -> Result<Delivery> {
		self.track(Event::UserInfo, args)
	}

	/// Requires `user_id`, `invitation_id`. Optional: `recipient_user_id`,
	/// `recipient_address`, `method`.
	pub fn invitation_sent(&self, args: &EventArgs) -> Result<Delivery> {
		self.track(Event::InvitationSent, args)
	}

	/// Requires `user_id`, `invitation_id`. Optional: `recipient_user_id`.
	pub fn invitation_response(&self, args: &EventArgs) -> Result<Delivery> {
		self.track(Event::InvitationResponse, args)
	}
}

impl fmt::Debug for PlaynomicsClient {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("PlaynomicsClient")
			.field("application_id", &self.inner.application_id)
			.field("shared_secret", &self.inner.shared_secret)
			.field("environment", &self.inner.environment)
			.finish_non_exhaustive()
	}
}
