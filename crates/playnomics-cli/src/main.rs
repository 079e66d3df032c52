// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

mod demo;

use std::str::FromStr;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::builder::BoolishValueParser;
use clap::{Parser, Subcommand};
use playnomics::{
	Environment, Event, EventArgs, PlaynomicsClient, PlaynomicsClientBuilder, TransactionCurrency,
};
use rust_decimal::Decimal;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Playnomics - sign and send game-analytics events
///
/// Every connection flag falls back to its PLAYNOMICS_* environment variable.
#[derive(Parser, Debug)]
#[command(name = "playnomics", version, about, long_about = None)]
struct Args {
	/// Log level for the playnomics crates (ignored when RUST_LOG is set)
	#[arg(short, long, default_value = "info")]
	log_level: String,

	/// Output logs as JSON
	#[arg(long)]
	json_logs: bool,

	/// Application id
	#[arg(long, env = "PLAYNOMICS_APP_ID")]
	app_id: Option<String>,

	/// Shared secret (PLAYNOMICS_APP_SECRET_FILE is also honoured)
	#[arg(long, env = "PLAYNOMICS_APP_SECRET", hide_env_values = true)]
	app_secret: Option<String>,

	/// Send to the sandbox host; `--test-mode=false` forces production
	#[arg(
		long,
		env = "PLAYNOMICS_TEST_MODE",
		value_parser = BoolishValueParser::new(),
		num_args = 0..=1,
		require_equals = true,
		default_missing_value = "true"
	)]
	test_mode: Option<bool>,

	/// Forward proxy, e.g. http://localhost:1088
	#[arg(long, env = "PLAYNOMICS_PROXY")]
	proxy: Option<String>,

	/// Request timeout in seconds
	#[arg(long, default_value = "30")]
	timeout_secs: u64,

	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
	/// Replay a sample two-player session (sandbox unless --production)
	Demo {
		/// Send the demo to the production host
		#[arg(long)]
		production: bool,

		/// Print the signed URLs without sending them
		#[arg(long)]
		dry_run: bool,
	},

	/// Print the signed URL for an event without sending it
	Sign {
		#[command(flatten)]
		event: EventInput,

		/// Print the full signed request as JSON
		#[arg(long)]
		json: bool,
	},

	/// Sign and send one event
	Send {
		#[command(flatten)]
		event: EventInput,
	},
}

#[derive(clap::Args, Debug)]
struct EventInput {
	/// Event name: sessionStart, session_start or /v1/sessionStart
	event: Event,

	/// Fields as key=value, e.g. user_id=42 site=http://x.com
	#[arg(value_name = "KEY=VALUE")]
	fields: Vec<String>,

	/// Transaction currency as CATEGORY:NAME:AMOUNT, CATEGORY is r or v
	#[arg(long = "currency", value_name = "CATEGORY:NAME:AMOUNT", value_parser = parse_currency)]
	currencies: Vec<TransactionCurrency>,
}

impl EventInput {
	fn args(&self) -> Result<EventArgs> {
		let args = EventArgs::parse_pairs(&self.fields)?;
		Ok(args.currencies_from(self.currencies.iter().cloned()))
	}
}

fn parse_currency(value: &str) -> std::result::Result<TransactionCurrency, String> {
	let mut parts = value.splitn(3, ':');
	let (Some(category), Some(name), Some(amount)) = (parts.next(), parts.next(), parts.next())
	else {
		return Err(format!("expected CATEGORY:NAME:AMOUNT, got `{value}`"));
	};
	if name.is_empty() {
		return Err("currency name is empty".to_string());
	}

	let amount = Decimal::from_str(amount).map_err(|e| format!("invalid amount `{amount}`: {e}"))?;
	match category {
		"r" | "real" => Ok(TransactionCurrency::real_currency(name, amount)),
		"v" | "virtual" => Ok(TransactionCurrency::virtual_currency(name, amount)),
		other => Err(format!("unknown currency category `{other}`, expected r or v")),
	}
}

fn init_tracing(level: &str, json_logs: bool) {
	let filter = EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| EnvFilter::new(format!("playnomics={level}")));

	if json_logs {
		tracing_subscriber::registry()
			.with(filter)
			.with(fmt::layer().json().with_writer(std::io::stderr))
			.init();
	} else {
		tracing_subscriber::registry()
			.with(filter)
			.with(fmt::layer().compact().with_writer(std::io::stderr))
			.init();
	}
}

fn client_builder(args: &Args) -> Result<PlaynomicsClientBuilder> {
	let mut builder = PlaynomicsClientBuilder::from_env()
		.context("failed to read PLAYNOMICS_* environment")?
		.request_timeout(Duration::from_secs(args.timeout_secs));

	if let Some(id) = &args.app_id {
		builder = builder.application_id(id.as_str());
	}
	if let Some(secret) = &args.app_secret {
		builder = builder.shared_secret(secret.as_str());
	}
	if let Some(test_mode) = args.test_mode {
		builder = builder.test_mode(test_mode);
	}
	if let Some(proxy) = &args.proxy {
		builder = builder.proxy(proxy.as_str());
	}

	Ok(builder)
}

fn main() -> Result<()> {
	let args = Args::parse();
	init_tracing(&args.log_level, args.json_logs);

	let builder = client_builder(&args)?;

	match &args.command {
		Command::Demo {
			production,
			dry_run,
		} => {
			let environment = if *production {
				Environment::Production
			} else {
				Environment::Sandbox
			};
			let client = builder
				.environment(environment)
				.build()
				.context("failed to build Playnomics client")?;

			let seed = chrono::Utc::now().timestamp();
			info!(environment = %client.environment(), dry_run, "Starting demo");
			let failed = demo::run(&client, seed, *dry_run)?;
			if failed > 0 {
				bail!("{failed} demo calls were not delivered");
			}
		}
		Command::Sign { event, json } => {
			let client = build(builder)?;
			let request = client.sign(event.event, &event.args()?)?;
			if *json {
				println!("{}", serde_json::to_string_pretty(&request)?);
			} else {
				println!("{}", request.url);
			}
		}
		Command::Send { event } => {
			let client = build(builder)?;
			let body = client
				.track(event.event, &event.args()?)?
				.into_result()?;
			if !body.is_empty() {
				println!("{body}");
			}
		}
	}

	Ok(())
}

fn build(builder: PlaynomicsClientBuilder) -> Result<PlaynomicsClient> {
	builder.build().context("failed to build Playnomics client")
}
