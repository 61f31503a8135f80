// ABOUTME: Command-line interface for the FitLife client
// ABOUTME: Dashboard rendering, record listing and logging, and cache maintenance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitLife

//! FitLife CLI.
//!
//! Thin wrapper over the cached client, mostly useful for poking the API and
//! the cache from a terminal. Reads `FITLIFE_ACCESS_TOKEN` for auth and the
//! `FITLIFE_*` configuration variables documented on
//! `config::environment::ClientConfig`.

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use clap::{Parser, Subcommand};
use fitlife_client::api::cached::CachedClient;
use fitlife_client::api::client::ApiClient;
use fitlife_client::cache::factory;
use fitlife_client::config::environment::ClientConfig;
use fitlife_client::logging;
use fitlife_client::models::MetricType;
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "fitlife-cli", about = "FitLife client command-line interface")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show the dashboard summary (streak, weekly activity, BMI, recent feed)
    Dashboard {
        /// User to summarize
        #[arg(long)]
        user_id: Uuid,
    },
    /// List health records
    Records {
        /// User to list records for
        #[arg(long)]
        user_id: Uuid,
        /// Restrict to one metric (e.g. weight, steps)
        #[arg(long)]
        metric: Option<String>,
    },
    /// Log a weight measurement for today
    LogWeight {
        /// User to log for
        #[arg(long)]
        user_id: Uuid,
        /// Weight in kilograms
        #[arg(long)]
        value: f64,
    },
    /// Sign in and print the session
    SignIn {
        /// Account email
        #[arg(long)]
        email: String,
        /// Account password
        #[arg(long)]
        password: String,
    },
    /// Delete every cached entry
    ClearCache,
}

#[tokio::main]
async fn main() -> Result<()> {
    logging::init_from_env()?;

    let config = ClientConfig::from_env();
    config.api.validate().map_err(|e| anyhow::anyhow!("{e}"))?;

    let cache = factory::build(&config.cache).map_err(|e| anyhow::anyhow!("{e}"))?;
    let api = ApiClient::new(config.api.clone());
    if let Ok(token) = std::env::var("FITLIFE_ACCESS_TOKEN") {
        api.set_access_token(token).await;
    }
    let client = CachedClient::with_ttl(api, cache, config.cache.ttl.clone());

    match Cli::parse().command {
        Command::Dashboard { user_id } => {
            let today = Utc::now().date_naive();
            let summary = client.dashboard(user_id, today).await?;
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        Command::Records { user_id, metric } => {
            let metric = metric
                .map(|raw| {
                    raw.parse::<MetricType>()
                        .map_err(|e| anyhow::anyhow!("{e}"))
                })
                .transpose()
                .context("invalid --metric")?;
            let records = client.health_records(user_id, metric).await?;
            println!("{}", serde_json::to_string_pretty(&records)?);
        }
        Command::LogWeight { user_id, value } => {
            let today: NaiveDate = Utc::now().date_naive();
            client
                .create_health_record(user_id, MetricType::Weight, value, today)
                .await?;
            println!("Logged weight: {value}kg on {today}");
        }
        Command::SignIn { email, password } => {
            let session = client.sign_in(&email, &password).await?;
            println!("{}", serde_json::to_string_pretty(&session)?);
        }
        Command::ClearCache => {
            client.clear_cache();
            println!("Cache cleared");
        }
    }

    Ok(())
}
