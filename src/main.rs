// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;
use tracing::info;

use xssprobe::analyzer::XssAnalyzer;
use xssprobe::config::AnalyzerConfig;
use xssprobe::http_client::HttpClient;

/// Single-page XSS security analyzer
#[derive(Parser, Debug)]
#[command(name = "xssprobe", version, about)]
struct Cli {
    /// Target page URL; its query parameters and forms are probed
    target: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 10)]
    timeout: u64,

    /// Retries per request
    #[arg(long, default_value_t = 2)]
    retries: u32,

    /// Concurrent in-flight probe requests
    #[arg(long, default_value_t = 16)]
    concurrency: usize,

    /// Overall probe deadline in seconds
    #[arg(long, default_value_t = 60)]
    deadline: u64,

    /// Check every form payload for reflection, not only the last one
    #[arg(long)]
    per_payload_forms: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    let config = AnalyzerConfig {
        timeout_secs: cli.timeout,
        max_retries: cli.retries,
        probe_concurrency: cli.concurrency,
        probe_deadline_secs: cli.deadline,
        check_every_payload: cli.per_payload_forms,
    };

    let http_client = Arc::new(HttpClient::new(config.timeout_secs, config.max_retries)?);

    info!("fetching {}", cli.target);
    let page = http_client
        .get(&cli.target)
        .await
        .context("failed to fetch target page")?;

    let analyzer = XssAnalyzer::with_client(Arc::clone(&http_client), config);
    let report = analyzer
        .analyze(&cli.target, &page.headers, &page.body)
        .await?;

    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
