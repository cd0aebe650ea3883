mod args;
mod config;

use anyhow::{Context, Result};
use spaceapi_api::NasaClient;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use args::{Command, OPERATIONS, USAGE};
use config::{Config, API_KEY_ENV};

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    init_logging();

    let command = match args::parse_args(std::env::args().skip(1)) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("{}\n\n{}", e, USAGE);
            return ExitCode::from(2);
        }
    };

    match run(command).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("spaceapi=info,spaceapi_api=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(command: Command) -> Result<ExitCode> {
    let mut config = Config::load();

    let (operation, params, strict) = match command {
        Command::Help => {
            println!("{}", USAGE);
            return Ok(ExitCode::SUCCESS);
        }
        Command::List => {
            for (name, params) in OPERATIONS {
                println!("{:<22}{}", name, params);
            }
            return Ok(ExitCode::SUCCESS);
        }
        Command::SaveKey(key) => {
            let path = config.set_api_key(key).context("failed to save API key")?;
            println!("API key saved to {}", path.display());
            return Ok(ExitCode::SUCCESS);
        }
        Command::Call {
            operation,
            params,
            strict,
        } => (operation, params, strict),
    };

    let endpoint = match args::endpoint_for(&operation, params) {
        Ok(endpoint) => endpoint,
        Err(e) => {
            eprintln!("{}\n\n{}", e, USAGE);
            return Ok(ExitCode::from(2));
        }
    };

    let client = build_client(&config)?;
    tracing::debug!(operation = %operation, "calling");

    let body = if strict {
        client
            .fetch(endpoint.as_ref())
            .await
            .with_context(|| format!("{} failed", operation))?
    } else {
        client.fetch_or_empty(endpoint.as_ref()).await
    };

    println!("{}", serde_json::to_string_pretty(&body)?);
    Ok(ExitCode::SUCCESS)
}

fn build_client(config: &Config) -> Result<NasaClient> {
    let api_key = config.resolve_api_key(std::env::var(API_KEY_ENV).ok());
    let client = NasaClient::new(api_key);

    match config.timeout() {
        Some(timeout) => {
            let http = reqwest::Client::builder()
                .timeout(timeout)
                .build()
                .context("failed to build HTTP client")?;
            Ok(client.with_http_client(http))
        }
        None => Ok(client),
    }
}
