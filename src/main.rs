//! Command-line lookup of BCPAO property records.
//!
//! ```bash
//! property_leads "1310 CHERRY HILLS RD NE PALM BAY FL 32905"
//! property_leads --all --limit 5 --json "CHERRY HILLS RD NE"
//! property_leads --all --xlsx leads.xlsx "CHERRY HILLS RD NE"
//! ```
//!
//! Exit codes: 0 on success, 1 on any failure, 2 when the address matched
//! no account or more than one.

use futures::future::try_join_all;
use property_leads::cli::{self, CliArgs};
use property_leads::spreadsheets::{write_accounts_xlsx, ExportError};
use property_leads::{AccountInfo, BcpaoDataFetcher, BcpaoError, FetcherConfig};
use std::process;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Error)]
enum RunError {
    #[error(transparent)]
    Bcpao(#[from] BcpaoError),
    #[error(transparent)]
    Export(#[from] ExportError),
    #[error("Failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = cli::parse_args();

    if let Err(e) = run(&args).await {
        tracing::error!("❌ {e}");
        let code = match &e {
            RunError::Bcpao(err) if err.is_resolution_failure() => 2,
            _ => 1,
        };
        process::exit(code);
    }
}

async fn run(args: &CliArgs) -> Result<(), RunError> {
    let config = FetcherConfig::from_env()?;

    // The client outlives every request made through the fetcher.
    let client = config.build_client()?;
    let fetcher = BcpaoDataFetcher::with_config(client, &config);

    let accounts: Vec<AccountInfo> = if args.all {
        let limit = args.limit.map_or(config.search_limit, |n| n.get());
        let candidates = fetcher
            .find_matching_accounts(&args.address, limit)
            .await?;
        tracing::info!("found {} matching accounts", candidates.len());
        try_join_all(candidates.iter().map(|a| fetcher.get_account_info(*a))).await?
    } else {
        let account = fetcher.find_matching_account(&args.address).await?;
        vec![fetcher.get_account_info(account).await?]
    };

    for info in &accounts {
        if args.json {
            println!("{}", serde_json::to_string_pretty(info)?);
        } else {
            println!("{info:#?}");
        }
    }

    if let Some(path) = &args.xlsx {
        write_accounts_xlsx(&accounts, path)?;
        tracing::info!("✅ wrote {} rows to {}", accounts.len(), path.display());
    }

    Ok(())
}
