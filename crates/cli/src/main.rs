//! Dhanvantari CLI - browse the catalog and run checkouts from a terminal.
//!
//! # Usage
//!
//! ```bash
//! # List herbs in the Immune category matching "tulsi"
//! dv-cli herbs --category immune --query tulsi
//!
//! # List featured products as JSON
//! dv-cli products --json
//!
//! # Place an order against the simulated payment provider
//! dv-cli checkout --product tulsi-kit --name "Anjali Sharma" \
//!     --email anjali@example.com --phone 9876543210 --address "123 Park Street" \
//!     --city Mumbai --state Maharashtra --zip 400001
//!
//! # Try a declined card
//! dv-cli checkout ... --card "4000 0000 0000 0002"
//! ```
//!
//! # Commands
//!
//! - `herbs` - Filter herbs by category and search query
//! - `articles` - Search learn-tab articles
//! - `products` - List featured products
//! - `checkout` - Run the full shipping, payment and confirmation flow

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use dhanvantari_storefront::config::StorefrontConfig;
use dhanvantari_storefront::error::Result;
use dhanvantari_storefront::state::AppState;
use sentry::integrations::tracing as sentry_tracing;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

use commands::checkout::CheckoutArgs;

#[derive(Parser)]
#[command(name = "dv-cli")]
#[command(author, version, about = "Dhanvantari Vatika storefront CLI")]
struct Cli {
    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Filter herbs by category and search query
    Herbs {
        /// Category name (e.g. Immune, Brain); omit for all
        #[arg(short, long, default_value = "All")]
        category: String,

        /// Free-text search over name, scientific name and description
        #[arg(short, long, default_value = "")]
        query: String,
    },
    /// Search articles
    Articles {
        /// Free-text search over title, author and summary
        #[arg(short, long, default_value = "")]
        query: String,
    },
    /// List featured products
    Products,
    /// Place an order using the simulated payment provider
    Checkout(CheckoutArgs),
}

/// Initialize Sentry error tracking and return guard that must be kept alive.
fn init_sentry(config: &StorefrontConfig) -> Option<sentry::ClientInitGuard> {
    let dsn = config.sentry_dsn.as_ref()?;

    let guard = sentry::init((
        dsn.as_str(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            environment: config
                .sentry_environment
                .clone()
                .map(std::borrow::Cow::Owned),
            sample_rate: config.sentry_sample_rate,
            attach_stacktrace: true,
            ..Default::default()
        },
    ));

    tracing::info!("Sentry initialized");
    Some(guard)
}

/// Filter tracing events to Sentry event types.
fn sentry_event_filter(metadata: &tracing::Metadata<'_>) -> sentry_tracing::EventFilter {
    match *metadata.level() {
        tracing::Level::ERROR | tracing::Level::WARN => sentry_tracing::EventFilter::Event,
        tracing::Level::INFO | tracing::Level::DEBUG => sentry_tracing::EventFilter::Breadcrumb,
        _ => sentry_tracing::EventFilter::Ignore,
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Load configuration from environment (needed for Sentry init)
    let config = match StorefrontConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            #[allow(clippy::print_stderr)]
            {
                eprintln!("Failed to load configuration: {e}");
            }
            return ExitCode::FAILURE;
        }
    };

    // Initialize Sentry (must be done before tracing subscriber)
    let _sentry_guard = init_sentry(&config);

    // Defaults to info level for our crates if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "dhanvantari_storefront=info,dv_cli=info".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(sentry_tracing::layer().event_filter(sentry_event_filter))
        .init();

    let state = AppState::new(config);

    match run(cli, &state).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            e.report();
            #[allow(clippy::print_stderr)]
            {
                eprintln!("{}", e.user_message());
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli, state: &AppState) -> Result<()> {
    let json = cli.json;
    match cli.command {
        Commands::Herbs { category, query } => {
            commands::catalog::herbs(state, &category, &query, json).await
        }
        Commands::Articles { query } => commands::catalog::articles(state, &query, json).await,
        Commands::Products => commands::catalog::products(state, json),
        Commands::Checkout(args) => commands::checkout::run(state, args, json).await,
    }
}
