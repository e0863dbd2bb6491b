mod output;

use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use pricecheck_client::{HtmlParser, ReqwestFetcher};
use pricecheck_core::{
    CATEGORY_VAR, CheckConfig, Comparison, MAX_PRICE_VAR, MIN_PRICE_VAR, PriceCategory,
    PriceService,
};

#[derive(Parser)]
#[command(name = "pricecheck", version, about = "Compare product prices across online stores")]
struct Cli {
    #[command(flatten)]
    options: CheckOptions,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct CheckOptions {
    /// Product category selecting the plausible price range
    /// (default, electronics, appliances, books, clothing)
    #[arg(short, long, global = true, env = "PRICECHECK_CATEGORY")]
    category: Option<PriceCategory>,

    /// Lowest plausible price (overrides the category bound)
    #[arg(long, global = true, env = "PRICECHECK_MIN_PRICE")]
    min_price: Option<f64>,

    /// Highest plausible price (overrides the category bound)
    #[arg(long, global = true, env = "PRICECHECK_MAX_PRICE")]
    max_price: Option<f64>,

    /// Per-request timeout in seconds
    #[arg(
        short,
        long,
        global = true,
        env = "PRICECHECK_TIMEOUT_SECS",
        default_value_t = 30
    )]
    timeout: u64,

    /// Output format written to stdout
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Csv,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract and validate the price on a single product page
    Extract {
        /// Product page URL
        #[arg(short, long)]
        url: String,
    },

    /// Compare one product's price across several vendors
    Compare {
        /// Product page URLs (repeat for each vendor)
        #[arg(short, long = "url", required = true)]
        urls: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("pricecheck=info".parse()?))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = build_config(&cli.options)?;
    let fetcher = ReqwestFetcher::with_timeout(Duration::from_secs(cli.options.timeout))
        .context("Failed to create HTTP client")?;
    let service = PriceService::with_config(fetcher, HtmlParser, &config);

    match cli.command {
        Commands::Extract { url } => cmd_extract(&service, &url, cli.options.format).await,
        Commands::Compare { urls } => cmd_compare(&service, &urls, cli.options.format).await,
    }
}

/// Resolve the check configuration from the parsed options.
///
/// Options go through the same lookup as `CheckConfig::from_env`, so the
/// category preset and bound overrides are applied in one place.
fn build_config(options: &CheckOptions) -> Result<CheckConfig> {
    CheckConfig::from_lookup(|key| match key {
        CATEGORY_VAR => options.category.map(|c| c.to_string()),
        MIN_PRICE_VAR => options.min_price.map(|v| v.to_string()),
        MAX_PRICE_VAR => options.max_price.map(|v| v.to_string()),
        _ => None,
    })
    .context("Invalid price check configuration")
}

async fn cmd_extract(
    service: &PriceService<ReqwestFetcher, HtmlParser>,
    url: &str,
    format: OutputFormat,
) -> Result<()> {
    match service.check_price(url).await {
        Ok(check) => {
            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&check)?),
                OutputFormat::Csv => {
                    output::write_csv(std::io::stdout(), std::slice::from_ref(&check), &[])?
                }
            }
            Ok(())
        }
        Err(report) => {
            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
                OutputFormat::Csv => {
                    output::write_csv(std::io::stdout(), &[], std::slice::from_ref(&report))?
                }
            }
            anyhow::bail!(
                "Extraction failed ({}): {}",
                report.error_kind,
                report.recovery_suggestion
            )
        }
    }
}

async fn cmd_compare(
    service: &PriceService<ReqwestFetcher, HtmlParser>,
    urls: &[String],
    format: OutputFormat,
) -> Result<()> {
    let report = service.compare_across_vendors(urls).await;

    match &report.comparison {
        Comparison::Summary(summary) => tracing::info!(
            cheapest = %summary.cheapest_vendor,
            min = summary.min_price,
            max = summary.max_price,
            spread_percent = summary.price_spread_percent,
            outliers = ?summary.outliers,
            "Cheapest offer found"
        ),
        Comparison::NoValidPrices => tracing::warn!("No vendor returned a valid price"),
        Comparison::NoData => tracing::warn!("No URLs to compare"),
    }

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Csv => output::write_report_csv(std::io::stdout(), &report)?,
    }

    Ok(())
}
