use std::path::PathBuf;

use clap::Parser;

use brewlist_core::ProductRow;
use brewlist_scraper::client::{DEFAULT_INTER_PAGE_DELAY_MS, DEFAULT_PAGE_SIZE, DEFAULT_TIMEOUT_SECS};
use brewlist_scraper::{locate_category, resolve_city, to_product_row, MagnitClient, COFFEE_CATEGORY};

mod export;

/// Exports in-stock coffee listings from the retail chain's mobile-app API
/// to a semicolon-delimited CSV file.
#[derive(Debug, Parser)]
#[command(name = "brewlist")]
#[command(about = "Export in-stock coffee listings to CSV")]
struct Cli {
    /// Bearer JWT captured from an app session (authorization header).
    #[arg(long, env = "MAGNIT_TOKEN")]
    token: String,

    /// Device id the token was issued to (x-device-id header).
    #[arg(long, env = "MAGNIT_DEVICE_ID")]
    device_id: String,

    /// App version advertised to the API (x-app-version header).
    #[arg(long, env = "MAGNIT_APP_VERSION", default_value = "8.90.0")]
    app_version: String,

    /// User-Agent header value.
    #[arg(long, env = "MAGNIT_UA", default_value = "okhttp/5.1.0")]
    user_agent: String,

    /// City name (Москва / Санкт-Петербург and common variants). Any other
    /// city needs --fias-id.
    #[arg(long)]
    city: Option<String>,

    /// Explicit FIAS UUID of the city, exactly as the mobile app sends it.
    #[arg(long)]
    fias_id: Option<String>,

    /// Output CSV path. Overwritten on every run.
    #[arg(long, default_value = "coffee.csv")]
    out: PathBuf,

    /// Search page size.
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
    limit: u32,

    /// Pause between search pages, in milliseconds.
    #[arg(long, default_value_t = DEFAULT_INTER_PAGE_DELAY_MS)]
    delay_ms: u64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let client = MagnitClient::new(
        &cli.token,
        &cli.device_id,
        &cli.app_version,
        &cli.user_agent,
        DEFAULT_TIMEOUT_SECS,
    )?;

    let city = resolve_city(&client, cli.city.as_deref(), cli.fias_id.as_deref()).await?;
    tracing::info!(city = %city.name, city_id = %city.city_id, fias_id = %city.fias_id, "resolved city");

    let category_id = locate_category(&client, COFFEE_CATEGORY).await?;
    tracing::info!(category_id, "located category");

    let items = client
        .search_in_stock(category_id, &city.city_id, cli.limit, cli.delay_ms)
        .await?;

    let rows: Vec<ProductRow> = items
        .iter()
        .map(|item| to_product_row(item, &city.name))
        .collect();

    export::write_csv(&rows, &cli.out)?;

    println!(
        "OK: city={} (cityId={}, fiasId={}) | exported {} in-stock products -> {}",
        city.name,
        city.city_id,
        city.fias_id,
        rows.len(),
        cli.out.display()
    );
    Ok(())
}
