use std::time::Duration;

use nse_options_rs::{NseClient, index, report};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "tracing-subscriber")]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let client = NseClient::builder()
        .timeout(Duration::from_secs(15))
        .cache_ttl(Duration::from_secs(60))
        .build()?;

    let symbols = index::index_constituents(&client, "NIFTY 50").await?;
    if symbols.is_empty() {
        println!("⚠️ Error fetching NIFTY stocks.");
        return Ok(());
    }
    println!("Scanning {} symbols...", symbols.len());

    let entries = index::scan(&client, symbols, index::DEFAULT_SCAN_CONCURRENCY).await;

    // Each chunk fits in one chat message.
    for (i, message) in report::format_scan(&entries).iter().enumerate() {
        println!("--- message {} ---\n{message}", i + 1);
    }

    Ok(())
}
