use std::time::Duration;

use nse_options_rs::{Chain, NseClient, report};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "tracing-subscriber")]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let symbol = std::env::args().nth(1).unwrap_or_else(|| "RELIANCE".to_string());

    // 1. A client with a 15-second timeout; the first call warms up the NSE session.
    let client = NseClient::builder()
        .timeout(Duration::from_secs(15))
        .build()?;

    // 2. Fetch the nearest-expiry chain and analyze it.
    let chain = Chain::new(&client, &symbol);
    println!("🔍 Analyzing {} ({:?})...", chain.security().symbol, chain.security().security_type);

    match chain.analyze(None).await {
        Ok(analysis) => println!("{}", report::format_analysis(&analysis)),
        Err(e) => println!("{}", report::format_failure(&symbol.to_uppercase(), &e)),
    }

    Ok(())
}
