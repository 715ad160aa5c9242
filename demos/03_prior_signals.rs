use std::collections::HashMap;
use std::time::Duration;

use nse_options_rs::{AnalyticsResult, CacheMode, Chain, NseClient, report};

/// Polls a few symbols and feeds each symbol's previous result back into the engine,
/// so the second and later rounds can produce comparative signals.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "tracing-subscriber")]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let client = NseClient::builder()
        .timeout(Duration::from_secs(15))
        .build()?;

    let symbols = ["NIFTY", "BANKNIFTY", "RELIANCE"];
    let mut prior: HashMap<&str, AnalyticsResult> = HashMap::new();
    let mut ticker = tokio::time::interval(Duration::from_secs(60));

    for round in 1..=3 {
        ticker.tick().await;
        println!("=== round {round} ===");

        for symbol in symbols {
            let chain = Chain::new(&client, symbol).cache_mode(CacheMode::Refresh);
            match chain.analyze(prior.get(symbol)).await {
                Ok(analysis) => {
                    let labels: Vec<String> =
                        analysis.signals.iter().map(ToString::to_string).collect();
                    println!(
                        "{symbol}: spot {:.2}, max pain {}, signals: {}",
                        analysis.spot,
                        analysis.max_pain,
                        labels.join(", ")
                    );
                    prior.insert(symbol, analysis);
                }
                Err(e) => println!("{}", report::format_failure(symbol, &e)),
            }
        }
    }

    Ok(())
}
