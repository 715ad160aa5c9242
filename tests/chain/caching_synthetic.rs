use std::time::Duration;

use nse_options_rs::{CacheMode, Chain};

use crate::common;

#[tokio::test]
async fn cached_body_is_reused() {
    let server = common::setup_server();
    let _home = common::mock_homepage(&server);
    let api = common::mock_equity_chain(
        &server,
        "DEMO",
        common::fixture("option_chain_equities", "DEMO", "json"),
    );

    let client = common::client_builder(&server)
        .cache_ttl(Duration::from_secs(60))
        .build()
        .unwrap();
    assert!(client.cache_enabled());

    let chain = Chain::new(&client, "DEMO");
    let first = chain.snapshot().await.unwrap();
    let second = chain.snapshot().await.unwrap();

    assert_eq!(first, second);
    assert_eq!(api.calls(), 1);
}

#[tokio::test]
async fn refresh_and_bypass_hit_network() {
    let server = common::setup_server();
    let _home = common::mock_homepage(&server);
    let api = common::mock_equity_chain(
        &server,
        "DEMO",
        common::fixture("option_chain_equities", "DEMO", "json"),
    );

    let client = common::client_builder(&server)
        .cache_ttl(Duration::from_secs(60))
        .build()
        .unwrap();

    Chain::new(&client, "DEMO").snapshot().await.unwrap();
    Chain::new(&client, "DEMO")
        .cache_mode(CacheMode::Refresh)
        .snapshot()
        .await
        .unwrap();
    Chain::new(&client, "DEMO")
        .cache_mode(CacheMode::Bypass)
        .snapshot()
        .await
        .unwrap();
    assert_eq!(api.calls(), 3);

    // Refresh wrote the cache again, so a default call is served from it.
    Chain::new(&client, "DEMO").snapshot().await.unwrap();
    assert_eq!(api.calls(), 3);

    client.clear_cache().await;
    Chain::new(&client, "DEMO").snapshot().await.unwrap();
    assert_eq!(api.calls(), 4);
}

#[tokio::test]
async fn no_cache_by_default() {
    let server = common::setup_server();
    let _home = common::mock_homepage(&server);
    let api = common::mock_equity_chain(
        &server,
        "DEMO",
        common::fixture("option_chain_equities", "DEMO", "json"),
    );

    let client = common::client(&server);
    assert!(!client.cache_enabled());
    Chain::new(&client, "DEMO").snapshot().await.unwrap();
    Chain::new(&client, "DEMO").snapshot().await.unwrap();
    assert_eq!(api.calls(), 2);
}
