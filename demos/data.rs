//! Walks the Data API for one user and the markets found in their positions.
//!
//! Run with tracing enabled:
//! ```sh
//! RUST_LOG=info,hyper_util=off,hyper=off,reqwest=off,h2=off,rustls=off cargo run --example data --features data,tracing
//! ```

use polymarket_gamma_sdk::data::Client;
use polymarket_gamma_sdk::data::types::request::{
    ActivityRequest, ClosedPositionsRequest, HoldersRequest, LiveVolumeRequest,
    OpenInterestRequest, PositionsRequest, TradedRequest, TradesRequest, ValueRequest,
};
use polymarket_gamma_sdk::data::types::{ActivityType, MarketFilter, PositionSortBy};
use polymarket_gamma_sdk::types::{B256, address, b256};
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let client = Client::default();
    let user = address!("56687bf447db6ffa42ffe2204a05edaa20f55839");
    let fallback_market = b256!("dd22472e552920b8438158ea7238bfadfa4f736aa4cee91a6b86c39ead110917");

    match client.health().await {
        Ok(health) => info!(endpoint = "health", status = %health.data),
        Err(e) => error!(endpoint = "health", error = %e),
    }

    let positions = client
        .positions(
            &PositionsRequest::builder()
                .user(user)
                .sort_by(PositionSortBy::Current)
                .limit(10)?
                .build(),
        )
        .await?;
    info!(endpoint = "positions", count = positions.len());

    let markets: Vec<B256> = match positions.first() {
        Some(position) => vec![position.condition_id],
        None => vec![fallback_market],
    };

    let closed = client
        .closed_positions(&ClosedPositionsRequest::builder().user(user).limit(5)?.build())
        .await?;
    info!(endpoint = "closed_positions", count = closed.len());

    let trades = client
        .trades(
            &TradesRequest::builder()
                .filter(MarketFilter::markets(markets.clone()))
                .limit(5)?
                .build(),
        )
        .await?;
    info!(endpoint = "trades", count = trades.len());

    let activity = client
        .activity(
            &ActivityRequest::builder()
                .user(user)
                .activity_types(vec![ActivityType::Trade, ActivityType::Redeem])
                .limit(5)?
                .build(),
        )
        .await?;
    info!(endpoint = "activity", count = activity.len());

    let holders = client
        .holders(
            &HoldersRequest::builder()
                .markets(markets.clone())
                .limit(5)?
                .build(),
        )
        .await?;
    for group in &holders {
        info!(endpoint = "holders", token = %group.token, count = group.holders.len());
    }

    let value = client
        .value(&ValueRequest::builder().user(user).build())
        .await?;
    info!(endpoint = "value", value = ?value.first().map(|v| v.value));

    let traded = client
        .traded(&TradedRequest::builder().user(user).build())
        .await?;
    info!(endpoint = "traded", markets = traded.traded);

    let interest = client
        .open_interest(&OpenInterestRequest::builder().markets(markets).build())
        .await?;
    info!(endpoint = "open_interest", count = interest.len());

    match client
        .live_volume(&LiveVolumeRequest::builder().id(16_167).build())
        .await
    {
        Ok(volume) => info!(endpoint = "live_volume", total = ?volume.first().map(|v| v.total)),
        Err(e) => error!(endpoint = "live_volume", error = %e),
    }

    Ok(())
}
