//! Walks the Gamma API: lists first, then lookups keyed by ids found in the lists.
//!
//! Run with tracing enabled:
//! ```sh
//! RUST_LOG=info,hyper_util=off,hyper=off,reqwest=off,h2=off,rustls=off cargo run --example gamma --features gamma,tracing
//! ```
//!
//! Optionally log to a file:
//! ```sh
//! LOG_FILE=gamma.log RUST_LOG=info cargo run --example gamma --features gamma,tracing
//! ```

use std::fs::File;

use polymarket_gamma_sdk::gamma::Client;
use polymarket_gamma_sdk::gamma::types::ParentEntityType;
use polymarket_gamma_sdk::gamma::types::request::{
    CommentsRequest, EventByIdRequest, EventBySlugRequest, EventTagsRequest, EventsRequest,
    MarketBySlugRequest, MarketsRequest, RelatedTagsBySlugRequest, SearchRequest,
    SeriesListRequest, TagBySlugRequest, TagsRequest, TeamsRequest,
};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::util::SubscriberInitExt as _;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Ok(path) = std::env::var("LOG_FILE") {
        let file = File::create(path)?;
        tracing_subscriber::registry()
            .with(EnvFilter::from_default_env())
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(file)
                    .with_ansi(false),
            )
            .init();
    } else {
        tracing_subscriber::fmt::init();
    }

    let client = Client::default();

    match client.status().await {
        Ok(status) => info!(endpoint = "status", %status),
        Err(e) => error!(endpoint = "status", error = %e),
    }

    match client.teams(&TeamsRequest::builder().limit(3).build()).await {
        Ok(teams) => info!(endpoint = "teams", count = teams.len()),
        Err(e) => error!(endpoint = "teams", error = %e),
    }

    let tag_slug = match client.tags(&TagsRequest::builder().limit(5).build()).await {
        Ok(tags) => {
            info!(endpoint = "tags", count = tags.len());
            tags.into_iter().find_map(|tag| tag.slug)
        }
        Err(e) => {
            error!(endpoint = "tags", error = %e);
            None
        }
    };

    if let Some(slug) = tag_slug {
        let tag = client
            .tag_by_slug(&TagBySlugRequest::builder().slug(&slug).build())
            .await?;
        info!(endpoint = "tag_by_slug", %slug, found = tag.is_some());

        let related = client
            .tags_related_to_tag_by_slug(&RelatedTagsBySlugRequest::builder().slug(&slug).build())
            .await?;
        info!(endpoint = "tags_related_to_tag_by_slug", %slug, count = related.len());
    }

    let request = EventsRequest::builder().limit(5).build();
    let events = client.active_events(&request).await?;
    info!(endpoint = "active_events", count = events.len());

    for event in &events {
        for market in &event.markets {
            info!(
                event = %event.id,
                market = %market.id,
                outcomes = ?market.outcomes,
                prices = ?market.outcome_prices,
                tokens = market.clob_token_ids.len(),
            );
        }
    }

    if let Some(event) = events.first() {
        let by_id = client
            .event_by_id(&EventByIdRequest::builder().id(&event.id).build())
            .await?;
        info!(endpoint = "event_by_id", id = %event.id, found = by_id.is_some());

        let tags = client
            .event_tags(&EventTagsRequest::builder().id(&event.id).build())
            .await?;
        info!(endpoint = "event_tags", id = %event.id, count = tags.len());

        if let Ok(parent_entity_id) = event.id.parse::<i64>() {
            let comments = client
                .comments(
                    &CommentsRequest::builder()
                        .parent_entity_type(ParentEntityType::Event)
                        .parent_entity_id(parent_entity_id)
                        .limit(5)
                        .build(),
                )
                .await?;
            info!(endpoint = "comments", id = %event.id, count = comments.len());
        }
    }

    let missing = client
        .event_by_slug(
            &EventBySlugRequest::builder()
                .slug("this-event-does-not-exist")
                .build(),
        )
        .await?;
    info!(endpoint = "event_by_slug", found = missing.is_some());

    let page = client
        .events_pagination(&EventsRequest::builder().limit(2).offset(0).build())
        .await?;
    info!(
        endpoint = "events_pagination",
        count = page.data.len(),
        has_more = page.pagination.has_more
    );

    let markets = client
        .closed_markets(&MarketsRequest::builder().limit(3).build())
        .await?;
    info!(endpoint = "closed_markets", count = markets.len());

    if let Some(slug) = markets.iter().find_map(|market| market.slug.clone()) {
        match client
            .market_by_slug(&MarketBySlugRequest::builder().slug(&slug).build())
            .await
        {
            Ok(Some(market)) => info!(endpoint = "market_by_slug", %slug, outcomes = ?market.outcomes),
            Ok(None) => warn!(endpoint = "market_by_slug", %slug, "not found"),
            Err(e) => error!(endpoint = "market_by_slug", %slug, error = %e),
        }
    }

    let series = client
        .series(&SeriesListRequest::builder().limit(2).build())
        .await?;
    info!(endpoint = "series", count = series.len());

    let results = client
        .search(&SearchRequest::builder().q("election").limit_per_type(3).build())
        .await?;
    info!(
        endpoint = "search",
        events = results.events.map_or(0, |events| events.len()),
        tags = results.tags.map_or(0, |tags| tags.len()),
    );

    Ok(())
}
