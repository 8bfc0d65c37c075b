//! Polymarket Gamma API client and types.
//!
//! **Feature flag:** `gamma`
//!
//! Gamma serves market and event metadata: events and their markets, series,
//! tags, comments, teams and search.
//!
//! | Endpoint | Method |
//! |----------|--------|
//! | `/status` | [`Client::status`] |
//! | `/teams` | [`Client::teams`] |
//! | `/tags`, `/tags/{id}`, `/tags/slug/{slug}` | [`Client::tags`], [`Client::tag_by_id`], [`Client::tag_by_slug`] |
//! | `/tags/{id}/related-tags[/tags]` | [`Client::related_tags_by_id`], [`Client::tags_related_to_tag_by_id`] |
//! | `/tags/slug/{slug}/related-tags[/tags]` | [`Client::related_tags_by_slug`], [`Client::tags_related_to_tag_by_slug`] |
//! | `/events`, `/events/pagination` | [`Client::events`], [`Client::events_pagination`] |
//! | `/events/{id}`, `/events/slug/{slug}`, `/events/{id}/tags` | [`Client::event_by_id`], [`Client::event_by_slug`], [`Client::event_tags`] |
//! | `/markets`, `/markets/{id}`, `/markets/slug/{slug}`, `/markets/{id}/tags` | [`Client::markets`], [`Client::market_by_id`], [`Client::market_by_slug`], [`Client::market_tags`] |
//! | `/series`, `/series/{id}` | [`Client::series`], [`Client::series_by_id`] |
//! | `/comments`, `/comments/{id}`, `/comments/user_address/{address}` | [`Client::comments`], [`Client::comments_by_id`], [`Client::comments_by_user_address`] |
//! | `/public-search` | [`Client::search`] |

pub mod client;
pub mod types;

pub use client::Client;
