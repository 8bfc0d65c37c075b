#![allow(
    clippy::module_name_repetitions,
    reason = "Response suffix is intentional for clarity"
)]

use bon::Builder;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnNull, NoneAsEmptyString, serde_as};

use crate::serde_helpers::{PolymorphicArray, StringFromAny};
use crate::types::{Address, B256, Decimal};

/// Response of `/events/pagination`: one page of entities plus the continuation flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct Page<T> {
    pub data: Vec<T>,
    pub pagination: Pagination,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct Pagination {
    #[serde(default)]
    #[builder(default)]
    pub has_more: bool,
    pub total_results: Option<i64>,
}

/// Plain text returned by `/status`, `OK` when healthy.
pub type HealthResponse = String;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct Team {
    pub id: i64,
    pub name: Option<String>,
    pub league: Option<String>,
    pub record: Option<String>,
    pub logo: Option<String>,
    pub abbreviation: Option<String>,
    pub alias: Option<String>,
    pub color: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct Tag {
    #[serde_as(as = "StringFromAny")]
    pub id: String,
    pub label: Option<String>,
    pub slug: Option<String>,
    pub force_show: Option<bool>,
    pub force_hide: Option<bool>,
    pub is_carousel: Option<bool>,
    pub published_at: Option<String>,
    pub created_by: Option<i64>,
    pub updated_by: Option<i64>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Edge of the tag graph returned by `/tags/{id}/related-tags`.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct RelatedTag {
    #[serde_as(as = "StringFromAny")]
    pub id: String,
    #[serde_as(as = "Option<StringFromAny>")]
    #[serde(rename = "tagID")]
    pub tag_id: Option<String>,
    #[serde_as(as = "Option<StringFromAny>")]
    #[serde(rename = "relatedTagID")]
    pub related_tag_id: Option<String>,
    pub rank: Option<i32>,
}

/// A market as listed under its parent [`Event`].
///
/// `outcomes`, `outcome_prices` and `clob_token_ids` accept both a JSON array
/// and a JSON-encoded string, and are empty when absent.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct EventMarket {
    pub id: String,
    pub question: Option<String>,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub condition_id: Option<B256>,
    pub slug: Option<String>,
    pub resolution_source: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub image: Option<String>,
    pub icon: Option<String>,
    pub description: Option<String>,
    #[serde_as(as = "PolymorphicArray")]
    #[serde(default)]
    #[builder(default)]
    pub outcomes: Vec<String>,
    #[serde_as(as = "PolymorphicArray")]
    #[serde(default)]
    #[builder(default)]
    pub outcome_prices: Vec<String>,
    #[serde_as(as = "PolymorphicArray")]
    #[serde(default)]
    #[builder(default)]
    pub clob_token_ids: Vec<String>,
    pub liquidity: Option<Decimal>,
    pub volume: Option<Decimal>,
    pub active: Option<bool>,
    pub closed: Option<bool>,
    pub new: Option<bool>,
    pub group_item_title: Option<String>,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub market_maker_address: Option<Address>,
    pub best_bid: Option<Decimal>,
    pub best_ask: Option<Decimal>,
    pub last_trade_price: Option<Decimal>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct Event {
    pub id: String,
    pub ticker: Option<String>,
    pub slug: Option<String>,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub description: Option<String>,
    pub resolution_source: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub creation_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub image: Option<String>,
    pub icon: Option<String>,
    pub active: Option<bool>,
    pub closed: Option<bool>,
    pub archived: Option<bool>,
    pub new: Option<bool>,
    pub featured: Option<bool>,
    pub restricted: Option<bool>,
    pub liquidity: Option<Decimal>,
    pub volume: Option<Decimal>,
    pub open_interest: Option<Decimal>,
    pub volume_24hr: Option<Decimal>,
    pub competitive: Option<Decimal>,
    pub category: Option<String>,
    pub sort_by: Option<String>,
    pub comment_count: Option<i64>,
    pub cyom: Option<bool>,
    pub show_all_outcomes: Option<bool>,
    pub show_market_images: Option<bool>,
    pub enable_neg_risk: Option<bool>,
    pub neg_risk: Option<bool>,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default, rename = "negRiskMarketID")]
    pub neg_risk_market_id: Option<B256>,
    pub series_slug: Option<String>,
    pub closed_time: Option<String>,
    /// Every element is decoded as an [`EventMarket`]; `null` and absent become empty.
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    #[builder(default)]
    pub markets: Vec<EventMarket>,
    pub series: Option<Vec<Series>>,
    pub tags: Option<Vec<Tag>>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// A market as returned by `/markets`.
///
/// The polymorphic list fields behave as on [`EventMarket`].
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct Market {
    pub id: String,
    pub question: Option<String>,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub condition_id: Option<B256>,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default, rename = "questionID")]
    pub question_id: Option<B256>,
    pub slug: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub resolution_source: Option<String>,
    pub image: Option<String>,
    pub icon: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub start_date_iso: Option<NaiveDate>,
    pub end_date_iso: Option<NaiveDate>,
    #[serde_as(as = "PolymorphicArray")]
    #[serde(default)]
    #[builder(default)]
    pub outcomes: Vec<String>,
    #[serde_as(as = "PolymorphicArray")]
    #[serde(default)]
    #[builder(default)]
    pub outcome_prices: Vec<String>,
    #[serde_as(as = "PolymorphicArray")]
    #[serde(default)]
    #[builder(default)]
    pub clob_token_ids: Vec<String>,
    pub liquidity: Option<Decimal>,
    pub liquidity_num: Option<Decimal>,
    pub volume: Option<Decimal>,
    pub volume_num: Option<Decimal>,
    pub volume_24hr: Option<Decimal>,
    pub active: Option<bool>,
    pub closed: Option<bool>,
    pub archived: Option<bool>,
    pub new: Option<bool>,
    pub featured: Option<bool>,
    pub restricted: Option<bool>,
    pub has_reviewed_dates: Option<bool>,
    pub enable_order_book: Option<bool>,
    pub accepting_orders: Option<bool>,
    pub neg_risk: Option<bool>,
    pub order_price_min_tick_size: Option<Decimal>,
    pub order_min_size: Option<Decimal>,
    pub spread: Option<Decimal>,
    pub best_bid: Option<Decimal>,
    pub best_ask: Option<Decimal>,
    pub last_trade_price: Option<Decimal>,
    pub group_item_title: Option<String>,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub market_maker_address: Option<Address>,
    pub closed_time: Option<String>,
    pub events: Option<Vec<Event>>,
    pub tags: Option<Vec<Tag>>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct Series {
    pub id: String,
    pub ticker: Option<String>,
    pub slug: Option<String>,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub series_type: Option<String>,
    pub recurrence: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub icon: Option<String>,
    pub active: Option<bool>,
    pub closed: Option<bool>,
    pub archived: Option<bool>,
    pub new: Option<bool>,
    pub featured: Option<bool>,
    pub restricted: Option<bool>,
    pub volume: Option<Decimal>,
    pub volume_24hr: Option<Decimal>,
    pub liquidity: Option<Decimal>,
    pub competitive: Option<Decimal>,
    pub start_date: Option<DateTime<Utc>>,
    #[serde(rename = "pythTokenID")]
    pub pyth_token_id: Option<String>,
    pub comment_count: Option<i64>,
    pub events: Option<Vec<Event>>,
    pub tags: Option<Vec<Tag>>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct CommentPosition {
    pub token_id: Option<String>,
    pub position_size: Option<Decimal>,
}

#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct CommentProfile {
    pub name: Option<String>,
    pub pseudonym: Option<String>,
    pub display_username_public: Option<bool>,
    pub bio: Option<String>,
    pub is_mod: Option<bool>,
    pub is_creator: Option<bool>,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub proxy_wallet: Option<Address>,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub base_address: Option<Address>,
    pub profile_image: Option<String>,
    pub positions: Option<Vec<CommentPosition>>,
}

#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct Reaction {
    #[serde_as(as = "StringFromAny")]
    pub id: String,
    #[serde(rename = "commentID")]
    pub comment_id: Option<i64>,
    pub reaction_type: Option<String>,
    pub icon: Option<String>,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub user_address: Option<Address>,
    pub created_at: Option<DateTime<Utc>>,
}

#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct Comment {
    #[serde_as(as = "StringFromAny")]
    pub id: String,
    pub body: Option<String>,
    pub parent_entity_type: Option<String>,
    #[serde(rename = "parentEntityID")]
    pub parent_entity_id: Option<i64>,
    #[serde_as(as = "Option<StringFromAny>")]
    #[serde(rename = "parentCommentID")]
    pub parent_comment_id: Option<String>,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub user_address: Option<Address>,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub reply_address: Option<Address>,
    pub profile: Option<CommentProfile>,
    pub reactions: Option<Vec<Reaction>>,
    pub report_count: Option<i64>,
    pub reaction_count: Option<i64>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct SearchTag {
    #[serde_as(as = "Option<StringFromAny>")]
    pub id: Option<String>,
    pub label: Option<String>,
    pub slug: Option<String>,
    pub event_count: Option<i64>,
}

#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct Profile {
    #[serde_as(as = "Option<StringFromAny>")]
    pub id: Option<String>,
    pub name: Option<String>,
    pub pseudonym: Option<String>,
    pub bio: Option<String>,
    pub profile_image: Option<String>,
    pub display_username_public: Option<bool>,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub proxy_wallet: Option<Address>,
}

/// Response of `/public-search`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[non_exhaustive]
pub struct SearchResults {
    pub events: Option<Vec<Event>>,
    pub tags: Option<Vec<SearchTag>>,
    pub profiles: Option<Vec<Profile>>,
    pub pagination: Option<Pagination>,
}
