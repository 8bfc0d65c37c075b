#![allow(
    clippy::module_name_repetitions,
    reason = "Request suffix is intentional for clarity"
)]

//! Data API filters.
//!
//! Query names are camelCase and multi-valued filters are sent as a single
//! comma-joined value (`market=0xab..,0xcd..`). Page sizes and offsets are
//! range-checked by the builders, which return [`BoundedIntError`] instead of
//! letting the API reject the request.

use bon::Builder;
use serde::Serialize;
use serde_with::{StringWithSeparator, formats::CommaSeparator, serde_as, skip_serializing_none};

use super::{
    ActivitySortBy, ActivityType, BoundedIntError, ClosedPositionSortBy, MarketFilter,
    PositionSortBy, Side, SortDirection, TradeFilter,
};
use crate::query::{QueryField, is_zero, query_schema};
use crate::types::{Address, B256, Decimal};

fn validate_bound(
    value: i32,
    min: i32,
    max: i32,
    param_name: &'static str,
) -> Result<i32, BoundedIntError> {
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(BoundedIntError::new(value, min, max, param_name))
    }
}

/// `market` and `eventId` are dropped when the filter is unset or lists nothing.
#[expect(clippy::ref_option, reason = "Need an explicit reference for serde")]
fn filter_is_none_or_empty(filter: &Option<MarketFilter>) -> bool {
    filter.as_ref().is_none_or(MarketFilter::is_empty)
}

/// Filter for `/positions`.
///
/// ```
/// use polymarket_gamma_sdk::data::types::request::PositionsRequest;
/// use polymarket_gamma_sdk::data::types::{PositionSortBy, SortDirection};
/// use polymarket_gamma_sdk::types::address;
///
/// let request = PositionsRequest::builder()
///     .user(address!("56687bf447db6ffa42ffe2204a05edaa20f55839"))
///     .sort_by(PositionSortBy::CashPnl)
///     .sort_direction(SortDirection::Desc)
///     .limit(50)?
///     .build();
/// # Ok::<(), polymarket_gamma_sdk::data::types::BoundedIntError>(())
/// ```
#[skip_serializing_none]
#[derive(Debug, Clone, Builder, Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct PositionsRequest {
    #[builder(into)]
    pub user: Address,
    #[serde(flatten, skip_serializing_if = "filter_is_none_or_empty")]
    pub filter: Option<MarketFilter>,
    pub size_threshold: Option<Decimal>,
    pub redeemable: Option<bool>,
    pub mergeable: Option<bool>,
    #[builder(with = |v: i32| -> Result<_, BoundedIntError> { validate_bound(v, 0, 500, "limit") })]
    pub limit: Option<i32>,
    #[builder(with = |v: i32| -> Result<_, BoundedIntError> { validate_bound(v, 0, 10_000, "offset") })]
    pub offset: Option<i32>,
    pub sort_by: Option<PositionSortBy>,
    pub sort_direction: Option<SortDirection>,
    /// Title substring; an empty string means no filter.
    #[builder(into, default)]
    #[serde(skip_serializing_if = "is_zero")]
    pub title: String,
}

query_schema!(PositionsRequest => [
    QueryField::required("user"),
    QueryField::omit_if_zero("market").comma_joined(),
    QueryField::omit_if_zero("eventId").comma_joined(),
    QueryField::optional("sizeThreshold"),
    QueryField::optional("redeemable"),
    QueryField::optional("mergeable"),
    QueryField::optional("limit"),
    QueryField::optional("offset"),
    QueryField::optional("sortBy"),
    QueryField::optional("sortDirection"),
    QueryField::omit_if_zero("title"),
]);

/// Filter for `/closed-positions`.
#[skip_serializing_none]
#[derive(Debug, Clone, Builder, Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct ClosedPositionsRequest {
    #[builder(into)]
    pub user: Address,
    #[serde(flatten, skip_serializing_if = "filter_is_none_or_empty")]
    pub filter: Option<MarketFilter>,
    #[builder(into, default)]
    #[serde(skip_serializing_if = "is_zero")]
    pub title: String,
    #[builder(with = |v: i32| -> Result<_, BoundedIntError> { validate_bound(v, 0, 50, "limit") })]
    pub limit: Option<i32>,
    #[builder(with = |v: i32| -> Result<_, BoundedIntError> { validate_bound(v, 0, 100_000, "offset") })]
    pub offset: Option<i32>,
    pub sort_by: Option<ClosedPositionSortBy>,
    pub sort_direction: Option<SortDirection>,
}

query_schema!(ClosedPositionsRequest => [
    QueryField::required("user"),
    QueryField::omit_if_zero("market").comma_joined(),
    QueryField::omit_if_zero("eventId").comma_joined(),
    QueryField::omit_if_zero("title"),
    QueryField::optional("limit"),
    QueryField::optional("offset"),
    QueryField::optional("sortBy"),
    QueryField::optional("sortDirection"),
]);

/// Filter for `/trades`. Every field is optional.
///
/// ```
/// use polymarket_gamma_sdk::data::types::request::TradesRequest;
/// use polymarket_gamma_sdk::data::types::{Side, TradeFilter};
/// use polymarket_gamma_sdk::types::dec;
///
/// let request = TradesRequest::builder()
///     .side(Side::Buy)
///     .trade_filter(TradeFilter::cash(dec!(100)).unwrap())
///     .build();
/// ```
#[skip_serializing_none]
#[derive(Debug, Clone, Builder, Default, Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct TradesRequest {
    #[builder(into)]
    pub user: Option<Address>,
    #[serde(flatten, skip_serializing_if = "filter_is_none_or_empty")]
    pub filter: Option<MarketFilter>,
    #[builder(with = |v: i32| -> Result<_, BoundedIntError> { validate_bound(v, 0, 10_000, "limit") })]
    pub limit: Option<i32>,
    #[builder(with = |v: i32| -> Result<_, BoundedIntError> { validate_bound(v, 0, 10_000, "offset") })]
    pub offset: Option<i32>,
    /// The API assumes `true` when unset.
    pub taker_only: Option<bool>,
    #[serde(flatten)]
    pub trade_filter: Option<TradeFilter>,
    pub side: Option<Side>,
}

query_schema!(TradesRequest => [
    QueryField::optional("user"),
    QueryField::omit_if_zero("market").comma_joined(),
    QueryField::omit_if_zero("eventId").comma_joined(),
    QueryField::optional("limit"),
    QueryField::optional("offset"),
    QueryField::optional("takerOnly"),
    QueryField::optional("filterType"),
    QueryField::optional("filterAmount"),
    QueryField::optional("side"),
]);

/// Filter for `/activity`.
///
/// `start` and `end` are Unix timestamps in seconds.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Builder, Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct ActivityRequest {
    #[builder(into)]
    pub user: Address,
    #[serde(flatten, skip_serializing_if = "filter_is_none_or_empty")]
    pub filter: Option<MarketFilter>,
    #[serde_as(as = "StringWithSeparator::<CommaSeparator, ActivityType>")]
    #[builder(default)]
    #[serde(rename = "type", skip_serializing_if = "Vec::is_empty")]
    pub activity_types: Vec<ActivityType>,
    #[builder(with = |v: i32| -> Result<_, BoundedIntError> { validate_bound(v, 0, 500, "limit") })]
    pub limit: Option<i32>,
    #[builder(with = |v: i32| -> Result<_, BoundedIntError> { validate_bound(v, 0, 10_000, "offset") })]
    pub offset: Option<i32>,
    pub start: Option<u64>,
    pub end: Option<u64>,
    pub sort_by: Option<ActivitySortBy>,
    pub sort_direction: Option<SortDirection>,
    /// Only meaningful together with [`ActivityType::Trade`].
    pub side: Option<Side>,
}

query_schema!(ActivityRequest => [
    QueryField::required("user"),
    QueryField::omit_if_zero("market").comma_joined(),
    QueryField::omit_if_zero("eventId").comma_joined(),
    QueryField::omit_if_zero("type").comma_joined(),
    QueryField::optional("limit"),
    QueryField::optional("offset"),
    QueryField::optional("start"),
    QueryField::optional("end"),
    QueryField::optional("sortBy"),
    QueryField::optional("sortDirection"),
    QueryField::optional("side"),
]);

/// Filter for `/holders`. `markets` is always sent, even when empty.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Builder, Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct HoldersRequest {
    #[serde_as(as = "StringWithSeparator::<CommaSeparator, B256>")]
    #[serde(rename = "market")]
    pub markets: Vec<B256>,
    #[builder(with = |v: i32| -> Result<_, BoundedIntError> { validate_bound(v, 0, 500, "limit") })]
    pub limit: Option<i32>,
    #[builder(with = |v: i32| -> Result<_, BoundedIntError> { validate_bound(v, 0, 999_999, "min_balance") })]
    pub min_balance: Option<i32>,
}

query_schema!(HoldersRequest => [
    QueryField::required("market").comma_joined(),
    QueryField::optional("limit"),
    QueryField::optional("minBalance"),
]);

/// Filter for `/value`.
#[serde_as]
#[derive(Debug, Clone, Builder, Serialize)]
#[non_exhaustive]
pub struct ValueRequest {
    #[builder(into)]
    pub user: Address,
    #[serde_as(as = "StringWithSeparator::<CommaSeparator, B256>")]
    #[builder(default)]
    #[serde(rename = "market", skip_serializing_if = "Vec::is_empty")]
    pub markets: Vec<B256>,
}

query_schema!(ValueRequest => [
    QueryField::required("user"),
    QueryField::omit_if_zero("market").comma_joined(),
]);

/// Filter for `/traded`.
#[derive(Debug, Clone, Builder, Serialize)]
#[non_exhaustive]
pub struct TradedRequest {
    #[builder(into)]
    pub user: Address,
}

query_schema!(TradedRequest => [QueryField::required("user")]);

/// Filter for `/oi`. Without markets the API reports every market.
#[serde_as]
#[derive(Debug, Clone, Builder, Default, Serialize)]
#[non_exhaustive]
pub struct OpenInterestRequest {
    #[serde_as(as = "StringWithSeparator::<CommaSeparator, B256>")]
    #[builder(default)]
    #[serde(rename = "market", skip_serializing_if = "Vec::is_empty")]
    pub markets: Vec<B256>,
}

query_schema!(OpenInterestRequest => [QueryField::omit_if_zero("market").comma_joined()]);

/// Filter for `/live-volume`; `id` is the event id.
#[derive(Debug, Clone, Builder, Serialize)]
#[non_exhaustive]
pub struct LiveVolumeRequest {
    pub id: u64,
}

query_schema!(LiveVolumeRequest => [QueryField::required("id")]);
