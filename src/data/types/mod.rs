//! Types for the Data API.
//!
//! Shared enums and filters live here; per-endpoint filters are in
//! [`request`] and decoded entities in [`response`].

use std::fmt;

use serde::de::StdError;
use serde::{Deserialize, Serialize};
use serde_with::{StringWithSeparator, formats::CommaSeparator, serde_as};

use crate::types::{B256, Decimal};

pub mod request;
pub mod response;

/// Side of a trade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, strum_macros::Display)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
#[non_exhaustive]
pub enum Side {
    Buy,
    Sell,
    /// Value not known to this crate, kept verbatim.
    #[serde(untagged)]
    Unknown(String),
}

/// Kind of on-chain activity reported by `/activity`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, strum_macros::Display)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
#[non_exhaustive]
pub enum ActivityType {
    Trade,
    Split,
    Merge,
    Redeem,
    Reward,
    Conversion,
    Yield,
    MakerRebate,
    /// Value not known to this crate, kept verbatim.
    #[serde(untagged)]
    Unknown(String),
}

/// Ordering of `/positions`. The API defaults to [`PositionSortBy::Tokens`].
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, strum_macros::Display,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
#[non_exhaustive]
pub enum PositionSortBy {
    Current,
    Initial,
    #[default]
    Tokens,
    CashPnl,
    PercentPnl,
    Title,
    Resolving,
    Price,
    AvgPrice,
}

/// Ordering of `/closed-positions`. The API defaults to [`ClosedPositionSortBy::RealizedPnl`].
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, strum_macros::Display,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
#[non_exhaustive]
pub enum ClosedPositionSortBy {
    #[default]
    RealizedPnl,
    Title,
    Price,
    AvgPrice,
    Timestamp,
}

/// Ordering of `/activity`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, strum_macros::Display,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
#[non_exhaustive]
pub enum ActivitySortBy {
    #[default]
    Timestamp,
    Tokens,
    Cash,
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, strum_macros::Display,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
#[non_exhaustive]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

/// Unit of a [`TradeFilter`] threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum_macros::Display)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
#[non_exhaustive]
pub enum FilterType {
    Cash,
    Tokens,
}

/// Restricts a query to a set of markets or to the markets of a set of events.
///
/// The API rejects requests carrying both `market` and `eventId`, so the two
/// are variants of one filter. Either list is sent comma-joined.
///
/// ```
/// use polymarket_gamma_sdk::data::types::MarketFilter;
/// use polymarket_gamma_sdk::types::b256;
///
/// let by_markets = MarketFilter::markets([b256!(
///     "dd22472e552920b8438158ea7238bfadfa4f736aa4cee91a6b86c39ead110917"
/// )]);
/// let by_events = MarketFilter::event_ids(["123".to_owned(), "456".to_owned()]);
/// ```
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[non_exhaustive]
pub enum MarketFilter {
    #[serde(rename = "market")]
    Markets(#[serde_as(as = "StringWithSeparator::<CommaSeparator, B256>")] Vec<B256>),
    #[serde(rename = "eventId")]
    EventIds(#[serde_as(as = "StringWithSeparator::<CommaSeparator, String>")] Vec<String>),
}

impl MarketFilter {
    #[must_use]
    pub fn markets<I: IntoIterator<Item = B256>>(ids: I) -> Self {
        Self::Markets(ids.into_iter().collect())
    }

    #[must_use]
    pub fn event_ids<I: IntoIterator<Item = String>>(ids: I) -> Self {
        Self::EventIds(ids.into_iter().collect())
    }

    pub(crate) fn is_empty(&self) -> bool {
        match self {
            Self::Markets(ids) => ids.is_empty(),
            Self::EventIds(ids) => ids.is_empty(),
        }
    }
}

/// A builder argument outside the range the API accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct BoundedIntError {
    pub value: i32,
    pub min: i32,
    pub max: i32,
    pub param_name: &'static str,
}

impl BoundedIntError {
    #[must_use]
    pub const fn new(value: i32, min: i32, max: i32, param_name: &'static str) -> Self {
        Self {
            value,
            min,
            max,
            param_name,
        }
    }
}

impl fmt::Display for BoundedIntError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} must be between {} and {} (got {})",
            self.param_name, self.min, self.max, self.value
        )
    }
}

impl StdError for BoundedIntError {}

/// Minimum size of the trades returned by `/trades`.
///
/// Flattened into the query as `filterType` and `filterAmount`, which the API
/// only honors together.
///
/// ```
/// use polymarket_gamma_sdk::data::types::TradeFilter;
/// use polymarket_gamma_sdk::types::dec;
///
/// let at_least_100_usdc = TradeFilter::cash(dec!(100)).unwrap();
/// assert!(TradeFilter::tokens(dec!(-1)).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct TradeFilter {
    pub filter_type: FilterType,
    pub filter_amount: Decimal,
}

impl TradeFilter {
    /// # Errors
    ///
    /// Returns [`TradeFilterError::NegativeAmount`] if `filter_amount` is below zero.
    pub fn new(filter_type: FilterType, filter_amount: Decimal) -> Result<Self, TradeFilterError> {
        if filter_amount.is_sign_negative() {
            return Err(TradeFilterError::NegativeAmount(filter_amount));
        }
        Ok(Self {
            filter_type,
            filter_amount,
        })
    }

    /// # Errors
    ///
    /// Returns [`TradeFilterError::NegativeAmount`] if `amount` is below zero.
    pub fn cash(amount: Decimal) -> Result<Self, TradeFilterError> {
        Self::new(FilterType::Cash, amount)
    }

    /// # Errors
    ///
    /// Returns [`TradeFilterError::NegativeAmount`] if `amount` is below zero.
    pub fn tokens(amount: Decimal) -> Result<Self, TradeFilterError> {
        Self::new(FilterType::Tokens, amount)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TradeFilterError {
    NegativeAmount(Decimal),
}

impl fmt::Display for TradeFilterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeAmount(amount) => {
                write!(f, "filter amount must be >= 0 (got {amount})")
            }
        }
    }
}

impl StdError for TradeFilterError {}
