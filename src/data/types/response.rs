//! Entities returned by the Data API.
//!
//! Profile fields the API reports as `""` when unset decode as `None`.

use bon::Builder;
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};
use serde_with::{DefaultOnNull, NoneAsEmptyString, serde_as};

use super::{ActivityType, Side};
use crate::types::{Address, B256, Decimal, U256};

/// Treats `""` and unrecognized values as no side, matching case-insensitively.
fn deserialize_optional_side<'de, D>(deserializer: D) -> Result<Option<Side>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|s| match s.to_uppercase().as_str() {
        "BUY" => Some(Side::Buy),
        "SELL" => Some(Side::Sell),
        _ => None,
    }))
}

/// Market key of `/oi` and `/live-volume` entries.
#[non_exhaustive]
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub enum MarketKey {
    /// Aggregate over every market.
    #[serde(alias = "global", alias = "GLOBAL")]
    Global,
    #[serde(untagged)]
    Market(B256),
}

/// `/` answers `{"data": "OK"}` when healthy.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Builder)]
#[non_exhaustive]
pub struct Health {
    pub data: String,
}

/// An open position, from `/positions`.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct Position {
    pub proxy_wallet: Address,
    pub asset: U256,
    pub condition_id: B256,
    pub size: Decimal,
    pub avg_price: Decimal,
    pub initial_value: Decimal,
    pub current_value: Decimal,
    pub cash_pnl: Decimal,
    pub percent_pnl: Decimal,
    pub total_bought: Decimal,
    pub realized_pnl: Decimal,
    pub percent_realized_pnl: Decimal,
    pub cur_price: Decimal,
    pub redeemable: bool,
    pub mergeable: bool,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    #[builder(default)]
    pub icon: String,
    #[serde(default)]
    #[builder(default)]
    pub event_slug: String,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub event_id: Option<String>,
    pub outcome: String,
    pub outcome_index: i32,
    pub opposite_outcome: String,
    pub opposite_asset: U256,
    /// Absent or `""` for markets without a scheduled end.
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    pub negative_risk: Option<bool>,
}

/// A fully sold or redeemed position, from `/closed-positions`.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct ClosedPosition {
    pub proxy_wallet: Address,
    pub asset: U256,
    pub condition_id: B256,
    pub avg_price: Decimal,
    pub total_bought: Option<Decimal>,
    pub realized_pnl: Decimal,
    pub cur_price: Option<Decimal>,
    /// Unix seconds.
    pub timestamp: Option<i64>,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    #[builder(default)]
    pub icon: String,
    #[serde(default)]
    #[builder(default)]
    pub event_slug: String,
    pub outcome: String,
    pub outcome_index: i32,
    pub opposite_outcome: String,
    pub opposite_asset: U256,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub end_date: Option<String>,
}

/// An executed trade, from `/trades`.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct Trade {
    pub proxy_wallet: Address,
    pub side: Side,
    pub asset: U256,
    pub condition_id: B256,
    pub size: Decimal,
    pub price: Decimal,
    /// Unix seconds.
    pub timestamp: i64,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    #[builder(default)]
    pub icon: String,
    #[serde(default)]
    #[builder(default)]
    pub event_slug: String,
    pub outcome: String,
    pub outcome_index: i32,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub name: Option<String>,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub pseudonym: Option<String>,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub bio: Option<String>,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub profile_image: Option<String>,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub profile_image_optimized: Option<String>,
    pub transaction_hash: B256,
}

/// An on-chain action, from `/activity`.
///
/// Rewards and conversions carry no market, so most market fields are optional.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct Activity {
    pub proxy_wallet: Address,
    pub timestamp: i64,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub condition_id: Option<B256>,
    #[serde(rename = "type")]
    pub activity_type: ActivityType,
    pub size: Decimal,
    pub usdc_size: Decimal,
    pub transaction_hash: B256,
    pub price: Option<Decimal>,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub asset: Option<U256>,
    #[serde(default, deserialize_with = "deserialize_optional_side")]
    pub side: Option<Side>,
    pub outcome_index: Option<i32>,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub title: Option<String>,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub slug: Option<String>,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub icon: Option<String>,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub event_slug: Option<String>,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub outcome: Option<String>,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub name: Option<String>,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub pseudonym: Option<String>,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub profile_image: Option<String>,
}

#[serde_as]
#[derive(Debug, Clone, PartialEq, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct Holder {
    pub proxy_wallet: Address,
    pub asset: U256,
    pub amount: Decimal,
    pub outcome_index: i32,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub name: Option<String>,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub pseudonym: Option<String>,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub bio: Option<String>,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub profile_image: Option<String>,
    pub display_username_public: Option<bool>,
    pub verified: Option<bool>,
}

/// Holders of one outcome token, from `/holders`.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Deserialize, Builder)]
#[non_exhaustive]
pub struct MetaHolder {
    pub token: U256,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    #[builder(default)]
    pub holders: Vec<Holder>,
}

/// Number of distinct markets a user traded, from `/traded`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Builder)]
#[non_exhaustive]
pub struct Traded {
    pub user: Address,
    pub traded: i64,
}

/// Value of a user's open positions in USDC, from `/value`.
#[derive(Debug, Clone, PartialEq, Deserialize, Builder)]
#[non_exhaustive]
pub struct Value {
    pub user: Address,
    pub value: Decimal,
}

/// From `/oi`.
#[derive(Debug, Clone, PartialEq, Deserialize, Builder)]
#[non_exhaustive]
pub struct OpenInterest {
    pub market: MarketKey,
    pub value: Decimal,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Builder)]
#[non_exhaustive]
pub struct MarketVolume {
    pub market: MarketKey,
    pub value: Decimal,
}

/// Event volume with a per-market breakdown, from `/live-volume`.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Deserialize, Builder)]
#[non_exhaustive]
pub struct LiveVolume {
    pub total: Decimal,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    #[builder(default)]
    pub markets: Vec<MarketVolume>,
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;
    use serde_json::json;

    use super::*;
    use crate::types::b256;

    #[test]
    fn activity_should_tolerate_empty_market_fields() -> anyhow::Result<()> {
        let activity: Activity = serde_json::from_value(json!({
            "proxyWallet": "0x56687bf447db6ffa42ffe2204a05edaa20f55839",
            "timestamp": 1_700_000_000,
            "conditionId": "",
            "type": "REWARD",
            "size": 0,
            "usdcSize": "1.25",
            "transactionHash": "0xdd22472e552920b8438158ea7238bfadfa4f736aa4cee91a6b86c39ead110917",
            "asset": "",
            "side": "",
            "title": "",
            "name": "alice"
        }))?;

        assert_eq!(activity.activity_type, ActivityType::Reward);
        assert_eq!(activity.condition_id, None);
        assert_eq!(activity.asset, None);
        assert_eq!(activity.side, None);
        assert_eq!(activity.title, None);
        assert_eq!(activity.name.as_deref(), Some("alice"));
        assert_eq!(activity.usdc_size, dec!(1.25));
        Ok(())
    }

    #[test]
    fn activity_side_should_be_case_insensitive() -> anyhow::Result<()> {
        let side = deserialize_optional_side(json!("sell"))?;

        assert_eq!(side, Some(Side::Sell));
        Ok(())
    }

    #[test]
    fn market_key_should_accept_global() -> anyhow::Result<()> {
        let global: OpenInterest =
            serde_json::from_value(json!({"market": "GLOBAL", "value": 10.5}))?;
        let single: OpenInterest = serde_json::from_value(json!({
            "market": "0xdd22472e552920b8438158ea7238bfadfa4f736aa4cee91a6b86c39ead110917",
            "value": 3
        }))?;

        assert_eq!(global.market, MarketKey::Global);
        assert_eq!(
            single.market,
            MarketKey::Market(b256!(
                "dd22472e552920b8438158ea7238bfadfa4f736aa4cee91a6b86c39ead110917"
            ))
        );
        Ok(())
    }

    #[test]
    fn live_volume_should_default_null_markets() -> anyhow::Result<()> {
        let volume: LiveVolume = serde_json::from_value(json!({"total": 0, "markets": null}))?;

        assert_eq!(volume.total, dec!(0));
        assert!(volume.markets.is_empty(), "null markets decode as empty");
        Ok(())
    }
}
