#![allow(
    clippy::module_name_repetitions,
    reason = "Request suffix is intentional for clarity"
)]

//! Gamma filters.
//!
//! Optional scalars are omitted from the query while unset and always sent
//! once set, including `Some(0)` and `Some(false)`. List filters are omitted
//! while empty and otherwise sent as one repeated key per element
//! (`id=1&id=2`). Identifiers that belong in the path (`id`, `slug`,
//! `user_address`) never appear in the query.

use bon::Builder;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_with::{DisplayFromStr, serde_as, skip_serializing_none};

use crate::gamma::types::{ParentEntityType, RelatedTagsStatus};
use crate::query::{QueryField, is_zero, query_schema};
use crate::types::{Address, B256, Decimal, U256};

/// Filter for `/teams`.
#[skip_serializing_none]
#[derive(Debug, Clone, Builder, Default, Serialize)]
#[non_exhaustive]
pub struct TeamsRequest {
    pub limit: Option<i32>,
    pub offset: Option<i32>,
    #[builder(into)]
    pub order: Option<String>,
    pub ascending: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub league: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub name: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub abbreviation: Vec<String>,
}

query_schema!(TeamsRequest => [
    QueryField::optional("limit"),
    QueryField::optional("offset"),
    QueryField::optional("order"),
    QueryField::optional("ascending"),
    QueryField::omit_if_zero("league").repeated(),
    QueryField::omit_if_zero("name").repeated(),
    QueryField::omit_if_zero("abbreviation").repeated(),
]);

/// Filter for `/tags`.
#[skip_serializing_none]
#[derive(Debug, Clone, Builder, Default, Serialize)]
#[non_exhaustive]
pub struct TagsRequest {
    pub limit: Option<i32>,
    pub offset: Option<i32>,
    #[builder(into)]
    pub order: Option<String>,
    pub ascending: Option<bool>,
    /// Free text match on the label; an empty string means no search.
    #[serde(skip_serializing_if = "is_zero")]
    #[builder(default, into)]
    pub search: String,
    pub include_template: Option<bool>,
    pub is_carousel: Option<bool>,
}

query_schema!(TagsRequest => [
    QueryField::optional("limit"),
    QueryField::optional("offset"),
    QueryField::optional("order"),
    QueryField::optional("ascending"),
    QueryField::omit_if_zero("search"),
    QueryField::optional("include_template"),
    QueryField::optional("is_carousel"),
]);

#[skip_serializing_none]
#[derive(Debug, Clone, Builder, Serialize)]
#[non_exhaustive]
pub struct TagByIdRequest {
    #[serde(skip_serializing)]
    #[builder(into)]
    pub id: String,
    pub include_template: Option<bool>,
}

query_schema!(TagByIdRequest => [QueryField::optional("include_template")]);

#[skip_serializing_none]
#[derive(Debug, Clone, Builder, Serialize)]
#[non_exhaustive]
pub struct TagBySlugRequest {
    #[serde(skip_serializing)]
    #[builder(into)]
    pub slug: String,
    pub include_template: Option<bool>,
}

query_schema!(TagBySlugRequest => [QueryField::optional("include_template")]);

/// Filter for `/tags/{id}/related-tags` and `/tags/{id}/related-tags/tags`.
#[skip_serializing_none]
#[derive(Debug, Clone, Builder, Serialize)]
#[non_exhaustive]
pub struct RelatedTagsByIdRequest {
    #[serde(skip_serializing)]
    #[builder(into)]
    pub id: String,
    pub omit_empty: Option<bool>,
    pub status: Option<RelatedTagsStatus>,
}

query_schema!(RelatedTagsByIdRequest => [
    QueryField::optional("omit_empty"),
    QueryField::optional("status"),
]);

/// Filter for `/tags/slug/{slug}/related-tags` and `/tags/slug/{slug}/related-tags/tags`.
#[skip_serializing_none]
#[derive(Debug, Clone, Builder, Serialize)]
#[non_exhaustive]
pub struct RelatedTagsBySlugRequest {
    #[serde(skip_serializing)]
    #[builder(into)]
    pub slug: String,
    pub omit_empty: Option<bool>,
    pub status: Option<RelatedTagsStatus>,
}

query_schema!(RelatedTagsBySlugRequest => [
    QueryField::optional("omit_empty"),
    QueryField::optional("status"),
]);

/// Filter for `/events` and `/events/pagination`.
#[skip_serializing_none]
#[derive(Debug, Clone, Builder, Default, Serialize)]
#[non_exhaustive]
pub struct EventsRequest {
    pub limit: Option<i32>,
    pub offset: Option<i32>,
    /// Comma separated sort keys, e.g. `volume24hr`.
    #[builder(into)]
    pub order: Option<String>,
    pub ascending: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub id: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub slug: Vec<String>,
    #[builder(into)]
    pub tag_id: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub exclude_tag_id: Vec<String>,
    #[builder(into)]
    pub tag_slug: Option<String>,
    pub related_tags: Option<bool>,
    pub active: Option<bool>,
    pub closed: Option<bool>,
    pub archived: Option<bool>,
    pub featured: Option<bool>,
    pub cyom: Option<bool>,
    pub include_chat: Option<bool>,
    pub include_template: Option<bool>,
    #[builder(into)]
    pub recurrence: Option<String>,
    pub liquidity_min: Option<Decimal>,
    pub liquidity_max: Option<Decimal>,
    pub volume_min: Option<Decimal>,
    pub volume_max: Option<Decimal>,
    pub start_date_min: Option<DateTime<Utc>>,
    pub start_date_max: Option<DateTime<Utc>>,
    pub end_date_min: Option<DateTime<Utc>>,
    pub end_date_max: Option<DateTime<Utc>>,
}

query_schema!(EventsRequest => [
    QueryField::optional("limit"),
    QueryField::optional("offset"),
    QueryField::optional("order"),
    QueryField::optional("ascending"),
    QueryField::omit_if_zero("id").repeated(),
    QueryField::omit_if_zero("slug").repeated(),
    QueryField::optional("tag_id"),
    QueryField::omit_if_zero("exclude_tag_id").repeated(),
    QueryField::optional("tag_slug"),
    QueryField::optional("related_tags"),
    QueryField::optional("active"),
    QueryField::optional("closed"),
    QueryField::optional("archived"),
    QueryField::optional("featured"),
    QueryField::optional("cyom"),
    QueryField::optional("include_chat"),
    QueryField::optional("include_template"),
    QueryField::optional("recurrence"),
    QueryField::optional("liquidity_min"),
    QueryField::optional("liquidity_max"),
    QueryField::optional("volume_min"),
    QueryField::optional("volume_max"),
    QueryField::optional("start_date_min"),
    QueryField::optional("start_date_max"),
    QueryField::optional("end_date_min"),
    QueryField::optional("end_date_max"),
]);

#[skip_serializing_none]
#[derive(Debug, Clone, Builder, Serialize)]
#[non_exhaustive]
pub struct EventByIdRequest {
    #[serde(skip_serializing)]
    #[builder(into)]
    pub id: String,
    pub include_chat: Option<bool>,
    pub include_template: Option<bool>,
}

query_schema!(EventByIdRequest => [
    QueryField::optional("include_chat"),
    QueryField::optional("include_template"),
]);

#[skip_serializing_none]
#[derive(Debug, Clone, Builder, Serialize)]
#[non_exhaustive]
pub struct EventBySlugRequest {
    #[serde(skip_serializing)]
    #[builder(into)]
    pub slug: String,
    pub include_chat: Option<bool>,
    pub include_template: Option<bool>,
}

query_schema!(EventBySlugRequest => [
    QueryField::optional("include_chat"),
    QueryField::optional("include_template"),
]);

#[derive(Debug, Clone, Builder, Serialize)]
#[non_exhaustive]
pub struct EventTagsRequest {
    #[serde(skip_serializing)]
    #[builder(into)]
    pub id: String,
}

query_schema!(EventTagsRequest => []);

/// Filter for `/markets`.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Builder, Default, Serialize)]
#[non_exhaustive]
pub struct MarketsRequest {
    pub limit: Option<i32>,
    pub offset: Option<i32>,
    #[builder(into)]
    pub order: Option<String>,
    pub ascending: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub id: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub slug: Vec<String>,
    /// Sent in decimal, the form the API expects.
    #[serde_as(as = "Vec<DisplayFromStr>")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub clob_token_ids: Vec<U256>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub condition_ids: Vec<B256>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub market_maker_address: Vec<Address>,
    pub liquidity_num_min: Option<Decimal>,
    pub liquidity_num_max: Option<Decimal>,
    pub volume_num_min: Option<Decimal>,
    pub volume_num_max: Option<Decimal>,
    pub start_date_min: Option<DateTime<Utc>>,
    pub start_date_max: Option<DateTime<Utc>>,
    pub end_date_min: Option<DateTime<Utc>>,
    pub end_date_max: Option<DateTime<Utc>>,
    #[builder(into)]
    pub tag_id: Option<String>,
    pub related_tags: Option<bool>,
    pub cyom: Option<bool>,
    #[builder(into)]
    pub uma_resolution_status: Option<String>,
    #[builder(into)]
    pub game_id: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub sports_market_types: Vec<String>,
    pub rewards_min_size: Option<Decimal>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub question_ids: Vec<B256>,
    pub include_tag: Option<bool>,
    pub closed: Option<bool>,
}

query_schema!(MarketsRequest => [
    QueryField::optional("limit"),
    QueryField::optional("offset"),
    QueryField::optional("order"),
    QueryField::optional("ascending"),
    QueryField::omit_if_zero("id").repeated(),
    QueryField::omit_if_zero("slug").repeated(),
    QueryField::omit_if_zero("clob_token_ids").repeated(),
    QueryField::omit_if_zero("condition_ids").repeated(),
    QueryField::omit_if_zero("market_maker_address").repeated(),
    QueryField::optional("liquidity_num_min"),
    QueryField::optional("liquidity_num_max"),
    QueryField::optional("volume_num_min"),
    QueryField::optional("volume_num_max"),
    QueryField::optional("start_date_min"),
    QueryField::optional("start_date_max"),
    QueryField::optional("end_date_min"),
    QueryField::optional("end_date_max"),
    QueryField::optional("tag_id"),
    QueryField::optional("related_tags"),
    QueryField::optional("cyom"),
    QueryField::optional("uma_resolution_status"),
    QueryField::optional("game_id"),
    QueryField::omit_if_zero("sports_market_types").repeated(),
    QueryField::optional("rewards_min_size"),
    QueryField::omit_if_zero("question_ids").repeated(),
    QueryField::optional("include_tag"),
    QueryField::optional("closed"),
]);

#[skip_serializing_none]
#[derive(Debug, Clone, Builder, Serialize)]
#[non_exhaustive]
pub struct MarketByIdRequest {
    #[serde(skip_serializing)]
    #[builder(into)]
    pub id: String,
    pub include_tag: Option<bool>,
}

query_schema!(MarketByIdRequest => [QueryField::optional("include_tag")]);

#[skip_serializing_none]
#[derive(Debug, Clone, Builder, Serialize)]
#[non_exhaustive]
pub struct MarketBySlugRequest {
    #[serde(skip_serializing)]
    #[builder(into)]
    pub slug: String,
    pub include_tag: Option<bool>,
}

query_schema!(MarketBySlugRequest => [QueryField::optional("include_tag")]);

#[derive(Debug, Clone, Builder, Serialize)]
#[non_exhaustive]
pub struct MarketTagsRequest {
    #[serde(skip_serializing)]
    #[builder(into)]
    pub id: String,
}

query_schema!(MarketTagsRequest => []);

/// Filter for `/series`.
#[skip_serializing_none]
#[derive(Debug, Clone, Builder, Default, Serialize)]
#[non_exhaustive]
pub struct SeriesListRequest {
    pub limit: Option<i32>,
    pub offset: Option<i32>,
    #[builder(into)]
    pub order: Option<String>,
    pub ascending: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub slug: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub categories_ids: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub categories_labels: Vec<String>,
    pub closed: Option<bool>,
    pub include_chat: Option<bool>,
    #[builder(into)]
    pub recurrence: Option<String>,
}

query_schema!(SeriesListRequest => [
    QueryField::optional("limit"),
    QueryField::optional("offset"),
    QueryField::optional("order"),
    QueryField::optional("ascending"),
    QueryField::omit_if_zero("slug").repeated(),
    QueryField::omit_if_zero("categories_ids").repeated(),
    QueryField::omit_if_zero("categories_labels").repeated(),
    QueryField::optional("closed"),
    QueryField::optional("include_chat"),
    QueryField::optional("recurrence"),
]);

#[skip_serializing_none]
#[derive(Debug, Clone, Builder, Serialize)]
#[non_exhaustive]
pub struct SeriesByIdRequest {
    #[serde(skip_serializing)]
    #[builder(into)]
    pub id: String,
    pub include_chat: Option<bool>,
}

query_schema!(SeriesByIdRequest => [QueryField::optional("include_chat")]);

/// Filter for `/comments`. The parent entity is always sent, even when its id is `0`.
#[skip_serializing_none]
#[derive(Debug, Clone, Builder, Serialize)]
#[non_exhaustive]
pub struct CommentsRequest {
    pub parent_entity_type: ParentEntityType,
    pub parent_entity_id: i64,
    pub limit: Option<i32>,
    pub offset: Option<i32>,
    #[builder(into)]
    pub order: Option<String>,
    pub ascending: Option<bool>,
    pub get_positions: Option<bool>,
    pub holders_only: Option<bool>,
}

query_schema!(CommentsRequest => [
    QueryField::required("parent_entity_type"),
    QueryField::required("parent_entity_id"),
    QueryField::optional("limit"),
    QueryField::optional("offset"),
    QueryField::optional("order"),
    QueryField::optional("ascending"),
    QueryField::optional("get_positions"),
    QueryField::optional("holders_only"),
]);

/// Filter for `/comments/{id}`, which returns the comment and its replies.
#[skip_serializing_none]
#[derive(Debug, Clone, Builder, Serialize)]
#[non_exhaustive]
pub struct CommentsByIdRequest {
    #[serde(skip_serializing)]
    #[builder(into)]
    pub id: String,
    pub get_positions: Option<bool>,
}

query_schema!(CommentsByIdRequest => [QueryField::optional("get_positions")]);

#[skip_serializing_none]
#[derive(Debug, Clone, Builder, Serialize)]
#[non_exhaustive]
pub struct CommentsByUserAddressRequest {
    #[serde(skip_serializing)]
    pub user_address: Address,
    pub limit: Option<i32>,
    pub offset: Option<i32>,
    #[builder(into)]
    pub order: Option<String>,
    pub ascending: Option<bool>,
}

query_schema!(CommentsByUserAddressRequest => [
    QueryField::optional("limit"),
    QueryField::optional("offset"),
    QueryField::optional("order"),
    QueryField::optional("ascending"),
]);

/// Filter for `/public-search`. `q` is always sent.
#[skip_serializing_none]
#[derive(Debug, Clone, Builder, Serialize)]
#[non_exhaustive]
pub struct SearchRequest {
    #[builder(into)]
    pub q: String,
    pub cache: Option<bool>,
    #[builder(into)]
    pub events_status: Option<String>,
    pub limit_per_type: Option<i32>,
    pub page: Option<i32>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub events_tag: Vec<String>,
    pub keep_closed_markets: Option<i32>,
    #[builder(into)]
    pub sort: Option<String>,
    pub ascending: Option<bool>,
    pub search_tags: Option<bool>,
    pub search_profiles: Option<bool>,
    #[builder(into)]
    pub recurrence: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub exclude_tag_id: Vec<String>,
    pub optimized: Option<bool>,
}

query_schema!(SearchRequest => [
    QueryField::required("q"),
    QueryField::optional("cache"),
    QueryField::optional("events_status"),
    QueryField::optional("limit_per_type"),
    QueryField::optional("page"),
    QueryField::omit_if_zero("events_tag").repeated(),
    QueryField::optional("keep_closed_markets"),
    QueryField::optional("sort"),
    QueryField::optional("ascending"),
    QueryField::optional("search_tags"),
    QueryField::optional("search_profiles"),
    QueryField::optional("recurrence"),
    QueryField::omit_if_zero("exclude_tag_id").repeated(),
    QueryField::optional("optimized"),
]);

#[cfg(test)]
mod tests {
    use chrono::TimeZone as _;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::ToQueryParams as _;
    use crate::query::conformance::{assert_list_encoding, assert_zero_presence};
    use crate::query::{ListEncoding, Presence, QuerySchema};
    use crate::types::{U256, address};

    fn keys<T: crate::ToQueryParams>(request: &T) -> Vec<String> {
        request
            .query_pairs()
            .expect("encodes")
            .into_iter()
            .map(|(name, _)| name)
            .collect()
    }

    fn assert_declared<T: crate::ToQueryParams>(request: &T) {
        for key in keys(request) {
            assert!(
                T::field(&key).is_some(),
                "{key} is not declared by {}",
                std::any::type_name::<T>()
            );
        }
    }

    #[test]
    fn empty_requests_should_encode_nothing() {
        assert_eq!(EventsRequest::default().query_params().expect("encodes"), "");
        assert_eq!(MarketsRequest::default().query_params().expect("encodes"), "");
        assert_eq!(TagsRequest::default().query_params().expect("encodes"), "");
        assert_eq!(
            EventTagsRequest::builder()
                .id("42")
                .build()
                .query_params()
                .expect("encodes"),
            ""
        );
    }

    #[test]
    fn zero_limit_and_false_flags_should_be_sent() {
        let request = EventsRequest::builder()
            .limit(0)
            .offset(0)
            .closed(false)
            .build();

        assert_eq!(
            request.query_params().expect("encodes"),
            "limit=0&offset=0&closed=false"
        );
    }

    #[test]
    fn empty_search_should_be_omitted() {
        let request = TagsRequest::builder().search("").limit(5).build();
        assert_eq!(request.query_params().expect("encodes"), "limit=5");

        let request = TagsRequest::builder().search("politics").build();
        assert_eq!(request.query_params().expect("encodes"), "search=politics");
    }

    #[test]
    fn path_identifiers_should_not_be_sent() {
        let request = MarketBySlugRequest::builder()
            .slug("will-it-rain")
            .include_tag(true)
            .build();

        assert_eq!(request.query_params().expect("encodes"), "include_tag=true");
    }

    #[test]
    fn markets_lists_should_repeat_keys() {
        let request = MarketsRequest::builder()
            .id(vec!["1".to_owned(), "2".to_owned()])
            .clob_token_ids(vec![U256::from(12_345_u64)])
            .build();

        assert_eq!(
            request.query_params().expect("encodes"),
            "id=1&id=2&clob_token_ids=12345"
        );
    }

    #[test]
    fn events_ranges_should_encode_as_text() {
        let request = EventsRequest::builder()
            .volume_min(dec!(1000.5))
            .start_date_min(
                Utc.with_ymd_and_hms(2024, 11, 5, 0, 0, 0)
                    .single()
                    .expect("valid date"),
            )
            .build();

        let pairs = request.query_pairs().expect("encodes");

        assert_eq!(
            pairs,
            [
                ("volume_min".to_owned(), "1000.5".to_owned()),
                ("start_date_min".to_owned(), "2024-11-05T00:00:00Z".to_owned()),
            ]
        );
    }

    #[test]
    fn comments_parent_should_always_be_sent() {
        let request = CommentsRequest::builder()
            .parent_entity_type(ParentEntityType::Event)
            .parent_entity_id(0)
            .build();

        assert_eq!(
            request.query_params().expect("encodes"),
            "parent_entity_type=Event&parent_entity_id=0"
        );
        assert_eq!(
            CommentsRequest::field("parent_entity_id").map(|f| f.presence),
            Some(Presence::Required)
        );
    }

    #[test]
    fn search_query_should_always_be_sent() {
        let request = SearchRequest::builder().q("").build();

        assert_eq!(request.query_params().expect("encodes"), "q=");
    }

    #[test]
    fn related_tags_status_should_be_lowercase() {
        let request = RelatedTagsBySlugRequest::builder()
            .slug("crypto")
            .status(RelatedTagsStatus::Closed)
            .omit_empty(true)
            .build();

        assert_eq!(
            request.query_params().expect("encodes"),
            "omit_empty=true&status=closed"
        );
    }

    #[test]
    fn schemas_should_cover_every_emitted_key() {
        assert_declared(
            &TeamsRequest::builder()
                .limit(1)
                .offset(1)
                .order("name")
                .ascending(true)
                .league(vec!["NBA".to_owned()])
                .name(vec!["Lakers".to_owned()])
                .abbreviation(vec!["LAL".to_owned()])
                .build(),
        );
        assert_declared(
            &EventsRequest::builder()
                .limit(1)
                .offset(2)
                .order("volume")
                .ascending(false)
                .id(vec!["1".to_owned()])
                .slug(vec!["s".to_owned()])
                .tag_id("2")
                .exclude_tag_id(vec!["3".to_owned()])
                .tag_slug("crypto")
                .related_tags(true)
                .active(true)
                .closed(false)
                .archived(false)
                .featured(true)
                .cyom(false)
                .include_chat(true)
                .include_template(true)
                .recurrence("daily")
                .liquidity_min(dec!(1))
                .liquidity_max(dec!(2))
                .volume_min(dec!(3))
                .volume_max(dec!(4))
                .start_date_min(Utc::now())
                .start_date_max(Utc::now())
                .end_date_min(Utc::now())
                .end_date_max(Utc::now())
                .build(),
        );
        assert_declared(
            &MarketsRequest::builder()
                .limit(1)
                .offset(1)
                .order("volume")
                .ascending(true)
                .id(vec!["1".to_owned()])
                .slug(vec!["s".to_owned()])
                .clob_token_ids(vec![U256::from(1_u8)])
                .condition_ids(vec![B256::ZERO])
                .market_maker_address(vec![address!(
                    "0x0000000000000000000000000000000000000001"
                )])
                .liquidity_num_min(dec!(1))
                .liquidity_num_max(dec!(2))
                .volume_num_min(dec!(1))
                .volume_num_max(dec!(2))
                .start_date_min(Utc::now())
                .start_date_max(Utc::now())
                .end_date_min(Utc::now())
                .end_date_max(Utc::now())
                .tag_id("1")
                .related_tags(true)
                .cyom(true)
                .uma_resolution_status("resolved")
                .game_id("g")
                .sports_market_types(vec!["moneyline".to_owned()])
                .rewards_min_size(dec!(10))
                .question_ids(vec![B256::ZERO])
                .include_tag(true)
                .closed(true)
                .build(),
        );
        assert_declared(
            &SeriesListRequest::builder()
                .limit(1)
                .offset(1)
                .order("volume")
                .ascending(true)
                .slug(vec!["s".to_owned()])
                .categories_ids(vec!["1".to_owned()])
                .categories_labels(vec!["Sports".to_owned()])
                .closed(false)
                .include_chat(true)
                .recurrence("weekly")
                .build(),
        );
        assert_declared(
            &CommentsRequest::builder()
                .parent_entity_type(ParentEntityType::Market)
                .parent_entity_id(1)
                .limit(1)
                .offset(1)
                .order("createdAt")
                .ascending(true)
                .get_positions(true)
                .holders_only(true)
                .build(),
        );
        assert_declared(
            &SearchRequest::builder()
                .q("btc")
                .cache(true)
                .events_status("active")
                .limit_per_type(5)
                .page(1)
                .events_tag(vec!["crypto".to_owned()])
                .keep_closed_markets(0)
                .sort("volume")
                .ascending(true)
                .search_tags(true)
                .search_profiles(true)
                .recurrence("daily")
                .exclude_tag_id(vec!["1".to_owned()])
                .optimized(true)
                .build(),
        );
        assert_declared(
            &TagsRequest::builder()
                .limit(1)
                .offset(1)
                .order("label")
                .ascending(true)
                .search("x")
                .include_template(true)
                .is_carousel(true)
                .build(),
        );
    }

    #[test]
    fn zero_values_should_follow_declared_presence() {
        let epoch = DateTime::<Utc>::UNIX_EPOCH;

        assert_zero_presence(&TeamsRequest {
            limit: Some(0),
            offset: Some(0),
            order: Some(String::new()),
            ascending: Some(false),
            league: Vec::new(),
            name: Vec::new(),
            abbreviation: Vec::new(),
        });
        assert_zero_presence(&TagsRequest {
            limit: Some(0),
            offset: Some(0),
            order: Some(String::new()),
            ascending: Some(false),
            search: String::new(),
            include_template: Some(false),
            is_carousel: Some(false),
        });
        assert_zero_presence(&TagByIdRequest {
            id: String::new(),
            include_template: Some(false),
        });
        assert_zero_presence(&TagBySlugRequest {
            slug: String::new(),
            include_template: Some(false),
        });
        assert_zero_presence(&RelatedTagsByIdRequest {
            id: String::new(),
            omit_empty: Some(false),
            status: Some(RelatedTagsStatus::Active),
        });
        assert_zero_presence(&RelatedTagsBySlugRequest {
            slug: String::new(),
            omit_empty: Some(false),
            status: Some(RelatedTagsStatus::Active),
        });
        assert_zero_presence(&EventsRequest {
            limit: Some(0),
            offset: Some(0),
            order: Some(String::new()),
            ascending: Some(false),
            id: Vec::new(),
            slug: Vec::new(),
            tag_id: Some(String::new()),
            exclude_tag_id: Vec::new(),
            tag_slug: Some(String::new()),
            related_tags: Some(false),
            active: Some(false),
            closed: Some(false),
            archived: Some(false),
            featured: Some(false),
            cyom: Some(false),
            include_chat: Some(false),
            include_template: Some(false),
            recurrence: Some(String::new()),
            liquidity_min: Some(Decimal::ZERO),
            liquidity_max: Some(Decimal::ZERO),
            volume_min: Some(Decimal::ZERO),
            volume_max: Some(Decimal::ZERO),
            start_date_min: Some(epoch),
            start_date_max: Some(epoch),
            end_date_min: Some(epoch),
            end_date_max: Some(epoch),
        });
        assert_zero_presence(&EventByIdRequest {
            id: String::new(),
            include_chat: Some(false),
            include_template: Some(false),
        });
        assert_zero_presence(&EventBySlugRequest {
            slug: String::new(),
            include_chat: Some(false),
            include_template: Some(false),
        });
        assert_zero_presence(&EventTagsRequest { id: String::new() });
        assert_zero_presence(&MarketsRequest {
            limit: Some(0),
            offset: Some(0),
            order: Some(String::new()),
            ascending: Some(false),
            id: Vec::new(),
            slug: Vec::new(),
            clob_token_ids: Vec::new(),
            condition_ids: Vec::new(),
            market_maker_address: Vec::new(),
            liquidity_num_min: Some(Decimal::ZERO),
            liquidity_num_max: Some(Decimal::ZERO),
            volume_num_min: Some(Decimal::ZERO),
            volume_num_max: Some(Decimal::ZERO),
            start_date_min: Some(epoch),
            start_date_max: Some(epoch),
            end_date_min: Some(epoch),
            end_date_max: Some(epoch),
            tag_id: Some(String::new()),
            related_tags: Some(false),
            cyom: Some(false),
            uma_resolution_status: Some(String::new()),
            game_id: Some(String::new()),
            sports_market_types: Vec::new(),
            rewards_min_size: Some(Decimal::ZERO),
            question_ids: Vec::new(),
            include_tag: Some(false),
            closed: Some(false),
        });
        assert_zero_presence(&MarketByIdRequest {
            id: String::new(),
            include_tag: Some(false),
        });
        assert_zero_presence(&MarketBySlugRequest {
            slug: String::new(),
            include_tag: Some(false),
        });
        assert_zero_presence(&MarketTagsRequest { id: String::new() });
        assert_zero_presence(&SeriesListRequest {
            limit: Some(0),
            offset: Some(0),
            order: Some(String::new()),
            ascending: Some(false),
            slug: Vec::new(),
            categories_ids: Vec::new(),
            categories_labels: Vec::new(),
            closed: Some(false),
            include_chat: Some(false),
            recurrence: Some(String::new()),
        });
        assert_zero_presence(&SeriesByIdRequest {
            id: String::new(),
            include_chat: Some(false),
        });
        assert_zero_presence(&CommentsRequest {
            parent_entity_type: ParentEntityType::Event,
            parent_entity_id: 0,
            limit: Some(0),
            offset: Some(0),
            order: Some(String::new()),
            ascending: Some(false),
            get_positions: Some(false),
            holders_only: Some(false),
        });
        assert_zero_presence(&CommentsByIdRequest {
            id: String::new(),
            get_positions: Some(false),
        });
        assert_zero_presence(&CommentsByUserAddressRequest {
            user_address: Address::ZERO,
            limit: Some(0),
            offset: Some(0),
            order: Some(String::new()),
            ascending: Some(false),
        });
        assert_zero_presence(&SearchRequest {
            q: String::new(),
            cache: Some(false),
            events_status: Some(String::new()),
            limit_per_type: Some(0),
            page: Some(0),
            events_tag: Vec::new(),
            keep_closed_markets: Some(0),
            sort: Some(String::new()),
            ascending: Some(false),
            search_tags: Some(false),
            search_profiles: Some(false),
            recurrence: Some(String::new()),
            exclude_tag_id: Vec::new(),
            optimized: Some(false),
        });
    }

    #[test]
    fn lists_should_follow_declared_encoding() {
        let pair = |a: &str, b: &str| vec![a.to_owned(), b.to_owned()];

        assert_list_encoding(
            &TeamsRequest::builder()
                .limit(2)
                .league(pair("NBA", "NFL"))
                .name(pair("Lakers", "Jets"))
                .abbreviation(pair("LAL", "NYJ"))
                .build(),
            &[],
        );
        assert_list_encoding(
            &EventsRequest::builder()
                .closed(false)
                .id(pair("1", "2"))
                .slug(pair("a", "b"))
                .exclude_tag_id(pair("3", "4"))
                .build(),
            &[],
        );
        assert_list_encoding(
            &MarketsRequest::builder()
                .limit(2)
                .id(pair("1", "2"))
                .slug(pair("a", "b"))
                .clob_token_ids(vec![U256::from(1_u8), U256::from(2_u8)])
                .condition_ids(vec![B256::ZERO, B256::repeat_byte(1)])
                .market_maker_address(vec![Address::ZERO, Address::repeat_byte(1)])
                .sports_market_types(pair("moneyline", "spreads"))
                .question_ids(vec![B256::ZERO, B256::repeat_byte(2)])
                .build(),
            &[],
        );
        assert_list_encoding(
            &SeriesListRequest::builder()
                .slug(pair("nba", "nfl"))
                .categories_ids(pair("1", "2"))
                .categories_labels(pair("Sports", "Politics"))
                .build(),
            &[],
        );
        assert_list_encoding(
            &SearchRequest::builder()
                .q("btc")
                .events_tag(pair("crypto", "markets"))
                .exclude_tag_id(pair("5", "6"))
                .build(),
            &[],
        );
    }

    #[test]
    fn list_fields_should_declare_repeated_encoding() {
        for field in <MarketsRequest as QuerySchema>::FIELDS {
            if field.presence == Presence::OmitIfZero {
                assert_eq!(field.list, Some(ListEncoding::Repeated), "{}", field.name);
            }
        }
    }
}
