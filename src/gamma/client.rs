//! Client for the Polymarket Gamma API.
//!
//! ```no_run
//! use polymarket_gamma_sdk::gamma::{Client, types::request::EventsRequest};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::default();
//!
//! let request = EventsRequest::builder().limit(10).build();
//! for event in client.active_events(&request).await? {
//!     println!("{}: {} markets", event.id, event.markets.len());
//! }
//! # Ok(())
//! # }
//! ```

use reqwest::{Client as ReqwestClient, Method};
use serde::de::DeserializeOwned;
use url::Url;

use super::types::request::{
    CommentsByIdRequest, CommentsByUserAddressRequest, CommentsRequest, EventByIdRequest,
    EventBySlugRequest, EventTagsRequest, EventsRequest, MarketByIdRequest, MarketBySlugRequest,
    MarketTagsRequest, MarketsRequest, RelatedTagsByIdRequest, RelatedTagsBySlugRequest,
    SearchRequest, SeriesByIdRequest, SeriesListRequest, TagByIdRequest, TagBySlugRequest,
    TagsRequest, TeamsRequest,
};
use super::types::response::{
    Comment, Event, HealthResponse, Market, Page, RelatedTag, SearchResults, Series, Tag, Team,
};
use crate::http::{Config, HttpExecutor, Transport};
use crate::{Result, ToQueryParams};

/// Public Gamma endpoint used by [`Client::default`].
pub const DEFAULT_HOST: &str = "https://gamma-api.polymarket.com";

/// HTTP client for the Polymarket Gamma API.
///
/// Every method performs exactly one request. Lookups of a single entity by
/// id or slug return `Ok(None)` when the API answers `404 Not Found`; every
/// other non-successful status is an [`crate::error::Kind::Upstream`] error.
///
/// ```no_run
/// use polymarket_gamma_sdk::gamma::Client;
/// use polymarket_gamma_sdk::http::Config;
///
/// let client = Client::default();
/// let client = Client::new("https://gamma-api.polymarket.com").unwrap();
/// let config = Config::builder()
///     .timeout(std::time::Duration::from_secs(10))
///     .build();
/// let client = Client::with_config("https://gamma-api.polymarket.com", &config).unwrap();
/// ```
#[derive(Clone, Debug)]
pub struct Client<E = ReqwestClient> {
    transport: Transport<E>,
}

impl Default for Client {
    fn default() -> Self {
        Client::new(DEFAULT_HOST).expect("Client with default endpoint should succeed")
    }
}

impl Client {
    /// Creates a client for `host` backed by a default [`reqwest::Client`].
    pub fn new(host: &str) -> Result<Client> {
        Self::with_config(host, &Config::default())
    }

    /// Creates a client for `host` whose transport honors `config`.
    pub fn with_config(host: &str, config: &Config) -> Result<Client> {
        Ok(Self {
            transport: Transport::from_config(host, config)?,
        })
    }
}

impl<E: HttpExecutor> Client<E> {
    /// Creates a client for `host` that performs requests through `executor`.
    pub fn with_executor(host: &str, executor: E) -> Result<Self> {
        Ok(Self {
            transport: Transport::new(host, &Config::default(), executor)?,
        })
    }

    /// Returns the base URL of the API.
    #[must_use]
    pub fn host(&self) -> &Url {
        self.transport.host()
    }

    async fn get<Req, Res>(&self, path: &[&str], request: &Req) -> Result<Res>
    where
        Req: ToQueryParams + Sync,
        Res: DeserializeOwned,
    {
        crate::request(&self.transport, path, request).await
    }

    async fn find<Req, Res>(&self, path: &[&str], request: &Req) -> Result<Option<Res>>
    where
        Req: ToQueryParams + Sync,
        Res: DeserializeOwned,
    {
        crate::request_optional(&self.transport, path, request).await
    }

    /// Checks that the API is up. Returns the plain text body, `OK` when healthy.
    pub async fn status(&self) -> Result<HealthResponse> {
        let url = self.transport.url(&["status"], "")?;
        let envelope = self
            .transport
            .send(Method::GET, url)
            .await?
            .error_for_status()?;

        Ok(String::from_utf8_lossy(envelope.body()).trim().to_owned())
    }

    /// Lists sports teams.
    pub async fn teams(&self, request: &TeamsRequest) -> Result<Vec<Team>> {
        self.get(&["teams"], request).await
    }

    /// Lists tags.
    pub async fn tags(&self, request: &TagsRequest) -> Result<Vec<Tag>> {
        self.get(&["tags"], request).await
    }

    pub async fn tag_by_id(&self, request: &TagByIdRequest) -> Result<Option<Tag>> {
        self.find(&["tags", request.id.as_str()], request).await
    }

    pub async fn tag_by_slug(&self, request: &TagBySlugRequest) -> Result<Option<Tag>> {
        self.find(&["tags", "slug", request.slug.as_str()], request)
            .await
    }

    /// Lists the relationships from the tag with the given id to its related tags.
    pub async fn related_tags_by_id(
        &self,
        request: &RelatedTagsByIdRequest,
    ) -> Result<Vec<RelatedTag>> {
        self.get(&["tags", request.id.as_str(), "related-tags"], request)
            .await
    }

    /// Lists the relationships from the tag with the given slug to its related tags.
    pub async fn related_tags_by_slug(
        &self,
        request: &RelatedTagsBySlugRequest,
    ) -> Result<Vec<RelatedTag>> {
        self.get(&["tags", "slug", request.slug.as_str(), "related-tags"], request)
            .await
    }

    /// Lists the tags related to the tag with the given id.
    pub async fn tags_related_to_tag_by_id(
        &self,
        request: &RelatedTagsByIdRequest,
    ) -> Result<Vec<Tag>> {
        self.get(&["tags", request.id.as_str(), "related-tags", "tags"], request)
            .await
    }

    /// Lists the tags related to the tag with the given slug.
    pub async fn tags_related_to_tag_by_slug(
        &self,
        request: &RelatedTagsBySlugRequest,
    ) -> Result<Vec<Tag>> {
        self.get(
            &["tags", "slug", request.slug.as_str(), "related-tags", "tags"],
            request,
        )
        .await
    }

    /// Lists events. Each event's markets are decoded as [`super::types::response::EventMarket`]s.
    pub async fn events(&self, request: &EventsRequest) -> Result<Vec<Event>> {
        self.get(&["events"], request).await
    }

    /// Fetches one page of events together with the `hasMore` flag.
    ///
    /// Only the requested page is fetched; advancing `offset` is up to the caller.
    pub async fn events_pagination(&self, request: &EventsRequest) -> Result<Page<Event>> {
        self.get(&["events", "pagination"], request).await
    }

    pub async fn event_by_id(&self, request: &EventByIdRequest) -> Result<Option<Event>> {
        self.find(&["events", request.id.as_str()], request).await
    }

    pub async fn event_by_slug(&self, request: &EventBySlugRequest) -> Result<Option<Event>> {
        self.find(&["events", "slug", request.slug.as_str()], request)
            .await
    }

    pub async fn event_tags(&self, request: &EventTagsRequest) -> Result<Vec<Tag>> {
        self.get(&["events", request.id.as_str(), "tags"], request)
            .await
    }

    /// [`Client::events`] restricted to active events.
    pub async fn active_events(&self, request: &EventsRequest) -> Result<Vec<Event>> {
        let mut request = request.clone();
        request.active = Some(true);
        self.events(&request).await
    }

    /// [`Client::events`] restricted to closed events.
    pub async fn closed_events(&self, request: &EventsRequest) -> Result<Vec<Event>> {
        let mut request = request.clone();
        request.closed = Some(true);
        self.events(&request).await
    }

    /// [`Client::events`] restricted to featured events.
    pub async fn featured_events(&self, request: &EventsRequest) -> Result<Vec<Event>> {
        let mut request = request.clone();
        request.featured = Some(true);
        self.events(&request).await
    }

    /// Lists markets.
    pub async fn markets(&self, request: &MarketsRequest) -> Result<Vec<Market>> {
        self.get(&["markets"], request).await
    }

    pub async fn market_by_id(&self, request: &MarketByIdRequest) -> Result<Option<Market>> {
        self.find(&["markets", request.id.as_str()], request).await
    }

    pub async fn market_by_slug(&self, request: &MarketBySlugRequest) -> Result<Option<Market>> {
        self.find(&["markets", "slug", request.slug.as_str()], request)
            .await
    }

    pub async fn market_tags(&self, request: &MarketTagsRequest) -> Result<Vec<Tag>> {
        self.get(&["markets", request.id.as_str(), "tags"], request)
            .await
    }

    /// [`Client::markets`] restricted to closed markets.
    pub async fn closed_markets(&self, request: &MarketsRequest) -> Result<Vec<Market>> {
        let mut request = request.clone();
        request.closed = Some(true);
        self.markets(&request).await
    }

    /// Lists series.
    pub async fn series(&self, request: &SeriesListRequest) -> Result<Vec<Series>> {
        self.get(&["series"], request).await
    }

    pub async fn series_by_id(&self, request: &SeriesByIdRequest) -> Result<Option<Series>> {
        self.find(&["series", request.id.as_str()], request).await
    }

    /// Lists comments attached to an event, series or market.
    pub async fn comments(&self, request: &CommentsRequest) -> Result<Vec<Comment>> {
        self.get(&["comments"], request).await
    }

    /// Returns a comment together with its replies.
    pub async fn comments_by_id(&self, request: &CommentsByIdRequest) -> Result<Vec<Comment>> {
        self.get(&["comments", request.id.as_str()], request)
            .await
    }

    pub async fn comments_by_user_address(
        &self,
        request: &CommentsByUserAddressRequest,
    ) -> Result<Vec<Comment>> {
        let address = request.user_address.to_string();
        self.get(&["comments", "user_address", address.as_str()], request)
            .await
    }

    /// Searches events, tags and profiles.
    pub async fn search(&self, request: &SearchRequest) -> Result<SearchResults> {
        self.get(&["public-search"], request).await
    }
}
