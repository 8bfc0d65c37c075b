use reqwest::Client as ReqwestClient;
use serde::de::DeserializeOwned;
use url::Url;

use super::types::request::{
    ActivityRequest, ClosedPositionsRequest, HoldersRequest, LiveVolumeRequest,
    OpenInterestRequest, PositionsRequest, TradedRequest, TradesRequest, ValueRequest,
};
use super::types::response::{
    Activity, ClosedPosition, Health, LiveVolume, MetaHolder, OpenInterest, Position, Trade,
    Traded, Value,
};
use crate::http::{Config, HttpExecutor, Transport};
use crate::{Result, ToQueryParams};

/// Public Data API endpoint used by [`Client::default`].
pub const DEFAULT_HOST: &str = "https://data-api.polymarket.com";

/// HTTP client for the Polymarket Data API.
///
/// ```no_run
/// use polymarket_gamma_sdk::data::{Client, types::request::TradedRequest};
/// use polymarket_gamma_sdk::types::address;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = Client::default();
/// let request = TradedRequest::builder()
///     .user(address!("56687bf447db6ffa42ffe2204a05edaa20f55839"))
///     .build();
///
/// println!("{} markets traded", client.traded(&request).await?.traded);
/// # Ok(())
/// # }
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
    pub fn new(host: &str) -> Result<Client> {
        Self::with_config(host, &Config::default())
    }

    pub fn with_config(host: &str, config: &Config) -> Result<Client> {
        Ok(Self {
            transport: Transport::from_config(host, config)?,
        })
    }
}

impl<E: HttpExecutor> Client<E> {
    pub fn with_executor(host: &str, executor: E) -> Result<Self> {
        Ok(Self {
            transport: Transport::new(host, &Config::default(), executor)?,
        })
    }

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

    /// Health check against the API root.
    pub async fn health(&self) -> Result<Health> {
        self.get(&[], &()).await
    }

    pub async fn positions(&self, request: &PositionsRequest) -> Result<Vec<Position>> {
        self.get(&["positions"], request).await
    }

    pub async fn closed_positions(
        &self,
        request: &ClosedPositionsRequest,
    ) -> Result<Vec<ClosedPosition>> {
        self.get(&["closed-positions"], request).await
    }

    pub async fn trades(&self, request: &TradesRequest) -> Result<Vec<Trade>> {
        self.get(&["trades"], request).await
    }

    pub async fn activity(&self, request: &ActivityRequest) -> Result<Vec<Activity>> {
        self.get(&["activity"], request).await
    }

    /// Top holders of each outcome token of the requested markets.
    pub async fn holders(&self, request: &HoldersRequest) -> Result<Vec<MetaHolder>> {
        self.get(&["holders"], request).await
    }

    /// The API answers with a one-element list.
    pub async fn value(&self, request: &ValueRequest) -> Result<Vec<Value>> {
        self.get(&["value"], request).await
    }

    pub async fn traded(&self, request: &TradedRequest) -> Result<Traded> {
        self.get(&["traded"], request).await
    }

    pub async fn open_interest(&self, request: &OpenInterestRequest) -> Result<Vec<OpenInterest>> {
        self.get(&["oi"], request).await
    }

    /// The API answers with a one-element list.
    pub async fn live_volume(&self, request: &LiveVolumeRequest) -> Result<Vec<LiveVolume>> {
        self.get(&["live-volume"], request).await
    }
}
