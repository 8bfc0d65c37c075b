//! HTTP plumbing shared by the API clients.
//!
//! A client performs exactly one round trip per operation through an
//! [`HttpExecutor`]. The default executor is [`reqwest::Client`]; tests and
//! embedders may supply their own.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use bon::Builder;
use reqwest::header::{ACCEPT, CONNECTION, CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use reqwest::{Client as ReqwestClient, Method, Proxy, StatusCode};
use url::Url;

use crate::Result;
use crate::error::{Error, ErrorPayload, Kind};

/// Identifier sent in the `User-Agent` header unless overridden by [`Config`].
pub const DEFAULT_USER_AGENT: &str =
    concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// A fully composed request handed to an [`HttpExecutor`].
#[non_exhaustive]
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
}

/// Status and fully buffered body of a completed exchange.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

impl HttpResponse {
    #[must_use]
    pub fn new<B: Into<Vec<u8>>>(status: StatusCode, body: B) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Performs a single HTTP exchange.
///
/// Implementations must not retry, and must report connection level
/// failures as [`Kind::Transport`] errors rather than as a status.
#[async_trait]
pub trait HttpExecutor: fmt::Debug + Send + Sync {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse>;
}

#[async_trait]
impl HttpExecutor for ReqwestClient {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse> {
        let response = self
            .request(request.method, request.url)
            .headers(request.headers)
            .send()
            .await?;
        let status = response.status();
        let body = response.bytes().await?;

        Ok(HttpResponse::new(status, body.to_vec()))
    }
}

/// Transport settings applied when the client builds its own [`reqwest::Client`].
#[non_exhaustive]
#[derive(Debug, Clone, Default, Builder)]
pub struct Config {
    /// Overrides [`DEFAULT_USER_AGENT`].
    #[builder(into)]
    user_agent: Option<String>,
    /// Whole-request timeout enforced by the transport.
    timeout: Option<Duration>,
    /// Proxy URL, handed to [`Proxy::all`] as is.
    #[builder(into)]
    proxy: Option<String>,
}

impl Config {
    pub(crate) fn http_client(&self) -> Result<ReqwestClient> {
        let mut builder = ReqwestClient::builder();

        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(proxy) = &self.proxy {
            let proxy = Proxy::all(proxy).map_err(|e| Error::with_source(Kind::Validation, e))?;
            builder = builder.proxy(proxy);
        }

        Ok(builder.build()?)
    }

    pub(crate) fn headers(&self) -> Result<HeaderMap> {
        let user_agent = match &self.user_agent {
            Some(agent) => HeaderValue::from_str(agent)?,
            None => HeaderValue::from_static(DEFAULT_USER_AGENT),
        };

        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, user_agent);
        headers.insert(ACCEPT, HeaderValue::from_static("*/*"));
        headers.insert(CONNECTION, HeaderValue::from_static("keep-alive"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        Ok(headers)
    }
}

/// Outcome of one HTTP exchange.
///
/// Created once per call and never mutated. A `204 No Content` response
/// carries no body, and the error payload is present exactly when the status
/// is outside `200..300`.
#[derive(Debug, Clone)]
pub struct Envelope {
    method: Method,
    path: String,
    status: StatusCode,
    body: Vec<u8>,
    error: Option<ErrorPayload>,
}

impl Envelope {
    #[must_use]
    pub fn new(method: Method, path: String, response: HttpResponse) -> Self {
        let HttpResponse { status, body } = response;
        let body = if status == StatusCode::NO_CONTENT {
            Vec::new()
        } else {
            body
        };
        let error = (!status.is_success()).then(|| ErrorPayload::from_body(&body));

        Self {
            method,
            path,
            status,
            body,
            error,
        }
    }

    #[must_use]
    pub fn method(&self) -> &Method {
        &self.method
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.status
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    #[must_use]
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// `true` when the body is missing or whitespace only.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.iter().all(u8::is_ascii_whitespace)
    }

    #[must_use]
    pub fn error_payload(&self) -> Option<&ErrorPayload> {
        self.error.as_ref()
    }

    /// Converts a non-successful envelope into an [`Kind::Upstream`] error.
    pub fn error_for_status(self) -> Result<Self> {
        match self.error {
            Some(payload) => Err(Error::upstream(
                self.status,
                self.method,
                self.path,
                payload,
            )),
            None => Ok(self),
        }
    }
}

/// Base URL, fixed headers and executor shared by every call of one client.
#[cfg(any(feature = "data", feature = "gamma"))]
#[derive(Debug, Clone)]
pub(crate) struct Transport<E> {
    host: Url,
    headers: HeaderMap,
    executor: E,
}

#[cfg(any(feature = "data", feature = "gamma"))]
impl Transport<ReqwestClient> {
    pub(crate) fn from_config(host: &str, config: &Config) -> Result<Self> {
        Self::new(host, config, config.http_client()?)
    }
}

#[cfg(any(feature = "data", feature = "gamma"))]
impl<E: HttpExecutor> Transport<E> {
    pub(crate) fn new(host: &str, config: &Config, executor: E) -> Result<Self> {
        let mut host = Url::parse(host)?;
        if host.cannot_be_a_base() {
            return Err(Error::malformed_endpoint(format!(
                "{host} cannot be used as a base URL"
            )));
        }
        if !host.path().ends_with('/') {
            let path = format!("{}/", host.path());
            host.set_path(&path);
        }

        Ok(Self {
            host,
            headers: config.headers()?,
            executor,
        })
    }

    pub(crate) fn host(&self) -> &Url {
        &self.host
    }

    /// Appends `segments` to the host path and attaches `query` (without the leading `?`).
    ///
    /// Each segment is percent-encoded as a unit, so a `/` or `?` inside an id or slug
    /// stays within its segment.
    pub(crate) fn url(&self, segments: &[&str], query: &str) -> Result<Url> {
        let mut url = self.host.clone();
        url.path_segments_mut()
            .map_err(|()| Error::malformed_endpoint(format!("{} has no path", self.host)))?
            .pop_if_empty()
            .extend(segments);

        if !query.is_empty() {
            url.set_query(Some(query));
        }

        Ok(url)
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            level = "debug",
            skip(self, url),
            fields(path = url.path(), status_code)
        )
    )]
    pub(crate) async fn send(&self, method: Method, url: Url) -> Result<Envelope> {
        let path = url.path().to_owned();
        let request = HttpRequest {
            method: method.clone(),
            url,
            headers: self.headers.clone(),
        };

        let response = self.executor.execute(request).await?;

        #[cfg(feature = "tracing")]
        tracing::Span::current().record("status_code", response.status.as_u16());

        let envelope = Envelope::new(method, path, response);

        #[cfg(feature = "tracing")]
        if let Some(payload) = envelope.error_payload() {
            tracing::warn!(
                status = %envelope.status(),
                method = %envelope.method(),
                path = %envelope.path(),
                message = %payload,
                "API request failed"
            );
        }

        Ok(envelope)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct NoopExecutor;

    #[async_trait]
    impl HttpExecutor for NoopExecutor {
        async fn execute(&self, _request: HttpRequest) -> Result<HttpResponse> {
            Ok(HttpResponse::new(StatusCode::OK, "[]"))
        }
    }

    #[cfg(any(feature = "data", feature = "gamma"))]
    fn transport(host: &str) -> Transport<NoopExecutor> {
        Transport::new(host, &Config::default(), NoopExecutor).expect("valid host")
    }

    #[cfg(any(feature = "data", feature = "gamma"))]
    #[test]
    fn url_should_join_path_and_query() {
        let transport = transport("https://gamma-api.polymarket.com");

        let url = transport
            .url(&["markets"], "limit=0&closed=false")
            .expect("valid url");

        assert_eq!(
            url.as_str(),
            "https://gamma-api.polymarket.com/markets?limit=0&closed=false"
        );
    }

    #[cfg(any(feature = "data", feature = "gamma"))]
    #[test]
    fn url_should_keep_host_prefix_and_skip_empty_query() {
        let transport = transport("http://localhost:8080/proxy/gamma");

        let url = transport
            .url(&["tags", "slug", "politics"], "")
            .expect("valid url");

        assert_eq!(url.as_str(), "http://localhost:8080/proxy/gamma/tags/slug/politics");
        assert_eq!(url.query(), None);
    }

    #[cfg(any(feature = "data", feature = "gamma"))]
    #[test]
    fn url_without_segments_should_be_host_root() {
        let transport = transport("https://data-api.polymarket.com");

        let url = transport.url(&[], "").expect("valid url");

        assert_eq!(url.as_str(), "https://data-api.polymarket.com/");
    }

    #[cfg(any(feature = "data", feature = "gamma"))]
    #[test]
    fn url_should_escape_each_segment_as_a_unit() {
        let transport = transport("https://data-api.polymarket.com/");

        let url = transport
            .url(&["events", "slug", "a b"], "")
            .expect("valid url");
        assert_eq!(url.path(), "/events/slug/a%20b");

        let url = transport
            .url(&["events", "slug", "a/b?c#d"], "active=true")
            .expect("valid url");
        assert_eq!(url.path(), "/events/slug/a%2Fb%3Fc%23d");
        assert_eq!(url.query(), Some("active=true"));
        assert_eq!(url.fragment(), None);
    }

    #[cfg(any(feature = "data", feature = "gamma"))]
    #[test]
    fn non_base_host_should_fail() {
        let err = Transport::new("mailto:ops@example.com", &Config::default(), NoopExecutor)
            .expect_err("mailto is not a base");

        assert_eq!(err.kind(), Kind::MalformedEndpoint);
    }

    #[cfg(any(feature = "data", feature = "gamma"))]
    #[test]
    fn invalid_host_should_fail() {
        let err = Transport::new("not a url", &Config::default(), NoopExecutor)
            .expect_err("unparseable host");

        assert_eq!(err.kind(), Kind::MalformedEndpoint);
    }

    #[test]
    fn envelope_should_drop_no_content_body() {
        let envelope = Envelope::new(
            Method::GET,
            "/status".to_owned(),
            HttpResponse::new(StatusCode::NO_CONTENT, "ignored"),
        );

        assert!(envelope.is_success(), "204 is a success");
        assert!(envelope.body().is_empty(), "204 has no body");
        assert!(envelope.error_payload().is_none(), "no error payload");
    }

    #[test]
    fn envelope_should_capture_error_payload_only_on_failure() {
        let ok = Envelope::new(
            Method::GET,
            "/markets".to_owned(),
            HttpResponse::new(StatusCode::OK, r#"{"message":"not an error"}"#),
        );
        let failed = Envelope::new(
            Method::GET,
            "/markets".to_owned(),
            HttpResponse::new(StatusCode::BAD_GATEWAY, "upstream down"),
        );

        assert!(ok.error_payload().is_none(), "success carries no error");
        assert_eq!(
            failed.error_payload(),
            Some(&ErrorPayload::Opaque("upstream down".to_owned()))
        );
        let err = failed.error_for_status().expect_err("502 is an error");
        assert_eq!(err.kind(), Kind::Upstream);
    }

    #[test]
    fn whitespace_body_should_count_as_empty() {
        let envelope = Envelope::new(
            Method::GET,
            "/markets".to_owned(),
            HttpResponse::new(StatusCode::OK, " \n"),
        );

        assert!(envelope.is_empty(), "whitespace only body is empty");
    }

    #[test]
    fn headers_should_use_configured_user_agent() {
        let config = Config::builder().user_agent("my-bot/1.0").build();

        let headers = config.headers().expect("valid headers");

        assert_eq!(headers[USER_AGENT], "my-bot/1.0");
        assert_eq!(headers[CONTENT_TYPE], "application/json");
    }

    #[test]
    fn default_headers_should_identify_crate() {
        let headers = Config::default().headers().expect("valid headers");

        assert_eq!(headers[USER_AGENT], DEFAULT_USER_AGENT);
        assert!(
            DEFAULT_USER_AGENT.starts_with("polymarket-gamma-sdk/"),
            "unexpected agent {DEFAULT_USER_AGENT}"
        );
    }

    #[test]
    fn invalid_user_agent_should_fail_validation() {
        let config = Config::builder().user_agent("bad\nagent").build();

        let err = config.headers().expect_err("newline is not allowed");

        assert_eq!(err.kind(), Kind::Validation);
    }
}
