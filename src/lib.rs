#![cfg_attr(doc, doc = include_str!("../README.md"))]

#[cfg(feature = "data")]
pub mod data;
pub mod error;
#[cfg(feature = "gamma")]
pub mod gamma;
pub mod http;
pub mod query;
pub(crate) mod serde_helpers;
pub mod types;

#[cfg(any(feature = "data", feature = "gamma"))]
use reqwest::{Method, StatusCode};
use serde::Serialize;
#[cfg(any(feature = "data", feature = "gamma"))]
use serde::de::DeserializeOwned;

use crate::error::Error;
#[cfg(any(feature = "data", feature = "gamma"))]
use crate::http::{Envelope, HttpExecutor, Transport};
use crate::query::QuerySchema;
pub use crate::serde_helpers::{PolymorphicArray, string_sequence};

pub type Result<T> = std::result::Result<T, Error>;

/// Encodes a request type as a URL query string.
///
/// Implemented for every type that is both [`Serialize`] and [`QuerySchema`].
/// Unset optional fields and zero-valued omit-if-zero fields produce no
/// key at all. A type whose schema declares no fields (such as `()` or a
/// request that only carries path parameters) always encodes to an empty
/// string.
pub trait ToQueryParams: Serialize + QuerySchema {
    /// Returns the encoded pairs without a leading `?`, or an empty string.
    fn query_params(&self) -> Result<String> {
        if Self::FIELDS.is_empty() {
            return Ok(String::new());
        }

        serde_html_form::to_string(self)
            .inspect_err(|e| {
                #[cfg(feature = "tracing")]
                tracing::error!(
                    type_name = %std::any::type_name::<Self>(),
                    error = %e,
                    "unable to encode query parameters"
                );
                #[cfg(not(feature = "tracing"))]
                let _: &serde_html_form::ser::Error = e;
            })
            .map_err(Error::from)
    }

    /// The encoded query as decoded `(name, value)` pairs, in emission order.
    fn query_pairs(&self) -> Result<Vec<(String, String)>> {
        let encoded = self.query_params()?;
        Ok(url::form_urlencoded::parse(encoded.as_bytes())
            .into_owned()
            .collect())
    }
}

impl<T: Serialize + QuerySchema> ToQueryParams for T {}

/// Issues a `GET` for the `path` segments with `request` encoded as the query and decodes the body.
///
/// Any non-successful status is an [`error::Kind::Upstream`] error.
#[cfg(any(feature = "data", feature = "gamma"))]
pub(crate) async fn request<E, Req, Res>(
    transport: &Transport<E>,
    path: &[&str],
    request: &Req,
) -> Result<Res>
where
    E: HttpExecutor,
    Req: ToQueryParams + Sync,
    Res: DeserializeOwned,
{
    let envelope = send(transport, path, request).await?;
    decode(envelope.error_for_status()?)
}

/// Like [`request`], but a `404 Not Found` yields `Ok(None)`.
///
/// Used by single-entity lookups, where a missing entity is a normal outcome.
#[cfg(any(feature = "data", feature = "gamma"))]
pub(crate) async fn request_optional<E, Req, Res>(
    transport: &Transport<E>,
    path: &[&str],
    request: &Req,
) -> Result<Option<Res>>
where
    E: HttpExecutor,
    Req: ToQueryParams + Sync,
    Res: DeserializeOwned,
{
    let envelope = send(transport, path, request).await?;

    if envelope.status() == StatusCode::NOT_FOUND {
        #[cfg(feature = "tracing")]
        tracing::debug!(path = %envelope.path(), "API resource not found");
        return Ok(None);
    }

    decode(envelope.error_for_status()?).map(Some)
}

#[cfg(any(feature = "data", feature = "gamma"))]
async fn send<E, Req>(transport: &Transport<E>, path: &[&str], request: &Req) -> Result<Envelope>
where
    E: HttpExecutor,
    Req: ToQueryParams + Sync,
{
    let query = request.query_params()?;
    let url = transport.url(path, &query)?;
    transport.send(Method::GET, url).await
}

/// Decodes a successful envelope, treating a missing, blank or `null` body as empty.
#[cfg(any(feature = "data", feature = "gamma"))]
fn decode<Res: DeserializeOwned>(envelope: Envelope) -> Result<Res> {
    let empty = |envelope: &Envelope| {
        #[cfg(feature = "tracing")]
        tracing::warn!(
            status = %envelope.status(),
            path = %envelope.path(),
            "API returned no payload"
        );
        Error::empty_response(
            envelope.status(),
            envelope.method().clone(),
            envelope.path().to_owned(),
        )
    };

    if envelope.is_empty() {
        return Err(empty(&envelope));
    }

    let value: serde_json::Value = serde_json::from_slice(envelope.body())?;
    if value.is_null() {
        return Err(empty(&envelope));
    }

    serde_helpers::deserialize_with_warnings(value)
}
