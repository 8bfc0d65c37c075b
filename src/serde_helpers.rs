//! Decoding helpers shared by the Gamma and Data response types.
//!
//! With the `tracing` feature, response fields that no type declares are
//! logged as warnings so that upstream schema drift is visible.

#[cfg(any(feature = "data", feature = "gamma"))]
use serde::de::DeserializeOwned;
use serde_json::Value;

/// `serde_as` adapter accepting a string or an integer as `String`.
///
/// Gamma emits some identifiers as numbers on one endpoint and as strings on
/// another.
#[cfg(feature = "gamma")]
pub struct StringFromAny;

#[cfg(feature = "gamma")]
impl<'de> serde_with::DeserializeAs<'de, String> for StringFromAny {
    fn deserialize_as<D>(deserializer: D) -> std::result::Result<String, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use std::fmt;

        use serde::de::{self, Visitor};

        struct StringOrIntVisitor;

        impl Visitor<'_> for StringOrIntVisitor {
            type Value = String;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a string or an integer")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<String, E> {
                Ok(v.to_owned())
            }

            fn visit_string<E: de::Error>(self, v: String) -> std::result::Result<String, E> {
                Ok(v)
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<String, E> {
                Ok(v.to_string())
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<String, E> {
                Ok(v.to_string())
            }
        }

        deserializer.deserialize_any(StringOrIntVisitor)
    }
}

#[cfg(feature = "gamma")]
impl serde_with::SerializeAs<String> for StringFromAny {
    fn serialize_as<S>(source: &String, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(source)
    }
}

/// `serde_as` adapter for list fields the API sends in more than one shape.
///
/// `outcomes`, `outcomePrices` and `clobTokenIds` arrive either as a JSON
/// array or as a string holding a JSON-encoded array, depending on the
/// endpoint. Both decode to the same `Vec<String>`; see [`string_sequence`]
/// for the exact rules. Serializes back as a plain JSON array.
///
/// Pair with `#[serde(default)]` so that a missing key yields an empty list.
pub struct PolymorphicArray;

impl<'de> serde_with::DeserializeAs<'de, Vec<String>> for PolymorphicArray {
    fn deserialize_as<D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = <Value as serde::Deserialize>::deserialize(deserializer)?;
        Ok(string_sequence(&value))
    }
}

impl serde_with::SerializeAs<Vec<String>> for PolymorphicArray {
    fn serialize_as<S>(source: &Vec<String>, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(source, serializer)
    }
}

/// Normalizes a loosely typed JSON value into an ordered list of strings.
///
/// - `null` becomes `[]`
/// - an array becomes its elements rendered as text, in order
/// - a string is parsed as a JSON array of strings, and becomes `[]` if it is not one
/// - any other value becomes a single element list
///
/// Never fails. A string that does not parse is logged when `tracing` is enabled.
#[must_use]
pub fn string_sequence(value: &Value) -> Vec<String> {
    match value {
        Value::Null => Vec::new(),
        Value::Array(items) => items.iter().map(scalar_text).collect(),
        Value::String(encoded) => match serde_json::from_str::<Vec<String>>(encoded) {
            Ok(items) => items,
            Err(e) => {
                #[cfg(feature = "tracing")]
                if !encoded.trim().is_empty() {
                    tracing::warn!(
                        value = %encoded,
                        error = %e,
                        "string field is not a JSON array of strings, using empty list"
                    );
                }
                #[cfg(not(feature = "tracing"))]
                let _: serde_json::Error = e;
                Vec::new()
            }
        },
        other => vec![scalar_text(other)],
    }
}

/// Strings as is, `null` as empty, everything else as its JSON text.
fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Decodes `value` into `T`, logging any fields `T` does not declare.
///
/// Unknown fields never fail the decode. On failure, the JSON path of the
/// offending value is logged at `error` level before the error is returned.
#[cfg(all(feature = "tracing", any(feature = "data", feature = "gamma")))]
pub fn deserialize_with_warnings<T: DeserializeOwned>(value: Value) -> crate::Result<T> {
    use std::any::type_name;

    tracing::trace!(type_name = %type_name::<T>(), json = %value, "decoding response");

    let original = value.clone();
    let mut ignored: Vec<String> = Vec::new();

    let decoded: T = serde_ignored::deserialize(value, |path| ignored.push(path.to_string()))
        .inspect_err(|_| {
            let text = original.to_string();
            let de = &mut serde_json::Deserializer::from_str(&text);
            let traced: Result<T, _> = serde_path_to_error::deserialize(de);
            if let Err(err) = traced {
                let path = err.path().to_string();
                tracing::error!(
                    type_name = %type_name::<T>(),
                    path = %path,
                    value = %format_value(lookup_value(&original, &path)),
                    error = %err.inner(),
                    "response decoding failed"
                );
            }
        })?;

    for path in ignored {
        tracing::warn!(
            type_name = %type_name::<T>(),
            field = %path,
            value = %format_value(lookup_value(&original, &path)),
            "unknown field in API response"
        );
    }

    Ok(decoded)
}

#[cfg(all(not(feature = "tracing"), any(feature = "data", feature = "gamma")))]
pub fn deserialize_with_warnings<T: DeserializeOwned>(value: Value) -> crate::Result<T> {
    Ok(serde_json::from_value(value)?)
}

/// Finds the value at a `serde_ignored` or `serde_path_to_error` path.
///
/// Accepts `a.b`, `a[0].b` and `a.0.b`; `?` segments (option markers) are skipped.
#[cfg(feature = "tracing")]
fn lookup_value<'v>(value: &'v Value, path: &str) -> Option<&'v Value> {
    let mut current = value;

    for segment in path_segments(path) {
        if segment == "?" {
            continue;
        }
        current = match current {
            Value::Object(map) => map.get(&segment)?,
            Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }

    Some(current)
}

/// `data[15].outcomes` -> `["data", "15", "outcomes"]`
#[cfg(feature = "tracing")]
fn path_segments(path: &str) -> Vec<String> {
    path.split(['.', '[', ']'])
        .filter(|segment| !segment.is_empty())
        .map(str::to_owned)
        .collect()
}

#[cfg(feature = "tracing")]
fn format_value(value: Option<&Value>) -> String {
    value.map_or_else(|| "<unable to retrieve>".to_owned(), Value::to_string)
}
