//! Declarative query-string schema for request types.
//!
//! Every request type serializes itself through `serde` (the derive is the
//! encoder) and additionally implements [`QuerySchema`], which exposes the
//! external name, presence policy and list convention of each field as data.
//!
//! The three presence policies map onto Rust types as follows:
//!
//! | Policy | Field type | serde attribute |
//! |--------|------------|-----------------|
//! | [`Presence::Required`] | `T` | none |
//! | [`Presence::OmitIfUnset`] | `Option<T>` | `skip_serializing_none` on the struct |
//! | [`Presence::OmitIfZero`] | `T` | `skip_serializing_if = "crate::query::is_zero"` |
//!
//! An `OmitIfUnset` field set to `Some(0)` or `Some(false)` is always encoded.

/// When a field is written to the query string.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    /// Always encoded, even when it holds its type's default value.
    Required,
    /// Omitted only when unset (`None`).
    OmitIfUnset,
    /// Omitted when equal to the type's default value or an empty collection.
    OmitIfZero,
}

/// How a multi-valued field is written.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListEncoding {
    /// `id=1&id=2`
    Repeated,
    /// `user=0xabc,0xdef`
    CommaJoined,
}

/// One entry of a request's query schema.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryField {
    pub name: &'static str,
    pub presence: Presence,
    pub list: Option<ListEncoding>,
}

impl QueryField {
    #[must_use]
    pub const fn required(name: &'static str) -> Self {
        Self {
            name,
            presence: Presence::Required,
            list: None,
        }
    }

    #[must_use]
    pub const fn optional(name: &'static str) -> Self {
        Self {
            name,
            presence: Presence::OmitIfUnset,
            list: None,
        }
    }

    #[must_use]
    pub const fn omit_if_zero(name: &'static str) -> Self {
        Self {
            name,
            presence: Presence::OmitIfZero,
            list: None,
        }
    }

    #[must_use]
    pub const fn repeated(mut self) -> Self {
        self.list = Some(ListEncoding::Repeated);
        self
    }

    #[must_use]
    pub const fn comma_joined(mut self) -> Self {
        self.list = Some(ListEncoding::CommaJoined);
        self
    }
}

/// Static description of the query parameters a request type may emit.
pub trait QuerySchema {
    /// Fields in declaration order.
    const FIELDS: &'static [QueryField];

    /// Looks up a field by its external name.
    #[must_use]
    fn field(name: &str) -> Option<&'static QueryField> {
        Self::FIELDS.iter().find(|field| field.name == name)
    }
}

/// No filter: the endpoint is called with its bare path.
impl QuerySchema for () {
    const FIELDS: &'static [QueryField] = &[];
}

/// `skip_serializing_if` predicate for [`Presence::OmitIfZero`] fields.
#[must_use]
pub fn is_zero<T: Default + PartialEq>(value: &T) -> bool {
    *value == T::default()
}

/// Implements [`QuerySchema`] for a request type from a field list.
macro_rules! query_schema {
    ($ty:ty => [$($field:expr),* $(,)?]) => {
        impl $crate::query::QuerySchema for $ty {
            const FIELDS: &'static [$crate::query::QueryField] = &[$($field),*];
        }
    };
}

pub(crate) use query_schema;


#[cfg(test)]
mod tests {
    use super::*;

    struct Sample;

    query_schema!(Sample => [
        QueryField::required("q"),
        QueryField::optional("limit"),
        QueryField::omit_if_zero("id").repeated(),
    ]);

    #[test]
    fn field_lookup_should_use_external_name() {
        let id = Sample::field("id").expect("declared field");

        assert_eq!(id.presence, Presence::OmitIfZero);
        assert_eq!(id.list, Some(ListEncoding::Repeated));
        assert_eq!(Sample::field("q").map(|f| f.presence), Some(Presence::Required));
        assert!(Sample::field("offset").is_none(), "offset is not declared");
    }

    #[test]
    fn unit_schema_should_be_empty() {
        assert!(<() as QuerySchema>::FIELDS.is_empty(), "unit filter has no fields");
    }

    #[test]
    fn is_zero_should_match_defaults() {
        assert!(is_zero(&0_i32), "0 is zero");
        assert!(is_zero(&String::new()), "empty string is zero");
        assert!(is_zero(&Vec::<u8>::new()), "empty vec is zero");
        assert!(is_zero(&false), "false is zero");
        assert!(!is_zero(&7_u64), "7 is not zero");
        assert!(!is_zero(&"x".to_owned()), "non-empty string is not zero");
    }
}
