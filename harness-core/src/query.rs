//! Ordered query parameters and their wire encoding.
//!
//! A [`Query`] keeps parameters in insertion order so that the rendered URL is
//! stable across runs. Multi-value parameters are written joined with `;`.

use std::fmt;

pub(crate) const COORDINATES: &str = "coordinates";
pub(crate) const OUTPUT: &str = "output";
const DEFAULT_OUTPUT: &str = "json";

/// A single query parameter value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryValue {
    /// A scalar value written as-is.
    Single(String),
    /// A list written joined with `;`.
    List(Vec<String>),
}

impl QueryValue {
    /// Render the value as it appears on the wire.
    #[must_use]
    pub fn to_wire(&self) -> String {
        match self {
            Self::Single(value) => value.clone(),
            Self::List(values) => values.join(";"),
        }
    }
}

impl fmt::Display for QueryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_wire())
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        Self::Single(value.to_owned())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        Self::Single(value)
    }
}

impl From<bool> for QueryValue {
    fn from(value: bool) -> Self {
        Self::Single(value.to_string())
    }
}

impl From<Vec<String>> for QueryValue {
    fn from(values: Vec<String>) -> Self {
        Self::List(values)
    }
}

/// Insertion-ordered mapping of parameter names to values.
///
/// # Examples
///
/// ```
/// use harness_core::Query;
///
/// let query = Query::new()
///     .with("coordinates", vec!["13,52".to_owned(), "13.1,52.1".to_owned()])
///     .with("output", "json")
///     .with("steps", "true");
/// assert_eq!(query.to_wire(), "13,52;13.1,52.1?steps=true");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    params: Vec<(String, QueryValue)>,
}

impl Query {
    /// Create an empty query.
    #[must_use]
    pub const fn new() -> Self {
        Self { params: Vec::new() }
    }

    /// Builder form of [`Query::insert`].
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Set `key` to `value`.
    ///
    /// An existing key keeps its position and has its value replaced; the
    /// previous value is returned. New keys are appended.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<QueryValue>,
    ) -> Option<QueryValue> {
        let name = key.into();
        let incoming = value.into();
        if let Some((_, slot)) = self.params.iter_mut().find(|(existing, _)| *existing == name) {
            return Some(std::mem::replace(slot, incoming));
        }
        self.params.push((name, incoming));
        None
    }

    /// Look up the value stored for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&QueryValue> {
        self.params
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value)
    }

    /// Remove `key`, returning its value if it was present.
    pub fn remove(&mut self, key: &str) -> Option<QueryValue> {
        let position = self.params.iter().position(|(existing, _)| existing == key)?;
        Some(self.params.remove(position).1)
    }

    /// Whether `key` is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Number of parameters.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.params.len()
    }

    /// Whether the query holds no parameters.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Iterate over parameters in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &QueryValue)> {
        self.params
            .iter()
            .map(|(key, value)| (key.as_str(), value))
    }

    /// Parameter names in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.params.iter().map(|(key, _)| key.as_str())
    }

    /// Render the path suffix sent after the service path.
    ///
    /// `coordinates` becomes the leading path segment. When present, an
    /// `output` other than `json` is appended to it as a `.<format>`
    /// extension; both keys are then dropped from the query string. The
    /// remaining parameters follow as `?key=value&...` in insertion order.
    #[must_use]
    pub fn to_wire(&self) -> String {
        let mut rest = self.clone();
        let mut wire = String::new();
        if let Some(coordinates) = rest.remove(COORDINATES) {
            wire.push_str(&coordinates.to_wire());
            if let Some(output) = rest.remove(OUTPUT) {
                let format = output.to_wire();
                if format != DEFAULT_OUTPUT {
                    wire.push('.');
                    wire.push_str(&format);
                }
            }
        }
        if !rest.is_empty() {
            let pairs: Vec<String> = rest
                .iter()
                .map(|(key, value)| format!("{key}={}", value.to_wire()))
                .collect();
            wire.push('?');
            wire.push_str(&pairs.join("&"));
        }
        wire
    }
}

impl<K, V> FromIterator<(K, V)> for Query
where
    K: Into<String>,
    V: Into<QueryValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut query = Self::new();
        for (key, value) in iter {
            query.insert(key, value);
        }
        query
    }
}

/// Overlay `overrides` onto `defaults`.
///
/// Every key of `defaults` is kept in its original position; keys also
/// present in `overrides` take the override's value, and override-only keys
/// are appended in their own order. Values pass through untouched.
///
/// # Examples
///
/// ```
/// use harness_core::{Query, overwrite_params};
///
/// let defaults = Query::new().with("a", "1").with("b", "2");
/// let overrides = Query::new().with("a", "5").with("d", "10");
/// let merged = overwrite_params(&defaults, &overrides);
/// assert_eq!(merged.keys().collect::<Vec<_>>(), ["a", "b", "d"]);
/// assert_eq!(merged.get("a").map(ToString::to_string).as_deref(), Some("5"));
/// ```
#[must_use]
pub fn overwrite_params(defaults: &Query, overrides: &Query) -> Query {
    let mut merged = defaults.clone();
    for (key, value) in overrides.iter() {
        merged.insert(key, value.clone());
    }
    merged
}

/// Join a service path with the wire form of `query`.
#[must_use]
pub fn compose_url(path: &str, query: &Query) -> String {
    let wire = query.to_wire();
    if wire.is_empty() {
        path.to_owned()
    } else {
        format!("{path}/{wire}")
    }
}
