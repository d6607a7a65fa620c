//! # Navigation Parameters
//!
//! The payload that travels with a navigation request.
//!
//! Callers are loose about what they pass: sometimes a full mapping
//! (`{ taskId: "T-42" }`), sometimes just the bare id (`"T-42"`). Both are
//! accepted as a [`Payload`] and turned into [`NavigationParams`] by the
//! navigator before anything is stored.
//!
//! ```text
//! Payload::None          →  {}
//! Payload::Bare("T-42")  →  { <canonical key>: "T-42" }
//! Payload::Params({..})  →  { .. }  (filtered to the route's accepted keys)
//! ```

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

/// A single parameter value: opaque text id or an integer.
///
/// Deserializing accepts any JSON/TOML scalar. Floats and booleans are kept
/// as their text form so values stay comparable and hashable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged, from = "RawParamValue")]
pub enum ParamValue {
    Int(i64),
    Text(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawParamValue {
    Int(i64),
    Float(f64),
    Bool(bool),
    Text(String),
}

impl From<RawParamValue> for ParamValue {
    fn from(raw: RawParamValue) -> Self {
        match raw {
            RawParamValue::Int(n) => ParamValue::Int(n),
            RawParamValue::Float(x) => ParamValue::Text(x.to_string()),
            RawParamValue::Bool(b) => ParamValue::Text(b.to_string()),
            RawParamValue::Text(s) => ParamValue::Text(s),
        }
    }
}

impl ParamValue {
    /// Parse user-supplied text: integers stay integers, everything else is
    /// trimmed text.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        match raw.parse::<i64>() {
            Ok(n) => ParamValue::Int(n),
            Err(_) => ParamValue::Text(raw.to_string()),
        }
    }

    /// Text values only. Use [`ParamValue::as_text`] to read either variant.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ParamValue::Text(s) => Some(s),
            ParamValue::Int(_) => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            ParamValue::Int(n) => Some(*n),
            ParamValue::Text(s) => s.parse().ok(),
        }
    }

    /// Text form of either variant, so `2` and `"2"` read the same.
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            ParamValue::Text(s) => Cow::Borrowed(s),
            ParamValue::Int(n) => Cow::Owned(n.to_string()),
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Int(n) => write!(f, "{n}"),
            ParamValue::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<i64> for ParamValue {
    fn from(n: i64) -> Self {
        ParamValue::Int(n)
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        ParamValue::Text(s.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(s: String) -> Self {
        ParamValue::Text(s)
    }
}

/// Key → value mapping attached to a navigation state.
///
/// Ordered so that snapshots compare and print deterministically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NavigationParams(BTreeMap<String, ParamValue>);

impl NavigationParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, handy in tests and screen code.
    pub fn with(mut self, key: &str, value: impl Into<ParamValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: &str, value: impl Into<ParamValue>) -> Option<ParamValue> {
        self.0.insert(key.to_string(), value.into())
    }

    pub fn remove(&mut self, key: &str) -> Option<ParamValue> {
        self.0.remove(key)
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.0.get(key)
    }

    /// Text values only; an `Int` under `key` reads as `None`.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(ParamValue::as_str)
    }

    /// Value under `key` as text, whichever variant it was stored as.
    pub fn get_text(&self, key: &str) -> Option<Cow<'_, str>> {
        self.get(key).map(ParamValue::as_text)
    }

    pub fn get_int(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(ParamValue::as_int)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Keep only the keys for which `keep` returns true.
    pub fn retain(&mut self, mut keep: impl FnMut(&str) -> bool) {
        self.0.retain(|k, _| keep(k));
    }
}

impl fmt::Display for NavigationParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (k, v)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{k}: {v}")?;
        }
        write!(f, "}}")
    }
}

impl<K: Into<String>, V: Into<ParamValue>> FromIterator<(K, V)> for NavigationParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// What a caller hands to `navigate` as its second argument.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Payload {
    #[default]
    None,
    /// A raw id passed positionally instead of a mapping.
    Bare(ParamValue),
    Params(NavigationParams),
}

impl From<()> for Payload {
    fn from(_: ()) -> Self {
        Payload::None
    }
}

impl From<NavigationParams> for Payload {
    fn from(params: NavigationParams) -> Self {
        Payload::Params(params)
    }
}

impl From<ParamValue> for Payload {
    fn from(value: ParamValue) -> Self {
        Payload::Bare(value)
    }
}

impl From<&str> for Payload {
    fn from(s: &str) -> Self {
        Payload::Bare(s.into())
    }
}

impl From<String> for Payload {
    fn from(s: String) -> Self {
        Payload::Bare(s.into())
    }
}

impl From<i64> for Payload {
    fn from(n: i64) -> Self {
        Payload::Bare(n.into())
    }
}

impl<T: Into<Payload>> From<Option<T>> for Payload {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_prefers_integers() {
        assert_eq!(ParamValue::parse("7"), ParamValue::Int(7));
        assert_eq!(ParamValue::parse("T-42"), ParamValue::Text("T-42".into()));
        assert_eq!(ParamValue::parse(""), ParamValue::Text(String::new()));
    }

    #[test]
    fn test_parse_trims_text() {
        assert_eq!(ParamValue::parse(" T-42 "), ParamValue::Text("T-42".into()));
        assert_eq!(ParamValue::parse(" 7"), ParamValue::Int(7));
    }

    #[test]
    fn test_get_text_reads_both_variants() {
        let params = NavigationParams::new()
            .with("projectId", 2i64)
            .with("taskId", "T-42");
        assert_eq!(params.get_str("projectId"), None);
        assert_eq!(params.get_text("projectId").as_deref(), Some("2"));
        assert_eq!(params.get_text("taskId").as_deref(), Some("T-42"));
        assert_eq!(params.get_text("missing"), None);
    }

    #[test]
    fn test_deserialize_any_scalar() {
        let params: NavigationParams =
            serde_json::from_str(r#"{"id":3,"score":4.5,"active":true,"tab":"leave"}"#).unwrap();
        assert_eq!(params.get("id"), Some(&ParamValue::Int(3)));
        assert_eq!(params.get_str("score"), Some("4.5"));
        assert_eq!(params.get_str("active"), Some("true"));
        assert_eq!(params.get_str("tab"), Some("leave"));
    }

    #[test]
    fn test_as_int_reads_numeric_text() {
        assert_eq!(ParamValue::Text("12".into()).as_int(), Some(12));
        assert_eq!(ParamValue::Text("EMP-12".into()).as_int(), None);
        assert_eq!(ParamValue::Int(3).as_str(), None);
    }

    #[test]
    fn test_params_builder_and_getters() {
        let params = NavigationParams::new()
            .with("employeeId", 7i64)
            .with("tab", "leave");
        assert_eq!(params.get_int("employeeId"), Some(7));
        assert_eq!(params.get_str("tab"), Some("leave"));
        assert_eq!(params.len(), 2);
        assert_eq!(params.to_string(), "{employeeId: 7, tab: leave}");
    }

    #[test]
    fn test_params_json_shape_is_flat() {
        let params = NavigationParams::new().with("taskId", "T-42").with("page", 2i64);
        let json = serde_json::to_string(&params).unwrap();
        assert_eq!(json, r#"{"page":2,"taskId":"T-42"}"#);
    }

    #[test]
    fn test_payload_conversions() {
        assert_eq!(Payload::from(()), Payload::None);
        assert_eq!(Payload::from("T-42"), Payload::Bare(ParamValue::Text("T-42".into())));
        assert_eq!(Payload::from(7i64), Payload::Bare(ParamValue::Int(7)));
        assert_eq!(Payload::from(None::<i64>), Payload::None);
        let params = NavigationParams::new().with("jobId", 1i64);
        assert_eq!(Payload::from(params.clone()), Payload::Params(params));
    }
}
