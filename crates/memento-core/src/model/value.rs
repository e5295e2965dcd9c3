use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Attribute state keyed by attribute name
///
/// `BTreeMap` keeps iteration and serialization deterministic.
pub type AttributeMap = BTreeMap<String, AttributeValue>;

/// A single attribute value: primitive, nested container, or callable marker
///
/// Callables cannot be compared by the diff engine; they exist so that hosts
/// which keep callback references in their attribute state can still be
/// wrapped, with the engine rejecting or skipping them explicitly rather
/// than comparing them by accident.
///
/// Serialization is untagged: primitives and containers map onto their
/// natural JSON forms, and a callable serializes as a `{"$callable": name}`
/// object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    /// Reference to a host-registered callback
    Callable(CallableRef),
    /// JSON null
    Null,
    /// Boolean
    Bool(bool),
    /// Integer or float, with serde_json's representation
    Number(serde_json::Number),
    /// UTF-8 string
    Text(String),
    /// Ordered list of values
    List(Vec<AttributeValue>),
    /// Nested mapping from attribute name to value
    Map(AttributeMap),
}

impl AttributeValue {
    /// True for the callable marker variant
    pub fn is_callable(&self) -> bool {
        matches!(self, AttributeValue::Callable(_))
    }

    /// True for keyed containers (lists count as containers, keyed by index)
    pub fn is_container(&self) -> bool {
        matches!(self, AttributeValue::List(_) | AttributeValue::Map(_))
    }

    /// Borrow the nested mapping, if this is a Map
    pub fn as_map(&self) -> Option<&AttributeMap> {
        match self {
            AttributeValue::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Borrow the list items, if this is a List
    pub fn as_list(&self) -> Option<&[AttributeValue]> {
        match self {
            AttributeValue::List(items) => Some(items),
            _ => None,
        }
    }
}

/// Opaque named reference to a host-side callback
///
/// Two refs are equal when their names are equal; the core never invokes
/// the callback it names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CallableRef {
    #[serde(rename = "$callable")]
    name: String,
}

impl CallableRef {
    /// Create a reference to the named host callback
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The callback name
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        AttributeValue::Bool(value)
    }
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        AttributeValue::Number(value.into())
    }
}

impl From<i32> for AttributeValue {
    fn from(value: i32) -> Self {
        AttributeValue::Number(value.into())
    }
}

impl From<u64> for AttributeValue {
    fn from(value: u64) -> Self {
        AttributeValue::Number(value.into())
    }
}

impl From<f64> for AttributeValue {
    fn from(value: f64) -> Self {
        // Non-finite floats have no JSON representation; they degrade to null
        // the same way serde_json degrades them.
        match serde_json::Number::from_f64(value) {
            Some(number) => AttributeValue::Number(number),
            None => AttributeValue::Null,
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        AttributeValue::Text(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        AttributeValue::Text(value)
    }
}

impl From<Vec<AttributeValue>> for AttributeValue {
    fn from(items: Vec<AttributeValue>) -> Self {
        AttributeValue::List(items)
    }
}

impl From<AttributeMap> for AttributeValue {
    fn from(map: AttributeMap) -> Self {
        AttributeValue::Map(map)
    }
}

impl From<CallableRef> for AttributeValue {
    fn from(callable: CallableRef) -> Self {
        AttributeValue::Callable(callable)
    }
}

/// Conversion from serde_json::Value; JSON values never produce callables
impl From<serde_json::Value> for AttributeValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => AttributeValue::Null,
            serde_json::Value::Bool(b) => AttributeValue::Bool(b),
            serde_json::Value::Number(n) => AttributeValue::Number(n),
            serde_json::Value::String(s) => AttributeValue::Text(s),
            serde_json::Value::Array(items) => {
                AttributeValue::List(items.into_iter().map(Into::into).collect())
            }
            serde_json::Value::Object(entries) => AttributeValue::Map(
                entries
                    .into_iter()
                    .map(|(name, value)| (name, value.into()))
                    .collect(),
            ),
        }
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeValue::Callable(callable) => write!(f, "<callable {}>", callable.name()),
            AttributeValue::Null => write!(f, "null"),
            AttributeValue::Bool(b) => write!(f, "{}", b),
            AttributeValue::Number(n) => write!(f, "{}", n),
            AttributeValue::Text(s) => write!(f, "\"{}\"", s),
            AttributeValue::List(items) => {
                write!(f, "[")?;
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            AttributeValue::Map(entries) => {
                write!(f, "{{")?;
                for (index, (name, value)) in entries.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", name, value)?;
                }
                write!(f, "}}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_round_trip_primitives() {
        let value = AttributeValue::from(serde_json::json!({
            "flag": true,
            "count": 3,
            "label": "hello",
            "nothing": null,
        }));
        let encoded = serde_json::to_string(&value).unwrap();
        let decoded: AttributeValue = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, value);
    }

    #[test]
    fn test_callable_serializes_as_marker_object() {
        let value = AttributeValue::Callable(CallableRef::new("on_save"));
        let encoded = serde_json::to_string(&value).unwrap();
        assert_eq!(encoded, r#"{"$callable":"on_save"}"#);
        let decoded: AttributeValue = serde_json::from_str(&encoded).unwrap();
        assert!(decoded.is_callable());
    }

    #[test]
    fn test_marker_key_with_extra_fields_parses_as_map() {
        let decoded: AttributeValue =
            serde_json::from_str(r#"{"$callable":"on_save","extra":1}"#).unwrap();
        assert!(!decoded.is_callable());
        assert!(decoded.as_map().is_some());
    }

    #[test]
    fn test_from_json_never_produces_callables() {
        let value = AttributeValue::from(serde_json::json!({"$nested": {"deep": [1, 2]}}));
        assert!(!value.is_callable());
    }

    #[test]
    fn test_non_finite_float_degrades_to_null() {
        assert_eq!(AttributeValue::from(f64::NAN), AttributeValue::Null);
    }

    #[test]
    fn test_display_is_compact() {
        let value = AttributeValue::from(serde_json::json!({"a": [1, "x"], "b": null}));
        assert_eq!(value.to_string(), r#"{a: [1, "x"], b: null}"#);
    }
}
