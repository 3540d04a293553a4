//! Lenient parsing for platform metafield values.
//!
//! Merchants attach loyalty configuration to customers and products through
//! metafields, which arrive as nullable strings that may themselves encode
//! JSON. A tier restriction can be `"gold"`, `"{\"required_tier\":\"gold\"}"`,
//! or absent entirely; a points threshold can be `500`, `"500"`, or
//! `{"points": 500, "use_lifetime": true}`. Every rule goes through the same
//! parse so the tolerance is uniform: nothing here ever fails, malformed
//! values just collapse to [`MetafieldValue::Missing`].

use serde_json::Value;

/// The result of leniently parsing a raw metafield value.
#[derive(Debug, Clone, PartialEq)]
pub enum MetafieldValue {
    /// A JSON number, or text that parses as one.
    Number(f64),
    /// Plain text, or a JSON-encoded string.
    Text(String),
    /// A JSON object.
    Object(serde_json::Map<String, Value>),
    /// Absent, empty, or an unusable JSON shape (array, bool, null).
    Missing,
}

impl MetafieldValue {
    /// Parse a raw metafield value.
    ///
    /// Tries a JSON decode first; anything that is not valid JSON is kept as
    /// plain text. Arrays, booleans, and JSON `null` carry no usable loyalty
    /// configuration and resolve to [`Self::Missing`].
    #[must_use]
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::Missing;
        };
        if raw.trim().is_empty() {
            return Self::Missing;
        }
        match serde_json::from_str::<Value>(raw) {
            Ok(Value::Number(n)) => n.as_f64().map_or(Self::Missing, Self::Number),
            Ok(Value::String(s)) => Self::Text(s),
            Ok(Value::Object(map)) => Self::Object(map),
            Ok(_) => Self::Missing,
            Err(_) => Self::Text(raw.to_string()),
        }
    }

    /// Numeric view: a number directly, or text that parses as one.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
            Self::Object(_) | Self::Missing => None,
        }
    }

    /// Text view of the value, if it is textual.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Numeric field of an object value, accepting numbers and numeric strings.
    #[must_use]
    pub fn object_number(&self, key: &str) -> Option<f64> {
        let Self::Object(map) = self else {
            return None;
        };
        match map.get(key)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
            _ => None,
        }
    }

    /// String field of an object value.
    #[must_use]
    pub fn object_text(&self, key: &str) -> Option<&str> {
        let Self::Object(map) = self else {
            return None;
        };
        map.get(key).and_then(Value::as_str)
    }

    /// Boolean field of an object value, defaulting to `false` when absent
    /// or not a boolean.
    #[must_use]
    pub fn object_bool(&self, key: &str) -> bool {
        let Self::Object(map) = self else {
            return false;
        };
        map.get(key).and_then(Value::as_bool).unwrap_or(false)
    }
}
