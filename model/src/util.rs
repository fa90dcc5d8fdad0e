use chrono::{DateTime, Utc};
use serde::de::{DeserializeOwned, Unexpected};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::{ModelError, Result};

pub fn to_unexpected(value: &Value) -> Unexpected<'_> {
    match value {
        Value::Null => Unexpected::Unit,
        Value::Bool(b) => Unexpected::Bool(*b),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Unexpected::Signed(i)
            } else if let Some(u) = n.as_u64() {
                Unexpected::Unsigned(u)
            } else {
                // arbitrary_precision is off, so every number fits in f64
                Unexpected::Float(n.as_f64().unwrap_or(f64::NAN))
            }
        }
        Value::String(s) => Unexpected::Str(s),
        Value::Array(_) => Unexpected::Seq,
        Value::Object(_) => Unexpected::Map,
    }
}

pub fn decode_value<T: DeserializeOwned>(value: Value) -> Result<T> {
    serde_json::from_value(value).map_err(rejected)
}

pub fn decode_slice<T: DeserializeOwned>(raw: &[u8]) -> Result<T> {
    serde_json::from_slice(raw).map_err(rejected)
}

pub fn encode_value<T: Serialize>(data: &T) -> Result<Value> {
    serde_json::to_value(data).map_err(ModelError::EncodeError)
}

pub fn encode_vec<T: Serialize>(data: &T) -> Result<Vec<u8>> {
    serde_json::to_vec(data).map_err(ModelError::EncodeError)
}

fn rejected(e: serde_json::Error) -> ModelError {
    debug!(error = %e, "Rejected payload");
    ModelError::from_decode(e)
}

/// Millisecond epochs outside chrono's range map to `None`.
pub fn millis_to_datetime(millis: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp_millis(millis)
}
