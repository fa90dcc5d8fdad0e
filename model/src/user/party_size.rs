use serde::de::Error;
use serde::ser::SerializeTuple;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::{util, Result};

const EXPECTED: &str = "an array of length 2";

/// Occupancy of a party. Travels on the wire as `[current, maximum]` rather than as an
/// object. No check is made that `current <= maximum`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PartySize {
    pub current: i64,
    pub maximum: i64,
}

impl PartySize {
    pub fn new(current: i64, maximum: i64) -> PartySize {
        PartySize { current, maximum }
    }

    pub fn decode(value: Value) -> Result<PartySize> {
        util::decode_value(value)
    }

    /// An absent size encodes as json `null`. Omitting the key is up to the caller.
    pub fn encode(size: Option<&PartySize>) -> Value {
        match size {
            Some(size) => Value::Array(vec![size.current.into(), size.maximum.into()]),
            None => Value::Null,
        }
    }
}

impl Serialize for PartySize {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(2)?;
        tuple.serialize_element(&self.current)?;
        tuple.serialize_element(&self.maximum)?;
        tuple.end()
    }
}

impl<'de> Deserialize<'de> for PartySize {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value: Value = Deserialize::deserialize(deserializer)?;

        let elements = match &value {
            Value::Array(elements) => elements,
            other => return Err(Error::invalid_type(util::to_unexpected(other), &EXPECTED)),
        };

        match elements.as_slice() {
            [current, maximum] => Ok(PartySize {
                current: element_to_int::<D::Error>(current)?,
                maximum: element_to_int::<D::Error>(maximum)?,
            }),
            _ => Err(Error::invalid_length(elements.len(), &EXPECTED)),
        }
    }
}

fn element_to_int<E: Error>(value: &Value) -> std::result::Result<i64, E> {
    value
        .as_i64()
        .ok_or_else(|| E::invalid_type(util::to_unexpected(value), &"a 64-bit integer"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode() {
        let size = PartySize::decode(json!([3, 5])).unwrap();
        assert_eq!(size, PartySize::new(3, 5));
    }

    #[test]
    fn test_encode_order() {
        assert_eq!(PartySize::encode(Some(&PartySize::new(1, 4))), json!([1, 4]));
        assert_eq!(
            serde_json::to_string(&PartySize::new(-2, 0)).unwrap(),
            "[-2,0]"
        );
    }

    #[test]
    fn test_encode_absent_is_null() {
        assert_eq!(PartySize::encode(None), Value::Null);
    }

    #[test]
    fn test_extremes_survive() {
        for (current, maximum) in [(i64::MIN, i64::MAX), (0, 0), (7, 2)] {
            let size = PartySize::new(current, maximum);
            let decoded = PartySize::decode(PartySize::encode(Some(&size))).unwrap();
            assert_eq!(decoded, size);
        }
    }

    #[test]
    fn test_malformed() {
        for value in [json!([1]), json!([1, 2, 3]), json!("x"), json!({}), json!([]), json!(["1", 2]), json!([1.5, 2]), json!(null)] {
            let err = PartySize::decode(value.clone()).unwrap_err();
            assert!(err.is_malformed_payload(), "{} was accepted", value);
        }
    }

    #[test]
    fn test_length_message() {
        let err = PartySize::decode(json!([1, 2, 3])).unwrap_err();
        assert!(err.to_string().contains("expected an array of length 2"), "{}", err);
    }
}
