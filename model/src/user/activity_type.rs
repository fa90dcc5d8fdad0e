use num_derive::FromPrimitive;
use num_traits::FromPrimitive;
use serde_repr::{Deserialize_repr, Serialize_repr};

#[derive(
    Serialize_repr, Deserialize_repr, Copy, Clone, Debug, Eq, FromPrimitive, PartialEq, Hash,
)]
#[repr(u8)]
pub enum ActivityType {
    Game = 0,
    Streaming = 1,
    Listening = 2,
    Watching = 3,
    Custom = 4,
    Competing = 5,
}

impl ActivityType {
    pub fn from_u8(value: u8) -> Option<ActivityType> {
        FromPrimitive::from_u8(value)
    }

    pub fn from_i64(value: i64) -> Option<ActivityType> {
        FromPrimitive::from_i64(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert() {
        assert_eq!(ActivityType::from_u8(1), Some(ActivityType::Streaming));
        assert_eq!(ActivityType::from_i64(4), Some(ActivityType::Custom));
        assert_eq!(ActivityType::from_i64(1000), None);
        assert_eq!(ActivityType::from_i64(-1), None);
    }

    #[test]
    fn test_wire_form_is_integer() {
        assert_eq!(serde_json::to_string(&ActivityType::Competing).unwrap(), "5");
        assert!(serde_json::from_str::<ActivityType>("9").is_err());
    }
}
