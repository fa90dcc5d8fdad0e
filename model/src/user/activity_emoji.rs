use serde::{Deserialize, Serialize};

use crate::Snowflake;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ActivityEmoji {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Snowflake>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub animated: Option<bool>,
}

impl ActivityEmoji {
    pub fn new(emoji: String) -> ActivityEmoji {
        ActivityEmoji {
            name: emoji,
            id: None,
            animated: None,
        }
    }

    pub fn new_custom_emoji(name: String, id: Snowflake, animated: bool) -> ActivityEmoji {
        ActivityEmoji {
            name,
            id: Some(id),
            animated: Some(animated),
        }
    }

    pub fn is_custom(&self) -> bool {
        self.id.is_some()
    }
}
