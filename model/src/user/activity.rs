use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{ActivityEmoji, ActivityFlags, ActivityType, Assets, Party, Secrets, Timestamps};
use crate::{util, Result, Snowflake};

/// Name Discord gives to the activity backing a user's custom status.
pub const CUSTOM_STATUS_NAME: &str = "Custom Status";

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Activity {
    /// Written even when absent.
    pub name: Option<String>,

    /// only valid when activity_type = streaming
    #[serde(rename = "url", skip_serializing_if = "Option::is_none")]
    pub stream_url: Option<String>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub activity_type: Option<ActivityType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamps: Option<Timestamps>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_id: Option<Snowflake>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub emoji: Option<ActivityEmoji>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub party: Option<Party>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub assets: Option<Assets>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub secrets: Option<Secrets>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub flags: Option<ActivityFlags>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub buttons: Option<Vec<String>>,
}

impl Activity {
    pub fn new(name: String, activity_type: ActivityType) -> Activity {
        Activity {
            name: Some(name),
            activity_type: Some(activity_type),
            ..Default::default()
        }
    }

    pub fn custom_status(state: String) -> Activity {
        Activity {
            state: Some(state),
            ..Activity::new(CUSTOM_STATUS_NAME.to_string(), ActivityType::Custom)
        }
    }

    pub fn decode(value: Value) -> Result<Activity> {
        util::decode_value(value)
    }

    pub fn from_slice(raw: &[u8]) -> Result<Activity> {
        util::decode_slice(raw)
    }

    pub fn encode(&self) -> Result<Value> {
        util::encode_value(self)
    }

    pub fn to_vec(&self) -> Result<Vec<u8>> {
        util::encode_vec(self)
    }

    pub fn application_id(&self) -> Option<u64> {
        self.application_id.map(Snowflake::get)
    }

    pub fn created_at_time(&self) -> Option<DateTime<Utc>> {
        self.created_at.and_then(util::millis_to_datetime)
    }

    /// Rich presence fields are only ever set on activities of user accounts.
    pub fn is_rich_presence(&self) -> bool {
        self.details.is_some()
            || self.state.is_some()
            || self.application_id.is_some()
            || self.instance.is_some()
            || self.party.is_some()
            || self.assets.is_some()
            || self.secrets.is_some()
            || self.timestamps.is_some()
    }

    pub fn is_custom_status(&self) -> bool {
        self.name.as_deref() == Some(CUSTOM_STATUS_NAME)
    }
}
