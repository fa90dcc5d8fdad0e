use activity_model::user::Activity;
use tracing::info;

use crate::{Config, Result};

#[derive(Debug)]
pub struct Report {
    pub activity: Activity,
    pub encoded: Vec<u8>,
}

/// Decodes one activity payload and re-encodes it in wire form.
pub fn inspect(raw: &[u8], config: &Config) -> Result<Report> {
    let activity = Activity::from_slice(raw)?;

    info!(
        name = activity.name.as_deref().unwrap_or_default(),
        rich_presence = activity.is_rich_presence(),
        custom_status = activity.is_custom_status(),
        "Decoded activity"
    );

    let encoded = if config.pretty {
        serde_json::to_vec_pretty(&activity)?
    } else {
        activity.to_vec()?
    };

    Ok(Report { activity, encoded })
}
