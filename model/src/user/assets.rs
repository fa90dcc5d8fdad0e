use serde::{Deserialize, Serialize};

/// Images attached to a rich presence activity. Image keys are *usually* snowflakes,
/// but may also be prefixed external references such as `spotify:<id>`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Assets {
    pub large_image: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub large_text: Option<String>,

    /// Round-tripped on the wire but not exposed to readers.
    pub(crate) small_image: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub small_text: Option<String>,
}

impl Assets {
    pub fn new(large_image: Option<String>) -> Assets {
        Assets {
            large_image,
            ..Default::default()
        }
    }

    pub fn with_large_text(mut self, text: impl Into<String>) -> Assets {
        self.large_text = Some(text.into());
        self
    }

    pub fn with_small_image(mut self, image: impl Into<String>) -> Assets {
        self.small_image = Some(image.into());
        self
    }

    pub fn with_small_text(mut self, text: impl Into<String>) -> Assets {
        self.small_text = Some(text.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_images_always_present() {
        let value = serde_json::to_value(Assets::new(None)).unwrap();
        assert_eq!(value, json!({"large_image": null, "small_image": null}));
    }

    #[test]
    fn test_text_omitted_when_absent() {
        let assets = Assets::new(Some("123".to_string()))
            .with_small_image("456")
            .with_small_text("on fire");

        assert_eq!(
            serde_json::to_value(&assets).unwrap(),
            json!({"large_image": "123", "small_image": "456", "small_text": "on fire"})
        );
    }

    #[test]
    fn test_small_image_decoded() {
        let assets: Assets = serde_json::from_value(json!({"small_image": "mp:abc"})).unwrap();
        assert_eq!(assets.small_image.as_deref(), Some("mp:abc"));
        assert_eq!(assets.large_image, None);
    }
}
