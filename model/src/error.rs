use serde_json::error::Category;

pub type Result<T> = std::result::Result<T, ModelError>;

#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("Malformed payload: {0}")]
    MalformedPayload(serde_json::Error),

    #[error("Payload is not valid json: {0}")]
    InvalidJson(serde_json::Error),

    #[error("Error occurred while serializing json: {0}")]
    EncodeError(serde_json::Error),
}

impl ModelError {
    /// Sorts a decode failure into syntax problems and type coercion problems.
    pub fn from_decode(e: serde_json::Error) -> ModelError {
        match e.classify() {
            Category::Data => ModelError::MalformedPayload(e),
            Category::Syntax | Category::Eof | Category::Io => ModelError::InvalidJson(e),
        }
    }

    pub fn is_malformed_payload(&self) -> bool {
        matches!(self, ModelError::MalformedPayload(_))
    }
}
