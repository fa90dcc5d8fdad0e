pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("envy error: {0}")]
    EnvyError(#[from] envy::Error),

    #[error("io error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("serde_json error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("model error: {0}")]
    ModelError(#[from] activity_model::ModelError),
}
