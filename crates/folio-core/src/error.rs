use thiserror::Error;

#[derive(Debug, Error)]
pub enum FolioError {
    #[error("invalid site config: {0}")]
    Config(#[from] serde_json::Error),

    #[error("invalid trigger position `{0}`")]
    TriggerPosition(String),

    #[error("contact form is missing `{0}`")]
    IncompleteForm(&'static str),

    #[error("contact form cannot submit while {0}")]
    FormBusy(&'static str),

    #[error("embedded asset failed to load: {0}")]
    EmbedLoad(String),
}

pub type Result<T> = std::result::Result<T, FolioError>;
