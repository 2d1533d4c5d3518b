use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExpertError {
    #[error("OPENAI_API_KEY is not set")]
    MissingCredential,

    #[error("Transport Error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Unauthorized ({status}): {body}")]
    Unauthorized { status: u16, body: String },

    #[error("Rate Limited: {body}")]
    RateLimited { body: String },

    #[error("API Error {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Malformed Response: {0}")]
    MalformedResponse(String),

    #[error("Config Error: {0}")]
    Config(String),

    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),
}
