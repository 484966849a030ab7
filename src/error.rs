use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("No city name given and none saved")]
    InvalidCityName,

    #[error("No location available to refresh from")]
    InvalidLocationData,

    #[error("Missing API key: pass --api-key or set OPENWEATHER_API_KEY")]
    MissingApiKey,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
