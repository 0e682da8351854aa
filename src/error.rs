use serde::Deserialize;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("HTTP request failed for {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("API key rejected: {0}")]
    Unauthorized(String),

    #[error("Account {0:?} cannot be sent as a URL path segment")]
    InvalidAccount(String),

    #[error("Failed to read {name}: {source}")]
    Input {
        name: String,
        #[source]
        source: csv::Error,
    },

    #[error("Invalid API URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Failed to write report: {0}")]
    Output(#[from] std::io::Error),
}

// { "statusCode": 401, "message": "Access denied due to invalid hibp-api-key." }
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiMessage {
    message: String,
}

/// Pulls the human readable message out of an error payload, falling back to
/// the raw body when it is not the usual JSON envelope.
pub fn api_message(body: &[u8]) -> String {
    match serde_json::from_slice::<ApiMessage>(body) {
        Ok(msg) => msg.message,
        Err(_) => String::from_utf8_lossy(body).trim().to_string(),
    }
}
