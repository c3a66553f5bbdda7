use thiserror::Error;

/// Failure talking to the catalogue service.
///
/// `Network` and `Api` are transport failures; `Decode` means the service
/// answered but the body did not have the expected shape.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid base url '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
    #[error("network error: {0}")]
    Network(String),
    #[error("API error ({status}) from {url}: {body}")]
    Api { status: u16, url: String, body: String },
    #[error("decode error for {url}: {message}")]
    Decode { url: String, message: String },
}

impl ClientError {
    pub fn is_transport(&self) -> bool {
        matches!(self, ClientError::Network(_) | ClientError::Api { .. })
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, ClientError::Decode { .. })
    }
}
