use crate::transport::HttpMethod;

#[derive(Debug, thiserror::Error)]
#[error("{method} {url} failed with status {}: {body}", display_status(.status))]
pub struct TransportError {
    pub method: HttpMethod,
    pub url: String,
    /// `None` when no response was received.
    pub status: Option<u16>,
    pub body: String,
}

fn display_status(status: &Option<u16>) -> String {
    status.map_or_else(|| "<none>".to_owned(), |status| status.to_string())
}

#[derive(Debug, thiserror::Error)]
#[error("{operation} is not supported by the REST proxy")]
pub struct UnsupportedOperation {
    pub operation: String,
}

impl UnsupportedOperation {
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
        }
    }
}
