use thiserror::Error;

/// Failures talking to the expenses backend. The `Display` text is what the
/// dashboard shows to the user.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(#[from] gloo_net::Error),

    #[error("{endpoint} API error: {status} {status_text}")]
    Status {
        endpoint: &'static str,
        status: u16,
        status_text: String,
    },

    #[error("Invalid {0} data format")]
    InvalidPayload(&'static str),

    #[error("Could not decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_message_names_endpoint() {
        let err = ApiError::Status {
            endpoint: "Expenses",
            status: 500,
            status_text: "Internal Server Error".to_string(),
        };
        assert_eq!(err.to_string(), "Expenses API error: 500 Internal Server Error");
    }

    #[test]
    fn invalid_payload_message() {
        assert_eq!(
            ApiError::InvalidPayload("expense").to_string(),
            "Invalid expense data format"
        );
    }
}
