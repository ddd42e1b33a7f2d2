use std::fmt;

#[derive(Clone, Debug)]
pub enum ApiError {
    Network(String),
    Http { status: u16, detail: String },
    Parse(String),
    Serialization(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(message) => write!(formatter, "Network error: {message}"),
            ApiError::Http { status, detail } => {
                write!(formatter, "Request failed ({status}): {detail}")
            }
            ApiError::Parse(message) => write!(formatter, "Response error: {message}"),
            ApiError::Serialization(message) => {
                write!(formatter, "Request error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}
