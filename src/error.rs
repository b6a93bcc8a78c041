use crate::models::CheckoutRejection;

#[derive(Debug, thiserror::Error)]
pub enum ShopError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Checkout rejected: {0}")]
    CheckoutRejected(CheckoutRejection),
}

pub type Result<T> = std::result::Result<T, ShopError>;
