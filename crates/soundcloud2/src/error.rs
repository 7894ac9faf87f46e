// SPDX-License-Identifier: GPL-3.0-or-later

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SoundcloudError>;

#[derive(Debug, Error)]
pub enum SoundcloudError {
    #[error("API key must not be empty")]
    InvalidApiKey,

    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("API error: {status} - {body}")]
    ApiError { status: u16, body: String },

    #[error("Invalid JSON in response: {source}")]
    InvalidJson {
        /// Raw response body, kept for debugging.
        body: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}
