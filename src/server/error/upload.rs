use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::{error_response, InternalServerError};

#[derive(Error, Debug)]
pub enum UploadError {
    /// Uploaded file is not one of the accepted image types.
    ///
    /// Results in a 400 Bad Request response.
    #[error("Unsupported upload content type: {0}")]
    UnsupportedType(String),

    /// Uploaded file exceeds the configured size limit.
    ///
    /// Results in a 400 Bad Request response.
    #[error("Upload of {size} bytes exceeds limit of {max} bytes")]
    TooLarge {
        /// Size of the rejected file in bytes
        size: usize,
        /// Configured maximum in bytes
        max: usize,
    },

    /// Writing the file to the upload directory failed.
    ///
    /// Results in a 500 Internal Server Error response.
    #[error("Failed to store upload: {0}")]
    Storage(#[from] std::io::Error),
}

impl IntoResponse for UploadError {
    fn into_response(self) -> Response {
        match self {
            Self::UnsupportedType(_) => error_response(
                StatusCode::BAD_REQUEST,
                "Only image files are allowed (jpeg, jpg, png, gif, webp)",
            ),
            Self::TooLarge { max, .. } => error_response(
                StatusCode::BAD_REQUEST,
                format!("File too large, maximum size is {} bytes", max),
            ),
            err @ Self::Storage(_) => InternalServerError(err).into_response(),
        }
    }
}
