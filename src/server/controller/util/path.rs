use axum::extract::{rejection::PathRejection, FromRequestParts};

use crate::server::error::Error;

/// Path extractor whose rejections use the API's `{message}` error body
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(Error))]
pub struct AppPath<T>(pub T);

impl From<PathRejection> for Error {
    fn from(rejection: PathRejection) -> Self {
        Error::validation(rejection.body_text())
    }
}
