use axum::extract::{rejection::JsonRejection, FromRequest};

use crate::server::error::Error;

/// JSON body extractor whose rejections use the API's `{message}` error body
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(Error))]
pub struct AppJson<T>(pub T);

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        Error::validation(rejection.body_text())
    }
}
