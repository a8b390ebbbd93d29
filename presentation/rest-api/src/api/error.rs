use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

/// Error body shared by every endpoint
#[derive(Object, Debug)]
pub struct ErrorResponse {
    /// Code-style error message
    pub error: String,
}

impl ErrorResponse {
    pub fn json(error: impl Into<String>) -> Json<Self> {
        Json(Self {
            error: error.into(),
        })
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}
