use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::product::errors::ProductError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let status = match &self {
            ProductError::Validation(_) => StatusCode::BAD_REQUEST,
            ProductError::NotFound => StatusCode::NOT_FOUND,
            ProductError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, ErrorResponse::json(self.to_string()))
    }
}
