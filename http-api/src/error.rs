use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tarefas_core::error::{ErrorBody, TaskError};

/// Wire adapter turning a core error into status plus JSON body.
///
/// The status comes from the error's failing phase and the driver message
/// rides along in `details`; handlers only ever `?` their repository calls.
#[derive(Debug)]
pub struct ApiError(pub TaskError);

impl From<TaskError> for ApiError {
    fn from(err: TaskError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(ErrorBody::from(&self.0))).into_response()
    }
}
