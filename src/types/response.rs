use axum::{
    http::{header::LOCATION, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Serialize;

/// Created response helper: 201 with a `Location` header pointing at the new resource
pub struct Created<T: Serialize> {
    pub location: String,
    pub body: T,
}

impl<T: Serialize> Created<T> {
    pub fn at(location: impl Into<String>, body: T) -> Self {
        Self {
            location: location.into(),
            body,
        }
    }
}

impl<T: Serialize> IntoResponse for Created<T> {
    fn into_response(self) -> axum::response::Response {
        (
            StatusCode::CREATED,
            [(LOCATION, self.location)],
            Json(self.body),
        )
            .into_response()
    }
}

/// No content response helper (common pattern for DELETE endpoints)
pub struct NoContent;

impl IntoResponse for NoContent {
    fn into_response(self) -> axum::response::Response {
        StatusCode::NO_CONTENT.into_response()
    }
}
