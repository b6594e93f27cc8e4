//! Stamps the request path onto error envelopes.
//!
//! Handlers return [`AppError`](crate::errors::AppError), which renders
//! without knowing the request. This layer runs outermost, remembers the
//! original path and re-renders any response carrying an [`ErrorReport`].

use axum::{
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::config::ERROR_LABEL_NOT_FOUND;
use crate::errors::ErrorReport;

pub async fn error_envelope(request: Request, next: Next) -> Response {
    let path = request.uri().path().to_string();
    let response = next.run(request).await;

    let report = response.extensions().get::<ErrorReport>().cloned();
    match report {
        Some(report) => {
            tracing::debug!(%path, status = %report.status, "request failed");
            report.render(path)
        }
        None => response,
    }
}

/// Fallback for paths no route matches
pub async fn route_not_found(request: Request) -> impl IntoResponse {
    ErrorReport {
        status: StatusCode::NOT_FOUND,
        error: ERROR_LABEL_NOT_FOUND,
        message: format!("No route for {}", request.uri().path()),
    }
    .render(request.uri().path())
}
