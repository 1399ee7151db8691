//! GET /download-cv — renders the résumé and streams it as an attachment.
//!
//! The render is a synchronous CPU-bound pass, so it runs inside
//! `tokio::task::spawn_blocking` to keep the async executor unblocked.
//! Each request gets its own cursor, geometry, and canvas — concurrent
//! downloads share nothing mutable.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
};
use tracing::info;

use crate::errors::AppError;
use crate::layout::render_script;
use crate::render::PdfCanvas;
use crate::resume::resume_script;
use crate::state::AppState;

pub async fn download_cv(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let geometry = state.geometry;
    let script = resume_script();

    let pdf_bytes = tokio::task::spawn_blocking(move || {
        render_script(&script, &geometry, PdfCanvas::new(geometry))
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("render task failed to join: {e}")))??;

    info!(bytes = pdf_bytes.len(), "resume render completed");

    let disposition = format!("attachment; filename=\"{}\"", state.config.cv_filename);
    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        pdf_bytes,
    ))
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::layout::PageGeometry;
    use axum::body::to_bytes;
    use axum::response::Response;

    fn make_state() -> AppState {
        AppState {
            config: Config {
                port: 3000,
                rust_log: "info".to_string(),
                cv_filename: "Senior_Fullstack_Developer_CV.pdf".to_string(),
            },
            geometry: PageGeometry::letter(),
        }
    }

    async fn call_handler() -> Response {
        download_cv(State(make_state()))
            .await
            .expect("render should succeed")
            .into_response()
    }

    #[tokio::test]
    async fn test_download_sets_pdf_content_type_and_disposition() {
        let response = call_handler().await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/pdf"
        );
        let disposition = response
            .headers()
            .get(header::CONTENT_DISPOSITION)
            .unwrap()
            .to_str()
            .unwrap();
        assert!(disposition.starts_with("attachment"));
        assert!(disposition.contains("Senior_Fullstack_Developer_CV.pdf"));
    }

    #[tokio::test]
    async fn test_download_body_is_a_pdf_document() {
        let response = call_handler().await;
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(body.starts_with(b"%PDF"), "body must carry the PDF magic bytes");
    }
}
