use crate::markdown::application::use_cases::preview_markdown::PreviewMarkdownError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct PreviewRequest {
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct PreviewResponse {
    pub html: String,
}

#[post("/api/admin/preview-markdown")]
pub async fn preview_markdown_handler(
    body: web::Json<PreviewRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.preview_markdown_use_case.execute(&body.content).await {
        Ok(html) => HttpResponse::Ok().json(PreviewResponse { html }),
        Err(PreviewMarkdownError::Render(msg)) => ApiResponse::unprocessable(&msg),
    }
}
