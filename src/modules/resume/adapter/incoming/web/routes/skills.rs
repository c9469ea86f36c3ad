use crate::resume::application::domain::entities::SkillGroupDraft;
use crate::resume::application::use_cases::get_skills::GetSkillsError;
use crate::resume::application::use_cases::replace_skills::ReplaceSkillsError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, put, web, Responder};
use tracing::error;

#[get("/api/admin/resume/skills")]
pub async fn get_skills_handler(data: web::Data<AppState>) -> impl Responder {
    match data.get_skills_use_case.execute().await {
        Ok(groups) => ApiResponse::ok(groups),
        Err(GetSkillsError::RepositoryError(msg)) => {
            error!(error = %msg, "skills read failed");
            ApiResponse::internal_error()
        }
    }
}

/// Collection replace: the submitted array becomes the whole collection.
#[put("/api/admin/resume/skills")]
pub async fn replace_skills_handler(
    body: web::Json<Vec<SkillGroupDraft>>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.replace_skills_use_case.execute(body.into_inner()).await {
        Ok(()) => ApiResponse::success(),
        Err(ReplaceSkillsError::Validation(msg)) => ApiResponse::bad_request(&msg),
        Err(ReplaceSkillsError::RepositoryError(msg)) => {
            error!(error = %msg, "skills replace failed");
            ApiResponse::internal_error()
        }
    }
}
