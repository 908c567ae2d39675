use std::collections::BTreeMap;

use actix_web::{get, web, Responder};
use tracing::debug;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::content::adapter::incoming::web::views::{skill_groups, SkillView};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Skills grouped by category
#[utoipa::path(
    get,
    path = "/api/content/skills",
    tag = "content",
    responses(
        (
            status = 200,
            description = "Skill groups; categories without skills are omitted",
            body = inline(SuccessResponse<BTreeMap<String, Vec<SkillView>>>)
        ),
        (status = 500, description = "Skills could not be loaded", body = ErrorResponse),
    )
)]
#[get("/api/content/skills")]
pub async fn get_skills_handler(data: web::Data<AppState>) -> impl Responder {
    match data.content.repository.list_skills_grouped_by_category().await {
        Ok(grouped) => ApiResponse::success(skill_groups(grouped)),
        Err(e) => {
            debug!("Skill listing unavailable: {}", e);
            ApiResponse::content_unavailable()
        }
    }
}
