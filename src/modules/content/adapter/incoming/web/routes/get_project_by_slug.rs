use actix_web::{get, web, Responder};
use tracing::debug;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::content::adapter::incoming::web::views::ProjectView;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Single project detail
#[utoipa::path(
    get,
    path = "/api/content/projects/{slug}",
    tag = "content",
    params(
        ("slug" = String, Path, description = "Project slug", example = "portfolio-site")
    ),
    responses(
        (status = 200, description = "Project found", body = inline(SuccessResponse<ProjectView>)),
        (
            status = 404,
            description = "No project with this slug",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "PROJECT_NOT_FOUND",
                    "message": "Project not found"
                }
            })
        ),
        (status = 500, description = "Project could not be loaded", body = ErrorResponse),
    )
)]
#[get("/api/content/projects/{slug}")]
pub async fn get_project_by_slug_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let slug = path.into_inner();

    match data.content.repository.get_project_by_slug(&slug).await {
        Ok(Some(project)) => ApiResponse::success(ProjectView::from(project)),
        Ok(None) => ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found"),
        Err(e) => {
            debug!(slug = %slug, "Project lookup unavailable: {}", e);
            ApiResponse::content_unavailable()
        }
    }
}
