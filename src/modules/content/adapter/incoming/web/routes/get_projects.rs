use actix_web::{get, web, Responder};
use tracing::debug;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::content::adapter::incoming::web::views::ProjectView;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// All projects, featured first then newest first
#[utoipa::path(
    get,
    path = "/api/content/projects",
    tag = "content",
    responses(
        (status = 200, description = "Ordered project list", body = inline(SuccessResponse<Vec<ProjectView>>)),
        (status = 500, description = "Projects could not be loaded", body = ErrorResponse),
    )
)]
#[get("/api/content/projects")]
pub async fn get_projects_handler(data: web::Data<AppState>) -> impl Responder {
    match data.content.repository.list_projects().await {
        Ok(projects) => ApiResponse::success(
            projects
                .into_iter()
                .map(ProjectView::from)
                .collect::<Vec<_>>(),
        ),
        Err(e) => {
            debug!("Project listing unavailable: {}", e);
            ApiResponse::content_unavailable()
        }
    }
}
