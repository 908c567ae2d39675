use actix_web::{get, web, Responder};
use tracing::debug;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::content::adapter::incoming::web::views::WorkExperienceView;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Work history, current positions first
#[utoipa::path(
    get,
    path = "/api/content/experience",
    tag = "content",
    responses(
        (status = 200, description = "Ordered work experience", body = inline(SuccessResponse<Vec<WorkExperienceView>>)),
        (status = 500, description = "Work experience could not be loaded", body = ErrorResponse),
    )
)]
#[get("/api/content/experience")]
pub async fn get_work_experience_handler(data: web::Data<AppState>) -> impl Responder {
    match data.content.repository.list_work_experience().await {
        Ok(entries) => ApiResponse::success(
            entries
                .into_iter()
                .map(WorkExperienceView::from)
                .collect::<Vec<_>>(),
        ),
        Err(e) => {
            debug!("Work experience unavailable: {}", e);
            ApiResponse::content_unavailable()
        }
    }
}
