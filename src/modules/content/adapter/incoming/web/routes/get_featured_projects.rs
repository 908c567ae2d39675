use actix_web::{get, web, Responder};

use crate::api::schemas::SuccessResponse;
use crate::modules::content::adapter::incoming::web::views::ProjectView;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Featured projects. Degrades to an empty list instead of failing.
#[utoipa::path(
    get,
    path = "/api/content/projects/featured",
    tag = "content",
    responses(
        (status = 200, description = "Featured projects, possibly empty", body = inline(SuccessResponse<Vec<ProjectView>>)),
    )
)]
#[get("/api/content/projects/featured")]
pub async fn get_featured_projects_handler(data: web::Data<AppState>) -> impl Responder {
    let featured = data.content.repository.list_featured_projects().await;

    ApiResponse::success(
        featured
            .into_iter()
            .map(ProjectView::from)
            .collect::<Vec<_>>(),
    )
}
