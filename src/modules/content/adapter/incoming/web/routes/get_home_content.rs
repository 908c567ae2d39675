use actix_web::{get, web, Responder};
use tracing::debug;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::content::adapter::incoming::web::views::HomeContentView;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Everything the home page shows, loaded in one round
#[utoipa::path(
    get,
    path = "/api/content/home",
    tag = "content",
    responses(
        (
            status = 200,
            description = "Projects, grouped skills, work experience and testimonials",
            body = inline(SuccessResponse<HomeContentView>)
        ),
        (
            status = 500,
            description = "One of the collections could not be loaded",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "CONTENT_UNAVAILABLE",
                    "message": "Content is temporarily unavailable. Please try again.",
                    "retryable": true
                }
            })
        ),
    )
)]
#[get("/api/content/home")]
pub async fn get_home_content_handler(data: web::Data<AppState>) -> impl Responder {
    match data.content.load_home.execute().await {
        Ok(home) => ApiResponse::success(HomeContentView::from(home)),
        Err(e) => {
            debug!(operation = %e.operation, "Home content unavailable: {}", e);
            ApiResponse::content_unavailable()
        }
    }
}
