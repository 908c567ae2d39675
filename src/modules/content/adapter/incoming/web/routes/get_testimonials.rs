use actix_web::{get, web, Responder};
use tracing::debug;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::content::adapter::incoming::web::views::TestimonialView;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Testimonials, highest rating first
#[utoipa::path(
    get,
    path = "/api/content/testimonials",
    tag = "content",
    responses(
        (status = 200, description = "Ordered testimonials", body = inline(SuccessResponse<Vec<TestimonialView>>)),
        (status = 500, description = "Testimonials could not be loaded", body = ErrorResponse),
    )
)]
#[get("/api/content/testimonials")]
pub async fn get_testimonials_handler(data: web::Data<AppState>) -> impl Responder {
    match data.content.repository.list_testimonials().await {
        Ok(testimonials) => ApiResponse::success(
            testimonials
                .into_iter()
                .map(TestimonialView::from)
                .collect::<Vec<_>>(),
        ),
        Err(e) => {
            debug!("Testimonials unavailable: {}", e);
            ApiResponse::content_unavailable()
        }
    }
}
