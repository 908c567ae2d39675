use actix_web::{get, HttpResponse, Responder};
use utoipa::OpenApi;

use crate::api::schemas::{ErrorDetail, ErrorResponse, SuccessResponse};
use crate::content::adapter::incoming::web::views::{
    HomeContentView, ProjectView, SkillView, TestimonialView, WorkExperienceView,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio Content API",
        version = "1.0.0",
        description = "Read-only delivery of portfolio content from the headless CMS",
        contact(
            name = "API Support",
            email = "support@example.com"
        )
    ),
    paths(
        crate::content::adapter::incoming::web::routes::get_home_content_handler,
        crate::content::adapter::incoming::web::routes::get_projects_handler,
        crate::content::adapter::incoming::web::routes::get_featured_projects_handler,
        crate::content::adapter::incoming::web::routes::get_project_by_slug_handler,
        crate::content::adapter::incoming::web::routes::get_skills_handler,
        crate::content::adapter::incoming::web::routes::get_work_experience_handler,
        crate::content::adapter::incoming::web::routes::get_testimonials_handler,
    ),
    components(
        schemas(
            // Response wrappers
            SuccessResponse<HomeContentView>,
            ErrorResponse,
            ErrorDetail,

            // Views
            HomeContentView,
            ProjectView,
            SkillView,
            WorkExperienceView,
            TestimonialView
        )
    ),
    tags(
        (name = "content", description = "Portfolio content endpoints"),
    )
)]
pub struct ApiDoc;

#[get("/api-docs/openapi.json")]
pub async fn openapi_json() -> impl Responder {
    HttpResponse::Ok().json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;

    #[actix_web::test]
    async fn document_lists_every_content_route() {
        let doc = ApiDoc::openapi();

        for path in [
            "/api/content/home",
            "/api/content/projects",
            "/api/content/projects/featured",
            "/api/content/projects/{slug}",
            "/api/content/skills",
            "/api/content/experience",
            "/api/content/testimonials",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }

    #[actix_web::test]
    async fn openapi_json_is_served() {
        let app = test::init_service(App::new().service(openapi_json)).await;

        let req = test::TestRequest::get()
            .uri("/api-docs/openapi.json")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["info"]["title"], "Portfolio Content API");
    }
}
