pub mod api;
pub mod health;
pub mod modules;
pub mod shared;
pub use modules::content;

use crate::content::adapter::outgoing::CosmicHttpClient;
use crate::content::application::content_use_cases::ContentUseCases;
use crate::content::application::ports::incoming::use_cases::ContentRepository;
use crate::content::application::service::{ContentRepositoryService, HomeContentService};
use crate::shared::config::{load_dotenv, CosmicConfig, ServerConfig};

use actix_web::{web, App, HttpServer};
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub content: ContentUseCases,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    // Environment files first so RUST_LOG from .env is honoured
    load_dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    let server_config = ServerConfig::from_env()?;
    let cosmic_config = CosmicConfig::from_env()?;

    let client = CosmicHttpClient::new(cosmic_config)?;
    let repository: Arc<dyn ContentRepository + Send + Sync> =
        Arc::new(ContentRepositoryService::new(client));
    let load_home = HomeContentService::new(Arc::clone(&repository));

    let state = AppState {
        content: ContentUseCases {
            repository,
            load_home: Arc::new(load_home),
        },
    };

    let server_url = server_config.bind_address();
    info!(address = %server_url, "Server listening");

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    use crate::content::adapter::incoming::web::routes;

    // Health
    cfg.service(crate::health::health);
    // Content; featured must precede the {slug} matcher
    cfg.service(routes::get_home_content_handler);
    cfg.service(routes::get_projects_handler);
    cfg.service(routes::get_featured_projects_handler);
    cfg.service(routes::get_project_by_slug_handler);
    cfg.service(routes::get_skills_handler);
    cfg.service(routes::get_work_experience_handler);
    cfg.service(routes::get_testimonials_handler);
    // Docs
    cfg.service(crate::api::openapi::openapi_json);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
        std::process::exit(1);
    }
}
