mod content_repository_service;
mod home_content_service;

pub use content_repository_service::ContentRepositoryService;
pub use home_content_service::HomeContentService;
