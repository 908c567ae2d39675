use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::modules::content::application::ports::incoming::use_cases::{
    ContentRepository, ContentRetrievalError, HomeContent, LoadHomeContentUseCase,
};

/// Loads the four landing-page collections concurrently.
///
/// The collections are independent, so all four calls are issued at once.
/// The first failure aborts the remaining calls and is returned as-is, so the
/// caller sees which operation failed.
pub struct HomeContentService {
    repository: Arc<dyn ContentRepository + Send + Sync>,
}

impl HomeContentService {
    pub fn new(repository: Arc<dyn ContentRepository + Send + Sync>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl LoadHomeContentUseCase for HomeContentService {
    async fn execute(&self) -> Result<HomeContent, ContentRetrievalError> {
        let (projects, skills_by_category, work_experience, testimonials) = tokio::try_join!(
            self.repository.list_projects(),
            self.repository.list_skills_grouped_by_category(),
            self.repository.list_work_experience(),
            self.repository.list_testimonials(),
        )
        .map_err(|err| {
            debug!(operation = %err.operation, "Home content incomplete: {}", err);
            err
        })?;

        Ok(HomeContent {
            projects,
            skills_by_category,
            work_experience,
            testimonials,
        })
    }
}
