use async_trait::async_trait;

use super::content_repository::{ContentRetrievalError, SkillsByCategory};
use crate::modules::content::domain::entities::{Project, Testimonial, WorkExperience};

/// Everything the landing page shows, fetched in one go.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HomeContent {
    pub projects: Vec<Project>,
    pub skills_by_category: SkillsByCategory,
    pub work_experience: Vec<WorkExperience>,
    pub testimonials: Vec<Testimonial>,
}

#[async_trait]
pub trait LoadHomeContentUseCase: Send + Sync {
    async fn execute(&self) -> Result<HomeContent, ContentRetrievalError>;
}
