use async_trait::async_trait;

use crate::modules::content::application::ports::incoming::use_cases::{
    ContentOperation, ContentRepository, ContentRetrievalError, HomeContent,
    LoadHomeContentUseCase, SkillsByCategory,
};
use crate::modules::content::application::ports::outgoing::ContentClientError;
use crate::modules::content::domain::entities::{Project, Testimonial, WorkExperience};

pub fn retrieval_error(operation: ContentOperation) -> ContentRetrievalError {
    ContentRetrievalError {
        operation,
        cause: ContentClientError::Status {
            status: 502,
            message: "Bad Gateway".to_string(),
        },
    }
}

/// Repository stub with one canned result per operation. Everything defaults
/// to an empty, successful result.
#[derive(Clone)]
pub struct StubContentRepository {
    pub projects: Result<Vec<Project>, ContentRetrievalError>,
    pub featured: Vec<Project>,
    pub project_by_slug: Result<Option<Project>, ContentRetrievalError>,
    pub skills: Result<SkillsByCategory, ContentRetrievalError>,
    pub work_experience: Result<Vec<WorkExperience>, ContentRetrievalError>,
    pub testimonials: Result<Vec<Testimonial>, ContentRetrievalError>,
}

impl Default for StubContentRepository {
    fn default() -> Self {
        Self {
            projects: Ok(Vec::new()),
            featured: Vec::new(),
            project_by_slug: Ok(None),
            skills: Ok(SkillsByCategory::new()),
            work_experience: Ok(Vec::new()),
            testimonials: Ok(Vec::new()),
        }
    }
}

#[async_trait]
impl ContentRepository for StubContentRepository {
    async fn list_projects(&self) -> Result<Vec<Project>, ContentRetrievalError> {
        self.projects.clone()
    }

    async fn list_featured_projects(&self) -> Vec<Project> {
        self.featured.clone()
    }

    async fn get_project_by_slug(
        &self,
        _slug: &str,
    ) -> Result<Option<Project>, ContentRetrievalError> {
        self.project_by_slug.clone()
    }

    async fn list_skills_grouped_by_category(
        &self,
    ) -> Result<SkillsByCategory, ContentRetrievalError> {
        self.skills.clone()
    }

    async fn list_work_experience(&self) -> Result<Vec<WorkExperience>, ContentRetrievalError> {
        self.work_experience.clone()
    }

    async fn list_testimonials(&self) -> Result<Vec<Testimonial>, ContentRetrievalError> {
        self.testimonials.clone()
    }
}

#[derive(Clone)]
pub struct StubLoadHomeContentUseCase {
    result: Result<HomeContent, ContentRetrievalError>,
}

impl StubLoadHomeContentUseCase {
    pub fn success(content: HomeContent) -> Self {
        Self {
            result: Ok(content),
        }
    }

    pub fn error(operation: ContentOperation) -> Self {
        Self {
            result: Err(retrieval_error(operation)),
        }
    }
}

#[async_trait]
impl LoadHomeContentUseCase for StubLoadHomeContentUseCase {
    async fn execute(&self) -> Result<HomeContent, ContentRetrievalError> {
        self.result.clone()
    }
}
