use std::collections::BTreeMap;
use std::fmt;

use async_trait::async_trait;

use crate::modules::content::application::ports::outgoing::ContentClientError;
use crate::modules::content::domain::entities::{
    Project, Skill, SkillCategory, Testimonial, WorkExperience,
};

pub type SkillsByCategory = BTreeMap<SkillCategory, Vec<Skill>>;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentOperation {
    ListProjects,
    GetProjectBySlug,
    ListSkills,
    ListWorkExperience,
    ListTestimonials,
}

impl fmt::Display for ContentOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ContentOperation::ListProjects => "fetch projects",
            ContentOperation::GetProjectBySlug => "fetch project",
            ContentOperation::ListSkills => "fetch skills",
            ContentOperation::ListWorkExperience => "fetch work experience",
            ContentOperation::ListTestimonials => "fetch testimonials",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Failed to {operation}: {cause}")]
pub struct ContentRetrievalError {
    pub operation: ContentOperation,
    #[source]
    pub cause: ContentClientError,
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ContentRepository: Send + Sync {
    /// Featured first, then newest first.
    async fn list_projects(&self) -> Result<Vec<Project>, ContentRetrievalError>;

    /// Featured subset of `list_projects`. Failures yield an empty list.
    async fn list_featured_projects(&self) -> Vec<Project>;

    async fn get_project_by_slug(
        &self,
        slug: &str,
    ) -> Result<Option<Project>, ContentRetrievalError>;

    async fn list_skills_grouped_by_category(
        &self,
    ) -> Result<SkillsByCategory, ContentRetrievalError>;

    /// Current positions first, then latest start date first.
    async fn list_work_experience(&self) -> Result<Vec<WorkExperience>, ContentRetrievalError>;

    /// Highest rating first, then newest first.
    async fn list_testimonials(&self) -> Result<Vec<Testimonial>, ContentRetrievalError>;
}
