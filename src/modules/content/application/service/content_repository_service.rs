use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::{debug, error, warn};

use crate::modules::content::application::ports::incoming::use_cases::{
    ContentOperation, ContentRepository, ContentRetrievalError, SkillsByCategory,
};
use crate::modules::content::application::ports::outgoing::{
    ContentClient, ContentClientError, FetchOutcome, ObjectQuery, RawContentObject,
};
use crate::modules::content::domain::entities::{
    ContentKind, ContentObject, Project, Skill, Testimonial, WorkExperience,
};

// ============================================================================
// Ordering
// ============================================================================

pub(crate) fn sort_projects(projects: &mut [Project]) {
    projects.sort_by(|a, b| {
        b.metadata
            .is_featured()
            .cmp(&a.metadata.is_featured())
            .then_with(|| b.created_at.cmp(&a.created_at))
    });
}

/// A missing start date compares as the earliest possible date.
pub(crate) fn sort_work_experience(items: &mut [WorkExperience]) {
    items.sort_by(|a, b| {
        b.metadata
            .is_current()
            .cmp(&a.metadata.is_current())
            .then_with(|| b.metadata.start_date().cmp(&a.metadata.start_date()))
    });
}

pub(crate) fn sort_testimonials(items: &mut [Testimonial]) {
    items.sort_by(|a, b| {
        b.metadata
            .rating()
            .cmp(&a.metadata.rating())
            .then_with(|| b.created_at.cmp(&a.created_at))
    });
}

pub(crate) fn group_skills(skills: Vec<Skill>) -> SkillsByCategory {
    let mut groups = SkillsByCategory::new();
    for skill in skills {
        groups
            .entry(skill.metadata.category())
            .or_default()
            .push(skill);
    }
    groups
}

// ============================================================================
// Service Implementation
// ============================================================================

pub struct ContentRepositoryService<C>
where
    C: ContentClient,
{
    client: C,
}

impl<C> ContentRepositoryService<C>
where
    C: ContentClient,
{
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Fetches one collection. Not-found is an empty collection.
    async fn fetch_collection<M>(
        &self,
        kind: ContentKind,
        operation: ContentOperation,
    ) -> Result<Vec<ContentObject<M>>, ContentRetrievalError>
    where
        M: DeserializeOwned + Default,
    {
        let objects = match self.client.find_objects(&ObjectQuery::of_kind(kind)).await {
            FetchOutcome::Found(objects) => objects,
            FetchOutcome::NotFound => {
                debug!(kind = %kind, "No content found, returning empty collection");
                return Ok(Vec::new());
            }
            FetchOutcome::Failure(cause) => return Err(retrieval_failure(operation, cause)),
        };

        objects
            .into_iter()
            .map(decode::<M>)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|cause| retrieval_failure(operation, cause))
    }
}

fn decode<M>(object: RawContentObject) -> Result<ContentObject<M>, ContentClientError>
where
    M: DeserializeOwned + Default,
{
    let id = object.id.clone();
    object
        .into_typed::<M>()
        .map_err(|e| ContentClientError::Decode(format!("object {id}: {e}")))
}

fn retrieval_failure(operation: ContentOperation, cause: ContentClientError) -> ContentRetrievalError {
    error!(operation = %operation, error = %cause, "Content retrieval failed");
    ContentRetrievalError { operation, cause }
}

#[async_trait]
impl<C> ContentRepository for ContentRepositoryService<C>
where
    C: ContentClient + Send + Sync,
{
    async fn list_projects(&self) -> Result<Vec<Project>, ContentRetrievalError> {
        let mut projects = self
            .fetch_collection(ContentKind::Project, ContentOperation::ListProjects)
            .await?;
        sort_projects(&mut projects);
        Ok(projects)
    }

    async fn list_featured_projects(&self) -> Vec<Project> {
        match self.list_projects().await {
            Ok(projects) => projects
                .into_iter()
                .filter(|p| p.metadata.is_featured())
                .collect(),
            Err(err) => {
                warn!(error = %err, "Featured projects unavailable, returning none");
                Vec::new()
            }
        }
    }

    async fn get_project_by_slug(
        &self,
        slug: &str,
    ) -> Result<Option<Project>, ContentRetrievalError> {
        let query = ObjectQuery::of_kind(ContentKind::Project).with_slug(slug);

        match self.client.find_object(&query).await {
            FetchOutcome::Found(object) => decode(object)
                .map(Some)
                .map_err(|cause| retrieval_failure(ContentOperation::GetProjectBySlug, cause)),
            FetchOutcome::NotFound => {
                debug!(slug = %slug, "Project not found");
                Ok(None)
            }
            FetchOutcome::Failure(cause) => Err(retrieval_failure(
                ContentOperation::GetProjectBySlug,
                cause,
            )),
        }
    }

    async fn list_skills_grouped_by_category(
        &self,
    ) -> Result<SkillsByCategory, ContentRetrievalError> {
        let skills = self
            .fetch_collection(ContentKind::Skill, ContentOperation::ListSkills)
            .await?;
        Ok(group_skills(skills))
    }

    async fn list_work_experience(&self) -> Result<Vec<WorkExperience>, ContentRetrievalError> {
        let mut items = self
            .fetch_collection(
                ContentKind::WorkExperience,
                ContentOperation::ListWorkExperience,
            )
            .await?;
        sort_work_experience(&mut items);
        Ok(items)
    }

    async fn list_testimonials(&self) -> Result<Vec<Testimonial>, ContentRetrievalError> {
        let mut items = self
            .fetch_collection(ContentKind::Testimonial, ContentOperation::ListTestimonials)
            .await?;
        sort_testimonials(&mut items);
        Ok(items)
    }
}
