// src/modules/content/adapter/incoming/web/views.rs
use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::modules::content::application::ports::incoming::use_cases::{
    HomeContent, SkillsByCategory,
};
use crate::modules::content::domain::entities::{
    ProficiencyLevel, Project, Skill, Testimonial, WorkExperience,
};

/// Project as rendered on cards and detail pages.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectView {
    #[schema(example = "64f1c0e2a7b3d90008a1b2c3")]
    pub id: String,
    #[schema(example = "portfolio-site")]
    pub slug: String,
    /// Metadata name, falling back to the record title
    #[schema(example = "Portfolio Site")]
    pub name: String,
    pub description: String,
    /// Trimmed, non-empty entries of the comma-separated list
    #[schema(example = json!(["Rust", "actix-web"]))]
    pub technologies: Vec<String>,
    pub image_url: Option<String>,
    pub live_url: Option<String>,
    pub github_url: Option<String>,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Project> for ProjectView {
    fn from(project: Project) -> Self {
        let meta = &project.metadata;
        Self {
            name: meta.display_name(&project.title).to_string(),
            description: meta.description().to_string(),
            technologies: meta.technologies(),
            image_url: meta
                .image
                .as_ref()
                .and_then(|i| i.imgix_url.clone().or_else(|| i.url.clone())),
            live_url: meta.live_url.clone(),
            github_url: meta.github_url.clone(),
            featured: meta.is_featured(),
            created_at: project.created_at,
            id: project.id,
            slug: project.slug,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SkillView {
    pub id: String,
    #[schema(example = "Rust")]
    pub name: String,
    #[schema(example = "backend")]
    pub category: String,
    #[schema(value_type = Option<String>, example = "expert")]
    pub proficiency: Option<ProficiencyLevel>,
    #[schema(example = "Expert")]
    pub proficiency_label: Option<String>,
}

impl From<Skill> for SkillView {
    fn from(skill: Skill) -> Self {
        let meta = &skill.metadata;
        Self {
            name: meta.display_name(&skill.title).to_string(),
            category: meta.category().as_str().to_string(),
            proficiency: meta.proficiency(),
            proficiency_label: meta.proficiency_label().map(str::to_string),
            id: skill.id,
        }
    }
}

/// Skill groups keyed by category name; empty categories never appear.
pub fn skill_groups(grouped: SkillsByCategory) -> BTreeMap<String, Vec<SkillView>> {
    grouped
        .into_iter()
        .map(|(category, skills)| {
            (
                category.as_str().to_string(),
                skills.into_iter().map(SkillView::from).collect(),
            )
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WorkExperienceView {
    pub id: String,
    #[schema(example = "Senior Engineer")]
    pub title: String,
    #[schema(example = "Acme")]
    pub company: String,
    /// Absent when the entry has no start date
    #[schema(example = "Jun 2021 - Present")]
    pub date_range: Option<String>,
    pub current: bool,
    pub paragraphs: Vec<String>,
    pub technologies: Vec<String>,
}

impl From<WorkExperience> for WorkExperienceView {
    fn from(entry: WorkExperience) -> Self {
        let meta = &entry.metadata;
        Self {
            title: meta.title().to_string(),
            company: meta.company().to_string(),
            date_range: meta.date_range(),
            current: meta.is_current(),
            paragraphs: meta.paragraphs(),
            technologies: meta.technologies(),
            id: entry.id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TestimonialView {
    pub id: String,
    #[schema(example = "Jane Doe")]
    pub name: String,
    pub title: Option<String>,
    pub company: Option<String>,
    pub text: String,
    #[schema(example = 5)]
    pub rating: i32,
    pub photo_url: Option<String>,
}

impl From<Testimonial> for TestimonialView {
    fn from(testimonial: Testimonial) -> Self {
        let meta = &testimonial.metadata;
        Self {
            name: meta.name().to_string(),
            title: meta.title.clone(),
            company: meta.company.clone(),
            text: meta.text().to_string(),
            rating: meta.rating(),
            photo_url: meta.photo_url().map(str::to_string),
            id: testimonial.id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HomeContentView {
    pub projects: Vec<ProjectView>,
    pub skills_by_category: BTreeMap<String, Vec<SkillView>>,
    pub work_experience: Vec<WorkExperienceView>,
    pub testimonials: Vec<TestimonialView>,
}

impl From<HomeContent> for HomeContentView {
    fn from(home: HomeContent) -> Self {
        Self {
            projects: home.projects.into_iter().map(ProjectView::from).collect(),
            skills_by_category: skill_groups(home.skills_by_category),
            work_experience: home
                .work_experience
                .into_iter()
                .map(WorkExperienceView::from)
                .collect(),
            testimonials: home
                .testimonials
                .into_iter()
                .map(TestimonialView::from)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::content::domain::entities::{ImageRef, SkillCategory};
    use crate::tests::support::content_test_fixtures::*;

    #[test]
    fn project_view_prefers_imgix_and_splits_technologies() {
        let view = ProjectView::from(sample_project("site", true));

        assert_eq!(view.name, "Project site");
        assert_eq!(view.technologies, vec!["Rust", "actix-web"]);
        assert_eq!(
            view.image_url.as_deref(),
            Some("https://imgix.example.com/site.png")
        );
        assert!(view.featured);
    }

    #[test]
    fn project_view_falls_back_to_title_and_plain_url() {
        let mut project = sample_project("bare-project", false);
        project.metadata.name = None;
        project.metadata.technologies = None;
        project.metadata.image = Some(ImageRef {
            url: Some("https://cdn.example.com/raw.png".to_string()),
            imgix_url: None,
        });

        let view = ProjectView::from(project);

        assert_eq!(view.name, "bare project");
        assert!(view.technologies.is_empty());
        assert_eq!(view.image_url.as_deref(), Some("https://cdn.example.com/raw.png"));
    }

    #[test]
    fn work_experience_view_carries_derived_values() {
        let view = WorkExperienceView::from(sample_work_experience("acme", "2022-01-15", true));

        assert_eq!(view.date_range.as_deref(), Some("Jan 2022 - Present"));
        assert_eq!(view.paragraphs, vec!["Built things.", "Shipped things."]);
        assert_eq!(view.technologies, vec!["Rust", "PostgreSQL"]);
        assert!(view.current);
    }

    #[test]
    fn testimonial_view_defaults_rating() {
        assert_eq!(TestimonialView::from(sample_testimonial("a", None)).rating, 5);
        assert_eq!(TestimonialView::from(sample_testimonial("b", Some("4"))).rating, 4);
    }

    #[test]
    fn skill_groups_use_category_names() {
        let mut grouped = SkillsByCategory::new();
        grouped.insert(
            SkillCategory::Backend,
            vec![sample_skill("rust", Some("backend"))],
        );
        grouped.insert(SkillCategory::Other, vec![sample_skill("yak-shaving", None)]);

        let groups = skill_groups(grouped);

        assert_eq!(groups.keys().collect::<Vec<_>>(), vec!["backend", "other"]);
        assert_eq!(groups["other"][0].category, "other");
        assert_eq!(groups["backend"][0].proficiency, Some(ProficiencyLevel::Advanced));
    }

    #[test]
    fn home_view_serializes_camel_case() {
        let home = HomeContent {
            projects: vec![sample_project("p", true)],
            ..Default::default()
        };

        let json = serde_json::to_value(HomeContentView::from(home)).unwrap();

        assert!(json.get("skillsByCategory").is_some());
        assert!(json.get("workExperience").is_some());
        assert_eq!(json["projects"][0]["slug"], "p");
        assert!(json["projects"][0].get("createdAt").is_some());
    }
}
