use chrono::{DateTime, TimeZone, Utc};

use crate::modules::content::domain::entities::{
    ContentKind, ContentObject, ImageRef, Project, ProjectMetadata, SelectOption, Skill,
    SkillMetadata, Testimonial, TestimonialMetadata, WorkExperience, WorkExperienceMetadata,
};

pub fn fixed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 15, 9, 30, 0).unwrap()
}

fn envelope<M>(kind: ContentKind, slug: &str, metadata: M) -> ContentObject<M> {
    ContentObject {
        id: format!("id-{slug}"),
        slug: slug.to_string(),
        title: slug.replace('-', " "),
        kind,
        metadata,
        created_at: fixed_time(),
        modified_at: fixed_time(),
    }
}

fn select(key: &str, value: &str) -> SelectOption {
    SelectOption {
        key: Some(key.to_string()),
        value: Some(value.to_string()),
    }
}

pub fn sample_project(slug: &str, featured: bool) -> Project {
    envelope(
        ContentKind::Project,
        slug,
        ProjectMetadata {
            name: Some(format!("Project {slug}")),
            description: Some("A sample project".to_string()),
            technologies: Some("Rust, actix-web".to_string()),
            image: Some(ImageRef {
                url: Some(format!("https://cdn.example.com/{slug}.png")),
                imgix_url: Some(format!("https://imgix.example.com/{slug}.png")),
            }),
            live_url: Some(format!("https://{slug}.example.com")),
            github_url: None,
            featured: Some(featured),
        },
    )
}

pub fn sample_skill(slug: &str, category: Option<&str>) -> Skill {
    envelope(
        ContentKind::Skill,
        slug,
        SkillMetadata {
            name: Some(slug.to_string()),
            category: category.map(|key| select(key, key)),
            proficiency: Some(select("advanced", "Advanced")),
        },
    )
}

pub fn sample_work_experience(slug: &str, start_date: &str, current: bool) -> WorkExperience {
    envelope(
        ContentKind::WorkExperience,
        slug,
        WorkExperienceMetadata {
            title: Some("Software Engineer".to_string()),
            company: Some("Acme".to_string()),
            start_date: Some(start_date.to_string()),
            end_date: None,
            current: Some(current),
            description: Some("Built things.\nShipped things.".to_string()),
            technologies: Some("Rust, PostgreSQL".to_string()),
        },
    )
}

pub fn sample_testimonial(slug: &str, rating: Option<&str>) -> Testimonial {
    envelope(
        ContentKind::Testimonial,
        slug,
        TestimonialMetadata {
            name: Some("Jane Doe".to_string()),
            title: Some("CTO".to_string()),
            company: Some("Acme".to_string()),
            testimonial: Some("Great to work with.".to_string()),
            rating: rating.map(|key| select(key, key)),
            photo: None,
        },
    )
}
