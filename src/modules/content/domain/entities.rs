use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

use super::formatting::{format_date_range, parse_date, parse_rating};

//
// ──────────────────────────────────────────────────────────
// Envelope
// ──────────────────────────────────────────────────────────
//

/// Object types as they are named in the content bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContentKind {
    #[serde(rename = "projects")]
    Project,
    #[serde(rename = "skills")]
    Skill,
    #[serde(rename = "work-experience")]
    WorkExperience,
    #[serde(rename = "testimonials")]
    Testimonial,
}

impl ContentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::Project => "projects",
            ContentKind::Skill => "skills",
            ContentKind::WorkExperience => "work-experience",
            ContentKind::Testimonial => "testimonials",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Common wrapper shared by every object kind. `M` is the kind-specific metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "M: Deserialize<'de> + Default"))]
pub struct ContentObject<M> {
    pub id: String,
    pub slug: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: ContentKind,
    #[serde(default, deserialize_with = "null_as_default")]
    pub metadata: M,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

impl ContentObject<serde_json::Value> {
    /// Decodes the untyped metadata bag into the structure for its kind.
    pub fn into_typed<M>(self) -> Result<ContentObject<M>, serde_json::Error>
    where
        M: DeserializeOwned + Default,
    {
        let metadata = match self.metadata {
            serde_json::Value::Null => M::default(),
            value => serde_json::from_value(value)?,
        };

        Ok(ContentObject {
            id: self.id,
            slug: self.slug,
            title: self.title,
            kind: self.kind,
            metadata,
            created_at: self.created_at,
            modified_at: self.modified_at,
        })
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

pub type Project = ContentObject<ProjectMetadata>;
pub type Skill = ContentObject<SkillMetadata>;
pub type WorkExperience = ContentObject<WorkExperienceMetadata>;
pub type Testimonial = ContentObject<TestimonialMetadata>;

//
// ──────────────────────────────────────────────────────────
// Shared value objects
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageRef {
    pub url: Option<String>,
    pub imgix_url: Option<String>,
}

/// A select-dropdown value: machine key plus display label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectOption {
    pub key: Option<String>,
    pub value: Option<String>,
}

impl SelectOption {
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref().filter(|k| !k.is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Frontend,
    Backend,
    Database,
    Tools,
    Other,
}

impl SkillCategory {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "frontend" => Some(SkillCategory::Frontend),
            "backend" => Some(SkillCategory::Backend),
            "database" => Some(SkillCategory::Database),
            "tools" => Some(SkillCategory::Tools),
            "other" => Some(SkillCategory::Other),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SkillCategory::Frontend => "frontend",
            SkillCategory::Backend => "backend",
            SkillCategory::Database => "database",
            SkillCategory::Tools => "tools",
            SkillCategory::Other => "other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProficiencyLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl ProficiencyLevel {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "beginner" => Some(ProficiencyLevel::Beginner),
            "intermediate" => Some(ProficiencyLevel::Intermediate),
            "advanced" => Some(ProficiencyLevel::Advanced),
            "expert" => Some(ProficiencyLevel::Expert),
            _ => None,
        }
    }
}

/// Splits a comma-separated technology list, dropping blank entries.
fn split_technologies(raw: Option<&str>) -> Vec<String> {
    raw.unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|tech| !tech.is_empty())
        .map(str::to_string)
        .collect()
}

//
// ──────────────────────────────────────────────────────────
// Per-kind metadata
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectMetadata {
    pub name: Option<String>,
    pub description: Option<String>,
    pub technologies: Option<String>,
    pub image: Option<ImageRef>,
    pub live_url: Option<String>,
    pub github_url: Option<String>,
    pub featured: Option<bool>,
}

impl ProjectMetadata {
    pub fn display_name<'a>(&'a self, title: &'a str) -> &'a str {
        self.name.as_deref().filter(|n| !n.is_empty()).unwrap_or(title)
    }

    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or_default()
    }

    pub fn is_featured(&self) -> bool {
        self.featured.unwrap_or(false)
    }

    pub fn technologies(&self) -> Vec<String> {
        split_technologies(self.technologies.as_deref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillMetadata {
    pub name: Option<String>,
    pub category: Option<SelectOption>,
    pub proficiency: Option<SelectOption>,
}

impl SkillMetadata {
    pub fn display_name<'a>(&'a self, title: &'a str) -> &'a str {
        self.name.as_deref().filter(|n| !n.is_empty()).unwrap_or(title)
    }

    /// Grouping category. Absent or unknown keys fall into `Other`.
    pub fn category(&self) -> SkillCategory {
        self.category
            .as_ref()
            .and_then(SelectOption::key)
            .and_then(SkillCategory::from_key)
            .unwrap_or(SkillCategory::Other)
    }

    pub fn proficiency(&self) -> Option<ProficiencyLevel> {
        self.proficiency
            .as_ref()
            .and_then(SelectOption::key)
            .and_then(ProficiencyLevel::from_key)
    }

    pub fn proficiency_label(&self) -> Option<&str> {
        self.proficiency.as_ref().and_then(|p| p.value.as_deref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkExperienceMetadata {
    pub title: Option<String>,
    pub company: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub current: Option<bool>,
    pub description: Option<String>,
    pub technologies: Option<String>,
}

impl WorkExperienceMetadata {
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or_default()
    }

    pub fn company(&self) -> &str {
        self.company.as_deref().unwrap_or_default()
    }

    pub fn is_current(&self) -> bool {
        self.current.unwrap_or(false)
    }

    /// Parsed start date; `None` when missing or unparseable.
    pub fn start_date(&self) -> Option<NaiveDate> {
        self.start_date.as_deref().and_then(parse_date)
    }

    /// Display range, or `None` when there is no start date to anchor it.
    pub fn date_range(&self) -> Option<String> {
        let start = self.start_date.as_deref().filter(|s| !s.trim().is_empty())?;
        Some(format_date_range(
            start,
            self.end_date.as_deref(),
            self.is_current(),
        ))
    }

    pub fn paragraphs(&self) -> Vec<String> {
        self.description
            .as_deref()
            .unwrap_or_default()
            .split('\n')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(str::to_string)
            .collect()
    }

    pub fn technologies(&self) -> Vec<String> {
        split_technologies(self.technologies.as_deref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TestimonialMetadata {
    pub name: Option<String>,
    pub title: Option<String>,
    pub company: Option<String>,
    pub testimonial: Option<String>,
    pub rating: Option<SelectOption>,
    pub photo: Option<ImageRef>,
}

impl TestimonialMetadata {
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    pub fn text(&self) -> &str {
        self.testimonial.as_deref().unwrap_or_default()
    }

    /// Star rating; a missing key counts as the top rating.
    pub fn rating(&self) -> i32 {
        parse_rating(self.rating.as_ref().and_then(SelectOption::key))
    }

    pub fn photo_url(&self) -> Option<&str> {
        self.photo.as_ref().and_then(|p| p.imgix_url.as_deref())
    }
}
