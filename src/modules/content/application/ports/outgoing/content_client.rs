// src/modules/content/application/ports/outgoing/content_client.rs

use async_trait::async_trait;

use crate::modules::content::domain::entities::{ContentKind, ContentObject};

/// Envelope as delivered by the backend, metadata still untyped.
pub type RawContentObject = ContentObject<serde_json::Value>;

/// Fields requested for every object. The timestamps are needed for ordering.
pub const DEFAULT_PROPS: &[&str] = &[
    "id",
    "slug",
    "title",
    "type",
    "metadata",
    "created_at",
    "modified_at",
];

/// One level of relationship expansion.
pub const DEFAULT_DEPTH: u8 = 1;

//
// ──────────────────────────────────────────────────────────
// Query
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectQuery {
    pub kind: ContentKind,
    pub slug: Option<String>,
    pub props: &'static [&'static str],
    pub depth: u8,
}

impl ObjectQuery {
    pub fn of_kind(kind: ContentKind) -> Self {
        Self {
            kind,
            slug: None,
            props: DEFAULT_PROPS,
            depth: DEFAULT_DEPTH,
        }
    }

    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    pub fn props_param(&self) -> String {
        self.props.join(",")
    }
}

//
// ──────────────────────────────────────────────────────────
// Outcome
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContentClientError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Backend rejected the read credential")]
    Unauthorized,

    #[error("Backend responded with status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Malformed response: {0}")]
    Decode(String),
}

/// Result of one backend call. Not-found is an expected outcome, kept apart
/// from genuine failures so callers branch on it explicitly.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome<T> {
    Found(T),
    NotFound,
    Failure(ContentClientError),
}

//
// ──────────────────────────────────────────────────────────
// Port
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ContentClient: Send + Sync {
    /// All objects matching the query.
    async fn find_objects(&self, query: &ObjectQuery) -> FetchOutcome<Vec<RawContentObject>>;

    /// At most one object; an empty match is `NotFound`.
    async fn find_object(&self, query: &ObjectQuery) -> FetchOutcome<RawContentObject>;
}
