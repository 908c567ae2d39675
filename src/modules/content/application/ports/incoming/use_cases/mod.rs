mod content_repository;
mod load_home_content;

pub use content_repository::{
    ContentOperation, ContentRepository, ContentRetrievalError, SkillsByCategory,
};
pub use load_home_content::{HomeContent, LoadHomeContentUseCase};
