use std::sync::Arc;

use crate::modules::content::application::ports::incoming::use_cases::{
    ContentRepository, LoadHomeContentUseCase,
};

#[derive(Clone)]
pub struct ContentUseCases {
    pub repository: Arc<dyn ContentRepository + Send + Sync>,
    pub load_home: Arc<dyn LoadHomeContentUseCase + Send + Sync>,
}
