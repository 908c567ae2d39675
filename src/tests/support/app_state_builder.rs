use crate::modules::content::application::content_use_cases::ContentUseCases;
use crate::modules::content::application::ports::incoming::use_cases::{
    ContentRepository, HomeContent, LoadHomeContentUseCase,
};
use crate::tests::support::stubs::*;
use crate::AppState;
use actix_web::web;
use std::sync::Arc;

pub struct TestAppStateBuilder {
    repository: Option<Arc<dyn ContentRepository + Send + Sync>>,
    load_home: Option<Arc<dyn LoadHomeContentUseCase + Send + Sync>>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            repository: Some(Arc::new(StubContentRepository::default())),
            load_home: Some(Arc::new(StubLoadHomeContentUseCase::success(
                HomeContent::default(),
            ))),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_repository(
        mut self,
        repository: impl ContentRepository + Send + Sync + 'static,
    ) -> Self {
        self.repository = Some(Arc::new(repository));
        self
    }

    pub fn with_load_home(
        mut self,
        uc: impl LoadHomeContentUseCase + Send + Sync + 'static,
    ) -> Self {
        self.load_home = Some(Arc::new(uc));
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            content: ContentUseCases {
                repository: self.repository.expect("repository not set"),
                load_home: self.load_home.expect("load_home not set"),
            },
        })
    }
}
