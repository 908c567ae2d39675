pub mod app_state_builder;
pub mod content_test_fixtures;
pub mod log_capture;
pub mod stubs;
