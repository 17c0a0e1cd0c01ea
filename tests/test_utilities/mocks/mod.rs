/// Mock implementations for testing
mod mock_content_provider;
mod mock_progress_reporter;

pub use mock_content_provider::MockContentProvider;
pub use mock_progress_reporter::MockProgressReporter;
