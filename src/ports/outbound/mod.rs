/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, network, console, etc.).
pub mod content_provider;
pub mod curation_repository;
pub mod output_presenter;
pub mod progress_reporter;
pub mod raw_scan_store;

pub use content_provider::ContentProvider;
pub use curation_repository::{
    CurationRepository, DEFAULT_CURATIONS_SELECTOR, NO_CURATIONS_SELECTOR,
};
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use raw_scan_store::{RawScanData, RawScanStore};
