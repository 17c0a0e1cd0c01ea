//! scan-curator - curated component information from ScanCode results
//!
//! This library turns raw per-file ScanCode results of software packages into
//! auditable component records (licenses, copyrights, notice file), applying
//! human-maintained curations on top. It follows hexagonal architecture and
//! Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`resolution`): Pure models, policies and mapping services
//! - **Application Layer** (`application`): Use cases and DTOs
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use scan_curator::prelude::*;
//!
//! # async fn example() -> Result<()> {
//! // Create adapters
//! let scan_store = FileScanStore::new("/data/scans")?;
//! let curations = CurationFileRepository::new(Some("curations.yaml".into()));
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create use case
//! let use_case = ResolveComponentInfoUseCase::new(
//!     scan_store,
//!     curations,
//!     progress_reporter,
//!     MappingThresholds::default(),
//! );
//!
//! // Execute
//! let request = ResolveRequest::new(vec!["pkg:maven/org.example/demo@1.0.0".to_string()], None);
//! let response = use_case.execute(request).await?;
//! println!("{}", response.to_json()?);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod ports;
pub mod resolution;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        CurationFileRepository, FileScanStore, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::network::{
        CachingContentProvider, ChainedContentProvider, FileUrlContentProvider,
        HttpContentProvider,
    };
    pub use crate::application::dto::{ResolutionFailure, ResolveRequest, ResolveResponse};
    pub use crate::application::use_cases::ResolveComponentInfoUseCase;
    pub use crate::ports::inbound::ComponentInfoPort;
    pub use crate::ports::outbound::{
        ContentProvider, CurationRepository, OutputPresenter, ProgressReporter, RawScanData,
        RawScanStore,
    };
    pub use crate::resolution::domain::{
        ComponentInfo, ComponentInfoData, Curation, DataStatus, LicenseInfo, PackageMetadata,
        PackageUrl, RawScanResult, ResolutionMetadata,
    };
    pub use crate::resolution::policies::ContentPathResolver;
    pub use crate::resolution::services::{MappingThresholds, ScanMapper};
    pub use crate::shared::{ExitCode, ResolutionError, Result};
}
