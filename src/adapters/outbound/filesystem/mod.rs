/// Filesystem adapters for file I/O operations
mod curation_file_repository;
mod file_writer;
mod scan_file_store;

pub use curation_file_repository::CurationFileRepository;
pub use file_writer::{FileSystemWriter, StdoutPresenter};
pub use scan_file_store::FileScanStore;
