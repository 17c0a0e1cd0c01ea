/// Outbound adapters
///
/// - `console`: progress on stderr
/// - `filesystem`: scan store, curation files and output writing
/// - `network`: content providers for license texts behind URLs
pub mod console;
pub mod filesystem;
pub mod network;
