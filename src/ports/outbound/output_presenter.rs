use crate::shared::Result;

/// Sink for the serialized resolution response
///
/// Implemented for stdout and for an output file selected with `--output`.
pub trait OutputPresenter {
    /// Writes `content` as-is; no trailing newline is added.
    fn present(&self, content: &str) -> Result<()>;
}
