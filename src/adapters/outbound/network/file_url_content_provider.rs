use crate::ports::outbound::ContentProvider;
use crate::shared::error::ResolutionError;
use crate::shared::security::{read_checked_file_lossy, validate_within_root};
use crate::shared::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

const FILE_SCHEME: &str = "file:";

/// FileUrlContentProvider adapter serving `file:` URLs from the local disk
///
/// Only files below one of the allowed root directories are served; a
/// `file:` URL pointing anywhere else is a security error.
#[derive(Default)]
pub struct FileUrlContentProvider {
    allowed_roots: Vec<PathBuf>,
}

impl FileUrlContentProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_allowed_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.allowed_roots.push(root.into());
        self
    }

    fn path_of(url: &str) -> Option<String> {
        let rest = url.strip_prefix(FILE_SCHEME)?;
        // file:///tmp/x and file:/tmp/x both name /tmp/x
        let rest = rest.strip_prefix("//").unwrap_or(rest);
        urlencoding::decode(rest).ok().map(|p| p.into_owned())
    }

    fn check_allowed(&self, path: &Path) -> Result<()> {
        if self
            .allowed_roots
            .iter()
            .any(|root| validate_within_root(path, root).is_ok())
        {
            return Ok(());
        }
        Err(ResolutionError::SecurityError {
            path: path.to_path_buf(),
            reason: "file: URL outside of the permitted directories".to_string(),
            hint: "Place referenced license files next to the curations or in the scan repository"
                .to_string(),
        }
        .into())
    }
}

#[async_trait]
impl ContentProvider for FileUrlContentProvider {
    async fn fetch(&self, url: &str) -> Result<Option<String>> {
        let Some(path) = Self::path_of(url) else {
            return Ok(None);
        };
        let path = Path::new(&path);
        if !path.exists() {
            return Ok(None);
        }
        self.check_allowed(path)?;
        read_checked_file_lossy(path, "content file").map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_path_of() {
        assert_eq!(
            FileUrlContentProvider::path_of("file:/tmp/a").as_deref(),
            Some("/tmp/a")
        );
        assert_eq!(
            FileUrlContentProvider::path_of("file:///tmp/a").as_deref(),
            Some("/tmp/a")
        );
        assert_eq!(
            FileUrlContentProvider::path_of("file:///tmp/my%20license.txt").as_deref(),
            Some("/tmp/my license.txt")
        );
        assert_eq!(FileUrlContentProvider::path_of("https://x/a"), None);
    }

    #[tokio::test]
    async fn test_fetch_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("LICENSE");
        fs::write(&file, "MIT License").unwrap();

        let provider = FileUrlContentProvider::new().with_allowed_root(temp_dir.path());
        let url = format!("file:{}", file.display());
        let content = provider.fetch(&url).await.unwrap();
        assert_eq!(content.as_deref(), Some("MIT License"));
    }

    #[tokio::test]
    async fn test_fetch_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let url = format!("file:{}/missing", temp_dir.path().display());

        let provider = FileUrlContentProvider::new().with_allowed_root(temp_dir.path());
        assert!(provider.fetch(&url).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_fetch_other_scheme() {
        let provider = FileUrlContentProvider::new();
        assert!(provider.fetch("https://example.org/LICENSE").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_fetch_outside_allowed_roots() {
        let allowed = TempDir::new().unwrap();
        let other = TempDir::new().unwrap();
        let file = other.path().join("passwd");
        fs::write(&file, "root:x:0:0").unwrap();

        let provider = FileUrlContentProvider::new().with_allowed_root(allowed.path());
        let err = provider
            .fetch(&format!("file:{}", file.display()))
            .await
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ResolutionError>(),
            Some(ResolutionError::SecurityError { .. })
        ));
    }

    #[tokio::test]
    async fn test_fetch_without_allowed_roots() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("LICENSE");
        fs::write(&file, "MIT License").unwrap();

        let provider = FileUrlContentProvider::new();
        assert!(provider.fetch(&format!("file:{}", file.display())).await.is_err());
    }
}
