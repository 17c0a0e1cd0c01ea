use crate::ports::outbound::{ContentProvider, RawScanData, RawScanStore};
use crate::resolution::domain::{PackageMetadata, PackageUrl};
use crate::resolution::policies::ContentPathResolver;
use crate::shared::error::ResolutionError;
use crate::shared::security::{
    read_checked_file, read_checked_file_lossy, validate_contained_path, validate_within_root,
};
use crate::shared::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

const SCAN_RESULT_FILE: &str = "scancode.json";
const ORIGIN_FILE: &str = "origin.yaml";
const SOURCES_DIR: &str = "sources";
const PKG_CONTENT_SCHEME: &str = "pkgcontent:";

/// FileScanStore adapter reading scan results from a local directory tree
///
/// Layout per package below the repository base path:
///
/// ```text
/// <repo_base_path>/pkg/<type>/<namespace>/<name>/<version>/
///     scancode.json   scan result
///     origin.yaml     optional download URLs
///     sources/        extracted package content
/// ```
///
/// Paths of the scan result starting with `sources/` are package content
/// and addressed as `pkgcontent:/<rest>`. Other references are handed to
/// the optional remote [`ContentProvider`].
pub struct FileScanStore {
    repo_base_path: PathBuf,
    content_provider: Option<Box<dyn ContentProvider>>,
}

impl FileScanStore {
    /// Creates a store for the given repository directory
    ///
    /// # Errors
    /// Returns an error if the path does not exist or is not a directory
    pub fn new(repo_base_path: impl Into<PathBuf>) -> Result<Self> {
        let repo_base_path = repo_base_path.into();
        if !repo_base_path.is_dir() {
            return Err(ResolutionError::InvalidRepoPath {
                path: repo_base_path,
                reason: "Directory does not exist".to_string(),
            }
            .into());
        }
        Ok(Self {
            repo_base_path,
            content_provider: None,
        })
    }

    /// Attaches a provider for content outside the package (web URLs)
    pub fn with_content_provider(mut self, provider: impl ContentProvider + 'static) -> Self {
        self.content_provider = Some(Box::new(provider));
        self
    }

    fn package_dir(&self, package_url: &PackageUrl) -> PathBuf {
        self.repo_base_path.join(package_url.path_for())
    }

    fn read_metadata(&self, package_dir: &Path) -> Result<PackageMetadata> {
        let origin = package_dir.join(ORIGIN_FILE);
        if !origin.exists() {
            return Ok(PackageMetadata::default());
        }
        let content = read_checked_file(&origin, "origin file")?;
        if content.trim().is_empty() {
            return Ok(PackageMetadata::default());
        }
        serde_yaml_ng::from_str(&content).map_err(|e| {
            ResolutionError::FileReadError {
                path: origin,
                details: e.to_string(),
            }
            .into()
        })
    }

    fn read_package_content(&self, package_url: &PackageUrl, uri: &str) -> Result<Option<String>> {
        let rest = uri.strip_prefix(PKG_CONTENT_SCHEME).unwrap_or(uri);
        let sources_dir = self.package_dir(package_url).join(SOURCES_DIR);
        let source_file = |path: &str| -> Result<PathBuf> {
            let relative = Path::new(path.trim_start_matches('/'));
            validate_contained_path(relative)?;
            Ok(sources_dir.join(relative))
        };

        // `#` may be part of a file name (C#, F#); only a valid line range is a fragment
        let (file, range) = match rest.rsplit_once('#') {
            Some((path, fragment)) => match parse_line_range(fragment) {
                Some(range) => (source_file(path)?, Some(range)),
                None => {
                    let whole = source_file(rest)?;
                    if !whole.exists() && fragment.starts_with('L') && source_file(path)?.exists() {
                        return Err(ResolutionError::ContentRetrieval {
                            reference: uri.to_string(),
                            details: format!("Invalid line range '{}'", fragment),
                        }
                        .into());
                    }
                    (whole, None)
                }
            },
            None => (source_file(rest)?, None),
        };

        if !file.exists() {
            tracing::debug!(package_url = %package_url, uri, "package content not found");
            return Ok(None);
        }
        validate_within_root(&file, &sources_dir)?;
        let content = read_checked_file_lossy(&file, "package content file")?;

        Ok(match range {
            None => Some(content),
            Some((start, end)) => extract_lines(&content, start, end),
        })
    }
}

impl ContentPathResolver for FileScanStore {
    fn is_local_content_path(&self, _package_url: &PackageUrl, path: &str) -> bool {
        path.starts_with("sources/")
    }

    fn pkg_content_uri(&self, _package_url: &PackageUrl, path: &str) -> String {
        format!(
            "{}{}",
            PKG_CONTENT_SCHEME,
            path.strip_prefix(SOURCES_DIR).unwrap_or(path)
        )
    }
}

#[async_trait]
impl RawScanStore for FileScanStore {
    async fn read_scan_result(&self, package_url: &PackageUrl) -> Result<Option<RawScanData>> {
        let package_dir = self.package_dir(package_url);
        let scan_file = package_dir.join(SCAN_RESULT_FILE);

        if !scan_file.exists() {
            tracing::debug!(package_url = %package_url, "no scan result available");
            return Ok(None);
        }
        tracing::debug!(package_url = %package_url, path = %scan_file.display(), "found scan result");

        let raw_scan_result = read_checked_file(&scan_file, "scan result")?;
        let metadata = self.read_metadata(&package_dir)?;

        Ok(Some(RawScanData {
            raw_scan_result,
            metadata,
        }))
    }

    async fn retrieve_content(
        &self,
        package_url: &PackageUrl,
        reference: &str,
    ) -> Result<Option<String>> {
        if reference.starts_with(PKG_CONTENT_SCHEME) {
            return self.read_package_content(package_url, reference);
        }
        match &self.content_provider {
            Some(provider) => provider.fetch(reference).await,
            None => Ok(None),
        }
    }
}

/// Parses `L<start>` or `L<start>-L<end>`
fn parse_line_range(fragment: &str) -> Option<(usize, usize)> {
    let (start, end) = match fragment.split_once('-') {
        Some((start, end)) => (start, Some(end)),
        None => (fragment, None),
    };
    let start: usize = start.strip_prefix('L')?.parse().ok()?;
    let end: usize = match end {
        Some(end) => end.strip_prefix('L')?.parse().ok()?,
        None => start,
    };
    if start == 0 || end < start {
        return None;
    }
    Some((start, end))
}

/// Lines `start..=end` (1-based), `None` if the file is shorter than `start`
fn extract_lines(content: &str, start: usize, end: usize) -> Option<String> {
    let lines: Vec<&str> = content.lines().skip(start - 1).take(end - start + 1).collect();
    if lines.is_empty() {
        return None;
    }
    let mut text = lines.join("\n");
    text.push('\n');
    Some(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn purl() -> PackageUrl {
        PackageUrl::new("pkg:maven/org.example/demo@1.0.0").unwrap()
    }

    fn setup_repo() -> (TempDir, PathBuf) {
        let temp_dir = TempDir::new().unwrap();
        let package_dir = temp_dir.path().join("pkg/maven/org/example/demo/1.0.0");
        fs::create_dir_all(package_dir.join("sources/src")).unwrap();
        (temp_dir, package_dir)
    }

    #[test]
    fn test_new_rejects_missing_directory() {
        let result = FileScanStore::new("/nonexistent/repo/path");
        assert!(result.is_err());
        let err = result.err().unwrap();
        assert!(matches!(
            err.downcast_ref::<ResolutionError>(),
            Some(ResolutionError::InvalidRepoPath { .. })
        ));
    }

    #[test]
    fn test_content_path_mapping() {
        let (temp_dir, _) = setup_repo();
        let store = FileScanStore::new(temp_dir.path()).unwrap();

        assert!(store.is_local_content_path(&purl(), "sources/NOTICE.txt"));
        assert!(!store.is_local_content_path(&purl(), "other/NOTICE.txt"));
        assert_eq!(
            store.pkg_content_uri(&purl(), "sources/NOTICE.txt"),
            "pkgcontent:/NOTICE.txt"
        );
        assert_eq!(
            store.pkg_content_uri(&purl(), "sources/a.java#L3-L5"),
            "pkgcontent:/a.java#L3-L5"
        );
    }

    #[tokio::test]
    async fn test_read_scan_result_missing() {
        let (temp_dir, _) = setup_repo();
        let store = FileScanStore::new(temp_dir.path()).unwrap();

        let other = PackageUrl::new("pkg:npm/left-pad@1.3.0").unwrap();
        assert!(store.read_scan_result(&other).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_read_scan_result_with_origin() {
        let (temp_dir, package_dir) = setup_repo();
        fs::write(package_dir.join("scancode.json"), r#"{"files": []}"#).unwrap();
        fs::write(
            package_dir.join("origin.yaml"),
            "sourceDownloadUrl: https://host/demo-sources.jar\npackageDownloadUrl: https://host/demo.jar\n",
        )
        .unwrap();
        let store = FileScanStore::new(temp_dir.path()).unwrap();

        let data = store.read_scan_result(&purl()).await.unwrap().unwrap();
        assert_eq!(data.raw_scan_result, r#"{"files": []}"#);
        assert_eq!(
            data.metadata.source_download_url.as_deref(),
            Some("https://host/demo-sources.jar")
        );
        assert_eq!(
            data.metadata.package_download_url.as_deref(),
            Some("https://host/demo.jar")
        );
    }

    #[tokio::test]
    async fn test_read_scan_result_without_origin() {
        let (temp_dir, package_dir) = setup_repo();
        fs::write(package_dir.join("scancode.json"), r#"{"files": []}"#).unwrap();
        let store = FileScanStore::new(temp_dir.path()).unwrap();

        let data = store.read_scan_result(&purl()).await.unwrap().unwrap();
        assert_eq!(data.metadata, PackageMetadata::default());
    }

    #[tokio::test]
    async fn test_retrieve_whole_file() {
        let (temp_dir, package_dir) = setup_repo();
        fs::write(package_dir.join("sources/NOTICE.txt"), "Notice text\n").unwrap();
        let store = FileScanStore::new(temp_dir.path()).unwrap();

        let content = store
            .retrieve_content(&purl(), "pkgcontent:/NOTICE.txt")
            .await
            .unwrap();
        assert_eq!(content.as_deref(), Some("Notice text\n"));
    }

    #[tokio::test]
    async fn test_retrieve_line_range() {
        let (temp_dir, package_dir) = setup_repo();
        fs::write(
            package_dir.join("sources/src/Main.java"),
            "line 1\nline 2\nline 3\nline 4\n",
        )
        .unwrap();
        let store = FileScanStore::new(temp_dir.path()).unwrap();

        let range = store
            .retrieve_content(&purl(), "pkgcontent:/src/Main.java#L2-L3")
            .await
            .unwrap();
        assert_eq!(range.as_deref(), Some("line 2\nline 3\n"));

        let single = store
            .retrieve_content(&purl(), "pkgcontent:/src/Main.java#L4")
            .await
            .unwrap();
        assert_eq!(single.as_deref(), Some("line 4\n"));

        let beyond = store
            .retrieve_content(&purl(), "pkgcontent:/src/Main.java#L9-L12")
            .await
            .unwrap();
        assert!(beyond.is_none());
    }

    #[tokio::test]
    async fn test_retrieve_hash_in_path() {
        let (temp_dir, package_dir) = setup_repo();
        fs::create_dir_all(package_dir.join("sources/C#")).unwrap();
        fs::write(package_dir.join("sources/C#/LICENSE"), "MIT License\nline 2\n").unwrap();
        let store = FileScanStore::new(temp_dir.path()).unwrap();
        let uri = store.pkg_content_uri(&purl(), "sources/C#/LICENSE");
        assert_eq!(uri, "pkgcontent:/C#/LICENSE");

        let whole = store.retrieve_content(&purl(), &uri).await.unwrap();
        assert_eq!(whole.as_deref(), Some("MIT License\nline 2\n"));

        let first_line = store
            .retrieve_content(&purl(), "pkgcontent:/C#/LICENSE#L1")
            .await
            .unwrap();
        assert_eq!(first_line.as_deref(), Some("MIT License\n"));
    }

    #[tokio::test]
    async fn test_retrieve_non_utf8_content() {
        let (temp_dir, package_dir) = setup_repo();
        fs::write(
            package_dir.join("sources/LICENSE"),
            b"Copyright \xA9 2001 Example\nMIT License\n",
        )
        .unwrap();
        let store = FileScanStore::new(temp_dir.path()).unwrap();

        let whole = store
            .retrieve_content(&purl(), "pkgcontent:/LICENSE")
            .await
            .unwrap()
            .unwrap();
        assert!(whole.starts_with("Copyright "));
        assert!(whole.ends_with("MIT License\n"));

        let second = store
            .retrieve_content(&purl(), "pkgcontent:/LICENSE#L2")
            .await
            .unwrap();
        assert_eq!(second.as_deref(), Some("MIT License\n"));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_retrieve_rejects_symlinked_directory() {
        let (temp_dir, package_dir) = setup_repo();
        let outside = temp_dir.path().join("outside");
        fs::create_dir_all(&outside).unwrap();
        fs::write(outside.join("secret"), "secret").unwrap();
        std::os::unix::fs::symlink(&outside, package_dir.join("sources/linked")).unwrap();
        let store = FileScanStore::new(temp_dir.path()).unwrap();

        let err = store
            .retrieve_content(&purl(), "pkgcontent:/linked/secret")
            .await
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ResolutionError>(),
            Some(ResolutionError::SecurityError { .. })
        ));
    }

    #[tokio::test]
    async fn test_retrieve_rejects_traversal() {
        let (temp_dir, _) = setup_repo();
        let store = FileScanStore::new(temp_dir.path()).unwrap();

        let result = store
            .retrieve_content(&purl(), "pkgcontent:/../../../../etc/passwd")
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_retrieve_invalid_fragment() {
        let (temp_dir, package_dir) = setup_repo();
        fs::write(package_dir.join("sources/LICENSE"), "text\n").unwrap();
        let store = FileScanStore::new(temp_dir.path()).unwrap();

        let err = store
            .retrieve_content(&purl(), "pkgcontent:/LICENSE#Lx")
            .await
            .unwrap_err();
        assert!(err
            .downcast_ref::<ResolutionError>()
            .is_some_and(ResolutionError::is_recoverable));
    }

    #[tokio::test]
    async fn test_retrieve_web_url_without_provider() {
        let (temp_dir, _) = setup_repo();
        let store = FileScanStore::new(temp_dir.path()).unwrap();

        let content = store
            .retrieve_content(&purl(), "https://scancode-licensedb.aboutcode.org/mit.LICENSE")
            .await
            .unwrap();
        assert!(content.is_none());
    }

    #[tokio::test]
    async fn test_retrieve_web_url_with_provider() {
        struct StaticProvider;

        #[async_trait]
        impl ContentProvider for StaticProvider {
            async fn fetch(&self, url: &str) -> Result<Option<String>> {
                Ok(Some(format!("fetched {}", url)))
            }
        }

        let (temp_dir, _) = setup_repo();
        let store = FileScanStore::new(temp_dir.path())
            .unwrap()
            .with_content_provider(StaticProvider);

        let content = store
            .retrieve_content(&purl(), "https://example.org/LICENSE")
            .await
            .unwrap();
        assert_eq!(content.as_deref(), Some("fetched https://example.org/LICENSE"));
    }

    #[test]
    fn test_parse_line_range() {
        assert_eq!(parse_line_range("L3"), Some((3, 3)));
        assert_eq!(parse_line_range("L3-L7"), Some((3, 7)));
        assert_eq!(parse_line_range("L0"), None);
        assert_eq!(parse_line_range("L7-L3"), None);
        assert_eq!(parse_line_range("3-7"), None);
    }

    #[test]
    fn test_extract_lines_clamps_end() {
        assert_eq!(extract_lines("a\nb\nc", 2, 10).as_deref(), Some("b\nc\n"));
    }
}
