use crate::shared::error::ResolutionError;
use crate::shared::Result;

/// Maximum length for package URLs (security limit)
const MAX_PACKAGE_URL_LENGTH: usize = 1024;

const SCHEME: &str = "pkg:";

/// NewType wrapper for a package URL (purl) with validation
///
/// Only the parts needed to locate scan data are interpreted:
/// type, namespace, name and version. Qualifiers and subpath are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PackageUrl {
    raw: String,
    package_type: String,
    namespace: Vec<String>,
    name: String,
    version: Option<String>,
}

impl PackageUrl {
    pub fn new(raw: impl Into<String>) -> Result<Self> {
        let raw = raw.into();
        let invalid = |reason: &str| ResolutionError::InvalidPackageUrl {
            package_url: raw.clone(),
            reason: reason.to_string(),
        };

        if raw.is_empty() {
            return Err(invalid("Package URL cannot be empty").into());
        }

        // Security: Length limit to prevent DoS
        if raw.len() > MAX_PACKAGE_URL_LENGTH {
            return Err(invalid("Package URL is too long").into());
        }

        let Some(rest) = raw.strip_prefix(SCHEME) else {
            return Err(invalid("Package URL must start with 'pkg:'").into());
        };

        // Drop subpath and qualifiers
        let rest = rest.split('#').next().unwrap_or_default();
        let rest = rest.split('?').next().unwrap_or_default();
        let rest = rest.trim_matches('/');

        let (type_part, remainder) = rest
            .split_once('/')
            .ok_or_else(|| invalid("Package URL must contain a type and a name"))?;
        if type_part.is_empty() {
            return Err(invalid("Package type cannot be empty").into());
        }

        let (path_part, version) = match remainder.rsplit_once('@') {
            Some((path, version)) if !version.is_empty() => (path, Some(decode(version)?)),
            Some((path, _)) => (path, None),
            None => (remainder, None),
        };

        let mut segments = path_part
            .split('/')
            .filter(|s| !s.is_empty())
            .map(decode)
            .collect::<Result<Vec<_>>>()?;

        let name = segments
            .pop()
            .ok_or_else(|| invalid("Package name cannot be empty"))?;

        // Security: these strings become file system path segments
        let all_parts = segments
            .iter()
            .chain(std::iter::once(&name))
            .chain(version.iter());
        for part in all_parts {
            if part == "." || part == ".." || part.contains('/') || part.contains('\\') {
                return Err(invalid("Package URL contains path traversal segments").into());
            }
        }

        Ok(Self {
            package_type: type_part.to_lowercase(),
            namespace: segments,
            name,
            version,
            raw,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn package_type(&self) -> &str {
        &self.package_type
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// Relative repository path for this package
    ///
    /// `pkg:maven/org.example/demo@1.0.0` maps to `pkg/maven/org/example/demo/1.0.0`.
    /// The same path is the key of the package in curation files.
    pub fn path_for(&self) -> String {
        let mut parts = vec!["pkg".to_string(), self.package_type.clone()];
        for segment in &self.namespace {
            if self.package_type == "maven" {
                parts.extend(segment.split('.').map(String::from));
            } else {
                parts.push(segment.clone());
            }
        }
        parts.push(self.name.clone());
        if let Some(version) = &self.version {
            parts.push(version.clone());
        }
        parts.join("/")
    }
}

impl std::fmt::Display for PackageUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.raw)
    }
}

fn decode(segment: &str) -> Result<String> {
    urlencoding::decode(segment)
        .map(|s| s.into_owned())
        .map_err(|e| anyhow::anyhow!("Invalid percent-encoding in '{}': {}", segment, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_maven_path() {
        let purl = PackageUrl::new("pkg:maven/com.devonfw.tools/test-project@0.1.0").unwrap();
        assert_eq!(purl.package_type(), "maven");
        assert_eq!(purl.name(), "test-project");
        assert_eq!(purl.version(), Some("0.1.0"));
        assert_eq!(purl.path_for(), "pkg/maven/com/devonfw/tools/test-project/0.1.0");
    }

    #[test]
    fn test_npm_scoped_path() {
        let purl = PackageUrl::new("pkg:npm/%40angular/core@16.2.0").unwrap();
        assert_eq!(purl.path_for(), "pkg/npm/@angular/core/16.2.0");
    }

    #[test]
    fn test_qualifiers_and_subpath_ignored() {
        let purl = PackageUrl::new("pkg:pypi/requests@2.31.0?arch=any#src").unwrap();
        assert_eq!(purl.path_for(), "pkg/pypi/requests/2.31.0");
        assert_eq!(purl.as_str(), "pkg:pypi/requests@2.31.0?arch=any#src");
    }

    #[test]
    fn test_without_version() {
        let purl = PackageUrl::new("pkg:cargo/serde").unwrap();
        assert_eq!(purl.version(), None);
        assert_eq!(purl.path_for(), "pkg/cargo/serde");
    }

    #[test]
    fn test_rejects_missing_scheme() {
        let result = PackageUrl::new("maven/org.example/demo@1.0.0");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("must start with 'pkg:'"));
    }

    #[test]
    fn test_rejects_empty() {
        assert!(PackageUrl::new("").is_err());
    }

    #[test]
    fn test_rejects_missing_name() {
        assert!(PackageUrl::new("pkg:maven").is_err());
    }

    #[test]
    fn test_rejects_traversal() {
        let result = PackageUrl::new("pkg:generic/../../etc@1.0");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("path traversal"));

        assert!(PackageUrl::new("pkg:generic/demo@..").is_err());
        assert!(PackageUrl::new("pkg:generic/%2E%2E/demo@1.0").is_err());
    }

    #[test]
    fn test_display() {
        let purl = PackageUrl::new("pkg:maven/org.example/demo@1.0.0").unwrap();
        assert_eq!(format!("{}", purl), "pkg:maven/org.example/demo@1.0.0");
    }
}
