use serde::Deserialize;

/// Human-maintained override record for a single package
///
/// Every override field follows "replace, do not merge" semantics:
/// a present field (even an empty list) replaces the scanned data of its
/// category, an absent field leaves the scanned data untouched.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Curation {
    /// Package path key, see [`crate::resolution::domain::PackageUrl::path_for`]
    pub name: String,
    #[serde(rename = "excludedPaths", default)]
    pub excluded_path_prefixes: Vec<String>,
    #[serde(rename = "copyrights", default)]
    pub copyright_overrides: Option<Vec<String>>,
    #[serde(rename = "licenses", default)]
    pub license_overrides: Option<Vec<LicenseOverride>>,
    /// The curation `url` key names the component's homepage
    #[serde(rename = "url", default)]
    pub homepage_override: Option<String>,
    /// Separate `sourceRepoUrl` key; `url` never fills the source repository
    #[serde(rename = "sourceRepoUrl", default)]
    pub source_repo_override: Option<String>,
}

impl Curation {
    /// Whether scan signal from `path` has to be ignored
    pub fn is_excluded(&self, path: &str) -> bool {
        self.excluded_path_prefixes
            .iter()
            .any(|prefix| path.starts_with(prefix.as_str()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LicenseOverride {
    #[serde(rename = "license")]
    pub spdx_id: String,
    pub url: String,
}

/// Top-level structure of a curation file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CurationList {
    #[serde(default)]
    pub artifacts: Vec<Curation>,
}

impl CurationList {
    /// First curation whose name equals the given package path
    pub fn find(&self, package_path: &str) -> Option<&Curation> {
        self.artifacts.iter().find(|c| c.name == package_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CURATIONS: &str = r#"
artifacts:
  - name: pkg/maven/org/example/demo/1.0.0
    excludedPaths:
      - sources/test/
    copyrights:
      - Copyright (c) 2023 somebody
    licenses:
      - license: MIT
        url: https://some/license/url
    url: http://some/url
  - name: pkg/npm/left-pad/1.3.0
    copyrights: []
"#;

    #[test]
    fn test_parse_curation_list() {
        let list: CurationList = serde_yaml_ng::from_str(CURATIONS).unwrap();
        assert_eq!(list.artifacts.len(), 2);

        let demo = list.find("pkg/maven/org/example/demo/1.0.0").unwrap();
        assert_eq!(demo.excluded_path_prefixes, vec!["sources/test/"]);
        assert_eq!(
            demo.copyright_overrides,
            Some(vec!["Copyright (c) 2023 somebody".to_string()])
        );
        let licenses = demo.license_overrides.as_ref().unwrap();
        assert_eq!(licenses[0].spdx_id, "MIT");
        assert_eq!(licenses[0].url, "https://some/license/url");
        assert_eq!(demo.homepage_override.as_deref(), Some("http://some/url"));
        assert!(demo.source_repo_override.is_none());
    }

    #[test]
    fn test_empty_override_list_is_present() {
        let list: CurationList = serde_yaml_ng::from_str(CURATIONS).unwrap();
        let left_pad = list.find("pkg/npm/left-pad/1.3.0").unwrap();
        assert_eq!(left_pad.copyright_overrides, Some(vec![]));
        assert!(left_pad.license_overrides.is_none());
        assert!(left_pad.excluded_path_prefixes.is_empty());
    }

    #[test]
    fn test_url_and_source_repo_url_are_distinct() {
        let yaml = r#"
artifacts:
  - name: pkg/npm/left-pad/1.3.0
    url: https://left-pad.example.org
    sourceRepoUrl: https://git.example.org/left-pad.git
"#;
        let list: CurationList = serde_yaml_ng::from_str(yaml).unwrap();
        let curation = list.find("pkg/npm/left-pad/1.3.0").unwrap();
        assert_eq!(
            curation.homepage_override.as_deref(),
            Some("https://left-pad.example.org")
        );
        assert_eq!(
            curation.source_repo_override.as_deref(),
            Some("https://git.example.org/left-pad.git")
        );
    }

    #[test]
    fn test_find_unknown_package() {
        let list: CurationList = serde_yaml_ng::from_str(CURATIONS).unwrap();
        assert!(list.find("pkg/maven/org/example/other/1.0.0").is_none());
    }

    #[test]
    fn test_is_excluded_prefix_match() {
        let curation = Curation {
            excluded_path_prefixes: vec!["sources/test/".to_string()],
            ..Default::default()
        };
        assert!(curation.is_excluded("sources/test/LICENSE"));
        assert!(!curation.is_excluded("sources/LICENSE"));
        // case-sensitive
        assert!(!curation.is_excluded("sources/Test/LICENSE"));
    }
}
