use crate::ports::outbound::{CurationRepository, DEFAULT_CURATIONS_SELECTOR, NO_CURATIONS_SELECTOR};
use crate::resolution::domain::{Curation, CurationList, PackageUrl};
use crate::shared::error::ResolutionError;
use crate::shared::security::read_checked_file;
use crate::shared::Result;
use async_trait::async_trait;
use dashmap::DashMap;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Curation source picked by a selector
enum Source<'a> {
    Disabled,
    File(&'a Path),
}

/// CurationFileRepository adapter reading curations from YAML files
///
/// Holds an optional default curation file and any number of named
/// sources. A configured file that does not exist means "no curations";
/// this is logged once per file. Parsed files are kept in memory.
pub struct CurationFileRepository {
    default_source: Option<PathBuf>,
    named_sources: HashMap<String, PathBuf>,
    loaded: DashMap<PathBuf, Arc<CurationList>>,
}

impl CurationFileRepository {
    pub fn new(default_source: Option<PathBuf>) -> Self {
        Self {
            default_source,
            named_sources: HashMap::new(),
            loaded: DashMap::new(),
        }
    }

    /// Registers a named curation source
    pub fn with_source(mut self, name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        self.named_sources.insert(name.into(), path.into());
        self
    }

    fn source_for(&self, selector: Option<&str>) -> Result<Source<'_>> {
        match selector {
            Some(NO_CURATIONS_SELECTOR) => Ok(Source::Disabled),
            None | Some(DEFAULT_CURATIONS_SELECTOR) => Ok(match &self.default_source {
                Some(path) => Source::File(path),
                None => Source::Disabled,
            }),
            Some(name) => match self.named_sources.get(name) {
                Some(path) => Ok(Source::File(path)),
                None => Err(ResolutionError::UnknownCurationSelector {
                    selector: name.to_string(),
                }
                .into()),
            },
        }
    }

    fn load(&self, path: &Path) -> Result<Arc<CurationList>> {
        if let Some(list) = self.loaded.get(path) {
            return Ok(Arc::clone(&list));
        }

        let list = if path.exists() {
            tracing::info!(path = %path.display(), "processing curations file");
            let content = read_checked_file(path, "curations file")?;
            Self::parse(path, &content)?
        } else {
            tracing::info!(
                path = %path.display(),
                "curations file does not exist, no curations are applied"
            );
            CurationList::default()
        };

        let list = Arc::new(list);
        self.loaded
            .entry(path.to_path_buf())
            .or_insert_with(|| Arc::clone(&list));
        Ok(list)
    }

    fn parse(path: &Path, content: &str) -> Result<CurationList> {
        if content.trim().is_empty() {
            return Ok(CurationList::default());
        }
        serde_yaml_ng::from_str(content).map_err(|e| {
            ResolutionError::CurationParse {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

#[async_trait]
impl CurationRepository for CurationFileRepository {
    async fn find_curations(
        &self,
        package_url: &PackageUrl,
        selector: Option<&str>,
    ) -> Result<Option<Curation>> {
        let path = match self.source_for(selector)? {
            Source::Disabled => return Ok(None),
            Source::File(path) => path,
        };
        let list = self.load(path)?;
        Ok(list.find(&package_url.path_for()).cloned())
    }

    fn validate_selector(&self, selector: Option<&str>) -> Result<()> {
        self.source_for(selector).map(|_| ())
    }
}
