//! Application-directories template loader
//!
//! Resolves template names against the template subfolder of every installed
//! application, in installation order. The first readable file wins. Nothing is
//! cached: every call reads from disk.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::safe_join::safe_join;
use super::{SourcesIter, TemplateDirs, TemplateError, TemplateLoader};
use crate::core::{FileCharset, PathAppResolver, Result, Settings};

/// Template loader over the discovered application template directories
#[derive(Debug, Clone, Default)]
pub struct AppDirectoriesLoader {
    dirs: TemplateDirs,
    charset: FileCharset,
}

impl AppDirectoriesLoader {
    /// Create a loader over an already discovered directory set.
    ///
    /// `charset` decodes every file this loader reads.
    pub fn new(dirs: TemplateDirs, charset: FileCharset) -> Self {
        Self { dirs, charset }
    }

    /// Discover template directories from settings and build a loader over them
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let resolver = PathAppResolver::new(settings.app_paths.clone());
        let dirs = TemplateDirs::discover(settings, &resolver)?;
        Ok(Self::new(dirs, settings.file_charset))
    }

    /// Directories searched when a call passes no override
    pub fn dirs(&self) -> &TemplateDirs {
        &self.dirs
    }

    /// Character set used to decode template files
    pub fn charset(&self) -> FileCharset {
        self.charset
    }

    /// Candidate paths for `name` as a cloneable iterator
    pub fn sources<'a>(
        &'a self,
        name: &'a str,
        dirs: Option<&'a [PathBuf]>,
    ) -> TemplateSources<'a> {
        let dirs = match dirs {
            Some(dirs) if !dirs.is_empty() => dirs,
            _ => self.dirs.as_slice(),
        };
        TemplateSources {
            dirs: dirs.iter(),
            name,
        }
    }

    /// Read one candidate. `Ok(None)` means the file could not be read.
    fn read_candidate(&self, path: &Path) -> std::result::Result<Option<String>, TemplateError> {
        let bytes = match read_bytes(path) {
            Ok(bytes) => bytes,
            Err(e) => {
                debug!("Skipping unreadable template {}: {}", path.display(), e);
                return Ok(None);
            }
        };

        self.charset
            .decode(bytes)
            .map(Some)
            .ok_or_else(|| TemplateError::Decode {
                path: path.to_path_buf(),
                charset: self.charset,
            })
    }
}

fn read_bytes(path: &Path) -> std::io::Result<Vec<u8>> {
    let mut file = File::open(path)?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)?;
    Ok(bytes)
}

impl TemplateLoader for AppDirectoriesLoader {
    fn get_template_sources<'a>(
        &'a self,
        name: &'a str,
        dirs: Option<&'a [PathBuf]>,
    ) -> SourcesIter<'a> {
        Box::new(self.sources(name, dirs))
    }

    fn load_template_source(
        &self,
        name: &str,
        dirs: Option<&[PathBuf]>,
    ) -> std::result::Result<(String, PathBuf), TemplateError> {
        for candidate in self.sources(name, dirs) {
            let path = candidate?;
            if let Some(content) = self.read_candidate(&path)? {
                debug!("Loaded template '{}' from {}", name, path.display());
                return Ok((content, path));
            }
        }

        debug!("Template '{}' not found in any template directory", name);
        Err(TemplateError::not_found(name))
    }
}

/// Lazy sequence of candidate paths for one template name.
///
/// Directories whose join with the name would escape them are skipped. A
/// directory whose path is not valid Unicode yields an error.
#[derive(Debug, Clone)]
pub struct TemplateSources<'a> {
    dirs: std::slice::Iter<'a, PathBuf>,
    name: &'a str,
}

impl Iterator for TemplateSources<'_> {
    type Item = std::result::Result<PathBuf, TemplateError>;

    fn next(&mut self) -> Option<Self::Item> {
        for dir in self.dirs.by_ref() {
            match safe_join(dir, self.name) {
                Ok(path) => return Some(Ok(path)),
                Err(TemplateError::PathEscape { base, name }) => {
                    debug!("Excluding {:?}: outside {}", name, base.display());
                }
                Err(e) => return Some(Err(e)),
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.dirs.size_hint().1)
    }
}
