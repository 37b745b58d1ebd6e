//! Template loader capability trait

use std::path::PathBuf;

use super::{Template, TemplateError};

/// Lazy, finite sequence of candidate template paths.
///
/// Each item is either an absolute path inside one of the searched
/// directories or an error that ends the lookup (a directory whose path is
/// not valid Unicode). Directories the name would escape produce no item.
pub type SourcesIter<'a> = Box<dyn Iterator<Item = Result<PathBuf, TemplateError>> + 'a>;

/// Trait for resolving template names to template source.
///
/// Any type implementing this trait can be used wherever a loader is
/// expected. `dirs` overrides the loader's own search directories when it is
/// `Some` and non-empty.
pub trait TemplateLoader: Send + Sync {
    /// Whether this loader can be used in the current environment
    fn is_usable(&self) -> bool {
        true
    }

    /// Candidate absolute paths for `name`, in search order.
    ///
    /// Candidates that would fall outside their directory are left out.
    /// Calling again starts a fresh enumeration.
    fn get_template_sources<'a>(
        &'a self,
        name: &'a str,
        dirs: Option<&'a [PathBuf]>,
    ) -> SourcesIter<'a>;

    /// Decoded contents and path of the first readable candidate
    fn load_template_source(
        &self,
        name: &str,
        dirs: Option<&[PathBuf]>,
    ) -> Result<(String, PathBuf), TemplateError>;

    /// Compile the first readable candidate, returning it with its path.
    ///
    /// Partials referenced by the template are looked up next to the file
    /// it was loaded from.
    fn load_template(
        &self,
        name: &str,
        dirs: Option<&[PathBuf]>,
    ) -> Result<(Template, PathBuf), TemplateError> {
        let (source, origin) = self.load_template_source(name, dirs)?;
        let template = match origin.parent() {
            Some(dir) => Template::with_partials_dir(source, dir)?,
            None => Template::new(source)?,
        };
        Ok((template, origin))
    }
}
