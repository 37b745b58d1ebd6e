//! Compiled template type handed back by loaders

use serde::Serialize;
use std::fmt;
use std::path::Path;

use super::TemplateError;

/// A mustache template compiled from decoded source text.
///
/// The raw source is kept alongside the compiled form so client-side
/// templates can be shipped to the browser verbatim.
pub struct Template {
    source: String,
    compiled: mustache::Template,
}

impl Template {
    /// Compile template source text. Partials resolve against the current directory.
    pub fn new<S: Into<String>>(source: S) -> Result<Self, TemplateError> {
        let source = source.into();
        let compiled = mustache::compile_str(&source)?;
        Ok(Self { source, compiled })
    }

    /// Compile template source text, resolving `{{> partial}}` tags to
    /// `<partials_dir>/<partial>.mustache`. Missing partials render as empty.
    pub fn with_partials_dir<S: Into<String>>(
        source: S,
        partials_dir: &Path,
    ) -> Result<Self, TemplateError> {
        let source = source.into();
        let compiled = mustache::Context::new(partials_dir.to_path_buf())
            .compile(source.chars())?;
        Ok(Self { source, compiled })
    }

    /// The decoded source text this template was compiled from
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Render with any serializable value as the context
    pub fn render<T: Serialize>(&self, data: &T) -> Result<String, TemplateError> {
        Ok(self.compiled.render_to_string(data)?)
    }
}

impl fmt::Debug for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Template")
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_template_keeps_source() {
        let template = Template::new("Hi {{name}}").unwrap();
        assert_eq!(template.source(), "Hi {{name}}");
    }

    #[test]
    fn test_variable_is_html_escaped() {
        let template = Template::new("Hi {{name}}").unwrap();
        let rendered = template
            .render(&json!({ "name": "<b>Ada & co</b>" }))
            .unwrap();
        assert_eq!(rendered, "Hi &lt;b&gt;Ada &amp; co&lt;/b&gt;");
    }

    #[test]
    fn test_triple_stash_is_not_escaped() {
        let template = Template::new("{{{raw_html}}}").unwrap();
        let rendered = template
            .render(&json!({ "raw_html": "<em>hi</em>" }))
            .unwrap();
        assert_eq!(rendered, "<em>hi</em>");
    }

    #[test]
    fn test_section_iterates_list() {
        let template = Template::new("{{#items}}<li>{{.}}</li>{{/items}}").unwrap();
        let rendered = template.render(&json!({ "items": ["a", "b"] })).unwrap();
        assert_eq!(rendered, "<li>a</li><li>b</li>");
    }

    #[test]
    fn test_section_over_objects() {
        let template = Template::new("{{#people}}{{name}};{{/people}}").unwrap();
        let rendered = template
            .render(&json!({ "people": [{ "name": "Ada" }, { "name": "Grace" }] }))
            .unwrap();
        assert_eq!(rendered, "Ada;Grace;");
    }

    #[test]
    fn test_inverted_section() {
        let template = Template::new("{{^empty}}none{{/empty}}").unwrap();
        assert_eq!(template.render(&json!({ "empty": [] })).unwrap(), "none");
        assert_eq!(template.render(&json!({ "empty": [1] })).unwrap(), "");
    }

    #[test]
    fn test_comment_is_dropped() {
        let template = Template::new("{{! a comment }}Hi").unwrap();
        assert_eq!(template.render(&json!({})).unwrap(), "Hi");
    }

    #[test]
    fn test_partial_resolves_from_directory() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join("header.mustache"),
            "<h1>{{title}}</h1>",
        )
        .unwrap();

        let template = Template::with_partials_dir("{{> header}}body", temp_dir.path()).unwrap();
        let rendered = template.render(&json!({ "title": "News" })).unwrap();
        assert_eq!(rendered, "<h1>News</h1>body");
    }

    #[test]
    fn test_missing_partial_renders_empty() {
        let temp_dir = TempDir::new().unwrap();
        let template = Template::with_partials_dir("{{> header}}body", temp_dir.path()).unwrap();
        assert_eq!(template.render(&json!({})).unwrap(), "body");
    }

    #[test]
    fn test_unclosed_section_is_engine_error() {
        let result = Template::new("{{#items}}never closed");
        assert!(matches!(result, Err(TemplateError::Engine(_))));
    }
}
