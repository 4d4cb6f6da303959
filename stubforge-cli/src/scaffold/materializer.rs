//! Renders stubs and writes the component files
//!
//! Every stub is rendered in memory first. Directories are only created once all
//! renders succeed, so a broken stub leaves the project untouched. A failing write
//! can still leave earlier files behind; nothing is rolled back.

use handlebars::Handlebars;
use std::path::{Path, PathBuf};

use super::request::ScaffoldRequest;
use crate::error::{Result, ScaffoldError};
use crate::fs::Filesystem;
use crate::templates::TemplateStub;

/// Renders and writes component files
pub struct Materializer {
    handlebars: Handlebars<'static>,
}

impl Default for Materializer {
    fn default() -> Self {
        Self::new()
    }
}

impl Materializer {
    /// Create a materializer
    #[must_use]
    pub fn new() -> Self {
        let mut handlebars = Handlebars::new();

        // Disable HTML escaping since we're generating code
        handlebars.register_escape_fn(handlebars::no_escape);

        Self { handlebars }
    }

    /// Render every stub against the request
    ///
    /// Returned paths are relative to the project root.
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::Render`] for the first stub that fails.
    pub fn render(&self, request: &ScaffoldRequest, stubs: &[TemplateStub]) -> Result<Vec<GeneratedFile>> {
        let context = request.context();
        let directory = component_dir(Path::new(""), &request.path);

        stubs
            .iter()
            .map(|stub| {
                let content = self
                    .handlebars
                    .render_template(&stub.contents, &context)
                    .map_err(|source| ScaffoldError::Render {
                        stub: stub.name.clone(),
                        source: Box::new(source),
                    })?;

                Ok(GeneratedFile {
                    path: directory.join(stub.output_filename(&request.naming.pascal_name)),
                    content,
                    description: describe(&stub.name).to_string(),
                })
            })
            .collect()
    }

    /// Render every stub and write the results under `root`
    ///
    /// Existing files are overwritten.
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::Render`] before touching the file system, or the
    /// first [`ScaffoldError::CreateDir`] / [`ScaffoldError::Write`] failure.
    pub fn materialize<F: Filesystem>(
        &self,
        fs: &mut F,
        root: &Path,
        request: &ScaffoldRequest,
        stubs: &[TemplateStub],
    ) -> Result<Vec<GeneratedFile>> {
        let files = self.render(request, stubs)?;
        ensure_directory(fs, root, &request.path)?;

        for file in &files {
            let full_path = root.join(&file.path);
            fs.write(&full_path, &file.content)
                .map_err(|source| ScaffoldError::Write {
                    path: full_path.clone(),
                    source,
                })?;

            tracing::info!(path = %full_path.display(), "wrote {}", file.description);
        }

        Ok(files)
    }
}

/// Directory a component's files go into
///
/// Empty segments are ignored, so `widgets//Card` and `widgets/Card` agree.
#[must_use]
pub fn component_dir(root: &Path, path: &str) -> PathBuf {
    path.split('/')
        .filter(|segment| !segment.is_empty())
        .fold(root.to_path_buf(), |dir, segment| dir.join(segment))
}

/// Create each missing directory along `path`, starting at `root`
///
/// # Errors
///
/// Returns [`ScaffoldError::CreateDir`] for the first directory that cannot be created.
pub fn ensure_directory<F: Filesystem>(fs: &mut F, root: &Path, path: &str) -> Result<PathBuf> {
    let mut directory = root.to_path_buf();

    for segment in path.split('/').filter(|segment| !segment.is_empty()) {
        directory.push(segment);

        if !fs.exists(&directory) {
            tracing::debug!(path = %directory.display(), "creating directory");
            fs.create_dir(&directory)
                .map_err(|source| ScaffoldError::CreateDir {
                    path: directory.clone(),
                    source,
                })?;
        }
    }

    Ok(directory)
}

/// Human description of a stub's output, by file type
fn describe(stub_name: &str) -> &'static str {
    if stub_name.contains(".spec.") {
        "unit test"
    } else if stub_name.contains(".stories.") {
        "story"
    } else if stub_name.contains(".vue") {
        "component"
    } else {
        "file"
    }
}

/// Represents a generated file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Relative path from project root
    pub path: PathBuf,
    /// File content
    pub content: String,
    /// File description for user feedback
    pub description: String,
}
