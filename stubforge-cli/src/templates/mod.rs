//! Stub templates for generated components
//!
//! Each [`Variant`] renders three stubs, in order: the single file component,
//! its unit test and its story. Defaults are compiled in; a file with the same
//! name under `<stubs_dir>/<Variant dir>/` takes precedence, so projects can
//! customise output without rebuilding.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{Result, ScaffoldError};
use crate::fs::Filesystem;

pub mod component;
pub mod page;

/// Stub file names, primary file first
pub const STUB_NAMES: [&str; 3] = [
    "Component.vue.stub",
    "Component.spec.js.stub",
    "Component.stories.js.stub",
];

/// Token in stub names replaced by the component name
pub const COMPONENT_TOKEN: &str = "Component";

/// Suffix dropped from stub names
pub const STUB_SUFFIX: &str = ".stub";

/// Kind of component being scaffolded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Plain component with props (`make:component`)
    Component,
    /// Page component with optional `asyncData` (`make:page-component`)
    PageComponent,
}

impl Variant {
    /// Every variant
    pub const ALL: [Self; 2] = [Self::Component, Self::PageComponent];

    /// Directory holding this variant's stubs
    #[must_use]
    pub const fn stub_dir(self) -> &'static str {
        match self {
            Self::Component => "MakeComponent",
            Self::PageComponent => "MakePageComponent",
        }
    }

    /// Command name that scaffolds this variant
    #[must_use]
    pub const fn command(self) -> &'static str {
        match self {
            Self::Component => "make:component",
            Self::PageComponent => "make:page-component",
        }
    }

    /// Compiled-in stub contents by name
    #[must_use]
    pub fn default_stub(self, name: &str) -> Option<&'static str> {
        let stubs = match self {
            Self::Component => [
                component::COMPONENT_VUE,
                component::COMPONENT_SPEC_JS,
                component::COMPONENT_STORIES_JS,
            ],
            Self::PageComponent => [page::PAGE_VUE, page::PAGE_SPEC_JS, page::PAGE_STORIES_JS],
        };

        STUB_NAMES
            .iter()
            .position(|&stub| stub == name)
            .map(|index| stubs[index])
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.command())
    }
}

/// Where a stub was loaded from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StubOrigin {
    /// Compiled-in default
    Default,
    /// Custom file on disk
    Custom(PathBuf),
}

/// A loaded stub
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateStub {
    /// Stub file name, e.g. `Component.vue.stub`
    pub name: String,
    /// Handlebars source
    pub contents: String,
    /// Where the contents came from
    pub origin: StubOrigin,
}

impl TemplateStub {
    /// Output file name for a component
    ///
    /// ```
    /// # use stubforge_cli_lib::templates::output_filename;
    /// assert_eq!(output_filename("Component.spec.js.stub", "InfoCard"), "InfoCard.spec.js");
    /// ```
    #[must_use]
    pub fn output_filename(&self, pascal_name: &str) -> String {
        output_filename(&self.name, pascal_name)
    }
}

/// Replace the component token with the component name and drop the stub suffix
#[must_use]
pub fn output_filename(stub_name: &str, pascal_name: &str) -> String {
    let renamed = stub_name.replacen(COMPONENT_TOKEN, pascal_name, 1);

    match renamed.strip_suffix(STUB_SUFFIX) {
        Some(stripped) => stripped.to_string(),
        None => renamed,
    }
}

/// Resolves stubs for a variant, preferring custom files
#[derive(Debug, Clone, Default)]
pub struct StubLoader {
    stubs_dir: Option<PathBuf>,
}

impl StubLoader {
    /// Loader looking for custom stubs under `stubs_dir`
    #[must_use]
    pub const fn new(stubs_dir: Option<PathBuf>) -> Self {
        Self { stubs_dir }
    }

    /// Directory searched for custom stubs
    #[must_use]
    pub fn stubs_dir(&self) -> Option<&Path> {
        self.stubs_dir.as_deref()
    }

    /// Location a custom stub would have
    #[must_use]
    pub fn custom_path(&self, variant: Variant, name: &str) -> Option<PathBuf> {
        self.stubs_dir
            .as_ref()
            .map(|dir| dir.join(variant.stub_dir()).join(name))
    }

    /// Load one stub
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::ReadStub`] if a custom stub exists but cannot be
    /// read, or if `name` is not a known stub and no custom file provides it.
    pub fn load<F: Filesystem>(&self, fs: &F, variant: Variant, name: &str) -> Result<TemplateStub> {
        if let Some(path) = self.custom_path(variant, name).filter(|path| fs.exists(path)) {
            tracing::warn!(stub = name, path = %path.display(), "using custom stub");
            let contents = fs.read_to_string(&path).map_err(|source| ScaffoldError::ReadStub {
                path: path.clone(),
                source,
            })?;

            return Ok(TemplateStub {
                name: name.to_string(),
                contents,
                origin: StubOrigin::Custom(path),
            });
        }

        let contents = variant.default_stub(name).ok_or_else(|| ScaffoldError::ReadStub {
            path: PathBuf::from(variant.stub_dir()).join(name),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "unknown stub"),
        })?;

        Ok(TemplateStub {
            name: name.to_string(),
            contents: contents.to_string(),
            origin: StubOrigin::Default,
        })
    }

    /// Load every stub for a variant, in [`STUB_NAMES`] order
    ///
    /// # Errors
    ///
    /// Returns the first error from [`StubLoader::load`].
    pub fn load_all<F: Filesystem>(&self, fs: &F, variant: Variant) -> Result<Vec<TemplateStub>> {
        STUB_NAMES
            .iter()
            .map(|name| self.load(fs, variant, name))
            .collect()
    }
}
