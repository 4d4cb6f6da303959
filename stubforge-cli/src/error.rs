//! Scaffolding error types
//!
//! [`ValidationError`] covers answers rejected inside the property prompt loop and
//! never leaves it. Everything else is a [`ScaffoldError`], which is reported once
//! at the command boundary.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result alias for scaffolding operations
pub type Result<T, E = ScaffoldError> = std::result::Result<T, E>;

/// An answer rejected by the property prompt loop
///
/// The display text is shown to the user before asking again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// No name was entered
    #[error("Please provide a name")]
    EmptyName,

    /// Name is not already written in camelCase
    #[error("Name must be camelcase")]
    NotCamelCase(String),

    /// Name was used by an earlier property
    #[error("Prop already defined")]
    Duplicate(String),

    /// No type was ticked in the selection
    #[error("Please select one or more types")]
    NoTypes,
}

/// Errors that abort a scaffolding command
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// The primary file for the component is already on disk
    #[error("{component} already exists at [{path}].")]
    AlreadyExists {
        /// Component (Pascal) name
        component: String,
        /// Path as the user typed it
        path: String,
    },

    /// The user declined the final confirmation
    #[error("Scaffolding cancelled.")]
    Aborted,

    /// The target path has no usable component segment
    #[error("invalid component path: '{0}'")]
    InvalidPath(String),

    /// No directory is available for custom stubs
    #[error("no stubs directory configured; set stubs_dir in stubforge.toml")]
    NoStubsDir,

    /// A custom stub could not be read
    #[error("failed to read stub {}: {source}", path.display())]
    ReadStub {
        /// Stub file location
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// An output directory could not be created
    #[error("failed to create directory {}: {source}", path.display())]
    CreateDir {
        /// Directory location
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// A rendered file could not be written
    #[error("failed to write {}: {source}", path.display())]
    Write {
        /// Output file location
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// A stub failed to render
    #[error("failed to render stub {stub}: {source}")]
    Render {
        /// Stub name
        stub: String,
        /// Template engine error
        #[source]
        source: Box<handlebars::RenderError>,
    },

    /// The terminal prompt could not be shown or read
    #[error("prompt failed: {0}")]
    Prompt(#[source] io::Error),
}

impl ScaffoldError {
    /// Create a prompt error from any prompt backend failure
    #[must_use]
    pub fn prompt<E>(err: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Self::Prompt(io::Error::other(err))
    }

    /// Process exit code for this error
    ///
    /// Declining the confirmation is a normal way out and exits cleanly.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Aborted => 0,
            _ => 1,
        }
    }
}
