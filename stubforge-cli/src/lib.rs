//! stubforge CLI library
//!
//! Interactive scaffolding for Vue single file components. Each command asks a
//! few questions, shows a summary, and writes the component together with its
//! unit test and Storybook story.

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::cognitive_complexity)]
#![allow(clippy::multiple_crate_versions)]

pub mod commands;
pub mod config;
pub mod error;
pub mod fs;
pub mod naming;
pub mod observability;
pub mod prompt;
pub mod props;
pub mod scaffold;
pub mod templates;
pub mod testing;

pub use commands::{MakeComponentCommand, MakePageComponentCommand, Session, StubsCommand};
pub use config::{Config, PromptTheme};
pub use error::{Result, ScaffoldError, ValidationError};
pub use fs::{Filesystem, LocalFilesystem};
pub use naming::Naming;
pub use prompt::{Prompter, TerminalPrompter};
pub use props::{PropCollector, PropertyDescriptor, TypeTag};
pub use scaffold::{Materializer, ScaffoldRequest};
pub use templates::{StubLoader, Variant};
