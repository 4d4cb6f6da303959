//! Stub management commands
//!
//! - `stubs:list` - Show where each stub is loaded from
//! - `stubs:publish` - Copy the default stubs out for customisation

use console::Emoji;
use std::path::Path;

use crate::error::{Result, ScaffoldError};
use crate::fs::Filesystem;
use crate::prompt::Prompter;
use crate::templates::{StubOrigin, Variant, STUB_NAMES};

use super::Session;

static CUSTOM: Emoji<'_, '_> = Emoji("✨ ", "* ");
static DEFAULT: Emoji<'_, '_> = Emoji("  ", "  ");
static CHECK: Emoji<'_, '_> = Emoji("✓ ", "");

/// Stub management subcommands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StubsCommand {
    /// List every stub and whether it is customised
    List,
    /// Write the default stubs into the stubs directory
    Publish {
        /// Overwrite stubs that already exist
        force: bool,
    },
}

impl StubsCommand {
    /// Execute the stubs command
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A custom stub cannot be read
    /// - No stubs directory is configured (publish)
    /// - A directory or stub cannot be written (publish)
    pub fn execute<P: Prompter, F: Filesystem>(self, session: &mut Session<P, F>) -> Result<()> {
        match self {
            Self::List => list(session),
            Self::Publish { force } => publish(session, force),
        }
    }
}

fn list<P: Prompter, F: Filesystem>(session: &mut Session<P, F>) -> Result<()> {
    let dir = session.stubs.stubs_dir().map_or_else(
        || "(none)".to_string(),
        |dir| dir.display().to_string(),
    );
    session.prompter.info(&format!("Stubs directory: {dir}"));

    for variant in Variant::ALL {
        session.prompter.info("");
        session
            .prompter
            .info(&format!("{variant} ({})", variant.stub_dir()));

        for name in STUB_NAMES {
            let stub = session.stubs.load(&session.fs, variant, name)?;
            let line = match stub.origin {
                StubOrigin::Custom(path) => format!("{CUSTOM}{name} -> {}", path.display()),
                StubOrigin::Default => format!("{DEFAULT}{name} (default)"),
            };
            session.prompter.info(&line);
        }
    }

    Ok(())
}

fn publish<P: Prompter, F: Filesystem>(session: &mut Session<P, F>, force: bool) -> Result<()> {
    if session.stubs.stubs_dir().is_none() {
        return Err(ScaffoldError::NoStubsDir);
    }

    let mut written = 0_usize;
    for variant in Variant::ALL {
        for name in STUB_NAMES {
            let (Some(target), Some(contents)) =
                (session.stubs.custom_path(variant, name), variant.default_stub(name))
            else {
                continue;
            };

            if session.fs.exists(&target) && !force {
                session
                    .prompter
                    .info(&format!("{DEFAULT}skipped {} (exists)", target.display()));
                continue;
            }

            if let Some(parent) = target.parent() {
                create_dir_all(&mut session.fs, parent)?;
            }
            session
                .fs
                .write(&target, contents)
                .map_err(|source| ScaffoldError::Write {
                    path: target.clone(),
                    source,
                })?;

            session
                .prompter
                .info(&format!("{CHECK}{}", target.display()));
            written += 1;
        }
    }

    session
        .prompter
        .success(&format!("Published {written} stubs."));
    Ok(())
}

fn create_dir_all<F: Filesystem>(fs: &mut F, dir: &Path) -> Result<()> {
    let mut ancestors: Vec<&Path> = dir
        .ancestors()
        .filter(|path| !path.as_os_str().is_empty())
        .collect();
    ancestors.reverse();

    for path in ancestors {
        if !fs.exists(path) {
            fs.create_dir(path).map_err(|source| ScaffoldError::CreateDir {
                path: path.to_path_buf(),
                source,
            })?;
        }
    }

    Ok(())
}
