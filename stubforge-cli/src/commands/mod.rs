//! CLI command implementations
//!
//! Both `make:*` commands share one skeleton, see [`run`]:
//!
//! 1. refuse if the component's primary file already exists
//! 2. ask the variant's questions
//! 3. show a summary and ask for confirmation
//! 4. build the request and write the files
//! 5. report what was created
//!
//! Errors from any step are reported once by [`execute`].

use std::path::{Path, PathBuf};

use crate::error::{Result, ScaffoldError};
use crate::fs::Filesystem;
use crate::naming::component_name;
use crate::prompt::Prompter;
use crate::scaffold::{component_dir, GeneratedFile, Materializer, ScaffoldRequest};
use crate::templates::{output_filename, StubLoader, Variant, STUB_NAMES};

pub mod make_component;
pub mod make_page_component;
pub mod stubs;

pub use make_component::MakeComponentCommand;
pub use make_page_component::MakePageComponentCommand;
pub use stubs::StubsCommand;

/// Everything a command needs to talk to the user and the disk
pub struct Session<P, F> {
    prompter: P,
    fs: F,
    stubs: StubLoader,
    root: PathBuf,
    materializer: Materializer,
}

impl<P: Prompter, F: Filesystem> Session<P, F> {
    /// Create a session writing below `root`
    #[must_use]
    pub fn new(prompter: P, fs: F, stubs: StubLoader, root: impl Into<PathBuf>) -> Self {
        Self {
            prompter,
            fs,
            stubs,
            root: root.into(),
            materializer: Materializer::new(),
        }
    }

    /// The prompter
    #[must_use]
    pub const fn prompter(&self) -> &P {
        &self.prompter
    }

    /// The file system
    #[must_use]
    pub const fn filesystem(&self) -> &F {
        &self.fs
    }

    /// Project root
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Report an error to the user and return the exit code for it
    pub fn report_error(&mut self, err: &ScaffoldError) -> u8 {
        match err {
            ScaffoldError::Aborted => self.prompter.info(&err.to_string()),
            _ => self.prompter.error(&err.to_string()),
        }
        tracing::debug!(error = ?err, "command failed");
        err.exit_code()
    }
}

/// A command that scaffolds one component variant
pub trait MakeCommand {
    /// Answers collected before confirmation
    type Answers;

    /// Stub set used
    fn variant(&self) -> Variant;

    /// Target path as given on the command line
    fn path(&self) -> &str;

    /// Ask the variant's questions
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::Prompt`] if a question cannot be asked.
    fn collect<P: Prompter>(&self, prompter: &mut P) -> Result<Self::Answers>;

    /// Lines describing the answers, shown before confirmation
    fn summary(&self, answers: &Self::Answers) -> Vec<String>;

    /// Turn confirmed answers into a request
    fn build(&self, path: &str, answers: Self::Answers) -> ScaffoldRequest;
}

/// Result of a completed scaffold
#[derive(Debug)]
pub struct Scaffolded {
    /// The request that was rendered
    pub request: ScaffoldRequest,
    /// Files written, relative to the project root
    pub files: Vec<GeneratedFile>,
}

/// Strip trailing slashes and reject paths without a component name
///
/// # Errors
///
/// Returns [`ScaffoldError::InvalidPath`] if nothing is left.
pub fn normalize_path(path: &str) -> Result<&str> {
    let trimmed = path.trim_end_matches('/');

    if trimmed.is_empty() {
        return Err(ScaffoldError::InvalidPath(path.to_string()));
    }

    Ok(trimmed)
}

/// Location of the primary file a command would create
#[must_use]
pub fn primary_file(root: &Path, path: &str) -> PathBuf {
    component_dir(root, path).join(output_filename(STUB_NAMES[0], component_name(path)))
}

/// Run the shared scaffolding steps for a command
///
/// # Errors
///
/// - [`ScaffoldError::InvalidPath`] / [`ScaffoldError::AlreadyExists`] before any question
/// - [`ScaffoldError::Aborted`] if the summary is not confirmed
/// - stub, render and write errors from materialization
pub fn run<C, P, F>(command: &C, session: &mut Session<P, F>) -> Result<Scaffolded>
where
    C: MakeCommand,
    P: Prompter,
    F: Filesystem,
{
    let path = normalize_path(command.path())?;
    let component = component_name(path);

    let primary = primary_file(&session.root, path);
    if session.fs.exists(&primary) {
        tracing::debug!(path = %primary.display(), "primary file exists");
        return Err(ScaffoldError::AlreadyExists {
            component: component.to_string(),
            path: path.to_string(),
        });
    }

    tracing::debug!(variant = %command.variant(), path, "collecting answers");
    let answers = command.collect(&mut session.prompter)?;

    session
        .prompter
        .info(&format!("Scaffolding component at: {path}"));
    for line in command.summary(&answers) {
        session.prompter.info(&line);
    }
    if !session.prompter.confirm("Is this correct?")? {
        return Err(ScaffoldError::Aborted);
    }

    let request = command.build(path, answers);
    let stubs = session.stubs.load_all(&session.fs, request.variant())?;
    let files = session
        .materializer
        .materialize(&mut session.fs, &session.root, &request, &stubs)?;

    Ok(Scaffolded { request, files })
}

/// Run a command and report the outcome, returning the process exit code
pub fn execute<C, P, F>(command: &C, session: &mut Session<P, F>) -> u8
where
    C: MakeCommand,
    P: Prompter,
    F: Filesystem,
{
    match run(command, session) {
        Ok(Scaffolded { request, files }) => {
            for file in &files {
                session
                    .prompter
                    .info(&format!("  {} ({})", file.path.display(), file.description));
            }
            session.prompter.success(&format!(
                "{} scaffolding created successfully at [{}].",
                request.component_name, request.path
            ));
            0
        }
        Err(err) => session.report_error(&err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path("widgets/InfoCard/").unwrap(), "widgets/InfoCard");
        assert_eq!(normalize_path("InfoCard").unwrap(), "InfoCard");
        assert!(matches!(normalize_path("/"), Err(ScaffoldError::InvalidPath(_))));
        assert!(matches!(normalize_path(""), Err(ScaffoldError::InvalidPath(_))));
    }

    #[test]
    fn test_primary_file() {
        assert_eq!(
            primary_file(Path::new("/project"), "widgets/InfoCard"),
            PathBuf::from("/project/widgets/InfoCard/InfoCard.vue")
        );
    }

    #[test]
    fn test_broken_custom_stub_writes_nothing() {
        use crate::testing::{MemoryFilesystem, ScriptedPrompter};

        let fs = MemoryFilesystem::new()
            .with_dir("/project")
            .with_file("/stubs/MakePageComponent/Component.spec.js.stub", "{{#each}}");
        let mut session = Session::new(
            ScriptedPrompter::new().with_confirm(false).with_confirm(true),
            fs,
            StubLoader::new(Some(PathBuf::from("/stubs"))),
            "/project",
        );

        let code = execute(&MakePageComponentCommand::new("pages/Profile"), &mut session);

        assert_eq!(code, 1);
        assert!(session.filesystem().is_untouched());
        assert!(session.prompter().errors()[0].contains("Component.spec.js.stub"));
    }
}
