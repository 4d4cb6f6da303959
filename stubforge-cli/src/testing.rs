//! Test doubles for driving commands without a terminal or disk
//!
//! ```
//! use stubforge_cli_lib::prompt::Prompter;
//! use stubforge_cli_lib::testing::ScriptedPrompter;
//!
//! let mut prompter = ScriptedPrompter::new().with_confirm(true).with_input("count");
//! assert!(prompter.confirm("Would you like to define props?").unwrap());
//! assert_eq!(prompter.input("Name").unwrap(), "count");
//! assert!(prompter.is_exhausted());
//! ```

use std::collections::{BTreeMap, BTreeSet, VecDeque};
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{Result, ScaffoldError};
use crate::fs::Filesystem;
use crate::prompt::Prompter;

/// A queued answer
#[derive(Debug, Clone, PartialEq, Eq)]
enum Answer {
    Confirm(bool),
    Input(String),
    Select(Vec<usize>),
}

/// Prompter that replays queued answers and records what was asked and printed
///
/// Asking a question of the wrong kind, or running out of answers, fails with
/// [`ScaffoldError::Prompt`].
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<Answer>,
    questions: Vec<String>,
    infos: Vec<String>,
    errors: Vec<String>,
    successes: Vec<String>,
}

impl ScriptedPrompter {
    /// Create a prompter with no answers queued
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a yes/no answer
    #[must_use]
    pub fn with_confirm(mut self, answer: bool) -> Self {
        self.answers.push_back(Answer::Confirm(answer));
        self
    }

    /// Queue a free-text answer
    #[must_use]
    pub fn with_input(mut self, answer: impl Into<String>) -> Self {
        self.answers.push_back(Answer::Input(answer.into()));
        self
    }

    /// Queue a multi-select answer
    #[must_use]
    pub fn with_select(mut self, indices: &[usize]) -> Self {
        self.answers.push_back(Answer::Select(indices.to_vec()));
        self
    }

    /// Whether every queued answer was consumed
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.answers.is_empty()
    }

    /// Questions asked, in order
    #[must_use]
    pub fn questions(&self) -> &[String] {
        &self.questions
    }

    /// Info lines printed
    #[must_use]
    pub fn infos(&self) -> &[String] {
        &self.infos
    }

    /// Error lines printed
    #[must_use]
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Success lines printed
    #[must_use]
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    fn next(&mut self, question: &str) -> Result<Answer> {
        self.questions.push(question.to_string());
        self.answers.pop_front().ok_or_else(|| {
            ScaffoldError::Prompt(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("no answer queued for '{question}'"),
            ))
        })
    }
}

fn unexpected(question: &str, answer: &Answer) -> ScaffoldError {
    ScaffoldError::Prompt(io::Error::new(
        io::ErrorKind::InvalidInput,
        format!("queued {answer:?} does not answer '{question}'"),
    ))
}

impl Prompter for ScriptedPrompter {
    fn confirm(&mut self, question: &str) -> Result<bool> {
        match self.next(question)? {
            Answer::Confirm(answer) => Ok(answer),
            other => Err(unexpected(question, &other)),
        }
    }

    fn input(&mut self, question: &str) -> Result<String> {
        match self.next(question)? {
            Answer::Input(answer) => Ok(answer),
            other => Err(unexpected(question, &other)),
        }
    }

    fn multi_select(&mut self, question: &str, items: &[&str]) -> Result<Vec<usize>> {
        match self.next(question)? {
            Answer::Select(indices) if indices.iter().all(|&i| i < items.len()) => Ok(indices),
            other => Err(unexpected(question, &other)),
        }
    }

    fn info(&mut self, message: &str) {
        self.infos.push(message.to_string());
    }

    fn error(&mut self, message: &str) {
        self.errors.push(message.to_string());
    }

    fn success(&mut self, message: &str) {
        self.successes.push(message.to_string());
    }
}

/// In-memory file system that records every change
#[derive(Debug, Default, Clone)]
pub struct MemoryFilesystem {
    files: BTreeMap<PathBuf, String>,
    dirs: BTreeSet<PathBuf>,
    created_dirs: Vec<PathBuf>,
    writes: Vec<PathBuf>,
    failing_write: Option<PathBuf>,
}

impl MemoryFilesystem {
    /// Create an empty file system
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file without recording it as a write
    #[must_use]
    pub fn with_file(mut self, path: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
        self.files.insert(path.into(), contents.into());
        self
    }

    /// Seed a directory without recording it as created
    #[must_use]
    pub fn with_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.dirs.insert(path.into());
        self
    }

    /// Make writes to `path` fail with a permission error
    #[must_use]
    pub fn failing_write(mut self, path: impl Into<PathBuf>) -> Self {
        self.failing_write = Some(path.into());
        self
    }

    /// Contents of a file
    #[must_use]
    pub fn file(&self, path: &Path) -> Option<&str> {
        self.files.get(path).map(String::as_str)
    }

    /// Files written, in order
    #[must_use]
    pub fn writes(&self) -> &[PathBuf] {
        &self.writes
    }

    /// Directories created, in order
    #[must_use]
    pub fn created_dirs(&self) -> &[PathBuf] {
        &self.created_dirs
    }

    /// Whether nothing was created or written
    #[must_use]
    pub fn is_untouched(&self) -> bool {
        self.writes.is_empty() && self.created_dirs.is_empty()
    }
}

impl Filesystem for MemoryFilesystem {
    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(path) || self.dirs.contains(path)
    }

    fn create_dir(&mut self, path: &Path) -> io::Result<()> {
        if self.files.contains_key(path) {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("{} is a file", path.display()),
            ));
        }
        if self.dirs.insert(path.to_path_buf()) {
            self.created_dirs.push(path.to_path_buf());
        }
        Ok(())
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        self.files.get(path).cloned().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, format!("{} not found", path.display()))
        })
    }

    fn write(&mut self, path: &Path, contents: &str) -> io::Result<()> {
        if self.failing_write.as_deref() == Some(path) {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"));
        }
        self.files.insert(path.to_path_buf(), contents.to_string());
        self.writes.push(path.to_path_buf());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answers_replay_through_prompter() {
        let mut prompter = ScriptedPrompter::new()
            .with_confirm(true)
            .with_input("count")
            .with_select(&[1, 0]);

        assert!(prompter.confirm("Would you like to define props?").unwrap());
        assert_eq!(prompter.input("Name").unwrap(), "count");
        assert_eq!(
            prompter.multi_select("Select type(s)", &["String", "Number"]).unwrap(),
            [1, 0]
        );
        assert!(prompter.is_exhausted());
        assert_eq!(prompter.questions(), ["Would you like to define props?", "Name", "Select type(s)"]);
    }

    #[test]
    fn test_wrong_answer_kind_is_an_error() {
        let mut prompter = ScriptedPrompter::new().with_input("count");
        assert!(matches!(prompter.confirm("Is this correct?"), Err(ScaffoldError::Prompt(_))));
    }

    #[test]
    fn test_out_of_range_selection_is_an_error() {
        let mut prompter = ScriptedPrompter::new().with_select(&[3]);
        assert!(prompter.multi_select("Select type(s)", &["String", "Number"]).is_err());
    }

    #[test]
    fn test_memory_filesystem_records_changes() {
        let mut fs = MemoryFilesystem::new().with_dir("/project");
        fs.create_dir(Path::new("/project")).unwrap();
        fs.create_dir(Path::new("/project/widgets")).unwrap();
        fs.write(Path::new("/project/widgets/a.js"), "a").unwrap();

        assert_eq!(fs.created_dirs(), [PathBuf::from("/project/widgets")]);
        assert_eq!(fs.writes(), [PathBuf::from("/project/widgets/a.js")]);
        assert_eq!(fs.file(Path::new("/project/widgets/a.js")), Some("a"));
    }

    #[test]
    fn test_failing_write() {
        let mut fs = MemoryFilesystem::new().failing_write("/project/a.js");
        let err = fs.write(Path::new("/project/a.js"), "a").unwrap_err();

        assert_eq!(err.kind(), io::ErrorKind::PermissionDenied);
        assert!(fs.is_untouched());
    }
}
