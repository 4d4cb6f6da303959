//! `make:page-component` - scaffold a page with test and story files

use crate::error::Result;
use crate::prompt::Prompter;
use crate::scaffold::ScaffoldRequest;
use crate::templates::Variant;

use super::MakeCommand;

/// Scaffold a page component, optionally mocking `asyncData`
pub struct MakePageComponentCommand {
    path: String,
}

impl MakePageComponentCommand {
    /// Create a new command instance
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

impl MakeCommand for MakePageComponentCommand {
    type Answers = bool;

    fn variant(&self) -> Variant {
        Variant::PageComponent
    }

    fn path(&self) -> &str {
        &self.path
    }

    fn collect<P: Prompter>(&self, prompter: &mut P) -> Result<bool> {
        prompter.confirm("Mock asyncData?")
    }

    fn summary(&self, mock_async_data: &bool) -> Vec<String> {
        vec![format!("Mock asyncData: {mock_async_data}")]
    }

    fn build(&self, path: &str, mock_async_data: bool) -> ScaffoldRequest {
        ScaffoldRequest::page(path, mock_async_data)
    }
}
