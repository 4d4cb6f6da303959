//! `make:component` - scaffold a component with test and story files

use crate::error::Result;
use crate::props::{PropCollector, PropertyDescriptor};
use crate::prompt::Prompter;
use crate::scaffold::ScaffoldRequest;
use crate::templates::Variant;

use super::MakeCommand;

/// Scaffold a plain component, asking for its props
pub struct MakeComponentCommand {
    path: String,
}

impl MakeComponentCommand {
    /// Create a new command instance
    ///
    /// # Arguments
    ///
    /// * `path` - Directory path whose last segment is the component name (e.g. `widgets/InfoCard`)
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

impl MakeCommand for MakeComponentCommand {
    type Answers = Vec<PropertyDescriptor>;

    fn variant(&self) -> Variant {
        Variant::Component
    }

    fn path(&self) -> &str {
        &self.path
    }

    fn collect<P: Prompter>(&self, prompter: &mut P) -> Result<Self::Answers> {
        PropCollector::new().collect(prompter)
    }

    fn summary(&self, props: &Self::Answers) -> Vec<String> {
        if props.is_empty() {
            return Vec::new();
        }

        std::iter::once("Props:".to_string())
            .chain(
                props
                    .iter()
                    .map(|prop| format!("{}: [{}]", prop.name, prop.type_list())),
            )
            .collect()
    }

    fn build(&self, path: &str, props: Self::Answers) -> ScaffoldRequest {
        ScaffoldRequest::component(path, props)
    }
}
