//! Component property definitions
//!
//! The plain component command asks the user for any number of props. Each prop
//! has a camelCase name and one or more [`TypeTag`]s; the first tag decides the
//! default used in the component and the example value used in tests and stories.

use serde::Serialize;
use std::fmt;

use crate::error::{Result, ValidationError};
use crate::naming::is_camel_case;
use crate::prompt::Prompter;

/// Prop type vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TypeTag {
    /// `String`
    String,
    /// `Number`
    Number,
    /// `Boolean`
    Boolean,
    /// `Object`
    Object,
    /// `Array`
    Array,
    /// `Function`
    Function,
}

impl TypeTag {
    /// Every tag, in the order offered to the user
    pub const ALL: [Self; 6] = [
        Self::String,
        Self::Number,
        Self::Boolean,
        Self::Object,
        Self::Array,
        Self::Function,
    ];

    /// Type name as written in generated code
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::String => "String",
            Self::Number => "Number",
            Self::Boolean => "Boolean",
            Self::Object => "Object",
            Self::Array => "Array",
            Self::Function => "Function",
        }
    }

    /// Default expression for the prop declaration in the component
    #[must_use]
    pub const fn default_expression(self) -> &'static str {
        match self {
            Self::String => "''",
            Self::Number => "null",
            Self::Boolean => "false",
            Self::Object => "() => ({})",
            Self::Array => "() => ([])",
            Self::Function => "() => {}",
        }
    }

    /// Representative value passed to the prop in tests and stories
    #[must_use]
    pub const fn example_literal(self) -> &'static str {
        match self {
            Self::String => "''",
            Self::Number => "1",
            Self::Boolean => "false",
            Self::Object => "{}",
            Self::Array => "[]",
            Self::Function => "() => {}",
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single prop of the generated component
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDescriptor {
    /// camelCase prop name
    pub name: String,
    /// Accepted types, first one authoritative
    pub types: Vec<TypeTag>,
    /// Default expression inside the component
    pub default_expression: String,
    /// Example value inside tests and stories
    pub example_literal_expression: String,
}

impl PropertyDescriptor {
    /// Build a descriptor, looking up values from the first type
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NoTypes`] if `types` is empty.
    pub fn new(name: impl Into<String>, types: Vec<TypeTag>) -> Result<Self, ValidationError> {
        let first = *types.first().ok_or(ValidationError::NoTypes)?;

        Ok(Self {
            name: name.into(),
            types,
            default_expression: first.default_expression().to_string(),
            example_literal_expression: first.example_literal().to_string(),
        })
    }

    /// Types joined for display, e.g. `Number, String`
    #[must_use]
    pub fn type_list(&self) -> String {
        self.types
            .iter()
            .map(|t| t.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Where the prop loop currently is
#[derive(Debug, Clone, PartialEq, Eq)]
enum Step {
    /// Ask whether to define a (further) prop
    AskContinue,
    /// Ask for a name until one passes validation
    AskName,
    /// Ask for types until at least one is picked
    AskTypes { name: String },
    /// User answered no
    Done,
}

/// Interactive loop that builds the prop list
#[derive(Debug)]
pub struct PropCollector {
    properties: Vec<PropertyDescriptor>,
    step: Step,
}

impl Default for PropCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl PropCollector {
    /// Start with no props, about to ask whether to define one
    #[must_use]
    pub const fn new() -> Self {
        Self {
            properties: Vec::new(),
            step: Step::AskContinue,
        }
    }

    /// Props collected so far
    #[must_use]
    pub fn properties(&self) -> &[PropertyDescriptor] {
        &self.properties
    }

    /// Check a candidate prop name against the props collected so far
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationError`] to show before asking again.
    pub fn validate_name(&self, name: &str) -> Result<(), ValidationError> {
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if !is_camel_case(name) {
            return Err(ValidationError::NotCamelCase(name.to_string()));
        }
        if self.properties.iter().any(|prop| prop.name == name) {
            return Err(ValidationError::Duplicate(name.to_string()));
        }

        Ok(())
    }

    /// Map selected indices onto type tags
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NoTypes`] if nothing usable was selected.
    pub fn validate_types(selection: &[usize]) -> Result<Vec<TypeTag>, ValidationError> {
        let types: Vec<TypeTag> = selection
            .iter()
            .filter_map(|&index| TypeTag::ALL.get(index).copied())
            .collect();

        if types.is_empty() {
            return Err(ValidationError::NoTypes);
        }

        Ok(types)
    }

    /// Run the loop until the user declines to add another prop
    ///
    /// # Errors
    ///
    /// Only prompt failures escape; rejected answers are asked again.
    pub fn collect<P: Prompter>(mut self, prompter: &mut P) -> Result<Vec<PropertyDescriptor>> {
        let type_names = TypeTag::ALL.map(TypeTag::as_str);

        loop {
            self.step = match std::mem::replace(&mut self.step, Step::Done) {
                Step::AskContinue => {
                    let question = if self.properties.is_empty() {
                        "Would you like to define props?"
                    } else {
                        "Would you like to define another?"
                    };

                    if prompter.confirm(question)? {
                        prompter.info("");
                        Step::AskName
                    } else {
                        Step::Done
                    }
                }
                Step::AskName => {
                    let name = prompter.input("Name")?;
                    match self.validate_name(&name) {
                        Ok(()) => Step::AskTypes { name },
                        Err(err) => {
                            tracing::debug!(%name, error = %err, "rejected prop name");
                            prompter.error(&err.to_string());
                            Step::AskName
                        }
                    }
                }
                Step::AskTypes { name } => {
                    let selection = prompter.multi_select("Select type(s)", &type_names)?;
                    match Self::validate_types(&selection)
                        .and_then(|types| PropertyDescriptor::new(name.clone(), types))
                    {
                        Ok(prop) => {
                            tracing::debug!(name = %prop.name, types = %prop.type_list(), "prop defined");
                            self.properties.push(prop);
                            Step::AskContinue
                        }
                        Err(err) => {
                            prompter.error(&err.to_string());
                            Step::AskTypes { name }
                        }
                    }
                }
                Step::Done => return Ok(self.properties),
            };
        }
    }
}
