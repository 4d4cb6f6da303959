//! Description of one scaffolding run

use serde_json::json;

use crate::naming::Naming;
use crate::props::PropertyDescriptor;
use crate::templates::Variant;

/// Answers that differ between the two commands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestDetails {
    /// Props of a plain component, in declaration order
    Component {
        /// Collected props, possibly empty
        properties: Vec<PropertyDescriptor>,
    },
    /// Options of a page component
    Page {
        /// Emit a stubbed `asyncData` hook
        mock_async_data: bool,
    },
}

/// Everything needed to render a component's files
///
/// Built once all questions are answered and confirmed; not validated again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldRequest {
    /// Path as given on the command line
    pub path: String,
    /// Final path segment
    pub component_name: String,
    /// Derived names
    pub naming: Naming,
    /// Variant-specific answers
    pub details: RequestDetails,
}

impl ScaffoldRequest {
    /// Request for `make:component`
    #[must_use]
    pub fn component(path: &str, properties: Vec<PropertyDescriptor>) -> Self {
        Self::build(path, RequestDetails::Component { properties })
    }

    /// Request for `make:page-component`
    #[must_use]
    pub fn page(path: &str, mock_async_data: bool) -> Self {
        Self::build(path, RequestDetails::Page { mock_async_data })
    }

    fn build(path: &str, details: RequestDetails) -> Self {
        let naming = Naming::derive(path);

        Self {
            path: path.to_string(),
            component_name: naming.pascal_name.clone(),
            naming,
            details,
        }
    }

    /// Which stub set renders this request
    #[must_use]
    pub const fn variant(&self) -> Variant {
        match self.details {
            RequestDetails::Component { .. } => Variant::Component,
            RequestDetails::Page { .. } => Variant::PageComponent,
        }
    }

    /// Collected props; empty for page components
    #[must_use]
    pub fn properties(&self) -> &[PropertyDescriptor] {
        match &self.details {
            RequestDetails::Component { properties } => properties.as_slice(),
            RequestDetails::Page { .. } => &[],
        }
    }

    /// Template variables
    ///
    /// `toRoot` mirrors `rootPrefix` for stubs written against the older name.
    #[must_use]
    pub fn context(&self) -> serde_json::Value {
        let mut context = json!({
            "path": self.path,
            "componentName": self.component_name,
            "pascalName": self.naming.pascal_name,
            "camelName": self.naming.camel_name,
            "kebabName": self.naming.kebab_name,
            "rootPrefix": self.naming.root_prefix,
            "toRoot": self.naming.root_prefix,
        });

        match &self.details {
            RequestDetails::Component { properties } => {
                context["props"] = json!(properties);
            }
            RequestDetails::Page { mock_async_data } => {
                context["mockAsyncData"] = json!(mock_async_data);
            }
        }

        context
    }
}
