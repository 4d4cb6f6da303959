//! Naming conventions derived from a component path
//!
//! The last path segment is taken as the component's `PascalCase` name; the other
//! forms are derived from it so every generated file agrees on them.

use convert_case::{Boundary, Case, Converter};
use serde::Serialize;

/// Names used inside the generated files
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Naming {
    /// Last path segment, used as is
    pub pascal_name: String,
    /// camelCase form of the component name
    pub camel_name: String,
    /// kebab-case form of the component name
    pub kebab_name: String,
    /// `../` once per path segment, leading back to the project root
    pub root_prefix: String,
}

impl Naming {
    /// Derive every naming form from a slash-delimited path
    ///
    /// # Examples
    ///
    /// ```
    /// # use stubforge_cli_lib::naming::Naming;
    /// let naming = Naming::derive("widgets/InfoCard");
    /// assert_eq!(naming.pascal_name, "InfoCard");
    /// assert_eq!(naming.camel_name, "infoCard");
    /// assert_eq!(naming.kebab_name, "info-card");
    /// assert_eq!(naming.root_prefix, "../../");
    /// ```
    #[must_use]
    pub fn derive(path: &str) -> Self {
        let pascal_name = component_name(path).to_string();

        Self {
            camel_name: to_camel_case(&pascal_name),
            kebab_name: to_kebab_case(&pascal_name),
            root_prefix: root_prefix(path),
            pascal_name,
        }
    }
}

/// Final segment of a path
///
/// ```
/// # use stubforge_cli_lib::naming::component_name;
/// assert_eq!(component_name("pages/account/Profile"), "Profile");
/// assert_eq!(component_name("Button"), "Button");
/// ```
#[must_use]
pub fn component_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Relative prefix from the component directory back to the project root
///
/// ```
/// # use stubforge_cli_lib::naming::root_prefix;
/// assert_eq!(root_prefix("Button"), "../");
/// assert_eq!(root_prefix("pages/account/Profile"), "../../../");
/// ```
#[must_use]
pub fn root_prefix(path: &str) -> String {
    "../".repeat(path.split('/').count())
}

/// Word boundaries for case conversion
///
/// Digits never start a new word, and an acronym ends before its last capital
/// when a lowercase letter follows (`HTMLViewer` is `HTML` + `Viewer`).
const WORD_BOUNDARIES: [Boundary; 3] = [Boundary::Space, Boundary::LowerUpper, Boundary::Acronym];

fn convert(input: &str, case: Case) -> String {
    // Any other character separates words
    let spaced: String = input
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect();

    Converter::new()
        .set_boundaries(&WORD_BOUNDARIES)
        .to_case(case)
        .convert(spaced)
}

/// Convert to camelCase
///
/// ```
/// # use stubforge_cli_lib::naming::to_camel_case;
/// assert_eq!(to_camel_case("XMLHttpRequest"), "xmlHttpRequest");
/// ```
#[must_use]
pub fn to_camel_case(input: &str) -> String {
    convert(input, Case::Camel)
}

/// Convert to kebab-case
#[must_use]
pub fn to_kebab_case(input: &str) -> String {
    convert(input, Case::Kebab)
}

/// Whether the input is already in camelCase
///
/// ```
/// # use stubforge_cli_lib::naming::is_camel_case;
/// assert!(is_camel_case("isOpen"));
/// assert!(!is_camel_case("IsOpen"));
/// assert!(!is_camel_case("is_open"));
/// ```
#[must_use]
pub fn is_camel_case(input: &str) -> bool {
    !input.is_empty() && input == to_camel_case(input)
}
