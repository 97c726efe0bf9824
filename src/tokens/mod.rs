//! Design token naming tool
//!
//! Builds token names from a selection of category, property, context,
//! element, variant and state, under one of three naming conventions, and
//! renders them in six output formats.
//!
//! # Example
//!
//! ```
//! use design_engineer::tokens::{
//!     build_token_name, format_token_name, Category, NamingConvention, OutputFormat, TokenParts,
//! };
//!
//! let parts = TokenParts {
//!     category: Some(Category::Color),
//!     property: Some("background"),
//!     context: Some("surface"),
//!     element: Some("card"),
//!     variant: Some("default"),
//!     state: Some("hover"),
//! };
//! let name = build_token_name(&parts, NamingConvention::Compact);
//! assert_eq!(format_token_name(&name, OutputFormat::Css), "--bg-surface-card-hover");
//! ```

mod builder;
pub mod catalog;
mod export;
mod format;
mod naming;
mod nested;

pub use builder::{
    slugify, BuilderComponent, BuilderMode, BuilderState, EducationalState, GeneratedToken,
    RelatedTokens, TokenBuilder, TokenKind,
};
pub use catalog::{default_components, Category, ComponentDef};
pub use export::{generate_export_code, ExportOptions, TOOL_NAME};
pub use format::{figma_type, format_token_name, token_type, OutputFormat};
pub use naming::{build_token_name, compact_abbreviation, component_abbreviation, NamingConvention, TokenParts};
pub use nested::{build_nested_object, build_nested_with, PLACEHOLDER, VALUE_KEY};

use thiserror::Error;

/// Errors from parsing token tool options
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Unknown token category '{0}' (expected color, typography, spacing or effects)")]
    UnknownCategory(String),
    #[error("Unknown naming convention '{0}' (expected explicit, compact or component-first)")]
    UnknownConvention(String),
    #[error("Unknown output format '{0}' (expected css, camelCase, json, figma, dtcg or figma-variables)")]
    UnknownFormat(String),
    #[error("Invalid component spec '{0}' (expected NAME:category,category[:states])")]
    InvalidComponent(String),
}

/// Parse a `NAME:cat,cat[:states]` custom component argument
///
/// The optional third field enables states when it is `states`. A blank
/// name is passed through; [`BuilderState::add_custom`] ignores it.
pub fn parse_component_spec(spec: &str) -> Result<(String, Vec<Category>, bool), TokenError> {
    let mut fields = spec.split(':');
    let name = fields.next().map(str::trim).unwrap_or_default();
    let categories = fields.next().unwrap_or_default();
    let has_states = match fields.next() {
        None => false,
        Some("states") => true,
        Some(_) => return Err(TokenError::InvalidComponent(spec.to_string())),
    };
    if categories.is_empty() || fields.next().is_some() {
        return Err(TokenError::InvalidComponent(spec.to_string()));
    }
    let categories = categories
        .split(',')
        .map(|c| c.trim().parse())
        .collect::<Result<Vec<Category>, _>>()?;
    Ok((name.to_string(), categories, has_states))
}
