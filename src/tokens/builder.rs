//! Stateful token builder
//!
//! The tool has two modes. Educational mode walks one selection through
//! category, property, context, element, variant and states, deriving the
//! resulting names as it goes. Builder mode explodes a set of components
//! into a batch of names. Each mode owns its state, so switching between
//! them never loses work.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::catalog::{
    default_components, Category, ComponentDef, ContextInfo, ElementInfo, DEFAULT_VARIANT,
    INTERACTIVE_STATES,
};
use super::export::{generate_export_code, ExportOptions};
use super::format::{format_token_name, OutputFormat};
use super::naming::{build_token_name, NamingConvention, TokenParts};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuilderMode {
    #[default]
    Educational,
    Builder,
}

/// Whether a generated name is the base token or a state of it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Base,
    State,
}

/// A derived name in both its raw and formatted forms
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedToken {
    pub name: String,
    pub formatted: String,
    pub kind: TokenKind,
}

/// Tokens for a sibling property of the current selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelatedTokens {
    pub property: &'static str,
    pub tokens: Vec<GeneratedToken>,
}

/// One selection walked step by step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EducationalState {
    pub category: Option<Category>,
    pub property: Option<String>,
    pub context: Option<String>,
    pub element: Option<String>,
    pub variant: Option<String>,
    pub states: Vec<String>,
    pub convention: NamingConvention,
    pub format: OutputFormat,
    pub show_all_elements: bool,
}

impl Default for EducationalState {
    fn default() -> Self {
        Self {
            category: None,
            property: None,
            context: None,
            element: None,
            variant: Some(DEFAULT_VARIANT.to_string()),
            states: Vec::new(),
            convention: NamingConvention::default(),
            format: OutputFormat::default(),
            show_all_elements: false,
        }
    }
}

impl EducationalState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Choose a category, clearing everything that depended on the old one
    pub fn select_category(&mut self, category: Category) {
        self.category = Some(category);
        self.property = None;
        self.context = None;
        self.element = None;
    }

    pub fn select_property(&mut self, property: impl Into<String>) {
        self.property = Some(property.into());
    }

    /// Choose a context; the element is cleared since suggestions change
    pub fn select_context(&mut self, context: impl Into<String>) {
        self.context = Some(context.into());
        self.element = None;
    }

    /// Select an element, or deselect it when it is already selected
    pub fn toggle_element(&mut self, element: &str) {
        if self.element.as_deref() == Some(element) {
            self.element = None;
        } else {
            self.element = Some(element.to_string());
        }
    }

    pub fn select_variant(&mut self, variant: impl Into<String>) {
        self.variant = Some(variant.into());
    }

    pub fn toggle_state(&mut self, state: &str) {
        if let Some(pos) = self.states.iter().position(|s| s == state) {
            self.states.remove(pos);
        } else {
            self.states.push(state.to_string());
        }
    }

    pub fn add_all_interactive_states(&mut self) {
        self.states = INTERACTIVE_STATES.iter().map(|s| s.to_string()).collect();
    }

    /// Clear the selection; convention and format are kept
    pub fn reset(&mut self) {
        *self = Self {
            convention: self.convention,
            format: self.format,
            ..Self::default()
        };
    }

    pub fn current_context(&self) -> Option<&'static ContextInfo> {
        self.category?.context(self.context.as_deref()?)
    }

    pub fn suggested_elements(&self) -> &'static [&'static str] {
        self.current_context().map(|c| c.suggested_elements).unwrap_or(&[])
    }

    /// Elements offered for selection: the context's suggestions unless all are shown
    pub fn visible_elements(&self) -> Vec<&'static ElementInfo> {
        let Some(category) = self.category else {
            return Vec::new();
        };
        let suggested = self.suggested_elements();
        category
            .elements()
            .iter()
            .filter(|e| self.show_all_elements || suggested.contains(&e.id))
            .collect()
    }

    fn parts<'a>(&'a self, property: Option<&'a str>, state: Option<&'a str>) -> TokenParts<'a> {
        TokenParts {
            category: self.category,
            property,
            context: self.context.as_deref(),
            element: self.element.as_deref(),
            variant: self.variant.as_deref(),
            state,
        }
    }

    fn token(&self, property: Option<&str>, state: Option<&str>) -> GeneratedToken {
        let name = build_token_name(&self.parts(property, state), self.convention);
        GeneratedToken {
            formatted: format_token_name(&name, self.format),
            name,
            kind: if state.is_some() { TokenKind::State } else { TokenKind::Base },
        }
    }

    /// Base token without any state
    pub fn base_token_name(&self) -> String {
        build_token_name(&self.parts(self.property.as_deref(), None), self.convention)
    }

    /// Base token plus one token per selected state
    ///
    /// Empty until both a category and a property are chosen.
    pub fn generated_tokens(&self) -> Vec<GeneratedToken> {
        if self.category.is_none() || self.property.is_none() {
            return Vec::new();
        }
        let property = self.property.as_deref();
        let mut tokens = Vec::with_capacity(self.states.len() + 1);
        if !self.base_token_name().is_empty() {
            tokens.push(self.token(property, None));
        }
        tokens.extend(self.states.iter().map(|s| self.token(property, Some(s.as_str()))));
        tokens
    }

    /// The same selection applied to every other property of the category
    pub fn related_tokens(&self) -> Vec<RelatedTokens> {
        let (Some(category), Some(current), Some(_)) = (self.category, self.property.as_deref(), self.context.as_deref())
        else {
            return Vec::new();
        };
        category
            .properties()
            .iter()
            .filter(|p| p.id != current)
            .map(|p| {
                let mut tokens = vec![self.token(Some(p.id), None)];
                tokens.extend(self.states.iter().map(|s| self.token(Some(p.id), Some(s.as_str()))));
                RelatedTokens {
                    property: p.label,
                    tokens,
                }
            })
            .collect()
    }

    /// Every property and state of the category for the selected element
    pub fn component_token_set(&self) -> Option<Vec<String>> {
        let category = self.category?;
        self.element.as_ref()?;
        let mut set = Vec::new();
        for property in category.properties() {
            set.push(self.token(Some(property.id), None).formatted);
            for state in &self.states {
                set.push(self.token(Some(property.id), Some(state.as_str())).formatted);
            }
        }
        Some(set)
    }

    /// Export code for the generated and related tokens
    pub fn export_code(&self, options: ExportOptions) -> String {
        let mut all: Vec<String> = self.generated_tokens().into_iter().map(|t| t.formatted).collect();
        for related in self.related_tokens() {
            all.extend(related.tokens.into_iter().map(|t| t.formatted));
        }
        let options = ExportOptions {
            format: self.format,
            category: self.category,
            ..options
        };
        generate_export_code(&all, &options)
    }
}

/// A component in builder mode together with its selection flag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuilderComponent {
    pub def: ComponentDef,
    pub selected: bool,
}

/// Turn a free-form component name into an id
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for c in name.trim().chars() {
        if c.is_alphanumeric() {
            slug.extend(c.to_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

/// A batch of components exploded into token names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuilderState {
    pub components: IndexMap<String, BuilderComponent>,
    pub variants: Vec<String>,
    pub states: Vec<String>,
    pub convention: NamingConvention,
    pub format: OutputFormat,
}

impl Default for BuilderState {
    fn default() -> Self {
        Self {
            components: default_components()
                .into_iter()
                .map(|def| (def.id.clone(), BuilderComponent { def, selected: false }))
                .collect(),
            variants: vec![DEFAULT_VARIANT.to_string()],
            states: Vec::new(),
            convention: NamingConvention::default(),
            format: OutputFormat::default(),
        }
    }
}

impl BuilderState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an explicit component list instead of the defaults
    pub fn with_components(components: impl IntoIterator<Item = ComponentDef>) -> Self {
        Self {
            components: components
                .into_iter()
                .map(|def| (def.id.clone(), BuilderComponent { def, selected: false }))
                .collect(),
            ..Self::default()
        }
    }

    /// Add a user-defined component, selected, and return its id
    ///
    /// A name that is empty after trimming is ignored. Ids that collide with
    /// an existing component get a numeric suffix.
    pub fn add_custom(&mut self, name: &str, categories: &[Category], has_states: bool) -> Option<String> {
        let label = name.trim();
        let base = slugify(label);
        if base.is_empty() {
            return None;
        }
        let mut id = base.clone();
        let mut n = 2;
        while self.components.contains_key(&id) {
            id = format!("{base}-{n}");
            n += 1;
        }
        let def = ComponentDef::new(id.clone(), label, categories, has_states);
        tracing::debug!(id = %id, "added custom component");
        self.components.insert(id.clone(), BuilderComponent { def, selected: true });
        Some(id)
    }

    pub fn remove(&mut self, id: &str) -> Option<ComponentDef> {
        self.components.shift_remove(id).map(|c| c.def)
    }

    /// Flip a component's selection; false when the id is unknown
    pub fn toggle(&mut self, id: &str) -> bool {
        match self.components.get_mut(id) {
            Some(component) => {
                component.selected = !component.selected;
                true
            }
            None => false,
        }
    }

    pub fn select(&mut self, id: &str, selected: bool) -> bool {
        match self.components.get_mut(id) {
            Some(component) => {
                component.selected = selected;
                true
            }
            None => false,
        }
    }

    pub fn toggle_variant(&mut self, variant: &str) {
        toggle_in(&mut self.variants, variant);
    }

    pub fn toggle_state(&mut self, state: &str) {
        toggle_in(&mut self.states, state);
    }

    pub fn selected(&self) -> impl Iterator<Item = &ComponentDef> {
        self.components.values().filter(|c| c.selected).map(|c| &c.def)
    }

    /// Raw dash-joined names for every selected component
    ///
    /// Order: component, category, default property, variant; each base
    /// token is followed by its state tokens when the component has states.
    pub fn token_names(&self) -> Vec<String> {
        let mut names = Vec::new();
        for component in self.selected() {
            for category in &component.categories {
                for property in category.default_properties() {
                    for variant in &self.variants {
                        let parts = TokenParts {
                            category: Some(*category),
                            property: Some(*property),
                            context: None,
                            element: Some(component.id.as_str()),
                            variant: Some(variant.as_str()),
                            state: None,
                        };
                        names.push(build_token_name(&parts, self.convention));
                        if component.has_states {
                            for state in &self.states {
                                let parts = TokenParts {
                                    state: Some(state.as_str()),
                                    ..parts
                                };
                                names.push(build_token_name(&parts, self.convention));
                            }
                        }
                    }
                }
            }
        }
        tracing::debug!(count = names.len(), "exploded builder components");
        names
    }

    pub fn generate(&self) -> Vec<String> {
        self.token_names()
            .iter()
            .map(|name| format_token_name(name, self.format))
            .collect()
    }

    /// Export code for the whole batch
    ///
    /// The batch can span categories, so typed formats fall back to the
    /// colour typing used when no category is known.
    pub fn export_code(&self, options: ExportOptions) -> String {
        let options = ExportOptions {
            format: self.format,
            category: single_category(self.selected()),
            ..options
        };
        generate_export_code(&self.generate(), &options)
    }
}

fn single_category<'a>(components: impl Iterator<Item = &'a ComponentDef>) -> Option<Category> {
    let mut categories = components.flat_map(|c| c.categories.iter().copied());
    let first = categories.next()?;
    categories.all(|c| c == first).then_some(first)
}

fn toggle_in(list: &mut Vec<String>, value: &str) {
    if let Some(pos) = list.iter().position(|v| v == value) {
        list.remove(pos);
    } else {
        list.push(value.to_string());
    }
}

/// The whole tool: current mode plus both modes' state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenBuilder {
    mode: BuilderMode,
    pub educational: EducationalState,
    pub builder: BuilderState,
}

impl TokenBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> BuilderMode {
        self.mode
    }

    /// Switch modes; the state of both modes is kept as is
    pub fn set_mode(&mut self, mode: BuilderMode) {
        if self.mode != mode {
            tracing::debug!(?mode, "switched token builder mode");
        }
        self.mode = mode;
    }

    /// Formatted names for whichever mode is active
    pub fn tokens(&self) -> Vec<String> {
        match self.mode {
            BuilderMode::Educational => self
                .educational
                .generated_tokens()
                .into_iter()
                .map(|t| t.formatted)
                .collect(),
            BuilderMode::Builder => self.builder.generate(),
        }
    }

    pub fn export_code(&self, options: ExportOptions) -> String {
        match self.mode {
            BuilderMode::Educational => self.educational.export_code(options),
            BuilderMode::Builder => self.builder.export_code(options),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn card_selection() -> EducationalState {
        let mut state = EducationalState::new();
        state.select_category(Category::Color);
        state.select_property("background");
        state.select_context("surface");
        state.toggle_element("card");
        state
    }

    fn names(tokens: &[GeneratedToken]) -> Vec<&str> {
        tokens.iter().map(|t| t.formatted.as_str()).collect()
    }

    #[test]
    fn test_generated_tokens_explicit() {
        let state = card_selection();
        assert_eq!(names(&state.generated_tokens()), vec!["--color-background-surface-card"]);
    }

    #[test]
    fn test_generated_tokens_compact_with_state() {
        let mut state = card_selection();
        state.convention = NamingConvention::Compact;
        state.toggle_state("hover");
        let tokens = state.generated_tokens();
        assert_eq!(names(&tokens), vec!["--bg-surface-card", "--bg-surface-card-hover"]);
        assert_eq!(tokens[0].kind, TokenKind::Base);
        assert_eq!(tokens[1].kind, TokenKind::State);
    }

    #[test]
    fn test_nothing_generated_without_property() {
        let mut state = EducationalState::new();
        state.select_category(Category::Spacing);
        assert!(state.generated_tokens().is_empty());
        assert!(state.related_tokens().is_empty());
    }

    #[test]
    fn test_category_change_clears_downstream() {
        let mut state = card_selection();
        state.select_category(Category::Typography);
        assert_eq!(state.property, None);
        assert_eq!(state.context, None);
        assert_eq!(state.element, None);
    }

    #[test]
    fn test_toggle_element_deselects() {
        let mut state = card_selection();
        state.toggle_element("card");
        assert_eq!(state.element, None);
    }

    #[test]
    fn test_related_tokens_skip_current_property() {
        let mut state = card_selection();
        state.convention = NamingConvention::Compact;
        state.toggle_state("hover");
        let related = state.related_tokens();
        let labels: Vec<_> = related.iter().map(|r| r.property).collect();
        assert_eq!(labels, vec!["Foreground", "Border", "Icon"]);
        assert_eq!(names(&related[0].tokens), vec!["--fg-surface-card", "--fg-surface-card-hover"]);
    }

    #[test]
    fn test_component_token_set() {
        let mut state = card_selection();
        state.convention = NamingConvention::ComponentFirst;
        state.format = OutputFormat::CamelCase;
        state.toggle_state("focus");
        let set = state.component_token_set().unwrap();
        assert_eq!(set.len(), 8);
        assert_eq!(&set[..2], &["cardBg".to_string(), "cardBgFocus".to_string()]);
        state.toggle_element("card");
        assert_eq!(state.component_token_set(), None);
    }

    #[test]
    fn test_suggested_and_visible_elements() {
        let mut state = EducationalState::new();
        state.select_category(Category::Color);
        state.select_context("interactive");
        let visible: Vec<_> = state.visible_elements().iter().map(|e| e.id).collect();
        assert_eq!(visible, vec!["button", "link", "input"]);
        state.show_all_elements = true;
        assert_eq!(state.visible_elements().len(), Category::Color.elements().len());
    }

    #[test]
    fn test_reset_and_interactive_states() {
        let mut state = card_selection();
        state.convention = NamingConvention::Compact;
        state.select_variant("subtle");
        state.add_all_interactive_states();
        assert_eq!(state.states, vec!["hover", "active", "focus", "disabled"]);
        state.toggle_state("active");
        assert_eq!(state.states, vec!["hover", "focus", "disabled"]);
        state.reset();
        assert_eq!(state.category, None);
        assert_eq!(state.variant.as_deref(), Some("default"));
        assert!(state.states.is_empty());
        assert_eq!(state.convention, NamingConvention::Compact);
    }

    #[test]
    fn test_builder_explosion() {
        let mut builder = BuilderState::with_components([ComponentDef::new(
            "button",
            "Button",
            &[Category::Color],
            true,
        )]);
        builder.select("button", true);
        builder.toggle_state("hover");
        assert_eq!(
            builder.generate(),
            vec![
                "--color-background-button",
                "--color-background-button-hover",
                "--color-foreground-button",
                "--color-foreground-button-hover",
                "--color-border-button",
                "--color-border-button-hover",
            ]
        );
    }

    #[test]
    fn test_builder_stateless_components_skip_states() {
        let mut builder = BuilderState::new();
        builder.select("card", true);
        builder.toggle_state("hover");
        builder.toggle_variant("subtle");
        builder.convention = NamingConvention::Compact;
        let tokens = builder.generate();
        // color 3 + spacing 2 + effects 2 properties, two variants each
        assert_eq!(tokens.len(), 14);
        assert!(tokens.iter().all(|t| !t.contains("hover")));
        assert!(tokens.contains(&"--rounded-card-subtle".to_string()));
    }

    #[test]
    fn test_add_custom_component() {
        let mut builder = BuilderState::new();
        assert_eq!(builder.add_custom("   ", &[Category::Color], true), None);
        let id = builder.add_custom("  Date Picker ", &[Category::Color], true).unwrap();
        assert_eq!(id, "date-picker");
        assert_eq!(builder.components[&id].def.label, "Date Picker");
        assert!(builder.components[&id].selected);
        assert_eq!(builder.add_custom("date picker", &[Category::Spacing], false).as_deref(), Some("date-picker-2"));
        assert!(builder.remove("date-picker").is_some());
        assert!(!builder.toggle("date-picker"));
        assert!(builder.toggle("date-picker-2"));
        assert!(!builder.components["date-picker-2"].selected);
    }

    #[test]
    fn test_mode_switch_preserves_state() {
        let mut tool = TokenBuilder::new();
        tool.educational = card_selection();
        tool.builder.select("link", true);
        tool.set_mode(BuilderMode::Builder);
        let builder_tokens = tool.tokens();
        assert!(!builder_tokens.is_empty());
        tool.set_mode(BuilderMode::Educational);
        assert_eq!(tool.tokens(), vec!["--color-background-surface-card"]);
        tool.set_mode(BuilderMode::Builder);
        assert_eq!(tool.tokens(), builder_tokens);
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Date Picker"), "date-picker");
        assert_eq!(slugify("  Nav / Item!! "), "nav-item");
        assert_eq!(slugify("***"), "");
    }
}
