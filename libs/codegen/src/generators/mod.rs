//! Shared base for concrete code generators
//!
//! A concrete generator (C#, SQL, JavaScript, ...) embeds a [`GeneratorBase`]
//! and implements the [`Generator`] trait. The base carries the generator's
//! configuration and tab type and exposes the formatting and schema helpers
//! the templates splice into their output.

use crate::config::{TabSettings, TabType};
use crate::error::{Error, Result};
use crate::imports::{self, ImportStyle};
use crate::indent::{self, IndentStyle};
use crate::{heuristics, notice};
use autogen_metadata::SqlTable;

/// Trait that all language generators must implement
pub trait Generator {
    /// The output type of this generator
    type Output;

    /// Shared helper state
    fn base(&self) -> &GeneratorBase;

    /// Generate code for the given tables
    fn generate(&self, tables: &[SqlTable]) -> anyhow::Result<Self::Output>;

    fn tab_type(&self) -> TabType {
        self.base().tab_type()
    }
}

/// Configuration options for code generation
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    /// Tab widths per generator kind
    pub tab_settings: TabSettings,
    /// Spaces or literal tabs
    pub indent_style: IndentStyle,
    /// Import statement syntax for namespace blocks
    pub import_style: ImportStyle,
    /// Whether generated files start with an authorship banner
    pub generate_notice: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            tab_settings: TabSettings::default(),
            indent_style: IndentStyle::Spaces,
            import_style: ImportStyle::CSharp,
            generate_notice: true,
        }
    }
}

impl GeneratorConfig {
    pub fn with_tab_settings(mut self, tab_settings: TabSettings) -> Self {
        self.tab_settings = tab_settings;
        self
    }

    pub fn with_indent_style(mut self, indent_style: IndentStyle) -> Self {
        self.indent_style = indent_style;
        self
    }

    pub fn with_import_style(mut self, import_style: ImportStyle) -> Self {
        self.import_style = import_style;
        self
    }

    pub fn with_generate_notice(mut self, generate_notice: bool) -> Self {
        self.generate_notice = generate_notice;
        self
    }
}

/// Formatting and heuristics helper embedded by concrete generators
#[derive(Debug, Clone)]
pub struct GeneratorBase {
    tab_type: TabType,
    config: GeneratorConfig,
}

impl GeneratorBase {
    pub fn new(tab_type: TabType, config: GeneratorConfig) -> Self {
        Self { tab_type, config }
    }

    pub fn tab_type(&self) -> TabType {
        self.tab_type
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Configured tab width for this generator's tab type
    pub fn tab_size(&self) -> Result<i32> {
        self.config.tab_settings.tab_size(self.tab_type)
    }

    /// Check that indentation can be rendered with the current configuration
    pub fn validate(&self) -> Result<()> {
        let tab_size = self.tab_size()?;
        if tab_size < 1 {
            return Err(Error::InvalidTabSize(tab_size));
        }
        Ok(())
    }

    /// `count` levels of indentation at the configured width and style
    pub fn add_tabs(&self, count: i32) -> Result<String> {
        self.add_tabs_with(count, self.config.indent_style)
    }

    /// `count` levels of indentation at the configured width, overriding the style
    pub fn add_tabs_with(&self, count: i32, style: IndentStyle) -> Result<String> {
        indent::render_indent(count, self.tab_size()?, style)
    }

    pub fn find_id_field<'t>(&self, table: &'t SqlTable) -> Option<&'t str> {
        heuristics::find_id_field(table)
    }

    pub fn find_name_field<'t>(&self, table: &'t SqlTable) -> Option<&'t str> {
        heuristics::find_name_field(table)
    }

    /// Import block in the configured import style
    pub fn namespace_includes<S: AsRef<str>>(&self, namespaces: &[S]) -> Option<String> {
        imports::render_namespace_imports(namespaces, self.config.import_style)
    }

    /// Authorship banner, or `None` when banners are disabled
    pub fn author_notice(&self) -> Option<String> {
        self.config
            .generate_notice
            .then(notice::author_notice)
    }
}
