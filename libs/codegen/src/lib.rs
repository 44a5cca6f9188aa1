//! Code generator base
//!
//! Shared building blocks for generators that emit source code from
//! relational schema metadata.
//!
//! ## Architecture
//!
//! 1. **Metadata**: tables and columns from `autogen-metadata`, supplied by an
//!    external extraction layer
//! 2. **Helpers**: indentation, identifier/name column discovery, import
//!    blocks and the authorship banner
//! 3. **Generators**: language-specific templates that embed a
//!    [`GeneratorBase`] and implement [`Generator`]
//!
//! Helpers only return text fragments. Writing files is left to the caller.

pub mod config;
pub mod error;
pub mod generators;
pub mod heuristics;
pub mod imports;
pub mod indent;
pub mod notice;

pub use config::{TabSettings, TabType};
pub use error::{Error, Result};
pub use generators::{Generator, GeneratorBase, GeneratorConfig};
pub use heuristics::{find_id_field, find_name_field};
pub use imports::{render_namespace_imports, ImportStyle};
pub use indent::{render_indent, IndentStyle};
pub use notice::{author_notice, author_notice_at};

use anyhow::Context;
use autogen_metadata::SqlTable;

/// Main entry point for code generation
pub struct CodeGenerator {
    tables: Vec<SqlTable>,
}

impl CodeGenerator {
    /// Create a code generator over already-extracted tables
    pub fn from_tables(tables: Vec<SqlTable>) -> anyhow::Result<Self> {
        for table in &tables {
            table
                .validate()
                .with_context(|| format!("validating table {}", table.qualified_name()))?;
        }
        Ok(Self { tables })
    }

    /// Create a code generator from a JSON array of tables
    pub fn from_json_str(json: &str) -> anyhow::Result<Self> {
        let tables: Vec<SqlTable> =
            serde_json::from_str(json).context("parsing table metadata")?;
        Self::from_tables(tables)
    }

    /// Get the tables
    pub fn tables(&self) -> &[SqlTable] {
        &self.tables
    }

    /// Generate code with a specific generator.
    ///
    /// The generator's configuration is checked first so a missing tab width
    /// is reported before any template runs.
    pub fn generate<G: Generator>(&self, generator: G) -> anyhow::Result<G::Output> {
        generator
            .base()
            .validate()
            .with_context(|| format!("checking configuration for {}", generator.tab_type()))?;

        tracing::debug!(
            tab_type = %generator.tab_type(),
            tables = self.tables.len(),
            "running generator"
        );
        generator.generate(&self.tables)
    }
}
