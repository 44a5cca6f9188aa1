//! Table metadata

use crate::column::SqlColumn;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

fn default_schema() -> String {
    "dbo".to_string()
}

/// A database table: its columns in declaration order and its primary key.
///
/// Column names are unique within a table, so the column list doubles as a
/// keyed mapping (see [`SqlTable::column`]). The primary key is stored as the
/// ordered list of its column names, which need not follow column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SqlTable {
    #[serde(default = "default_schema")]
    pub schema: String,

    pub name: String,

    #[serde(default)]
    pub columns: Vec<SqlColumn>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub primary_key: Vec<String>,
}

impl SqlTable {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            schema: default_schema(),
            name: name.into(),
            columns: Vec::new(),
            primary_key: Vec::new(),
        }
    }

    /// Parse a table from JSON and validate it
    pub fn from_json_str(json: &str) -> Result<Self> {
        let table: SqlTable = serde_json::from_str(json)?;
        table.validate()?;
        Ok(table)
    }

    pub fn with_schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = schema.into();
        self
    }

    /// Append a column
    pub fn with_column(mut self, column: SqlColumn) -> Self {
        self.columns.push(column);
        self
    }

    /// Declare the primary key, in key order
    pub fn with_primary_key<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.primary_key = columns.into_iter().map(Into::into).collect();
        self
    }

    /// Add a column, rejecting a name the table already has
    pub fn add_column(&mut self, column: SqlColumn) -> Result<()> {
        if self.column(&column.name).is_some() {
            return Err(Error::DuplicateColumn {
                table: self.qualified_name(),
                column: column.name,
            });
        }
        self.columns.push(column);
        Ok(())
    }

    /// Look up a column by name (exact match)
    pub fn column(&self, name: &str) -> Option<&SqlColumn> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Iterate over columns in declaration order
    pub fn columns(&self) -> impl Iterator<Item = &SqlColumn> {
        self.columns.iter()
    }

    pub fn has_primary_key(&self) -> bool {
        !self.primary_key.is_empty()
    }

    /// Primary-key columns in key order. Key names without a matching column
    /// are skipped; [`SqlTable::validate`] reports them.
    pub fn primary_key_columns(&self) -> impl Iterator<Item = &SqlColumn> {
        self.primary_key.iter().filter_map(|name| self.column(name))
    }

    /// `[schema].[name]`
    pub fn qualified_name(&self) -> String {
        format!("[{}].[{}]", self.schema, self.name)
    }

    /// Check structural invariants: a non-empty name, unique column names and
    /// a primary key that only references existing columns.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::EmptyTableName);
        }

        let mut seen = HashSet::new();
        for column in &self.columns {
            if !seen.insert(column.name.as_str()) {
                return Err(Error::DuplicateColumn {
                    table: self.qualified_name(),
                    column: column.name.clone(),
                });
            }
        }

        if let Some(missing) = self.primary_key.iter().find(|pk| !seen.contains(pk.as_str())) {
            return Err(Error::UnknownPrimaryKeyColumn {
                table: self.qualified_name(),
                column: missing.clone(),
            });
        }

        Ok(())
    }
}
