//! Column metadata and base type classification

use serde::{Deserialize, Serialize};

/// Coarse category a column's native SQL type maps to.
///
/// Generators only need to know roughly what kind of value a column holds
/// (a number, some text, a timestamp), not the exact storage type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum SqlBaseType {
    /// bigint, int, smallint, tinyint
    Integer,
    /// float, real, decimal, numeric
    Float,
    /// money, smallmoney
    Money,
    /// bit
    Bool,
    /// uniqueidentifier
    Guid,
    /// char, varchar, nchar, nvarchar, text, ntext, sysname
    String,
    /// date, time and the datetime family
    Time,
    /// binary, varbinary, image, rowversion
    Binary,
    /// xml
    Xml,
    /// Anything not classified above (sql_variant, geography, ...)
    #[default]
    Unknown,
}

impl SqlBaseType {
    /// Classify a native SQL Server type name.
    ///
    /// Matching is case-insensitive and ignores a trailing size or precision
    /// suffix, so `NVARCHAR(50)` and `decimal(18, 2)` are recognised.
    pub fn from_sql_type(sql_type: &str) -> Self {
        let name = sql_type
            .split('(')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        match name.as_str() {
            "bigint" | "int" | "smallint" | "tinyint" => Self::Integer,
            "float" | "real" | "decimal" | "numeric" => Self::Float,
            "money" | "smallmoney" => Self::Money,
            "bit" => Self::Bool,
            "uniqueidentifier" => Self::Guid,
            "char" | "varchar" | "nchar" | "nvarchar" | "text" | "ntext" | "sysname" => {
                Self::String
            }
            "date" | "time" | "datetime" | "datetime2" | "datetimeoffset" | "smalldatetime" => {
                Self::Time
            }
            // timestamp is SQL Server's legacy name for rowversion, not a date
            "binary" | "varbinary" | "image" | "rowversion" | "timestamp" => Self::Binary,
            "xml" => Self::Xml,
            _ => Self::Unknown,
        }
    }
}

/// A single column of a table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "ColumnDef")]
pub struct SqlColumn {
    /// Column name as declared in the database
    pub name: String,
    /// Native type name (e.g. "nvarchar", "int")
    pub sql_type: String,
    /// Classification used by generator heuristics
    pub base_type: SqlBaseType,
    /// Declared length for sized types
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<u32>,
    pub is_nullable: bool,
    pub is_identity: bool,
}

impl SqlColumn {
    /// Create a non-nullable column, classifying `sql_type` automatically.
    pub fn new(name: impl Into<String>, sql_type: impl Into<String>) -> Self {
        let sql_type = sql_type.into();
        Self {
            name: name.into(),
            base_type: SqlBaseType::from_sql_type(&sql_type),
            sql_type,
            length: None,
            is_nullable: false,
            is_identity: false,
        }
    }

    /// Override the inferred base type
    pub fn with_base_type(mut self, base_type: SqlBaseType) -> Self {
        self.base_type = base_type;
        self
    }

    pub fn with_length(mut self, length: u32) -> Self {
        self.length = Some(length);
        self
    }

    pub fn nullable(mut self) -> Self {
        self.is_nullable = true;
        self
    }

    pub fn identity(mut self) -> Self {
        self.is_identity = true;
        self
    }
}

/// Wire shape of a column. `baseType` may be omitted, in which case it is
/// derived from `sqlType`.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ColumnDef {
    name: String,
    #[serde(default)]
    sql_type: String,
    #[serde(default)]
    base_type: Option<SqlBaseType>,
    #[serde(default)]
    length: Option<u32>,
    #[serde(default)]
    is_nullable: bool,
    #[serde(default)]
    is_identity: bool,
}

impl From<ColumnDef> for SqlColumn {
    fn from(def: ColumnDef) -> Self {
        let base_type = def
            .base_type
            .unwrap_or_else(|| SqlBaseType::from_sql_type(&def.sql_type));
        Self {
            name: def.name,
            sql_type: def.sql_type,
            base_type,
            length: def.length,
            is_nullable: def.is_nullable,
            is_identity: def.is_identity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classifies_sized_types() {
        assert_eq!(SqlBaseType::from_sql_type("NVARCHAR(50)"), SqlBaseType::String);
        assert_eq!(SqlBaseType::from_sql_type("decimal(18, 2)"), SqlBaseType::Float);
        assert_eq!(SqlBaseType::from_sql_type(" int "), SqlBaseType::Integer);
    }

    #[test]
    fn test_timestamp_is_binary() {
        assert_eq!(SqlBaseType::from_sql_type("timestamp"), SqlBaseType::Binary);
        assert_eq!(SqlBaseType::from_sql_type("datetime2"), SqlBaseType::Time);
    }

    #[test]
    fn test_unrecognised_type_is_unknown() {
        assert_eq!(SqlBaseType::from_sql_type("geography"), SqlBaseType::Unknown);
        assert_eq!(SqlBaseType::from_sql_type(""), SqlBaseType::Unknown);
    }

    #[test]
    fn test_explicit_base_type_wins_over_sql_type() {
        let column: SqlColumn = serde_json::from_str(
            r#"{ "name": "Code", "sqlType": "int", "baseType": "string" }"#,
        )
        .unwrap();
        assert_eq!(column.base_type, SqlBaseType::String);
        assert!(!column.is_nullable);
    }
}
