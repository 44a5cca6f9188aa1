//! Error types for schema metadata

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Duplicate column '{column}' in table {table}")]
    DuplicateColumn { table: String, column: String },

    #[error("Primary key of table {table} references unknown column '{column}'")]
    UnknownPrimaryKeyColumn { table: String, column: String },

    #[error("Table name must not be empty")]
    EmptyTableName,

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
