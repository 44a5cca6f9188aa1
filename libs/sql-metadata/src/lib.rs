//! Relational schema metadata
//!
//! Read-only description of database tables as handed to code generators by a
//! metadata-extraction layer. Nothing in this crate talks to a database; tables
//! are built in code or deserialized from JSON.
//!
//! # Example
//!
//! ```rust
//! use autogen_metadata::{SqlBaseType, SqlTable};
//!
//! let table = SqlTable::from_json_str(
//!     r#"{
//!         "name": "Customer",
//!         "columns": [
//!             { "name": "CustomerId", "sqlType": "int" },
//!             { "name": "DisplayName", "sqlType": "nvarchar(100)" }
//!         ],
//!         "primaryKey": ["CustomerId"]
//!     }"#,
//! )
//! .unwrap();
//!
//! assert_eq!(table.qualified_name(), "[dbo].[Customer]");
//! assert_eq!(table.column("DisplayName").unwrap().base_type, SqlBaseType::String);
//! ```

pub mod column;
pub mod error;
pub mod table;

pub use column::{SqlBaseType, SqlColumn};
pub use error::{Error, Result};
pub use table::SqlTable;
