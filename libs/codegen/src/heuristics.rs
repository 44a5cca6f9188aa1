//! Best-effort column discovery
//!
//! Generators occasionally need an identifying column or a human-readable
//! name column for a table that does not declare one. These helpers take the
//! first plausible candidate in column order without ranking candidates. A
//! miss is `None`, not an error; the caller decides whether to skip the member
//! that needed the column.

use autogen_metadata::{SqlBaseType, SqlTable};

/// Name of the column that identifies a row.
///
/// The first declared primary-key column if the table has a primary key,
/// otherwise the first integer column. Key names that match no column are
/// passed over, so the result is always a column of `table`.
pub fn find_id_field(table: &SqlTable) -> Option<&str> {
    if let Some(pk) = table.primary_key_columns().next() {
        return Some(pk.name.as_str());
    }

    let found = first_of_type(table, SqlBaseType::Integer);
    if found.is_none() {
        tracing::debug!(
            table = %table.qualified_name(),
            "no primary key or integer column to use as id field"
        );
    }
    found
}

/// Name of the first text column, used as a row's display name
pub fn find_name_field(table: &SqlTable) -> Option<&str> {
    let found = first_of_type(table, SqlBaseType::String);
    if found.is_none() {
        tracing::debug!(
            table = %table.qualified_name(),
            "no string column to use as name field"
        );
    }
    found
}

fn first_of_type(table: &SqlTable, base_type: SqlBaseType) -> Option<&str> {
    table
        .columns()
        .find(|c| c.base_type == base_type)
        .map(|c| c.name.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use autogen_metadata::SqlColumn;

    #[test]
    fn test_declared_key_order_wins() {
        let table = SqlTable::new("Link")
            .with_column(SqlColumn::new("A", "int"))
            .with_column(SqlColumn::new("B", "int"))
            .with_primary_key(["B", "A"]);
        assert_eq!(find_id_field(&table), Some("B"));
    }

    #[test]
    fn test_non_integer_primary_key_still_wins() {
        let table = SqlTable::new("Country")
            .with_column(SqlColumn::new("Sequence", "int"))
            .with_column(SqlColumn::new("IsoCode", "char(2)"))
            .with_primary_key(["IsoCode"]);
        assert_eq!(find_id_field(&table), Some("IsoCode"));
    }

    #[test]
    fn test_unknown_key_names_are_passed_over() {
        let table = SqlTable::new("Shipment")
            .with_column(SqlColumn::new("Code", "varchar"))
            .with_column(SqlColumn::new("ShipmentId", "int"))
            .with_primary_key(["Missing", "Code"]);
        assert_eq!(find_id_field(&table), Some("Code"));

        let table = SqlTable::new("Shipment")
            .with_column(SqlColumn::new("ShipmentId", "int"))
            .with_primary_key(["Missing"]);
        assert_eq!(find_id_field(&table), Some("ShipmentId"));
    }

    #[test]
    fn test_falls_back_to_first_integer() {
        let table = SqlTable::new("Log")
            .with_column(SqlColumn::new("X", "nvarchar"))
            .with_column(SqlColumn::new("Y", "int"))
            .with_column(SqlColumn::new("Z", "bigint"));
        assert_eq!(find_id_field(&table), Some("Y"));
    }

    #[test]
    fn test_id_miss_is_none() {
        let table = SqlTable::new("Notes")
            .with_column(SqlColumn::new("Body", "ntext"))
            .with_column(SqlColumn::new("CreatedAt", "datetime"));
        assert_eq!(find_id_field(&table), None);
        assert_eq!(find_id_field(&SqlTable::new("Empty")), None);
    }

    #[test]
    fn test_first_string_is_name() {
        let table = SqlTable::new("Person")
            .with_column(SqlColumn::new("Id", "int"))
            .with_column(SqlColumn::new("Name", "nvarchar"))
            .with_column(SqlColumn::new("Notes", "nvarchar"));
        assert_eq!(find_name_field(&table), Some("Name"));
    }

    #[test]
    fn test_name_miss_is_none() {
        let table = SqlTable::new("Counter").with_column(SqlColumn::new("Value", "int"));
        assert_eq!(find_name_field(&table), None);
    }
}
