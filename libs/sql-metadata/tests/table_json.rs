use autogen_metadata::{Error, SqlBaseType, SqlColumn, SqlTable};
use serde_json::json;

fn load(value: serde_json::Value) -> autogen_metadata::Result<SqlTable> {
    SqlTable::from_json_str(&value.to_string())
}

#[test]
fn parse_table_with_defaults() {
    let table = load(json!({
        "name": "Product",
        "columns": [
            { "name": "ProductId", "sqlType": "int", "isIdentity": true },
            { "name": "Title", "sqlType": "nvarchar", "length": 200, "isNullable": true },
            { "name": "Price", "sqlType": "money" }
        ],
        "primaryKey": ["ProductId"]
    }))
    .expect("table should parse");

    assert_eq!(table.schema, "dbo");
    assert_eq!(table.columns.len(), 3);

    let id = table.column("ProductId").expect("ProductId column");
    assert_eq!(id.base_type, SqlBaseType::Integer);
    assert!(id.is_identity);

    let title = table.column("Title").expect("Title column");
    assert_eq!(title.base_type, SqlBaseType::String);
    assert_eq!(title.length, Some(200));
    assert!(title.is_nullable);

    assert_eq!(table.column("Price").unwrap().base_type, SqlBaseType::Money);
}

#[test]
fn column_order_is_preserved() {
    let table = load(json!({
        "schema": "sales",
        "name": "Invoice",
        "columns": [
            { "name": "Zeta", "sqlType": "int" },
            { "name": "Alpha", "sqlType": "int" },
            { "name": "Mid", "sqlType": "int" }
        ]
    }))
    .unwrap();

    let names: Vec<_> = table.columns().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Zeta", "Alpha", "Mid"]);
    assert_eq!(table.qualified_name(), "[sales].[Invoice]");
    assert!(!table.has_primary_key());
}

#[test]
fn duplicate_columns_are_rejected() {
    let err = load(json!({
        "name": "Broken",
        "columns": [
            { "name": "Id", "sqlType": "int" },
            { "name": "Id", "sqlType": "int" }
        ]
    }))
    .unwrap_err();

    assert!(matches!(err, Error::DuplicateColumn { .. }));
}

#[test]
fn malformed_json_is_a_serialization_error() {
    let err = SqlTable::from_json_str("{ \"name\": ").unwrap_err();
    assert!(matches!(err, Error::SerializationError(_)));
}

#[test]
fn builder_sets_schema_and_column_flags() {
    let table = SqlTable::new("Event")
        .with_schema("audit")
        .with_column(SqlColumn::new("EventId", "bigint").identity())
        .with_column(SqlColumn::new("Kind", "int").with_base_type(SqlBaseType::String))
        .with_primary_key(["EventId"]);

    assert_eq!(table.qualified_name(), "[audit].[Event]");
    assert!(table.column("EventId").unwrap().is_identity);
    assert!(!table.column("Kind").unwrap().is_identity);
    assert_eq!(table.column("Kind").unwrap().base_type, SqlBaseType::String);
    assert_eq!(table.column("Kind").unwrap().sql_type, "int");
    table.validate().unwrap();
}

#[test]
fn serialization_round_trips_builder_output() {
    let table = SqlTable::new("Tag")
        .with_column(SqlColumn::new("TagId", "smallint"))
        .with_column(SqlColumn::new("Label", "varchar").with_length(32).nullable())
        .with_primary_key(["TagId"]);

    let json = serde_json::to_string(&table).unwrap();
    let parsed = SqlTable::from_json_str(&json).unwrap();
    assert_eq!(parsed, table);
}
