//! Arrow schema and RecordBatch conversion for table rows

use crate::error::{Error, Result};
use crate::table::{ColumnType, CustomHostnameRow, TableDef, CUSTOM_HOSTNAME_TABLE};
use arrow::array::{ArrayRef, StringArray, TimestampMicrosecondArray};
use arrow::datatypes::{DataType, Field, Schema, TimeUnit};
use arrow::record_batch::RecordBatch;
use std::sync::Arc;

/// Arrow type used for a column type. JSON travels as UTF-8 text.
pub fn arrow_type(column_type: ColumnType) -> DataType {
    match column_type {
        ColumnType::String | ColumnType::Json => DataType::Utf8,
        ColumnType::Timestamp => DataType::Timestamp(TimeUnit::Microsecond, Some("UTC".into())),
    }
}

/// Arrow schema of a table, one field per column in declaration order
pub fn table_schema(table: &TableDef) -> Schema {
    let fields: Vec<Field> = table
        .columns
        .iter()
        .map(|c| {
            let nullable = c.column_type != ColumnType::String;
            Field::new(c.name, arrow_type(c.column_type), nullable)
        })
        .collect();
    Schema::new(fields)
}

/// Convert custom hostname rows to a RecordBatch
pub fn rows_to_batch(rows: &[CustomHostnameRow]) -> Result<RecordBatch> {
    let schema = Arc::new(table_schema(&CUSTOM_HOSTNAME_TABLE));

    let mut columns: Vec<ArrayRef> = Vec::with_capacity(schema.fields().len());
    for field in schema.fields() {
        columns.push(column_array(field.name(), rows)?);
    }

    RecordBatch::try_new(schema, columns)
        .map_err(|e| Error::output(format!("Failed to create RecordBatch: {e}")))
}

fn column_array(name: &str, rows: &[CustomHostnameRow]) -> Result<ArrayRef> {
    let strings = |f: fn(&CustomHostnameRow) -> &str| -> ArrayRef {
        Arc::new(rows.iter().map(|r| Some(f(r))).collect::<StringArray>())
    };

    let array: ArrayRef = match name {
        "id" => strings(|r| r.id.as_str()),
        "zone_id" => strings(|r| r.zone_id.as_str()),
        "name" => strings(|r| r.name.as_str()),
        "status" => strings(|r| r.status.as_str()),
        "created_on" => {
            let values: Vec<Option<i64>> = rows
                .iter()
                .map(|r| r.created_on.map(|t| t.timestamp_micros()))
                .collect();
            Arc::new(TimestampMicrosecondArray::from(values).with_timezone("UTC"))
        }
        "ssl" => {
            let values: StringArray = rows
                .iter()
                .map(|r| r.ssl.as_ref().map(ToString::to_string))
                .collect();
            Arc::new(values)
        }
        other => return Err(Error::output(format!("No mapping for column '{other}'"))),
    };
    Ok(array)
}
