//! Dialect filtering over raw driver metadata cursors.
//!
//! The cursor itself is owned by the connection facade; this module only
//! consumes rows handed over from it and applies SQL Server-specific rules:
//! system-schema hiding, case normalization, and removal of the synthetic
//! pagination column injected by the emulated LIMIT/OFFSET implementation.

use tracing::debug;

use crate::error::MssqlAdapterError;
use crate::types::{ResultColumn, TableEntry};

/// Name of the synthetic pagination column that must never reach the ORM.
pub const ROW_NUM_COLUMN: &str = "_row_num";

/// One row from the driver's table-metadata cursor.
///
/// `schema` maps `TABLE_SCHEM`, `name` maps `TABLE_NAME`; either may be NULL
/// on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableMetadataRow {
    pub schema: Option<String>,
    pub name: Option<String>,
}

impl TableMetadataRow {
    #[must_use]
    pub fn new(schema: Option<&str>, name: Option<&str>) -> Self {
        Self {
            schema: schema.map(str::to_string),
            name: name.map(str::to_string),
        }
    }
}

/// The filter arguments the caller passed to the driver's table lookup.
///
/// Carried along for two reasons: an unset `schema_pattern` switches on the
/// implicit system-schema hiding, and all three fields provide diagnostic
/// context when the cursor turns out to be corrupted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TablesQuery {
    pub catalog: Option<String>,
    pub schema_pattern: Option<String>,
    pub table_pattern: Option<String>,
}

impl TablesQuery {
    /// Filter by schema pattern; also disables the system-schema hiding.
    #[must_use]
    pub fn with_schema_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.schema_pattern = Some(pattern.into());
        self
    }

    #[must_use]
    pub fn with_catalog(mut self, catalog: impl Into<String>) -> Self {
        self.catalog = Some(catalog.into());
        self
    }

    #[must_use]
    pub fn with_table_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.table_pattern = Some(pattern.into());
        self
    }
}

/// Collect table entries from a metadata cursor, applying dialect filtering.
///
/// Schemas are lower-cased. Unless the caller filtered by schema explicitly,
/// tables in `sys` and `information_schema` are hidden.
///
/// # Errors
///
/// A row with a NULL table name fails with
/// [`MssqlAdapterError::InconsistentMetadata`]: it indicates the cursor was
/// corrupted by unrelated session state (seen with `SET SHOWPLAN_TEXT ON`),
/// and skipping it would hide that configuration bug.
pub fn list_tables<I>(rows: I, query: &TablesQuery) -> Result<Vec<TableEntry>, MssqlAdapterError>
where
    I: IntoIterator<Item = TableMetadataRow>,
{
    let mut tables = Vec::new();
    let mut hidden = 0usize;

    for row in rows {
        let schema = row.schema.map(|s| s.to_lowercase());

        // Don't return system tables/views unless explicitly asked for.
        if query.schema_pattern.is_none()
            && matches!(schema.as_deref(), Some("sys") | Some("information_schema"))
        {
            hidden += 1;
            continue;
        }

        let Some(name) = row.name else {
            return Err(MssqlAdapterError::InconsistentMetadata {
                catalog: query.catalog.clone(),
                schema_pattern: query.schema_pattern.clone(),
                table_pattern: query.table_pattern.clone(),
            });
        };

        tables.push(TableEntry {
            schema: schema.unwrap_or_default(),
            name,
        });
    }

    if hidden > 0 {
        debug!(hidden, "hid system-schema tables from listing");
    }

    Ok(tables)
}

/// Finish column extraction for a result set.
///
/// The generic per-column extraction happens at the cursor owner; this step
/// removes the synthetic [`ROW_NUM_COLUMN`] if present. At most one such
/// column exists per result, and the relative order of all other columns is
/// preserved.
#[must_use]
pub fn extract_columns<I>(columns: I) -> Vec<ResultColumn>
where
    I: IntoIterator<Item = ResultColumn>,
{
    let mut columns: Vec<ResultColumn> = columns.into_iter().collect();
    if let Some(pos) = columns.iter().position(|c| c.name == ROW_NUM_COLUMN) {
        columns.remove(pos);
    }
    columns
}
