use thiserror::Error;

/// Errors surfaced by the SQL Server adapter layer.
///
/// Every variant carries the offending input so callers can log or re-raise it
/// meaningfully; nothing is logged from inside this crate.
#[derive(Debug, Error)]
pub enum MssqlAdapterError {
    /// The metadata cursor yielded a structurally invalid row (null table
    /// name). Known to happen when query-plan-only mode (`SET SHOWPLAN_TEXT
    /// ON`) is active on the connection, which corrupts the driver's table
    /// metadata result set.
    #[error(
        "got null table name while matching table(s) [{catalog:?}.{schema_pattern:?}.{table_pattern:?}]; \
         check whether this happened during EXPLAIN (SET SHOWPLAN_TEXT ON) and if so turn \
         query-plan-only mode off before introspecting the schema"
    )]
    InconsistentMetadata {
        catalog: Option<String>,
        schema_pattern: Option<String>,
        table_pattern: Option<String>,
    },

    /// An isolation level name or numeric constant outside the mapping table.
    #[error("unexpected transaction isolation level: {value}")]
    InvalidIsolationLevel { value: String },

    /// Raw driver text that could not be parsed as a date/time value.
    #[error("malformed temporal value {input:?}")]
    MalformedTemporalValue {
        input: String,
        #[source]
        source: chrono::format::ParseError,
    },

    /// A savepoint operation referenced a name that was never registered
    /// (or was already released).
    #[error("savepoint {name:?} was not set before {action}")]
    SavepointNotSet { name: String, action: &'static str },

    /// An operation the installed driver cannot perform.
    #[error("unsupported by the SQL Server driver: {0}")]
    Unsupported(String),
}
