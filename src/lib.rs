//! SQL Server dialect adapter between a JDBC-style driver and an ORM runtime.
//!
//! Translates raw driver metadata (type codes, precision/scale/length) into
//! canonical SQL Server type declarations, converts temporal values around
//! known driver quirks, maps transaction isolation levels to and from the
//! driver's numeric constants, and applies dialect filtering to table/column
//! metadata.
//!
//! The crate performs no I/O: connections, cursors, and statements are owned
//! by an external collaborator that hands rows and values in and takes
//! parameter bindings out. All functions here are stateless and safe to call
//! concurrently on values from independent connections.

pub mod error;
pub mod isolation;
pub mod metadata;
pub mod params;
pub mod prelude;
pub mod profile;
pub mod savepoints;
pub mod temporal;
pub mod type_format;
pub mod types;

pub use error::MssqlAdapterError;
pub use isolation::{IsolationLevel, level_for_symbol, symbol_for_level};
pub use metadata::{TableMetadataRow, TablesQuery, extract_columns, list_tables};
pub use profile::DriverProfile;
pub use temporal::{decode_time, decode_timestamp, encode_time, encode_timestamp};
pub use type_format::format_column_type;
pub use types::{ColumnDescriptor, JdbcType, ResultColumn, TableEntry};
