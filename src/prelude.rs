//! Convenient imports for common functionality.

pub use crate::error::MssqlAdapterError;
pub use crate::isolation::{IsolationLevel, level_for_symbol, symbol_for_level};
pub use crate::metadata::{
    ROW_NUM_COLUMN, TableMetadataRow, TablesQuery, extract_columns, list_tables,
};
pub use crate::params::{bind_time, bind_timestamp};
pub use crate::profile::{DriverProfile, is_exec};
pub use crate::savepoints::SavepointRegistry;
pub use crate::temporal::{decode_time, decode_timestamp, encode_time, encode_timestamp};
pub use crate::type_format::{
    format_column_type, format_with_limit, format_with_max, format_with_precision,
    format_with_precision_and_scale, simple_type_name,
};
pub use crate::types::{ColumnDescriptor, JdbcType, ResultColumn, TableEntry};
