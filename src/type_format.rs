//! Canonical SQL Server type-declaration strings.
//!
//! Maps driver-reported column metadata to the declaration the ORM shows for
//! the column, e.g. `varchar(255)`, `decimal(10,2)`, `nvarchar(max)`.

use crate::types::{ColumnDescriptor, JdbcType};

/// `COLUMN_SIZE` the driver reports for unbounded `(max)` columns.
pub const UNBOUNDED_PRECISION: i32 = 2_147_483_647;

/// Format a column's canonical type declaration.
///
/// Total over all type codes: everything without a dedicated branch falls back
/// to [`format_with_precision_and_scale`].
#[must_use]
pub fn format_column_type(column: &ColumnDescriptor) -> String {
    let type_name = column.type_name.as_str();

    match column.data_type {
        // For integers the ORM limit comes from BUFFER_LENGTH (1/2/4/8), not
        // from a display size, so the declaration is the bare name.
        JdbcType::TinyInt
        | JdbcType::SmallInt
        | JdbcType::Integer
        | JdbcType::BigInt
        | JdbcType::Bit
        | JdbcType::Real
        | JdbcType::Double => type_name.to_string(),

        JdbcType::Date | JdbcType::Timestamp => {
            // For datetime2 the ORM precision arrives in DECIMAL_DIGITS, i.e.
            // the scale field, not COLUMN_SIZE.
            if type_name == "datetime2" {
                format_with_precision(type_name, column.scale)
            } else {
                type_name.to_string()
            }
        }

        // Same inversion as datetime2: time precision rides in the scale.
        JdbcType::Time => format_with_precision(type_name, column.scale),

        JdbcType::Numeric | JdbcType::Decimal => {
            // money(19,4) and smallmoney(10,4) are fixed-precision vendor
            // types; declaring the suffix would be redundant and invalid DDL.
            if type_name == "money" || type_name == "smallmoney" {
                type_name.to_string()
            } else {
                format_with_precision_and_scale(type_name, column.precision, column.scale)
            }
        }

        JdbcType::Char => {
            // uniqueidentifier is reported as CHAR but takes no length.
            if type_name == "uniqueidentifier" {
                type_name.to_string()
            } else {
                format_with_precision(type_name, column.precision)
            }
        }

        JdbcType::NChar => format_with_precision(type_name, column.precision),

        JdbcType::Varchar | JdbcType::NVarchar | JdbcType::Binary | JdbcType::Varbinary => {
            if column.precision == UNBOUNDED_PRECISION {
                format_with_max(type_name)
            } else {
                format_with_precision(type_name, column.precision)
            }
        }

        // image, text, and xml/ntext respectively; none take a size suffix.
        JdbcType::LongVarbinary | JdbcType::LongVarchar | JdbcType::LongNVarchar => {
            type_name.to_string()
        }

        _ => format_with_precision_and_scale(type_name, column.precision, column.scale),
    }
}

/// `type(precision)`, or the bare type when `precision < 0`.
#[must_use]
pub fn format_with_precision(type_name: &str, precision: i32) -> String {
    if precision < 0 {
        return type_name.to_string();
    }
    format!("{type_name}({precision})")
}

/// `type(precision,scale)` with asymmetric thresholds: the bare type when
/// `precision <= 0`, and `type(precision)` when `scale < 0`.
#[must_use]
pub fn format_with_precision_and_scale(type_name: &str, precision: i32, scale: i32) -> String {
    if precision <= 0 {
        return type_name.to_string();
    }
    if scale < 0 {
        return format!("{type_name}({precision})");
    }
    format!("{type_name}({precision},{scale})")
}

/// `type(limit)`, or the bare type when `limit <= 0`.
///
/// Legacy helper for integer/string limits expressed directly by the ORM.
#[must_use]
pub fn format_with_limit(type_name: &str, limit: i32) -> String {
    if limit <= 0 {
        return type_name.to_string();
    }
    format!("{type_name}({limit})")
}

/// `type(max)` — the symbolic, non-numeric suffix for unbounded columns.
#[must_use]
pub fn format_with_max(type_name: &str) -> String {
    format!("{type_name}(max)")
}

/// Map the ORM's abstract type names to SQL Server declarations.
///
/// `datetime_basic` and `smalldatetime` both declare as `datetime`; everything
/// else passes through.
#[must_use]
pub fn simple_type_name(abstract_name: &str) -> &str {
    match abstract_name {
        "datetime_basic" | "smalldatetime" => "datetime",
        other => other,
    }
}
