use std::fmt;

/// JDBC type codes the SQL Server dialect dispatches on.
///
/// The driver reports `DATA_TYPE` as an open integer set; we close it into an
/// enum with an explicit [`JdbcType::Other`] arm so every match has a default
/// branch checked at compile time. [`JdbcType::from_code`] / [`JdbcType::code`]
/// keep the numeric JDBC encoding for wire compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JdbcType {
    Bit,
    TinyInt,
    SmallInt,
    Integer,
    BigInt,
    Real,
    /// SQL Server `float` is reported as DOUBLE through JDBC.
    Double,
    Numeric,
    Decimal,
    Char,
    NChar,
    Varchar,
    NVarchar,
    Binary,
    Varbinary,
    LongVarchar,
    LongNVarchar,
    LongVarbinary,
    Date,
    Time,
    Timestamp,
    Clob,
    NClob,
    /// Any code without a dedicated branch above.
    Other(i32),
}

impl JdbcType {
    /// Map a raw `DATA_TYPE` code to its closed-enum form.
    #[must_use]
    pub fn from_code(code: i32) -> Self {
        match code {
            -7 => Self::Bit,
            -6 => Self::TinyInt,
            5 => Self::SmallInt,
            4 => Self::Integer,
            -5 => Self::BigInt,
            7 => Self::Real,
            8 => Self::Double,
            2 => Self::Numeric,
            3 => Self::Decimal,
            1 => Self::Char,
            -15 => Self::NChar,
            12 => Self::Varchar,
            -9 => Self::NVarchar,
            -2 => Self::Binary,
            -3 => Self::Varbinary,
            -1 => Self::LongVarchar,
            -16 => Self::LongNVarchar,
            -4 => Self::LongVarbinary,
            91 => Self::Date,
            92 => Self::Time,
            93 => Self::Timestamp,
            2005 => Self::Clob,
            2011 => Self::NClob,
            other => Self::Other(other),
        }
    }

    /// The numeric JDBC constant for this type.
    #[must_use]
    pub fn code(self) -> i32 {
        match self {
            Self::Bit => -7,
            Self::TinyInt => -6,
            Self::SmallInt => 5,
            Self::Integer => 4,
            Self::BigInt => -5,
            Self::Real => 7,
            Self::Double => 8,
            Self::Numeric => 2,
            Self::Decimal => 3,
            Self::Char => 1,
            Self::NChar => -15,
            Self::Varchar => 12,
            Self::NVarchar => -9,
            Self::Binary => -2,
            Self::Varbinary => -3,
            Self::LongVarchar => -1,
            Self::LongNVarchar => -16,
            Self::LongVarbinary => -4,
            Self::Date => 91,
            Self::Time => 92,
            Self::Timestamp => 93,
            Self::Clob => 2005,
            Self::NClob => 2011,
            Self::Other(code) => code,
        }
    }

    /// The type to use when converting a column *value* (not its declaration).
    ///
    /// Long-text and long-national-text columns are read as large-object text
    /// on SQL Server, so downstream value conversion must take the CLOB path.
    #[must_use]
    pub fn for_value_conversion(self) -> Self {
        match self {
            Self::LongVarchar | Self::LongNVarchar => Self::Clob,
            other => other,
        }
    }
}

/// Raw driver-reported metadata for one column.
///
/// Constructed per column from a metadata row and consumed within the same
/// metadata query; never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDescriptor {
    /// `DATA_TYPE`
    pub data_type: JdbcType,
    /// `TYPE_NAME`, as reported (lower case for SQL Server system types)
    pub type_name: String,
    /// `COLUMN_SIZE`
    pub precision: i32,
    /// `DECIMAL_DIGITS`
    pub scale: i32,
    /// `BUFFER_LENGTH`
    pub buffer_length: i32,
}

impl ColumnDescriptor {
    #[must_use]
    pub fn new(
        data_type: JdbcType,
        type_name: impl Into<String>,
        precision: i32,
        scale: i32,
        buffer_length: i32,
    ) -> Self {
        Self {
            data_type,
            type_name: type_name.into(),
            precision,
            scale,
            buffer_length,
        }
    }
}

/// A table yielded by schema introspection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableEntry {
    pub schema: String,
    pub name: String,
}

impl fmt::Display for TableEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.schema.is_empty() {
            f.write_str(&self.name)
        } else {
            write!(f, "{}.{}", self.schema, self.name)
        }
    }
}

/// Identity of a result-set column, as needed by the dialect filters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultColumn {
    pub name: String,
    pub data_type: JdbcType,
}

impl ResultColumn {
    #[must_use]
    pub fn new(name: impl Into<String>, data_type: JdbcType) -> Self {
        Self {
            name: name.into(),
            data_type,
        }
    }
}
