//! Transaction isolation level mapping.
//!
//! SQL Server supports the four standard levels plus SNAPSHOT. The driver
//! reports and accepts levels as plain JDBC-style integers; this module maps
//! them to and from the ORM's symbolic names.

use std::fmt;
use std::str::FromStr;

use crate::error::MssqlAdapterError;

pub const TRANSACTION_NONE: i32 = 0;
pub const TRANSACTION_READ_UNCOMMITTED: i32 = 1;
pub const TRANSACTION_READ_COMMITTED: i32 = 2;
pub const TRANSACTION_REPEATABLE_READ: i32 = 4;
pub const TRANSACTION_SERIALIZABLE: i32 = 8;

/// The driver's non-standard SNAPSHOT constant: `READ_COMMITTED + 4094`.
///
/// Compatibility invariant with the targeted driver's internal encoding; do
/// not derive or normalize it.
pub const TRANSACTION_SNAPSHOT: i32 = TRANSACTION_READ_COMMITTED + 4094;

/// SQL Server transaction isolation levels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum IsolationLevel {
    /// Allows dirty reads of uncommitted changes from other transactions.
    ReadUncommitted,
    /// The SQL Server default.
    #[default]
    ReadCommitted,
    /// Read locks are held until the transaction completes.
    RepeatableRead,
    /// Range locks prevent phantom rows as well.
    Serializable,
    /// Row-versioned reads; requires `ALLOW_SNAPSHOT_ISOLATION` on the
    /// database and a driver-specific numeric encoding on the wire.
    Snapshot,
}

impl IsolationLevel {
    /// All levels, in ascending numeric order.
    pub const ALL: [IsolationLevel; 5] = [
        Self::ReadUncommitted,
        Self::ReadCommitted,
        Self::RepeatableRead,
        Self::Serializable,
        Self::Snapshot,
    ];

    /// The ORM's symbolic name for this level.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ReadUncommitted => "read_uncommitted",
            Self::ReadCommitted => "read_committed",
            Self::RepeatableRead => "repeatable_read",
            Self::Serializable => "serializable",
            Self::Snapshot => "snapshot",
        }
    }

    /// The `SET TRANSACTION ISOLATION LEVEL` spelling.
    #[must_use]
    pub fn as_sql(self) -> &'static str {
        match self {
            Self::ReadUncommitted => "READ UNCOMMITTED",
            Self::ReadCommitted => "READ COMMITTED",
            Self::RepeatableRead => "REPEATABLE READ",
            Self::Serializable => "SERIALIZABLE",
            Self::Snapshot => "SNAPSHOT",
        }
    }

    /// The numeric constant the driver understands.
    #[must_use]
    pub fn level(self) -> i32 {
        match self {
            Self::ReadUncommitted => TRANSACTION_READ_UNCOMMITTED,
            Self::ReadCommitted => TRANSACTION_READ_COMMITTED,
            Self::RepeatableRead => TRANSACTION_REPEATABLE_READ,
            Self::Serializable => TRANSACTION_SERIALIZABLE,
            Self::Snapshot => TRANSACTION_SNAPSHOT,
        }
    }

    /// Map a driver-reported numeric level back to its symbolic form.
    ///
    /// Level `0` means "unset / unknown" and maps to `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Any other unrecognized level is a caller error and fails with
    /// [`MssqlAdapterError::InvalidIsolationLevel`] carrying the value.
    pub fn from_level(level: i32) -> Result<Option<Self>, MssqlAdapterError> {
        match level {
            TRANSACTION_NONE => Ok(None),
            TRANSACTION_READ_UNCOMMITTED => Ok(Some(Self::ReadUncommitted)),
            TRANSACTION_READ_COMMITTED => Ok(Some(Self::ReadCommitted)),
            TRANSACTION_REPEATABLE_READ => Ok(Some(Self::RepeatableRead)),
            TRANSACTION_SERIALIZABLE => Ok(Some(Self::Serializable)),
            TRANSACTION_SNAPSHOT => Ok(Some(Self::Snapshot)),
            other => Err(MssqlAdapterError::InvalidIsolationLevel {
                value: other.to_string(),
            }),
        }
    }

    /// Map a symbolic name to its level, ASCII case-insensitively.
    ///
    /// # Errors
    ///
    /// Fails with [`MssqlAdapterError::InvalidIsolationLevel`] for names
    /// outside the mapping table.
    pub fn from_name(name: &str) -> Result<Self, MssqlAdapterError> {
        for level in Self::ALL {
            if name.eq_ignore_ascii_case(level.as_str()) {
                return Ok(level);
            }
        }
        Err(MssqlAdapterError::InvalidIsolationLevel {
            value: name.to_string(),
        })
    }
}

impl fmt::Display for IsolationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IsolationLevel {
    type Err = MssqlAdapterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

/// The symbolic name for a driver-reported level, `None` when unset.
///
/// # Errors
///
/// Fails with [`MssqlAdapterError::InvalidIsolationLevel`] for levels outside
/// the mapping table.
pub fn symbol_for_level(level: i32) -> Result<Option<&'static str>, MssqlAdapterError> {
    Ok(IsolationLevel::from_level(level)?.map(IsolationLevel::as_str))
}

/// The numeric level for a symbolic name.
///
/// # Errors
///
/// Fails with [`MssqlAdapterError::InvalidIsolationLevel`] for unrecognized
/// names.
pub fn level_for_symbol(name: &str) -> Result<i32, MssqlAdapterError> {
    Ok(IsolationLevel::from_name(name)?.level())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_keeps_the_driver_constant() {
        assert_eq!(IsolationLevel::Snapshot.level(), 4096);
        assert_eq!(level_for_symbol("snapshot").unwrap(), 4096);
        assert_eq!(level_for_symbol("SNAPSHOT").unwrap(), 4096);
        assert_eq!(symbol_for_level(4096).unwrap(), Some("snapshot"));
    }

    #[test]
    fn every_level_round_trips() {
        for level in IsolationLevel::ALL {
            assert_eq!(
                IsolationLevel::from_level(level.level()).unwrap(),
                Some(level)
            );
            assert_eq!(IsolationLevel::from_name(level.as_str()).unwrap(), level);
        }
    }

    #[test]
    fn zero_means_unset() {
        assert_eq!(IsolationLevel::from_level(0).unwrap(), None);
        assert_eq!(symbol_for_level(0).unwrap(), None);
    }

    #[test]
    fn names_are_case_insensitive() {
        assert_eq!(
            "Repeatable_Read".parse::<IsolationLevel>().unwrap(),
            IsolationLevel::RepeatableRead
        );
    }

    #[test]
    fn unknown_inputs_fail_with_the_offending_value() {
        let err = level_for_symbol("bogus").unwrap_err();
        match err {
            MssqlAdapterError::InvalidIsolationLevel { value } => assert_eq!(value, "bogus"),
            other => panic!("expected InvalidIsolationLevel, got {other:?}"),
        }

        let err = symbol_for_level(3).unwrap_err();
        match err {
            MssqlAdapterError::InvalidIsolationLevel { value } => assert_eq!(value, "3"),
            other => panic!("expected InvalidIsolationLevel, got {other:?}"),
        }
    }

    #[test]
    fn sql_spelling_matches_server_syntax() {
        assert_eq!(IsolationLevel::ReadCommitted.as_sql(), "READ COMMITTED");
        assert_eq!(IsolationLevel::Snapshot.as_sql(), "SNAPSHOT");
    }
}
