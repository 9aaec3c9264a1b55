//! Driver capability sniffing.
//!
//! Quirk workarounds elsewhere in the crate key off an explicit
//! [`DriverProfile`] instead of being buried in per-driver overrides, so each
//! workaround stays visible and testable on its own.

use tracing::trace;

/// Capability profile of the SQL Server driver on the other end of the
/// connection, derived from its self-reported name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DriverProfile {
    driver_name: String,
}

impl DriverProfile {
    /// Build a profile from the driver name reported by connection metadata.
    ///
    /// Known names look like `"jTDS Type 4 JDBC Driver for MS SQL Server and
    /// Sybase"` and `"Microsoft JDBC Driver 4.0 for SQL Server"`.
    pub fn from_driver_name(name: impl Into<String>) -> Self {
        let driver_name = name.into();
        trace!(driver = %driver_name, "profiling SQL Server driver");
        Self { driver_name }
    }

    #[must_use]
    pub fn driver_name(&self) -> &str {
        &self.driver_name
    }

    /// Whether the connection is served by the jTDS driver.
    #[must_use]
    pub fn is_jtds(&self) -> bool {
        self.driver_name.contains("jTDS")
    }

    /// Whether temporal parameters must be bound as text.
    ///
    /// The installed drivers coerce native timestamp bindings to a
    /// higher-precision type than requested (datetime is cast through
    /// datetime2), corrupting round-trips; binding the value as nvarchar text
    /// sidesteps the coercion. Native time bindings additionally truncate the
    /// fraction to two digits.
    #[must_use]
    pub fn text_bound_temporals(&self) -> bool {
        true
    }

    /// Whether the driver implements savepoint release.
    ///
    /// The Microsoft driver does not; see
    /// [`crate::savepoints::SavepointRegistry::release`] for the shim.
    #[must_use]
    pub fn supports_savepoint_release(&self) -> bool {
        false
    }
}

/// Whether a statement invokes a stored procedure via `EXEC`/`EXECUTE`.
///
/// Callers use this to route such statements around the prepared-statement
/// path, which SQL Server does not accept for them.
#[must_use]
pub fn is_exec(sql: &str) -> bool {
    sql.trim_start()
        .get(..4)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("exec"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jtds_is_sniffed_from_the_driver_name() {
        let profile =
            DriverProfile::from_driver_name("jTDS Type 4 JDBC Driver for MS SQL Server and Sybase");
        assert!(profile.is_jtds());

        let profile = DriverProfile::from_driver_name("Microsoft JDBC Driver 4.0 for SQL Server");
        assert!(!profile.is_jtds());
    }

    #[test]
    fn capability_flags() {
        let profile = DriverProfile::default();
        assert!(profile.text_bound_temporals());
        assert!(!profile.supports_savepoint_release());
    }

    #[test]
    fn exec_detection_ignores_case_and_leading_whitespace() {
        assert!(is_exec("exec sp_help"));
        assert!(is_exec("EXEC sp_help"));
        assert!(is_exec("  Execute dbo.do_thing @x = 1"));
        assert!(!is_exec("select 1"));
        assert!(!is_exec("ex"));
    }
}
