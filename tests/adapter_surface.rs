//! End-to-end checks over the ORM-facing surface: raw driver codes in,
//! canonical declarations and wire values out.

use chrono::FixedOffset;
use mssql_adapter::prelude::*;
use tiberius::ColumnData;

#[test]
fn raw_driver_codes_resolve_to_the_dialect_branches() {
    // DATA_TYPE codes as the driver reports them.
    assert_eq!(JdbcType::from_code(12), JdbcType::Varchar);
    assert_eq!(JdbcType::from_code(-9), JdbcType::NVarchar);
    assert_eq!(JdbcType::from_code(93), JdbcType::Timestamp);
    assert_eq!(JdbcType::from_code(3), JdbcType::Decimal);
    assert_eq!(JdbcType::from_code(1111), JdbcType::Other(1111));
    // and back, unchanged
    assert_eq!(JdbcType::from_code(-16).code(), -16);
    assert_eq!(JdbcType::Other(1111).code(), 1111);
}

#[test]
fn formatting_from_raw_metadata_triples() {
    let varchar_max = ColumnDescriptor::new(
        JdbcType::from_code(12),
        "varchar",
        2_147_483_647,
        0,
        2_147_483_647,
    );
    assert_eq!(format_column_type(&varchar_max), "varchar(max)");

    let money = ColumnDescriptor::new(JdbcType::from_code(3), "money", 19, 4, 8);
    assert_eq!(format_column_type(&money), "money");

    let datetime2 = ColumnDescriptor::new(JdbcType::from_code(93), "datetime2", 27, 7, 54);
    assert_eq!(format_column_type(&datetime2), "datetime2(7)");
}

#[test]
fn isolation_surface_round_trips_through_the_driver_encoding() {
    for name in [
        "read_uncommitted",
        "read_committed",
        "repeatable_read",
        "serializable",
        "snapshot",
    ] {
        let level = level_for_symbol(name).unwrap();
        assert_eq!(symbol_for_level(level).unwrap(), Some(name));
    }

    assert_eq!(level_for_symbol("SNAPSHOT").unwrap(), 4096);
    assert!(level_for_symbol("bogus").is_err());
}

#[test]
fn decoded_time_binds_back_with_full_precision() {
    let zone = FixedOffset::east_opt(0).unwrap();
    let decoded = decode_time(Some("13:45:30.1234567"), zone).unwrap().unwrap();
    let time_of_day = decoded.naive_local().time();

    let profile = DriverProfile::from_driver_name("Microsoft JDBC Driver 4.0 for SQL Server");
    match bind_time(&profile, &time_of_day) {
        ColumnData::String(Some(text)) => assert_eq!(text, "13:45:30.1234567"),
        other => panic!("expected text binding, got {other:?}"),
    }
}

#[test]
fn decoded_timestamp_binds_back_without_padding() {
    let zone = FixedOffset::east_opt(0).unwrap();
    let decoded = decode_timestamp(Some("2024-05-04 13:45:30.5"), zone)
        .unwrap()
        .unwrap();

    let profile = DriverProfile::default();
    match bind_timestamp(&profile, &decoded) {
        ColumnData::String(Some(text)) => assert_eq!(text, "2024-05-04T13:45:30.5"),
        other => panic!("expected text binding, got {other:?}"),
    }
}
