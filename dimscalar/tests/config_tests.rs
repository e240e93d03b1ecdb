//! Display settings loaded from TOML files.
#![cfg(feature = "config")]

use dimscalar::*;

use std::io::Write;

fn settings_file(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn loads_display_table() {
    let file = settings_file(
        r#"
[display]
precision = 1
fixed_min = 0.01
fixed_max = 1000.0
"#,
    );
    let settings = DisplaySettings::from_file(file.path()).unwrap();
    assert_eq!(settings.precision, 1);
    assert_eq!(settings.fixed_max, 1000.0);

    let d = Length::new(12.34, length::METER);
    assert_eq!(d.format_with(&settings, None, false, true), "12.3 m");
    let far = Length::new(5000.0, length::METER);
    assert_eq!(far.format_with(&settings, None, false, true), "5.0e3 m");
}

#[test]
fn missing_table_keeps_defaults() {
    let file = settings_file("[other]\nkey = 1\n");
    let settings = DisplaySettings::from_file(file.path()).unwrap();
    assert_eq!(settings, DisplaySettings::default());
}

#[test]
fn malformed_file_is_a_configuration_error() {
    let file = settings_file("[display]\nprecision = \"three\"\n");
    let err = DisplaySettings::from_file(file.path()).unwrap_err();
    assert!(matches!(err, QuantityError::Configuration(_)));
    assert_eq!(DisplaySettings::from_file_or_default(file.path()), DisplaySettings::default());
}

#[test]
fn missing_file_falls_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");
    assert!(matches!(DisplaySettings::from_file(&path), Err(QuantityError::Configuration(_))));
    assert_eq!(DisplaySettings::from_file_or_default(&path).precision, 3);
}
