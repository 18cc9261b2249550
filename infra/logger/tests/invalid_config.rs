use gridiron_logger::{Logger, LoggerError};

// None of these reach try_init, so they can share a process.

#[test]
fn empty_name_is_rejected() {
    let err = Logger::builder("  ").init().unwrap_err();
    assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
}

#[test]
fn malformed_env_filter_is_rejected() {
    let err = Logger::builder("invalid-filter").env_filter("not==valid==").init().unwrap_err();
    assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
}

#[test]
fn zero_max_files_with_file_output_is_rejected() {
    let err = Logger::builder("zero-files").path("/tmp/zero-files").max_files(0).init().unwrap_err();
    assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
}
