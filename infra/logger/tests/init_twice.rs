use gridiron_logger::{Logger, LoggerError};

#[test]
fn second_init_fails_with_subscriber_error() {
    let _logger = Logger::builder("integration-init-twice").init().expect("first init");

    let err = Logger::builder("integration-init-twice").init().unwrap_err();
    assert!(matches!(err, LoggerError::Subscriber(_)));
}
