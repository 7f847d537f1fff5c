use menkyo_logger::{Logger, LoggerError};

#[test]
fn second_init_reports_existing_subscriber() {
    let _first = Logger::builder()
        .name("first")
        .init()
        .expect("first init should succeed");

    let err = Logger::builder()
        .name("second")
        .init()
        .expect_err("second init must fail, a global subscriber is already set");

    assert!(matches!(err, LoggerError::Subscriber { .. }));
}
