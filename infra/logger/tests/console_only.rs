use menkyo_logger::{ConsoleTarget, LevelFilter, Logger};

#[test]
fn console_only_logger_initializes() {
    let logger = Logger::builder()
        .name("console-only")
        .console(true)
        .output(ConsoleTarget::Stderr)
        .level(LevelFilter::DEBUG)
        .init()
        .expect("console-only init should succeed");

    tracing::info!("console logging is alive");
    logger.flush();

    // No file layer was requested, so no worker guard is held.
    assert!(logger.guard().is_none());
}
