use menkyo_derive::menkyo_error;
use std::borrow::Cow;
use std::error::Error as _;

#[menkyo_error]
pub enum SampleError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Internal fault{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn io_failure() -> Result<(), std::io::Error> {
    Err(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"))
}

#[test]
fn from_source_converts_via_question_mark() {
    fn run() -> Result<(), SampleError> {
        io_failure()?;
        Ok(())
    }

    let err = run().unwrap_err();
    assert!(matches!(err, SampleError::Io { context: None, .. }));
    assert_eq!(err.to_string(), "IO error: gone");
}

#[test]
fn context_is_appended_to_display() {
    let err = io_failure().context("Reading engine state").unwrap_err();
    assert_eq!(err.to_string(), "IO error (Reading engine state): gone");
}

#[test]
fn context_can_be_attached_after_conversion() {
    let result: Result<(), SampleError> = Err(SampleError::Internal {
        message: "broken invariant".into(),
        context: None,
    });
    let err = result.context("Finalizing").unwrap_err();
    assert_eq!(err.to_string(), "Internal fault (Finalizing): broken invariant");
}

#[test]
fn internal_variant_accepts_strings() {
    let from_str: SampleError = "static message".into();
    assert_eq!(from_str.to_string(), "Internal fault: static message");

    let from_string: SampleError = format!("dynamic {}", 42).into();
    assert_eq!(from_string.to_string(), "Internal fault: dynamic 42");
}

#[test]
fn source_chain_is_preserved() {
    let err = io_failure().context("Reading").unwrap_err();
    let source = err.source().expect("io source should be preserved");
    assert_eq!(source.to_string(), "gone");
}
