use menkyo_database::DatabaseError;
use std::borrow::Cow;

/// Error types specific to the licensing feature.
#[menkyo_derive::menkyo_error]
pub enum LicenseError {
    /// The document store failed; the source error is preserved unchanged.
    #[error("Storage error{}: {source}", format_context(.context))]
    Storage { source: DatabaseError, context: Option<Cow<'static, str>> },

    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal licensing error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
