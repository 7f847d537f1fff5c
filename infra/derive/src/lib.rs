#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by the Menkyo infrastructure crates.
//! Currently this boils down to one attribute macro that removes the
//! boilerplate around domain error enums.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// A high-level attribute macro for defining domain-specific error enums.
///
/// This macro transforms a standard enum into a fully-featured error type
/// integrated with the Menkyo infrastructure.
///
/// # Features
///
/// * **Automatic Derives**: Injects `#[derive(Debug, thiserror::Error)]`.
/// * **Context Support**: Generates a companion `...Ext` trait that adds `.context()`
///   to any `Result` that can be converted into this error type.
/// * **Standard Conversions**: Implements `From<T>` for variants containing a `source`
///   field, enabling the use of the `?` operator for upstream errors.
/// * **Internal Fallback**: Provides specialized `From<&str>` and `From<String>`
///   implementations if an `Internal` variant is present.
///
/// # Requirements
///
/// 1. The macro must be applied to an **enum** with struct-style variants.
/// 2. Variants that support context must include a `context: Option<Cow<'static, str>>` field.
/// 3. Variants wrapping external errors must include a `source: T` field or a field marked
///    with `#[source]`/`#[from]` (compatible with `thiserror`).
///
/// # Example
///
/// ```rust,ignore
/// use menkyo_derive::menkyo_error;
/// use std::borrow::Cow;
///
/// #[menkyo_error]
/// pub enum StoreError {
///     #[error("Engine error{}: {source}", format_context(.context))]
///     Engine {
///         #[source]
///         source: std::io::Error,
///         context: Option<Cow<'static, str>>,
///     },
///
///     #[error("Internal fault{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// // Usage:
/// fn read() -> Result<String, StoreError> {
///     std::fs::read_to_string("state.json").context("Reading engine state")
/// }
/// ```
#[proc_macro_attribute]
pub fn menkyo_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand(input).into()
}
