//! Subtree-scoped context lookups.
//!
//! Records are published with [`leptos::provide_context`] by a provider
//! component and are visible only to descendants rendered inside it. Sibling
//! providers never observe each other's records.

use leptos::use_context;

use crate::UiError;

/// Reads the nearest `T` published by an enclosing provider.
///
/// # Errors
///
/// Returns [`UiError::MissingProvider`] naming `hook` and `provider` when no
/// ancestor published a `T`.
pub fn require_context<T: Clone + 'static>(
    hook: &'static str,
    provider: &'static str,
) -> Result<T, UiError> {
    use_context::<T>().ok_or(UiError::MissingProvider { hook, provider })
}

/// Reads the nearest `T` published by an enclosing provider.
///
/// # Panics
///
/// Panics with the [`UiError::MissingProvider`] message when no ancestor
/// published a `T`. Rendering a part outside its provider is a programming
/// error.
#[track_caller]
pub fn expect_scoped<T: Clone + 'static>(hook: &'static str, provider: &'static str) -> T {
    match require_context::<T>(hook, provider) {
        Ok(value) => value,
        Err(err) => panic!("{err}"),
    }
}
