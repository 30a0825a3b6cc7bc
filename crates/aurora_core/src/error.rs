use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Misuse errors raised by scoped component lookups.
pub enum UiError {
    /// A component that reads scoped context was rendered outside its provider.
    #[error("{hook} must be used within {provider}")]
    MissingProvider {
        /// The lookup that failed (for example `use_form_field`).
        hook: &'static str,
        /// The enclosing component that must provide the context.
        provider: &'static str,
    },
}
