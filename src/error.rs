use thiserror::Error;

/// Errors surfaced by the casing library itself. Binary-side failures are
/// wrapped in `anyhow` at the call site instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// An ordinal was assigned to a casing setting that no `Casing` variant
    /// occupies.
    #[error(
        "value '{value}' is not a defined Casing ordinal (while setting '{field}'); \
         expected unchanged (0), lower (1), or upper (2)"
    )]
    UndefinedCasing { value: u8, field: &'static str },
    /// A casing name failed to parse.
    #[error("'{name}' is not a casing; expected 'unchanged', 'lower', or 'upper'")]
    UnknownCasingName { name: String },
    /// A locale identifier failed to parse as BCP-47.
    #[error("'{value}' is not a valid BCP-47 locale identifier")]
    InvalidLocale { value: String },
}
