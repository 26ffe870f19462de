//! Error types for board profile loading and validation.

/// Errors that can occur when loading or validating a board profile.
#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    /// An I/O error occurred while reading the profile file.
    #[error("failed to read board profile: {0}")]
    Io(#[from] std::io::Error),

    /// The TOML content could not be parsed.
    #[error("failed to parse board profile: {0}")]
    Parse(String),

    /// The requested name matches no built-in board and no file.
    #[error("unknown board '{0}'")]
    UnknownBoard(String),

    /// A profile value failed validation.
    #[error("invalid board profile: {0}")]
    Invalid(String),
}
