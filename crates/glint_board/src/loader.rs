//! Board profile loading, resolution, and validation.

use std::path::Path;

use crate::builtin;
use crate::error::BoardError;
use crate::types::BoardProfile;

/// Loads and validates a board profile from a TOML file.
pub fn load_profile(path: &Path) -> Result<BoardProfile, BoardError> {
    let content = std::fs::read_to_string(path)?;
    load_profile_from_str(&content)
}

/// Parses and validates a board profile from a string.
///
/// Useful for testing and for the embedded built-in profiles.
pub fn load_profile_from_str(content: &str) -> Result<BoardProfile, BoardError> {
    let profile: BoardProfile =
        toml::from_str(content).map_err(|e| BoardError::Parse(e.to_string()))?;
    validate_profile(&profile)?;
    Ok(profile)
}

/// Resolves a board argument: a built-in name first, then a file path.
pub fn resolve_profile(name_or_path: &str) -> Result<BoardProfile, BoardError> {
    if builtin::builtin_names().contains(&name_or_path) {
        return builtin::builtin_profile(name_or_path);
    }
    let path = Path::new(name_or_path);
    if path.is_file() {
        return load_profile(path);
    }
    Err(BoardError::UnknownBoard(name_or_path.to_string()))
}

/// Validates that required fields are present and consistent.
fn validate_profile(profile: &BoardProfile) -> Result<(), BoardError> {
    if profile.board.name.is_empty() {
        return Err(BoardError::Invalid("board.name must not be empty".into()));
    }
    profile.clock_frequency()?;
    if profile.clock.pin.is_empty() {
        return Err(BoardError::Invalid("clock.pin must not be empty".into()));
    }
    for (name, pins) in &profile.connectors {
        if pins.is_empty() {
            return Err(BoardError::Invalid(format!(
                "connector '{name}' has no pins"
            )));
        }
    }
    Ok(())
}
