//! Configuration loading from files (std only).

use std::fs;
use std::path::Path;

use crate::error::{ConfigError, Error, Result};

use super::kinematics::Kinematics;
use super::{MachineProfile, RepeatabilityRequest};

/// Load a machine profile from a TOML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, parsed or validated.
///
/// # Example
///
/// ```rust,ignore
/// use probe_repeatability::load_profile;
///
/// let (profile, kinematics) = load_profile("printer.toml")?;
/// ```
pub fn load_profile<P: AsRef<Path>>(path: P) -> Result<(MachineProfile, Kinematics)> {
    let content = fs::read_to_string(path.as_ref()).map_err(|e| {
        let msg = heapless::String::try_from(truncate(&e.to_string())).unwrap_or_default();
        Error::Config(ConfigError::IoError(msg))
    })?;

    parse_profile(&content)
}

/// Parse a machine profile from a TOML string and select its kinematics.
///
/// # Errors
///
/// Returns an error if the TOML is invalid or fails validation.
pub fn parse_profile(content: &str) -> Result<(MachineProfile, Kinematics)> {
    let profile: MachineProfile = toml::from_str(content).map_err(parse_error)?;
    let kinematics = super::validation::validate_profile(&profile)?;
    Ok((profile, kinematics))
}

/// Parse request options from a TOML string.
///
/// Only the syntax is checked here; ranges are checked when the run starts.
///
/// # Errors
///
/// Returns an error if the TOML is invalid.
pub fn parse_request(content: &str) -> Result<RepeatabilityRequest> {
    toml::from_str(content).map_err(parse_error)
}

fn parse_error(e: toml::de::Error) -> Error {
    let msg = heapless::String::try_from(truncate(e.message())).unwrap_or_default();
    Error::Config(ConfigError::ParseError(msg))
}

/// Cut a message to fit the 128-byte error buffer on a char boundary.
fn truncate(msg: &str) -> &str {
    let mut end = msg.len().min(128);
    while !msg.is_char_boundary(end) {
        end -= 1;
    }
    &msg[..end]
}
