use super::wire;
use serde::Deserialize;
use thiserror::Error;

/// Local input validation failure. Never reaches the network.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a serial number.")]
    EmptySerial,
}

/// A serial number as typed by the user, trimmed and known to be non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerialNumber(String);

impl SerialNumber {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptySerial);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SerialNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Body of `/api/serial/random`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RandomSerials {
    #[serde(default, deserialize_with = "wire::opt_text_list")]
    pub serials: Option<Vec<String>>,
}

impl RandomSerials {
    pub fn into_serials(self) -> Vec<String> {
        self.serials.unwrap_or_default()
    }
}
