use serde::{Deserialize, Serialize};
use serde_with::DefaultOnError;
use std::fmt;

use crate::protocol::vda5050_common::Header;

/// Error condition reported by the AGV.
#[serde_with::serde_as]
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ErrorMessage {
    #[serde(flatten)]
    pub header: Header,
    #[serde_as(deserialize_as = "DefaultOnError")]
    pub error_type: ErrorType,
    #[serde_as(deserialize_as = "DefaultOnError")]
    pub error_level: ErrorLevel,
    #[serde_as(deserialize_as = "DefaultOnError")]
    pub error_description: String,
    #[serde_as(deserialize_as = "DefaultOnError")]
    pub error_code: i64,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(from = "String", into = "String")]
pub enum ErrorType {
    #[default]
    Protocol,
    Hardware,
    Software,
    Other(String),
}

impl ErrorType {
    pub fn as_str(&self) -> &str {
        match self {
            ErrorType::Protocol => "PROTOCOL",
            ErrorType::Hardware => "HARDWARE",
            ErrorType::Software => "SOFTWARE",
            ErrorType::Other(error_type) => error_type,
        }
    }
}

impl From<String> for ErrorType {
    fn from(error_type: String) -> Self {
        match error_type.as_str() {
            "PROTOCOL" => ErrorType::Protocol,
            "HARDWARE" => ErrorType::Hardware,
            "SOFTWARE" => ErrorType::Software,
            _ => ErrorType::Other(error_type),
        }
    }
}

impl From<ErrorType> for String {
    fn from(error_type: ErrorType) -> Self {
        match error_type {
            ErrorType::Other(error_type) => error_type,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Severity of a reported error.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(from = "String", into = "String")]
pub enum ErrorLevel {
    /// AGV is ready to start (e.g. maintenance cycle expiration warning).
    #[default]
    Warning,
    /// AGV is not in running condition, user intervention required.
    Fatal,
    /// Level outside the standard set, kept verbatim.
    Other(String),
}

impl ErrorLevel {
    pub fn as_str(&self) -> &str {
        match self {
            ErrorLevel::Warning => "WARNING",
            ErrorLevel::Fatal => "FATAL",
            ErrorLevel::Other(level) => level,
        }
    }
}

impl From<String> for ErrorLevel {
    fn from(level: String) -> Self {
        match level.as_str() {
            "WARNING" => ErrorLevel::Warning,
            "FATAL" => ErrorLevel::Fatal,
            _ => ErrorLevel::Other(level),
        }
    }
}

impl From<ErrorLevel> for String {
    fn from(level: ErrorLevel) -> Self {
        match level {
            ErrorLevel::Other(level) => level,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ErrorLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
