// Error types for gearbit

use std::fmt;

use crate::transform_stack::StackUnderflow;

/// Errors produced by the gearbit crate.
#[derive(Debug)]
pub enum GearbitError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML config parsing/serialization failure.
    ConfigParse(String),
    /// A matrix pop with no matching push.
    StackUnderflow(StackUnderflow),
}

impl fmt::Display for GearbitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::ConfigParse(msg) => write!(f, "config parse error: {msg}"),
            Self::StackUnderflow(e) => write!(f, "transform stack error: {e}"),
        }
    }
}

impl std::error::Error for GearbitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::StackUnderflow(e) => Some(e),
            Self::ConfigParse(_) => None,
        }
    }
}

impl From<std::io::Error> for GearbitError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<StackUnderflow> for GearbitError {
    fn from(e: StackUnderflow) -> Self {
        Self::StackUnderflow(e)
    }
}
