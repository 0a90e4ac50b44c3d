//! Error handling for the linprobe library
//!
//! This module provides the error taxonomy shared by the table, its
//! configuration layer and the AmigoNet command simulator.

use thiserror::Error;

/// Main error type for the linprobe library
#[derive(Error, Debug)]
pub enum ProbeTableError {
    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid data or a broken table invariant
    #[error("Invalid data: {message}")]
    InvalidData {
        /// Error message describing the issue
        message: String,
    },

    /// Slot storage could not be obtained
    #[error("Memory allocation failed: requested {size} slots")]
    OutOfMemory {
        /// Number of slots requested
        size: usize,
    },

    /// Lookup of a key that is not present in the table
    #[error("Key not found")]
    KeyNotFound,

    /// Command with a missing argument or a badly shaped argument
    #[error("invalid arguments for {command}")]
    MalformedCommand {
        /// The command keyword
        command: String,
        /// What was wrong with the arguments
        message: String,
    },

    /// Command keyword that the simulator does not know
    #[error("illegal command \"{command}\"")]
    UnrecognizedCommand {
        /// The offending command keyword
        command: String,
    },

    /// Configuration or parameter errors
    #[error("Invalid configuration: {message}")]
    Configuration {
        /// Configuration error message
        message: String,
    },
}

impl ProbeTableError {
    /// Create an invalid data error
    pub fn invalid_data<S: Into<String>>(message: S) -> Self {
        Self::InvalidData { message: message.into() }
    }

    /// Create an out of memory error
    pub fn out_of_memory(size: usize) -> Self {
        Self::OutOfMemory { size }
    }

    /// Create a malformed command error
    pub fn malformed_command<C: Into<String>, S: Into<String>>(command: C, message: S) -> Self {
        Self::MalformedCommand {
            command: command.into(),
            message: message.into(),
        }
    }

    /// Create an unrecognized command error
    pub fn unrecognized_command<S: Into<String>>(command: S) -> Self {
        Self::UnrecognizedCommand { command: command.into() }
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration { message: message.into() }
    }

    /// Check if this is a recoverable error
    ///
    /// Allocation failures are not: a table that cannot obtain its backing
    /// store has no way to continue.
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Io(_) => true,
            Self::KeyNotFound => true,
            Self::MalformedCommand { .. } => true,
            Self::UnrecognizedCommand { .. } => true,
            Self::OutOfMemory { .. } => false,
            Self::InvalidData { .. } => false,
            Self::Configuration { .. } => false,
        }
    }

    /// Get the error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            Self::Io(_) => "io",
            Self::InvalidData { .. } => "data",
            Self::OutOfMemory { .. } => "memory",
            Self::KeyNotFound => "lookup",
            Self::MalformedCommand { .. } => "command",
            Self::UnrecognizedCommand { .. } => "command",
            Self::Configuration { .. } => "config",
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, ProbeTableError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = ProbeTableError::invalid_data("test message");
        assert_eq!(err.category(), "data");
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_all_error_types() {
        let memory_err = ProbeTableError::out_of_memory(1024);
        assert_eq!(memory_err.category(), "memory");
        assert!(!memory_err.is_recoverable());

        let missing = ProbeTableError::KeyNotFound;
        assert_eq!(missing.category(), "lookup");
        assert!(missing.is_recoverable());

        let malformed = ProbeTableError::malformed_command("addUser", "missing birthdate");
        assert_eq!(malformed.category(), "command");
        assert!(malformed.is_recoverable());

        let unknown = ProbeTableError::unrecognized_command("frobnicate");
        assert_eq!(unknown.category(), "command");
        assert!(unknown.is_recoverable());

        let config_err = ProbeTableError::configuration("initial_capacity must be positive");
        assert_eq!(config_err.category(), "config");
        assert!(!config_err.is_recoverable());
    }

    #[test]
    fn test_error_display() {
        let err = ProbeTableError::invalid_data("test message");
        let display = format!("{}", err);
        assert!(display.contains("Invalid data"));
        assert!(display.contains("test message"));

        let oom = ProbeTableError::out_of_memory(64);
        assert!(format!("{}", oom).contains("64"));

        assert_eq!(
            ProbeTableError::malformed_command("addUser", "bad birthdate").to_string(),
            "invalid arguments for addUser"
        );
        assert_eq!(
            ProbeTableError::unrecognized_command("hello").to_string(),
            "illegal command \"hello\""
        );
    }

    #[test]
    fn test_from_io_error() {
        let io_error = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: ProbeTableError = io_error.into();

        assert_eq!(err.category(), "io");
        assert!(err.is_recoverable());
        assert!(format!("{}", err).contains("I/O error"));
    }

    #[test]
    fn test_error_debug() {
        let err = ProbeTableError::malformed_command("addUser", "debug test");
        let debug_str = format!("{:?}", err);
        assert!(debug_str.contains("MalformedCommand"));
        assert!(debug_str.contains("debug test"));
    }
}
