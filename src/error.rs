//! Error types for wavegen.
//!
//! Defines all error codes and types used by the generator for
//! consistent error handling and reporting.

use std::fmt;

/// Error codes returned by the generator.
///
/// Each failure mode carries a stable code so scripts driving the tool
/// can match on the condition without parsing message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Sample rate parameter is zero.
    /// Trigger: `--sr 0`.
    InvalidSampleRate,

    /// Duration parameter is not strictly positive.
    /// Trigger: `--seconds 0` or a negative value.
    InvalidDuration,

    /// Channel count parameter is zero.
    /// Trigger: `--channels 0`.
    InvalidChannels,

    /// Output directory could not be created.
    /// Trigger: permission denied, or a path component is a file.
    OutputDirFailed,

    /// WAV file could not be created, written, or finalized.
    /// Trigger: unwritable path, disk full during write.
    WavWriteFailed,
}

impl ErrorCode {
    /// Returns the string representation of the error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::InvalidSampleRate => "INVALID_SAMPLE_RATE",
            ErrorCode::InvalidDuration => "INVALID_DURATION",
            ErrorCode::InvalidChannels => "INVALID_CHANNELS",
            ErrorCode::OutputDirFailed => "OUTPUT_DIR_FAILED",
            ErrorCode::WavWriteFailed => "WAV_WRITE_FAILED",
        }
    }

    /// Returns a human-readable description of the error.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::InvalidSampleRate => "Sample rate must be strictly positive",
            ErrorCode::InvalidDuration => "Duration must be strictly positive",
            ErrorCode::InvalidChannels => "Channel count must be strictly positive",
            ErrorCode::OutputDirFailed => "Output directory could not be created",
            ErrorCode::WavWriteFailed => "WAV file could not be written",
        }
    }

    /// Returns a recovery hint suggesting how to resolve this error.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCode::InvalidSampleRate => {
                "Pass a positive sample rate in Hz (e.g. --sr 48000)"
            }
            ErrorCode::InvalidDuration => {
                "Pass a positive duration in seconds (e.g. --seconds 2.0)"
            }
            ErrorCode::InvalidChannels => {
                "Pass a positive channel count (e.g. --channels 2)"
            }
            ErrorCode::OutputDirFailed => {
                "Check that the output path is writable and that no file \
                 occupies a directory component of it"
            }
            ErrorCode::WavWriteFailed => {
                "Check free disk space and write permission on the output \
                 directory, then rerun"
            }
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Main error type for generator operations.
#[derive(Debug)]
pub struct WavegenError {
    /// The error code identifying the type of error.
    pub code: ErrorCode,
    /// Human-readable error message with context.
    pub message: String,
    /// Optional underlying cause of the error.
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl WavegenError {
    /// Creates a new WavegenError with the given code and message.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Creates a new WavegenError with an underlying cause.
    pub fn with_source(
        code: ErrorCode,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates an INVALID_SAMPLE_RATE error.
    pub fn invalid_sample_rate(sr: u32) -> Self {
        Self::new(
            ErrorCode::InvalidSampleRate,
            format!("Invalid sample rate: {} Hz (must be positive)", sr),
        )
    }

    /// Creates an INVALID_DURATION error.
    pub fn invalid_duration(seconds: f64) -> Self {
        Self::new(
            ErrorCode::InvalidDuration,
            format!("Invalid duration: {} seconds (must be positive)", seconds),
        )
    }

    /// Creates an INVALID_CHANNELS error.
    pub fn invalid_channels(channels: u16) -> Self {
        Self::new(
            ErrorCode::InvalidChannels,
            format!("Invalid channel count: {} (must be positive)", channels),
        )
    }

    /// Creates an OUTPUT_DIR_FAILED error.
    pub fn output_dir_failed(reason: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::OutputDirFailed,
            format!("Failed to create output directory: {}", reason.into()),
        )
    }

    /// Creates a WAV_WRITE_FAILED error.
    pub fn wav_write_failed(reason: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::WavWriteFailed,
            format!("Failed to write WAV file: {}", reason.into()),
        )
    }
}

impl fmt::Display for WavegenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}. Recovery: {}",
            self.code,
            self.message,
            self.code.recovery_hint()
        )
    }
}

impl std::error::Error for WavegenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Result type alias using WavegenError.
pub type Result<T> = std::result::Result<T, WavegenError>;
