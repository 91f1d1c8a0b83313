//! Shared error type across chatlink crates.

use thiserror::Error;

/// Stable error codes used as log and metric labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Buffer ended before a complete header or field.
    UnexpectedEof,
    /// Declared payload length exceeds the bytes actually present.
    FrameLengthMismatch,
    /// Type ordinal outside the message registry.
    UnknownMessageType,
    /// String field bytes are not valid UTF-8.
    InvalidUtf8,
    /// Encode-side length field overflow.
    PayloadTooLarge,
    /// Targeted delivery found no connected player.
    TargetNotFound,
    /// Config failed to parse or validate.
    BadConfig,
    /// Unsupported config version.
    UnsupportedVersion,
}

impl ErrorCode {
    /// String representation used in logs and metric labels.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::UnexpectedEof => "UNEXPECTED_EOF",
            ErrorCode::FrameLengthMismatch => "FRAME_LENGTH_MISMATCH",
            ErrorCode::UnknownMessageType => "UNKNOWN_MESSAGE_TYPE",
            ErrorCode::InvalidUtf8 => "INVALID_UTF8",
            ErrorCode::PayloadTooLarge => "PAYLOAD_TOO_LARGE",
            ErrorCode::TargetNotFound => "TARGET_NOT_FOUND",
            ErrorCode::BadConfig => "BAD_CONFIG",
            ErrorCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, ChatLinkError>;

/// Unified error type used by core, node, and relay crates.
#[derive(Debug, Error)]
pub enum ChatLinkError {
    #[error("unexpected end of data")]
    UnexpectedEndOfData,
    #[error("frame declares {declared} payload bytes but only {actual} are present")]
    FrameLengthMismatch { declared: usize, actual: usize },
    #[error("unknown message type ordinal {0}")]
    UnknownMessageType(u16),
    #[error("string field is not valid UTF-8")]
    InvalidUtf8,
    #[error("payload too large: {0} bytes")]
    PayloadTooLarge(usize),
    #[error("no connected player with identity '{0}'")]
    TargetNotFound(String),
    #[error("bad config: {0}")]
    BadConfig(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
}

impl ChatLinkError {
    /// Map an error to its stable code.
    pub fn code(&self) -> ErrorCode {
        match self {
            ChatLinkError::UnexpectedEndOfData => ErrorCode::UnexpectedEof,
            ChatLinkError::FrameLengthMismatch { .. } => ErrorCode::FrameLengthMismatch,
            ChatLinkError::UnknownMessageType(_) => ErrorCode::UnknownMessageType,
            ChatLinkError::InvalidUtf8 => ErrorCode::InvalidUtf8,
            ChatLinkError::PayloadTooLarge(_) => ErrorCode::PayloadTooLarge,
            ChatLinkError::TargetNotFound(_) => ErrorCode::TargetNotFound,
            ChatLinkError::BadConfig(_) => ErrorCode::BadConfig,
            ChatLinkError::UnsupportedVersion => ErrorCode::UnsupportedVersion,
        }
    }
}
