//! Error Types

use thiserror::Error;

/// Main error type
#[derive(Debug, Clone, Error)]
pub enum PhidelityError {
    #[error("Validation error: {message}")]
    Validation { message: String },
    #[error("Decode error: {message}")]
    Decode { message: String },
    #[error("Insufficient audio: {length} samples, need more than the grain size of {grain_size}")]
    InsufficientAudio { length: usize, grain_size: usize },
    #[error("Encode error: {message}")]
    Encode { message: String },
    #[error("Config error: {message}")]
    Config { message: String },
    #[error("IO error: {message}")]
    Io { message: String },
}

impl PhidelityError {
    pub fn validation<S: Into<String>>(msg: S) -> Self { Self::Validation { message: msg.into() } }
    pub fn decode<S: Into<String>>(msg: S) -> Self { Self::Decode { message: msg.into() } }
    pub fn encode<S: Into<String>>(msg: S) -> Self { Self::Encode { message: msg.into() } }
    pub fn config<S: Into<String>>(msg: S) -> Self { Self::Config { message: msg.into() } }
    pub fn io<S: Into<String>>(msg: S) -> Self { Self::Io { message: msg.into() } }

    pub fn insufficient_audio(length: usize, grain_size: usize) -> Self {
        Self::InsufficientAudio { length, grain_size }
    }
}

pub type Result<T> = std::result::Result<T, PhidelityError>;

impl From<std::io::Error> for PhidelityError {
    fn from(err: std::io::Error) -> Self { Self::io(err.to_string()) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let e = PhidelityError::decode("test");
        assert!(e.to_string().contains("Decode"));

        let e = PhidelityError::insufficient_audio(10, 1024);
        assert!(e.to_string().contains("10 samples"));
        assert!(e.to_string().contains("1024"));
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let e: PhidelityError = io.into();
        assert!(matches!(e, PhidelityError::Io { .. }));
    }
}
