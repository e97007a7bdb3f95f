//! Checked entry point for user-supplied paths

use std::path::PathBuf;
use crate::audio::has_wav_extension;
use crate::config::DEFAULT_OUTPUT_NAME;
use crate::error::{PhidelityError, Result};

/// A run as typed in by a user: raw input path, output name and optional seed.
#[derive(Debug, Clone, Default)]
pub struct SynthesisRequest {
    pub input: String,
    pub output_name: String,
    pub seed: Option<u64>,
}

impl SynthesisRequest {
    pub fn new<I: Into<String>, O: Into<String>>(input: I, output_name: O, seed: Option<u64>) -> Self {
        Self {
            input: input.into(),
            output_name: output_name.into(),
            seed,
        }
    }

    /// Reject empty and non-WAV inputs. Touches no files.
    pub fn validate(&self) -> Result<()> {
        if self.input.trim().is_empty() {
            return Err(PhidelityError::validation("Please enter a valid WAV file."));
        }
        if !has_wav_extension(&self.input) {
            return Err(PhidelityError::validation("Invalid file format. Please select a WAV file."));
        }
        Ok(())
    }

    pub fn input_path(&self) -> PathBuf {
        PathBuf::from(&self.input)
    }

    /// Output base name, `output` when left blank.
    pub fn output_path(&self) -> PathBuf {
        if self.output_name.trim().is_empty() {
            PathBuf::from(DEFAULT_OUTPUT_NAME)
        } else {
            PathBuf::from(&self.output_name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_rejected() {
        let err = SynthesisRequest::new("", "out", None).validate().unwrap_err();
        assert!(matches!(err, PhidelityError::Validation { .. }));
        assert!(err.to_string().contains("valid WAV file"));
    }

    #[test]
    fn test_non_wav_rejected() {
        let err = SynthesisRequest::new("track.mp3", "out", None).validate().unwrap_err();
        assert!(err.to_string().contains("Invalid file format"));
    }

    #[test]
    fn test_wav_accepted_any_case() {
        assert!(SynthesisRequest::new("take.wav", "", None).validate().is_ok());
        assert!(SynthesisRequest::new("TAKE.WAV", "", None).validate().is_ok());
    }

    #[test]
    fn test_output_defaults() {
        assert_eq!(SynthesisRequest::new("a.wav", "  ", None).output_path(), PathBuf::from("output"));
        assert_eq!(SynthesisRequest::new("a.wav", "mangled", None).output_path(), PathBuf::from("mangled"));
    }
}
