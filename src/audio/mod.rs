//! Audio Module
//!
//! Waveform type, WAV file reading and writing, and resampling on load.

pub mod wav;
pub mod converter;
pub mod io;
pub mod waveform;

pub use wav::{WavAudio, AudioFormat, AudioHeader, AudioData, ensure_wav_extension, has_wav_extension};
pub use converter::AudioConverter;
pub use io::{AudioIo, WavIo};
pub use waveform::Waveform;
