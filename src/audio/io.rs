//! Decode and encode services used by the synthesizer

use std::path::Path;
use log::debug;
use crate::audio::{AudioConverter, AudioFormat, WavAudio, Waveform};
use crate::config::AudioConfig;
use crate::error::Result;

/// Loads a waveform from a path and writes one back.
pub trait AudioIo {
    fn load(&self, path: &Path) -> Result<Waveform>;
    fn save(&self, path: &Path, waveform: &Waveform) -> Result<()>;
}

/// WAV files through hound, downmixed to mono.
#[derive(Debug, Clone)]
pub struct WavIo {
    target_sample_rate: Option<u32>,
    output_format: AudioFormat,
}

impl WavIo {
    pub fn new(config: &AudioConfig) -> Self {
        Self {
            target_sample_rate: config.target_sample_rate,
            output_format: config.output_format,
        }
    }
}

impl Default for WavIo {
    fn default() -> Self {
        Self::new(&AudioConfig::default())
    }
}

impl AudioIo for WavIo {
    fn load(&self, path: &Path) -> Result<Waveform> {
        let waveform = WavAudio::from_file(path)?.into_waveform();

        match self.target_sample_rate {
            Some(rate) if rate != waveform.sample_rate => {
                debug!("Resampling {} Hz -> {} Hz", waveform.sample_rate, rate);
                AudioConverter::convert_sample_rate(&waveform, rate)
            }
            _ => Ok(waveform),
        }
    }

    fn save(&self, path: &Path, waveform: &Waveform) -> Result<()> {
        WavAudio::from_waveform(waveform, self.output_format).save_to_file(path)
    }
}
