//! WAV audio file processing

use std::path::{Path, PathBuf};
use std::fs::File;
use clap::ValueEnum;
use hound::{WavReader, WavWriter, SampleFormat};
use log::{debug, warn};
use ndarray::{Array1, Array2, Axis};
use serde::{Deserialize, Serialize};
use crate::audio::Waveform;
use crate::error::{PhidelityError, Result};

pub const WAV_EXTENSION: &str = "wav";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum AudioFormat {
    Int8,
    Int16,
    Int24,
    Int32,
    Float32,
}

impl AudioFormat {
    pub fn name(&self) -> &'static str {
        match self {
            AudioFormat::Int8 => "int8",
            AudioFormat::Int16 => "int16",
            AudioFormat::Int24 => "int24",
            AudioFormat::Int32 => "int32",
            AudioFormat::Float32 => "float32",
        }
    }

    pub fn bits_per_sample(&self) -> u16 {
        match self {
            AudioFormat::Int8 => 8,
            AudioFormat::Int16 => 16,
            AudioFormat::Int24 => 24,
            AudioFormat::Int32 | AudioFormat::Float32 => 32,
        }
    }

    pub fn to_sample_format(self) -> SampleFormat {
        match self {
            AudioFormat::Float32 => SampleFormat::Float,
            _ => SampleFormat::Int,
        }
    }

    fn from_spec(spec: &hound::WavSpec) -> Result<Self> {
        match (spec.sample_format, spec.bits_per_sample) {
            (SampleFormat::Int, 8) => Ok(AudioFormat::Int8),
            (SampleFormat::Int, 16) => Ok(AudioFormat::Int16),
            (SampleFormat::Int, 24) => Ok(AudioFormat::Int24),
            (SampleFormat::Int, 32) => Ok(AudioFormat::Int32),
            (SampleFormat::Float, 32) => Ok(AudioFormat::Float32),
            (format, bits) => Err(PhidelityError::decode(format!(
                "Unsupported sample format: {:?} at {} bits", format, bits
            ))),
        }
    }

    /// Full-scale value for integer formats.
    fn int_scale(self) -> f32 {
        match self {
            AudioFormat::Int8 => 127.0,
            AudioFormat::Int16 => 32767.0,
            AudioFormat::Int24 => 8388607.0,
            AudioFormat::Int32 => 2147483647.0,
            AudioFormat::Float32 => 1.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AudioHeader {
    pub sample_rate: u32,
    pub channels: u16,
    pub format: AudioFormat,
    /// Frames per channel
    pub total_samples: u32,
    pub duration: f64,
}

impl AudioHeader {
    pub fn new(sample_rate: u32, channels: u16, format: AudioFormat, total_samples: u32) -> Self {
        let duration = if sample_rate > 0 {
            total_samples as f64 / sample_rate as f64
        } else {
            0.0
        };

        Self {
            sample_rate,
            channels,
            format,
            total_samples,
            duration,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.sample_rate == 0 {
            return Err(PhidelityError::decode("Sample rate cannot be 0"));
        }

        if self.channels == 0 {
            return Err(PhidelityError::decode("Channel count cannot be 0"));
        }

        Ok(())
    }

    pub fn to_wav_spec(&self) -> hound::WavSpec {
        hound::WavSpec {
            channels: self.channels,
            sample_rate: self.sample_rate,
            bits_per_sample: self.format.bits_per_sample(),
            sample_format: self.format.to_sample_format(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct WavAudio {
    pub header: AudioHeader,
    pub data: AudioData,
}

/// Decoded samples, one column per channel for multi-channel files.
#[derive(Debug, Clone)]
pub enum AudioData {
    Mono(Array1<f32>),
    MultiChannel(Array2<f32>),
}

impl AudioData {
    pub fn len(&self) -> usize {
        match self {
            AudioData::Mono(data) => data.len(),
            AudioData::MultiChannel(data) => data.nrows(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn channels(&self) -> u16 {
        match self {
            AudioData::Mono(_) => 1,
            AudioData::MultiChannel(data) => data.ncols() as u16,
        }
    }

    /// Average all channels into one.
    pub fn to_mono(&self) -> Array1<f32> {
        match self {
            AudioData::Mono(data) => data.clone(),
            AudioData::MultiChannel(data) => data
                .mean_axis(Axis(1))
                .unwrap_or_else(|| Array1::zeros(data.nrows())),
        }
    }
}

impl WavAudio {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let file = File::open(path)
            .map_err(|e| PhidelityError::decode(format!("Cannot open audio file {}: {}", path.display(), e)))?;

        let mut reader = WavReader::new(std::io::BufReader::new(file))
            .map_err(|e| PhidelityError::decode(format!("Cannot create WAV reader: {}", e)))?;

        let spec = reader.spec();
        let format = AudioFormat::from_spec(&spec)?;
        let channels = spec.channels.max(1) as usize;
        let frames = reader.len() as usize / channels;

        let header = AudioHeader::new(spec.sample_rate, spec.channels, format, frames as u32);
        header.validate()?;

        let samples: Vec<f32> = match format {
            AudioFormat::Float32 => {
                reader.samples::<f32>()
                    .map(|sample| sample
                        .map_err(|e| PhidelityError::decode(format!("Failed to read sample: {}", e))))
                    .collect::<Result<_>>()?
            }
            AudioFormat::Int8 | AudioFormat::Int16 | AudioFormat::Int24 | AudioFormat::Int32 => {
                let scale = format.int_scale() as f64;
                reader.samples::<i32>()
                    .map(|sample| sample
                        .map(|s| (s as f64 / scale) as f32)
                        .map_err(|e| PhidelityError::decode(format!("Failed to read sample: {}", e))))
                    .collect::<Result<_>>()?
            }
        };

        let data = if channels == 1 {
            AudioData::Mono(Array1::from(samples))
        } else {
            let mut frames_data = Array2::zeros((frames, channels));
            for (i, frame) in samples.chunks_exact(channels).enumerate() {
                for (c, &sample) in frame.iter().enumerate() {
                    frames_data[[i, c]] = sample;
                }
            }
            AudioData::MultiChannel(frames_data)
        };

        debug!(
            "Decoded {}: {} frames, {} Hz, {} ch, {}",
            path.display(), frames, spec.sample_rate, spec.channels, format.name()
        );

        Ok(WavAudio { header, data })
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();

        let file = File::create(path)
            .map_err(|e| PhidelityError::encode(format!("Cannot create output file {}: {}", path.display(), e)))?;

        let spec = self.header.to_wav_spec();
        let mut writer = WavWriter::new(std::io::BufWriter::new(file), spec)
            .map_err(|e| PhidelityError::encode(format!("Cannot create WAV writer: {}", e)))?;

        let format = self.header.format;
        let mut clipped = 0usize;
        let mut write = |sample: f32| -> Result<()> {
            if !(-1.0..=1.0).contains(&sample) {
                clipped += 1;
            }
            let clamped = if sample.is_finite() { sample.clamp(-1.0, 1.0) } else { 0.0 };
            let written = match format {
                AudioFormat::Float32 => writer.write_sample(clamped),
                AudioFormat::Int8 => writer.write_sample((clamped * format.int_scale()) as i8),
                AudioFormat::Int16 => writer.write_sample((clamped * format.int_scale()) as i16),
                AudioFormat::Int24 | AudioFormat::Int32 => {
                    writer.write_sample((clamped as f64 * format.int_scale() as f64) as i32)
                }
            };
            written.map_err(|e| PhidelityError::encode(format!("Failed to write sample: {}", e)))
        };

        match &self.data {
            AudioData::Mono(data) => {
                for &sample in data.iter() {
                    write(sample)?;
                }
            }
            AudioData::MultiChannel(data) => {
                for row in data.rows() {
                    for &sample in row.iter() {
                        write(sample)?;
                    }
                }
            }
        }

        if clipped > 0 {
            warn!("{} samples outside [-1.0, 1.0] were clipped while writing {}", clipped, path.display());
        }

        writer.finalize()
            .map_err(|e| PhidelityError::encode(format!("Failed to finalize WAV writing: {}", e)))?;

        Ok(())
    }

    pub fn new_mono(sample_rate: u32, data: Array1<f32>, format: AudioFormat) -> Self {
        let total_samples = data.len() as u32;
        let header = AudioHeader::new(sample_rate, 1, format, total_samples);

        WavAudio {
            header,
            data: AudioData::Mono(data),
        }
    }

    /// Frames in rows, one column per channel.
    pub fn new_multichannel(sample_rate: u32, frames: Array2<f32>, format: AudioFormat) -> Result<Self> {
        if frames.ncols() == 0 || frames.ncols() > u16::MAX as usize {
            return Err(PhidelityError::encode(format!("Unsupported channel count: {}", frames.ncols())));
        }
        let header = AudioHeader::new(sample_rate, frames.ncols() as u16, format, frames.nrows() as u32);

        Ok(WavAudio {
            header,
            data: AudioData::MultiChannel(frames),
        })
    }

    pub fn from_waveform(waveform: &Waveform, format: AudioFormat) -> Self {
        Self::new_mono(waveform.sample_rate, waveform.samples.clone(), format)
    }

    /// Downmix to a single-channel waveform at the file's sample rate.
    pub fn into_waveform(self) -> Waveform {
        let samples = match self.data {
            AudioData::Mono(data) => data,
            multi => multi.to_mono(),
        };
        Waveform::new(samples, self.header.sample_rate)
    }

    pub fn data(&self) -> &AudioData {
        &self.data
    }

    pub fn sample_rate(&self) -> u32 {
        self.header.sample_rate
    }

    pub fn channels(&self) -> u16 {
        self.header.channels
    }

    pub fn total_samples(&self) -> u32 {
        self.header.total_samples
    }

    pub fn duration(&self) -> f64 {
        self.header.duration
    }

    pub fn format(&self) -> AudioFormat {
        self.header.format
    }
}

/// Append `.wav` unless the path already ends with it (any case).
pub fn ensure_wav_extension<P: AsRef<Path>>(path: P) -> PathBuf {
    let path = path.as_ref();
    if has_wav_extension(path) {
        return path.to_path_buf();
    }
    let mut name = path.as_os_str().to_os_string();
    name.push(".");
    name.push(WAV_EXTENSION);
    PathBuf::from(name)
}

pub fn has_wav_extension<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref()
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case(WAV_EXTENSION))
        .unwrap_or(false)
}
