//! Configuration management for granular synthesis

use crate::audio::AudioFormat;
use crate::error::{PhidelityError, Result};
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_OUTPUT_NAME: &str = "output";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub input_path: PathBuf,
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,
    #[serde(default)]
    pub grains: GrainConfig,
    #[serde(default)]
    pub audio: AudioConfig,
    #[serde(default)]
    pub processing: ProcessingConfig,
}

/// Grain extraction and overlap-add parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GrainConfig {
    pub num_grains: usize,
    pub grain_size: usize,
    pub overlap_ratio: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioConfig {
    /// Resample decoded audio to this rate; `None` keeps the file's rate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_sample_rate: Option<u32>,
    pub output_format: AudioFormat,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessingConfig {
    pub verbose: bool,
}

/// The two grain shapes the tool ships with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum GrainPreset {
    /// 1024-sample grains, half overlapping
    Long,
    /// 10-sample grains, a quarter overlapping
    Short,
}

impl GrainPreset {
    pub fn grain_size(self) -> usize {
        match self {
            GrainPreset::Long => 1024,
            GrainPreset::Short => 10,
        }
    }

    pub fn overlap_ratio(self) -> f64 {
        match self {
            GrainPreset::Long => 0.5,
            GrainPreset::Short => 0.25,
        }
    }
}

fn default_output_path() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_NAME)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_path: PathBuf::new(),
            output_path: default_output_path(),
            grains: GrainConfig::default(),
            audio: AudioConfig::default(),
            processing: ProcessingConfig::default(),
        }
    }
}

impl Default for GrainConfig {
    fn default() -> Self {
        Self::from_preset(GrainPreset::Long)
    }
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            target_sample_rate: None,
            output_format: AudioFormat::Int16,
        }
    }
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self { verbose: false }
    }
}

impl GrainConfig {
    pub fn from_preset(preset: GrainPreset) -> Self {
        Self {
            num_grains: 100,
            grain_size: preset.grain_size(),
            overlap_ratio: preset.overlap_ratio(),
            seed: None,
        }
    }

    /// Distance between the starts of consecutive placed grains.
    pub fn hop_size(&self) -> usize {
        (self.grain_size as f64 * (1.0 - self.overlap_ratio)).floor() as usize
    }

    pub fn validate(&self) -> Result<()> {
        if self.num_grains == 0 {
            return Err(PhidelityError::config("Grain count must be greater than 0"));
        }
        if self.grain_size == 0 {
            return Err(PhidelityError::config("Grain size must be greater than 0"));
        }
        if !(0.0..1.0).contains(&self.overlap_ratio) {
            return Err(PhidelityError::config("Overlap ratio must be in range [0.0, 1.0)"));
        }
        if self.hop_size() == 0 {
            return Err(PhidelityError::config(format!(
                "Overlap ratio {} leaves no hop for grain size {}",
                self.overlap_ratio, self.grain_size
            )));
        }
        Ok(())
    }
}

impl Config {
    pub fn verbose(&self) -> bool {
        self.processing.verbose
    }

    pub fn hop_size(&self) -> usize {
        self.grains.hop_size()
    }

    /// Validate configuration parameter validity
    pub fn validate(&self) -> Result<()> {
        self.grains.validate()?;

        if let Some(rate) = self.audio.target_sample_rate {
            if rate == 0 {
                return Err(PhidelityError::config("Sample rate must be greater than 0"));
            }
            if rate > 192000 {
                return Err(PhidelityError::config("Sample rate cannot exceed 192000 Hz"));
            }
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Parser)]
#[command(name = "phidelity", about = "Granular synthesis tool for WAV files", version, author)]
pub struct Args {
    #[arg(short = 'i', long = "input", help = "Input audio file path (WAV format), overrides the config file")]
    pub input: Option<String>,

    #[arg(short = 'o', long = "output", help = "Output file name, .wav is appended when missing [default: output]")]
    pub output: Option<String>,

    #[arg(short = 'n', long = "num-grains", help = "Number of grains drawn from the input")]
    pub num_grains: Option<usize>,

    #[arg(short = 'g', long = "grain-size", help = "Grain length (number of samples)")]
    pub grain_size: Option<usize>,

    #[arg(short = 'l', long = "overlap", help = "Grain overlap ratio (0.0 - 1.0)")]
    pub overlap: Option<f64>,

    #[arg(short = 'p', long = "preset", value_enum, help = "Grain preset, overridden by --grain-size and --overlap")]
    pub preset: Option<GrainPreset>,

    #[arg(short = 's', long = "seed", help = "Seed for the grain offsets [default: current time in ms]")]
    pub seed: Option<u64>,

    #[arg(short = 'r', long = "sample-rate", help = "Resample the input to this rate (Hz) before synthesis")]
    pub sample_rate: Option<u32>,

    #[arg(long = "format", value_enum, help = "Output sample format")]
    pub format: Option<AudioFormat>,

    #[arg(short = 'c', long = "config", help = "Config file path (TOML format)")]
    pub config_file: Option<PathBuf>,

    #[arg(long = "init-config", help = "Write a default config file to this path and exit")]
    pub init_config: Option<PathBuf>,

    #[arg(long = "reveal", help = "Reveal the output file in the system file manager")]
    pub reveal: bool,

    #[arg(short = 'v', long = "verbose", help = "Enable verbose output mode")]
    pub verbose: bool,
}

impl Config {
    /// Create config from command line arguments
    pub fn from_args() -> Result<Self> {
        let args = Args::parse();
        Self::from_args_and_config(&args)
    }

    /// Create config from command line arguments and config file
    pub fn from_args_and_config(args: &Args) -> Result<Self> {
        let mut config = if let Some(config_path) = &args.config_file {
            Self::from_file(config_path)?
        } else {
            Self::default()
        };

        // Explicit command line arguments override config file settings
        if let Some(input) = &args.input {
            config.input_path = PathBuf::from(input);
        }
        if let Some(output) = &args.output {
            config.output_path = PathBuf::from(output);
        }
        if let Some(preset) = args.preset {
            config.grains.grain_size = preset.grain_size();
            config.grains.overlap_ratio = preset.overlap_ratio();
        }
        if let Some(num_grains) = args.num_grains {
            config.grains.num_grains = num_grains;
        }
        if let Some(grain_size) = args.grain_size {
            config.grains.grain_size = grain_size;
        }
        if let Some(overlap) = args.overlap {
            config.grains.overlap_ratio = overlap;
        }
        if args.seed.is_some() {
            config.grains.seed = args.seed;
        }
        if args.sample_rate.is_some() {
            config.audio.target_sample_rate = args.sample_rate;
        }
        if let Some(format) = args.format {
            config.audio.output_format = format;
        }
        config.processing.verbose |= args.verbose;

        config.validate()?;

        Ok(config)
    }

    /// Load config from TOML config file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| PhidelityError::config(format!("Failed to read config file: {}", e)))?;

        toml::from_str(&content)
            .map_err(|e| PhidelityError::config(format!("Failed to parse config file: {}", e)))
    }

    /// Save config to file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| PhidelityError::config(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)
            .map_err(|e| PhidelityError::config(format!("Failed to write config file: {}", e)))
    }

    /// Create default config file
    pub fn create_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        Self::default().save_to_file(path)
    }
}
