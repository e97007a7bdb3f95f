//! Granular synthesizer: decode, extract grains, overlap-add, encode

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use log::{debug, info};
use crate::audio::{ensure_wav_extension, AudioIo, WavIo, Waveform};
use crate::config::{Config, GrainConfig};
use crate::error::Result;
use super::clock::{Clock, SystemClock};
use super::grains::extract_grains;
use super::offsets::{OffsetSource, RandomOffsets};
use super::overlap_add::{overlap_add, reconstructed_span, truncate_to};
use super::progress::ProgressObserver;
use super::request::SynthesisRequest;
use super::seeder::{fibonacci_pseudo_random, FibonacciSeeder};

#[derive(Debug)]
pub struct GranularSynthesizer<A: AudioIo = WavIo, C: Clock = SystemClock> {
    config: GrainConfig,
    io: A,
    seeder: FibonacciSeeder<C>,
}

/// Result of synthesizing one waveform in memory.
#[derive(Debug, Clone)]
pub struct SynthesisOutput {
    pub waveform: Waveform,
    /// Source offset of each grain, in placement order
    pub grain_offsets: Vec<usize>,
}

#[derive(Debug, Clone)]
pub struct SynthesisReport {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub seed: u64,
    /// Fibonacci value of the seed
    pub signature: u128,
    pub sample_rate: u32,
    pub input_samples: usize,
    pub output_samples: usize,
    pub hop_size: usize,
    pub grain_offsets: Vec<usize>,
    pub processing_time: Duration,
}

impl SynthesisReport {
    pub fn input_duration_seconds(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.input_samples as f64 / self.sample_rate as f64
    }

    pub fn real_time_factor(&self) -> f64 {
        let duration = self.input_duration_seconds();
        if duration > 0.0 {
            self.processing_time.as_secs_f64() / duration
        } else {
            0.0
        }
    }
}

impl GranularSynthesizer {
    /// WAV files and the system clock, configured from `config`.
    pub fn new(config: &Config) -> Result<Self> {
        Self::with_parts(config.grains.clone(), WavIo::new(&config.audio), SystemClock)
    }
}

impl<A: AudioIo, C: Clock> GranularSynthesizer<A, C> {
    pub fn with_parts(config: GrainConfig, io: A, clock: C) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            io,
            seeder: FibonacciSeeder::new(clock),
        })
    }

    pub fn config(&self) -> &GrainConfig {
        &self.config
    }

    pub fn io(&self) -> &A {
        &self.io
    }

    /// Rebuild `waveform` from randomly placed grains.
    ///
    /// The output keeps the input's sample rate and length.
    pub fn synthesize(
        &self,
        waveform: &Waveform,
        offsets: &mut dyn OffsetSource,
        progress: &mut dyn ProgressObserver,
    ) -> Result<SynthesisOutput> {
        let grain_size = self.config.grain_size;
        let hop_size = self.config.hop_size();

        let grains = extract_grains(
            waveform.samples.view(),
            self.config.num_grains,
            grain_size,
            offsets,
            progress,
        )?;

        let span = reconstructed_span(grains.len(), grain_size, hop_size);
        if span > waveform.len() {
            debug!("Grain span {} exceeds input length {}, clipping", span, waveform.len());
        }

        let output = overlap_add(&grains, hop_size, waveform.len());
        let output = truncate_to(output, waveform.len());

        Ok(SynthesisOutput {
            grain_offsets: grains.iter().map(|g| g.source_offset).collect(),
            waveform: Waveform::new(output, waveform.sample_rate),
        })
    }

    /// Decode `input_path`, synthesize, and encode to `output_path` (with `.wav` appended when missing).
    ///
    /// Offsets are drawn from a generator seeded with `seed`, or with the
    /// clock's current millisecond count when no seed is given. The input
    /// extension is not checked here; see [`Self::run_request`].
    pub fn process_file(
        &self,
        input_path: &Path,
        output_path: &Path,
        seed: Option<u64>,
        progress: &mut dyn ProgressObserver,
    ) -> Result<SynthesisReport> {
        let start_time = Instant::now();
        let seed = self.seeder.resolve_seed(seed);
        let signature = fibonacci_pseudo_random(seed);
        debug!("Seed {} (signature {})", seed, signature);

        let waveform = self.io.load(input_path)?;
        debug!(
            "Loaded {}: {} samples at {} Hz",
            input_path.display(), waveform.len(), waveform.sample_rate
        );

        let mut offsets = RandomOffsets::seeded(seed);
        let output = self.synthesize(&waveform, &mut offsets, progress)?;

        let output_path = ensure_wav_extension(output_path);
        self.io.save(&output_path, &output.waveform)?;

        let report = SynthesisReport {
            input_path: input_path.to_path_buf(),
            output_path,
            seed,
            signature,
            sample_rate: output.waveform.sample_rate,
            input_samples: waveform.len(),
            output_samples: output.waveform.len(),
            hop_size: self.config.hop_size(),
            grain_offsets: output.grain_offsets,
            processing_time: start_time.elapsed(),
        };

        info!(
            "Wrote {} ({} grains, {} samples, seed {})",
            report.output_path.display(), report.grain_offsets.len(), report.output_samples, seed
        );

        Ok(report)
    }

    /// Validate a user request, then run [`Self::process_file`].
    pub fn run_request(
        &self,
        request: &SynthesisRequest,
        progress: &mut dyn ProgressObserver,
    ) -> Result<SynthesisReport> {
        request.validate()?;
        self.process_file(&request.input_path(), &request.output_path(), request.seed, progress)
    }
}
