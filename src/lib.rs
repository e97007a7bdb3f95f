//! Phidelity - Granular Synthesis for WAV Files
//!
//! Cuts a waveform into grains at seeded random offsets and sums them back
//! together at a fixed hop.

pub mod audio;
pub mod config;
pub mod error;
pub mod platform;
pub mod synthesis;

pub use config::{Config, Args, GrainConfig, GrainPreset};
pub use error::{PhidelityError, Result};
pub use synthesis::{GranularSynthesizer, SynthesisReport, SynthesisRequest};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Debug level when verbose, info otherwise. `RUST_LOG` takes precedence.
pub fn init_logging(verbose: bool) {
    env_logger::Builder::new()
        .filter_level(if verbose { log::LevelFilter::Debug } else { log::LevelFilter::Info })
        .parse_default_env()
        .try_init()
        .ok();
}

pub fn get_library_info() -> LibraryInfo {
    LibraryInfo {
        name: NAME.to_string(),
        version: VERSION.to_string(),
        description: DESCRIPTION.to_string(),
    }
}

#[derive(Debug, Clone)]
pub struct LibraryInfo {
    pub name: String,
    pub version: String,
    pub description: String,
}

impl std::fmt::Display for LibraryInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} v{} - {}", self.name, self.version, self.description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_info() {
        let info = get_library_info();
        assert_eq!(info.name, "phidelity-rs");
        assert!(info.to_string().contains(VERSION));
    }
}
