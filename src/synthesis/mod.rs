//! Granular Synthesis Pipeline

pub mod clock;
pub mod grains;
pub mod offsets;
pub mod overlap_add;
pub mod progress;
pub mod request;
pub mod seeder;
pub mod synthesizer;

pub use clock::{Clock, FixedClock, SystemClock};
pub use grains::{extract_grains, Grain};
pub use offsets::{FixedOffsets, OffsetSource, RandomOffsets};
pub use overlap_add::{overlap_add, reconstructed_span, truncate_to};
pub use progress::{LogProgress, NoProgress, ProgressObserver};
pub use request::SynthesisRequest;
pub use seeder::{fibonacci_pseudo_random, FibonacciSeeder, FIBONACCI_TABLE, FIBONACCI_TABLE_LEN};
pub use synthesizer::{GranularSynthesizer, SynthesisOutput, SynthesisReport};
