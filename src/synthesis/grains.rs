//! Grain extraction at random offsets

use log::debug;
use ndarray::{s, ArrayView1};
use crate::error::{PhidelityError, Result};
use super::offsets::OffsetSource;
use super::progress::ProgressObserver;

/// A fixed-length slice of the source waveform.
#[derive(Debug, Clone)]
pub struct Grain<'a> {
    /// Start of the slice in the source
    pub source_offset: usize,
    pub samples: ArrayView1<'a, f32>,
}

impl<'a> Grain<'a> {
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// Draw `num_grains` grains of `grain_size` samples, in draw order.
///
/// Each start is taken from `[0, len - grain_size)`, so the source must be
/// strictly longer than one grain. `progress` sees `i / num_grains * 100`
/// after grain `i` is taken.
pub fn extract_grains<'a>(
    source: ArrayView1<'a, f32>,
    num_grains: usize,
    grain_size: usize,
    offsets: &mut dyn OffsetSource,
    progress: &mut dyn ProgressObserver,
) -> Result<Vec<Grain<'a>>> {
    if source.len() <= grain_size {
        return Err(PhidelityError::insufficient_audio(source.len(), grain_size));
    }

    let upper = source.len() - grain_size;
    let mut grains = Vec::with_capacity(num_grains);

    for i in 0..num_grains {
        let start = offsets.next_offset(upper);
        grains.push(Grain {
            source_offset: start,
            samples: source.slice_move(s![start..start + grain_size]),
        });

        progress.on_progress(i as f32 / num_grains as f32 * 100.0)?;
    }

    debug!("Extracted {} grains of {} samples from {} samples", grains.len(), grain_size, source.len());
    Ok(grains)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::synthesis::offsets::{FixedOffsets, RandomOffsets};
    use crate::synthesis::progress::NoProgress;
    use ndarray::Array1;

    fn ramp(len: usize) -> Array1<f32> {
        Array1::from_iter((0..len).map(|i| i as f32))
    }

    #[test]
    fn test_grains_follow_offsets() {
        let source = ramp(20);
        let mut offsets = FixedOffsets::new(vec![0, 7, 15]);
        let grains = extract_grains(source.view(), 3, 4, &mut offsets, &mut NoProgress).unwrap();

        assert_eq!(grains.len(), 3);
        assert_eq!(grains[1].source_offset, 7);
        assert_eq!(grains[1].samples.to_vec(), vec![7.0, 8.0, 9.0, 10.0]);
        assert_eq!(grains[2].samples.to_vec(), vec![15.0, 16.0, 17.0, 18.0]);
    }

    #[test]
    fn test_random_grains_stay_in_bounds() {
        let source = ramp(2048);
        let mut offsets = RandomOffsets::seeded(9);
        let grains = extract_grains(source.view(), 100, 1024, &mut offsets, &mut NoProgress).unwrap();

        for grain in &grains {
            assert_eq!(grain.len(), 1024);
            assert!(grain.source_offset < 2048 - 1024);
            assert_eq!(grain.samples[0], grain.source_offset as f32);
        }
    }

    #[test]
    fn test_source_not_longer_than_grain() {
        for len in [0, 5, 10] {
            let source = ramp(len);
            let result = extract_grains(source.view(), 3, 10, &mut FixedOffsets::new(vec![0]), &mut NoProgress);
            match result {
                Err(PhidelityError::InsufficientAudio { length, grain_size }) => {
                    assert_eq!(length, len);
                    assert_eq!(grain_size, 10);
                }
                other => panic!("expected insufficient audio, got {:?}", other.map(|g| g.len())),
            }
        }
    }

    #[test]
    fn test_one_sample_longer_than_grain() {
        let source = ramp(11);
        let mut offsets = RandomOffsets::seeded(3);
        let grains = extract_grains(source.view(), 5, 10, &mut offsets, &mut NoProgress).unwrap();
        assert!(grains.iter().all(|g| g.source_offset == 0));
    }

    #[test]
    fn test_progress_once_per_grain() {
        let source = ramp(100);
        let mut seen = Vec::new();
        let mut observer = |p: f32| -> Result<()> {
            seen.push(p);
            Ok(())
        };
        extract_grains(source.view(), 4, 10, &mut RandomOffsets::seeded(1), &mut observer).unwrap();
        assert_eq!(seen, vec![0.0, 25.0, 50.0, 75.0]);
    }
}
