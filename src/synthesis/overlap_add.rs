//! Overlap-add reconstruction of grain sequences

use ndarray::{s, Array1};
use super::grains::Grain;

/// Length covered by `num_grains` grains placed `hop_size` apart.
pub fn reconstructed_span(num_grains: usize, grain_size: usize, hop_size: usize) -> usize {
    if num_grains == 0 {
        return 0;
    }
    (num_grains - 1) * hop_size + grain_size
}

/// Sum grain `i` into a zeroed buffer at `i * hop_size`.
///
/// Grains are raw-added with no envelope. Any part of a grain that falls past
/// `buffer_len` is dropped.
pub fn overlap_add(grains: &[Grain<'_>], hop_size: usize, buffer_len: usize) -> Array1<f32> {
    let mut output = Array1::zeros(buffer_len);

    for (i, grain) in grains.iter().enumerate() {
        let start = i * hop_size;
        if start >= buffer_len {
            break;
        }
        let end = (start + grain.len()).min(buffer_len);

        let mut target = output.slice_mut(s![start..end]);
        target += &grain.samples.slice(s![..end - start]);
    }

    output
}

/// Cut `output` down to `max_len` samples when it is longer.
pub fn truncate_to(output: Array1<f32>, max_len: usize) -> Array1<f32> {
    if output.len() > max_len {
        output.slice_move(s![..max_len])
    } else {
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::ArrayView1;

    fn grain(samples: &[f32]) -> Grain<'_> {
        Grain { source_offset: 0, samples: ArrayView1::from(samples) }
    }

    #[test]
    fn test_span() {
        assert_eq!(reconstructed_span(100, 1024, 512), 51652);
        assert_eq!(reconstructed_span(100, 10, 7), 703);
        assert_eq!(reconstructed_span(0, 1024, 512), 0);
    }

    #[test]
    fn test_overlapping_regions_sum() {
        let a = [0.0, 1.0, 2.0, 3.0];
        let b = [5.0, 6.0, 7.0, 8.0];
        let c = [2.0, 3.0, 4.0, 5.0];
        let grains = vec![grain(&a), grain(&b), grain(&c)];

        let output = overlap_add(&grains, 2, 10);
        assert_eq!(output.to_vec(), vec![0.0, 1.0, 7.0, 9.0, 9.0, 11.0, 4.0, 5.0, 0.0, 0.0]);
    }

    #[test]
    fn test_tail_is_clipped() {
        let a = [0.0, 1.0, 2.0, 3.0];
        let grains = vec![grain(&a), grain(&a), grain(&a)];

        let output = overlap_add(&grains, 2, 6);
        assert_eq!(output.to_vec(), vec![0.0, 1.0, 2.0, 4.0, 2.0, 4.0]);
    }

    #[test]
    fn test_grains_past_buffer_are_skipped() {
        let a = [1.0, 1.0];
        let grains = vec![grain(&a); 5];

        let output = overlap_add(&grains, 2, 3);
        assert_eq!(output.to_vec(), vec![1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_truncate() {
        let long = Array1::from(vec![1.0, 2.0, 3.0, 4.0]);
        assert_eq!(truncate_to(long.clone(), 2).to_vec(), vec![1.0, 2.0]);
        assert_eq!(truncate_to(long.clone(), 4), long);
        assert_eq!(truncate_to(long.clone(), 9), long);
    }
}
