//! Sample rate conversion applied on load

use ndarray::{Array1, ArrayView1};
use crate::audio::Waveform;
use crate::error::{PhidelityError, Result};

pub struct AudioConverter;

impl AudioConverter {
    /// Convert sample rate using linear interpolation
    pub fn convert_sample_rate(waveform: &Waveform, target_sample_rate: u32) -> Result<Waveform> {
        if target_sample_rate == 0 {
            return Err(PhidelityError::decode("Target sample rate cannot be 0"));
        }
        if waveform.sample_rate == target_sample_rate || waveform.is_empty() {
            return Ok(Waveform::new(waveform.samples.clone(), target_sample_rate));
        }

        let ratio = target_sample_rate as f64 / waveform.sample_rate as f64;
        let new_length = (waveform.len() as f64 * ratio) as usize;
        let samples = Self::resample_mono(waveform.samples.view(), new_length, ratio);

        Ok(Waveform::new(samples, target_sample_rate))
    }

    fn resample_mono(data: ArrayView1<f32>, new_length: usize, ratio: f64) -> Array1<f32> {
        let old_length = data.len();

        Array1::from_shape_fn(new_length, |i| {
            let old_pos = i as f64 / ratio;
            let old_index = old_pos.floor() as usize;
            let fraction = (old_pos - old_index as f64) as f32;

            if old_index >= old_length - 1 {
                data[old_length - 1]
            } else {
                data[old_index] + (data[old_index + 1] - data[old_index]) * fraction
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resample_same_rate() {
        let waveform = Waveform::from_vec(vec![0.1, 0.2, 0.3], 16000);
        let result = AudioConverter::convert_sample_rate(&waveform, 16000).unwrap();
        assert_eq!(result, waveform);
    }

    #[test]
    fn test_resample_upsample() {
        let waveform = Waveform::from_vec(vec![0.0, 1.0], 8000);
        let result = AudioConverter::convert_sample_rate(&waveform, 16000).unwrap();
        assert_eq!(result.sample_rate, 16000);
        assert_eq!(result.len(), 4);
        assert!((result.samples[1] - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_resample_downsample() {
        let waveform = Waveform::from_vec((0..44100).map(|i| i as f32).collect(), 44100);
        let result = AudioConverter::convert_sample_rate(&waveform, 22050).unwrap();
        assert_eq!(result.len(), 22050);
        assert_eq!(result.samples[10], 20.0);
    }

    #[test]
    fn test_zero_target_rate() {
        let waveform = Waveform::from_vec(vec![0.0, 1.0], 8000);
        assert!(AudioConverter::convert_sample_rate(&waveform, 0).is_err());
    }
}
