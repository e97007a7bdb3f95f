//! Decoded single-channel audio

use ndarray::Array1;

/// Mono samples with their sample rate.
#[derive(Debug, Clone, PartialEq)]
pub struct Waveform {
    pub samples: Array1<f32>,
    pub sample_rate: u32,
}

impl Waveform {
    pub fn new(samples: Array1<f32>, sample_rate: u32) -> Self {
        Self { samples, sample_rate }
    }

    pub fn from_vec(samples: Vec<f32>, sample_rate: u32) -> Self {
        Self::new(Array1::from(samples), sample_rate)
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn duration(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.len() as f64 / self.sample_rate as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_waveform_duration() {
        let waveform = Waveform::from_vec(vec![0.0; 22050], 44100);
        assert_eq!(waveform.len(), 22050);
        assert!((waveform.duration() - 0.5).abs() < f64::EPSILON);
        assert!(!waveform.is_empty());
    }
}
