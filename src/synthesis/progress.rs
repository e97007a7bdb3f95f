//! Progress reporting during grain extraction

use log::debug;
use crate::error::Result;

/// Receives the extraction progress in percent, once per grain.
///
/// Returning an error aborts the synthesis run with that error.
pub trait ProgressObserver {
    fn on_progress(&mut self, percent: f32) -> Result<()>;
}

impl<F> ProgressObserver for F
where
    F: FnMut(f32) -> Result<()>,
{
    fn on_progress(&mut self, percent: f32) -> Result<()> {
        self(percent)
    }
}

/// Ignores all progress.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressObserver for NoProgress {
    fn on_progress(&mut self, _percent: f32) -> Result<()> {
        Ok(())
    }
}

/// Logs every 10% step at debug level.
#[derive(Debug, Clone, Default)]
pub struct LogProgress {
    next_step: f32,
}

impl LogProgress {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProgressObserver for LogProgress {
    fn on_progress(&mut self, percent: f32) -> Result<()> {
        if percent >= self.next_step {
            debug!("Extracting grains: {:.0}%", percent);
            while self.next_step <= percent {
                self.next_step += 10.0;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PhidelityError;

    #[test]
    fn test_closure_observer() {
        let mut seen = Vec::new();
        {
            let mut observer = |p: f32| -> Result<()> {
                seen.push(p);
                Ok(())
            };
            observer.on_progress(1.0).unwrap();
            observer.on_progress(2.0).unwrap();
        }
        assert_eq!(seen, vec![1.0, 2.0]);
    }

    #[test]
    fn test_closure_error_passes_through() {
        let mut observer = |_: f32| -> Result<()> { Err(PhidelityError::io("ui gone")) };
        assert!(observer.on_progress(0.0).is_err());
    }

    #[test]
    fn test_log_progress_steps() {
        let mut observer = LogProgress::new();
        for i in 0..100 {
            observer.on_progress(i as f32).unwrap();
        }
        assert_eq!(observer.next_step, 100.0);
    }
}
