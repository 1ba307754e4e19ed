//! Inter-call pacing and checkpoint cadence.

use derive_getters::Getters;
use diarist_error::{BuilderError, BuilderErrorKind, ConfigError, DiaristResult};
use std::time::Duration;
use tracing::trace;

/// How fast the runner walks the pending set and how often it persists.
///
/// # Examples
///
/// ```
/// use diarist_rate_limit::Pacing;
/// use std::time::Duration;
///
/// // 15 requests per minute, checkpoint every 5 rows
/// let remote = Pacing::per_minute(15, 5)?;
/// assert_eq!(*remote.delay(), Duration::from_secs(4));
/// assert_eq!(*remote.checkpoint_interval(), 5);
/// # Ok::<(), diarist_error::DiaristError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, derive_builder::Builder)]
#[builder(build_fn(private, name = "build_internal"))]
pub struct Pacing {
    /// Sleep after each generation call
    #[builder(default = "Duration::ZERO")]
    delay: Duration,
    /// Persist the table after this many processed rows
    #[builder(default = "10")]
    checkpoint_interval: usize,
}

impl PacingBuilder {
    /// Build and validate the pacing.
    ///
    /// # Errors
    ///
    /// Returns an error if `checkpoint_interval` is zero.
    pub fn build(&self) -> DiaristResult<Pacing> {
        let pacing = self
            .build_internal()
            .map_err(|e| BuilderError::new(BuilderErrorKind::ValidationFailed(e.to_string())))?;
        pacing.validate()?;
        Ok(pacing)
    }
}

impl Pacing {
    /// Creates a new pacing builder.
    pub fn builder() -> PacingBuilder {
        PacingBuilder::default()
    }

    /// Delay of `60 / requests_per_minute` seconds between calls.
    ///
    /// # Errors
    ///
    /// Returns an error if `requests_per_minute` or `checkpoint_interval` is zero.
    pub fn per_minute(requests_per_minute: u32, checkpoint_interval: usize) -> DiaristResult<Self> {
        if requests_per_minute == 0 {
            return Err(ConfigError::new("requests_per_minute must be positive").into());
        }
        Self::fixed(
            Duration::from_secs_f64(60.0 / f64::from(requests_per_minute)),
            checkpoint_interval,
        )
    }

    /// Constant delay between calls.
    ///
    /// # Errors
    ///
    /// Returns an error if `checkpoint_interval` is zero.
    pub fn fixed(delay: Duration, checkpoint_interval: usize) -> DiaristResult<Self> {
        let pacing = Self {
            delay,
            checkpoint_interval,
        };
        pacing.validate()?;
        Ok(pacing)
    }

    /// No delay, checkpoint every `checkpoint_interval` rows.
    pub fn unthrottled(checkpoint_interval: usize) -> DiaristResult<Self> {
        Self::fixed(Duration::ZERO, checkpoint_interval)
    }

    /// Validates that the checkpoint interval is at least one row.
    pub fn validate(&self) -> DiaristResult<()> {
        if self.checkpoint_interval == 0 {
            return Err(ConfigError::new("checkpoint_interval must be at least 1").into());
        }
        Ok(())
    }

    /// Whether `processed` rows completes a checkpoint block.
    pub fn is_checkpoint(&self, processed: usize) -> bool {
        processed > 0 && processed % self.checkpoint_interval == 0
    }

    /// Block the runner for the configured delay.
    pub async fn pause(&self) {
        if self.delay.is_zero() {
            return;
        }
        trace!(delay_ms = self.delay.as_millis() as u64, "Pacing");
        tokio::time::sleep(self.delay).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checkpoint_every_block() {
        let pacing = Pacing::unthrottled(5).unwrap();
        let hits: Vec<_> = (0..=12).filter(|n| pacing.is_checkpoint(*n)).collect();
        assert_eq!(hits, vec![5, 10]);
    }

    #[test]
    fn zero_interval_rejected() {
        assert!(Pacing::unthrottled(0).is_err());
        assert!(Pacing::per_minute(0, 5).is_err());
    }

    #[test]
    fn builder_defaults() {
        let pacing = Pacing::builder().build().unwrap();
        assert_eq!(*pacing.delay(), Duration::ZERO);
        assert_eq!(*pacing.checkpoint_interval(), 10);
    }

    #[test]
    fn builder_rejects_zero_interval() {
        assert!(Pacing::builder().checkpoint_interval(0).build().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn pause_sleeps_for_delay() {
        let pacing = Pacing::fixed(Duration::from_millis(250), 1).unwrap();
        let start = tokio::time::Instant::now();
        pacing.pause().await;
        assert!(start.elapsed() >= Duration::from_millis(250));
    }
}
