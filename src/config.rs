//! Tour configuration: delays, quiz thresholds and where questions come from.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::nav::NavTimings;
use crate::quiz::Thresholds;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("thresholds must satisfy good ({good}%) <= excellent ({excellent}%) <= 100%")]
    Thresholds { good: u32, excellent: u32 },
}

/// Delays in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Timings {
    pub warmup_ms: u64,
    pub fade_out_ms: u64,
    pub fade_in_ms: u64,
    pub reveal_ms: u64,
    pub story_step_ms: u64,
    pub redirect_ms: u64,
    pub prediction_step_ms: u64,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            warmup_ms: 2000,
            fade_out_ms: 300,
            fade_in_ms: 100,
            reveal_ms: 2000,
            story_step_ms: 4000,
            redirect_ms: 2000,
            prediction_step_ms: 4000,
        }
    }
}

impl Timings {
    /// Every delay divided by `factor`, for demos and recordings.
    pub fn scaled_down(self, factor: u64) -> Self {
        let factor = factor.max(1);
        Self {
            warmup_ms: self.warmup_ms / factor,
            fade_out_ms: self.fade_out_ms / factor,
            fade_in_ms: self.fade_in_ms / factor,
            reveal_ms: self.reveal_ms / factor,
            story_step_ms: self.story_step_ms / factor,
            redirect_ms: self.redirect_ms / factor,
            prediction_step_ms: self.prediction_step_ms / factor,
        }
    }

    pub fn nav(&self) -> NavTimings {
        NavTimings {
            warmup: Duration::from_millis(self.warmup_ms),
            fade_out: Duration::from_millis(self.fade_out_ms),
            fade_in: Duration::from_millis(self.fade_in_ms),
        }
    }

    pub fn reveal(&self) -> Duration {
        Duration::from_millis(self.reveal_ms)
    }

    pub fn story_step(&self) -> Duration {
        Duration::from_millis(self.story_step_ms)
    }

    pub fn redirect(&self) -> Duration {
        Duration::from_millis(self.redirect_ms)
    }

    pub fn prediction_step(&self) -> Duration {
        Duration::from_millis(self.prediction_step_ms)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TourConfig {
    pub timings: Timings,
    pub thresholds: Thresholds,
    /// Question bank to use instead of the built-in one.
    pub questions: Option<PathBuf>,
}

impl TourConfig {
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: TourConfig =
            serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let Thresholds {
            excellent_percent: excellent,
            good_percent: good,
        } = self.thresholds;
        if good > excellent || excellent > 100 {
            return Err(ConfigError::Thresholds { good, excellent });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: TourConfig =
            serde_json::from_str(r#"{"timings":{"reveal_ms":500},"thresholds":{"good_percent":50}}"#)
                .unwrap();

        assert_eq!(config.timings.reveal_ms, 500);
        assert_eq!(config.timings.fade_out_ms, 300);
        assert_eq!(config.thresholds.good_percent, 50);
        assert_eq!(config.thresholds.excellent_percent, 80);
        assert!(config.questions.is_none());
    }

    #[test]
    fn test_scaled_down() {
        let timings = Timings::default().scaled_down(10);
        assert_eq!(timings.fade_out_ms, 30);
        assert_eq!(timings.story_step_ms, 400);
        assert_eq!(timings.prediction_step_ms, 400);
        assert_eq!(Timings::default().scaled_down(0), Timings::default());
    }

    #[test]
    fn test_default_nav_timings_match() {
        assert_eq!(Timings::default().nav(), NavTimings::default());
    }

    #[test]
    fn test_validate_rejects_inverted_thresholds() {
        let mut config = TourConfig::default();
        assert!(config.validate().is_ok());

        config.thresholds.good_percent = 90;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Thresholds {
                good: 90,
                excellent: 80
            })
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = TourConfig::from_json_file("/no/such/config.json").unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
