//! Pipeline settings.
//!
//! Both settings types are plain values with defaults; the pipeline only ever
//! reads them.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::AnimationError;
use crate::optimizer::OptimizeHeuristic;

/// Settings for the keyframe optimizer.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OptimizeSettings {
    /// Upper bound on optimizer passes. Passing stops early once a pass
    /// removes nothing.
    pub passes: usize,
    /// Log a summary at info level after each optimization.
    pub performance_log: bool,
    pub optimize_duplicates: bool,
    pub optimize_similar_points: bool,
    /// Maximum per-component difference for two values to count as similar.
    /// Also bounds the slope difference in the slope heuristic.
    pub difference_threshold: f64,
    /// Maximum time gap for two points to count as close in time.
    pub time_difference_threshold: f64,
    pub optimize_similar_points_slope: bool,
    pub y_intercept_threshold: f64,
    /// Caller heuristics, run before the built-in ones.
    #[serde(skip)]
    pub additional_heuristics: Vec<Arc<dyn OptimizeHeuristic>>,
}

impl Default for OptimizeSettings {
    fn default() -> Self {
        Self {
            passes: 5,
            performance_log: false,
            optimize_duplicates: true,
            optimize_similar_points: true,
            difference_threshold: 0.001,
            time_difference_threshold: 0.0025,
            optimize_similar_points_slope: true,
            y_intercept_threshold: 0.01,
            additional_heuristics: Vec::new(),
        }
    }
}

impl OptimizeSettings {
    /// Settings with every built-in heuristic off.
    pub fn disabled() -> Self {
        Self {
            optimize_duplicates: false,
            optimize_similar_points: false,
            optimize_similar_points_slope: false,
            ..Self::default()
        }
    }
}

/// Settings for baking and the optimizer run that follows it.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AnimationSettings {
    /// Samples per unit of animation time (inclusive of both ends).
    pub bake_sample_frequency: u32,
    pub optimize_settings: OptimizeSettings,
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            bake_sample_frequency: 32,
            optimize_settings: OptimizeSettings::default(),
        }
    }
}

impl AnimationSettings {
    /// Load settings from JSON; missing fields keep their defaults.
    pub fn from_json(s: &str) -> Result<Self, AnimationError> {
        Ok(serde_json::from_str(s)?)
    }

    /// Number of bake steps per unit of time (`bake_sample_frequency - 1`).
    pub fn sample_divisions(&self) -> Result<u32, AnimationError> {
        if self.bake_sample_frequency < 2 {
            return Err(AnimationError::InvalidSettings {
                reason: format!(
                    "bake sample frequency must be at least 2, got {}",
                    self.bake_sample_frequency
                ),
            });
        }
        Ok(self.bake_sample_frequency - 1)
    }

    /// Time between two bake samples.
    pub fn sample_step(&self) -> Result<f64, AnimationError> {
        Ok(1.0 / f64::from(self.sample_divisions()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let s = AnimationSettings::from_json(
            r#"{ "bakeSampleFrequency": 3, "optimizeSettings": { "passes": 1 } }"#,
        )
        .unwrap();
        assert_eq!(s.bake_sample_frequency, 3);
        assert_eq!(s.optimize_settings.passes, 1);
        assert!(s.optimize_settings.optimize_duplicates);
        assert_eq!(s.optimize_settings.difference_threshold, 0.001);
    }

    #[test]
    fn tiny_frequency_is_rejected() {
        let s = AnimationSettings {
            bake_sample_frequency: 1,
            ..Default::default()
        };
        assert!(matches!(
            s.sample_step(),
            Err(AnimationError::InvalidSettings { .. })
        ));
        assert_eq!(AnimationSettings::default().sample_divisions(), Ok(31));
    }
}
