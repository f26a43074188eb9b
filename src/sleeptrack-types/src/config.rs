//! Thresholds used by restfulness checks and cross-day analytics.

/// Minimum duration (hours) and quality (0-100) every segment of a restful day must reach.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RestfulThresholds {
    pub duration: f64,
    pub quality: f64,
}

impl RestfulThresholds {
    pub const DEFAULT_DURATION: f64 = 7.0;
    pub const DEFAULT_QUALITY: f64 = 75.0;

    pub fn new(duration: f64, quality: f64) -> Self {
        Self { duration, quality }
    }
}

impl Default for RestfulThresholds {
    fn default() -> Self {
        Self {
            duration: Self::DEFAULT_DURATION,
            quality: Self::DEFAULT_QUALITY,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    /// A day is under-slept when any segment is strictly shorter than this.
    pub under_sleep_threshold: f64,
    /// Smallest change between consecutive days counted as a spike.
    pub spike_threshold: f64,
    pub restful: RestfulThresholds,
}

impl AnalyticsConfig {
    pub const DEFAULT_UNDER_SLEEP_THRESHOLD: f64 = 0.0;
    pub const DEFAULT_SPIKE_THRESHOLD: f64 = 2.0;
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            under_sleep_threshold: Self::DEFAULT_UNDER_SLEEP_THRESHOLD,
            spike_threshold: Self::DEFAULT_SPIKE_THRESHOLD,
            restful: RestfulThresholds::default(),
        }
    }
}
