pub(crate) mod scoring;
pub use scoring::{IDEAL_DURATION, compute_sleep_score, normalize_quality, quality_label};

pub(crate) mod record;
pub use record::DailySleepRecord;

pub mod analytics;
pub use analytics::{
    average_sleep_score_across_days, best_sleep_day, daily_total_durations, detect_spike,
    detect_under_sleep_days, duration_trend, overall_average_duration, restful_days,
};

pub(crate) mod report;
pub use report::SleepReport;

pub mod helpers;

pub use sleeptrack_types::{
    AnalyticsConfig, QualityLabel, RestfulThresholds, Result, Segment, SleepError, SleepSummary,
    Trend,
};
