use crate::QualityLabel;

/// Per-day digest of a sleep record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SleepSummary {
    pub date: String,
    pub avg_quality: f64,
    pub total_duration: f64,
    pub avg_sleep_score: f64,
    pub quality_label: QualityLabel,
}
