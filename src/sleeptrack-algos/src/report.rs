use std::fmt::Display;

use serde::Serialize;
use sleeptrack_types::{AnalyticsConfig, Result, SleepSummary, Trend};

use crate::{
    DailySleepRecord,
    analytics::{
        average_sleep_score_across_days, best_sleep_day, daily_total_durations,
        detect_spike, detect_under_sleep_days, duration_trend, ensure_threshold,
        overall_average_duration, restful_days,
    },
};

/// Cross-day analytics for a run of records, computed in one go.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SleepReport {
    pub days: Vec<SleepSummary>,
    pub overall_average_duration: f64,
    pub average_sleep_score: f64,
    pub best_day: Option<String>,
    pub under_sleep_days: Vec<String>,
    pub restful_days: Vec<String>,
    /// Day-over-day direction of total sleep, empty for fewer than two days.
    pub trend: Vec<Trend>,
    pub spike: bool,
}

impl SleepReport {
    pub fn new(records: &[DailySleepRecord], config: &AnalyticsConfig) -> Result<Self> {
        ensure_threshold(config.under_sleep_threshold)?;
        ensure_threshold(config.spike_threshold)?;

        if records.is_empty() {
            return Ok(Self::default());
        }

        let totals = daily_total_durations(records);
        let (trend, spike) = if totals.len() < 2 {
            (Vec::new(), false)
        } else {
            (
                duration_trend(&totals)?,
                detect_spike(&totals, config.spike_threshold)?,
            )
        };

        let report = Self {
            days: records.iter().map(DailySleepRecord::summary).collect(),
            overall_average_duration: overall_average_duration(records),
            average_sleep_score: average_sleep_score_across_days(records),
            best_day: best_sleep_day(records).map(String::from),
            under_sleep_days: owned(detect_under_sleep_days(
                records,
                config.under_sleep_threshold,
            )?),
            restful_days: owned(restful_days(records, config.restful)),
            trend,
            spike,
        };

        log::debug!(
            "sleep report over {} days, average score {}",
            report.days.len(),
            report.average_sleep_score
        );
        Ok(report)
    }
}

fn owned(dates: Vec<&str>) -> Vec<String> {
    dates.into_iter().map(String::from).collect()
}

impl Display for SleepReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for day in &self.days {
            f.write_fmt(format_args!(
                "{}: {}h, quality {}, score {} ({})\n",
                day.date,
                day.total_duration,
                day.avg_quality,
                day.avg_sleep_score,
                day.quality_label
            ))?;
        }

        let trend = self
            .trend
            .iter()
            .map(Trend::to_string)
            .collect::<Vec<_>>()
            .join(", ");

        f.write_fmt(format_args!(
            "Average duration: {}h\nAverage score: {}\nBest day: {}\n",
            self.overall_average_duration,
            self.average_sleep_score,
            self.best_day.as_deref().unwrap_or("-"),
        ))?;
        f.write_fmt(format_args!(
            "Under-slept days: {}\nRestful days: {}\nTrend: [{}]\nSpike: {}",
            self.under_sleep_days.join(", "),
            self.restful_days.join(", "),
            trend,
            self.spike,
        ))
    }
}
