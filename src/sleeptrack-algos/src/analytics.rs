use sleeptrack_types::{AnalyticsConfig, RestfulThresholds, Result, SleepError, Trend};

use crate::{
    DailySleepRecord,
    helpers::math::{mean, round_float},
};

pub const DEFAULT_UNDER_SLEEP_THRESHOLD: f64 = AnalyticsConfig::DEFAULT_UNDER_SLEEP_THRESHOLD;
pub const DEFAULT_SPIKE_THRESHOLD: f64 = AnalyticsConfig::DEFAULT_SPIKE_THRESHOLD;

/// Mean duration of every segment of every record.
pub fn overall_average_duration(records: &[DailySleepRecord]) -> f64 {
    let durations = records
        .iter()
        .flat_map(|r| r.segments().iter().map(|s| s.duration()))
        .collect::<Vec<_>>();
    round_float(mean(&durations))
}

/// Date of the record with the highest average sleep score. Ties keep the earliest record.
pub fn best_sleep_day(records: &[DailySleepRecord]) -> Option<&str> {
    let (first, rest) = records.split_first()?;

    let mut best = first;
    let mut best_score = first.average_sleep_score();
    for record in rest {
        let score = record.average_sleep_score();
        if score > best_score {
            best_score = score;
            best = record;
        }
    }

    log::trace!("best sleep day {} with score {best_score}", best.date());
    Some(best.date())
}

/// Dates of records having at least one segment shorter than `threshold`.
pub fn detect_under_sleep_days(
    records: &[DailySleepRecord],
    threshold: f64,
) -> Result<Vec<&str>> {
    ensure_threshold(threshold)?;

    Ok(records
        .iter()
        .filter(|r| r.segments().iter().any(|s| s.duration() < threshold))
        .map(DailySleepRecord::date)
        .collect())
}

/// Dates of records on which every segment meets `thresholds`.
pub fn restful_days(records: &[DailySleepRecord], thresholds: RestfulThresholds) -> Vec<&str> {
    records
        .iter()
        .filter(|r| r.is_restful(thresholds))
        .map(DailySleepRecord::date)
        .collect()
}

/// Total slept duration of each record, in input order.
pub fn daily_total_durations(records: &[DailySleepRecord]) -> Vec<f64> {
    records.iter().map(DailySleepRecord::total_duration).collect()
}

/// True when two consecutive durations differ by at least `threshold`.
pub fn detect_spike(durations: &[f64], threshold: f64) -> Result<bool> {
    ensure_threshold(threshold)?;
    ensure_sequence(durations)?;

    Ok(durations.windows(2).any(|w| (w[1] - w[0]).abs() >= threshold))
}

pub fn duration_trend(durations: &[f64]) -> Result<Vec<Trend>> {
    ensure_sequence(durations)?;

    Ok(durations
        .windows(2)
        .map(|w| Trend::between(w[0], w[1]))
        .collect())
}

/// Mean sleep score of every segment of every record.
pub fn average_sleep_score_across_days(records: &[DailySleepRecord]) -> f64 {
    let scores = records
        .iter()
        .flat_map(|r| r.sleep_scores())
        .collect::<Vec<_>>();
    round_float(mean(&scores))
}

pub(crate) fn ensure_threshold(threshold: f64) -> Result<()> {
    if threshold.is_finite() {
        Ok(())
    } else {
        Err(SleepError::argument(format!(
            "threshold must be numeric, got {threshold}"
        )))
    }
}

fn ensure_sequence(durations: &[f64]) -> Result<()> {
    if durations.len() < 2 {
        return Err(SleepError::value(format!(
            "at least two durations are required, got {}",
            durations.len()
        )));
    }
    if let Some(value) = durations.iter().find(|d| !d.is_finite()) {
        return Err(SleepError::argument(format!(
            "durations must be numeric, got {value}"
        )));
    }
    Ok(())
}
