use sleeptrack_types::{QualityLabel, Result, SleepError};

use crate::helpers::math::round_float;

/// Hours of sleep that earn the full duration credit.
pub const IDEAL_DURATION: f64 = 8.0;
const DURATION_WEIGHT: f64 = 60.0;
const QUALITY_WEIGHT: f64 = 0.4;
const MAX_SCORE: f64 = 100.0;

fn ensure_finite(value: f64, name: &str) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(SleepError::argument(format!(
            "{name} must be numeric, got {value}"
        )))
    }
}

/// Rescales `score` from `[0, current_max]` to `[0, 100]`.
pub fn normalize_quality(score: f64, current_max: f64) -> Result<f64> {
    ensure_finite(score, "score")?;
    ensure_finite(current_max, "current_max")?;
    if current_max <= 0.0 {
        return Err(SleepError::value(format!(
            "current_max must be greater than 0, got {current_max}"
        )));
    }

    Ok(round_float(score / current_max * 100.0))
}

/// Composite score: up to 60 points for duration (full credit at
/// [`IDEAL_DURATION`]) plus up to 40 points for quality.
pub fn compute_sleep_score(duration: f64, quality: f64) -> Result<f64> {
    ensure_finite(duration, "duration")?;
    ensure_finite(quality, "quality")?;
    if duration < 0.0 {
        return Err(SleepError::value(format!(
            "duration cannot be negative, got {duration}"
        )));
    }

    Ok(sleep_score(duration, quality))
}

/// Unchecked variant for values that already passed segment validation.
pub(crate) fn sleep_score(duration: f64, quality: f64) -> f64 {
    let duration_points = f64::min(duration / IDEAL_DURATION, 1.0) * DURATION_WEIGHT;
    let score = duration_points + quality * QUALITY_WEIGHT;
    round_float(score.min(MAX_SCORE))
}

pub fn quality_label(score: f64) -> Result<QualityLabel> {
    ensure_finite(score, "score")?;
    Ok(label(score))
}

pub(crate) fn label(score: f64) -> QualityLabel {
    if score >= 85.0 {
        QualityLabel::Excellent
    } else if score >= 70.0 {
        QualityLabel::Good
    } else if score >= 50.0 {
        QualityLabel::Fair
    } else {
        QualityLabel::Poor
    }
}
