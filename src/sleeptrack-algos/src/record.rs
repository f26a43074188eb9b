use chrono::NaiveDate;
use sleeptrack_types::{RestfulThresholds, Result, Segment, SleepError, SleepSummary};

use crate::{
    helpers::{
        date::is_valid_date,
        math::{mean, round_float},
    },
    scoring::{label, normalize_quality, sleep_score},
};

/// One day of sleep, split into ordered segments.
///
/// Validated once on construction and immutable afterwards. Every metric is
/// recomputed from the stored segments on each call.
#[derive(Debug, Clone, PartialEq)]
pub struct DailySleepRecord {
    date: String,
    segments: Vec<Segment>,
}

impl DailySleepRecord {
    pub const DEFAULT_QUALITY_MAX: u8 = 100;

    /// Builds a record from `(duration, quality)` pairs with quality already on the 0-100 scale.
    pub fn new<I>(date: impl Into<String>, segments: I) -> Result<Self>
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        Self::with_quality_max(date, segments, Self::DEFAULT_QUALITY_MAX)
    }

    /// Builds a record whose raw qualities are expressed on `[0, quality_max]`.
    pub fn with_quality_max<I>(
        date: impl Into<String>,
        segments: I,
        quality_max: u8,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let date = date.into();
        if date.is_empty() {
            return Err(SleepError::argument("a date must be provided"));
        }
        if !is_valid_date(&date) {
            return Err(SleepError::argument(format!(
                "date must be a valid calendar date in YYYY-MM-DD format, got {date:?}"
            )));
        }

        let raw: Vec<(f64, f64)> = segments.into_iter().collect();
        if raw.is_empty() {
            return Err(SleepError::argument(
                "at least one (duration, quality) segment must be provided",
            ));
        }
        if quality_max > Self::DEFAULT_QUALITY_MAX {
            return Err(SleepError::value(format!(
                "quality_max must be between 0 and 100, got {quality_max}"
            )));
        }

        let segments = raw
            .into_iter()
            .map(|(duration, quality)| Self::build_segment(duration, quality, quality_max))
            .collect::<Result<Vec<_>>>()
            .inspect_err(|error| log::debug!("rejected sleep record for {date}: {error}"))?;

        log::debug!("sleep record {date}: {} segments", segments.len());

        Ok(Self { date, segments })
    }

    fn build_segment(duration: f64, quality: f64, quality_max: u8) -> Result<Segment> {
        if !duration.is_finite() {
            return Err(SleepError::argument(format!(
                "duration must be a real number, got {duration}"
            )));
        }
        if duration < 0.0 {
            return Err(SleepError::value(format!(
                "duration must be non-negative, got {duration}"
            )));
        }
        if !quality.is_finite() {
            return Err(SleepError::argument(format!(
                "quality must be a real number, got {quality}"
            )));
        }

        let quality = if quality_max != Self::DEFAULT_QUALITY_MAX {
            normalize_quality(quality, f64::from(quality_max))?
        } else {
            quality
        };

        Segment::new(duration, quality)
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    /// The date on the real calendar, `None` for days such as `2023-02-29`
    /// that only exist in the fixed validation table.
    pub fn naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn average_quality(&self) -> f64 {
        let qualities = self.segments.iter().map(Segment::quality).collect::<Vec<_>>();
        round_float(mean(&qualities))
    }

    pub fn total_duration(&self) -> f64 {
        round_float(self.segments.iter().map(Segment::duration).sum())
    }

    /// True when every segment reaches both thresholds.
    pub fn is_restful(&self, thresholds: RestfulThresholds) -> bool {
        self.segments
            .iter()
            .all(|s| s.duration() >= thresholds.duration && s.quality() >= thresholds.quality)
    }

    pub fn average_sleep_score(&self) -> f64 {
        let scores = self.sleep_scores().collect::<Vec<_>>();
        round_float(mean(&scores))
    }

    pub(crate) fn sleep_scores(&self) -> impl Iterator<Item = f64> + '_ {
        self.segments
            .iter()
            .map(|s| sleep_score(s.duration(), s.quality()))
    }

    pub fn summary(&self) -> SleepSummary {
        let avg_sleep_score = self.average_sleep_score();
        SleepSummary {
            date: self.date.clone(),
            avg_quality: self.average_quality(),
            total_duration: self.total_duration(),
            avg_sleep_score,
            quality_label: label(avg_sleep_score),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;
    use sleeptrack_types::QualityLabel;

    fn record(segments: &[(f64, f64)]) -> DailySleepRecord {
        DailySleepRecord::new("2024-03-01", segments.iter().copied()).unwrap()
    }

    #[test]
    fn records_are_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<DailySleepRecord>();
    }

    #[test]
    fn stores_segments_in_order() {
        let record = record(&[(3.0, 60.0), (4.5, 90.0), (0.5, 20.0)]);
        let durations: Vec<f64> = record.segments().iter().map(Segment::duration).collect();
        assert_eq!(durations, vec![3.0, 4.5, 0.5]);
        assert_eq!(record.date(), "2024-03-01");
    }

    #[test]
    fn normalizes_quality_with_custom_max() {
        let record = DailySleepRecord::with_quality_max("2024-03-01", [(6.0, 25.0)], 50).unwrap();
        assert_eq!(record.segments()[0].quality(), 50.0);

        let record = DailySleepRecord::with_quality_max("2024-03-01", [(6.0, 1.0)], 3).unwrap();
        assert_eq!(record.segments()[0].quality(), 33.33);
    }

    #[test]
    fn normalized_quality_must_stay_on_scale() {
        let result = DailySleepRecord::with_quality_max("2024-03-01", [(6.0, 11.0)], 10);
        assert!(matches!(result, Err(SleepError::InvalidValue(_))));

        let result = DailySleepRecord::new("2024-03-01", [(6.0, 101.0)]);
        assert!(matches!(result, Err(SleepError::InvalidValue(_))));
    }

    #[test]
    fn quality_max_out_of_range() {
        let result = DailySleepRecord::with_quality_max("2024-03-01", [(6.0, 1.0)], 101);
        assert!(matches!(result, Err(SleepError::InvalidValue(_))));

        // zero passes the range check but cannot be divided by
        let result = DailySleepRecord::with_quality_max("2024-03-01", [(6.0, 1.0)], 0);
        assert!(matches!(result, Err(SleepError::InvalidValue(_))));
    }

    #[test]
    fn rejects_empty_segments() {
        let result = DailySleepRecord::new("2024-03-01", Vec::<(f64, f64)>::new());
        assert!(matches!(result, Err(SleepError::InvalidArgument(_))));
    }

    #[test]
    fn empty_segments_are_checked_before_quality_max() {
        let result =
            DailySleepRecord::with_quality_max("2024-03-01", Vec::<(f64, f64)>::new(), 101);
        assert!(matches!(result, Err(SleepError::InvalidArgument(_))));
    }

    #[test]
    fn total_duration_ties_to_even() {
        assert_eq!(record(&[(7.125, 80.0)]).total_duration(), 7.12);
        assert_eq!(record(&[(6.0, 0.125)]).average_quality(), 0.12);
    }

    #[test]
    fn metrics_stay_in_bounds_for_random_segments() {
        let mut rng = rand::rng();
        for _ in 0..500 {
            let quality_max: u8 = rng.random_range(1..=100);
            let count = rng.random_range(1..=6);
            let segments = (0..count)
                .map(|_| {
                    let duration = rng.random_range(0.0..12.0);
                    let quality = rng.random_range(0.0..=f64::from(quality_max));
                    (duration, quality)
                })
                .collect::<Vec<_>>();

            let day =
                DailySleepRecord::with_quality_max("2024-03-01", segments, quality_max).unwrap();
            let avg_quality = day.average_quality();
            let total_duration = day.total_duration();

            assert!(
                (0.0..=100.0).contains(&avg_quality),
                "average quality out of range: {avg_quality}"
            );
            assert!(total_duration >= 0.0, "negative total: {total_duration}");
        }
    }

    #[test]
    fn rejects_negative_duration() {
        let result = DailySleepRecord::new("2024-03-01", [(7.0, 80.0), (-1.0, 80.0)]);
        assert!(matches!(result, Err(SleepError::InvalidValue(_))));
    }

    #[test]
    fn rejects_non_numeric_values() {
        let result = DailySleepRecord::new("2024-03-01", [(f64::NAN, 80.0)]);
        assert!(matches!(result, Err(SleepError::InvalidArgument(_))));

        let result = DailySleepRecord::new("2024-03-01", [(7.0, f64::NAN)]);
        assert!(matches!(result, Err(SleepError::InvalidArgument(_))));
    }

    #[test]
    fn rejects_bad_dates() {
        for date in ["", "2023-02-30", "2023-13-01", "2023-1-01", "not-a-date"] {
            let result = DailySleepRecord::new(date, [(7.0, 80.0)]);
            assert!(
                matches!(result, Err(SleepError::InvalidArgument(_))),
                "{date:?} should be rejected"
            );
        }
    }

    #[test]
    fn date_is_checked_before_segments() {
        let result = DailySleepRecord::new("2023-02-30", [(-1.0, 80.0)]);
        assert!(matches!(result, Err(SleepError::InvalidArgument(_))));
    }

    #[test]
    fn naive_date_follows_real_calendar() {
        let record = DailySleepRecord::new("2024-02-29", [(7.0, 80.0)]).unwrap();
        assert_eq!(record.naive_date(), NaiveDate::from_ymd_opt(2024, 2, 29));

        let record = DailySleepRecord::new("2023-02-29", [(7.0, 80.0)]).unwrap();
        assert_eq!(record.naive_date(), None);
    }

    #[test]
    fn average_quality_and_total_duration() {
        let record = record(&[(3.25, 70.0), (4.0, 85.5), (0.1, 10.0)]);
        assert_eq!(record.average_quality(), 55.17);
        assert_eq!(record.total_duration(), 7.35);
    }

    #[test]
    fn restful_requires_every_segment() {
        let thresholds = RestfulThresholds::default();
        assert!(record(&[(7.0, 75.0), (8.0, 90.0)]).is_restful(thresholds));
        assert!(!record(&[(7.0, 75.0), (6.9, 90.0)]).is_restful(thresholds));
        assert!(!record(&[(7.0, 74.9)]).is_restful(thresholds));
        assert!(record(&[(5.0, 60.0)]).is_restful(RestfulThresholds::new(5.0, 60.0)));
    }

    #[test]
    fn average_sleep_score_over_segments() {
        // 100.0 and 50.0
        let record = record(&[(8.0, 100.0), (4.0, 50.0)]);
        assert_eq!(record.average_sleep_score(), 75.0);
    }

    #[test]
    fn summary_labels_average_score() {
        let summary = record(&[(8.0, 100.0), (4.0, 50.0)]).summary();
        assert_eq!(
            summary,
            SleepSummary {
                date: "2024-03-01".to_string(),
                avg_quality: 75.0,
                total_duration: 12.0,
                avg_sleep_score: 75.0,
                quality_label: QualityLabel::Good,
            }
        );
    }
}
