use crate::{Result, SleepError};

/// One contiguous sleep interval. Quality is always on the 0-100 scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Segment {
    duration: f64,
    quality: f64,
}

impl Segment {
    pub const MAX_QUALITY: f64 = 100.0;

    /// Builds a segment from an already normalized quality value.
    pub fn new(duration: f64, quality: f64) -> Result<Self> {
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
        if !(0.0..=Self::MAX_QUALITY).contains(&quality) {
            return Err(SleepError::value(format!(
                "normalized quality must be between 0 and 100, got {quality}"
            )));
        }

        Ok(Self { duration, quality })
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn quality(&self) -> f64 {
        self.quality
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_bounds() {
        let segment = Segment::new(0.0, 100.0).unwrap();
        assert_eq!(segment.duration(), 0.0);
        assert_eq!(segment.quality(), 100.0);
        assert!(Segment::new(7.5, 0.0).is_ok());
    }

    #[test]
    fn negative_duration_is_out_of_domain() {
        assert!(matches!(
            Segment::new(-1.0, 50.0),
            Err(SleepError::InvalidValue(_))
        ));
    }

    #[test]
    fn non_finite_numbers_are_malformed() {
        assert!(matches!(
            Segment::new(f64::NAN, 50.0),
            Err(SleepError::InvalidArgument(_))
        ));
        assert!(matches!(
            Segment::new(6.0, f64::INFINITY),
            Err(SleepError::InvalidArgument(_))
        ));
    }

    #[test]
    fn quality_outside_scale() {
        assert!(matches!(
            Segment::new(6.0, 100.01),
            Err(SleepError::InvalidValue(_))
        ));
        assert!(matches!(
            Segment::new(6.0, -0.5),
            Err(SleepError::InvalidValue(_))
        ));
    }
}
