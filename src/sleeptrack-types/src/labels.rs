use std::{fmt::Display, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QualityLabel {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl QualityLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::Poor => "Poor",
        }
    }
}

impl Display for QualityLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QualityLabel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Excellent" => Ok(Self::Excellent),
            "Good" => Ok(Self::Good),
            "Fair" => Ok(Self::Fair),
            "Poor" => Ok(Self::Poor),
            _ => Err(format!("Invalid quality label: {s}")),
        }
    }
}

/// Direction of change between two consecutive readings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Same,
}

impl Trend {
    pub fn between(previous: f64, current: f64) -> Self {
        if current > previous {
            Self::Up
        } else if current < previous {
            Self::Down
        } else {
            Self::Same
        }
    }
}

impl Display for Trend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Same => "same",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_from_str() {
        assert_eq!("Fair".parse::<QualityLabel>(), Ok(QualityLabel::Fair));
        assert!("fair".parse::<QualityLabel>().is_err());
        assert_eq!(QualityLabel::Excellent.to_string(), "Excellent");
    }

    #[test]
    fn trend_between() {
        assert_eq!(Trend::between(6.0, 7.0), Trend::Up);
        assert_eq!(Trend::between(7.0, 5.0), Trend::Down);
        assert_eq!(Trend::between(7.0, 7.0), Trend::Same);
    }

    #[test]
    fn trend_serializes_lowercase() {
        let json = serde_json::to_string(&[Trend::Up, Trend::Same, Trend::Down]).unwrap();
        assert_eq!(json, r#"["up","same","down"]"#);
    }
}
