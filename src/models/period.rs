/// Named lookback window of a metric or chart
///
/// Tokens are case-insensitive: `5d`, `mtd`, `ytd`, `5y`, `10y`.
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Period {
    /// Five calendar days back from now
    #[serde(rename = "5d")]
    FiveDays,

    /// First day of the current month
    #[serde(rename = "mtd")]
    MonthToDate,

    /// First day of the current year
    #[serde(rename = "ytd")]
    YearToDate,

    /// Same calendar day five years ago
    #[serde(rename = "5y")]
    FiveYears,

    /// Same calendar day ten years ago
    #[serde(rename = "10y")]
    TenYears,
}

impl Default for Period {
    fn default() -> Self {
        Period::YearToDate
    }
}

impl Period {
    pub const ALL: [Period; 5] = [
        Period::FiveDays,
        Period::MonthToDate,
        Period::YearToDate,
        Period::FiveYears,
        Period::TenYears,
    ];

    /// Parse a period token, rejecting anything unknown
    pub fn parse(s: &str) -> Result<Self, AppError> {
        match s.trim().to_lowercase().as_str() {
            "5d" => Ok(Period::FiveDays),
            "mtd" => Ok(Period::MonthToDate),
            "ytd" => Ok(Period::YearToDate),
            "5y" => Ok(Period::FiveYears),
            "10y" => Ok(Period::TenYears),
            _ => Err(AppError::InvalidPeriod(s.to_string())),
        }
    }

    /// Parse a user-selected chart period, falling back to YTD
    pub fn parse_or_default(s: Option<&str>) -> Self {
        match s {
            Some(token) => Self::parse(token).unwrap_or_else(|_| {
                tracing::debug!(token, "Unknown period token, using ytd");
                Period::default()
            }),
            None => Period::default(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Period::FiveDays => "5d",
            Period::MonthToDate => "mtd",
            Period::YearToDate => "ytd",
            Period::FiveYears => "5y",
            Period::TenYears => "10y",
        }
    }

    /// Human label used in the chart widget's parameter options
    pub fn label(&self) -> &'static str {
        match self {
            Period::FiveDays => "5 Days",
            Period::MonthToDate => "Month to Date",
            Period::YearToDate => "Year to Date",
            Period::FiveYears => "5 Years",
            Period::TenYears => "10 Years",
        }
    }

    /// Years spanned by an annualized window
    pub fn years_back(&self) -> Option<i32> {
        match self {
            Period::FiveYears => Some(5),
            Period::TenYears => Some(10),
            _ => None,
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_parse() {
        assert_eq!(Period::parse("5d").unwrap(), Period::FiveDays);
        assert_eq!(Period::parse("MTD").unwrap(), Period::MonthToDate);
        assert_eq!(Period::parse(" Ytd ").unwrap(), Period::YearToDate);
        assert_eq!(Period::parse("5Y").unwrap(), Period::FiveYears);
        assert_eq!(Period::parse("10y").unwrap(), Period::TenYears);
        assert!(matches!(Period::parse("XYZ"), Err(AppError::InvalidPeriod(t)) if t == "XYZ"));
    }

    #[test]
    fn test_period_parse_or_default() {
        assert_eq!(Period::parse_or_default(Some("XYZ")), Period::YearToDate);
        assert_eq!(Period::parse_or_default(None), Period::YearToDate);
        assert_eq!(Period::parse_or_default(Some("10Y")), Period::TenYears);
    }

    #[test]
    fn test_period_round_trips_token() {
        for period in Period::ALL {
            assert_eq!(Period::parse(period.as_str()).unwrap(), period);
            let json = serde_json::to_string(&period).unwrap();
            assert_eq!(json, format!("\"{}\"", period.as_str()));
        }
    }
}
