use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// Daily closing price of a single symbol
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Trading date
    pub date: NaiveDate,

    /// Closing price
    pub close: f64,
}

impl PricePoint {
    pub fn new(date: NaiveDate, close: f64) -> Self {
        Self { date, close }
    }

    /// Date of the point at midnight, for comparison against window starts
    pub fn timestamp(&self) -> NaiveDateTime {
        self.date.and_time(NaiveTime::MIN)
    }
}

/// Ascending, date-unique price history for one symbol
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceSeries {
    pub symbol: String,
    points: Vec<PricePoint>,
}

impl PriceSeries {
    /// Build a series, sorting by date and keeping the last row of any duplicated date
    pub fn new(symbol: impl Into<String>, mut points: Vec<PricePoint>) -> Self {
        points.sort_by_key(|p| p.date);

        // Keep last occurrence of each date
        let mut seen = std::collections::HashSet::new();
        points.reverse();
        points.retain(|p| seen.insert(p.date));
        points.reverse();

        Self {
            symbol: symbol.into(),
            points,
        }
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn last(&self) -> Option<&PricePoint> {
        self.points.last()
    }

    /// First point dated at or after `start`
    pub fn first_at_or_after(&self, start: NaiveDateTime) -> Option<&PricePoint> {
        let idx = self.points.partition_point(|p| p.timestamp() < start);
        self.points.get(idx)
    }

    /// Points dated at or after `start`
    pub fn since(&self, start: NaiveDateTime) -> &[PricePoint] {
        let idx = self.points.partition_point(|p| p.timestamp() < start);
        &self.points[idx..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_series_sorted_and_deduplicated() {
        let series = PriceSeries::new(
            "GLD",
            vec![
                PricePoint::new(d(2024, 1, 3), 3.0),
                PricePoint::new(d(2024, 1, 1), 1.0),
                PricePoint::new(d(2024, 1, 3), 33.0),
                PricePoint::new(d(2024, 1, 2), 2.0),
            ],
        );

        let closes: Vec<f64> = series.points().iter().map(|p| p.close).collect();
        assert_eq!(closes, vec![1.0, 2.0, 33.0]);
        assert!(!series.is_empty());
        assert!(PriceSeries::new("GLD", Vec::new()).is_empty());
    }

    #[test]
    fn test_first_at_or_after() {
        let series = PriceSeries::new(
            "GLD",
            vec![
                PricePoint::new(d(2024, 1, 1), 1.0),
                PricePoint::new(d(2024, 1, 5), 5.0),
            ],
        );

        let start = d(2024, 1, 2).and_hms_opt(0, 0, 0).unwrap();
        assert_eq!(series.first_at_or_after(start).unwrap().close, 5.0);

        // A start later in the day than the bar excludes that bar
        let afternoon = d(2024, 1, 1).and_hms_opt(14, 0, 0).unwrap();
        assert_eq!(series.first_at_or_after(afternoon).unwrap().close, 5.0);

        let after_all = d(2024, 2, 1).and_hms_opt(0, 0, 0).unwrap();
        assert!(series.first_at_or_after(after_all).is_none());
        assert!(series.since(after_all).is_empty());
    }
}
