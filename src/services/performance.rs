//! Performance Calculator
//!
//! Derives trailing-window percentage changes and compound annual growth
//! rates from one ascending price series. A window whose start precedes all
//! data, or whose arithmetic is undefined, yields an absent metric; it never
//! fails the whole row.

use crate::constants::{
    DAYS_PER_YEAR, METRIC_DECIMALS, MIN_SERIES_POINTS, NORMALIZED_BASE, PRICE_DECIMALS,
};
use crate::models::{Metrics, PricePoint, PriceSeries};
use crate::services::window::WindowStarts;
use chrono::NaiveDateTime;

/// Round half away from zero to `decimals` places
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Percentage change from `base` to `latest`, `None` when undefined
pub fn percent_change(latest: f64, base: f64) -> Option<f64> {
    let change = (latest - base) / base * 100.0;
    change.is_finite().then_some(change)
}

/// Compound annual growth rate in percent, `None` when undefined
///
/// A non-positive base or a non-positive span has no real annualized rate.
pub fn cagr(latest: f64, base: f64, years: f64) -> Option<f64> {
    if base <= 0.0 || years <= 0.0 || !years.is_finite() {
        return None;
    }
    let rate = ((latest / base).powf(1.0 / years) - 1.0) * 100.0;
    rate.is_finite().then_some(rate)
}

/// Years elapsed between `start` and `now`, counting whole days
pub fn elapsed_years(start: NaiveDateTime, now: NaiveDateTime) -> f64 {
    (now - start).num_days() as f64 / DAYS_PER_YEAR
}

/// Compute every table metric for one series
///
/// Returns `None` when the series holds fewer than two points; such a symbol
/// is left out of the table entirely.
pub fn compute_metrics(series: &PriceSeries, starts: &WindowStarts) -> Option<Metrics> {
    if series.len() < MIN_SERIES_POINTS {
        return None;
    }
    let latest_close = series.last()?.close;
    // CAGR and Value start from the price rounded to cents
    let latest_price = round_to(latest_close, PRICE_DECIMALS);

    let change_since = |start: NaiveDateTime| {
        series
            .first_at_or_after(start)
            .and_then(|p| percent_change(latest_close, p.close))
            .map(|v| round_to(v, METRIC_DECIMALS))
    };

    let cagr_since = |start: NaiveDateTime| {
        series
            .first_at_or_after(start)
            .and_then(|p| cagr(latest_price, p.close, elapsed_years(start, starts.now)))
            .map(|v| round_to(v, METRIC_DECIMALS))
    };

    Some(Metrics {
        five_day: change_since(starts.five_day),
        mtd: change_since(starts.mtd),
        ytd: change_since(starts.ytd),
        five_year_cagr: cagr_since(starts.five_year),
        ten_year_cagr: cagr_since(starts.ten_year),
        value: round_to(latest_price, METRIC_DECIMALS),
    })
}

/// Rescale closes so the first one equals the normalized base
///
/// `None` when there is nothing to scale or the first close cannot be a divisor.
pub fn normalize(points: &[PricePoint]) -> Option<Vec<f64>> {
    let first = points.first()?.close;
    if first == 0.0 || !first.is_finite() {
        return None;
    }
    Some(
        points
            .iter()
            .map(|p| p.close / first * NORMALIZED_BASE)
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn series(points: &[(NaiveDate, f64)]) -> PriceSeries {
        PriceSeries::new(
            "TEST",
            points.iter().map(|(date, close)| PricePoint::new(*date, *close)).collect(),
        )
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(1.25, 1), 1.3);
        assert_eq!(round_to(-1.25, 1), -1.3);
        assert_eq!(round_to(123.456, 2), 123.46);
        assert_eq!(round_to(0.04, 1), 0.0);
    }

    #[test]
    fn test_insufficient_series_yields_none() {
        let starts = WindowStarts::resolve(d(2024, 6, 17).and_hms_opt(12, 0, 0).unwrap());
        assert!(compute_metrics(&series(&[]), &starts).is_none());
        assert!(compute_metrics(&series(&[(d(2024, 6, 14), 10.0)]), &starts).is_none());
    }

    #[test]
    fn test_trailing_changes() {
        let now = d(2024, 6, 17).and_hms_opt(12, 0, 0).unwrap();
        let starts = WindowStarts::resolve(now);
        let s = series(&[
            (d(2024, 1, 2), 80.0),
            (d(2024, 6, 3), 90.0),
            (d(2024, 6, 12), 95.0),
            (d(2024, 6, 13), 96.0),
            (d(2024, 6, 17), 100.0),
        ]);

        let m = compute_metrics(&s, &starts).unwrap();
        // 5d window starts 2024-06-12 12:00, so the 06-12 bar is excluded
        assert_eq!(m.five_day, Some(4.2));
        assert_eq!(m.mtd, Some(11.1));
        assert_eq!(m.ytd, Some(25.0));
        assert_eq!(m.value, 100.0);
    }

    #[test]
    fn test_window_starting_after_all_data_is_absent() {
        let now = d(2024, 6, 17).and_hms_opt(0, 0, 0).unwrap();
        let starts = WindowStarts::resolve(now);
        let s = series(&[(d(2024, 6, 10), 50.0), (d(2024, 6, 11), 55.0)]);

        let m = compute_metrics(&s, &starts).unwrap();
        // Only 5d has no point at or after its start
        assert_eq!(m.five_day, None);
        assert_eq!(m.mtd, Some(10.0));
        // 50 -> 55 over 1827 days
        assert_eq!(m.five_year_cagr, Some(1.9));
    }

    #[test]
    fn test_value_uses_two_then_one_decimal_rounding() {
        let now = d(2024, 6, 17).and_hms_opt(0, 0, 0).unwrap();
        let starts = WindowStarts::resolve(now);
        let s = series(&[(d(2024, 6, 14), 100.0), (d(2024, 6, 17), 123.456)]);

        let m = compute_metrics(&s, &starts).unwrap();
        assert_eq!(m.value, round_to(round_to(123.456, 2), 1));
        assert_eq!(m.value, 123.5);
    }

    #[test]
    fn test_cagr_matches_closed_form() {
        let t0 = d(2014, 3, 10);
        let t1 = d(2024, 3, 10);
        let (p0, p1) = (40.0, 95.37);
        let now = t1.and_hms_opt(0, 0, 0).unwrap();
        let starts = WindowStarts::resolve(now);
        let s = series(&[(t0, p0), (d(2019, 1, 1), 70.0), (t1, p1)]);

        let m = compute_metrics(&s, &starts).unwrap();
        let days = (t1 - t0).num_days() as f64;
        let expected = ((p1 / p0).powf(DAYS_PER_YEAR / days) - 1.0) * 100.0;
        let actual = m.ten_year_cagr.unwrap();
        assert!((actual - expected).abs() <= 0.05, "{actual} vs {expected}");
    }

    #[test]
    fn test_cagr_when_only_later_point_matches() {
        let now = d(2020, 1, 2).and_hms_opt(0, 0, 0).unwrap();
        let starts = WindowStarts::resolve(now);
        let s = series(&[(d(2015, 1, 1), 50.0), (d(2020, 1, 1), 100.0)]);

        let m = compute_metrics(&s, &starts).unwrap();
        // 5y window starts 2015-01-02 and lands on the 2020 point itself
        let five = m.five_year_cagr;
        assert!(five.map_or(true, f64::is_finite));
        assert_eq!(five, Some(0.0));
        assert!(m.ten_year_cagr.unwrap().is_finite());
    }

    #[test]
    fn test_non_positive_base_is_absent() {
        assert_eq!(cagr(10.0, 0.0, 5.0), None);
        assert_eq!(cagr(10.0, -3.0, 5.0), None);
        assert_eq!(cagr(10.0, 5.0, 0.0), None);
        assert_eq!(percent_change(10.0, 0.0), None);

        let now = d(2024, 6, 17).and_hms_opt(0, 0, 0).unwrap();
        let starts = WindowStarts::resolve(now);
        let s = series(&[(d(2014, 6, 17), 0.0), (d(2024, 6, 17), 10.0)]);
        let m = compute_metrics(&s, &starts).unwrap();
        assert_eq!(m.ten_year_cagr, None);
        assert_eq!(m.value, 10.0);
    }

    #[test]
    fn test_input_series_untouched() {
        let now = d(2024, 6, 17).and_hms_opt(0, 0, 0).unwrap();
        let starts = WindowStarts::resolve(now);
        let s = series(&[(d(2024, 6, 14), 1.0), (d(2024, 6, 17), 2.0)]);
        let before = s.clone();
        let first = compute_metrics(&s, &starts);
        let second = compute_metrics(&s, &starts);
        assert_eq!(s, before);
        assert_eq!(first, second);
    }

    #[test]
    fn test_normalize_starts_at_base() {
        let points = [
            PricePoint::new(d(2024, 1, 2), 37.13),
            PricePoint::new(d(2024, 1, 3), 40.0),
        ];
        let normalized = normalize(&points).unwrap();
        assert_eq!(normalized[0], 100.0);
        assert!((normalized[1] - 40.0 / 37.13 * 100.0).abs() < 1e-9);

        assert!(normalize(&[]).is_none());
        assert!(normalize(&[PricePoint::new(d(2024, 1, 2), 0.0)]).is_none());
    }
}
