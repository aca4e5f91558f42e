use crate::constants::column;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Windowed metrics of one symbol, already rounded for display
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Metrics {
    pub five_day: Option<f64>,
    pub mtd: Option<f64>,
    pub ytd: Option<f64>,
    pub five_year_cagr: Option<f64>,
    pub ten_year_cagr: Option<f64>,
    /// Latest close
    pub value: f64,
}

/// One table row: the display name under the asset class's label column plus metrics
///
/// Absent metrics serialize as `null`, never as `0` or `NaN`.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricRow {
    pub label_column: &'static str,
    pub name: String,
    pub metrics: Metrics,
}

impl MetricRow {
    pub fn new(label_column: &'static str, name: impl Into<String>, metrics: Metrics) -> Self {
        Self {
            label_column,
            name: name.into(),
            metrics,
        }
    }
}

impl Serialize for MetricRow {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let m = &self.metrics;
        let mut map = serializer.serialize_map(Some(7))?;
        map.serialize_entry(self.label_column, &self.name)?;
        map.serialize_entry(column::FIVE_DAY, &finite(m.five_day))?;
        map.serialize_entry(column::MTD, &finite(m.mtd))?;
        map.serialize_entry(column::YTD, &finite(m.ytd))?;
        map.serialize_entry(column::FIVE_YEAR_CAGR, &finite(m.five_year_cagr))?;
        map.serialize_entry(column::TEN_YEAR_CAGR, &finite(m.ten_year_cagr))?;
        map.serialize_entry(column::VALUE, &finite(Some(m.value)))?;
        map.end()
    }
}

fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}
