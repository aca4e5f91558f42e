//! Plotly-compatible chart payload
//!
//! The dashboard host renders `{"data": [...], "layout": {...}}` directly, so
//! field names follow Plotly's figure schema.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Display theme requested by the dashboard host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Dark,
    Light,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::Dark
    }
}

impl Theme {
    /// Parse a theme name, falling back to dark for anything unknown
    pub fn parse_or_default(s: Option<&str>) -> Self {
        match s.map(|t| t.trim().to_lowercase()).as_deref() {
            Some("light") => Theme::Light,
            _ => Theme::Dark,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }
}

/// One line series
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trace {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub mode: &'static str,
    pub name: String,
    #[serde(serialize_with = "serialize_dates")]
    pub x: Vec<NaiveDate>,
    pub y: Vec<f64>,
}

impl Trace {
    pub fn line(name: impl Into<String>, x: Vec<NaiveDate>, y: Vec<f64>) -> Self {
        Self {
            kind: "scatter",
            mode: "lines",
            name: name.into(),
            x,
            y,
        }
    }
}

fn serialize_dates<S>(dates: &[NaiveDate], serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.collect_seq(dates.iter().map(|d| d.format("%Y-%m-%d").to_string()))
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Font {
    pub family: &'static str,
    pub size: u32,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisTitle {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub title: AxisTitle,
    pub gridcolor: &'static str,
    pub linecolor: &'static str,
    pub zeroline: bool,
    pub showgrid: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub orientation: &'static str,
    pub x: f64,
    pub y: f64,
    pub xanchor: &'static str,
    pub yanchor: &'static str,
    pub bgcolor: &'static str,
    pub font: Font,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Margin {
    pub l: u32,
    pub r: u32,
    pub t: u32,
    pub b: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub paper_bgcolor: &'static str,
    pub plot_bgcolor: &'static str,
    pub font: Font,
    pub colorway: &'static [&'static str],
    pub xaxis: Axis,
    pub yaxis: Axis,
    pub legend: Legend,
    pub margin: Margin,
    pub hovermode: &'static str,
    pub autosize: bool,
}

/// Complete chart returned by the `*_performance` endpoints
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

impl Figure {
    pub fn new(layout: Layout) -> Self {
        Self {
            data: Vec::new(),
            layout,
        }
    }

    pub fn add_trace(&mut self, trace: Trace) {
        self.data.push(trace);
    }
}
