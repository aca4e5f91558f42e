//! Table and Chart Constants
//!
//! Column headers, the day-count basis for annualization, and the fixed
//! defaults shared by every asset class widget.
//!
//! ## Table Columns
//!
//! | Column       | Source                                   |
//! |--------------|------------------------------------------|
//! | label        | basket display name ("Index", "ETF", ...) |
//! | `5D`         | % change since 5 calendar days ago       |
//! | `MTD`        | % change since the 1st of the month      |
//! | `YTD`        | % change since January 1st               |
//! | `5Y (CAGR)`  | annualized growth over 5 years           |
//! | `10Y (CAGR)` | annualized growth over 10 years          |
//! | `Value`      | latest close                             |

/// Metric column headers, in display order
pub mod column {
    pub const FIVE_DAY: &str = "5D";
    pub const MTD: &str = "MTD";
    pub const YTD: &str = "YTD";
    pub const FIVE_YEAR_CAGR: &str = "5Y (CAGR)";
    pub const TEN_YEAR_CAGR: &str = "10Y (CAGR)";
    pub const VALUE: &str = "Value";

    /// All metric columns following the label column
    pub const METRICS: [&str; 6] = [FIVE_DAY, MTD, YTD, FIVE_YEAR_CAGR, TEN_YEAR_CAGR, VALUE];
}

/// Average days per year used to convert elapsed days into years for CAGR
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Minimum number of points a series needs before any metric is derived
pub const MIN_SERIES_POINTS: usize = 2;

/// Decimal places applied to the latest close before it feeds CAGR and `Value`
pub const PRICE_DECIMALS: u32 = 2;

/// Decimal places of every published metric
pub const METRIC_DECIMALS: u32 = 1;

/// Base value every normalized chart series starts at
pub const NORMALIZED_BASE: f64 = 100.0;

/// Upstream provider identifier used by every widget
pub const DEFAULT_PROVIDER: &str = "yfinance";

/// Data attribution shown on every widget
pub const DATA_SOURCE_LABEL: &str = "Yahoo Finance";

/// Payload served on `GET /`
pub const APP_INFO: &str = "HarmoniQ Insights App";

/// Axis titles of the normalized performance chart
pub const CHART_X_TITLE: &str = "Date";
pub const CHART_Y_TITLE: &str = "Normalized Price (Base=100)";

/// Origin allowed by default to embed the widgets
pub const DEFAULT_ALLOWED_ORIGIN: &str = "https://pro.openbb.co";
