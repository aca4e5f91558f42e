use crate::constants::DEFAULT_PROVIDER;
use crate::error::{AppError, Result};
use crate::models::{PricePoint, PriceSeries};
use crate::services::price_source::{HistoricalQuery, PriceSource};
use async_trait::async_trait;
use chrono::{DateTime, Days, NaiveDate, NaiveTime, Utc};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info, warn};

const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0 Safari/537.36";

/// Yahoo Finance chart API client
///
/// Fetches daily bars via `GET {base}/v8/finance/chart/{symbol}` and keeps
/// only the closes. Currencies, commodities and volatility indices go
/// through the same endpoint as equities.
pub struct YahooClient {
    base_url: String,
    client: reqwest::Client,
}

impl YahooClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - e.g. "https://query1.finance.yahoo.com"
    /// * `timeout` - per-request timeout
    pub fn new(base_url: String, timeout: Duration) -> Result<Self> {
        let base_url = base_url.trim().trim_end_matches('/').to_string();

        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(AppError::Config(format!(
                "Invalid base_url: must start with http:// or https://, got: '{}'",
                base_url
            )));
        }

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| AppError::Network(format!("Failed to create HTTP client: {}", e)))?;

        info!(base_url = %base_url, timeout_secs = timeout.as_secs(), "Created YahooClient");

        Ok(Self { base_url, client })
    }

    fn chart_url(&self, symbol: &str) -> Result<reqwest::Url> {
        let mut url = reqwest::Url::parse(&self.base_url)
            .map_err(|e| AppError::Config(format!("Invalid base_url '{}': {}", self.base_url, e)))?;
        url.path_segments_mut()
            .map_err(|_| AppError::Config(format!("base_url cannot carry a path: {}", self.base_url)))?
            .pop_if_empty()
            .extend(["v8", "finance", "chart", symbol]);
        Ok(url)
    }

    async fn fetch_chart(&self, query: &HistoricalQuery) -> Result<ChartResult> {
        let url = self.chart_url(&query.symbol)?;
        let period1 = range_start(query.start_date);
        let period2 = Utc::now().timestamp();

        debug!(symbol = %query.symbol, %url, period1, period2, "Fetching chart");

        let response = self
            .client
            .get(url)
            .query(&[
                ("period1", period1.to_string()),
                ("period2", period2.to_string()),
                ("interval", "1d".to_string()),
                ("events", "history".to_string()),
            ])
            .send()
            .await
            .map_err(|e| AppError::Network(format!("Chart request failed for {}: {}", query.symbol, e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AppError::Network(format!("Failed to read response body: {}", e)))?;

        // Yahoo reports unknown symbols as a chart error with a 404 status
        let parsed: std::result::Result<ChartResponse, _> = serde_json::from_str(&body);
        if let Ok(ChartResponse { chart: ChartEnvelope { error: Some(err), .. } }) = &parsed {
            return Err(AppError::Upstream(format!(
                "{}: {} ({})",
                query.symbol, err.description, err.code
            )));
        }
        if !status.is_success() {
            return Err(AppError::Upstream(format!(
                "Chart API returned status {} for {}",
                status, query.symbol
            )));
        }

        let parsed = parsed
            .map_err(|e| AppError::Parse(format!("Failed to parse chart for {}: {}", query.symbol, e)))?;

        parsed
            .chart
            .result
            .and_then(|results| results.into_iter().next())
            .ok_or_else(|| AppError::Upstream(format!("No chart data for {}", query.symbol)))
    }
}

/// `period1` for a history starting on `start_date`
///
/// Exchanges east of UTC stamp their daily bar at local midnight, which is the
/// previous UTC day, so the range opens one day early. Callers filter on the
/// exchange-local date.
fn range_start(start_date: NaiveDate) -> i64 {
    start_date
        .checked_sub_days(Days::new(1))
        .unwrap_or(start_date)
        .and_time(NaiveTime::MIN)
        .and_utc()
        .timestamp()
}

#[async_trait]
impl PriceSource for YahooClient {
    fn provider(&self) -> &str {
        DEFAULT_PROVIDER
    }

    async fn historical(&self, query: &HistoricalQuery) -> Result<PriceSeries> {
        if !query.provider.eq_ignore_ascii_case(self.provider()) {
            return Err(AppError::UnsupportedProvider(query.provider.clone()));
        }

        let result = self.fetch_chart(query).await?;
        let series = result.into_series(&query.symbol)?;

        if series.is_empty() {
            warn!(symbol = %query.symbol, "Chart returned no closes");
        } else {
            debug!(symbol = %query.symbol, points = series.len(), "Parsed chart");
        }
        Ok(series)
    }
}

#[derive(Debug, Deserialize)]
struct ChartResponse {
    chart: ChartEnvelope,
}

#[derive(Debug, Deserialize)]
struct ChartEnvelope {
    result: Option<Vec<ChartResult>>,
    error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
struct ChartError {
    code: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    #[serde(default)]
    meta: ChartMeta,
    #[serde(default)]
    timestamp: Vec<i64>,
    indicators: ChartIndicators,
}

#[derive(Debug, Default, Deserialize)]
struct ChartMeta {
    #[serde(default)]
    gmtoffset: i64,
}

#[derive(Debug, Deserialize)]
struct ChartIndicators {
    quote: Vec<ChartQuote>,
}

#[derive(Debug, Deserialize)]
struct ChartQuote {
    #[serde(default)]
    close: Vec<Option<f64>>,
}

impl ChartResult {
    /// Pair timestamps with closes, dropping rows without a close
    fn into_series(self, symbol: &str) -> Result<PriceSeries> {
        let closes = self
            .indicators
            .quote
            .into_iter()
            .next()
            .map(|q| q.close)
            .unwrap_or_default();

        if closes.len() != self.timestamp.len() {
            return Err(AppError::Parse(format!(
                "{}: {} timestamps but {} closes",
                symbol,
                self.timestamp.len(),
                closes.len()
            )));
        }

        let offset = self.meta.gmtoffset;
        let points = self
            .timestamp
            .iter()
            .zip(closes)
            .filter_map(|(ts, close)| {
                let close = close.filter(|c| c.is_finite())?;
                // Exchange-local calendar date of the bar
                let date = DateTime::from_timestamp(ts + offset, 0)?.date_naive();
                Some(PricePoint::new(date, close))
            })
            .collect();

        Ok(PriceSeries::new(symbol, points))
    }
}
