use crate::error::Result;
use crate::models::PriceSeries;
use async_trait::async_trait;
use chrono::NaiveDate;

/// Historical price lookup keyed by symbol, provider and start date
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoricalQuery {
    pub symbol: String,
    pub provider: String,
    pub start_date: NaiveDate,
}

impl HistoricalQuery {
    pub fn new(symbol: impl Into<String>, provider: impl Into<String>, start_date: NaiveDate) -> Self {
        Self {
            symbol: symbol.into(),
            provider: provider.into(),
            start_date,
        }
    }
}

/// Upstream market-data provider
///
/// Implementations return daily closes from `start_date` through today in
/// ascending order. Errors cover unknown symbols and provider outages alike;
/// callers decide whether a failure skips a symbol or fails a request.
#[async_trait]
pub trait PriceSource: Send + Sync {
    /// Provider name accepted in [`HistoricalQuery::provider`]
    fn provider(&self) -> &str;

    async fn historical(&self, query: &HistoricalQuery) -> Result<PriceSeries>;
}
