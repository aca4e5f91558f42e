//! Report Assembler
//!
//! Walks an asset class basket in order, fetches each symbol's history one
//! at a time and turns the survivors into table rows or chart traces. A
//! symbol whose fetch fails or whose history is too short is logged and left
//! out; the rest of the basket is still reported.

use crate::constants::MIN_SERIES_POINTS;
use crate::error::{AppError, Result};
use crate::models::{AssetClass, Figure, MetricRow, Period, PriceSeries, Theme, Trace};
use crate::services::performance::{compute_metrics, normalize};
use crate::services::price_source::{HistoricalQuery, PriceSource};
use crate::services::theme::performance_layout;
use crate::services::window::{window_start, WindowStarts};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Clone)]
pub struct ReportAssembler {
    source: Arc<dyn PriceSource>,
    provider: String,
}

impl ReportAssembler {
    pub fn new(source: Arc<dyn PriceSource>, provider: impl Into<String>) -> Self {
        Self {
            source,
            provider: provider.into(),
        }
    }

    async fn fetch(&self, symbol: &str, start_date: NaiveDate) -> Result<PriceSeries> {
        let query = HistoricalQuery::new(symbol, self.provider.clone(), start_date);
        self.source.historical(&query).await
    }

    /// Metrics table for every symbol of `class` with enough history
    pub async fn table(&self, class: AssetClass, now: NaiveDateTime) -> Vec<MetricRow> {
        let basket = class.table_basket();
        let starts = WindowStarts::resolve(now);
        let start_date = starts.lookback().date();
        let mut rows = Vec::with_capacity(basket.members.len());

        for (symbol, name) in basket.members {
            let series = match self.fetch(symbol, start_date).await {
                Ok(series) => series,
                Err(e) => {
                    warn!(%symbol, error = %e, "Skipping symbol: fetch failed");
                    continue;
                }
            };

            match compute_metrics(&series, &starts) {
                Some(metrics) => rows.push(MetricRow::new(class.label_column(), *name, metrics)),
                None => {
                    let e = AppError::InsufficientData {
                        symbol: symbol.to_string(),
                        points: series.len(),
                    };
                    warn!(%symbol, error = %e, "Skipping symbol: insufficient data");
                }
            }
        }

        info!(
            asset_class = %class,
            requested = basket.members.len(),
            returned = rows.len(),
            "Assembled metrics table"
        );
        rows
    }

    /// Normalized (base 100) line chart of `class` since the start of `period`
    pub async fn performance(
        &self,
        class: AssetClass,
        period: Period,
        theme: Theme,
        now: NaiveDateTime,
    ) -> Figure {
        let basket = class.chart_basket();
        let start_date = window_start(now, period).date();
        let from = start_date.and_time(NaiveTime::MIN);
        let mut figure = Figure::new(performance_layout(theme));

        for (symbol, name) in basket.members {
            let series = match self.fetch(symbol, start_date).await {
                Ok(series) => series,
                Err(e) => {
                    warn!(%symbol, error = %e, "Skipping symbol: fetch failed");
                    continue;
                }
            };

            let points = series.since(from);
            if points.len() < MIN_SERIES_POINTS {
                warn!(%symbol, points = points.len(), "Skipping symbol: insufficient data");
                continue;
            }

            let Some(y) = normalize(points) else {
                warn!(%symbol, first_close = points[0].close, "Skipping symbol: cannot normalize");
                continue;
            };
            let x = points.iter().map(|p| p.date).collect();
            figure.add_trace(Trace::line(*name, x, y));
        }

        info!(
            asset_class = %class,
            period = %period,
            theme = theme.as_str(),
            traces = figure.data.len(),
            "Assembled performance chart"
        );
        figure
    }
}
