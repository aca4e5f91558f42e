//! Widget registry
//!
//! One entry per dashboard widget. The router mounts a route for every
//! entry and `/widgets.json` serves the metadata built from the same list,
//! so the two never drift apart.

use crate::constants::{column, DATA_SOURCE_LABEL};
use crate::models::{AssetClass, Period};
use serde_json::{json, Map, Value};

/// Chart start-date options in the order the dashboard lists them
const START_DATE_OPTIONS: [Period; 5] = [
    Period::YearToDate,
    Period::MonthToDate,
    Period::FiveDays,
    Period::FiveYears,
    Period::TenYears,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetKind {
    Table,
    Chart,
}

#[derive(Debug, Clone, Copy)]
pub struct Widget {
    pub class: AssetClass,
    pub kind: WidgetKind,
    pub name: &'static str,
    pub description: &'static str,
    /// Grid rows; tables grow with their basket
    pub height: u32,
}

pub const WIDGETS: [Widget; 12] = [
    Widget {
        class: AssetClass::Equities,
        kind: WidgetKind::Table,
        name: "Equities Overview",
        description: "Shows performance metrics for major global equity indices",
        height: 9,
    },
    Widget {
        class: AssetClass::Bonds,
        kind: WidgetKind::Table,
        name: "Bonds Overview",
        description: "Shows performance metrics for major US Treasury and Corporate Bond ETFs",
        height: 8,
    },
    Widget {
        class: AssetClass::Commodities,
        kind: WidgetKind::Table,
        name: "Commodities Overview",
        description: "Shows performance metrics for major commodity ETFs",
        height: 9,
    },
    Widget {
        class: AssetClass::Currencies,
        kind: WidgetKind::Table,
        name: "Currencies Overview",
        description: "Shows performance metrics for major currency pairs",
        height: 8,
    },
    Widget {
        class: AssetClass::Volatility,
        kind: WidgetKind::Table,
        name: "Volatility Indices Overview",
        description: "Shows performance metrics for major volatility indices",
        height: 6,
    },
    Widget {
        class: AssetClass::DigitalAssets,
        kind: WidgetKind::Table,
        name: "Digital Assets Overview",
        description: "Shows performance metrics for major digital assets",
        height: 3,
    },
    Widget {
        class: AssetClass::Equities,
        kind: WidgetKind::Chart,
        name: "Equity Performance",
        description: "Shows normalized performance of major equity indices",
        height: 15,
    },
    Widget {
        class: AssetClass::Bonds,
        kind: WidgetKind::Chart,
        name: "Bonds Performance",
        description: "Shows normalized performance of major bond ETFs",
        height: 15,
    },
    Widget {
        class: AssetClass::Commodities,
        kind: WidgetKind::Chart,
        name: "Commodities Performance",
        description: "Shows normalized performance of major commodity ETFs",
        height: 15,
    },
    Widget {
        class: AssetClass::Currencies,
        kind: WidgetKind::Chart,
        name: "Currencies Performance",
        description: "Shows normalized performance of major currency pairs",
        height: 15,
    },
    Widget {
        class: AssetClass::Volatility,
        kind: WidgetKind::Chart,
        name: "Volatility Performance",
        description: "Shows normalized performance of major volatility indices",
        height: 15,
    },
    Widget {
        class: AssetClass::DigitalAssets,
        kind: WidgetKind::Chart,
        name: "Digital Assets Performance",
        description: "Shows normalized performance of major digital assets",
        height: 15,
    },
];

impl Widget {
    pub fn endpoint(&self) -> &'static str {
        match self.kind {
            WidgetKind::Table => self.class.table_endpoint(),
            WidgetKind::Chart => self.class.chart_endpoint(),
        }
    }

    /// Route path the widget is served on
    pub fn path(&self) -> String {
        format!("/{}", self.endpoint())
    }

    /// Metadata entry as published in `/widgets.json`
    pub fn metadata(&self) -> Value {
        match self.kind {
            WidgetKind::Table => self.table_metadata(),
            WidgetKind::Chart => self.chart_metadata(),
        }
    }

    fn table_metadata(&self) -> Value {
        let label = self.class.label_column();
        let columns: Vec<Value> = std::iter::once(label)
            .chain(column::METRICS)
            .map(|field| {
                let min_width = if field == label || field == column::VALUE { 200 } else { 150 };
                json!({ "headerName": field, "field": field, "minWidth": min_width })
            })
            .collect();

        json!({
            "name": self.name,
            "description": self.description,
            "category": self.class.category(),
            "type": "table",
            "endpoint": self.endpoint(),
            "gridData": { "w": 80, "h": self.height },
            "source": DATA_SOURCE_LABEL,
            "params": [],
            "data": {
                "table": {
                    "showAll": true,
                    "columnsDefs": columns,
                }
            }
        })
    }

    fn chart_metadata(&self) -> Value {
        let options: Vec<Value> = START_DATE_OPTIONS
            .iter()
            .map(|p| json!({ "label": p.label(), "value": p.as_str() }))
            .collect();

        json!({
            "name": self.name,
            "description": self.description,
            "category": self.class.category(),
            "type": "chart",
            "endpoint": self.endpoint(),
            "gridData": { "w": 40, "h": self.height },
            "source": DATA_SOURCE_LABEL,
            "data": { "chart": { "type": "line" } },
            "params": [{
                "paramName": "start_date",
                "value": Period::default().as_str(),
                "label": "Start Date",
                "show": true,
                "description": "Starting date for performance comparison (ytd, mtd, 5d, 5y, 10y)",
                "type": "text",
                "options": options,
            }]
        })
    }
}

/// Full registry keyed by endpoint
pub fn registry() -> Map<String, Value> {
    WIDGETS
        .iter()
        .map(|w| (w.endpoint().to_string(), w.metadata()))
        .collect()
}
