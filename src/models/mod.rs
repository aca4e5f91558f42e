mod basket;
mod metric_row;
mod period;
mod price;
pub mod chart;

pub use basket::{AssetClass, Basket};
pub use chart::{Figure, Layout, Theme, Trace};
pub use metric_row::{MetricRow, Metrics};
pub use period::Period;
pub use price::{PricePoint, PriceSeries};
