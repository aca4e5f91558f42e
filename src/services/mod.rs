pub mod performance;
pub mod price_source;
pub mod report;
pub mod theme;
pub mod window;
pub mod yahoo;

pub use performance::{compute_metrics, normalize, round_to};
pub use price_source::{HistoricalQuery, PriceSource};
pub use report::ReportAssembler;
pub use theme::performance_layout;
pub use window::{window_start, WindowStarts};
pub use yahoo::YahooClient;
