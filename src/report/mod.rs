//! Presentation helpers consuming projection results: currency formatting,
//! chart series, and the downloadable report document

mod chart;
mod currency;
mod document;

pub use chart::{ChartPoint, ChartSeries, CHART_TITLE, X_AXIS_LABEL, Y_AXIS_LABEL};
pub use currency::CurrencyFormat;
pub use document::{render_report, report_filename, ReportOptions, ROWS_PER_PAGE};
