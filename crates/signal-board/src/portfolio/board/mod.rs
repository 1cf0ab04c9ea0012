mod metrics;
pub mod views;

pub use metrics::{format_kpi, format_month, headline_metric};
pub use views::{BoardSnapshot, ChannelTile, HeadlineMetric};
