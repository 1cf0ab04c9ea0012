use chrono::{Local, NaiveDate};
use clap::Args;
use metrics_exporter_prometheus::PrometheusHandle;
use signal_board::config::AppConfig;
use signal_board::error::AppError;
use signal_board::portfolio::{PortfolioCatalog, SignalBoard};
use std::path::{Path, PathBuf};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Catalog location and reference date shared by the reporting commands.
#[derive(Args, Debug, Default)]
pub(crate) struct SourceArgs {
    /// Portfolio catalog JSON (defaults to APP_CATALOG_PATH)
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
    /// Reference date used when the catalog is empty (defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
}

impl SourceArgs {
    pub(crate) fn load(self) -> Result<SignalBoard, AppError> {
        let path = match self.catalog {
            Some(path) => path,
            None => AppConfig::load()?.catalog.path,
        };
        let today = self.today.unwrap_or_else(|| Local::now().date_naive());
        load_signal_board(&path, today)
    }
}

pub(crate) fn load_signal_board(path: &Path, today: NaiveDate) -> Result<SignalBoard, AppError> {
    let catalog = PortfolioCatalog::from_path(path)?;
    let board = SignalBoard::new(catalog, today);
    info!(
        clients = board.catalog().len(),
        points = board.timeline().len(),
        "signal board loaded"
    );
    Ok(board)
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}
