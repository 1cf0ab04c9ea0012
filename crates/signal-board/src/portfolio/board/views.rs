use super::super::domain::{ClientChannel, OutcomeFilter};
use super::super::ranking::latest_artifact_date;
use super::metrics::{format_month, headline_metric};
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeadlineMetric {
    pub label: String,
    pub value: String,
}

impl HeadlineMetric {
    pub(crate) fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Grid tile for one client at a given filter and cutoff.
#[derive(Debug, Clone, Serialize)]
pub struct ChannelTile {
    pub id: String,
    pub name: String,
    pub industry: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    pub metric: HeadlineMetric,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_signal: Option<String>,
    pub artifact_count: usize,
    pub social_count: usize,
}

impl ChannelTile {
    pub fn build(client: &ClientChannel, filter: OutcomeFilter, cutoff: NaiveDate) -> Self {
        Self {
            id: client.id.clone(),
            name: client.name.clone(),
            industry: client.industry.clone(),
            logo: client.logo.clone(),
            metric: headline_metric(client, filter, cutoff),
            last_signal: latest_artifact_date(client, cutoff).map(format_month),
            artifact_count: client.artifacts.len(),
            social_count: client.socials.len(),
        }
    }
}

/// Ranked board state for one outcome filter and cutoff.
#[derive(Debug, Clone, Serialize)]
pub struct BoardSnapshot {
    pub filter: OutcomeFilter,
    pub heading: String,
    pub cutoff: NaiveDate,
    pub cutoff_label: String,
    pub client_count: usize,
    pub clients: Vec<ChannelTile>,
}

impl BoardSnapshot {
    pub fn heading_for(filter: OutcomeFilter) -> String {
        match filter {
            OutcomeFilter::All => "All client signals".to_string(),
            OutcomeFilter::Outcome(outcome) => format!("Signals optimised for {outcome}"),
        }
    }
}
