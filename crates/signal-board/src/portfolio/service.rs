use super::board::{format_month, BoardSnapshot, ChannelTile};
use super::catalog::PortfolioCatalog;
use super::domain::OutcomeFilter;
use super::drawer::{ArtifactTab, ClientDetail};
use super::ranking::rank_clients;
use super::timeline::Timeline;
use chrono::NaiveDate;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("no timeline point with key '{0}'")]
    UnknownTimelinePoint(String),
    #[error("client '{0}' not found")]
    ClientNotFound(String),
}

/// How a caller picks the "as-of" date.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CutoffSelection {
    /// The last timeline point.
    #[default]
    Latest,
    /// A timeline point by its `YYYY-MM` key.
    Point(String),
    /// An explicit date, independent of the timeline.
    Date(NaiveDate),
}

impl CutoffSelection {
    /// An explicit date wins over a point key.
    pub fn from_parts(point: Option<String>, cutoff: Option<NaiveDate>) -> Self {
        match (cutoff, point) {
            (Some(date), _) => Self::Date(date),
            (None, Some(key)) => Self::Point(key),
            (None, None) => Self::Latest,
        }
    }
}

/// The validated catalog together with its timeline; the entry point for
/// callers that render the board.
#[derive(Debug, Clone)]
pub struct SignalBoard {
    catalog: PortfolioCatalog,
    timeline: Timeline,
}

impl SignalBoard {
    pub fn new(catalog: PortfolioCatalog, today: NaiveDate) -> Self {
        let timeline = Timeline::from_clients(catalog.clients(), today);
        Self { catalog, timeline }
    }

    pub fn catalog(&self) -> &PortfolioCatalog {
        &self.catalog
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// Resolves the cutoff date and its display label.
    pub fn resolve_cutoff(
        &self,
        selection: &CutoffSelection,
    ) -> Result<(NaiveDate, String), BoardError> {
        match selection {
            CutoffSelection::Latest => {
                let point = self.timeline.latest();
                Ok((point.date, point.label.clone()))
            }
            CutoffSelection::Point(key) => self
                .timeline
                .find(key)
                .map(|point| (point.date, point.label.clone()))
                .ok_or_else(|| BoardError::UnknownTimelinePoint(key.clone())),
            CutoffSelection::Date(date) => Ok((*date, format_month(*date))),
        }
    }

    pub fn snapshot(
        &self,
        filter: OutcomeFilter,
        selection: &CutoffSelection,
    ) -> Result<BoardSnapshot, BoardError> {
        let (cutoff, cutoff_label) = self.resolve_cutoff(selection)?;
        let clients: Vec<ChannelTile> = rank_clients(self.catalog.clients(), filter, cutoff)
            .into_iter()
            .map(|client| ChannelTile::build(client, filter, cutoff))
            .collect();

        debug!(%filter, %cutoff, clients = clients.len(), "board snapshot ranked");

        Ok(BoardSnapshot {
            filter,
            heading: BoardSnapshot::heading_for(filter),
            cutoff,
            cutoff_label,
            client_count: clients.len(),
            clients,
        })
    }

    pub fn client_detail(
        &self,
        client_id: &str,
        selection: &CutoffSelection,
        tab: Option<ArtifactTab>,
    ) -> Result<ClientDetail, BoardError> {
        let client = self
            .catalog
            .client(client_id)
            .ok_or_else(|| BoardError::ClientNotFound(client_id.to_string()))?;
        let (cutoff, _) = self.resolve_cutoff(selection)?;
        Ok(ClientDetail::build(client, cutoff, tab))
    }
}
