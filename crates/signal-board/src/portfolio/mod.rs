//! Client portfolio ranking, time scrubbing and the views built on top of them.

pub mod board;
pub mod catalog;
pub mod domain;
pub mod drawer;
pub mod playlist;
pub mod ranking;
pub mod router;
mod service;
pub mod timeline;

pub use catalog::{CatalogError, PortfolioCatalog};
pub use domain::{
    Artifact, ArtifactType, ClientChannel, ClientSummary, Kpi, Outcome, OutcomeFilter,
    SocialLink,
};
pub use drawer::{ArtifactTab, ClientDetail};
pub use playlist::{Playlist, PlaylistItem};
pub use ranking::{filter_artifacts_by_cutoff, rank_clients, OutcomePriority, OutcomeScore};
pub use router::portfolio_router;
pub use service::{BoardError, CutoffSelection, SignalBoard};
pub use timeline::{build_timeline_points, Timeline, TimelinePoint};
