//! Outcome ranking over the client catalog.
//!
//! Every function here is a pure computation over borrowed catalog data: the
//! catalog is never mutated and the same inputs always produce the same order.
//! Anything dated after the cutoff is invisible to scoring.

use super::domain::{Artifact, ClientChannel, Kpi, Outcome, OutcomeFilter};
use chrono::NaiveDate;
use serde::Serialize;
use std::cmp::Ordering;

/// Precedence tier used when ranking for a specific outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomePriority {
    NoSignal,
    TaggedArtifacts,
    ReportedKpi,
}

impl OutcomePriority {
    pub const fn rank(self) -> u8 {
        match self {
            Self::NoSignal => 0,
            Self::TaggedArtifacts => 1,
            Self::ReportedKpi => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OutcomeScore {
    pub priority: OutcomePriority,
    /// KPI value for `ReportedKpi`, tagged artifact count for `TaggedArtifacts`, else zero.
    pub value: f64,
    pub latest: Option<NaiveDate>,
}

impl OutcomeScore {
    fn compare(&self, other: &Self) -> Ordering {
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.value.total_cmp(&self.value))
            .then_with(|| other.latest.cmp(&self.latest))
    }
}

/// Artifacts dated on or before `cutoff`, newest first.
pub fn filter_artifacts_by_cutoff(artifacts: &[Artifact], cutoff: NaiveDate) -> Vec<&Artifact> {
    let mut visible: Vec<&Artifact> = artifacts
        .iter()
        .filter(|artifact| artifact.date <= cutoff)
        .collect();
    visible.sort_by(|a, b| b.date.cmp(&a.date));
    visible
}

pub fn artifacts_for_outcome<'a>(
    artifacts: impl IntoIterator<Item = &'a Artifact>,
    outcome: Outcome,
) -> Vec<&'a Artifact> {
    artifacts
        .into_iter()
        .filter(|artifact| artifact.supports(outcome))
        .collect()
}

pub fn most_recent_kpi(client: &ClientChannel, cutoff: NaiveDate) -> Option<&Kpi> {
    latest_dated(
        client.kpis.iter().filter(|kpi| kpi.date <= cutoff),
        |kpi: &Kpi| kpi.date,
    )
}

pub fn latest_kpi_for_outcome(
    client: &ClientChannel,
    outcome: Outcome,
    cutoff: NaiveDate,
) -> Option<&Kpi> {
    latest_dated(
        client
            .kpis
            .iter()
            .filter(|kpi| kpi.date <= cutoff && outcome.matches_label(&kpi.label)),
        |kpi: &Kpi| kpi.date,
    )
}

pub fn latest_artifact_date(client: &ClientChannel, cutoff: NaiveDate) -> Option<NaiveDate> {
    client
        .artifacts
        .iter()
        .map(|artifact| artifact.date)
        .filter(|date| *date <= cutoff)
        .max()
}

pub fn outcome_score(client: &ClientChannel, outcome: Outcome, cutoff: NaiveDate) -> OutcomeScore {
    if let Some(kpi) = latest_kpi_for_outcome(client, outcome, cutoff) {
        return OutcomeScore {
            priority: OutcomePriority::ReportedKpi,
            value: kpi.value,
            latest: Some(kpi.date),
        };
    }

    let tagged = artifacts_for_outcome(
        client
            .artifacts
            .iter()
            .filter(|artifact| artifact.date <= cutoff),
        outcome,
    );
    if tagged.is_empty() {
        return OutcomeScore {
            priority: OutcomePriority::NoSignal,
            value: 0.0,
            latest: None,
        };
    }

    // Recency counts every visible artifact, not only the tagged ones.
    OutcomeScore {
        priority: OutcomePriority::TaggedArtifacts,
        value: tagged.len() as f64,
        latest: latest_artifact_date(client, cutoff),
    }
}

/// Orders clients for the board at `cutoff`.
///
/// `All` ranks by most recent artifact, then most recent KPI value, then name.
/// A specific outcome ranks by [`OutcomeScore`], then name. Names compare
/// ordinally; clients equal on every key keep their catalog order.
pub fn rank_clients(
    clients: &[ClientChannel],
    filter: OutcomeFilter,
    cutoff: NaiveDate,
) -> Vec<&ClientChannel> {
    match filter {
        OutcomeFilter::All => {
            let mut keyed: Vec<(RecencyKey, &ClientChannel)> = clients
                .iter()
                .map(|client| (RecencyKey::for_client(client, cutoff), client))
                .collect();
            keyed.sort_by(|(key_a, a), (key_b, b)| {
                key_a.compare(key_b).then_with(|| a.name.cmp(&b.name))
            });
            keyed.into_iter().map(|(_, client)| client).collect()
        }
        OutcomeFilter::Outcome(outcome) => {
            let mut scored: Vec<(OutcomeScore, &ClientChannel)> = clients
                .iter()
                .map(|client| (outcome_score(client, outcome, cutoff), client))
                .collect();
            scored.sort_by(|(score_a, a), (score_b, b)| {
                score_a.compare(score_b).then_with(|| a.name.cmp(&b.name))
            });
            scored.into_iter().map(|(_, client)| client).collect()
        }
    }
}

struct RecencyKey {
    latest_artifact: Option<NaiveDate>,
    latest_kpi_value: Option<f64>,
}

impl RecencyKey {
    fn for_client(client: &ClientChannel, cutoff: NaiveDate) -> Self {
        Self {
            latest_artifact: latest_artifact_date(client, cutoff),
            latest_kpi_value: most_recent_kpi(client, cutoff).map(|kpi| kpi.value),
        }
    }

    // Clients without a KPI sort after every client that has one.
    fn compare(&self, other: &Self) -> Ordering {
        other
            .latest_artifact
            .cmp(&self.latest_artifact)
            .then_with(|| match (self.latest_kpi_value, other.latest_kpi_value) {
                (Some(a), Some(b)) => b.total_cmp(&a),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            })
    }
}

// First item wins among equal dates, matching a stable newest-first sort.
fn latest_dated<'a, T: 'a>(
    items: impl IntoIterator<Item = &'a T>,
    date_of: impl Fn(&T) -> NaiveDate,
) -> Option<&'a T> {
    items.into_iter().fold(None, |best, item| match best {
        Some(current) if date_of(current) >= date_of(item) => Some(current),
        _ => Some(item),
    })
}
