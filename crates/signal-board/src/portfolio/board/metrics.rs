use super::super::domain::{ClientChannel, Kpi, OutcomeFilter};
use super::super::ranking::{
    artifacts_for_outcome, latest_kpi_for_outcome, most_recent_kpi,
};
use super::views::HeadlineMetric;
use chrono::NaiveDate;

/// `"{label}: {value}{unit}"`, with whole numbers printed without a fraction.
pub fn format_kpi(kpi: &Kpi) -> String {
    format!(
        "{}: {}{}",
        kpi.label,
        kpi.value,
        kpi.unit.as_deref().unwrap_or("")
    )
}

pub fn format_month(date: NaiveDate) -> String {
    date.format("%b %Y").to_string()
}

/// Headline shown on a client's grid tile for the current filter and cutoff.
///
/// KPIs are picked at the cutoff; the artifact counts used as a fallback
/// cover the client's whole reel.
pub fn headline_metric(
    client: &ClientChannel,
    filter: OutcomeFilter,
    cutoff: NaiveDate,
) -> HeadlineMetric {
    match filter {
        OutcomeFilter::All => match most_recent_kpi(client, cutoff) {
            Some(kpi) => HeadlineMetric::new("Latest result", format_kpi(kpi)),
            None => HeadlineMetric::new(
                "Signals in playlist",
                format!("{} artifacts", client.artifacts.len()),
            ),
        },
        OutcomeFilter::Outcome(outcome) => match latest_kpi_for_outcome(client, outcome, cutoff) {
            Some(kpi) => HeadlineMetric::new(outcome.label(), format_kpi(kpi)),
            None => {
                let supporting = artifacts_for_outcome(&client.artifacts, outcome).len();
                HeadlineMetric::new(
                    "Signals",
                    format!("{supporting} items supporting {outcome}"),
                )
            }
        },
    }
}
