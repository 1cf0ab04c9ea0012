use super::domain::ClientChannel;
use chrono::{Datelike, Months, NaiveDate};
use serde::Serialize;

/// Monthly marker on the board's time scrubber.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelinePoint {
    pub date: NaiveDate,
    pub label: String,
    /// Stable `YYYY-MM` identifier.
    pub key: String,
}

impl TimelinePoint {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            label: date.format("%b %Y").to_string(),
            key: date.format("%Y-%m").to_string(),
        }
    }
}

/// Earliest and latest artifact or KPI date across the catalog.
pub fn portfolio_date_bounds(clients: &[ClientChannel]) -> Option<(NaiveDate, NaiveDate)> {
    clients
        .iter()
        .flat_map(|client| {
            client
                .artifacts
                .iter()
                .map(|artifact| artifact.date)
                .chain(client.kpis.iter().map(|kpi| kpi.date))
        })
        .fold(None, |bounds, date| match bounds {
            None => Some((date, date)),
            Some((earliest, latest)) => Some((earliest.min(date), latest.max(date))),
        })
}

/// One point per calendar month between the catalog's date bounds, inclusive.
///
/// An undated catalog yields a single point for `today`.
pub fn build_timeline_points(clients: &[ClientChannel], today: NaiveDate) -> Vec<TimelinePoint> {
    let Some((earliest, latest)) = portfolio_date_bounds(clients) else {
        return vec![TimelinePoint::new(today)];
    };

    let end = first_of_month(latest);
    let mut cursor = first_of_month(earliest);
    let mut points = Vec::new();

    while cursor <= end {
        points.push(TimelinePoint::new(cursor));
        cursor = match cursor.checked_add_months(Months::new(1)) {
            Some(next) => next,
            None => break,
        };
    }

    points
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Ordered, never-empty set of timeline points with slider-style selection.
#[derive(Debug, Clone)]
pub struct Timeline {
    points: Vec<TimelinePoint>,
}

impl Timeline {
    pub fn from_clients(clients: &[ClientChannel], today: NaiveDate) -> Self {
        Self {
            points: build_timeline_points(clients, today),
        }
    }

    pub fn points(&self) -> &[TimelinePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Index of the most recent point; the board opens here.
    pub fn default_index(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    /// Point at `index`, clamped into range.
    pub fn select(&self, index: usize) -> &TimelinePoint {
        &self.points[index.min(self.default_index())]
    }

    pub fn latest(&self) -> &TimelinePoint {
        self.select(self.default_index())
    }

    pub fn position(&self, key: &str) -> Option<usize> {
        self.points.iter().position(|point| point.key == key)
    }

    pub fn find(&self, key: &str) -> Option<&TimelinePoint> {
        self.position(key).map(|index| &self.points[index])
    }
}
