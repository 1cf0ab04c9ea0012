mod common;

use common::date;
use signal_board::portfolio::board::headline_metric;
use signal_board::portfolio::drawer::{artifacts_for_tab, default_tab};
use signal_board::portfolio::{
    ArtifactTab, BoardError, CutoffSelection, Outcome, OutcomeFilter, Playlist, PlaylistItem,
    PortfolioCatalog, SignalBoard,
};

const SAMPLE: &str = include_str!("../../../data/portfolio.json");

fn board() -> SignalBoard {
    let catalog = PortfolioCatalog::from_json_str(SAMPLE).expect("sample catalog parses");
    SignalBoard::new(catalog, date(2026, 10, 18))
}

fn tile_ids(snapshot: &signal_board::portfolio::board::BoardSnapshot) -> Vec<&str> {
    snapshot.clients.iter().map(|tile| tile.id.as_str()).collect()
}

#[test]
fn timeline_spans_sample_catalog_months() {
    let board = board();
    let keys: Vec<&str> = board
        .timeline()
        .points()
        .iter()
        .map(|point| point.key.as_str())
        .collect();
    assert_eq!(
        keys,
        vec!["2023-12", "2024-01", "2024-02", "2024-03", "2024-04", "2024-05"]
    );
    assert_eq!(board.timeline().default_index(), 5);
}

#[test]
fn latest_snapshot_ranks_by_recency_with_latest_results() {
    let snapshot = board()
        .snapshot(OutcomeFilter::All, &CutoffSelection::Latest)
        .expect("snapshot builds");

    assert_eq!(snapshot.cutoff, date(2024, 5, 1));
    assert_eq!(snapshot.cutoff_label, "May 2024");
    assert_eq!(snapshot.heading, "All client signals");
    assert_eq!(snapshot.client_count, 3);
    assert_eq!(
        tile_ids(&snapshot),
        vec!["harbor-fitness", "orchard-bakery", "lumen-optics"]
    );

    let harbor = &snapshot.clients[0];
    assert_eq!(harbor.metric.label, "Latest result");
    assert_eq!(harbor.metric.value, "Community Members: 900");
    assert_eq!(harbor.last_signal.as_deref(), Some("Mar 2024"));
    assert_eq!(harbor.artifact_count, 3);
    assert_eq!(harbor.social_count, 1);
}

#[test]
fn leads_snapshot_describes_each_priority_tier() {
    let snapshot = board()
        .snapshot(Outcome::Leads.into(), &CutoffSelection::Latest)
        .expect("snapshot builds");

    assert_eq!(snapshot.heading, "Signals optimised for leads");
    assert_eq!(
        tile_ids(&snapshot),
        vec!["harbor-fitness", "lumen-optics", "orchard-bakery"]
    );
    let values: Vec<(&str, &str)> = snapshot
        .clients
        .iter()
        .map(|tile| (tile.metric.label.as_str(), tile.metric.value.as_str()))
        .collect();
    assert_eq!(
        values,
        vec![
            ("Leads", "Leads Generated: 120"),
            ("Signals", "1 items supporting leads"),
            ("Signals", "0 items supporting leads"),
        ]
    );
}

#[test]
fn scrubbing_to_an_earlier_month_changes_the_visibility_ranking() {
    let board = board();
    let snapshot = board
        .snapshot(
            Outcome::Visibility.into(),
            &CutoffSelection::Point("2024-03".to_string()),
        )
        .expect("snapshot builds");

    assert_eq!(snapshot.cutoff, date(2024, 3, 1));
    assert_eq!(
        tile_ids(&snapshot),
        vec!["lumen-optics", "orchard-bakery", "harbor-fitness"]
    );
    assert_eq!(snapshot.clients[0].metric.value, "Store Footfall: 3400");
}

#[test]
fn artifact_recency_breaks_equal_counts() {
    let snapshot = board()
        .snapshot(
            Outcome::Sales.into(),
            &CutoffSelection::Date(date(2024, 3, 1)),
        )
        .expect("snapshot builds");

    assert_eq!(snapshot.cutoff_label, "Mar 2024");
    assert_eq!(
        tile_ids(&snapshot),
        vec!["orchard-bakery", "lumen-optics", "harbor-fitness"]
    );
}

#[test]
fn kpi_units_are_appended_to_headline_values() {
    let board = board();
    let catalog = board.catalog();
    let cutoff = date(2024, 4, 1);

    let lumen = catalog.client("lumen-optics").expect("lumen present");
    let metric = headline_metric(lumen, Outcome::Roas.into(), cutoff);
    assert_eq!(metric.label, "ROAS");
    assert_eq!(metric.value, "Blended ROAS: 4.2x");

    let orchard = catalog.client("orchard-bakery").expect("orchard present");
    let metric = headline_metric(orchard, OutcomeFilter::All, cutoff);
    assert_eq!(metric.value, "Online Sales: 18%");
}

#[test]
fn clients_without_kpis_count_their_whole_reel() {
    let board = board();
    let harbor = board
        .catalog()
        .client("harbor-fitness")
        .expect("harbor present");
    let cutoff = date(2024, 1, 20);

    let metric = headline_metric(harbor, OutcomeFilter::All, cutoff);
    assert_eq!(metric.label, "Signals in playlist");
    assert_eq!(metric.value, "3 artifacts");

    let metric = headline_metric(harbor, Outcome::Leads.into(), cutoff);
    assert_eq!(metric.label, "Signals");
    assert_eq!(metric.value, "2 items supporting leads");
}

#[test]
fn unknown_point_is_rejected() {
    let err = board()
        .snapshot(
            OutcomeFilter::All,
            &CutoffSelection::Point("2022-01".to_string()),
        )
        .expect_err("unknown point");
    assert_eq!(err, BoardError::UnknownTimelinePoint("2022-01".to_string()));
}

#[test]
fn drawer_defaults_to_first_populated_tab() {
    let board = board();
    let detail = board
        .client_detail("harbor-fitness", &CutoffSelection::Latest, None)
        .expect("detail builds");

    assert_eq!(detail.active_tab, ArtifactTab::Reel);
    assert_eq!(detail.initials, "HF");
    let counts: Vec<(ArtifactTab, usize)> = detail
        .tabs
        .iter()
        .map(|tab| (tab.tab, tab.artifact_count))
        .collect();
    assert_eq!(
        counts,
        vec![
            (ArtifactTab::Reel, 1),
            (ArtifactTab::Posters, 0),
            (ArtifactTab::Social, 1),
            (ArtifactTab::Web, 0),
            (ArtifactTab::Story, 1),
        ]
    );
    assert_eq!(detail.artifacts[0].id, "hf-launch-reel");
    assert!(detail.empty_message.is_none());

    let kpi_dates: Vec<_> = detail.kpis.iter().map(|kpi| kpi.date).collect();
    assert_eq!(
        kpi_dates,
        vec![date(2024, 5, 31), date(2024, 4, 2), date(2024, 1, 31)]
    );
}

#[test]
fn story_tab_only_holds_vertical_video() {
    let board = board();
    let orchard = board
        .catalog()
        .client("orchard-bakery")
        .expect("orchard present");

    assert!(artifacts_for_tab(&orchard.artifacts, ArtifactTab::Story).is_empty());
    assert_eq!(artifacts_for_tab(&orchard.artifacts, ArtifactTab::Reel).len(), 1);

    let detail = board
        .client_detail(
            "orchard-bakery",
            &CutoffSelection::Latest,
            Some(ArtifactTab::Story),
        )
        .expect("detail builds");
    assert!(detail.artifacts.is_empty());
    assert!(detail.empty_message.is_some());
}

#[test]
fn drawer_before_first_artifact_falls_back_to_reel() {
    let board = board();
    let lumen = board.catalog().client("lumen-optics").expect("lumen present");
    let cutoff = date(2024, 1, 4);
    assert_eq!(default_tab(lumen, cutoff), ArtifactTab::Reel);

    let detail = board
        .client_detail("lumen-optics", &CutoffSelection::Date(cutoff), None)
        .expect("detail builds");
    assert_eq!(
        detail.empty_message.as_deref(),
        Some("No artifacts for this format before 2024-01-04.")
    );
}

#[test]
fn drawer_for_unknown_client_is_not_found() {
    let err = board()
        .client_detail("ghost", &CutoffSelection::Latest, None)
        .expect_err("unknown client");
    assert_eq!(err, BoardError::ClientNotFound("ghost".to_string()));
}

#[test]
fn empty_board_has_one_point_and_no_tiles() {
    let board = SignalBoard::new(PortfolioCatalog::empty(), date(2026, 10, 18));
    assert_eq!(board.timeline().len(), 1);

    let snapshot = board
        .snapshot(Outcome::Community.into(), &CutoffSelection::Latest)
        .expect("snapshot builds");
    assert_eq!(snapshot.cutoff, date(2026, 10, 18));
    assert!(snapshot.clients.is_empty());
}

#[test]
fn playlist_pins_each_artifact_once_per_client() {
    let board = board();
    let harbor = board
        .catalog()
        .client("harbor-fitness")
        .expect("harbor present");
    let reel = &harbor.artifacts[0];

    let mut playlist = Playlist::new();
    assert!(playlist.add(PlaylistItem::new(harbor, reel)));
    assert!(!playlist.add(PlaylistItem::new(harbor, reel)));
    assert_eq!(playlist.len(), 1);
    assert!(playlist.is_pinned(&reel.id, &harbor.id));
    assert!(!playlist.is_pinned(&reel.id, "lumen-optics"));

    assert!(!playlist.toggle(harbor, reel));
    assert!(playlist.is_empty());
    assert!(playlist.toggle(harbor, reel));
    assert_eq!(playlist.items()[0].client_name, "Harbor Fitness");

    assert!(!playlist.remove("missing", &harbor.id));
    playlist.clear();
    assert!(playlist.is_empty());
}
