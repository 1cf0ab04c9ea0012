use crate::infra::{parse_date, SourceArgs};
use chrono::NaiveDate;
use clap::Args;
use signal_board::error::AppError;
use signal_board::portfolio::board::{format_kpi, BoardSnapshot};
use signal_board::portfolio::{
    ArtifactTab, ClientDetail, CutoffSelection, OutcomeFilter, Timeline,
};

#[derive(Args, Debug)]
pub(crate) struct BoardArgs {
    /// Outcome to rank for: all, leads, sales, roas, visibility or community
    #[arg(long, default_value = "all")]
    pub(crate) outcome: OutcomeFilter,
    /// Timeline point key (YYYY-MM); defaults to the latest month
    #[arg(long)]
    pub(crate) point: Option<String>,
    /// Explicit cutoff date (YYYY-MM-DD); takes precedence over --point
    #[arg(long, value_parser = parse_date)]
    pub(crate) cutoff: Option<NaiveDate>,
    #[command(flatten)]
    pub(crate) source: SourceArgs,
}

#[derive(Args, Debug)]
pub(crate) struct TimelineArgs {
    #[command(flatten)]
    pub(crate) source: SourceArgs,
}

#[derive(Args, Debug)]
pub(crate) struct ClientArgs {
    /// Client id from the catalog
    pub(crate) client_id: String,
    /// Drawer tab: reel, posters, social, web or story
    #[arg(long)]
    pub(crate) tab: Option<ArtifactTab>,
    /// Timeline point key (YYYY-MM); defaults to the latest month
    #[arg(long)]
    pub(crate) point: Option<String>,
    /// Explicit cutoff date (YYYY-MM-DD); takes precedence over --point
    #[arg(long, value_parser = parse_date)]
    pub(crate) cutoff: Option<NaiveDate>,
    #[command(flatten)]
    pub(crate) source: SourceArgs,
}

pub(crate) fn run_board_report(args: BoardArgs) -> Result<(), AppError> {
    let BoardArgs {
        outcome,
        point,
        cutoff,
        source,
    } = args;

    let board = source.load()?;
    let snapshot = board.snapshot(outcome, &CutoffSelection::from_parts(point, cutoff))?;
    render_board(&snapshot);
    Ok(())
}

pub(crate) fn run_timeline_report(args: TimelineArgs) -> Result<(), AppError> {
    let board = args.source.load()?;
    render_timeline(board.timeline());
    Ok(())
}

pub(crate) fn run_client_report(args: ClientArgs) -> Result<(), AppError> {
    let ClientArgs {
        client_id,
        tab,
        point,
        cutoff,
        source,
    } = args;

    let board = source.load()?;
    let selection = CutoffSelection::from_parts(point, cutoff);
    let detail = board.client_detail(&client_id, &selection, tab)?;
    render_client(&detail);
    Ok(())
}

fn render_board(snapshot: &BoardSnapshot) {
    println!("{}", snapshot.heading);
    println!(
        "As of {} ({}) | {} clients",
        snapshot.cutoff_label, snapshot.cutoff, snapshot.client_count
    );

    if snapshot.clients.is_empty() {
        println!("- No clients in the catalog");
        return;
    }

    for (index, tile) in snapshot.clients.iter().enumerate() {
        println!(
            "{:>2}. {} ({}) | {}: {}",
            index + 1,
            tile.name,
            tile.industry,
            tile.metric.label,
            tile.metric.value
        );
        println!(
            "    last signal {} | {} artifacts | {} socials",
            tile.last_signal.as_deref().unwrap_or("none"),
            tile.artifact_count,
            tile.social_count
        );
    }
}

fn render_timeline(timeline: &Timeline) {
    println!("Timeline ({} points)", timeline.len());
    let default_index = timeline.default_index();
    for (index, point) in timeline.points().iter().enumerate() {
        let marker = if index == default_index { " (default)" } else { "" };
        println!("- {} {} from {}{}", point.key, point.label, point.date, marker);
    }
}

fn render_client(detail: &ClientDetail) {
    println!("{} [{}] - {}", detail.name, detail.initials, detail.industry);
    println!("As of {}", detail.cutoff);

    println!("Tabs:");
    for tab in &detail.tabs {
        let marker = if tab.tab == detail.active_tab { "*" } else { " " };
        println!(
            " {marker} {} ({}) - {}",
            tab.label, tab.artifact_count, tab.description
        );
    }

    println!("Artifacts ({}):", detail.active_tab.label());
    if let Some(message) = &detail.empty_message {
        println!("  {message}");
    }
    for artifact in &detail.artifacts {
        let outcomes: Vec<&str> = artifact
            .outcomes
            .iter()
            .map(|outcome| outcome.as_str())
            .collect();
        println!(
            "  - {} | {} | {} [{}]",
            artifact.date,
            artifact.title.as_deref().unwrap_or(&artifact.id),
            artifact.kind.label(),
            outcomes.join(", ")
        );
    }

    if !detail.kpis.is_empty() {
        println!("KPIs:");
        for kpi in &detail.kpis {
            println!("  - {} {}", kpi.date, format_kpi(kpi));
        }
    }

    if let Some(summary) = &detail.summary {
        if let Some(challenge) = &summary.challenge {
            println!("Challenge: {challenge}");
        }
        for (heading, items) in [
            ("Strategy", &summary.strategy),
            ("Creative", &summary.creative),
            ("Performance", &summary.performance),
        ] {
            if items.is_empty() {
                continue;
            }
            println!("{heading}:");
            for item in items {
                println!("  - {item}");
            }
        }
    }

    for social in &detail.socials {
        println!("Social: {} {}", social.platform, social.url);
    }
}
