use crate::report::{
    run_board_report, run_client_report, run_timeline_report, BoardArgs, ClientArgs, TimelineArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use signal_board::error::AppError;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "Portfolio Signal Board",
    about = "Serve and inspect the client portfolio signal board",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Print the ranked board for an outcome filter and cutoff
    Board(BoardArgs),
    /// List the month points available to the time scrubber
    Timeline(TimelineArgs),
    /// Print the drawer for a single client
    Client(ClientArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Override the configured portfolio catalog path
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Board(args) => run_board_report(args),
        Command::Timeline(args) => run_timeline_report(args),
        Command::Client(args) => run_client_report(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use signal_board::portfolio::{ArtifactTab, Outcome, OutcomeFilter};

    #[test]
    fn no_subcommand_defaults_to_serve() {
        let cli = Cli::try_parse_from(["signal-board-api"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn board_flags_parse_into_domain_types() {
        let cli = Cli::try_parse_from([
            "signal-board-api",
            "board",
            "--outcome",
            "ROAS",
            "--point",
            "2024-03",
            "--catalog",
            "fixtures/catalog.json",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Board(args)) => {
                assert_eq!(args.outcome, OutcomeFilter::Outcome(Outcome::Roas));
                assert_eq!(args.point.as_deref(), Some("2024-03"));
                assert_eq!(
                    args.source.catalog,
                    Some(PathBuf::from("fixtures/catalog.json"))
                );
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn client_tab_is_validated() {
        let cli = Cli::try_parse_from(["signal-board-api", "client", "harbor", "--tab", "story"])
            .expect("parses");
        match cli.command {
            Some(Command::Client(args)) => {
                assert_eq!(args.client_id, "harbor");
                assert_eq!(args.tab, Some(ArtifactTab::Story));
            }
            other => panic!("unexpected command: {other:?}"),
        }

        let err = Cli::try_parse_from(["signal-board-api", "client", "harbor", "--tab", "reels"])
            .expect_err("unknown tab rejected");
        assert!(err.to_string().contains("reels"));
    }

    #[test]
    fn unknown_outcome_is_rejected() {
        assert!(Cli::try_parse_from(["signal-board-api", "board", "--outcome", "clicks"]).is_err());
    }
}
