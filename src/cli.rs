use clap::error::ErrorKind;
use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};
use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "liga-analytics")]
#[command(version, about = "La Liga statistics from a local database and football-data.org")]
pub struct Cli {
    /// Never contact the football-data.org API
    #[arg(long, global = true)]
    pub offline: bool,

    /// Print JSON instead of text tables
    #[arg(long, global = true)]
    pub json: bool,

    /// Dashboard user
    #[arg(long, global = true, env = "DASHBOARD_USER")]
    pub user: Option<String>,

    /// Dashboard password
    #[arg(long, global = true, env = "DASHBOARD_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the database and seed demo data if empty
    Init,

    /// Check credentials
    Login,

    /// Headline league figures and current leader
    Summary,

    /// List teams
    Teams,

    /// List players, best scorers first
    Players {
        /// Only players of this team id
        #[arg(short, long)]
        team: Option<i64>,
    },

    /// League table
    Standings,

    /// Top scorers
    Scorers,

    /// Per-match ratios for every team
    Efficiency,

    /// Upcoming fixtures and recent results
    Matches,

    /// Compare two teams side by side
    Compare { team1: String, team2: String },

    /// Players grouped by position
    Positions,

    /// Players grouped by nationality
    Nationalities,

    /// Write a PDF report
    Report(ReportArgs),
}

#[derive(Args, Debug)]
pub struct ReportArgs {
    pub kind: ReportTarget,

    /// Output directory
    #[arg(short, long, default_value = "reports")]
    pub output: PathBuf,

    /// Head the full report with a comparison of two teams (only with `full`)
    #[arg(long, num_args = 2, value_names = ["TEAM1", "TEAM2"])]
    pub compare: Option<Vec<String>>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportTarget {
    Classification,
    Players,
    Full,
}

impl Commands {
    /// Everything but `init` checks credentials; `login` does nothing else
    pub fn needs_credentials(&self) -> bool {
        !matches!(self, Commands::Init)
    }
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::try_parse_args(std::env::args_os()).unwrap_or_else(|e| e.exit())
    }

    /// Parse, then reject flag combinations clap cannot express
    pub fn try_parse_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let cli = Cli::try_parse_from(args)?;
        if let Commands::Report(report) = &cli.command {
            if report.compare.is_some() && report.kind != ReportTarget::Full {
                return Err(Cli::command().error(
                    ErrorKind::ArgumentConflict,
                    "--compare is only valid with the `full` report",
                ));
            }
        }
        Ok(cli)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "liga-analytics",
            "players",
            "--team",
            "3",
            "--offline",
            "--user",
            "admin",
            "--password",
            "admin",
        ])
        .unwrap();
        assert!(cli.offline);
        assert_eq!(cli.user.as_deref(), Some("admin"));
        match cli.command {
            Commands::Players { team } => assert_eq!(team, Some(3)),
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_report_compare_takes_two_teams() {
        let cli = Cli::try_parse_args([
            "liga-analytics",
            "report",
            "full",
            "--compare",
            "Real Madrid",
            "Osasuna",
        ])
        .unwrap();
        match cli.command {
            Commands::Report(args) => {
                assert_eq!(args.kind, ReportTarget::Full);
                assert_eq!(args.output, PathBuf::from("reports"));
                assert_eq!(args.compare.unwrap(), vec!["Real Madrid", "Osasuna"]);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_compare_rejected_outside_full_report() {
        for kind in ["classification", "players"] {
            let err = Cli::try_parse_args(["liga-analytics", "report", kind, "--compare", "A", "B"])
                .unwrap_err();
            assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
        }
        assert!(Cli::try_parse_args(["liga-analytics", "report", "players"]).is_ok());
    }

    #[test]
    fn test_credential_requirements() {
        assert!(!Commands::Init.needs_credentials());
        assert!(Commands::Login.needs_credentials());
        assert!(Commands::Summary.needs_credentials());
    }
}
