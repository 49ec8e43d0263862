use anyhow::{Context, Result};
use liga_analytics::{
    analytics::StatsService,
    auth::{AuthGate, AuthOutcome},
    cli::{Cli, Commands, ReportArgs, ReportTarget},
    config::AppConfig,
    output::{format_table, to_json},
    report::{self, ReportKind},
    store::LeagueStore,
    table::Table,
};
use serde::Serialize;
use std::process::ExitCode;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse_args();
    let config = AppConfig::from_env();
    tracing::debug!(name = %config.app_name, version = %config.app_version, "Starting");

    let mut gate = AuthGate::new(&config);
    if cli.command.needs_credentials() {
        let user = cli.user.as_deref().unwrap_or_default();
        let password = cli.password.as_deref().unwrap_or_default();
        if let AuthOutcome::Rejected { attempts } = gate.login(user, password) {
            eprintln!("Invalid credentials. Failed attempts: {}", attempts);
            return Ok(ExitCode::FAILURE);
        }
    }

    match cli.command {
        Commands::Init => {
            let store = LeagueStore::open(&config.database_path, config.cache_ttl)
                .with_context(|| format!("Failed to open database {:?}", config.database_path))?;
            let teams = store.teams()?.len();
            let players = store.players(None)?.len();
            println!(
                "Database ready at {:?} ({} teams, {} players)",
                store.path(),
                teams,
                players
            );
        }

        Commands::Login => {
            println!("Welcome, {}", gate.current_user().unwrap_or_default());
        }

        command => {
            let service = StatsService::from_config(&config, cli.offline)
                .context("Failed to initialise data sources")?;
            run(&service, &config, command, cli.json)?;
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn run(service: &StatsService, config: &AppConfig, command: Commands, json: bool) -> Result<()> {
    match command {
        Commands::Summary => {
            let metrics = service.dashboard_metrics()?;
            emit(json, "Resumen", &metrics, metrics.table())?;
        }

        Commands::Teams => {
            let teams = service.teams()?;
            emit(json, "Equipos", &teams, Table::from_rows(&teams))?;
        }

        Commands::Players { team } => {
            let players = service.players(team)?;
            emit(json, "Jugadores", &players, Table::from_rows(&players))?;
        }

        Commands::Standings => {
            let classification = service.classification()?;
            let title = format!("Clasificacion ({:?})", classification.source());
            emit(json, &title, &classification, classification.table())?;
        }

        Commands::Scorers => {
            let scorers = service.top_scorers()?;
            let title = format!("Maximos goleadores ({:?})", scorers.source());
            emit(json, &title, &scorers, scorers.table())?;
        }

        Commands::Efficiency => {
            let rows = service.efficiency()?;
            emit(json, "Eficiencia", &rows, Table::from_rows(&rows))?;
        }

        Commands::Matches => {
            let matches = service.matches();
            if json {
                println!("{}", to_json(&matches)?);
            } else {
                print_section("Proximos partidos", &Table::from_rows(&matches.upcoming));
                print_section("Resultados recientes", &Table::from_rows(&matches.recent));
            }
        }

        Commands::Compare { team1, team2 } => {
            let comparison = service.comparison(&team1, &team2)?;
            emit(json, "Comparacion", &comparison, comparison.table())?;
        }

        Commands::Positions => {
            let groups = service.position_distribution()?;
            emit(json, "Posiciones", &groups, Table::from_rows(&groups))?;
        }

        Commands::Nationalities => {
            let groups = service.nationality_distribution()?;
            emit(json, "Nacionalidades", &groups, Table::from_rows(&groups))?;
        }

        Commands::Report(args) => write_report(service, config, args)?,

        Commands::Init | Commands::Login => unreachable!("handled before data sources are opened"),
    }

    Ok(())
}

fn write_report(service: &StatsService, config: &AppConfig, args: ReportArgs) -> Result<()> {
    let start = Instant::now();

    let (kind, document) = match (args.kind, args.compare.as_deref()) {
        (ReportTarget::Classification, _) => {
            let metrics = service.dashboard_metrics()?;
            let doc = report::classification_report(&service.classification()?, Some(&metrics));
            (ReportKind::Classification, doc)
        }
        (ReportTarget::Players, _) => {
            (ReportKind::Players, report::players_report(&service.players(None)?))
        }
        (ReportTarget::Full, Some([team1, team2])) => {
            let comparison = service.comparison(team1, team2)?;
            let doc = report::comparison_report(
                &comparison,
                &service.classification()?,
                &service.players(None)?,
                &service.dashboard_metrics()?,
            );
            let kind = ReportKind::Comparison {
                team1: team1.clone(),
                team2: team2.clone(),
            };
            (kind, doc)
        }
        (ReportTarget::Full, _) => {
            let doc = report::full_report(
                &service.classification()?,
                &service.players(None)?,
                &service.dashboard_metrics()?,
            );
            (ReportKind::Full, doc)
        }
    };

    let document = document.with_footer(config.app_name.as_str());
    let bytes = report::render(&document).context("Failed to render PDF")?;
    let path = report::write_pdf(&args.output, &kind, &bytes)
        .with_context(|| format!("Failed to write report to {:?}", args.output))?;

    println!(
        "Wrote {:?} ({} bytes) in {:.1}s",
        path,
        bytes.len(),
        start.elapsed().as_secs_f64()
    );
    Ok(())
}

fn emit<T: Serialize + ?Sized>(json: bool, title: &str, value: &T, table: Table) -> Result<()> {
    if json {
        println!("{}", to_json(value)?);
    } else {
        print_section(title, &table);
    }
    Ok(())
}

fn print_section(title: &str, table: &Table) {
    println!("\n{}\n", title);
    print!("{}", format_table(table));
}
