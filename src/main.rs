//! `jumplist-sync` - maintain the recent sessions jump list from the shell.

use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::{error, info};

use jumplist_sync::adapters::{
    CurrentExeLocator, DirectorySessionCatalog, FileJumpListSink, FileSessionListStore,
};
use jumplist_sync::application::{RecentSessionsJumpList, SyncOutcome, SyncReport};
use jumplist_sync::config::{AppConfig, LoggingConfig};
use jumplist_sync::domain::foundation::SessionName;
use jumplist_sync::ports::SessionListStore;

/// Keep the taskbar jump list in step with recently used sessions
#[derive(Parser)]
#[command(name = "jumplist-sync")]
#[command(about = "Maintains the Recent Sessions jump list", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a session as recently used and rebuild the jump list
    Add {
        /// Saved session name, passed through verbatim
        name: String,
    },
    /// Forget a session and rebuild the jump list
    Remove {
        /// Saved session name, passed through verbatim
        name: String,
    },
    /// Show no recent sessions (the stored list is kept)
    Clear,
    /// Rebuild the jump list from the stored list
    Rebuild,
    /// Print the stored list and what the jump list currently shows
    List,
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = logging
        .env_filter()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let result = if logging.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    if let Err(e) = result {
        eprintln!("Failed to install log subscriber: {}", e);
    }
}

fn parse_name(raw: String) -> Result<SessionName, ExitCode> {
    SessionName::new(raw).map_err(|e| {
        error!("{}", e);
        ExitCode::from(2)
    })
}

fn summarize(report: &SyncReport) {
    if report.is_committed() {
        info!(
            "{:?} committed {} entries",
            report.operation,
            report.entry_count()
        );
        if let Some(failure) = &report.failure {
            error!("{:?} committed an empty list: {}", report.operation, failure);
        }
    } else if let Some(failure) = &report.failure {
        error!("{:?} abandoned: {}", report.operation, failure);
    }
    for skipped in &report.skipped {
        info!("skipped: {}", skipped);
    }
}

/// Committed with nothing going wrong along the way.
fn is_clean(report: &SyncReport) -> bool {
    report.is_committed() && report.failure.is_none()
}

fn report_exit_code(report: &SyncReport) -> ExitCode {
    if is_clean(report) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn exit_code(outcome: &SyncOutcome) -> ExitCode {
    if let SyncOutcome::FailSafeCleared { cause, .. } = outcome {
        error!("{}", cause);
        return ExitCode::FAILURE;
    }
    report_exit_code(outcome.report())
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match AppConfig::load_validated() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::from(2);
        }
    };
    init_tracing(&config.logging);

    let store = Arc::new(
        FileSessionListStore::new(&config.store.path).with_retention(config.store.max_entries),
    );
    let sink = Arc::new(FileJumpListSink::new(
        &config.sink.output_path,
        config.sink.max_slots,
    ));
    let locator = CurrentExeLocator::new()
        .with_override(config.executable.path.clone())
        .with_file_name(config.executable.file_name.clone());

    let jump_list = RecentSessionsJumpList::new(
        store.clone(),
        Arc::new(DirectorySessionCatalog::new(&config.catalog.sessions_dir)),
        sink.clone(),
        Arc::new(locator),
    );

    match cli.command {
        Commands::Add { name } => {
            let name = match parse_name(name) {
                Ok(name) => name,
                Err(code) => return code,
            };
            let outcome = jump_list.add_session_to_list(&name).await;
            summarize(outcome.report());
            exit_code(&outcome)
        }
        Commands::Remove { name } => {
            let name = match parse_name(name) {
                Ok(name) => name,
                Err(code) => return code,
            };
            let outcome = jump_list.remove_session_from_list(&name).await;
            summarize(outcome.report());
            exit_code(&outcome)
        }
        Commands::Clear => {
            let outcome = jump_list.clear_list().await;
            summarize(outcome.report());
            exit_code(&outcome)
        }
        Commands::Rebuild => {
            let report = jump_list.rebuild().await;
            summarize(&report);
            report_exit_code(&report)
        }
        Commands::List => {
            match store.list().await {
                Ok(sessions) => {
                    println!("Stored ({}):", sessions.len());
                    for name in sessions {
                        println!("  {}", name);
                    }
                }
                Err(e) => {
                    error!("Could not read {}: {}", store.path().display(), e);
                    return ExitCode::FAILURE;
                }
            }
            match sink.read_snapshot().await {
                Ok(Some(snapshot)) => {
                    println!("Visible (committed {}):", snapshot.committed_at);
                    for title in snapshot.titles() {
                        println!("  {}", title);
                    }
                }
                Ok(None) => println!("Visible: nothing committed yet"),
                Err(e) => {
                    error!("{}", e);
                    return ExitCode::FAILURE;
                }
            }
            ExitCode::SUCCESS
        }
    }
}
