//! CLI entry point for the fantasy draft organizer.
//!
//! Scrapes consensus projections, applies league scoring, and writes a
//! priced draft board as a tab-delimited table for spreadsheet import.

use anyhow::Result;
use clap::{Parser, Subcommand};
use ff_draft_organizer::config::LeagueConfig;
use ff_draft_organizer::fetch::BasicClient;
use ff_draft_organizer::output::{self, DraftType};
use ff_draft_organizer::pipeline;
use std::ffi::OsStr;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "ff_draft_organizer")]
#[command(about = "Builds a priced fantasy football draft board from projection sites", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scrape projections and write the priced draft board
    Organize {
        /// League configuration JSON file (defaults apply when omitted)
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Tab-delimited output file
        #[arg(short, long, default_value = "draft_board.txt")]
        output: PathBuf,

        /// Column set to emit
        #[arg(short = 't', long, value_enum, default_value = "auction")]
        draft_type: DraftType,

        /// Skip the quality-start, depth-chart, and injury enrichment passes
        #[arg(long)]
        skip_enrichment: bool,

        /// Overwrite an existing output file without asking
        #[arg(short = 'y', long)]
        yes: bool,
    },
    /// Print the resolved league configuration as JSON
    ShowConfig {
        /// League configuration JSON file (defaults apply when omitted)
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path = std::env::var("LOG_FILE_PATH")
        .unwrap_or_else(|_| "logs/ff_draft_organizer.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("ff_draft_organizer.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse().unwrap()));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse().unwrap()));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Organize {
            config,
            output,
            draft_type,
            skip_enrichment,
            yes,
        } => {
            let config = LeagueConfig::load(config.as_deref())?;

            if !yes && !confirm_overwrite(&output)? {
                info!(path = %output.display(), "Keeping existing file, exiting");
                return Ok(());
            }

            let client = BasicClient::new();
            let board = pipeline::run(&client, &config, !skip_enrichment).await?;

            for expert in &board.experts {
                info!(
                    source = %expert.source,
                    site = %expert.site,
                    date = %expert.date,
                    "Consensus source"
                );
            }
            info!("{}", serde_json::to_string_pretty(&board.summary())?);

            output::write_board_file(&output, &board, &config, draft_type)?;
            info!(
                path = %output.display(),
                players = board.players.len(),
                "Draft board written; import with tab delimiters"
            );
        }
        Commands::ShowConfig { config } => {
            let config = LeagueConfig::load(config.as_deref())?;
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
    }

    Ok(())
}

/// Asks before clobbering an existing output file. Returns true when it is
/// safe to write.
fn confirm_overwrite(path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(true);
    }
    eprint!("File {} exists. Overwrite? [Y/n]: ", path.display());
    std::io::stderr().flush()?;
    let mut answer = String::new();
    std::io::stdin().read_line(&mut answer)?;
    Ok(answer.trim() == "Y")
}
