//! weekly-window - convert weekly schedule windows between local time and UTC.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;
use weekly_window::minutes::parse_time_of_day;
use weekly_window::{Normalizer, UtcScheduleRecord, WeeklyWindow};

/// Convert recurring weekly schedule windows between local time and UTC
#[derive(Parser, Debug)]
#[command(name = "weekly-window")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert a locally entered window to its stored UTC record
    ToUtc(ConvertArgs),

    /// Convert a stored UTC window to local time
    ToLocal(ConvertArgs),
}

#[derive(Args, Debug)]
struct ConvertArgs {
    /// Day of week, 0 = Sunday through 6 = Saturday
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=6))]
    day: u8,

    /// Start time (e.g. 23:00 or 11pm)
    #[arg(long)]
    start: String,

    /// End time; earlier than start means the window ends the next day
    #[arg(long)]
    end: String,

    #[command(flatten)]
    frame: FrameArgs,

    /// Reference instant picking the anchor week and the zone's offset (RFC 3339, default now)
    #[arg(long, value_parser = parse_rfc3339)]
    at: Option<DateTime<Utc>>,
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
struct FrameArgs {
    /// IANA timezone of the local frame (e.g. America/New_York)
    #[arg(long)]
    timezone: Option<String>,

    /// Fixed local offset in minutes east of UTC (e.g. -240 for UTC-4)
    #[arg(long, allow_negative_numbers = true)]
    offset: Option<i32>,
}

fn parse_rfc3339(s: &str) -> std::result::Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| format!("'{s}': {e}"))
}

impl ConvertArgs {
    fn window(&self) -> Result<WeeklyWindow> {
        let start = parse_time_of_day(&self.start).context("invalid --start")?;
        let end = parse_time_of_day(&self.end).context("invalid --end")?;
        WeeklyWindow::try_new(self.day, start, end).context("invalid schedule window")
    }

    fn normalizer(&self) -> Result<Normalizer> {
        let reference = self.at.unwrap_or_else(Utc::now);
        let normalizer = match (&self.frame.timezone, self.frame.offset) {
            (Some(timezone), _) => Normalizer::for_timezone(timezone, reference)?,
            (None, Some(minutes)) => Normalizer::fixed(minutes, reference)?,
            (None, None) => anyhow::bail!("one of --timezone or --offset is required"),
        };
        info!(offset = %normalizer.offset(), %reference, "using local frame");
        Ok(normalizer)
    }
}

fn run(command: Commands) -> Result<String> {
    match command {
        Commands::ToUtc(args) => {
            let local = args.window()?;
            let utc = args.normalizer()?.to_utc(local);
            Ok(serde_json::to_string_pretty(&UtcScheduleRecord::from(utc))?)
        }
        Commands::ToLocal(args) => {
            let utc = args.window()?;
            let local = args.normalizer()?.to_local(utc);
            Ok(serde_json::to_string_pretty(&local)?)
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_new(&cli.log_level).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();

    let output = run(cli.command)?;
    println!("{output}");
    Ok(())
}
