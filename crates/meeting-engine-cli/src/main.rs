//! `meetq` CLI — find meeting windows in a day of calendar events.
//!
//! ## Usage
//!
//! ```sh
//! # Free windows of at least 30 minutes for alice and bob (events on stdin)
//! cat events.json | meetq query --duration 30 --attendee alice --attendee bob
//!
//! # Read events from a file and the request from another, print JSON
//! meetq query -i events.json --request request.json --format json
//!
//! # Only the earliest window
//! meetq query -i events.json -d 60 -a alice --first
//!
//! # Consolidated busy blocks for the attendees
//! meetq busy -i events.json -a alice -a bob
//! ```
//!
//! Events are a JSON array of `{"name", "when": {"start", "duration"}, "attendees"}`
//! with times in minutes from midnight. Set `RUST_LOG` or pass `-v` for logs on stderr.

use anyhow::{Context, Result};
use chrono::NaiveTime;
use clap::{Args, Parser, Subcommand, ValueEnum};
use meeting_engine::{Event, MeetingRequest, TimeRange, END_OF_DAY};
use serde::Serialize;
use std::io::{self, Read};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "meetq",
    version,
    about = "Find meeting windows in a day of calendar events"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v debug, -vv trace). Overridden by RUST_LOG.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// List the free windows where the meeting fits
    Query {
        #[command(flatten)]
        inputs: Inputs,
        /// Print only the earliest window
        #[arg(long)]
        first: bool,
    },
    /// List the consolidated busy blocks of the required attendees
    Busy {
        #[command(flatten)]
        inputs: Inputs,
    },
}

#[derive(Args)]
struct Inputs {
    /// Events JSON file (reads from stdin if omitted)
    #[arg(short, long)]
    input: Option<String>,
    /// Meeting request JSON file (`{"duration": .., "attendees": [..]}`)
    #[arg(long, conflicts_with_all = ["duration", "attendees"])]
    request: Option<String>,
    /// Meeting length in minutes
    #[arg(short, long)]
    duration: Option<u32>,
    /// Required attendee (repeatable)
    #[arg(short, long = "attendee")]
    attendees: Vec<String>,
    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// One `HH:MM-HH:MM (N min)` line per range
    Text,
    /// JSON array of `{start, end, duration}` objects
    Json,
}

/// JSON shape of an output range.
#[derive(Serialize)]
struct RangeDto {
    start: u32,
    end: u32,
    duration: u32,
}

impl From<&TimeRange> for RangeDto {
    fn from(r: &TimeRange) -> Self {
        Self {
            start: r.start(),
            end: r.end(),
            duration: r.duration(),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Query { inputs, first } => {
            let events = load_events(inputs.input.as_deref())?;
            let request = build_request(&inputs, true)?;
            info!(
                events = events.len(),
                duration = request.duration,
                attendees = request.attendees.len(),
                "finding meeting windows"
            );

            let windows: Vec<TimeRange> = if first {
                meeting_engine::first_available(&events, &request)
                    .into_iter()
                    .collect()
            } else {
                meeting_engine::query(&events, &request)
            };
            print_ranges(&windows, inputs.format, "No available windows")?;
        }
        Commands::Busy { inputs } => {
            let events = load_events(inputs.input.as_deref())?;
            let request = build_request(&inputs, false)?;
            let busy = meeting_engine::busy_windows(&events, &request);
            print_ranges(&busy, inputs.format, "No busy time")?;
        }
    }

    Ok(())
}

/// Install a stderr subscriber. `RUST_LOG` wins over `-v`.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_events(path: Option<&str>) -> Result<Vec<Event>> {
    let json = read_input(path)?;
    let events: Vec<Event> =
        serde_json::from_str(&json).context("Failed to parse events JSON")?;
    debug!(count = events.len(), "loaded events");
    Ok(events)
}

/// Build the meeting request from `--request` or from `--duration`/`--attendee`.
///
/// The busy view ignores the duration, so it is only mandatory for queries.
fn build_request(inputs: &Inputs, needs_duration: bool) -> Result<MeetingRequest> {
    if let Some(path) = inputs.request.as_deref() {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path))?;
        return serde_json::from_str(&json).context("Failed to parse request JSON");
    }

    let duration = match (inputs.duration, needs_duration) {
        (Some(d), _) => d,
        (None, false) => 0,
        (None, true) => anyhow::bail!("--duration is required unless --request is given"),
    };
    Ok(MeetingRequest::new(duration, inputs.attendees.iter().cloned()))
}

fn print_ranges(ranges: &[TimeRange], format: OutputFormat, empty_message: &str) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let dtos: Vec<RangeDto> = ranges.iter().map(RangeDto::from).collect();
            println!("{}", serde_json::to_string_pretty(&dtos)?);
        }
        OutputFormat::Text if ranges.is_empty() => println!("{}", empty_message),
        OutputFormat::Text => {
            for r in ranges {
                println!(
                    "{}-{} ({} min)",
                    clock(r.start()),
                    clock(r.end()),
                    r.duration()
                );
            }
        }
    }
    Ok(())
}

/// Render minutes from midnight as `HH:MM`; the exclusive end of day is `24:00`.
fn clock(minute: u32) -> String {
    if minute >= END_OF_DAY {
        return "24:00".to_string();
    }
    NaiveTime::from_num_seconds_from_midnight_opt(minute * 60, 0)
        .map(|t| t.format("%H:%M").to_string())
        .unwrap_or_else(|| minute.to_string())
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}
