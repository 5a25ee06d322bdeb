use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde_derive::Serialize;
use tracing_subscriber::EnvFilter;

use ztrack::detection::ClassTally;
use ztrack::matcher::{FirstFit, Matcher, NearestNeighbor};
use ztrack::prune::{DropUnmatched, KeepMissing, PrunePolicy};
use ztrack::selector::SignalStatus;
use ztrack::{Config, Frame, Scene, TrackedObject, Tracker};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum MatcherKind {
    /// First track in store order within range
    FirstFit,
    /// Closest track within range
    Nearest,
}

/// Replays detector output through the zone tracker and prints the signal
/// decision of every frame as JSON lines.
#[derive(Parser, Debug)]
#[command(name = "ztrack", version)]
struct Args {
    /// Session config (zones, tracker, filter) in JSON
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// JSON-lines detections, one frame per line; stdin when omitted
    #[arg(long, value_name = "PATH")]
    input: Option<PathBuf>,

    /// Overrides tracker.max_distance
    #[arg(long)]
    max_distance: Option<f32>,

    /// Overrides tracker.max_history
    #[arg(long)]
    max_history: Option<usize>,

    #[arg(long, value_enum, default_value_t = MatcherKind::FirstFit)]
    matcher: MatcherKind,

    /// Keep unmatched tracks for this many frames instead of dropping them
    #[arg(long, default_value_t = 0)]
    grace_frames: u32,
}

#[derive(Serialize)]
struct FrameReport<'a> {
    frame: u64,
    tracked: &'a [TrackedObject],
    counts: &'a [usize],
    selected: Option<usize>,
    signals: SignalStatus,
    tally: ClassTally,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("ztrack=info")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => Config::default(),
    };

    if let Some(max_distance) = args.max_distance {
        config.tracker.max_distance = max_distance;
    }

    if let Some(max_history) = args.max_history {
        config.tracker.max_history = max_history;
    }

    config.validate().context("Invalid configuration")?;

    if config.zones.is_empty() {
        tracing::warn!("No zones configured, every frame will select nothing");
    }

    tracing::info!(
        zones = config.zones.len(),
        max_distance = config.tracker.max_distance,
        max_history = config.tracker.max_history,
        matcher = ?args.matcher,
        grace_frames = args.grace_frames,
        "Session started"
    );

    match (args.matcher, args.grace_frames) {
        (MatcherKind::FirstFit, 0) => run(&args, &config, FirstFit, DropUnmatched),
        (MatcherKind::Nearest, 0) => run(&args, &config, NearestNeighbor, DropUnmatched),
        (MatcherKind::FirstFit, n) => run(&args, &config, FirstFit, KeepMissing { max_missed: n }),
        (MatcherKind::Nearest, n) => {
            run(&args, &config, NearestNeighbor, KeepMissing { max_missed: n })
        }
    }
}

fn run<M, P>(args: &Args, config: &Config, matcher: M, policy: P) -> Result<()>
where
    M: Matcher,
    P: PrunePolicy,
{
    let reader: Box<dyn BufRead> = match &args.input {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("Failed to open {}", path.display()))?,
        )),
        None => Box::new(BufReader::new(io::stdin())),
    };

    let tracker = Tracker::with_strategies(config.tracker, matcher, policy);
    let mut scene = Scene::with_tracker(config.zones.clone(), config.filter.clone(), tracker);
    let mut out = BufWriter::new(io::stdout().lock());

    for (lineno, line) in reader.lines().enumerate() {
        let line = line.context("Failed to read input")?;
        if line.trim().is_empty() {
            continue;
        }

        let frame = Frame::from_json_line(&line)
            .with_context(|| format!("Bad frame on line {}", lineno + 1))?;

        let result = scene.process(&frame.detections);
        let report = FrameReport {
            frame: frame.index,
            tracked: &result.tracked,
            counts: &result.counts,
            selected: result.selected,
            signals: result.signal_status(),
            tally: ClassTally::from_detections(
                frame.iter().filter(|d| config.filter.is_confident(d)),
            ),
        };

        serde_json::to_writer(&mut out, &report)?;
        writeln!(out)?;
    }

    out.flush()?;

    tracing::info!(
        frames = scene.frames(),
        unique_tracks = scene.tracker().store().next_id().0,
        live_tracks = scene.tracker().store().len(),
        "Session finished"
    );

    Ok(())
}
