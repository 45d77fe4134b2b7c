//! engagement-runner: headless driver for the pursuit-evasion engine.
//!
//! Usage:
//!   engagement-runner run --law 2 --scenario original --script inputs.json
//!   engagement-runner compare --scenario crossing
//!   engagement-runner sweep --seeds 200 --law 4

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use pursuit_core::commands::ScheduledCommand;
use pursuit_core::config::SimConfig;
use pursuit_core::enums::{EngagementPhase, GuidanceLaw, Outcome};
use pursuit_sim::scenario::{self, Scenario};
use pursuit_sim::SimulationEngine;

const DEFAULT_MAX_TICKS: u64 = 100_000;
const DEFAULT_SEEDS: u64 = 100;

fn main() -> Result<()> {
    init_logging();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage();
        std::process::exit(1);
    }

    match args[1].as_str() {
        "run" => cmd_run(&args[2..]),
        "compare" => cmd_compare(&args[2..]),
        "sweep" => cmd_sweep(&args[2..]),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => {
            print_usage();
            bail!("unknown command: {other}");
        }
    }
}

/// Log to stderr, filtered by `RUST_LOG` (default `info`).
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_usage() {
    eprintln!(
        "engagement-runner: headless pursuit-evasion engagements\n\
         \n\
         Commands:\n\
         \n\
         run       Fly one engagement and print the final snapshot as JSON\n\
         \n\
           --script <path>    JSON list of {{\"tick\": N, \"command\": {{...}}}} entries\n\
           --trails           Keep trails in the printed snapshot\n\
         \n\
         compare   Fly every guidance law from the same start and print a summary\n\
         \n\
         sweep     Fly seeded random geometries and count outcomes per law\n\
         \n\
           --seeds <N>        Number of geometries (default: 100)\n\
           --seed-start <S>   First seed (default: 0)\n\
         \n\
         Common options:\n\
         \n\
           --config <path>    SimConfig JSON; missing fields take defaults\n\
           --scenario <name>  original | head-on | crossing | tail-chase\n\
           --law <key>        1 PP, 2 TPN, 3 APN, 4 ZEMPN, 5 ZEMAPN, 6 myZEM\n\
           --dt <secs>        Step length (default: 1 / frame_rate)\n\
           --max-ticks <N>    Give up after N ticks (default: 100000)\n\
         \n\
         Examples:\n\
         \n\
           engagement-runner run --law 2 --config tight.json\n\
           engagement-runner sweep --seeds 500 --law 5\n"
    );
}

// --- Argument parsing ---

fn parse_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            return Some(&args[i + 1]);
        }
    }
    None
}

fn has_flag(args: &[String], flag: &str) -> bool {
    args.iter().any(|a| a == flag)
}

fn parse_number<T: std::str::FromStr>(args: &[String], flag: &str, default: T) -> Result<T> {
    match parse_value(args, flag) {
        Some(raw) => raw
            .parse()
            .map_err(|_| anyhow::anyhow!("invalid value for {flag}: {raw}")),
        None => Ok(default),
    }
}

/// Build the config from `--config`, `--scenario` and `--law`, in that order.
fn load_config(args: &[String]) -> Result<SimConfig> {
    let mut config = match parse_value(args, "--config") {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {path}"))?;
            SimConfig::from_json(&json).with_context(|| format!("parsing config {path}"))?
        }
        None => SimConfig::default(),
    };

    if let Some(name) = parse_value(args, "--scenario") {
        let Some(scenario) = Scenario::from_name(name) else {
            bail!("unknown scenario: {name}");
        };
        config = scenario.apply(&config);
    }

    if let Some(raw) = parse_value(args, "--law") {
        let key: u8 = raw
            .parse()
            .with_context(|| format!("invalid law key: {raw}"))?;
        config.law = GuidanceLaw::try_from(key)?;
    }

    config.validate()?;
    Ok(config)
}

fn load_script(path: &Path) -> Result<Vec<ScheduledCommand>> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("reading script {}", path.display()))?;
    let mut script: Vec<ScheduledCommand> = serde_json::from_str(&json)
        .with_context(|| format!("parsing script {}", path.display()))?;
    script.sort_by_key(|entry| entry.tick);
    Ok(script)
}

struct RunOptions {
    dt: f64,
    max_ticks: u64,
}

fn run_options(args: &[String], config: &SimConfig) -> Result<RunOptions> {
    Ok(RunOptions {
        dt: parse_number(args, "--dt", config.frame_interval_secs())?,
        max_ticks: parse_number(args, "--max-ticks", DEFAULT_MAX_TICKS)?,
    })
}

// --- Run command ---

fn cmd_run(args: &[String]) -> Result<()> {
    let config = load_config(args)?;
    let options = run_options(args, &config)?;
    let script = match parse_value(args, "--script") {
        Some(path) => load_script(&PathBuf::from(path))?,
        None => Vec::new(),
    };

    let mut engine = SimulationEngine::new(config)?;
    engine.start();

    // Script ticks count steps since launch, not the engine clock,
    // which restarts on every reset.
    let mut pending = script.into_iter().peekable();
    for step in 0..options.max_ticks {
        while let Some(entry) = pending.next_if(|entry| entry.tick <= step) {
            engine
                .apply(entry.command.clone())
                .with_context(|| format!("applying {:?} at tick {}", entry.command, entry.tick))?;
        }
        if engine.phase() == EngagementPhase::GameOver {
            break;
        }
        engine.update(options.dt)?;
    }

    let mut snapshot = engine.snapshot();
    if !has_flag(args, "--trails") {
        snapshot.evader_trail.clear();
        snapshot.pursuer_trail.clear();
    }
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}

// --- Compare command ---

#[derive(Debug, Serialize)]
struct LawSummary {
    law: &'static str,
    outcome: Option<Outcome>,
    ticks: u64,
    elapsed_secs: f64,
    miss_distance: f64,
    final_pursuer_speed: f64,
    pursuer_exhausted: bool,
}

fn fly(config: SimConfig, options: &RunOptions) -> Result<LawSummary> {
    let mut engine = SimulationEngine::new(config)?;
    engine.run_to_completion(options.dt, options.max_ticks)?;
    let snap = engine.snapshot();
    Ok(LawSummary {
        law: snap.law.name(),
        outcome: snap.outcome,
        ticks: snap.time.tick,
        elapsed_secs: snap.time.elapsed_secs,
        miss_distance: snap.miss_distance,
        final_pursuer_speed: snap.pursuer.speed,
        pursuer_exhausted: snap.pursuer_exhausted,
    })
}

fn cmd_compare(args: &[String]) -> Result<()> {
    let config = load_config(args)?;
    let options = run_options(args, &config)?;

    let mut summaries = Vec::new();
    for law in GuidanceLaw::ALL {
        let summary = fly(SimConfig { law, ..config.clone() }, &options)?;
        info!(
            law = summary.law,
            outcome = ?summary.outcome,
            miss_distance = summary.miss_distance,
            "law flown"
        );
        summaries.push(summary);
    }
    println!("{}", serde_json::to_string_pretty(&summaries)?);
    Ok(())
}

// --- Sweep command ---

#[derive(Debug, Default, Serialize)]
struct SweepSummary {
    law: &'static str,
    runs: u64,
    intercepted: u64,
    escaped: u64,
    unresolved: u64,
    exhausted: u64,
    mean_miss_distance: f64,
}

fn cmd_sweep(args: &[String]) -> Result<()> {
    let base = load_config(args)?;
    let options = run_options(args, &base)?;
    let seeds: u64 = parse_number(args, "--seeds", DEFAULT_SEEDS)?;
    let seed_start: u64 = parse_number(args, "--seed-start", 0)?;

    let laws: Vec<GuidanceLaw> = if parse_value(args, "--law").is_some() {
        vec![base.law]
    } else {
        GuidanceLaw::ALL.to_vec()
    };

    let mut summaries = Vec::new();
    for law in laws {
        let mut summary = SweepSummary {
            law: law.name(),
            ..Default::default()
        };
        let mut miss_total = 0.0;
        for seed in seed_start..seed_start + seeds {
            let config = SimConfig {
                law,
                ..scenario::randomized(&base, seed)
            };
            let run = fly(config, &options)?;
            summary.runs += 1;
            match run.outcome {
                Some(Outcome::Intercepted) => summary.intercepted += 1,
                Some(Outcome::Escaped) => summary.escaped += 1,
                None => summary.unresolved += 1,
            }
            if run.pursuer_exhausted {
                summary.exhausted += 1;
            }
            miss_total += run.miss_distance;
        }
        if summary.runs > 0 {
            summary.mean_miss_distance = miss_total / summary.runs as f64;
        }
        info!(
            law = summary.law,
            intercepted = summary.intercepted,
            runs = summary.runs,
            "sweep finished"
        );
        summaries.push(summary);
    }
    println!("{}", serde_json::to_string_pretty(&summaries)?);
    Ok(())
}
