//! churn-runner: headless driver for the churn scoring engine.
//!
//! Usage:
//!   churn-runner --profile payload.json
//!   churn-runner --seed 12345 --customers 500
//!   churn-runner --ipc-mode
//!
//! `--data-dir DIR` loads `DIR/scoring_config.json` (default `./data`);
//! defaults are used when the file is absent.

use anyhow::Result;
use churn_core::{
    population::SyntheticPopulation, summary::CohortSummary, RawProfile, RiskLevel,
    ScoreResult, ScoringConfig, ScoringEngine,
};
use std::env;
use std::io::{self, BufRead, Write};
use std::path::Path;

#[derive(serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum IpcCommand {
    Score { profile: RawProfile },
    GetConfig,
    Quit,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let seed = parse_arg(&args, "--seed", 42u64);
    let customers = parse_arg(&args, "--customers", 500usize);
    let ipc_mode = args.iter().any(|a| a == "--ipc-mode");
    let data_dir = string_arg(&args, "--data-dir").unwrap_or("./data");
    let profile_path = string_arg(&args, "--profile");

    let engine = ScoringEngine::new(load_config(data_dir)?)?;

    if ipc_mode {
        run_ipc_loop(&engine)
    } else if let Some(path) = profile_path {
        let body = std::fs::read_to_string(path)?;
        let result = engine.score_json(&body)?;
        println!("{}", serde_json::to_string_pretty(&result)?);
        Ok(())
    } else {
        println!("churn-runner — synthetic cohort");
        println!("  seed:       {seed}");
        println!("  customers:  {customers}");
        println!("  data_dir:   {data_dir}");
        println!();
        run_cohort(&engine, seed, customers)
    }
}

fn load_config(data_dir: &str) -> Result<ScoringConfig> {
    let path = format!("{data_dir}/scoring_config.json");
    if Path::new(&path).exists() {
        log::info!("loading scoring config from {path}");
        Ok(ScoringConfig::load(&path)?)
    } else {
        log::warn!("{path} not found; using built-in defaults");
        Ok(ScoringConfig::default())
    }
}

fn run_ipc_loop(engine: &ScoringEngine) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut handle = stdin.lock();
    let mut buffer = String::new();

    loop {
        buffer.clear();
        let bytes_read = handle.read_line(&mut buffer)?;
        if bytes_read == 0 {
            break; // EOF
        }
        if buffer.trim().is_empty() {
            continue;
        }

        let cmd: IpcCommand = match serde_json::from_str(&buffer) {
            Ok(c) => c,
            Err(e) => {
                writeln!(stdout, "{}", serde_json::json!({ "error": e.to_string() }))?;
                stdout.flush()?;
                continue;
            }
        };

        match cmd {
            IpcCommand::Quit => break,
            IpcCommand::GetConfig => {
                writeln!(stdout, "{}", serde_json::to_string(engine.config())?)?;
            }
            IpcCommand::Score { profile } => match engine.score_raw(&profile) {
                Ok(result) => writeln!(stdout, "{}", serde_json::to_string(&result)?)?,
                Err(e) => {
                    log::debug!("rejected profile: {e}");
                    writeln!(stdout, "{}", serde_json::json!({ "error": e.to_string() }))?;
                }
            },
        }
        stdout.flush()?;
    }
    Ok(())
}

fn run_cohort(engine: &ScoringEngine, seed: u64, customers: usize) -> Result<()> {
    let cohort = SyntheticPopulation::generate(seed, customers);
    let results = cohort
        .iter()
        .map(|c| engine.score(&c.profile))
        .collect::<Result<Vec<ScoreResult>, _>>()?;

    let summary = CohortSummary::from_results(&results);
    print_summary(&summary);
    Ok(())
}

fn print_summary(summary: &CohortSummary) {
    println!("=== COHORT SUMMARY ===");
    println!("  run_id:         {}", summary.run_id);
    println!("  generated_at:   {}", summary.generated_at.to_rfc3339());
    println!("  customers:      {}", summary.customers);
    println!("  mean score:     {:.1}", summary.mean_score);
    println!("  max score:      {}", summary.max_score);
    println!("  clamped:        {}", summary.clamped_count);
    for level in [RiskLevel::High, RiskLevel::Medium, RiskLevel::Low] {
        println!("  {:<14}  {}", format!("{level}:"), summary.count(level));
    }

    println!();
    println!("=== PRIMARY DRIVERS ===");
    if summary.primary_drivers.is_empty() {
        println!("  (No risk-increasing factors)");
    } else {
        let mut drivers: Vec<_> = summary.primary_drivers.iter().collect();
        drivers.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
        for (feature, count) in drivers {
            println!("  {:<18} {count}", feature.name());
        }
    }
    println!("  {:<18} {}", "none", summary.no_driver);
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}

fn string_arg<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}
