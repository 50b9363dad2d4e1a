//! Student Insight - Main Entry Point
//!
//! `analyze` runs the full pipeline and writes the augmented table,
//! `report` prints the detailed view of one student, `layout` prints the
//! clustering feature layout.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};

use student_insight::api::commands::{self, RunSummary};
use student_insight::constants::{APP_NAME, APP_VERSION};
use student_insight::AnalysisConfig;

#[derive(Debug, Parser)]
#[command(name = "student-insight", version, about = "Cohort, persona and risk analysis for student tables")]
struct Cli {
    /// Debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Analyze a CSV file and write the augmented table
    Analyze {
        /// Input CSV with at least G1, G2, G3 columns
        input: PathBuf,

        /// Augmented table as CSV
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Full report as JSON
        #[arg(long)]
        json: Option<PathBuf>,

        #[command(flatten)]
        tuning: Tuning,
    },

    /// Print the detailed report of one student
    Report {
        input: PathBuf,

        /// Student position in the analyzed table (0-based)
        #[arg(short, long)]
        student: usize,

        #[command(flatten)]
        tuning: Tuning,
    },

    /// Print the clustering feature layout
    Layout,
}

/// CLI overrides for `AnalysisConfig`
#[derive(Debug, Args)]
struct Tuning {
    #[arg(long)]
    seed: Option<u64>,

    /// k-means restarts per fit
    #[arg(long)]
    n_init: Option<usize>,

    #[arg(long)]
    max_iter: Option<usize>,

    #[arg(long)]
    max_k: Option<usize>,

    /// Evaluate candidate k values one at a time
    #[arg(long)]
    sequential: bool,
}

impl Tuning {
    fn apply(&self, mut cfg: AnalysisConfig) -> AnalysisConfig {
        if let Some(seed) = self.seed {
            cfg.seed = seed;
        }
        if let Some(n_init) = self.n_init {
            cfg.n_init = n_init.max(1);
        }
        if let Some(max_iter) = self.max_iter {
            cfg.max_iter = max_iter.max(1);
        }
        if let Some(max_k) = self.max_k {
            cfg.max_k = max_k.max(3);
        }
        if self.sequential {
            cfg.parallel_search = false;
        }
        cfg
    }
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Analyze {
            input,
            csv,
            json,
            tuning,
        } => {
            let cfg = tuning.apply(AnalysisConfig::from_env());
            log::info!("Starting {} v{}...", APP_NAME, APP_VERSION);
            log::debug!("Config: {:?}", cfg);

            let report = commands::run_analysis(&input, &cfg)
                .with_context(|| format!("analysis of {} failed", input.display()))?;

            let written = commands::export_outputs(&report, csv.as_deref(), json.as_deref())
                .context("failed to write outputs")?;
            if written.is_empty() {
                log::info!("No output path given; use --csv or --json to save results");
            }

            print!("{}", RunSummary::from_report(&report).render());
        }

        Command::Report {
            input,
            student,
            tuning,
        } => {
            let cfg = tuning.apply(AnalysisConfig::from_env());
            let report = commands::run_analysis(&input, &cfg)
                .with_context(|| format!("analysis of {} failed", input.display()))?;
            print!("{}", commands::student_report(&report, student)?);
        }

        Command::Layout => {
            print!("{}", commands::render_layout(&commands::layout_info()));
        }
    }

    Ok(())
}
