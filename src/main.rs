use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use ferrous_edit::core::alignment::edit_distance::distance_str;
use ferrous_edit::replay::{self, Replay};
use ferrous_edit::{ReplayOpt, defaults};

#[derive(Parser)]
#[command(name = "ferrous-edit")]
#[command(about = "FerrousEdit - edit distance with step-by-step edit replay", long_about = None)]
#[command(version)]
struct Cli {
    /// Verbose level: 1=error, 2=warning, 3=message, 4+=debugging
    #[arg(short = 'v', long, value_name = "INT", default_value_t = defaults::VERBOSITY, global = true)]
    verbosity: i32,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the edit distance between two strings
    Distance {
        #[arg(value_name = "SOURCE")]
        source: String,

        #[arg(value_name = "TARGET")]
        target: String,
    },

    /// Print distance, edit script and every intermediate string
    Align {
        #[arg(value_name = "SOURCE")]
        source: String,

        #[arg(value_name = "TARGET")]
        target: String,

        /// Also print the per-cell fill log
        #[arg(short = 's', long)]
        steps: bool,

        /// Reject inputs longer than INT characters (0 = unlimited)
        #[arg(short = 'L', long, value_name = "INT", default_value_t = defaults::MAX_INPUT_LEN)]
        max_len: usize,
    },

    /// Replay tab-separated SOURCE<TAB>TARGET lines from a file
    Batch {
        #[arg(value_name = "PAIRS.TSV")]
        pairs: PathBuf,

        /// Number of threads (default: all available cores)
        #[arg(short = 't', long, value_name = "INT")]
        threads: Option<usize>,

        /// Reject inputs longer than INT characters (0 = unlimited)
        #[arg(short = 'L', long, value_name = "INT", default_value_t = defaults::MAX_INPUT_LEN)]
        max_len: usize,
    },
}

fn init_logger(opt: &ReplayOpt) {
    env_logger::Builder::from_default_env()
        .filter_level(opt.log_level())
        .format_timestamp(None)
        .format_target(false)
        .init();
}

fn configure_threads(threads: Option<usize>) {
    let Some(num_threads) = threads else {
        return;
    };
    let num_threads = num_threads.max(1);

    match rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build_global()
    {
        Ok(_) => log::debug!("Built global Rayon thread pool with {} threads", num_threads),
        Err(e) => log::warn!(
            "Failed to configure thread pool: {} (may already be initialized)",
            e
        ),
    }
}

fn read_pairs(path: &Path) -> Result<Vec<(String, String)>> {
    let file = File::open(path).with_context(|| format!("Error opening {}", path.display()))?;
    let mut pairs = Vec::new();

    for (lineno, line) in BufReader::new(file).lines().enumerate() {
        let line = line.with_context(|| format!("Error reading {}", path.display()))?;
        if line.trim().is_empty() || line.starts_with('#') {
            continue;
        }
        let pair = ReplayOpt::parse_pair_line(&line)
            .map_err(|e| anyhow::anyhow!("{}:{}: {}", path.display(), lineno + 1, e))?;
        pairs.push(pair);
    }
    Ok(pairs)
}

fn print_align(out: &mut impl Write, r: &Replay<char>) -> Result<()> {
    let counts = r.script.counts();
    writeln!(out, "distance\t{}", r.distance)?;
    writeln!(out, "cigar\t{}", r.cigar())?;
    writeln!(
        out,
        "counts\tmatch={} replace={} insert={} delete={}",
        counts.matches, counts.replaces, counts.inserts, counts.deletes
    )?;

    if let Some(steps) = &r.steps {
        for step in steps {
            writeln!(
                out,
                "step\t{}\t{}\t{}\t{}\t{}",
                step.pos, step.source_elem, step.target_elem, step.kind, step.value
            )?;
        }
    }

    for op in &r.script {
        writeln!(out, "op\t{}", op)?;
    }
    for state in r.trace_strings() {
        writeln!(out, "state\t{}", state)?;
    }
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Distance { source, target } => {
            let distance = distance_str(&source, &target);
            writeln!(out, "{}", distance)?;
        }

        Commands::Align {
            source,
            target,
            steps,
            max_len,
        } => {
            let opt = ReplayOpt {
                max_input_len: ReplayOpt::length_guard(max_len),
                trace_steps: steps,
                verbosity: cli.verbosity,
                ..ReplayOpt::default()
            };
            let r = Replay::from_strs(&source, &target, &opt)?;
            print_align(&mut out, &r)?;
        }

        Commands::Batch {
            pairs,
            threads,
            max_len,
        } => {
            let opt = ReplayOpt {
                max_input_len: ReplayOpt::length_guard(max_len),
                threads,
                verbosity: cli.verbosity,
                ..ReplayOpt::default()
            };
            configure_threads(opt.threads);

            let input = read_pairs(&pairs)?;
            log::info!("Read {} pairs from {}", input.len(), pairs.display());

            let mut failed = 0usize;
            for ((source, target), result) in input.iter().zip(replay::replay_batch(&input, &opt)) {
                match result {
                    Ok(r) => writeln!(out, "{}\t{}\t{}\t{}", source, target, r.distance, r.cigar())?,
                    Err(e) => {
                        failed += 1;
                        log::error!("{:?} -> {:?}: {}", source, target, e);
                    }
                }
            }

            if failed > 0 {
                anyhow::bail!("{} of {} pairs failed", failed, input.len());
            }
        }
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    let opt = ReplayOpt {
        verbosity: cli.verbosity,
        ..ReplayOpt::default()
    };
    init_logger(&opt);

    if let Err(e) = run(cli) {
        log::error!("{:#}", e);
        std::process::exit(1);
    }
}
