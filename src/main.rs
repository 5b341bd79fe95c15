use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use shakesplit::config::{
    DEFAULT_FRAGMENT_DIR, DEFAULT_INPUT_DIR, DEFAULT_JSONL_FILE, DEFAULT_LOG_FILTER,
};
use shakesplit::{
    AssembleReport, Boundary, Config, FragmentStore, SegmentReport, assemble, run_pipeline,
    segment_file, split_corpus,
};
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;

#[derive(Parser)]
#[command(name = "shakesplit")]
#[command(about = "Split a text corpus into fragments and build fine-tuning JSONL", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Recreate the fragment store and split sonnets.txt, plays.txt and verse.txt
    Split {
        /// Directory holding the three source files
        #[arg(long, env = "SHAKESPLIT_INPUT_DIR", default_value = DEFAULT_INPUT_DIR)]
        input_dir: PathBuf,

        /// Fragment store (emptied before the run)
        #[arg(long, env = "SHAKESPLIT_OUTPUT_DIR", default_value = DEFAULT_FRAGMENT_DIR)]
        output_dir: PathBuf,
    },

    /// Split a single file with one boundary style
    Segment {
        /// Source text file
        #[arg(long)]
        source: PathBuf,

        /// Fragment file prefix, e.g. "s" for s0, s1, ...
        #[arg(long)]
        prefix: String,

        /// Boundary style (numeral, scene, blank)
        #[arg(long)]
        boundary: Boundary,

        /// Fragment store
        #[arg(long, env = "SHAKESPLIT_OUTPUT_DIR", default_value = DEFAULT_FRAGMENT_DIR)]
        output_dir: PathBuf,

        /// Empty the fragment store first
        #[arg(long)]
        reset: bool,
    },

    /// Write one chat-style training example per fragment file
    Assemble {
        /// Fragment store to read
        #[arg(long, env = "SHAKESPLIT_OUTPUT_DIR", default_value = DEFAULT_FRAGMENT_DIR)]
        fragments: PathBuf,

        /// JSONL output file
        #[arg(long, env = "SHAKESPLIT_JSONL", default_value = DEFAULT_JSONL_FILE)]
        output: PathBuf,
    },

    /// Split, then assemble
    Run {
        #[arg(long, env = "SHAKESPLIT_INPUT_DIR", default_value = DEFAULT_INPUT_DIR)]
        input_dir: PathBuf,

        #[arg(long, env = "SHAKESPLIT_OUTPUT_DIR", default_value = DEFAULT_FRAGMENT_DIR)]
        output_dir: PathBuf,

        #[arg(long, env = "SHAKESPLIT_JSONL", default_value = DEFAULT_JSONL_FILE)]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let cli = Cli::parse();
    let start = Instant::now();

    match cli.command {
        Command::Split {
            input_dir,
            output_dir,
        } => {
            let config = Config::new().input_dir(input_dir).fragment_dir(output_dir);
            let reports = split_corpus(&config)?;
            log_segment_reports(&reports);
        }
        Command::Segment {
            source,
            prefix,
            boundary,
            output_dir,
            reset,
        } => {
            let store = if reset {
                FragmentStore::reset(&output_dir)
            } else {
                FragmentStore::open(&output_dir)
            }
            .context("Failed to prepare fragment store")?;

            let report = segment_file(&source, |l| boundary.matches(l), &prefix, &store)?;
            log_segment_reports(&[report]);
        }
        Command::Assemble { fragments, output } => {
            let report = assemble(&fragments, &output)?;
            log_assemble_report(&report);
        }
        Command::Run {
            input_dir,
            output_dir,
            output,
        } => {
            let config = Config::new()
                .input_dir(input_dir)
                .fragment_dir(output_dir)
                .jsonl_path(output);
            let (reports, assembled) = run_pipeline(&config)?;
            log_segment_reports(&reports);
            log_assemble_report(&assembled);
        }
    }

    info!("Done in {:.2}s", start.elapsed().as_secs_f64());
    Ok(())
}

fn log_segment_reports(reports: &[SegmentReport]) {
    for report in reports {
        info!(
            "  {}: {} fragments, {} lines, {} merges",
            report.prefix, report.fragments, report.lines_written, report.merges
        );
    }
    let total: usize = reports.iter().map(|r| r.fragments).sum();
    info!("Fragments written: {}", total);
}

fn log_assemble_report(report: &AssembleReport) {
    info!("JSONL file has been written ({} examples)", report.examples);
}
