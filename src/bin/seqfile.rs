use std::fs::OpenOptions;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::{error, info};

use seqfile_tools::{
    Bounds, ErrorPolicy, FilterOptions, convert_multiline_fasta_to_oneline,
    filter_fastq, parse_blast_output, run_args,
};

#[derive(Parser, Debug)]
#[command(name = "seqfile", version)]
#[command(about = "Filter FASTQ, reformat FASTA, extract BLAST hits, transform DNA/RNA")]
struct Cli {
    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Append log output to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Keep FASTQ records within GC, length and mean quality limits
    Filter {
        /// Input FASTQ file
        #[arg(long)]
        input: PathBuf,

        /// Output FASTQ file
        #[arg(long)]
        output: PathBuf,

        /// GC% bounds: one value (upper bound) or two (min max)
        #[arg(long, num_args = 1..=2, default_values_t = [0.0, 100.0])]
        gc: Vec<f64>,

        /// Length bounds: one value (upper bound) or two (min max)
        #[arg(long, num_args = 1..=2, default_values_t = [0, 1_000_000])]
        length: Vec<usize>,

        /// Minimum mean Phred quality
        #[arg(long, default_value_t = 0.0)]
        quality: f64,

        /// Drop records whose quality and sequence lengths differ instead of failing
        #[arg(long)]
        skip_malformed: bool,
    },
    /// Rewrite multi-line FASTA as one sequence line per entry
    Oneline {
        #[arg(long)]
        input: PathBuf,

        #[arg(long, default_value = "output_oneline.fasta")]
        output: PathBuf,
    },
    /// Extract unique, sorted hit descriptions from a BLAST text report
    Blast {
        #[arg(long)]
        input: PathBuf,

        #[arg(long)]
        output: PathBuf,
    },
    /// Apply transcribe, reverse, complement or reverse_complement
    Transform {
        /// Sequences followed by the operation name
        #[arg(required = true, num_args = 1..)]
        args: Vec<String>,
    },
}

fn init_logging(cli: &Cli) -> Result<()> {
    let level = if cli.verbose { "debug" } else { "info" };
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level));
    if let Some(path) = &cli.log_file {
        let f = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("cannot open log file {path:?}"))?;
        builder.target(env_logger::Target::Pipe(Box::new(f)));
    }
    builder.init();
    Ok(())
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Filter {
            input,
            output,
            gc,
            length,
            quality,
            skip_malformed,
        } => {
            let opts = FilterOptions {
                gc: Bounds::from_values(&gc).context("invalid --gc")?,
                length: Bounds::from_values(&length).context("invalid --length")?,
                min_quality: quality,
                on_malformed: if skip_malformed {
                    ErrorPolicy::Skip
                } else {
                    ErrorPolicy::Return
                },
            };
            let stats = filter_fastq(&input, &output, &opts)?;
            info!(
                "FASTQ filtering completed: {} of {} records written to {:?} ({} skipped)",
                stats.passed, stats.seen, output, stats.skipped
            );
        }
        Command::Oneline { input, output } => {
            let n = convert_multiline_fasta_to_oneline(&input, &output)?;
            info!("wrote {n} FASTA entries to {output:?}");
        }
        Command::Blast { input, output } => {
            let n = parse_blast_output(&input, &output)?;
            info!("wrote {n} hit descriptions to {output:?}");
        }
        Command::Transform { args } => {
            for s in run_args(args.as_slice())?.into_vec() {
                println!("{s}");
            }
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;
    info!("starting seqfile with arguments: {cli:?}");

    run(cli.command).inspect_err(|e| error!("seqfile failed: {e:#}"))
}
