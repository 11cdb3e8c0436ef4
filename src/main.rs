//! colordna - Color DNA/RNA sequences and quality scores in terminal output
//!
//! ## Usage
//!
//! ```bash
//! colordna sequences.fasta
//! colordna --scheme classic reads.fastq
//! cat file.sam | colordna
//! colordna -f vcf calls.txt        # Force format
//! colordna schemes                 # List color schemes
//! colordna preview monochrome      # Preview a scheme
//! ```
//!
//! ## Supported Formats
//!
//! - FASTA (.fasta, .fa, .fna, .ffn, .faa, .frn)
//! - FASTQ (.fastq, .fq)
//! - SAM (.sam)
//! - VCF (.vcf)

// Use jemalloc for better memory management (returns memory to OS)
#[cfg(not(windows))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

use std::io::{self, BufRead, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use crossterm::style::Stylize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use colordna::config::{default_config_path, Config};
use colordna::formats::Format;
use colordna::scheme::{ColorScheme, DEFAULT_SCHEME};
use colordna::stream::StreamProcessor;
use colordna::style::preview;

/// File format specification for command line
#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    /// FASTA format
    Fasta,
    /// FASTQ format
    Fastq,
    /// SAM format
    Sam,
    /// VCF format
    Vcf,
    /// Auto-detect from extension and content
    Auto,
}

impl From<FormatArg> for Format {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Fasta => Format::Fasta,
            FormatArg::Fastq => Format::Fastq,
            FormatArg::Sam => Format::Sam,
            FormatArg::Vcf => Format::Vcf,
            FormatArg::Auto => Format::Unknown,
        }
    }
}

/// colordna - Color DNA/RNA sequences and quality scores in terminal output
///
/// Reads FASTA, FASTQ, SAM or VCF files (or standard input when no file is
/// given) and writes them to standard output with colored nucleotides and
/// quality scores.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,

    /// Sequence files to colorize (standard input if none).
    /// Use `./schemes` or `-- schemes` for a file named like a subcommand.
    files: Vec<PathBuf>,

    /// Config file (default: ~/.colordna.toml)
    #[arg(long = "config", global = true)]
    config: Option<PathBuf>,

    /// Color scheme to use
    #[arg(short = 's', long = "scheme", default_value = DEFAULT_SCHEME, global = true)]
    scheme: String,

    /// Force a specific file format (overrides auto-detection)
    #[arg(short = 'f', long = "format", value_enum, default_value = "auto", global = true)]
    format: FormatArg,

    /// Verbose output on standard error
    #[arg(short = 'v', long = "verbose", global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List available color schemes
    Schemes,
    /// Preview a color scheme, or all schemes
    Preview {
        /// Scheme to preview
        scheme: Option<String>,
    },
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Colorizes each file in turn, or `input` when no file is given.
///
/// An undecidable input stream is fatal; failing files are logged and the
/// run fails once every file has been tried.
fn colorize<R: BufRead, W: Write>(
    processor: &StreamProcessor<'_>,
    files: &[PathBuf],
    input: R,
    out: &mut W,
) -> Result<()> {
    if files.is_empty() {
        debug!("Reading from standard input");
        processor
            .process(input, out, None)
            .context("failed to process standard input")?;
        return Ok(());
    }

    debug!("Processing {} file(s)", files.len());
    let report = processor.process_files(files, out)?;
    if !report.is_success() {
        anyhow::bail!(
            "{} of {} file(s) could not be processed",
            report.failed.len(),
            files.len()
        );
    }
    Ok(())
}

fn run_colorize(scheme: &ColorScheme, format: Format, files: &[PathBuf]) -> Result<()> {
    let processor = StreamProcessor::new(scheme).with_format(format);
    let mut out = BufWriter::new(io::stdout().lock());
    colorize(&processor, files, io::stdin().lock(), &mut out)
}

/// Returns true if the error comes from writing to a closed pipe.
fn is_broken_pipe(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| {
        cause
            .downcast_ref::<io::Error>()
            .is_some_and(|e| e.kind() == io::ErrorKind::BrokenPipe)
    })
}

fn run_schemes(config: &Config, current: &str) -> Result<()> {
    let mut out = io::stdout().lock();
    writeln!(out, "Available color schemes:")?;
    writeln!(out)?;
    for (name, scheme) in &config.color_schemes {
        let status = if name == current { " (default)" } else { "" };
        let kind = if scheme.background {
            " [background colors]"
        } else {
            " [font colors only]"
        };
        writeln!(out, "  {}{}{}", name, status, kind)?;
    }
    writeln!(out)?;
    writeln!(out, "Current default: {}", current)?;
    writeln!(out, "Use 'colordna preview [scheme-name]' to see how a scheme looks.")?;
    writeln!(out, "Use 'colordna --scheme [scheme-name]' to use a different scheme.")?;
    Ok(())
}

fn run_preview(config: &Config, requested: Option<&str>, current: &str) -> Result<()> {
    let mut out = io::stdout().lock();

    if let Some(name) = requested {
        let scheme = config.scheme(name)?;
        writeln!(out, "Color scheme: {}", name.bold())?;
        writeln!(out, "{}", "-".repeat(40))?;
        write!(out, "{}", preview(scheme))?;
        return Ok(());
    }

    writeln!(out, "Available color schemes:")?;
    writeln!(out, "{}", "=".repeat(50))?;
    for (name, scheme) in &config.color_schemes {
        let marker = if name == current { " (current)" } else { "" };
        writeln!(out)?;
        writeln!(out, "Scheme: {}{}", name.as_str().bold(), marker)?;
        writeln!(out, "{}", "-".repeat(40))?;
        write!(out, "{}", preview(scheme))?;
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config_path = args.config.unwrap_or_else(default_config_path);
    debug!("Loading configuration from: {}", config_path.display());
    let config = Config::load(&config_path)
        .with_context(|| format!("failed to load config {}", config_path.display()))?;
    debug!(
        "Available color schemes: {}",
        config.scheme_names().collect::<Vec<_>>().join(", ")
    );

    let result = match args.command {
        Some(Command::Schemes) => run_schemes(&config, &args.scheme),
        Some(Command::Preview { scheme }) => run_preview(&config, scheme.as_deref(), &args.scheme),
        None => {
            let scheme = config.scheme(&args.scheme)?;
            debug!("Using color scheme: {}", args.scheme);
            run_colorize(scheme, args.format.into(), &args.files)
        }
    };

    match result {
        Err(e) if is_broken_pipe(&e) => Ok(()),
        other => other,
    }
}
