//! mat2trip - Convert a labelled matrix into triplets

use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use mat2trip::config::{Config, ConfigFile, Delimiter, Orientation, SortMode};
use mat2trip::parser::open_input;
use mat2trip::pipeline::convert;

/// Convert a matrix with a header row and a label column into row/column/value triplets
#[derive(Parser, Debug)]
#[command(name = "mat2trip")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input matrix file (stdin if omitted or "-")
    input: Option<PathBuf>,

    /// Use header labels as the outer key (column-major output)
    #[arg(long, conflicts_with = "byrow")]
    bycol: bool,

    /// Use row labels as the outer key (default)
    #[arg(long)]
    byrow: bool,

    /// Sort labels lexicographically
    #[arg(long, conflicts_with = "nsort")]
    sort: bool,

    /// Sort labels numerically
    #[arg(long)]
    nsort: bool,

    /// Require a symmetric matrix and print only its lower triangle
    #[arg(long)]
    sym: bool,

    /// Field delimiter ("tab" for a tab character; default: whitespace)
    #[arg(long, value_parser = clap::value_parser!(Delimiter))]
    delim: Option<Delimiter>,

    /// JSON file with option defaults
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Debug logging, including a dump of the parsed matrix
    #[arg(long)]
    debug: bool,
}

impl Cli {
    /// Resolve flags over config file defaults
    fn resolve(&self) -> Result<Config> {
        let mut config = Config::new();

        if let Some(ref path) = self.config {
            let file = ConfigFile::load(path)
                .with_context(|| format!("Failed to load config file: {}", path.display()))?;
            config = config.with_file(&file)?;
        }

        if self.bycol {
            config = config.with_orientation(Orientation::ByCol);
        } else if self.byrow {
            config = config.with_orientation(Orientation::ByRow);
        }

        if self.sort {
            config = config.with_sort(SortMode::Lexical);
        } else if self.nsort {
            config = config.with_sort(SortMode::Numeric);
        }

        if self.sym {
            config = config.with_symmetric(true);
        }

        if let Some(ref delim) = self.delim {
            config = config.with_delimiter(delim.clone());
        }

        Ok(config.with_debug(self.debug))
    }
}

fn init_logging(debug: bool) {
    let default = if debug { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let config = cli.resolve()?;
    tracing::debug!(?config, "resolved configuration");

    let input = open_input(cli.input.as_deref())?;

    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    convert(input, &mut writer, &config).with_context(|| match cli.input {
        Some(ref path) => format!("Failed to convert {}", path.display()),
        None => "Failed to convert stdin".to_string(),
    })?;

    Ok(())
}
