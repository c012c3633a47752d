//! Command-line interface for srcdump.
//!
//! Exports a project directory into a single annotated text file and reports
//! where it was written and how large it is.

use clap::{ArgAction, Parser};
use srcdump::{BinaryDetection, ExportBuilder, ExportConfig, ExportError, FileConfig, run};
use std::path::PathBuf;
use std::process::ExitCode;

/// srcdump — export a source tree into one text file
#[derive(Parser)]
#[command(name = "srcdump", version, about, long_about = None)]
struct Cli {
    /// Project root directory (default current dir)
    root: Option<PathBuf>,

    /// Output file, overwritten if it exists
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// TOML file with export settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Extra directory name to skip (can be repeated)
    #[arg(long = "skip-dir")]
    skip_dirs: Vec<String>,

    /// Extra file extension to skip, e.g. `.log` (can be repeated)
    #[arg(long = "skip-ext")]
    skip_extensions: Vec<String>,

    /// Start from empty skip lists instead of the built-in ones
    #[arg(long)]
    no_default_skips: bool,

    /// Largest file to include, in bytes
    #[arg(long)]
    max_size: Option<u64>,

    /// Glob of root-relative paths to leave out (can be repeated)
    #[arg(short = 'I', long = "ignore")]
    ignore_patterns: Vec<String>,

    /// Title line of the report header
    #[arg(long)]
    title: Option<String>,

    /// Binary detection strategy
    #[arg(long, value_parser = parse_binary_detection)]
    binary_detection: Option<BinaryDetection>,

    /// Print the run summary as JSON
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

/// Parse string into BinaryDetection enum.
fn parse_binary_detection(s: &str) -> Result<BinaryDetection, String> {
    match s {
        "strict" => Ok(BinaryDetection::Strict),
        "accurate" => Ok(BinaryDetection::Accurate),
        _ => Err(format!("invalid binary detection method: {}", s)),
    }
}

impl Cli {
    fn into_config(self) -> Result<ExportConfig, ExportError> {
        let mut base = ExportConfig::default();
        if self.no_default_skips {
            base.skip_dirs.clear();
            base.skip_extensions.clear();
        }
        if let Some(ref path) = self.config {
            base = FileConfig::load(path)?.apply(base);
        }

        let mut builder = ExportBuilder::from_config(base);
        if let Some(root) = self.root {
            builder = builder.root(root);
        }
        if let Some(output) = self.output {
            builder = builder.output(output);
        }
        for dir in self.skip_dirs {
            builder = builder.add_skip_dir(dir);
        }
        for ext in self.skip_extensions {
            builder = builder.add_skip_extension(ext);
        }
        if let Some(size) = self.max_size {
            builder = builder.max_file_size(size);
        }
        for pattern in self.ignore_patterns {
            builder = builder.add_ignore_pattern(pattern);
        }
        if let Some(title) = self.title {
            builder = builder.title(title);
        }
        if let Some(method) = self.binary_detection {
            builder = builder.binary_detection(method);
        }
        Ok(builder.build())
    }
}

#[cfg(feature = "logging")]
fn init_logging(verbose: u8) {
    use tracing::Level;
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    #[cfg(feature = "logging")]
    init_logging(cli.verbose);
    let json = cli.json;

    let config = match cli.into_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if !json {
        println!("Starting export from: {}", config.root.display());
    }
    let summary = match run(&config) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {}", e);
            if matches!(e, ExportError::RootNotFound(_)) {
                eprintln!(
                    "Pass the project directory as the ROOT argument \
                     or set `root` in the config file."
                );
            }
            return ExitCode::FAILURE;
        }
    };

    if json {
        match serde_json::to_string_pretty(&summary) {
            Ok(out) => println!("{}", out),
            Err(e) => {
                eprintln!("JSON serialization error: {}", e);
                return ExitCode::FAILURE;
            }
        }
    } else {
        println!("Export completed to {}", summary.output.display());
        println!("File size: {:.2} MB", summary.megabytes());
    }
    ExitCode::SUCCESS
}
