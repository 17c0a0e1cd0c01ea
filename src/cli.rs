use clap::Parser;
use std::path::PathBuf;

/// Resolve curated license, copyright and notice information for packages
/// from ScanCode results
#[derive(Parser, Debug)]
#[command(name = "scan-curator")]
#[command(version)]
#[command(about = "Resolve curated license, copyright and notice information from ScanCode results", long_about = None)]
pub struct Args {
    /// Package URLs to resolve, e.g. pkg:maven/org.example/demo@1.0.0
    #[arg(value_name = "PACKAGE_URL")]
    pub package_urls: Vec<String>,

    /// File with one package URL per line (lines starting with '#' are ignored)
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Directory holding the scan results (pkg/<type>/.../scancode.json)
    #[arg(short, long, value_name = "DIR")]
    pub repo_base_path: Option<PathBuf>,

    /// Default curations file
    #[arg(short, long, value_name = "FILE")]
    pub curations_file: Option<PathBuf>,

    /// Curation source to use: 'default', 'none' or a configured source name
    #[arg(short = 's', long, value_name = "NAME")]
    pub curation_selector: Option<String>,

    /// Minimum score (0-100) of a license detection to be taken into account
    #[arg(long, value_name = "SCORE")]
    pub min_license_score: Option<f64>,

    /// License text percentage (0-100) from which a whole file counts as license text
    #[arg(long, value_name = "PERCENT")]
    pub license_to_text_ratio_threshold: Option<f64>,

    /// Fetch license texts referenced by web URLs
    #[arg(long)]
    pub remote_content: bool,

    /// Maximum number of packages resolved concurrently
    #[arg(short = 'j', long, value_name = "N", value_parser = clap::value_parser!(u16).range(1..))]
    pub max_concurrent: Option<u16>,

    /// Path to config file (default: scan-curator.config.yml in the current directory)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v: debug, -vv: trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only print errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Log filter for the selected verbosity, `RUST_LOG` takes precedence
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    }
}

/// Package URLs listed in an input file
pub fn parse_package_url_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(String::from)
        .collect()
}
