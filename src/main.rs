mod cli;
mod config;

use cli::{parse_package_url_list, Args};
use config::ConfigFile;
use owo_colors::OwoColorize;
use scan_curator::prelude::*;
use scan_curator::shared::security::read_checked_file;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    let args = Args::parse_args();
    init_tracing(args.log_level());

    match run(args).await {
        Ok(exit_code) => process::exit(exit_code.as_i32()),
        Err(e) => {
            eprintln!("\n{}\n", "❌ An error occurred:".red().bold());
            eprintln!("{}", e);

            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            process::exit(exit_code_for(&e).as_i32());
        }
    }
}

fn init_tracing(default_level: &str) {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| default_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(std::io::stderr().is_terminal())
                .with_writer(std::io::stderr),
        )
        .init();
}

/// Argument and configuration problems exit with 2, everything else with 3
fn exit_code_for(error: &anyhow::Error) -> ExitCode {
    match error.downcast_ref::<ResolutionError>() {
        Some(ResolutionError::Validation { .. })
        | Some(ResolutionError::InvalidRepoPath { .. })
        | Some(ResolutionError::UnknownCurationSelector { .. }) => ExitCode::InvalidArguments,
        _ => ExitCode::ApplicationError,
    }
}

/// Effective settings after merging CLI arguments over the config file
struct Settings {
    repo_base_path: PathBuf,
    curations_file: Option<PathBuf>,
    curation_sources: Vec<(String, PathBuf)>,
    thresholds: MappingThresholds,
    remote_content: bool,
    max_concurrent: Option<usize>,
}

impl Settings {
    fn merge(args: &Args, config: ConfigFile) -> Result<Self> {
        let repo_base_path = args
            .repo_base_path
            .clone()
            .or(config.repo_base_path)
            .ok_or_else(|| ResolutionError::Validation {
                message: "No repository base path given. Use --repo-base-path or set repo_base_path in the config file.".to_string(),
            })?;

        let defaults = MappingThresholds::default();
        let min_license_score = args.min_license_score.or(config.min_license_score);
        let ratio_threshold = args
            .license_to_text_ratio_threshold
            .or(config.license_to_text_ratio_threshold);
        config::validate_percentage("min_license_score", min_license_score)
            .and_then(|_| {
                config::validate_percentage("license_to_text_ratio_threshold", ratio_threshold)
            })
            .map_err(|e| ResolutionError::Validation {
                message: e.to_string(),
            })?;

        let mut curation_sources: Vec<(String, PathBuf)> =
            config.curation_sources.unwrap_or_default().into_iter().collect();
        curation_sources.sort();

        Ok(Self {
            repo_base_path,
            curations_file: args.curations_file.clone().or(config.curations_file),
            curation_sources,
            thresholds: MappingThresholds {
                min_license_score: min_license_score.unwrap_or(defaults.min_license_score),
                license_to_text_ratio_threshold: ratio_threshold
                    .unwrap_or(defaults.license_to_text_ratio_threshold),
            },
            remote_content: args.remote_content || config.remote_content.unwrap_or(false),
            max_concurrent: args
                .max_concurrent
                .map(usize::from)
                .or(config.max_concurrent),
        })
    }
}

async fn run(args: Args) -> Result<ExitCode> {
    let config = load_config(&args)?;
    let settings = Settings::merge(&args, config)?;
    let package_urls = collect_package_urls(&args)?;

    // Create adapters (Dependency Injection)
    let mut scan_store = FileScanStore::new(&settings.repo_base_path)?;
    if settings.remote_content {
        let provider = ChainedContentProvider::new()
            .with_provider(file_url_provider(&settings))
            .with_provider(HttpContentProvider::new()?);
        scan_store = scan_store.with_content_provider(CachingContentProvider::new(provider));
    }

    let mut curations = CurationFileRepository::new(settings.curations_file.clone());
    for (name, path) in &settings.curation_sources {
        curations = curations.with_source(name.clone(), path.clone());
    }

    let progress_reporter = if args.quiet {
        StderrProgressReporter::quiet()
    } else {
        StderrProgressReporter::new()
    };

    // Create use case with injected dependencies
    let use_case = ResolveComponentInfoUseCase::new(
        scan_store,
        curations,
        progress_reporter,
        settings.thresholds,
    );

    let mut request = ResolveRequest::new(package_urls, args.curation_selector.clone());
    if let Some(max_concurrent) = settings.max_concurrent {
        request = request.with_max_concurrent(max_concurrent);
    }

    let response = use_case.execute(request).await?;

    let presenter: Box<dyn OutputPresenter> = match &args.output {
        Some(path) => Box::new(FileSystemWriter::new(path.clone())),
        None => Box::new(StdoutPresenter::new()),
    };
    let mut content = response.to_json()?;
    content.push('\n');
    presenter.present(&content)?;

    Ok(if response.has_failures() {
        ExitCode::PackageFailures
    } else {
        ExitCode::Success
    })
}

/// `file:` URLs are served from the scan repository and the curation file directories
fn file_url_provider(settings: &Settings) -> FileUrlContentProvider {
    let curation_files = settings
        .curations_file
        .iter()
        .chain(settings.curation_sources.iter().map(|(_, path)| path));

    let mut provider = FileUrlContentProvider::new().with_allowed_root(&settings.repo_base_path);
    for file in curation_files {
        let dir = match file.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        provider = provider.with_allowed_root(dir);
    }
    provider
}

fn load_config(args: &Args) -> Result<ConfigFile> {
    let config = match &args.config {
        Some(path) => Some(config::load_config_from_path(path)),
        None => config::discover_config(Path::new(".")).transpose(),
    };
    match config {
        Some(Ok(config)) => Ok(config),
        Some(Err(e)) => Err(ResolutionError::Validation {
            message: format!("{:#}", e),
        }
        .into()),
        None => Ok(ConfigFile::default()),
    }
}

fn collect_package_urls(args: &Args) -> Result<Vec<String>> {
    let mut package_urls = args.package_urls.clone();
    if let Some(input) = &args.input {
        let content = read_checked_file(input, "package URL list")?;
        package_urls.extend(parse_package_url_list(&content));
    }
    if package_urls.is_empty() {
        return Err(ResolutionError::Validation {
            message: "No package URLs given. Pass them as arguments or with --input <FILE>."
                .to_string(),
        }
        .into());
    }
    Ok(package_urls)
}
