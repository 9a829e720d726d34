use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use release_tag::cli::orchestration::{run_resolve, ResolveArgs};
use release_tag::config;
use release_tag::git::Git2Repository;
use release_tag::manifest::MANIFEST_FILE_NAME;
use release_tag::resolver::ReleaseOutcome;
use release_tag::ui;

/// Exit status when the computed tag already exists
const NO_NEW_VERSION_EXIT: u8 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Styled summary for people
    Text,
    /// key=value lines for pipeline step outputs
    Env,
}

#[derive(clap::Parser)]
#[command(
    name = "release-tag",
    version,
    about = "Derive the release tag and changelog for a package"
)]
struct Args {
    #[arg(short, long, default_value = MANIFEST_FILE_NAME, help = "Package manifest to read")]
    manifest: PathBuf,

    #[arg(short, long, default_value = ".", help = "Directory inside the git repository")]
    repo: PathBuf,

    #[arg(
        short,
        long,
        help = "Only list commits touching this path (relative to the current directory)"
    )]
    path: Option<String>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(long, help = "Product family removed from package names")]
    family: Option<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text, help = "Output format")]
    format: OutputFormat,

    #[arg(short, long, help = "Enable debug logging")]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok(code) => code,
        Err(e) => {
            ui::display_error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so stdout only carries the release output.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("RELEASE_TAG_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: &Args) -> Result<ExitCode> {
    let mut config = config::load_config(args.config.as_deref()).context("Error loading config")?;
    if let Some(family) = &args.family {
        config.family = family.clone();
    }

    let repo = Git2Repository::open(&args.repo)
        .with_context(|| format!("Git repository error at '{}'", args.repo.display()))?;

    let path = match &args.path {
        Some(path) => repo
            .pathspec_for(Path::new(path))
            .with_context(|| format!("Invalid --path '{}'", path))?,
        None => None,
    };

    let resolve_args = ResolveArgs {
        manifest_path: args.manifest.clone(),
        path,
    };
    let result = run_resolve(&resolve_args, &config, &repo)?;

    for warning in &result.warnings {
        ui::display_boundary_warning(warning);
    }

    match result.outcome {
        ReleaseOutcome::New(plan) => {
            match args.format {
                OutputFormat::Text => ui::display_plan(&plan),
                OutputFormat::Env => print!("{}", ui::format_env_output(&plan)),
            }
            Ok(ExitCode::SUCCESS)
        }
        ReleaseOutcome::NoNewVersion { .. } => Ok(ExitCode::from(NO_NEW_VERSION_EXIT)),
    }
}
