use std::fs;
use std::path::{Path, PathBuf};

use chrono::{SecondsFormat, Utc};
use clap::{Args, Parser, Subcommand};
use connector_sdk_core::{AuthType, ConnectorInfo, SchemaNode, validate_schema};
use connector_sdk_registry::{
    ConnectorRegistry, MANIFEST_FILE, RegistryConfig, RegistryError, load_connector_dir, slugify,
};
use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

const PACKAGE_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum CliOutputFormat {
    Json,
    Yaml,
}

#[derive(Debug, Parser)]
#[command(name = "connector-sdk")]
#[command(about = "Inspect, validate and bundle workflow connectors")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the metadata of one connector directory.
    Inspect(InspectArgs),
    /// Validate connector directories and AutoForm schema JSON files.
    Validate(ValidateArgs),
    /// Bundle connector directories into a sealed JSON bundle.
    Bundle(BundleArgs),
    /// Print the slug generated for a connector name.
    Slug(SlugArgs),
}

#[derive(Debug, Args)]
struct InspectArgs {
    /// Connector directory containing connector.toml.
    dir: PathBuf,
    /// Output format.
    #[arg(long, default_value = "json")]
    format: CliOutputFormat,
}

#[derive(Debug, Args)]
struct ValidateArgs {
    /// Connector directories, directories of connectors, and/or schema JSON files.
    #[arg(required = true)]
    inputs: Vec<PathBuf>,
    /// Registry config YAML (allowlist, exclusions, README requirement).
    #[arg(long)]
    config: Option<PathBuf>,
    /// Comma-separated connector slugs to skip.
    #[arg(long)]
    exclude: Option<String>,
}

#[derive(Debug, Args)]
struct BundleArgs {
    /// Connector directories and/or directories of connectors.
    #[arg(required = true)]
    inputs: Vec<PathBuf>,
    /// Output JSON bundle path.
    #[arg(long)]
    output: PathBuf,
    /// Optional bundle name metadata.
    #[arg(long)]
    name: Option<String>,
    /// Optional bundle description metadata.
    #[arg(long)]
    description: Option<String>,
    /// Registry config YAML applied while loading connectors.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Debug, Args)]
struct SlugArgs {
    /// Connector display name.
    name: String,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    debug!(command = ?cli.command, "Running command");

    let result = match cli.command {
        Command::Inspect(args) => run_inspect(args),
        Command::Validate(args) => run_validate(args),
        Command::Bundle(args) => run_bundle(args),
        Command::Slug(args) => run_slug(args),
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

// ---------------------------------------------------------------------------
// inspect
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct InspectOutput<'a> {
    #[serde(flatten)]
    connector: &'a ConnectorInfo,
    auth_type: AuthType,
}

fn run_inspect(args: InspectArgs) -> Result<(), String> {
    let connector = load_connector_dir(&args.dir)
        .map_err(|e| format!("Failed to load '{}': {e}", args.dir.display()))?;
    let output = InspectOutput {
        connector: &connector,
        auth_type: connector.auth_type(),
    };

    let raw = match args.format {
        CliOutputFormat::Json => serde_json::to_string_pretty(&output)
            .map_err(|e| format!("JSON serialization failed: {e}"))?,
        CliOutputFormat::Yaml => {
            serde_yaml::to_string(&output).map_err(|e| format!("YAML serialization failed: {e}"))?
        }
    };
    println!("{}", raw.trim_end());
    Ok(())
}

// ---------------------------------------------------------------------------
// validate
// ---------------------------------------------------------------------------

/// One thing to validate, resolved from the command-line inputs.
#[derive(Debug, Clone, PartialEq)]
enum Target {
    Connector(PathBuf),
    Schema(PathBuf),
}

impl Target {
    fn path(&self) -> &Path {
        match self {
            Target::Connector(path) | Target::Schema(path) => path,
        }
    }
}

/// Outcome of validating one [`Target`]. `None` means skipped by config.
type TargetOutcome = Result<Option<String>, String>;

fn run_validate(args: ValidateArgs) -> Result<(), String> {
    let mut config = load_config(args.config.as_deref())?;
    config.exclude.extend(parse_csv_list(args.exclude));

    let targets = collect_targets(&args.inputs, &config)?;
    info!(targets = targets.len(), "Validating inputs");

    let outcomes: Vec<(Target, TargetOutcome)> = targets
        .into_par_iter()
        .map(|target| {
            let outcome = validate_target(&target, &config);
            (target, outcome)
        })
        .collect();

    let mut failed = 0usize;
    let mut skipped = 0usize;
    for (target, outcome) in &outcomes {
        match outcome {
            Ok(Some(label)) => println!("ok: {label}"),
            Ok(None) => skipped += 1,
            Err(message) => {
                failed += 1;
                eprintln!("invalid: {}: {message}", target.path().display());
            }
        }
    }

    let checked = outcomes.len() - skipped;
    if failed > 0 {
        return Err(format!("{failed} of {checked} input(s) failed validation"));
    }
    println!("Validated {checked} input(s), skipped {skipped}.");
    Ok(())
}

fn validate_target(target: &Target, config: &RegistryConfig) -> TargetOutcome {
    match target {
        Target::Connector(dir) => {
            let connector = load_connector_dir(dir).map_err(|e| e.to_string())?;
            if !config.admit(&connector).map_err(|e| e.to_string())? {
                debug!(slug = %connector.slug, "Skipping connector not allowed by config");
                return Ok(None);
            }

            let label = format!("{} ({})", connector.slug, connector.version);
            let mut registry = ConnectorRegistry::new();
            registry.register(connector).map_err(|e| e.to_string())?;
            Ok(Some(label))
        }
        Target::Schema(path) => {
            let raw = fs::read_to_string(path).map_err(|e| format!("Failed to read: {e}"))?;
            let node: SchemaNode =
                serde_json::from_str(&raw).map_err(|e| format!("Invalid schema JSON: {e}"))?;
            let errors = validate_schema(&node);
            if !errors.is_empty() {
                let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
                return Err(messages.join("; "));
            }
            Ok(Some(path.display().to_string()))
        }
    }
}

// ---------------------------------------------------------------------------
// bundle
// ---------------------------------------------------------------------------

fn run_bundle(args: BundleArgs) -> Result<(), String> {
    let config = load_config(args.config.as_deref())?;
    let targets = collect_targets(&args.inputs, &config)?;

    let mut registry = ConnectorRegistry::new();
    for target in targets {
        let dir = match target {
            Target::Connector(dir) => dir,
            Target::Schema(path) => {
                return Err(format!(
                    "'{}' is a schema file; bundles take connector directories",
                    path.display()
                ));
            }
        };
        let connector = load_connector_dir(&dir)
            .map_err(|e| format!("Failed to load '{}': {e}", dir.display()))?;
        if !config.admit(&connector).map_err(|e| e.to_string())? {
            debug!(slug = %connector.slug, "Skipping connector not allowed by config");
            continue;
        }
        registry.register(connector).map_err(|e| e.to_string())?;
    }

    let generated_at = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
    let mut bundle = registry.to_bundle(PACKAGE_VERSION, generated_at);
    bundle.name = args.name;
    bundle.description = args.description;
    bundle.seal().map_err(|e| e.to_string())?;

    if let Some(parent) = args.output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|err| {
                format!(
                    "Failed to create output directory '{}': {err}",
                    parent.display()
                )
            })?;
        }
    }
    bundle
        .save(&args.output)
        .map_err(|err| format!("Failed to write '{}': {err}", args.output.display()))?;

    println!(
        "Bundled {} connector(s) into '{}'.",
        bundle.connector_count(),
        args.output.display()
    );
    Ok(())
}

// ---------------------------------------------------------------------------
// slug
// ---------------------------------------------------------------------------

fn run_slug(args: SlugArgs) -> Result<(), String> {
    let slug = slugify(&args.name);
    if slug.is_empty() {
        return Err(format!("'{}' has no characters usable in a slug", args.name));
    }
    println!("{slug}");
    Ok(())
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn load_config(path: Option<&Path>) -> Result<RegistryConfig, String> {
    match path {
        Some(path) => RegistryConfig::load(path)
            .map_err(|e| format!("Failed to load config '{}': {e}", path.display())),
        None => Ok(RegistryConfig::default()),
    }
}

/// Expands inputs into validation targets.
///
/// A directory holding `connector.toml` is one connector; any other directory
/// contributes each child connector directory and each `*.json` file. Files
/// are taken as schema JSON. Under `validation.strict`, a child directory
/// without `connector.toml` is an error.
fn collect_targets(inputs: &[PathBuf], config: &RegistryConfig) -> Result<Vec<Target>, String> {
    let mut targets = Vec::new();
    for input in inputs {
        if input.is_file() {
            targets.push(Target::Schema(input.clone()));
        } else if input.join(MANIFEST_FILE).is_file() {
            targets.push(Target::Connector(input.clone()));
        } else if input.is_dir() {
            let mut children = Vec::new();
            let entries = fs::read_dir(input)
                .map_err(|e| format!("Failed to read '{}': {e}", input.display()))?;
            for entry in entries {
                let path = entry
                    .map_err(|e| format!("Failed to read '{}': {e}", input.display()))?
                    .path();
                if path.join(MANIFEST_FILE).is_file() {
                    children.push(Target::Connector(path));
                } else if path.is_dir() {
                    if config.validation.strict {
                        return Err(RegistryError::MissingManifest(path).to_string());
                    }
                    debug!(path = %path.display(), "Skipping directory without connector.toml");
                } else if path.extension().and_then(|e| e.to_str()) == Some("json") {
                    children.push(Target::Schema(path));
                }
            }
            children.sort_by(|a, b| a.path().cmp(b.path()));
            targets.extend(children);
        } else {
            return Err(format!("Input '{}' does not exist", input.display()));
        }
    }

    if targets.is_empty() {
        return Err("No connectors or schema files found in inputs".to_string());
    }
    Ok(targets)
}

fn parse_csv_list(raw: Option<String>) -> Vec<String> {
    raw.map(|value| {
        value
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(ToOwned::to_owned)
            .collect()
    })
    .unwrap_or_default()
}
