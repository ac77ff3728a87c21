//! doxdoc: insert doxygen documentation into a host pipeline's docstrings.
//!
//! Two phases:
//!
//! 1. **Run**: write a Doxyfile (defaults + `doxygen_config` overrides +
//!    project/input/output forced from the run configuration) and run doxygen.
//! 2. **Splice**: parse `<builddir>/xml`, render numpydoc docstrings and add
//!    them to the host state JSON: `doxdoc host.json -o host.json`.

use anyhow::{Context, Result};
use clap::Parser;
use doxdoc::config::DEFAULT_CONFIG_FILE;
use doxdoc::parser::index::parse_index;
use doxdoc::{doxyfile, runner, HostState, RunConfig, Updater};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "doxdoc",
    about = "Generate numpydoc docstrings from doxygen XML and add them to a description registry"
)]
struct Cli {
    /// Host state JSON (class/function manifest and description registry)
    #[arg(required_unless_present = "show_config")]
    registry: Option<PathBuf>,

    /// Where to write the updated host state (default: overwrite the input)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Run configuration file (default: ./doxdoc.toml when present)
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Project name (PROJECT_NAME)
    #[arg(long)]
    package: Option<String>,

    /// Source directory handed to doxygen (INPUT)
    #[arg(long)]
    sourcedir: Option<PathBuf>,

    /// Build directory (OUTPUT_DIRECTORY); XML is read from <builddir>/xml
    #[arg(long)]
    builddir: Option<PathBuf>,

    /// Skip running doxygen and parse the XML already in <builddir>/xml
    #[arg(long)]
    no_run: bool,

    /// Include method briefs in the class Methods section
    #[arg(long)]
    describe_methods: bool,

    /// Print the Doxyfile that would be used and exit
    #[arg(long)]
    show_config: bool,

    /// Debug output
    #[arg(short = 'v', long, conflicts_with = "quiet")]
    verbose: bool,

    /// Errors only
    #[arg(short = 'q', long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let rc = load_config(&cli)?;
    let doxyfile_text = doxyfile::render(&doxyfile::build(&rc));

    if cli.show_config {
        println!("{}", doxyfile_text);
        return Ok(());
    }

    let registry = cli
        .registry
        .as_deref()
        .context("a host state file is required")?;

    if cli.no_run {
        tracing::info!("skipping doxygen, reusing {}", rc.xml_dir().display());
    } else {
        doxyfile::write_if_changed(&rc.doxyfile_name, &doxyfile_text)
            .context("failed to write Doxyfile")?;
        runner::run_doxygen(&rc.doxygen, &rc.doxyfile_name)?;
    }

    splice(&rc, registry, cli.output.as_deref().unwrap_or(registry))
}

/// Parse doxygen's XML and add docstrings to the host state at `input`.
fn splice(rc: &RunConfig, input: &Path, output: &Path) -> Result<()> {
    let xml_dir = rc.xml_dir();
    tracing::info!("adding doxygen output to docstrings");
    let index = parse_index(&xml_dir)
        .with_context(|| format!("failed to read doxygen index in {}", xml_dir.display()))?;

    let text = fs::read_to_string(input)
        .with_context(|| format!("failed to read {}", input.display()))?;
    let mut state: HostState = serde_json::from_str(&text)
        .with_context(|| format!("failed to parse host state {}", input.display()))?;

    let report = Updater::new(&index, &xml_dir)
        .describe_methods(rc.describe_methods)
        .apply(&mut state)
        .context("failed to read doxygen output")?;
    tracing::info!(
        classes = report.classes,
        methods = report.methods,
        functions = report.functions,
        skipped = report.skipped,
        "docstrings added"
    );

    let mut json = serde_json::to_string_pretty(&state)?;
    json.push('\n');
    fs::write(output, json).with_context(|| format!("failed to write {}", output.display()))?;
    Ok(())
}

/// Config file (explicit, or `doxdoc.toml` if it exists) overlaid with flags.
fn load_config(cli: &Cli) -> Result<RunConfig> {
    let mut rc = match &cli.config {
        Some(path) => RunConfig::load(path)?,
        None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
            RunConfig::load(Path::new(DEFAULT_CONFIG_FILE))?
        }
        None => RunConfig::default(),
    };

    if let Some(ref package) = cli.package {
        rc.package = package.clone();
    }
    if let Some(ref sourcedir) = cli.sourcedir {
        rc.sourcedir = sourcedir.clone();
    }
    if let Some(ref builddir) = cli.builddir {
        rc.builddir = builddir.clone();
    }
    rc.describe_methods |= cli.describe_methods;
    Ok(rc)
}

fn init_tracing(quiet: bool, verbose: bool) -> Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("DOXDOC_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
