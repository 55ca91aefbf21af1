//! Fetch a Linguist language catalog and compile it into a static Go
//! registry source file.

use std::error::Error;
use std::fs;
use std::path::PathBuf;

use clap::Parser;
use langtab_codegen::{GoOptions, generate_registry, parse_catalog};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Catalog revision the generated registry is pinned to.
const DEFAULT_CATALOG_URL: &str =
    "https://raw.githubusercontent.com/github/linguist/v4.7.6/lib/linguist/languages.yml";

#[derive(Parser)]
#[command(
    name = "langtab",
    version,
    about = "Generate a static Go language registry from the Linguist catalog"
)]
struct Cli {
    /// Read the catalog from a local YAML file instead of fetching
    #[arg(short, long, conflicts_with = "url")]
    input: Option<PathBuf>,

    /// Catalog URL to fetch
    #[arg(long, default_value = DEFAULT_CATALOG_URL)]
    url: String,

    /// Output file (stdout if not specified)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Go package name for the generated file
    #[arg(long, default_value = "linguist")]
    package: String,

    /// Name of the generated map variable
    #[arg(long, default_value = "Languages")]
    var_name: String,

    /// Go type the map values point to
    #[arg(long, default_value = "Language")]
    type_name: String,

    /// Also emit the struct declaration for the value type
    #[arg(long)]
    type_decl: bool,
}

fn fetch_catalog(url: &str) -> Result<String, Box<dyn Error>> {
    info!(url, "fetching catalog");
    let response = ureq::get(url)
        .call()
        .map_err(|e| format!("fetch {}: {}", url, e))?;
    Ok(response.into_string()?)
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let source = match &cli.input {
        Some(path) => {
            debug!(path = %path.display(), "reading catalog");
            fs::read_to_string(path).map_err(|e| format!("read {}: {}", path.display(), e))?
        }
        None => fetch_catalog(&cli.url)?,
    };

    let catalog = parse_catalog(&source)?;
    info!(languages = catalog.entries.len(), "parsed catalog");

    let options = GoOptions {
        package: cli.package,
        var_name: cli.var_name,
        type_name: cli.type_name,
        type_decl: cli.type_decl,
    };
    let artifact = generate_registry(&catalog, &options)?;
    debug!(bytes = artifact.len(), "rendered registry");

    match &cli.output {
        Some(path) => {
            fs::write(path, &artifact).map_err(|e| format!("write {}: {}", path.display(), e))?;
            eprintln!("Generated {}", path.display());
        }
        None => print!("{}", artifact),
    }
    Ok(())
}

/// Reset SIGPIPE to default behavior so piping to `head` etc. doesn't panic.
#[cfg(unix)]
fn reset_sigpipe() {
    // SAFETY: signal() is a standard POSIX call; this only restores the
    // default disposition (terminate on broken pipe) that Rust overrides
    // at startup. No memory is touched.
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }
}

#[cfg(not(unix))]
fn reset_sigpipe() {}

fn main() {
    reset_sigpipe();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => {}
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}
