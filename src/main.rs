use clap::Parser;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use env_logger::Env;
use log::info;
use std::path::PathBuf;

use levelkit::paths::RegistryPaths;
use levelkit::registry::{build_registry, registry_to_json, write_registry};

/// Compile the premade-level registry from a directory of map files
#[derive(Parser, Debug)]
#[command(name = "registry-builder", author, version, about, long_about = None)]
struct Args {
    /// Data root holding maps/base and premade.json (defaults to the crate's data directory)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Directory of map files to register (overrides <data-dir>/maps/base)
    #[arg(long)]
    source: Option<PathBuf>,

    /// Registry file to write (overrides <data-dir>/premade.json)
    #[arg(long)]
    output: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl Args {
    fn registry_paths(&self) -> RegistryPaths {
        let base = match &self.data_dir {
            Some(dir) => RegistryPaths::from_data_dir(dir),
            None => RegistryPaths::default(),
        };
        base.with_overrides(self.source.clone(), self.output.clone())
    }
}

fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    let args = Args::parse();

    env_logger::Builder::from_env(Env::default().default_filter_or(&args.log_level)).init();

    let paths = args.registry_paths();
    info!("Map directory: {:?}", paths.source);
    info!("Registry file: {:?}", paths.output);

    let entries = build_registry(&paths.source)
        .wrap_err_with(|| format!("Failed to build registry from '{}'", paths.source.display()))?;

    // The registry is echoed before it is saved
    println!("{}", registry_to_json(&entries)?);

    write_registry(&entries, &paths.output)
        .wrap_err_with(|| format!("Failed to write registry to '{}'", paths.output.display()))?;

    info!("Registered {} levels", entries.len());
    Ok(())
}
