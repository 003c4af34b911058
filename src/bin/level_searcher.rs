//! Level search CLI.
//!
//! Prints the ids of the `*.json` levels in a directory whose name (and
//! optionally author) contains the given text, ignoring case.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{Context, Result};

use levelkit::paths::{DEFAULT_LEVEL_DIR, DEFAULT_NAME_FILTER};
use levelkit::search::{search_levels, AllOf, AuthorContains, NameContains};

#[derive(Parser, Debug)]
#[command(name = "level-searcher")]
#[command(about = "Find the ids of levels whose name contains a given text")]
#[command(version)]
struct Cli {
    /// Directory of level files to search
    #[arg(default_value = DEFAULT_LEVEL_DIR)]
    dir: PathBuf,

    /// Text the level name must contain (case-insensitive)
    #[arg(short, long, default_value = DEFAULT_NAME_FILTER)]
    name: String,

    /// Text the author must contain (case-insensitive)
    #[arg(short, long)]
    author: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

impl Cli {
    fn predicate(&self) -> AllOf {
        let mut predicate = AllOf::default().with(NameContains::new(&self.name));
        if let Some(author) = &self.author {
            predicate = predicate.with(AuthorContains::new(author));
        }
        predicate
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    log::info!("Searching {} for names containing {:?}", cli.dir.display(), cli.name);
    let matches = search_levels(&cli.dir, &cli.predicate())
        .with_context(|| format!("Level search in {} failed", cli.dir.display()))?;

    println!("{}", serde_json::to_string(&matches)?);
    Ok(())
}
