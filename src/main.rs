//! Eldrow CLI
//!
//! Prints one random dictionary word, or every word matching the given
//! restrictions.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

use eldrow::config::{self, Overrides};
use eldrow::Length;

#[derive(Debug, Parser)]
#[command(name = "eldrow", version, about = "Pick or list words from a dictionary")]
struct Cli {
    /// Dictionary file to use
    #[arg(short, long, value_name = "PATH")]
    dictionary: Option<PathBuf>,

    /// Word length to use, a number or '*' for any
    #[arg(short, long, value_name = "N")]
    length: Option<Length>,

    /// Letters to skip
    #[arg(short, long, value_name = "LETTERS")]
    skip: Option<String>,

    /// Letters that must be included
    #[arg(short, long, value_name = "LETTERS")]
    include: Option<String>,

    /// Regular expression the whole word must match (replaces the length check)
    #[arg(short = 'm', long = "match", value_name = "PATTERN")]
    pattern: Option<String>,

    /// Print all the words instead of a random one
    #[arg(short, long)]
    all: bool,

    /// Config file to read and create instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Don't create a config file on first run
    #[arg(long)]
    no_save: bool,
}

impl Cli {
    fn overrides(&self) -> Overrides {
        Overrides {
            dictionary: self.dictionary.clone(),
            length: self.length,
            skip: self.skip.clone(),
            include: self.include.clone(),
            pattern: self.pattern.clone(),
            list_all: self.all,
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing();

    let config_file = cli.config.clone().or_else(config::default_config_file);
    if config_file.is_none() {
        tracing::warn!("no user config directory, config file disabled");
    }

    let persisted = config_file.as_deref().and_then(config::load_persisted);
    let run_config = config::resolve(cli.overrides(), persisted.as_ref());

    if let (Some(path), false) = (config_file.as_deref(), cli.no_save) {
        if let Err(e) = config::save_if_absent(path, &run_config) {
            tracing::warn!("could not save {}", e);
        }
    }

    let mut rng = StdRng::from_os_rng();
    match eldrow::run(&run_config, &mut rng) {
        Ok(selection) => println!("{}", selection),
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    }
}
