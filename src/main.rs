//! SVG Graphic CLI
//!
//! Usage:
//!   svg-graphic [OPTIONS] [FILE]
//!
//! Renders a TOML scene file (or the built-in sample when no file is given)
//! to SVG on stdout or into the file named by `--output`.

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;
use log::{debug, error, info, LevelFilter};

use svg_graphic::{Error, Scene};

#[derive(Debug, Parser)]
#[command(name = "svg-graphic")]
#[command(about = "Render SVG graphics from TOML scene files")]
struct Cli {
    /// Scene file (renders the built-in sample if not provided)
    input: Option<PathBuf>,

    /// Output file (writes to stdout if not provided)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Escape XML special characters in text attribute values
    #[arg(long)]
    escape: bool,

    /// Log level: off, error, warn, info, debug or trace
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() {
    let cli = Cli::parse();

    let log_level = LevelFilter::from_str(&cli.log_level).unwrap_or_else(|_| {
        eprintln!("Invalid log level: {}. Using 'warn' instead.", cli.log_level);
        LevelFilter::Warn
    });
    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();
    debug!(cli:?; "Parsed arguments");

    if let Err(e) = run(&cli) {
        error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Error> {
    let mut scene = match &cli.input {
        Some(path) => {
            info!(path:? = path; "Loading scene");
            Scene::from_file(path)?
        }
        None => Scene::sample(),
    };
    if cli.escape {
        scene.config.escape_attributes = true;
    }

    match &cli.output {
        Some(path) => {
            let mut sink = BufWriter::new(File::create(path)?);
            scene.save(&mut sink)
        }
        None => scene.save(&mut io::stdout().lock()),
    }
}
