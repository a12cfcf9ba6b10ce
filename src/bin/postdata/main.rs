use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use spdlog::{info, warn};

use postdata::config::write_sample_config;
use postdata::logger::configure_logger;
use postdata::post_processor::build;

use crate::config::open_config;

mod config;

const CFG_FILE_NAME: &str = "postdata.toml";

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Config path. If empty, postdata.toml is searched next to the executable,
    /// in the current directory and in the user config directory
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory with the markdown posts
    #[arg(short, long)]
    posts_dir: Option<PathBuf>,

    /// Directory the JSON, JS and RSS files are written to
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Writes a sample config to this path and exits
    #[arg(long)]
    write_config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(path) = args.write_config {
        write_sample_config(&path)
            .with_context(|| format!("Error writing sample config to {}", path.display()))?;
        println!("Sample config written to {}", path.display());
        return Ok(());
    }

    let mut config = open_config(args.config).map_err(|e| anyhow!(e))?;
    if let Some(posts_dir) = args.posts_dir {
        config.paths.posts_dir = posts_dir;
    }
    if let Some(output_dir) = args.output_dir {
        config.paths.output_dir = output_dir;
    }

    if let Err(err) = configure_logger(&config) {
        warn!("Error creating logger sinks. Using console instead. Desc={}", err);
    }

    info!("Building post data =-=-=-=-=-=-=-=-=-=-=-=-=-=-=-");
    let summary = build(&config)?;

    println!("{} recent and {} older posts exported:", summary.recent_count, summary.older_count);
    for path in &summary.written {
        println!("  {}", path.display());
    }

    Ok(())
}
