// Copyright © 2014, Peter Atashian
use anyhow::{Context, Result};
use clap::Parser;
use mwimages::{logging, Config, Mediawiki};
use std::path::PathBuf;

/// Download every image referenced by a MediaWiki export into a local tree.
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// JSON settings file; built-in defaults are used when omitted.
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    logging::init_logging();
    let args = Args::parse();
    let config = match &args.config {
        Some(path) => Config::from_path(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => Config::default(),
    };
    let mw = Mediawiki::new(config).context("failed to build HTTP client")?;
    mw.mirror_export()?;
    Ok(())
}
