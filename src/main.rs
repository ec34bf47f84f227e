//! Sitemapper - XML sitemap generation from CMS content sources.

#![allow(dead_code)]

mod cli;
mod config;
mod logger;
mod sink;
mod sitemap;
mod source;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::SiteConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    logger::set_verbose(cli.verbose);

    let config = SiteConfig::load(&cli)?;

    match &cli.command {
        Commands::Export { filename } => cli::export::export_site(&config, filename.as_deref()),
        Commands::Serve { .. } => cli::serve::serve(&config),
    }
}
