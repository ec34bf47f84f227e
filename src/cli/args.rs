//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::{net::IpAddr, path::PathBuf};

/// Sitemapper CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: sitemapper.toml)
    #[arg(short = 'C', long, default_value = "sitemapper.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Locale to aggregate entries for (overrides [site] locale)
    #[arg(short, long, global = true)]
    pub locale: Option<String>,

    /// Override the site base URL.
    ///
    /// Useful for staging runs where the deployed URL differs from the one
    /// in sitemapper.toml, keeping the config file clean.
    ///
    /// Example: sitemapper export --base-url "https://staging.example.com"
    #[arg(short = 'U', long = "base-url", global = true, value_hint = clap::ValueHint::Url)]
    pub base_url: Option<String>,

    /// Enable verbose output for debugging
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Generate the sitemap and write it into the output directory
    #[command(visible_alias = "e")]
    Export {
        /// Output filename (default: [sitemap] filename from config)
        filename: Option<String>,
    },

    /// Serve the sitemap over HTTP
    #[command(visible_alias = "s")]
    Serve {
        /// Network interface to bind (e.g., 127.0.0.1, 0.0.0.0)
        #[arg(short, long)]
        interface: Option<IpAddr>,

        /// Port number to listen on
        #[arg(short, long)]
        port: Option<u16>,
    },
}
