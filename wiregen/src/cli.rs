use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Command line interface for wiregen
#[derive(Parser, Debug)]
#[command(author, version, about = "wiregen: wireframe HTML from Figma documents")]
pub struct Cli {
  /// Subcommand to execute (see [`Commands`])
  #[command(subcommand)]
  pub command: Commands,

  /// Enable verbose debug logging
  #[arg(short, long)]
  pub verbose: bool,

  /// Path to configuration file (TOML)
  #[arg(short = 'c', long = "config-file")]
  pub config_file: Option<PathBuf>,
}

/// All supported subcommands for the wiregen CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
  /// Run the HTTP service.
  Serve {
    /// Address to listen on, e.g. 127.0.0.1:8080. Overrides the
    /// configured address.
    #[arg(short, long)]
    listen: Option<String>,
  },

  /// Render a wireframe from a nodes-API JSON response on disk, without
  /// touching the network.
  Render {
    /// Path to a JSON file with the shape of `GET /files/{key}/nodes`.
    #[arg(short, long)]
    input: PathBuf,

    /// Node ID to render (can be specified multiple times, rendered in
    /// order). Defaults to every node in the file, sorted by ID.
    #[arg(short = 'n', long = "node-id", action = clap::ArgAction::Append)]
    node_ids: Vec<String>,

    /// Output file; stdout when omitted.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Keep literal text content in placeholders.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    preserve_text: bool,

    /// Skip inline stylesheet injection.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    no_inline_css: bool,

    /// Skip the root wrapper element.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    no_wrap_root: bool,
  },
}

impl Cli {
  /// Parse command line arguments into a [`Cli`] struct.
  #[must_use]
  pub fn parse_args() -> Self {
    Self::parse()
  }
}
