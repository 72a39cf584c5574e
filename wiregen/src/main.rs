use std::{fs, path::Path, sync::Arc};

use color_eyre::eyre::{Context, Result};
use log::{LevelFilter, info, warn};
use wiregen::{
  cli::{Cli, Commands},
  config::Config,
  server::{self, AppState},
  token::MemoryTokenStore,
};
use wiregen_figma::{FigmaClient, NodesResponse};
use wiregen_render::{RenderOptions, assemble};

fn main() -> Result<()> {
  color_eyre::install()?;

  // Parse command line arguments
  let cli = Cli::parse_args();

  // Initialize logging first so we can log during command handling
  env_logger::Builder::new()
    .filter_level(if cli.verbose {
      LevelFilter::Debug
    } else {
      LevelFilter::Info
    })
    .write_style(env_logger::WriteStyle::Always)
    .init();

  let mut config = Config::load(cli.config_file.as_deref())?;

  match cli.command {
    Commands::Serve { listen } => {
      if let Some(listen) = listen {
        config.listen = listen;
      }
      run_server(config)
    },
    Commands::Render {
      input,
      node_ids,
      output,
      preserve_text,
      no_inline_css,
      no_wrap_root,
    } => {
      let options = RenderOptions {
        preserve_text: preserve_text || config.render.preserve_text,
        inline_css: !no_inline_css && config.render.inline_css,
        wrap_root: !no_wrap_root && config.render.wrap_root,
      };
      render_offline(&input, node_ids, output.as_deref(), &options)
    },
  }
}

/// Start the async runtime and serve HTTP requests.
fn run_server(config: Config) -> Result<()> {
  let token = Config::token_from_env();
  if token.is_none() {
    warn!("no Figma token in the environment; requests will be rejected");
  }

  let client = FigmaClient::new(config.api_base.clone());
  let state = Arc::new(AppState {
    config,
    client,
    tokens: Box::new(MemoryTokenStore::seeded(token)),
  });

  tokio::runtime::Builder::new_multi_thread()
    .enable_all()
    .build()
    .wrap_err("failed to start async runtime")?
    .block_on(server::serve(state))?;

  Ok(())
}

/// Render a wireframe from a nodes-API response stored on disk.
fn render_offline(
  input: &Path,
  node_ids: Vec<String>,
  output: Option<&Path>,
  options: &RenderOptions,
) -> Result<()> {
  let raw = fs::read_to_string(input)
    .wrap_err_with(|| format!("failed to read {}", input.display()))?;
  let response: NodesResponse = serde_json::from_str(&raw)
    .wrap_err_with(|| format!("failed to parse {}", input.display()))?;
  if let Some(name) = &response.name {
    info!("rendering nodes from file {name}");
  }

  let node_ids = if node_ids.is_empty() {
    let mut ids: Vec<String> = response.nodes.keys().cloned().collect();
    ids.sort();
    ids
  } else {
    node_ids
  };

  let document = assemble(&node_ids, &response.nodes, options);
  for warning in &document.warnings {
    warn!("{warning}");
  }

  match output {
    Some(path) => {
      fs::write(path, &document.html)
        .wrap_err_with(|| format!("failed to write {}", path.display()))?;
      info!(
        "wrote wireframe for {} node(s) to {}",
        document.rendered,
        path.display()
      );
    },
    None => {
      #[allow(clippy::print_stdout, reason = "stdout is the requested output")]
      {
        println!("{}", document.html);
      }
    },
  }

  Ok(())
}
