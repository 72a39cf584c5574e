use log::debug;

use crate::{error::FigmaError, types::NodesResponse};

/// Default base URL of the Figma REST API.
pub const DEFAULT_API_BASE: &str = "https://api.figma.com/v1";

/// Header carrying the personal access token.
const TOKEN_HEADER: &str = "X-Figma-Token";

/// Thin client for the Figma nodes endpoint.
///
/// Requests are blocking (`ureq`); callers on an async runtime must wrap
/// calls in `spawn_blocking`.
#[derive(Debug, Clone)]
pub struct FigmaClient {
  api_base: String,
}

impl FigmaClient {
  #[must_use]
  pub fn new(api_base: impl Into<String>) -> Self {
    Self {
      api_base: api_base.into(),
    }
  }

  /// Fetch node subtrees by ID with a single GET request.
  ///
  /// There is no retry or pagination; a single node too large for one
  /// response is out of scope. A non-2xx status or a payload without a
  /// `nodes` field is an error.
  pub fn fetch_nodes(
    &self,
    file_key: &str,
    node_ids: &[String],
    token: &str,
  ) -> Result<NodesResponse, FigmaError> {
    let url = self.nodes_url(file_key, node_ids);
    debug!("fetching {} node(s) from {url}", node_ids.len());

    let response = ureq::get(&url)
      .header(TOKEN_HEADER, token)
      .call()
      .map_err(|e| match e {
        ureq::Error::StatusCode(status) => FigmaError::Status {
          status,
          url: url.clone(),
        },
        other => FigmaError::Transport(other.to_string()),
      })?;

    let body = response
      .into_body()
      .read_to_vec()
      .map_err(|e| FigmaError::Transport(e.to_string()))?;

    Ok(serde_json::from_slice(&body)?)
  }

  /// Build the nodes endpoint URL for a set of node IDs.
  fn nodes_url(&self, file_key: &str, node_ids: &[String]) -> String {
    format!(
      "{}/files/{file_key}/nodes?ids={}",
      self.api_base.trim_end_matches('/'),
      node_ids.join(",")
    )
  }
}

impl Default for FigmaClient {
  fn default() -> Self {
    Self::new(DEFAULT_API_BASE)
  }
}
