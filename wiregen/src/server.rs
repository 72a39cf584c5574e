use std::sync::Arc;

use axum::{
  Json,
  Router,
  extract::{State, rejection::JsonRejection},
  http::StatusCode,
  response::{IntoResponse, Response},
  routing::post,
};
use log::{debug, error, info};
use serde::{Deserialize, Serialize};
use serde_json::json;
use wiregen_figma::FigmaClient;
use wiregen_render::{RenderOptions, assemble};

use crate::{
  config::{Config, TOKEN_ENV_VAR},
  error::WiregenError,
  token::{FIGMA_TOKEN_KEY, TokenStore},
};

/// Shared state for request handlers.
pub struct AppState {
  pub config: Config,
  pub client: FigmaClient,
  pub tokens: Box<dyn TokenStore>,
}

/// Request body for `POST /api/wireframe`.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WireframeRequest {
  pub file_key: Option<String>,
  pub node_ids: Option<NodeIds>,
  pub preserve_text: Option<bool>,
  pub inline_css: Option<bool>,
  pub wrap_root: Option<bool>,
}

/// `nodeIds` accepts a bare string or a list; a bare string is normalized
/// to a single-element list.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum NodeIds {
  One(String),
  Many(Vec<String>),
}

impl NodeIds {
  #[must_use]
  pub fn into_vec(self) -> Vec<String> {
    match self {
      Self::One(id) => vec![id],
      Self::Many(ids) => ids,
    }
  }
}

impl WireframeRequest {
  /// Per-request options layered over configured defaults.
  #[must_use]
  pub fn options(&self, defaults: RenderOptions) -> RenderOptions {
    RenderOptions {
      preserve_text: self.preserve_text.unwrap_or(defaults.preserve_text),
      inline_css: self.inline_css.unwrap_or(defaults.inline_css),
      wrap_root: self.wrap_root.unwrap_or(defaults.wrap_root),
    }
  }
}

/// Success body: always complete, possibly with warnings. There is no
/// partial-success-with-error-code hybrid.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WireframeResponse {
  pub success: bool,
  pub file_key: String,
  pub count: usize,
  pub options: RenderOptions,
  pub warnings: Vec<String>,
  pub html: String,
}

/// Client-visible request failure, rendered as `{ "error": ... }`.
#[derive(Debug, PartialEq, Eq)]
pub struct ApiError {
  pub status: StatusCode,
  pub message: String,
}

impl ApiError {
  fn bad_request(message: impl Into<String>) -> Self {
    Self {
      status: StatusCode::BAD_REQUEST,
      message: message.into(),
    }
  }

  fn internal(message: impl Into<String>) -> Self {
    Self {
      status: StatusCode::INTERNAL_SERVER_ERROR,
      message: message.into(),
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    (self.status, Json(json!({ "error": self.message }))).into_response()
  }
}

/// Validated inputs for one wireframe request.
#[derive(Debug)]
pub struct ValidatedRequest {
  pub file_key: String,
  pub node_ids: Vec<String>,
  pub options: RenderOptions,
  pub token: String,
}

/// Validate a request against configuration and stored credentials.
///
/// Fails before any network traffic: a missing `nodeIds`, a missing file
/// key, and a missing token are all caller errors, never retried.
pub fn validate(
  request: &WireframeRequest,
  config: &Config,
  tokens: &dyn TokenStore,
) -> Result<ValidatedRequest, ApiError> {
  let node_ids = request
    .node_ids
    .clone()
    .map(NodeIds::into_vec)
    .unwrap_or_default();
  if node_ids.is_empty() {
    return Err(ApiError::bad_request("nodeIds is required"));
  }

  let Some(file_key) = request
    .file_key
    .clone()
    .or_else(|| config.default_file_key.clone())
  else {
    return Err(ApiError::bad_request(
      "fileKey is required and no default_file_key is configured",
    ));
  };

  let Some(token) = tokens.get(FIGMA_TOKEN_KEY) else {
    return Err(ApiError::bad_request(format!(
      "missing Figma access token: set the {TOKEN_ENV_VAR} environment \
       variable"
    )));
  };

  Ok(ValidatedRequest {
    file_key,
    node_ids,
    options: request.options(config.render),
    token,
  })
}

/// Handle `POST /api/wireframe`: fetch the requested subtrees and render
/// them into one wireframe document.
async fn create_wireframe(
  State(state): State<Arc<AppState>>,
  payload: Result<Json<WireframeRequest>, JsonRejection>,
) -> Result<Json<WireframeResponse>, ApiError> {
  // Even an unparseable body gets the `{ "error": ... }` shape; axum's
  // plain-text rejection would break the single-error-object contract.
  let Json(request) =
    payload.map_err(|rejection| ApiError::bad_request(rejection.body_text()))?;

  let validated = validate(&request, &state.config, state.tokens.as_ref())?;
  let ValidatedRequest {
    file_key,
    node_ids,
    options,
    token,
  } = validated;
  debug!("rendering {} node(s) from file {file_key}", node_ids.len());

  // ureq is blocking; keep the fetch off the async runtime.
  let client = state.client.clone();
  let fetch_key = file_key.clone();
  let fetch_ids = node_ids.clone();
  let response = tokio::task::spawn_blocking(move || {
    client.fetch_nodes(&fetch_key, &fetch_ids, &token)
  })
  .await
  .map_err(|e| ApiError::internal(e.to_string()))?
  .map_err(|e| {
    error!("node fetch failed: {e}");
    ApiError::internal(e.to_string())
  })?;

  let document = assemble(&node_ids, &response.nodes, &options);
  Ok(Json(WireframeResponse {
    success: true,
    file_key,
    count: document.rendered,
    options,
    warnings: document.warnings,
    html: document.html,
  }))
}

/// Build the service router.
#[must_use]
pub fn router(state: Arc<AppState>) -> Router {
  Router::new()
    .route("/api/wireframe", post(create_wireframe))
    .with_state(state)
}

/// Bind the configured address and serve until the process is stopped.
pub async fn serve(state: Arc<AppState>) -> Result<(), WiregenError> {
  let listen = state.config.listen.clone();
  let listener = tokio::net::TcpListener::bind(&listen).await?;
  info!("listening on {listen}");
  axum::serve(listener, router(state)).await?;
  Ok(())
}
