use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A single node in a Figma document tree, as returned by the nodes API.
///
/// Nodes are immutable per-request snapshots. Only the fields the wireframe
/// converter consumes are modeled; everything else in the payload is ignored
/// during deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Node {
  /// Opaque identifier, unique within a document.
  pub id: String,

  /// Free-text label; used only for CSS class derivation.
  pub name: String,

  /// Node type string, e.g. `FRAME` or `TEXT`. See [`crate::NodeKind`].
  #[serde(rename = "type")]
  pub node_type: String,

  /// Ordered children; empty for leaf nodes.
  pub children: Vec<Node>,

  /// Text content (text nodes only).
  pub characters: Option<String>,

  /// Type style (text nodes only).
  pub style: Option<TypeStyle>,

  /// Bounding box in absolute coordinates, when Figma reports one.
  pub absolute_bounding_box: Option<BoundingBox>,
}

/// Subset of Figma's type style used for heading classification.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TypeStyle {
  pub font_size: Option<f64>,
}

/// Width and height of a node's absolute bounding box.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BoundingBox {
  pub width: Option<f64>,
  pub height: Option<f64>,
}

/// Response shape of `GET /files/{key}/nodes`.
///
/// The `nodes` field is required; a payload without it fails
/// deserialization and surfaces as [`crate::FigmaError::Malformed`].
#[derive(Debug, Clone, Deserialize)]
pub struct NodesResponse {
  /// Name of the containing file, when reported.
  #[serde(default)]
  pub name: Option<String>,

  /// Requested node IDs mapped to their entries. An ID the API knows
  /// nothing about may be absent, or present without document data.
  pub nodes: HashMap<String, NodeEntry>,
}

/// One entry in a [`NodesResponse`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NodeEntry {
  pub document: Option<Node>,
}
