//! Data model and fetch adapter for the Figma REST API.
//!
//! Only the slice of the API that wireframe rendering needs is modeled:
//! node subtrees from `GET /files/{key}/nodes`, fetched once per request
//! with a personal access token. There is no caching, retry or pagination.
pub mod classify;
pub mod client;
pub mod error;
pub mod types;

pub use classify::NodeKind;
pub use client::{DEFAULT_API_BASE, FigmaClient};
pub use error::FigmaError;
pub use types::{BoundingBox, Node, NodeEntry, NodesResponse, TypeStyle};
