use serde::{Deserialize, Serialize};

/// Options controlling wireframe rendering.
///
/// Serialized with camelCase names so the struct can be echoed verbatim in
/// API responses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RenderOptions {
  /// Keep literal text content inside text placeholders instead of
  /// rendering empty blocks.
  pub preserve_text: bool,

  /// Inject the shared stylesheet into the assembled document.
  pub inline_css: bool,

  /// Wrap the concatenated top-level fragments in one root container.
  pub wrap_root: bool,
}

impl Default for RenderOptions {
  fn default() -> Self {
    Self {
      preserve_text: false,
      inline_css: true,
      wrap_root: true,
    }
  }
}
