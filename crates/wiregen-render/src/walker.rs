use log::debug;
use wiregen_figma::{Node, NodeKind};

use crate::{
  options::RenderOptions,
  sanitize::class_from_name,
  shape::render_shape,
  text::render_text,
};

/// Hard bound on recursion depth.
///
/// The Figma API imposes no nesting limit, so a malformed or adversarial
/// document must not be able to exhaust the stack. Nodes beyond the bound
/// are dropped like unrecognized descendants.
pub const MAX_DEPTH: usize = 64;

/// Recursive renderer for one node tree, accumulating warnings for
/// unhandled top-level node types along the way.
#[derive(Debug)]
pub struct TreeWalker<'a> {
  options: &'a RenderOptions,
  warnings: Vec<String>,
}

impl<'a> TreeWalker<'a> {
  #[must_use]
  pub fn new(options: &'a RenderOptions) -> Self {
    Self {
      options,
      warnings: Vec::new(),
    }
  }

  /// Render one node at the given depth.
  ///
  /// Depth 0 marks a directly requested node; only there do unrecognized
  /// types produce a warning. Unrecognized descendants are dropped
  /// silently — lossy simplification is the point of a wireframe, so this
  /// is intended behavior, not an oversight.
  pub fn render(&mut self, node: &Node, depth: usize) -> String {
    if depth > MAX_DEPTH {
      debug!("dropping node {} nested deeper than {MAX_DEPTH}", node.id);
      return String::new();
    }

    match node.kind() {
      NodeKind::Container => {
        let inner: String = node
          .children
          .iter()
          .map(|child| self.render(child, depth + 1))
          .collect();
        let type_attr = node.node_type.to_lowercase();
        let name_class = class_from_name(&node.name);

        if name_class.is_empty() {
          format!(
            r#"<div class="wf-node" data-node-type="{type_attr}">{inner}</div>"#
          )
        } else {
          format!(
            r#"<div class="wf-node {name_class}" data-node-type="{type_attr}">{inner}</div>"#
          )
        }
      },
      NodeKind::Text => render_text(node, self.options),
      NodeKind::Shape => render_shape(node),
      NodeKind::Unrecognized => {
        if depth == 0 {
          self.warn(format!(
            "unsupported top-level node type: {}",
            node.node_type
          ));
        }
        String::new()
      },
    }
  }

  /// Record a diagnostic. Warnings keep encounter order and are never
  /// deduplicated.
  pub fn warn(&mut self, message: impl Into<String>) {
    self.warnings.push(message.into());
  }

  /// Warnings collected so far, in encounter order.
  #[must_use]
  pub fn warnings(&self) -> &[String] {
    &self.warnings
  }

  /// Consume the walker and return its warnings.
  #[must_use]
  pub fn into_warnings(self) -> Vec<String> {
    self.warnings
  }
}
