use crate::types::Node;

/// Structural role of a node, derived from its `type` string.
///
/// The membership sets are closed on purpose: node types Figma introduces
/// later fall into [`NodeKind::Unrecognized`] and are dropped by the walker,
/// with a warning only when they were directly requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
  /// A node whose children are rendered inside a wrapping element.
  Container,
  /// A text node, rendered as a heading or line placeholder.
  Text,
  /// A geometric node, rendered as an image placeholder or divider.
  Shape,
  /// Anything outside the three sets above.
  Unrecognized,
}

impl NodeKind {
  /// Classify a raw node type string.
  #[must_use]
  pub fn classify(node_type: &str) -> Self {
    match node_type {
      "FRAME" | "GROUP" | "COMPONENT" | "INSTANCE" | "SECTION" | "CANVAS"
      | "COMPONENT_SET" => Self::Container,
      "TEXT" => Self::Text,
      "RECTANGLE" | "ELLIPSE" | "POLYGON" | "VECTOR" | "STAR" | "LINE" => {
        Self::Shape
      },
      _ => Self::Unrecognized,
    }
  }
}

impl Node {
  /// Structural role of this node.
  #[must_use]
  pub fn kind(&self) -> NodeKind {
    NodeKind::classify(&self.node_type)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn classifies_containers() {
    for ty in [
      "FRAME",
      "GROUP",
      "COMPONENT",
      "INSTANCE",
      "SECTION",
      "CANVAS",
      "COMPONENT_SET",
    ] {
      assert_eq!(NodeKind::classify(ty), NodeKind::Container, "type: {ty}");
    }
  }

  #[test]
  fn classifies_text() {
    assert_eq!(NodeKind::classify("TEXT"), NodeKind::Text);
  }

  #[test]
  fn classifies_shapes() {
    for ty in ["RECTANGLE", "ELLIPSE", "POLYGON", "VECTOR", "STAR", "LINE"] {
      assert_eq!(NodeKind::classify(ty), NodeKind::Shape, "type: {ty}");
    }
  }

  #[test]
  fn unknown_types_are_unrecognized() {
    assert_eq!(NodeKind::classify("SLICE"), NodeKind::Unrecognized);
    assert_eq!(NodeKind::classify("BOOLEAN_OPERATION"), NodeKind::Unrecognized);
    assert_eq!(NodeKind::classify(""), NodeKind::Unrecognized);
    // Membership is exact, not case-insensitive
    assert_eq!(NodeKind::classify("frame"), NodeKind::Unrecognized);
  }
}
