use wiregen_figma::Node;

/// Rectangles shorter than this are divider candidates.
pub const DIVIDER_MAX_HEIGHT: f64 = 30.0;

/// Width/height ratio above which a short rectangle is treated as a
/// divider. Like the text thresholds, inherited and tunable.
pub const DIVIDER_MIN_ASPECT: f64 = 6.0;

/// Render a shape node as an image placeholder, or as a line placeholder
/// when it looks like a thin horizontal rule rather than a meaningful
/// image block.
#[must_use]
pub fn render_shape(node: &Node) -> String {
  if node.node_type == "RECTANGLE" && is_divider(node) {
    return r#"<div class="wf-line"></div>"#.to_owned();
  }

  format!(
    r#"<div class="wf-image" data-node-type="{}"></div>"#,
    node.node_type.to_lowercase()
  )
}

fn is_divider(node: &Node) -> bool {
  let Some(bounds) = &node.absolute_bounding_box else {
    return false;
  };
  let (Some(width), Some(height)) = (bounds.width, bounds.height) else {
    return false;
  };

  // A zero-height rectangle has infinite aspect and still counts as a
  // divider; a zero-by-zero one divides to NaN and falls through to the
  // image placeholder
  height < DIVIDER_MAX_HEIGHT && width / height > DIVIDER_MIN_ASPECT
}
