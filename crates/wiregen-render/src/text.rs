use wiregen_figma::Node;

use crate::options::RenderOptions;

/// Font size at or above which text renders as a heading placeholder.
pub const HEADING_FONT_SIZE: f64 = 18.0;

/// Without font information, text at most this many characters long is
/// assumed to be a heading. A heuristic, not a measurement; the value is
/// preserved for output compatibility.
pub const HEADING_MAX_CHARS: usize = 14;

/// Render a text node as a heading or line placeholder.
///
/// Empty or whitespace-only content always renders as an empty line
/// placeholder, regardless of font size or options. With
/// [`RenderOptions::preserve_text`] the placeholder carries the literal
/// text, angle-bracket-stripped and escaped.
#[must_use]
pub fn render_text(node: &Node, options: &RenderOptions) -> String {
  let text = collapse_whitespace(node.characters.as_deref().unwrap_or_default());
  if text.is_empty() {
    return r#"<div class="wf-line"></div>"#.to_owned();
  }

  let heading = match node.style.as_ref().and_then(|style| style.font_size) {
    Some(size) => size >= HEADING_FONT_SIZE,
    None => text.chars().count() <= HEADING_MAX_CHARS,
  };
  let class = if heading { "wf-heading" } else { "wf-line" };

  if options.preserve_text {
    // Angle brackets are stripped before escaping so design text can never
    // form tags in the output.
    let stripped: String =
      text.chars().filter(|c| !matches!(c, '<' | '>')).collect();
    let escaped = html_escape::encode_text(&stripped);
    format!(r#"<div class="{class} wf-text">{escaped}</div>"#)
  } else {
    format!(r#"<div class="{class}"></div>"#)
  }
}

/// Collapse internal whitespace runs to single spaces and trim the ends.
fn collapse_whitespace(text: &str) -> String {
  text.split_whitespace().collect::<Vec<_>>().join(" ")
}
