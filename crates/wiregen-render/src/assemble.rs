use std::collections::HashMap;

use wiregen_figma::NodeEntry;

use crate::{options::RenderOptions, walker::TreeWalker};

/// Marker substring used to detect an already-injected stylesheet.
pub const CSS_MARKER: &str = "/* wiregen wireframe styles */";

/// Shared stylesheet for placeholder elements. Starts with [`CSS_MARKER`].
pub const WIREFRAME_CSS: &str = include_str!("../templates/wireframe.css");

/// Output of document assembly.
#[derive(Debug)]
pub struct AssembledDocument {
  /// Complete HTML document.
  pub html: String,

  /// Diagnostics for skipped or unrenderable nodes. Never fatal; an empty
  /// document with warnings is still a success.
  pub warnings: Vec<String>,

  /// Number of requested IDs that carried document data and were rendered.
  pub rendered: usize,
}

/// Render every requested node in order and assemble a complete HTML
/// document.
///
/// Requested IDs missing from the map, or present without document data,
/// are skipped with a warning; the rest still render. The concatenation is
/// optionally wrapped in a root container and the shared stylesheet is
/// optionally injected, exactly once.
#[must_use]
pub fn assemble(
  node_ids: &[String],
  nodes: &HashMap<String, NodeEntry>,
  options: &RenderOptions,
) -> AssembledDocument {
  let mut walker = TreeWalker::new(options);
  let mut fragments = Vec::with_capacity(node_ids.len());
  let mut rendered = 0;

  for id in node_ids {
    match nodes.get(id).and_then(|entry| entry.document.as_ref()) {
      Some(document) => {
        fragments.push(walker.render(document, 0));
        rendered += 1;
      },
      None => walker.warn(format!("no document data for node {id}")),
    }
  }

  let mut body = fragments.join("\n");
  if options.wrap_root {
    body = format!(r#"<div class="wf-root">{body}</div>"#);
  }

  let mut html = document_shell(&body);
  if options.inline_css {
    html = inject_stylesheet(&html);
  }

  AssembledDocument {
    html,
    warnings: walker.into_warnings(),
    rendered,
  }
}

/// Inject the shared stylesheet into an HTML document, exactly once.
///
/// Detection uses [`CSS_MARKER`]: a document that already carries the
/// marker is returned unchanged, byte for byte. The style element lands
/// just before `</head>`, or is prepended when there is no head.
#[must_use]
pub fn inject_stylesheet(html: &str) -> String {
  if html.contains(CSS_MARKER) {
    return html.to_owned();
  }

  let style = format!("<style>\n{WIREFRAME_CSS}</style>\n");
  match html.find("</head>") {
    Some(pos) => {
      let mut out = String::with_capacity(html.len() + style.len());
      out.push_str(&html[..pos]);
      out.push_str(&style);
      out.push_str(&html[pos..]);
      out
    },
    None => format!("{style}{html}"),
  }
}

fn document_shell(body: &str) -> String {
  format!(
    "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>Wireframe</title>\n</head>\n<body>\n{body}\n</body>\n</html>\n"
  )
}
