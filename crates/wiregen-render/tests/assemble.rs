#![allow(clippy::expect_used, clippy::unwrap_used, reason = "Fine in tests")]

use std::collections::HashMap;

use wiregen_figma::{Node, NodeEntry};
use wiregen_render::{
  CSS_MARKER,
  RenderOptions,
  WIREFRAME_CSS,
  assemble,
  inject_stylesheet,
};

fn frame(id: &str, name: &str) -> Node {
  Node {
    id: id.to_owned(),
    name: name.to_owned(),
    node_type: "FRAME".to_owned(),
    ..Node::default()
  }
}

fn entry(node: Node) -> NodeEntry {
  NodeEntry {
    document: Some(node),
  }
}

fn ids(ids: &[&str]) -> Vec<String> {
  ids.iter().map(|id| (*id).to_owned()).collect()
}

#[test]
fn stylesheet_injection_is_idempotent() {
  let document =
    "<!DOCTYPE html>\n<html>\n<head>\n</head>\n<body>\n</body>\n</html>\n";

  let once = inject_stylesheet(document);
  assert!(once.contains(CSS_MARKER), "first injection adds the marker");
  assert!(once.contains("<style>"), "first injection adds a style element");

  let twice = inject_stylesheet(&once);
  assert_eq!(once, twice, "re-injection must be byte-identical");
}

#[test]
fn css_constant_carries_the_marker() {
  assert!(
    WIREFRAME_CSS.contains(CSS_MARKER),
    "marker must live inside the stylesheet so injection is detectable"
  );
}

#[test]
fn renders_present_nodes_and_warns_about_missing_ones() {
  let mut nodes = HashMap::new();
  nodes.insert("1:1".to_owned(), entry(frame("1:1", "Hero")));
  // 1:2 was requested but the API returned nothing for it

  let document =
    assemble(&ids(&["1:1", "1:2"]), &nodes, &RenderOptions::default());

  assert_eq!(document.rendered, 1);
  assert_eq!(document.warnings.len(), 1);
  assert!(
    document.warnings[0].contains("1:2"),
    "warning should reference the missing ID, got: {:?}",
    document.warnings[0]
  );
  assert!(document.html.contains(r#"class="wf-node hero""#));
}

#[test]
fn entry_without_document_data_is_skipped_with_warning() {
  let mut nodes = HashMap::new();
  nodes.insert("1:1".to_owned(), NodeEntry::default());

  let document = assemble(&ids(&["1:1"]), &nodes, &RenderOptions::default());

  assert_eq!(document.rendered, 0);
  assert_eq!(document.warnings.len(), 1);
  assert!(document.warnings[0].contains("1:1"));
}

#[test]
fn fragments_are_joined_with_newlines_in_request_order() {
  let mut nodes = HashMap::new();
  nodes.insert("1:1".to_owned(), entry(frame("1:1", "First")));
  nodes.insert("1:2".to_owned(), entry(frame("1:2", "Second")));

  let options = RenderOptions {
    inline_css: false,
    wrap_root: false,
    ..RenderOptions::default()
  };
  let document = assemble(&ids(&["1:2", "1:1"]), &nodes, &options);

  let second = document.html.find("second").expect("second fragment");
  let first = document.html.find("first").expect("first fragment");
  assert!(
    second < first,
    "requested order must win over map order: {}",
    document.html
  );
  assert!(document.html.contains("</div>\n<div"));
}

#[test]
fn root_wrapper_is_present_by_default_and_optional() {
  let mut nodes = HashMap::new();
  nodes.insert("1:1".to_owned(), entry(frame("1:1", "Hero")));

  let wrapped = assemble(&ids(&["1:1"]), &nodes, &RenderOptions::default());
  assert!(wrapped.html.contains(r#"<div class="wf-root">"#));

  // The stylesheet mentions .wf-root too, so check for the element rather
  // than the bare class name when CSS stays inlined
  let options = RenderOptions {
    wrap_root: false,
    ..RenderOptions::default()
  };
  let bare = assemble(&ids(&["1:1"]), &nodes, &options);
  assert!(!bare.html.contains(r#"<div class="wf-root">"#));

  let options = RenderOptions {
    wrap_root: false,
    inline_css: false,
    ..RenderOptions::default()
  };
  let plain = assemble(&ids(&["1:1"]), &nodes, &options);
  assert!(!plain.html.contains("wf-root"));
}

#[test]
fn inline_css_option_controls_injection() {
  let nodes = HashMap::new();

  let styled = assemble(&[], &nodes, &RenderOptions::default());
  assert!(styled.html.contains(CSS_MARKER));

  let options = RenderOptions {
    inline_css: false,
    ..RenderOptions::default()
  };
  let unstyled = assemble(&[], &nodes, &options);
  assert!(!unstyled.html.contains(CSS_MARKER));
}

#[test]
fn assembled_output_is_a_complete_document() {
  let mut nodes = HashMap::new();
  nodes.insert("1:1".to_owned(), entry(frame("1:1", "Hero")));

  let document = assemble(&ids(&["1:1"]), &nodes, &RenderOptions::default());
  assert!(document.html.starts_with("<!DOCTYPE html>"));
  assert!(document.html.contains("<head>"));
  assert!(document.html.contains("<body>"));
  assert!(document.html.trim_end().ends_with("</html>"));
}
