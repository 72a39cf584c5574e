//! Wireframe rendering: low-fidelity placeholder markup from Figma node
//! trees.
//!
//! The walk is pure and single-pass. Containers wrap their children's
//! output, text becomes heading or line placeholders, shapes become image
//! placeholders (or dividers when they look like thin horizontal rules),
//! and everything else is dropped. [`assemble`] stitches the fragments for
//! the requested node IDs into a complete HTML document.
pub mod assemble;
pub mod options;
pub mod sanitize;
pub mod shape;
pub mod text;
pub mod walker;

pub use assemble::{
  AssembledDocument,
  CSS_MARKER,
  WIREFRAME_CSS,
  assemble,
  inject_stylesheet,
};
pub use options::RenderOptions;
pub use walker::{MAX_DEPTH, TreeWalker};
