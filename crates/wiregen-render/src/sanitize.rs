use std::sync::OnceLock;

use regex::Regex;

/// Maximum length of a derived class name.
const MAX_CLASS_LEN: usize = 40;

/// Derive a CSS class fragment from a node name.
///
/// Lowercases the name, collapses every run of non-alphanumeric characters
/// into a single hyphen, trims leading and trailing hyphens, and truncates
/// to [`MAX_CLASS_LEN`] characters. Deterministic; collisions are fine
/// because the class is presentational only, never an identifier.
#[must_use]
pub fn class_from_name(name: &str) -> String {
  static NON_ALNUM: OnceLock<Regex> = OnceLock::new();
  let non_alnum = NON_ALNUM.get_or_init(|| {
    #[allow(
      clippy::unwrap_used,
      reason = "regex pattern is statically known to be valid"
    )]
    Regex::new(r"[^a-z0-9]+").unwrap()
  });

  let lowered = name.to_lowercase();
  let hyphenated = non_alnum.replace_all(&lowered, "-");
  hyphenated
    .trim_matches('-')
    .chars()
    .take(MAX_CLASS_LEN)
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn lowercases_and_hyphenates() {
    assert_eq!(class_from_name("Hero Frame"), "hero-frame");
    assert_eq!(class_from_name("Nav / Top Bar"), "nav-top-bar");
  }

  #[test]
  fn collapses_runs_and_trims_hyphens() {
    assert_eq!(class_from_name("  --Weird***Name--  "), "weird-name");
    assert_eq!(class_from_name("!!!"), "");
  }

  #[test]
  fn truncates_to_forty_characters() {
    let long = "a".repeat(100);
    assert_eq!(class_from_name(&long).len(), 40);
  }

  #[test]
  fn is_deterministic() {
    let name = "Card (Primary) #2";
    assert_eq!(class_from_name(name), class_from_name(name));
  }
}
