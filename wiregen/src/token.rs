use std::{collections::HashMap, sync::RwLock};

/// Key under which the Figma access token is stored.
pub const FIGMA_TOKEN_KEY: &str = "figma";

/// Injected credential storage.
///
/// Handlers never reach for ambient process globals; anything that needs a
/// credential goes through this interface, so the backing store can live
/// outside the process when instances are scaled independently.
pub trait TokenStore: Send + Sync {
  /// Look up a stored value.
  fn get(&self, key: &str) -> Option<String>;

  /// Store or replace a value.
  fn put(&self, key: &str, value: String);
}

/// In-memory store backed by an `RwLock`.
///
/// Suitable for a single instance; swap in an external store when scaling
/// out.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
  entries: RwLock<HashMap<String, String>>,
}

impl MemoryTokenStore {
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }

  /// Create a store pre-seeded with the Figma token, when one is known.
  #[must_use]
  pub fn seeded(token: Option<String>) -> Self {
    let store = Self::new();
    if let Some(token) = token {
      store.put(FIGMA_TOKEN_KEY, token);
    }
    store
  }
}

impl TokenStore for MemoryTokenStore {
  fn get(&self, key: &str) -> Option<String> {
    self
      .entries
      .read()
      .ok()
      .and_then(|entries| entries.get(key).cloned())
  }

  fn put(&self, key: &str, value: String) {
    if let Ok(mut entries) = self.entries.write() {
      entries.insert(key.to_owned(), value);
    }
  }
}
