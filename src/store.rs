//! Item persistence boundary.
//!
//! The engine itself never touches storage; hosts hand it a pool and persist
//! what comes back. `ItemStore` is the seam a real backend plugs into, and
//! `InMemoryStore` is the reference implementation used until one is attached.

use crate::domain::Item;
use crate::error::Result;

/// Where the item pool comes from and where updated review states go.
///
/// `save` upserts by id with last-write-wins semantics; no transactional
/// guarantee is required from implementations.
pub trait ItemStore {
  fn load_all(&self) -> Result<Vec<Item>>;
  fn save(&mut self, items: &[Item]) -> Result<()>;
}

/// Vec-backed store for tests, demos, and first-run sessions
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
  items: Vec<Item>,
}

impl InMemoryStore {
  pub fn new(items: Vec<Item>) -> Self {
    InMemoryStore { items }
  }

  /// A store pre-loaded with the built-in starter vocabulary
  pub fn with_starter_items() -> Self {
    let store = InMemoryStore::new(starter_items());
    tracing::info!(items = store.items.len(), "Seeded starter vocabulary");
    store
  }

  pub fn len(&self) -> usize {
    self.items.len()
  }

  pub fn is_empty(&self) -> bool {
    self.items.is_empty()
  }
}

impl ItemStore for InMemoryStore {
  fn load_all(&self) -> Result<Vec<Item>> {
    Ok(self.items.clone())
  }

  fn save(&mut self, items: &[Item]) -> Result<()> {
    for updated in items {
      match self
        .items
        .iter_mut()
        .find(|existing| existing.id == updated.id)
      {
        Some(existing) => *existing = updated.clone(),
        None => self.items.push(updated.clone()),
      }
    }
    Ok(())
  }
}

// Helper to create a starter item with an optional example sentence
fn item(id: &str, term: &str, meaning: &str, example: Option<&str>) -> Item {
  let base = Item::new(id, term, meaning);
  match example {
    Some(sentence) => base.with_example(sentence),
    None => base,
  }
}

fn starter_items() -> Vec<Item> {
  let entries = [
    ("apply", "適用する", Some("Please apply the new settings before restarting.")),
    ("improve", "改善する", Some("We improve the course a little every term.")),
    ("consider", "考慮する", Some("Consider both options before you decide.")),
    ("achieve", "達成する", Some("She achieved her goal of reading one book a week.")),
    ("maintain", "維持する", None),
    ("require", "必要とする", Some("This recipe requires three eggs.")),
    ("provide", "提供する", None),
    ("establish", "設立する", Some("The school was established in 1902.")),
    ("obtain", "入手する", None),
    ("reduce", "削減する", Some("They reduced the waiting time by half.")),
  ];

  entries
    .iter()
    .enumerate()
    .map(|(i, (term, meaning, example))| {
      item(&format!("starter-{:02}", i + 1), term, meaning, *example)
    })
    .collect()
}
