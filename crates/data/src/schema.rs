use serde::{Deserialize, Serialize};

pub use deckforge_core::{Catalog, Color, Face};

/// Top level of an AtomicCards-style document. `meta` and any other keys
/// are skipped.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogFile {
    pub data: Catalog,
}
