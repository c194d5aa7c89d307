use crate::schema::{Catalog, CatalogFile};
use anyhow::{bail, Context};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

pub const DEFAULT_CATALOG_FILE: &str = "AtomicCards_Small.json";

pub fn load_catalog(path: &Path) -> anyhow::Result<Catalog> {
    let file: CatalogFile = load_json(path)?;
    if file.data.is_empty() {
        bail!("catalog {} holds no cards", path.display());
    }
    Ok(file.data)
}

pub fn parse_catalog(raw: &str) -> anyhow::Result<Catalog> {
    let file: CatalogFile = serde_json::from_str(raw).context("parse catalog")?;
    Ok(file.data)
}

pub(crate) fn load_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> anyhow::Result<T> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let value = serde_json::from_str(&raw).with_context(|| format!("parse {}", path.display()))?;
    Ok(value)
}
