use crate::{Catalog, DeckError, ManaSymbol};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Tally per mana symbol. All six symbols are always present.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct SymbolCounts {
    counts: BTreeMap<ManaSymbol, u32>,
}

impl Default for SymbolCounts {
    fn default() -> Self {
        Self {
            counts: ManaSymbol::ALL.into_iter().map(|symbol| (symbol, 0)).collect(),
        }
    }
}

impl SymbolCounts {
    pub fn get(&self, symbol: ManaSymbol) -> u32 {
        self.counts.get(&symbol).copied().unwrap_or(0)
    }

    pub fn add(&mut self, symbol: ManaSymbol, amount: u32) {
        *self.counts.entry(symbol).or_insert(0) += amount;
    }

    pub fn total(&self) -> u32 {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ManaSymbol, u32)> + '_ {
        self.counts.iter().map(|(symbol, count)| (*symbol, *count))
    }

    /// Adds the occurrences of each symbol letter in `mana_cost`.
    ///
    /// This is a plain character count: `{W/P}` counts one W, `{2/U}` one U.
    pub fn add_mana_cost(&mut self, mana_cost: &str) {
        for symbol in ManaSymbol::ALL {
            let hits = mana_cost.chars().filter(|ch| *ch == symbol.code()).count();
            self.add(symbol, hits as u32);
        }
    }
}

/// Sums symbol letters over face 0's mana cost of every card in `deck`.
/// Cards without a mana cost, or without faces, contribute nothing.
pub fn count_mana_symbols(catalog: &Catalog, deck: &[String]) -> Result<SymbolCounts, DeckError> {
    let mut counts = SymbolCounts::default();
    for name in deck {
        let faces = catalog
            .faces(name)
            .ok_or_else(|| DeckError::UnknownCard(name.clone()))?;
        if let Some(cost) = faces.first().and_then(|face| face.mana_cost.as_deref()) {
            counts.add_mana_cost(cost);
        }
    }
    Ok(counts)
}
