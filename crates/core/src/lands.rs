use crate::{
    ColorSet, DeckConfig, DeckError, EmptyPoolPolicy, Event, EventBus, ManaSymbol, SymbolCounts,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Basic lands per symbol, only positive counts, iterated in WUBRGC order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct LandAllocation {
    counts: BTreeMap<ManaSymbol, u32>,
}

impl LandAllocation {
    pub fn get(&self, symbol: ManaSymbol) -> u32 {
        self.counts.get(&symbol).copied().unwrap_or(0)
    }

    pub fn set(&mut self, symbol: ManaSymbol, count: u32) {
        if count == 0 {
            self.counts.remove(&symbol);
        } else {
            self.counts.insert(symbol, count);
        }
    }

    pub fn total(&self) -> u32 {
        self.counts.values().sum()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ManaSymbol, u32)> + '_ {
        self.counts.iter().map(|(symbol, count)| (*symbol, *count))
    }

    /// `"<count> <basic land>"` per entry.
    pub fn lines(&self) -> Vec<String> {
        self.iter()
            .map(|(symbol, count)| format!("{} {}", count, symbol.basic_land()))
            .collect()
    }
}

/// Splits the land slots in proportion to the symbols in `counts`.
///
/// One slot per chosen color is held back and handed out as the +1 minimum
/// to every symbol that appears. Each share is rounded half-to-even on its
/// own, so the total can drift from `config.total_lands` by a land or two.
pub fn allocate_lands(
    counts: &SymbolCounts,
    colors: &ColorSet,
    config: &DeckConfig,
    events: &mut EventBus,
) -> Result<LandAllocation, DeckError> {
    let total = counts.total();
    if total == 0 {
        return match config.empty_pool {
            EmptyPoolPolicy::Error => Err(DeckError::EmptyManaPool),
            EmptyPoolPolicy::EvenSplit => {
                events.push(Event::EmptyPoolFallback {
                    lands: config.total_lands,
                });
                Ok(even_split(colors, config.total_lands))
            }
        };
    }

    let lands = config.total_lands.saturating_sub(colors.len() as u32);
    let mut allocation = LandAllocation::default();
    for (symbol, count) in counts.iter() {
        if count == 0 {
            continue;
        }
        let share = round_half_even(u64::from(lands) * u64::from(count), u64::from(total));
        allocation.set(symbol, share as u32 + 1);
    }
    Ok(allocation)
}

/// Fallback for symbol-free decks: the ColorSet shares the lands evenly,
/// earlier colors take the remainder, a colorless deck gets Wastes.
pub fn even_split(colors: &ColorSet, total_lands: u32) -> LandAllocation {
    let mut allocation = LandAllocation::default();
    if colors.is_empty() {
        allocation.set(ManaSymbol::Colorless, total_lands);
        return allocation;
    }
    let len = colors.len() as u32;
    let base = total_lands / len;
    let remainder = total_lands % len;
    for (idx, color) in colors.iter().enumerate() {
        let extra = u32::from((idx as u32) < remainder);
        allocation.set(color.symbol(), base + extra);
    }
    allocation
}

/// `numerator / denominator` rounded to nearest, ties to even.
fn round_half_even(numerator: u64, denominator: u64) -> u64 {
    let quotient = numerator / denominator;
    let twice_rem = 2 * (numerator % denominator);
    if twice_rem > denominator || (twice_rem == denominator && quotient % 2 == 1) {
        quotient + 1
    } else {
        quotient
    }
}
