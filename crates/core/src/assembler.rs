use crate::{
    allocate_lands, choose_colors, count_mana_symbols, sample_spells, Catalog, ColorSet,
    DeckConfig, DeckError, Event, EventBus, LandAllocation, RngState, SymbolCounts,
};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneratedDeck {
    pub seed: u64,
    pub colors: ColorSet,
    pub spells: Vec<String>,
    pub symbols: SymbolCounts,
    pub lands: LandAllocation,
}

impl GeneratedDeck {
    /// Spells as `1 <name>` in draw order, then lands in WUBRGC order.
    pub fn lines(&self) -> Vec<String> {
        self.spells
            .iter()
            .map(|name| format!("1 {name}"))
            .chain(self.lands.lines())
            .collect()
    }

    pub fn render(&self) -> String {
        self.lines().join("\n")
    }
}

impl fmt::Display for GeneratedDeck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Runs one generation over a borrowed catalog.
#[derive(Debug, Clone)]
pub struct DeckAssembler<'a> {
    catalog: &'a Catalog,
    config: DeckConfig,
}

impl<'a> DeckAssembler<'a> {
    pub fn new(catalog: &'a Catalog, config: DeckConfig) -> Self {
        Self { catalog, config }
    }

    pub fn generate(
        &self,
        rng: &mut RngState,
        events: &mut EventBus,
    ) -> Result<GeneratedDeck, DeckError> {
        let colors = choose_colors(rng, self.config.num_colors)?;
        events.push(Event::ColorsChosen {
            colors: colors.clone(),
            seed: rng.seed(),
        });

        let spells = sample_spells(self.catalog, &colors, &self.config, rng, events)?;

        let symbols = count_mana_symbols(self.catalog, &spells)?;
        events.push(Event::SymbolsCounted {
            counts: symbols.clone(),
            total: symbols.total(),
        });

        let lands = allocate_lands(&symbols, &colors, &self.config, events)?;
        events.push(Event::LandsAllocated {
            allocation: lands.clone(),
            total: lands.total(),
        });

        Ok(GeneratedDeck {
            seed: rng.seed(),
            colors,
            spells,
            symbols,
            lands,
        })
    }
}

/// One-shot helper over [`DeckAssembler`].
pub fn generate_deck(
    catalog: &Catalog,
    config: DeckConfig,
    rng: &mut RngState,
    events: &mut EventBus,
) -> Result<GeneratedDeck, DeckError> {
    DeckAssembler::new(catalog, config).generate(rng, events)
}
