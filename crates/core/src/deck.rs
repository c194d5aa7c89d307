use crate::{
    is_allowed_color, is_legal, Catalog, Color, ColorSet, DeckConfig, DeckError, Event, EventBus,
    RngState, SamplingStrategy, MAX_COLORS,
};

/// Picks `num_colors` distinct colors uniformly. Colorless is never a choice.
pub fn choose_colors(rng: &mut RngState, num_colors: usize) -> Result<ColorSet, DeckError> {
    if num_colors > MAX_COLORS {
        return Err(DeckError::InvalidColorCount(num_colors));
    }
    Ok(rng.sample(&Color::ALL, num_colors).into_iter().collect())
}

pub fn passes_filters(catalog: &Catalog, name: &str, colors: &ColorSet, config: &DeckConfig) -> bool {
    is_legal(catalog, name, &config.format, &config.legal_status)
        && is_allowed_color(catalog, name, colors)
}

/// Every legal, on-color card name, in catalog order.
pub fn candidate_pool<'a>(
    catalog: &'a Catalog,
    colors: &ColorSet,
    config: &DeckConfig,
) -> Vec<&'a str> {
    catalog
        .names()
        .filter(|name| passes_filters(catalog, name, colors, config))
        .collect()
}

/// Draws `config.spell_count` card names with replacement. Duplicates are
/// allowed; order is draw order.
pub fn sample_spells(
    catalog: &Catalog,
    colors: &ColorSet,
    config: &DeckConfig,
    rng: &mut RngState,
    events: &mut EventBus,
) -> Result<Vec<String>, DeckError> {
    match config.sampling {
        SamplingStrategy::Pool => sample_from_pool(catalog, colors, config, rng, events),
        SamplingStrategy::Rejection { max_draws } => {
            sample_with_rejection(catalog, colors, config, max_draws, rng, events)
        }
    }
}

fn sample_from_pool(
    catalog: &Catalog,
    colors: &ColorSet,
    config: &DeckConfig,
    rng: &mut RngState,
    events: &mut EventBus,
) -> Result<Vec<String>, DeckError> {
    let pool = candidate_pool(catalog, colors, config);
    events.push(Event::PoolBuilt {
        candidates: pool.len(),
        catalog: catalog.len(),
    });
    if pool.len() < config.spell_count {
        return Err(DeckError::UnsatisfiableFilter {
            available: pool.len(),
            required: config.spell_count,
        });
    }
    let spells: Vec<String> = (0..config.spell_count)
        .map(|_| pool[rng.index(pool.len())].to_string())
        .collect();
    events.push(Event::DeckFilled {
        spells: spells.len(),
        draws: spells.len(),
    });
    Ok(spells)
}

fn sample_with_rejection(
    catalog: &Catalog,
    colors: &ColorSet,
    config: &DeckConfig,
    max_draws: usize,
    rng: &mut RngState,
    events: &mut EventBus,
) -> Result<Vec<String>, DeckError> {
    let names: Vec<&str> = catalog.names().collect();
    let mut spells = Vec::with_capacity(config.spell_count);
    let mut draws = 0usize;
    while spells.len() < config.spell_count {
        if names.is_empty() {
            return Err(DeckError::UnsatisfiableFilter {
                available: 0,
                required: config.spell_count,
            });
        }
        if draws >= max_draws {
            return Err(DeckError::DrawBudgetExhausted {
                accepted: spells.len(),
                draws,
                required: config.spell_count,
            });
        }
        draws += 1;
        let name = names[rng.index(names.len())];
        if passes_filters(catalog, name, colors, config) {
            spells.push(name.to_string());
        }
    }
    events.push(Event::DeckFilled {
        spells: spells.len(),
        draws,
    });
    Ok(spells)
}
