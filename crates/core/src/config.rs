use serde::{Deserialize, Serialize};

pub const DEFAULT_FORMAT: &str = "modern";
pub const LEGAL_STATUS: &str = "Legal";
pub const DEFAULT_SPELL_COUNT: usize = 36;
pub const DEFAULT_TOTAL_LANDS: u32 = 24;
pub const DEFAULT_MAX_DRAWS: usize = 1_000_000;
pub const MAX_COLORS: usize = 5;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum SamplingStrategy {
    #[default]
    /// Filter the catalog once, then draw with replacement from the survivors.
    Pool,
    /// Draw from the whole catalog and discard misses, up to `max_draws` draws.
    Rejection { max_draws: usize },
}

/// What to do when the chosen spells carry no mana symbols at all.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum EmptyPoolPolicy {
    Error,
    #[default]
    EvenSplit,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeckConfig {
    pub num_colors: usize,
    pub format: String,
    pub legal_status: String,
    pub spell_count: usize,
    pub total_lands: u32,
    #[serde(default)]
    pub sampling: SamplingStrategy,
    #[serde(default)]
    pub empty_pool: EmptyPoolPolicy,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            num_colors: 2,
            format: DEFAULT_FORMAT.to_string(),
            legal_status: LEGAL_STATUS.to_string(),
            spell_count: DEFAULT_SPELL_COUNT,
            total_lands: DEFAULT_TOTAL_LANDS,
            sampling: SamplingStrategy::Pool,
            empty_pool: EmptyPoolPolicy::EvenSplit,
        }
    }
}

impl DeckConfig {
    pub fn with_colors(num_colors: usize) -> Self {
        Self {
            num_colors,
            ..Self::default()
        }
    }
}
