use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DeckError {
    #[error("invalid color count {0}: must be between 0 and 5")]
    InvalidColorCount(usize),
    #[error("no mana symbols in the chosen cards, cannot compute land ratios")]
    EmptyManaPool,
    #[error("format and color filters leave {available} cards, {required} needed")]
    UnsatisfiableFilter { available: usize, required: usize },
    #[error("draw budget spent: {accepted} of {required} cards accepted after {draws} draws")]
    DrawBudgetExhausted {
        accepted: usize,
        draws: usize,
        required: usize,
    },
    #[error("card not in catalog: {0}")]
    UnknownCard(String),
}
