//! Deck assembly: colors, filters, sampling, symbol tally and land split.
//! Keep this crate free of IO; catalogs come in already loaded.

pub mod assembler;
pub mod cards;
pub mod catalog;
pub mod config;
pub mod deck;
pub mod error;
pub mod events;
pub mod filters;
pub mod lands;
pub mod rng;
pub mod symbols;

pub use assembler::*;
pub use cards::*;
pub use catalog::*;
pub use config::*;
pub use deck::*;
pub use error::*;
pub use events::*;
pub use filters::*;
pub use lands::*;
pub use rng::*;
pub use symbols::*;
