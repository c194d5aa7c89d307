use crate::{ColorSet, LandAllocation, SymbolCounts};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Event {
    ColorsChosen {
        colors: ColorSet,
        seed: u64,
    },
    PoolBuilt {
        candidates: usize,
        catalog: usize,
    },
    DeckFilled {
        spells: usize,
        draws: usize,
    },
    SymbolsCounted {
        counts: SymbolCounts,
        total: u32,
    },
    EmptyPoolFallback {
        lands: u32,
    },
    LandsAllocated {
        allocation: LandAllocation,
        total: u32,
    },
}

#[derive(Debug, Default)]
pub struct EventBus {
    queue: Vec<Event>,
}

impl EventBus {
    pub fn push(&mut self, event: Event) {
        self.queue.push(event);
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn drain(&mut self) -> impl Iterator<Item = Event> + '_ {
        self.queue.drain(..)
    }
}
