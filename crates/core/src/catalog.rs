use crate::Color;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One printed side of a card. Only the attributes deck assembly reads are
/// kept; anything else in the source document is skipped on load.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Face {
    #[serde(default)]
    pub legalities: BTreeMap<String, String>,
    #[serde(default)]
    pub color_identity: Vec<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mana_cost: Option<String>,
}

impl Face {
    pub fn with_legality(mut self, format: &str, status: &str) -> Self {
        self.legalities.insert(format.to_string(), status.to_string());
        self
    }

    pub fn with_color_identity(mut self, colors: &[Color]) -> Self {
        self.color_identity = colors.to_vec();
        self
    }

    pub fn with_mana_cost(mut self, cost: &str) -> Self {
        self.mana_cost = Some(cost.to_string());
        self
    }

    pub fn legality(&self, format: &str) -> Option<&str> {
        self.legalities.get(format).map(String::as_str)
    }
}

/// Card name to faces, face 0 being the front. Names are kept sorted so a
/// seeded draw over the keyset is reproducible.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Catalog {
    cards: BTreeMap<String, Vec<Face>>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, faces: Vec<Face>) {
        self.cards.insert(name.into(), faces);
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.cards.contains_key(name)
    }

    pub fn faces(&self, name: &str) -> Option<&[Face]> {
        self.cards.get(name).map(Vec::as_slice)
    }

    pub fn primary_face(&self, name: &str) -> Option<&Face> {
        self.faces(name)?.first()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.cards.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Face])> {
        self.cards
            .iter()
            .map(|(name, faces)| (name.as_str(), faces.as_slice()))
    }
}

impl FromIterator<(String, Vec<Face>)> for Catalog {
    fn from_iter<I: IntoIterator<Item = (String, Vec<Face>)>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}
