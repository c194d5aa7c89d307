use crate::{Catalog, ColorSet, DEFAULT_FORMAT, LEGAL_STATUS};

/// True iff face 0 lists `format` with exactly `status`. Unknown cards and
/// cards without faces are never legal.
pub fn is_legal(catalog: &Catalog, name: &str, format: &str, status: &str) -> bool {
    catalog
        .primary_face(name)
        .and_then(|face| face.legality(format))
        .is_some_and(|value| value == status)
}

pub fn is_modern(catalog: &Catalog, name: &str) -> bool {
    is_legal(catalog, name, DEFAULT_FORMAT, LEGAL_STATUS)
}

/// Subset check on face 0's color identity; colorless passes any set.
pub fn is_allowed_color(catalog: &Catalog, name: &str, colors: &ColorSet) -> bool {
    match catalog.primary_face(name) {
        Some(face) => colors.is_superset_of(&face.color_identity),
        None => false,
    }
}
