use anyhow::{bail, Context};
use serde_json::{Map, Value};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Face attributes deck assembly never reads, dropped from the full database.
pub const SKIPPED_ATTRIBUTES: &[&str] = &[
    "edhrecRank",
    "foreignData",
    "hand",
    "isReserved",
    "leadershipSkills",
    "life",
    "purchaseUrls",
    "rulings",
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReduceReport {
    pub cards: usize,
    pub faces: usize,
    pub attributes_dropped: usize,
}

/// Rebuilds `{"data": {name: [face, ...]}}` without the skipped attributes.
/// Everything outside `data` is left behind.
pub fn reduce_atomic_cards(document: &Value) -> anyhow::Result<(Value, ReduceReport)> {
    let Some(cards) = document.get("data").and_then(Value::as_object) else {
        bail!("document has no `data` object");
    };
    let mut report = ReduceReport::default();
    let mut reduced = Map::with_capacity(cards.len());
    for (name, entry) in cards {
        let Some(faces) = entry.as_array() else {
            bail!("card {name}: expected an array of faces");
        };
        let mut kept_faces = Vec::with_capacity(faces.len());
        for (idx, face) in faces.iter().enumerate() {
            let Some(attrs) = face.as_object() else {
                bail!("card {name}: face {idx} is not an object");
            };
            let kept: Map<String, Value> = attrs
                .iter()
                .filter(|(key, _)| !SKIPPED_ATTRIBUTES.contains(&key.as_str()))
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect();
            report.attributes_dropped += attrs.len() - kept.len();
            report.faces += 1;
            kept_faces.push(Value::Object(kept));
        }
        report.cards += 1;
        reduced.insert(name.clone(), Value::Array(kept_faces));
    }
    let mut root = Map::new();
    root.insert("data".to_string(), Value::Object(reduced));
    Ok((Value::Object(root), report))
}

pub fn reduce_file(input: &Path, output: &Path) -> anyhow::Result<ReduceReport> {
    let raw = fs::read_to_string(input).with_context(|| format!("read {}", input.display()))?;
    let document: Value =
        serde_json::from_str(&raw).with_context(|| format!("parse {}", input.display()))?;
    let (reduced, report) =
        reduce_atomic_cards(&document).with_context(|| format!("reduce {}", input.display()))?;
    let file = File::create(output).with_context(|| format!("create {}", output.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, &reduced)
        .with_context(|| format!("write {}", output.display()))?;
    writer
        .flush()
        .with_context(|| format!("flush {}", output.display()))?;
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn drops_only_skipped_attributes() {
        let document = json!({
            "meta": {"version": "5.1.0"},
            "data": {
                "Serra Angel": [{
                    "name": "Serra Angel",
                    "manaCost": "{3}{W}{W}",
                    "colorIdentity": ["W"],
                    "legalities": {"modern": "Legal"},
                    "edhrecRank": 4521,
                    "foreignData": [{"language": "German", "name": "Serra-Engel"}],
                    "purchaseUrls": {"tcgplayer": "https://example.invalid"},
                    "rulings": [],
                    "isReserved": false
                }],
                "Momir Vig, Simic Visionary Avatar": [{
                    "name": "Momir Vig, Simic Visionary Avatar",
                    "hand": "+0",
                    "life": "+4",
                    "leadershipSkills": {"commander": false},
                    "legalities": {"vanguard": "Legal"}
                }]
            }
        });

        let (reduced, report) = reduce_atomic_cards(&document).expect("reduce");
        assert_eq!(
            reduced,
            json!({
                "data": {
                    "Serra Angel": [{
                        "name": "Serra Angel",
                        "manaCost": "{3}{W}{W}",
                        "colorIdentity": ["W"],
                        "legalities": {"modern": "Legal"}
                    }],
                    "Momir Vig, Simic Visionary Avatar": [{
                        "name": "Momir Vig, Simic Visionary Avatar",
                        "legalities": {"vanguard": "Legal"}
                    }]
                }
            })
        );
        assert_eq!(
            report,
            ReduceReport {
                cards: 2,
                faces: 2,
                attributes_dropped: 8
            }
        );
    }

    #[test]
    fn keeps_every_face() {
        let document = json!({
            "data": {
                "Fire // Ice": [
                    {"side": "a", "rulings": []},
                    {"side": "b", "rulings": []}
                ]
            }
        });
        let (reduced, report) = reduce_atomic_cards(&document).expect("reduce");
        assert_eq!(
            reduced["data"]["Fire // Ice"],
            json!([{"side": "a"}, {"side": "b"}])
        );
        assert_eq!(report.faces, 2);
    }

    #[test]
    fn rejects_malformed_documents() {
        assert!(reduce_atomic_cards(&json!({"meta": {}})).is_err());
        assert!(reduce_atomic_cards(&json!({"data": {"Bad": {"name": "Bad"}}})).is_err());
        assert!(reduce_atomic_cards(&json!({"data": {"Bad": ["face"]}})).is_err());
    }
}
