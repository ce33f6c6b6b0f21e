//! Versioned snapshot save/load over a [`SnapshotStore`].
//!
//! Snapshots are JSON objects shaped `{version, gameState, ...}`. Loading
//! validates the raw value against a per-mode [`SnapshotSchema`] before
//! decoding it into the typed snapshot; anything absent, malformed, stale,
//! or mis-shaped is treated as "no prior state" and the offending entry is
//! removed. Saving is best-effort: failures are logged and swallowed so
//! gameplay never depends on storage working.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::storage::store::SnapshotStore;

/// Current snapshot schema version. Any stored mismatch is rejected — there
/// is no migration path.
pub const SCHEMA_VERSION: u32 = 1;

/// Shape requirements for a mode's persisted collection.
pub struct CollectionRule {
    /// JSON field holding the collection (e.g. `"board"`, `"items"`).
    pub field: &'static str,
    /// Per-element shape predicate.
    pub entity: fn(&Value) -> bool,
    /// Allowed collection lengths, if constrained (bingo: 0 or 25).
    pub lengths: Option<&'static [usize]>,
}

/// One reusable validator, parameterized per mode instead of three
/// near-identical ad hoc checkers.
pub struct SnapshotSchema {
    /// Fixed storage key for the mode.
    pub key: &'static str,
    /// Required `version` value.
    pub version: u32,
    /// Accepted `gameState` wire strings.
    pub allowed_states: &'static [&'static str],
    /// Collection shape, for modes that persist one.
    pub collection: Option<CollectionRule>,
    /// Mode-specific extra check over the whole snapshot object
    /// (e.g. bingo's `winningLine`).
    pub extra: Option<fn(&Value) -> bool>,
}

impl SnapshotSchema {
    /// Whether a raw stored value satisfies this schema.
    pub fn accepts(&self, value: &Value) -> bool {
        let obj = match value.as_object() {
            Some(obj) => obj,
            None => return false,
        };

        if obj.get("version").and_then(Value::as_u64) != Some(u64::from(self.version)) {
            return false;
        }

        match obj.get("gameState").and_then(Value::as_str) {
            Some(state) if self.allowed_states.contains(&state) => {}
            _ => return false,
        }

        if let Some(rule) = &self.collection {
            let items = match obj.get(rule.field).and_then(Value::as_array) {
                Some(items) => items,
                None => return false,
            };
            if let Some(lengths) = rule.lengths {
                if !lengths.contains(&items.len()) {
                    return false;
                }
            }
            if !items.iter().all(rule.entity) {
                return false;
            }
        }

        if let Some(extra) = self.extra {
            if !extra(value) {
                return false;
            }
        }

        true
    }
}

/// Serialize `snapshot` and write it under the schema's key. Best-effort:
/// serialization and store failures are logged and ignored.
pub fn save<T, S>(store: &mut S, schema: &SnapshotSchema, snapshot: &T)
where
    T: Serialize,
    S: SnapshotStore,
{
    match serde_json::to_string(snapshot) {
        Ok(json) => {
            if let Err(err) = store.write(schema.key, &json) {
                log::warn!("failed to save snapshot under '{}': {err}", schema.key);
            }
        }
        Err(err) => log::warn!("failed to serialize snapshot under '{}': {err}", schema.key),
    }
}

/// Fetch, validate, and decode the snapshot under the schema's key.
///
/// Returns `None` when no entry exists. Malformed JSON, a failed schema
/// check, or a failed decode also return `None` — after removing the
/// invalid entry so the next load starts clean.
pub fn load<T, S>(store: &mut S, schema: &SnapshotSchema) -> Option<T>
where
    T: DeserializeOwned,
    S: SnapshotStore,
{
    let raw = store.read(schema.key)?;

    match serde_json::from_str::<Value>(&raw) {
        Ok(value) if schema.accepts(&value) => match serde_json::from_value::<T>(value) {
            Ok(snapshot) => return Some(snapshot),
            Err(err) => {
                log::warn!("discarding snapshot under '{}': {err}", schema.key);
            }
        },
        Ok(_) => log::warn!("discarding snapshot under '{}': failed validation", schema.key),
        Err(err) => log::warn!("discarding snapshot under '{}': {err}", schema.key),
    }

    store.remove(schema.key);
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::store::MemoryStore;
    use serde::{Deserialize, Serialize};
    use serde_json::json;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct TestSnapshot {
        version: u32,
        game_state: String,
        items: Vec<TestItem>,
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct TestItem {
        id: u32,
        text: String,
        is_checked: bool,
    }

    fn item_shaped(value: &Value) -> bool {
        value.get("id").is_some_and(Value::is_number)
            && value.get("text").is_some_and(Value::is_string)
            && value.get("isChecked").is_some_and(Value::is_boolean)
    }

    fn schema() -> SnapshotSchema {
        SnapshotSchema {
            key: "test-state",
            version: SCHEMA_VERSION,
            allowed_states: &["start", "going"],
            collection: Some(CollectionRule {
                field: "items",
                entity: item_shaped,
                lengths: None,
            }),
            extra: None,
        }
    }

    fn sample() -> TestSnapshot {
        TestSnapshot {
            version: SCHEMA_VERSION,
            game_state: "going".to_string(),
            items: vec![TestItem { id: 0, text: "x".to_string(), is_checked: true }],
        }
    }

    #[test]
    fn save_then_load_round_trips() {
        let mut store = MemoryStore::new();
        save(&mut store, &schema(), &sample());
        let loaded: Option<TestSnapshot> = load(&mut store, &schema());
        assert_eq!(loaded, Some(sample()));
    }

    #[test]
    fn missing_key_loads_as_none() {
        let mut store = MemoryStore::new();
        let loaded: Option<TestSnapshot> = load(&mut store, &schema());
        assert_eq!(loaded, None);
    }

    #[test]
    fn version_mismatch_is_rejected_and_removed() {
        let mut store = MemoryStore::new();
        let mut stale = serde_json::to_value(sample()).unwrap();
        stale["version"] = json!(2);
        store.write("test-state", &stale.to_string()).unwrap();

        let loaded: Option<TestSnapshot> = load(&mut store, &schema());
        assert_eq!(loaded, None);
        assert_eq!(store.read("test-state"), None, "invalid entry must be removed");
    }

    #[test]
    fn malformed_json_is_rejected_and_removed() {
        let mut store = MemoryStore::new();
        store.write("test-state", "{not json").unwrap();
        let loaded: Option<TestSnapshot> = load(&mut store, &schema());
        assert_eq!(loaded, None);
        assert_eq!(store.read("test-state"), None);
    }

    #[test]
    fn unknown_game_state_is_rejected() {
        let mut store = MemoryStore::new();
        let mut bad = serde_json::to_value(sample()).unwrap();
        bad["gameState"] = json!("warp-speed");
        store.write("test-state", &bad.to_string()).unwrap();
        let loaded: Option<TestSnapshot> = load(&mut store, &schema());
        assert_eq!(loaded, None);
    }

    #[test]
    fn mis_shaped_entity_is_rejected() {
        let mut store = MemoryStore::new();
        let mut bad = serde_json::to_value(sample()).unwrap();
        bad["items"][0]["isChecked"] = json!("yes");
        store.write("test-state", &bad.to_string()).unwrap();
        let loaded: Option<TestSnapshot> = load(&mut store, &schema());
        assert_eq!(loaded, None);
    }

    #[test]
    fn disallowed_collection_length_is_rejected() {
        let constrained = SnapshotSchema {
            collection: Some(CollectionRule {
                field: "items",
                entity: item_shaped,
                lengths: Some(&[0, 25]),
            }),
            ..schema()
        };
        let mut store = MemoryStore::new();
        save(&mut store, &constrained, &sample()); // 1 item: not 0, not 25
        let loaded: Option<TestSnapshot> = load(&mut store, &constrained);
        assert_eq!(loaded, None);
        assert_eq!(store.read("test-state"), None);
    }

    #[test]
    fn extra_predicate_can_reject() {
        let picky = SnapshotSchema {
            extra: Some(|value| value.get("blessed").is_some()),
            ..schema()
        };
        let mut store = MemoryStore::new();
        save(&mut store, &picky, &sample());
        let loaded: Option<TestSnapshot> = load(&mut store, &picky);
        assert_eq!(loaded, None);
    }
}
