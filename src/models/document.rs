//! Typed view of the persisted document.
//!
//! The store itself works on raw JSON and preserves top-level keys it does
//! not know about; this typed view is what the roster and map logic operate
//! on. Every field defaults so a partial document deserializes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{EventMasterGroup, ModAPruebaGroup, ModPlusGroup, Planet, Route};

/// The single JSON object holding all application state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffDocument {
    #[serde(default)]
    pub planets: BTreeMap<String, Planet>,
    #[serde(default)]
    pub routes: Vec<Route>,
    #[serde(default)]
    pub mods_a_prueba_groups: Vec<ModAPruebaGroup>,
    #[serde(default)]
    pub mods_plus_groups: Vec<ModPlusGroup>,
    #[serde(default)]
    pub event_master_groups: Vec<EventMasterGroup>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_partial_documents_deserialize() {
        let document: StaffDocument = serde_json::from_value(json!({
            "planets": {
                "Coruscant": { "x": 10, "y": 20, "faction": "REPUBLICANO" }
            }
        }))
        .unwrap();

        assert_eq!(document.planets.len(), 1);
        assert!(document.routes.is_empty());
        assert!(document.mods_plus_groups.is_empty());
        assert!(document.event_master_groups.is_empty());
    }

    #[test]
    fn test_top_level_key_names() {
        let value = serde_json::to_value(StaffDocument::default()).unwrap();
        let keys: Vec<&str> = value.as_object().unwrap().keys().map(|k| k.as_str()).collect();

        assert!(keys.contains(&"planets"));
        assert!(keys.contains(&"routes"));
        assert!(keys.contains(&"modsAPruebaGroups"));
        assert!(keys.contains(&"modsPlusGroups"));
        assert!(keys.contains(&"eventMasterGroups"));
    }
}
