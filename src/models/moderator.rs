//! Moderator roster models (mods plus and mods a prueba).

use serde::{Deserialize, Serialize};

/// Server region a staff member belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Region {
    Esp,
    Arg,
}

/// Plus-rank tier of a moderator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlusRank {
    Elite,
    Senior,
    Miembro,
}

/// Inactivity classification for a review period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Inactivity {
    Justificada,
    #[serde(rename = "No justificada")]
    NoJustificada,
    #[serde(rename = "Reducción")]
    Reduccion,
}

/// Period summary verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Summary {
    #[serde(rename = "Va mal")]
    VaMal,
    #[serde(rename = "Va regular")]
    VaRegular,
    Nuevo,
    #[serde(rename = "Va bien")]
    VaBien,
    #[serde(rename = "Reducción")]
    Reduccion,
}

/// A plus-rank moderator row.
///
/// Counters are nullable and kept non-negative by the input widgets only;
/// the storage layer never validates them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModPlus {
    pub id: String,
    pub nombre: String,
    pub rango_plus: Option<PlusRank>,
    pub entrenos: Option<u32>,
    pub entrenos_propios: Option<u32>,
    pub trys: Option<u32>,
    #[serde(rename = "rolesPJ")]
    pub roles_pj: Option<u32>,
    pub rol_espontaneo: Option<u32>,
    pub misiones: Option<u32>,
    pub supervisiones: Option<u32>,
    pub inactividad: Option<Inactivity>,
    pub resumen: Option<Summary>,
    pub servidor: Region,
    pub es_sgt_plus: bool,
    pub abandona: bool,
}

/// A trial moderator row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModAPrueba {
    pub id: String,
    pub nombre: String,
    pub entrenos: Option<u32>,
    pub entrenos_propios: Option<u32>,
    pub trys: Option<u32>,
    #[serde(rename = "rolesPJ")]
    pub roles_pj: Option<u32>,
    pub rol_espontaneo: Option<u32>,
    pub misiones: Option<u32>,
    pub inactividad: Option<Inactivity>,
    pub resumen: Option<Summary>,
    pub servidor: Region,
    pub es_sgt_plus: bool,
}

/// A promotion or warning note attached to a member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    pub mod_id: String,
    pub mod_name: String,
    pub reason: String,
}

/// A review period for plus-rank moderators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModPlusGroup {
    pub id: String,
    pub nombre: String,
    pub revisado_por: String,
    pub mods_elites: String,
    pub senior: String,
    pub directores: String,
    pub periodo: String,
    pub hora: String,
    #[serde(default)]
    pub mods: Vec<ModPlus>,
    #[serde(default)]
    pub promotions: Vec<Suggestion>,
    #[serde(default)]
    pub warnings: Vec<Suggestion>,
}

/// A review period for trial moderators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModAPruebaGroup {
    pub id: String,
    pub nombre: String,
    pub revisado_por: String,
    pub mods_elites: String,
    pub senior: String,
    pub directores: String,
    pub periodo: String,
    pub hora: String,
    #[serde(default)]
    pub mods: Vec<ModAPrueba>,
    #[serde(default)]
    pub promotions: Vec<Suggestion>,
    #[serde(default)]
    pub warnings: Vec<Suggestion>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_mod_plus_wire_names() {
        let row = ModPlus {
            id: "m1".into(),
            nombre: "Ana".into(),
            rango_plus: Some(PlusRank::Senior),
            entrenos: Some(4),
            entrenos_propios: None,
            trys: None,
            roles_pj: Some(2),
            rol_espontaneo: None,
            misiones: Some(1),
            supervisiones: None,
            inactividad: Some(Inactivity::NoJustificada),
            resumen: Some(Summary::VaBien),
            servidor: Region::Esp,
            es_sgt_plus: false,
            abandona: false,
        };
        let value = serde_json::to_value(&row).unwrap();

        assert_eq!(value["rangoPlus"], "Senior");
        assert_eq!(value["rolesPJ"], 2);
        assert_eq!(value["rolEspontaneo"], json!(null));
        assert_eq!(value["inactividad"], "No justificada");
        assert_eq!(value["resumen"], "Va bien");
        assert_eq!(value["servidor"], "ESP");
        assert_eq!(value["esSgtPlus"], false);
    }

    #[test]
    fn test_group_member_lists_default_to_empty() {
        // Persisted groups may predate the suggestion lists
        let group: ModPlusGroup = serde_json::from_value(json!({
            "id": "group-plus-1",
            "nombre": "Revisión Abril",
            "revisadoPor": "Asiman",
            "modsElites": "",
            "senior": "",
            "directores": "",
            "periodo": "01/04 - 15/04",
            "hora": "22:00"
        }))
        .unwrap();

        assert!(group.mods.is_empty());
        assert!(group.promotions.is_empty());
        assert!(group.warnings.is_empty());
    }

    #[test]
    fn test_summary_accent_values() {
        assert_eq!(
            serde_json::to_value(Summary::Reduccion).unwrap(),
            json!("Reducción")
        );
        assert_eq!(
            serde_json::from_value::<Inactivity>(json!("Reducción")).unwrap(),
            Inactivity::Reduccion
        );
    }
}
