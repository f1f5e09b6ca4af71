//! Event-master roster models.

use serde::{Deserialize, Serialize};

use super::Region;

/// Inactivity classification for event masters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmInactivity {
    Justificada,
    Injustificada,
}

/// Monthly requirement verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Requirements {
    Completo,
    #[serde(rename = "Incompleto por poco")]
    IncompletoPorPoco,
    Incompleto,
}

/// An event-master row (official or trial).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventMaster {
    pub id: String,
    pub staff: String,
    pub region: Region,
    pub miniroles: Option<u32>,
    #[serde(rename = "eventosSV1")]
    pub eventos_sv1: Option<u32>,
    #[serde(rename = "misionesSV2")]
    pub misiones_sv2: Option<u32>,
    #[serde(rename = "ayudasSV1_SV2")]
    pub ayudas_sv1_sv2: Option<u32>,
    pub inactividad: Option<EmInactivity>,
    pub adv_sanciones: Option<u32>,
    pub tipo_adv_sancion: Option<String>,
    pub requisitos: Option<Requirements>,
    pub notas: Option<String>,
    pub ultimatum: Option<String>,
}

/// A monthly event-master review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventMasterGroup {
    pub id: String,
    pub mes: String,
    pub fecha_realizacion: String,
    pub elites_a_cargo: String,
    #[serde(rename = "totalEMs")]
    pub total_ems: u32,
    #[serde(default)]
    pub oficiales: Vec<EventMaster>,
    #[serde(default)]
    pub a_prueba: Vec<EventMaster>,
}
