//! Galaxy conquest map models matching the frontend Planet/Route interfaces.

use serde::{Deserialize, Serialize};

/// Faction controlling a planet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Faction {
    Republicano,
    Separatista,
    Aliado,
    Neutral,
    Contrabandistas,
    Mandalore,
    Disputa,
}

impl Faction {
    /// Legend label for the map.
    pub fn label(&self) -> &'static str {
        match self {
            Faction::Republicano => "Planeta Republicano",
            Faction::Separatista => "Planeta Separatista",
            Faction::Aliado => "Planeta Aliado",
            Faction::Neutral => "Planeta Neutral",
            Faction::Contrabandistas => "Contrabandistas",
            Faction::Mandalore => "Mandalore",
            Faction::Disputa => "Planeta en Disputa",
        }
    }
}

/// A node on the galaxy map.
///
/// Planets are keyed by name in the document; the struct itself carries no
/// identifier, and a planet exists simply by being referenced as a key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Planet {
    pub x: f64,
    pub y: f64,
    pub faction: Faction,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub native_population: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lore: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_mission_reports: Option<String>,
}

/// Trade route palette. Each color names a hyperlane and implies a dash
/// style; only the minor hyperlane renders dashed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RouteColor {
    #[serde(rename = "#9370DB")]
    Hydian,
    #[serde(rename = "#00FFFF")]
    CorellianTradeSpine,
    #[serde(rename = "#FF69B4")]
    Rimma,
    #[serde(rename = "#FFFF00")]
    CorellianRun,
    #[serde(rename = "#FF4500")]
    Perlemian,
    #[serde(rename = "white")]
    MinorHyperlane,
}

impl RouteColor {
    /// Legend label for the route type.
    pub fn label(&self) -> &'static str {
        match self {
            RouteColor::Hydian => "Ruta Hydiana",
            RouteColor::CorellianTradeSpine => "Espinal Comercial Coreliana",
            RouteColor::Rimma => "Ruta Comercial de Rimma",
            RouteColor::CorellianRun => "Corredor Coreliano",
            RouteColor::Perlemian => "Ruta Comercial Perlemiana",
            RouteColor::MinorHyperlane => "Ruta Hiperespacial Menor",
        }
    }

    pub fn dashed(&self) -> bool {
        matches!(self, RouteColor::MinorHyperlane)
    }
}

/// An edge between two planets.
///
/// Endpoints are planet names and may dangle; nothing validates them, and
/// the renderer silently skips routes whose endpoints are missing. Direction
/// has no semantics beyond display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub from: String,
    pub to: String,
    pub color: RouteColor,
    pub dashed: bool,
}
