//! Deterministic mock user directory.
//!
//! Synthetic usernames, Steam-style identifiers, purchased packages and
//! sanction histories backing the user-search page. The whole directory is
//! generated once per process from a fixed seed; there is no real backing
//! service and nothing here is persisted.

use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

const FIRST_NAMES: &[&str] = &[
    "Asiman", "Kito", "Uripa", "Pedro", "Juan", "Maria", "Jose", "Ana", "Luis", "Laura", "Carlos",
    "Sofia", "Miguel", "Valeria", "Jorge", "Camila", "Fernando", "Isabella", "Ricardo", "Lucia",
    "Javier", "Elena", "Diego", "Paula", "Andres", "Martina", "Alejandro", "Daniela", "Manuel",
    "Gabriela", "Sergio", "Adriana", "David", "Catalina", "Oscar", "Valentina", "Victor", "Renata",
    "Raul", "Ximena", "Esteban", "Mariana", "Pablo", "Antonia", "Emilio", "Jimena", "Arturo",
    "Constanza", "Gustavo", "Florencia",
];

const PACKAGES: &[&str] = &[
    "VIP Ultimate",
    "VIP Jedi 1",
    "VIP Jedi 2",
    "VIP Jedi 3",
    "VIP Personajes 1",
    "VIP Personajes 2",
    "VIP Personajes 3",
    "Mejora de movimiento",
    "Inserción táctica",
    "Clon+",
];

const WARN_REASONS: &[&str] = &[
    "1.2 No hacer FailRP",
    "1.3 No romper CUT OOC/PTS ACTIVO",
    "1.5 No cometer MetaGaming [MG]",
    "1.6 No cometer PowerGaming [PG]",
    "1.7 No cometer DM",
    "1.8 No cometer Flood",
    "1.9 No cometer MUD",
    "1.10 No cometer AE",
    "1.14 No cometer Stick Abuse [SA]",
    "1.15 No está permitido el Prop Kill [PK]",
    "1.21 No cometer Command Abuse [CA]",
    "1.24 AFK Farm",
    "1.25 No cometer FearRP",
    "2.3 Uso de Personajes V.I.P. (RP)",
    "2.4 Seguimiento de Batallón en Misiones",
    "2.5 Órdenes Clon y Autoridad",
    "2.7 Prioridad Jedi: Paz y Acción",
    "2.8 Interferencia en Combate de Sable de Luz (Jedi)",
    "2.9 Combate Jedi vs. Sith",
    "2.10 Uso Prohibido de Comandos de Comunicación",
    "2.11 Saludo a Jedi",
    "2.12 Saludo a Rangos Superiores",
    "2.13 Posicionamiento de Jedi en Misión",
    "4.2 Manejo de Soldados y Estrategia",
    "4.3 Rol Secundario de la Armada",
    "5.3 Restricción de Habilidad Jedi",
    "5.4 Agente VIP y Especializaciones",
    "6.1 Uso de Gestos de Baile en Misión/Situación Seria",
    "7.1 Restricción de Armas en PVP",
    "8.7 Acceso de Civiles a Anaxes",
    "8.8 Manejo de Civiles en la Base de Anaxes",
    "8.16 Restricciones a Cazarrecompensas",
    "8.18 Prohibición de Cazarrecompensas en Entrenamientos",
];

const BAN_DURATIONS: &[&str] = &["3 días", "5 días", "1 semana", "1 mes", "Permanente"];

const MODERATORS: &[&str] = &["Asiman", "Kito", "Uripa", "Pedro"];

/// First Steam account number; user N gets `STEAM_0:0:{BASE + N}`.
const STEAM_ID_BASE: u64 = 708_098_479;

/// Default directory size.
pub const DIRECTORY_SIZE: usize = 50;

/// Default generation seed. Any fixed value works; the only requirement is
/// that two processes with the same seed agree on the directory.
const DEFAULT_SEED: u64 = STEAM_ID_BASE;

/// Kind of sanction on a user's record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SanctionKind {
    Warn,
    Ban,
}

/// A warn or ban entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sanction {
    pub id: String,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub kind: SanctionKind,
    pub reason: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    pub moderator: String,
}

/// A synthetic user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub steam_id: String,
    pub username: String,
    pub avatar_url: String,
    pub packages: Vec<String>,
    pub sanctions: Vec<Sanction>,
}

/// In-memory directory of generated users, searched by exact Steam ID.
#[derive(Debug, Clone)]
pub struct UserDirectory {
    users: Vec<UserRecord>,
}

impl UserDirectory {
    pub fn generate(count: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let users = (1..=count).map(|i| generate_user(i, &mut rng)).collect();
        Self { users }
    }

    pub fn all(&self) -> &[UserRecord] {
        &self.users
    }

    pub fn find(&self, steam_id: &str) -> Option<&UserRecord> {
        self.users.iter().find(|u| u.steam_id == steam_id)
    }
}

impl Default for UserDirectory {
    fn default() -> Self {
        Self::generate(DIRECTORY_SIZE, DEFAULT_SEED)
    }
}

fn generate_user(index: usize, rng: &mut StdRng) -> UserRecord {
    // Cycle the name table, suffixing a counter after one full pass
    let base = FIRST_NAMES[index % FIRST_NAMES.len()];
    let username = if index > FIRST_NAMES.len() {
        format!("{}{}", base, index / FIRST_NAMES.len())
    } else {
        base.to_string()
    };
    let steam_id = format!("STEAM_0:0:{}", STEAM_ID_BASE + index as u64);
    let avatar_url = format!("https://picsum.photos/seed/{}/128/128", username);

    let package_count = rng.gen_range(1..=4);
    let packages = (0..package_count)
        .map(|_| PACKAGES[rng.gen_range(0..PACKAGES.len())].to_string())
        .collect();

    let mut sanctions = Vec::new();
    let warn_count = rng.gen_range(0..6);
    for j in 0..warn_count {
        let year: i32 = rng.gen_range(2023..=2024);
        let month: u32 = rng.gen_range(1..=12);
        let day: u32 = rng.gen_range(1..=28);
        sanctions.push(Sanction {
            id: format!("s{}-w{}", index, j),
            date: NaiveDate::from_ymd_opt(year, month, day)
                .expect("day range keeps the date valid"),
            kind: SanctionKind::Warn,
            reason: WARN_REASONS[rng.gen_range(0..WARN_REASONS.len())].to_string(),
            duration: None,
            moderator: MODERATORS[rng.gen_range(0..MODERATORS.len())].to_string(),
        });
    }

    // Three or more warns earn an accumulation ban in the second half of 2024
    if warn_count >= 3 {
        let month: u32 = rng.gen_range(6..=11);
        let day: u32 = rng.gen_range(1..=28);
        sanctions.push(Sanction {
            id: format!("s{}-b1", index),
            date: NaiveDate::from_ymd_opt(2024, month, day)
                .expect("day range keeps the date valid"),
            kind: SanctionKind::Ban,
            reason: "Acumulación de sanciones".to_string(),
            duration: Some(BAN_DURATIONS[rng.gen_range(0..BAN_DURATIONS.len())].to_string()),
            moderator: MODERATORS[rng.gen_range(0..MODERATORS.len())].to_string(),
        });
    }

    sanctions.sort_by(|a, b| b.date.cmp(&a.date));

    UserRecord {
        steam_id,
        username,
        avatar_url,
        packages,
        sanctions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_is_deterministic() {
        let a = UserDirectory::generate(50, 7);
        let b = UserDirectory::generate(50, 7);
        assert_eq!(a.all(), b.all());
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = UserDirectory::generate(50, 1);
        let b = UserDirectory::generate(50, 2);
        assert_ne!(a.all(), b.all());
    }

    #[test]
    fn test_steam_ids_are_sequential() {
        let directory = UserDirectory::default();
        assert_eq!(directory.all().len(), DIRECTORY_SIZE);
        assert_eq!(directory.all()[0].steam_id, "STEAM_0:0:708098480");
        assert_eq!(directory.all()[0].username, "Kito");
    }

    #[test]
    fn test_find_is_exact_match() {
        let directory = UserDirectory::default();
        assert!(directory.find("STEAM_0:0:708098480").is_some());
        assert!(directory.find("STEAM_0:0:708098480 ").is_none());
        assert!(directory.find("STEAM_0:0:1").is_none());
    }

    #[test]
    fn test_usernames_cycle_with_suffix() {
        let directory = UserDirectory::generate(60, 3);
        // User 51 reuses name index 1 with a pass counter
        assert_eq!(directory.all()[50].username, "Kito1");
    }

    #[test]
    fn test_heavy_warn_records_carry_a_ban() {
        let directory = UserDirectory::default();
        for user in directory.all() {
            let warns = user
                .sanctions
                .iter()
                .filter(|s| s.kind == SanctionKind::Warn)
                .count();
            let bans: Vec<_> = user
                .sanctions
                .iter()
                .filter(|s| s.kind == SanctionKind::Ban)
                .collect();
            if warns >= 3 {
                assert_eq!(bans.len(), 1);
                assert_eq!(bans[0].reason, "Acumulación de sanciones");
                assert!(bans[0].duration.is_some());
            } else {
                assert!(bans.is_empty());
            }
        }
    }

    #[test]
    fn test_sanctions_sorted_newest_first() {
        let directory = UserDirectory::default();
        for user in directory.all() {
            for pair in user.sanctions.windows(2) {
                assert!(pair[0].date >= pair[1].date);
            }
        }
    }

    #[test]
    fn test_package_counts_in_range() {
        let directory = UserDirectory::default();
        for user in directory.all() {
            assert!((1..=4).contains(&user.packages.len()));
        }
    }
}
