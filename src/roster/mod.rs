//! Roster ordering and suggestion helpers.
//!
//! Rosters keep a manually ordered sequence, reordered by explicit up/down
//! moves and persisted as-is. On load the views additionally apply display
//! sorts that are re-derived every fetch and never written back.

use crate::models::{EventMaster, ModPlus, ModPlusGroup, PlusRank, Suggestion, Summary};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionKind {
    Promotion,
    Warning,
}

/// Swap a row with its neighbor.
///
/// Out-of-range moves are no-ops; returns whether anything changed. The
/// reordered sequence is what gets persisted.
pub fn move_row<T>(rows: &mut [T], index: usize, direction: Direction) -> bool {
    let target = match direction {
        Direction::Up => index.checked_sub(1),
        Direction::Down => index.checked_add(1),
    };
    match target {
        Some(target) if index < rows.len() && target < rows.len() => {
            rows.swap(index, target);
            true
        }
        _ => false,
    }
}

fn rank_tier(rank: Option<PlusRank>) -> u8 {
    match rank {
        Some(PlusRank::Senior) => 1,
        Some(PlusRank::Elite) => 2,
        Some(PlusRank::Miembro) => 3,
        None => 4,
    }
}

/// Display order for a plus roster: rank tier, ties alphabetical by name.
///
/// Returns a new sequence; the persisted order is untouched.
pub fn sorted_by_rank(mods: &[ModPlus]) -> Vec<ModPlus> {
    let mut sorted = mods.to_vec();
    sorted.sort_by(|a, b| {
        rank_tier(a.rango_plus)
            .cmp(&rank_tier(b.rango_plus))
            .then_with(|| a.nombre.cmp(&b.nombre))
    });
    sorted
}

/// Display order for event masters: alphabetical by staff name.
pub fn sorted_by_staff(masters: &[EventMaster]) -> Vec<EventMaster> {
    let mut sorted = masters.to_vec();
    sorted.sort_by(|a, b| a.staff.cmp(&b.staff));
    sorted
}

/// Case-insensitive group filter on name or review period.
pub fn filter_groups<'a>(groups: &'a [ModPlusGroup], term: &str) -> Vec<&'a ModPlusGroup> {
    if term.is_empty() {
        return groups.iter().collect();
    }
    let term = term.to_lowercase();
    groups
        .iter()
        .filter(|g| {
            g.nombre.to_lowercase().contains(&term) || g.periodo.to_lowercase().contains(&term)
        })
        .collect()
}

/// Whether a member can be the subject of a suggestion. Members marked as
/// new are excluded until their first full review period.
pub fn is_suggestible(member: &ModPlus) -> bool {
    member.resumen != Some(Summary::Nuevo)
}

/// Record a promotion or warning suggestion for a member of the group.
///
/// Fails (returns false) for unknown members, non-suggestible members, and
/// empty reasons.
pub fn add_suggestion(
    group: &mut ModPlusGroup,
    kind: SuggestionKind,
    mod_id: &str,
    reason: &str,
) -> bool {
    let Some(target) = group.mods.iter().find(|m| m.id == mod_id) else {
        return false;
    };
    if !is_suggestible(target) || reason.is_empty() {
        return false;
    }

    let suggestion = Suggestion {
        mod_id: target.id.clone(),
        mod_name: target.nombre.clone(),
        reason: reason.to_string(),
    };
    match kind {
        SuggestionKind::Promotion => group.promotions.push(suggestion),
        SuggestionKind::Warning => group.warnings.push(suggestion),
    }
    true
}

/// Remove a suggestion by position in its list.
pub fn remove_suggestion(group: &mut ModPlusGroup, kind: SuggestionKind, index: usize) -> bool {
    let list = match kind {
        SuggestionKind::Promotion => &mut group.promotions,
        SuggestionKind::Warning => &mut group.warnings,
    };
    if index < list.len() {
        list.remove(index);
        true
    } else {
        false
    }
}
