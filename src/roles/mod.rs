//! Role-gated action visibility.
//!
//! The dashboard exposes mutation controls based on the viewer's rank. This
//! is a display-time gate only: the store enforces nothing, and any client
//! that can reach the write endpoint can perform any mutation. The gate is
//! expressed as a pure function over an explicit role value rather than an
//! ambient global, so it can be tested in isolation.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Staff rank of the current viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum UserRole {
    Director,
    Ejecutivo,
    Senior,
    Elite,
    Miembro,
}

/// A mutation the dashboard can expose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum StaffAction {
    CreateGroup,
    EditGroup,
    DeleteGroup,
    ManageSuggestions,
}

/// The full set of actions a rank may see.
pub fn permitted_actions(role: UserRole) -> BTreeSet<StaffAction> {
    use StaffAction::*;

    let mut actions = BTreeSet::new();
    match role {
        UserRole::Director | UserRole::Ejecutivo => {
            actions.extend([CreateGroup, EditGroup, DeleteGroup, ManageSuggestions]);
        }
        UserRole::Senior => {
            actions.insert(ManageSuggestions);
        }
        UserRole::Elite => {
            actions.insert(EditGroup);
        }
        UserRole::Miembro => {}
    }
    actions
}

pub fn is_permitted(role: UserRole, action: StaffAction) -> bool {
    permitted_actions(role).contains(&action)
}
