//! Assignment models

use super::role::{Role, RoleStyle};
use super::roster::{Roster, ROSTER_SIZE};

/// One participant's role for a round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignedRole {
    pub name: String,
    pub role: Role,
    pub role_icon: &'static str,
}

impl AssignedRole {
    pub fn new(name: String, role: Role) -> Self {
        Self {
            name,
            role,
            role_icon: role.icon(),
        }
    }

    pub fn style(&self) -> RoleStyle {
        self.role.style()
    }
}

/// A full round: every roster slot paired with a distinct role
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    entries: [AssignedRole; ROSTER_SIZE],
}

impl Assignment {
    /// Pair roles with the roster positionally
    pub fn pair(roster: &Roster, roles: [Role; ROSTER_SIZE]) -> Self {
        let names = roster.names();
        Self {
            entries: std::array::from_fn(|i| AssignedRole::new(names[i].clone(), roles[i])),
        }
    }

    pub fn entries(&self) -> &[AssignedRole; ROSTER_SIZE] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &AssignedRole> {
        self.entries.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    pub fn roles(&self) -> [Role; ROSTER_SIZE] {
        std::array::from_fn(|i| self.entries[i].role)
    }

    /// Role held by `name`. With duplicate names the last slot wins.
    pub fn role_of(&self, name: &str) -> Option<Role> {
        self.entries
            .iter()
            .rev()
            .find(|e| e.name == name)
            .map(|e| e.role)
    }
}
