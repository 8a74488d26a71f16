//! Developer guardrails and invariants
//!
//! Debug assertions for detecting impossible assignment states during
//! development. These checks are compiled out in release builds.

use std::collections::HashSet;

use crate::assigner::Forbidden;
use crate::models::{Assignment, Role, Roster};

/// Validate that an assignment is a bijection over the roster and the roles
pub fn assert_assignment_invariants(assignment: &Assignment, roster: &Roster) {
    let roles: HashSet<Role> = assignment.roles().into_iter().collect();
    debug_assert!(
        roles.len() == Role::ALL.len(),
        "Assignment repeats a role: {:?}",
        assignment.roles()
    );

    // Slot order must follow the roster
    debug_assert!(
        assignment.names().eq(roster.iter()),
        "Assignment names {:?} do not match roster {:?}",
        assignment.names().collect::<Vec<_>>(),
        roster.names()
    );
}

/// Validate that no slot received the role it was forbidden
pub(crate) fn assert_no_repeat(assignment: &Assignment, forbidden: &Forbidden) {
    for (entry, banned) in assignment.iter().zip(forbidden.iter()) {
        debug_assert!(
            *banned != Some(entry.role),
            "{} kept role {} from the previous round",
            entry.name,
            entry.role
        );
    }
}
