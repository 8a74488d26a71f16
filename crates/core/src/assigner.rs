//! Random role assignment with a no-repeat constraint
//!
//! Roles are shuffled and paired with the roster positionally. When a
//! previous assignment is given, a candidate in which anyone keeps their old
//! role is thrown away and the whole permutation is drawn again. Redrawing
//! the full permutation (rather than patching colliding slots) keeps every
//! valid outcome equally likely.
//!
//! Against a full previous round only 44 of the 120 permutations are valid,
//! so about 2.7 draws are needed on average.

use std::num::NonZeroU32;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::invariants::{assert_assignment_invariants, assert_no_repeat};
use crate::models::{Assignment, Role, Roster, ROSTER_SIZE};

/// Per-slot role that may not be drawn
pub(crate) type Forbidden = [Option<Role>; ROSTER_SIZE];

/// How many draws the rejection loop may take
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RetryPolicy {
    /// Draw until a candidate passes
    #[default]
    Unbounded,
    /// Stop after this many draws and pick uniformly among the valid
    /// permutations instead
    Capped(NonZeroU32),
}

impl RetryPolicy {
    pub fn from_max_attempts(max_attempts: Option<NonZeroU32>) -> Self {
        match max_attempts {
            Some(n) => RetryPolicy::Capped(n),
            None => RetryPolicy::Unbounded,
        }
    }

    fn allows(&self, attempts: u32) -> bool {
        match self {
            RetryPolicy::Unbounded => true,
            RetryPolicy::Capped(max) => attempts < max.get(),
        }
    }
}

/// Assign roles using the thread-local RNG and unbounded retry
pub fn assign(roster: &Roster, previous: Option<&Assignment>) -> Assignment {
    assign_with(&mut rand::thread_rng(), roster, previous, RetryPolicy::Unbounded)
}

/// Assign roles with an explicit RNG and retry policy
pub fn assign_with<R: Rng + ?Sized>(
    rng: &mut R,
    roster: &Roster,
    previous: Option<&Assignment>,
    policy: RetryPolicy,
) -> Assignment {
    let forbidden = forbidden_roles(roster, previous);
    let mut attempts = 0u32;

    let assignment = loop {
        let mut roles = Role::ALL;
        roles.shuffle(rng);
        attempts += 1;

        if permits(&forbidden, &roles) {
            tracing::debug!(attempts, "Role assignment accepted");
            break Assignment::pair(roster, roles);
        }

        if !policy.allows(attempts) {
            tracing::warn!(
                attempts,
                "Retry cap reached, choosing among valid permutations"
            );
            match choose_valid(rng, &forbidden) {
                Some(roles) => break Assignment::pair(roster, roles),
                None => {
                    tracing::error!("No permutation satisfies the previous round");
                    break Assignment::pair(roster, roles);
                }
            }
        }
    };

    assert_assignment_invariants(&assignment, roster);
    assert_no_repeat(&assignment, &forbidden);

    assignment
}

/// Role each slot must not receive this round
///
/// A slot whose name held a role last round may not get it again. When
/// every slot resolves to the same role (all five names identical) no
/// permutation can satisfy that, so the constraint is dropped.
fn forbidden_roles(roster: &Roster, previous: Option<&Assignment>) -> Forbidden {
    let previous = match previous {
        Some(prev) => prev,
        None => return [None; ROSTER_SIZE],
    };

    let names = roster.names();
    let forbidden: Forbidden = std::array::from_fn(|i| previous.role_of(&names[i]));

    if let Some(role) = forbidden[0] {
        if forbidden.iter().all(|f| *f == Some(role)) {
            tracing::warn!(
                name = %names[0],
                role = %role,
                "Every slot held the same role last round, ignoring it"
            );
            return [None; ROSTER_SIZE];
        }
    }

    forbidden
}

fn permits(forbidden: &Forbidden, roles: &[Role; ROSTER_SIZE]) -> bool {
    forbidden
        .iter()
        .zip(roles.iter())
        .all(|(f, role)| *f != Some(*role))
}

/// Uniform pick among every permutation that respects `forbidden`
///
/// Each slot forbids at most one role, so a valid permutation exists
/// unless one role is forbidden in every slot, which `forbidden_roles`
/// rules out.
fn choose_valid<R: Rng + ?Sized>(rng: &mut R, forbidden: &Forbidden) -> Option<[Role; ROSTER_SIZE]> {
    let valid: Vec<[Role; ROSTER_SIZE]> = permutations(Role::ALL)
        .into_iter()
        .filter(|roles| permits(forbidden, roles))
        .collect();

    valid.choose(rng).copied()
}

/// Every ordering of `items`
fn permutations(mut items: [Role; ROSTER_SIZE]) -> Vec<[Role; ROSTER_SIZE]> {
    fn permute(
        items: &mut [Role; ROSTER_SIZE],
        k: usize,
        out: &mut Vec<[Role; ROSTER_SIZE]>,
    ) {
        if k == items.len() {
            out.push(*items);
            return;
        }
        for i in k..items.len() {
            items.swap(k, i);
            permute(items, k + 1, out);
            items.swap(k, i);
        }
    }

    let mut out = Vec::new();
    permute(&mut items, 0, &mut out);
    out
}
