//! Roll session: the name slots and the last assignment
//!
//! The presentation layer owns one of these and passes it around
//! explicitly. Each successful roll swaps the whole assignment in; a failed
//! roll leaves everything untouched.

use rand::Rng;

use crate::assigner::{assign_with, RetryPolicy};
use crate::error::{Error, Result};
use crate::models::{Assignment, Roster, ROSTER_SIZE};

#[derive(Debug, Clone)]
pub struct RollSession {
    names: [String; ROSTER_SIZE],
    current: Option<Assignment>,
    policy: RetryPolicy,
}

impl RollSession {
    pub fn new(names: [String; ROSTER_SIZE]) -> Self {
        Self {
            names,
            current: None,
            policy: RetryPolicy::Unbounded,
        }
    }

    pub fn with_policy(mut self, policy: RetryPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn names(&self) -> &[String; ROSTER_SIZE] {
        &self.names
    }

    /// The last successful assignment, if any
    pub fn current(&self) -> Option<&Assignment> {
        self.current.as_ref()
    }

    /// Update one name slot (zero-based)
    pub fn set_name(&mut self, slot: usize, value: impl Into<String>) -> Result<()> {
        let name = self
            .names
            .get_mut(slot)
            .ok_or(Error::SlotOutOfRange { slot })?;
        *name = value.into();
        Ok(())
    }

    /// Roll new roles for the current names
    pub fn roll(&mut self) -> Result<&Assignment> {
        self.roll_with(&mut rand::thread_rng())
    }

    pub fn roll_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<&Assignment> {
        let roster = Roster::new(self.names.clone()).inspect_err(|e| {
            tracing::info!(error = %e, "Roll rejected");
        })?;

        let next = assign_with(rng, &roster, self.current.as_ref(), self.policy);
        Ok(&*self.current.insert(next))
    }

    /// Forget the current assignment
    pub fn clear(&mut self) {
        self.current = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn skt_session() -> RollSession {
        RollSession::new(["Shauno", "Hinloke", "Martooga", "Zeeboh", "Trok"].map(String::from))
    }

    #[test]
    fn test_first_roll_stores_assignment() {
        let mut session = skt_session();
        assert!(session.current().is_none());

        let mut rng = StdRng::seed_from_u64(11);
        let rolled = session.roll_with(&mut rng).unwrap().clone();
        assert_eq!(session.current(), Some(&rolled));
    }

    #[test]
    fn test_consecutive_rolls_never_repeat() {
        let mut session = skt_session();
        let mut rng = StdRng::seed_from_u64(12);
        let mut previous = session.roll_with(&mut rng).unwrap().clone();
        for _ in 0..100 {
            let next = session.roll_with(&mut rng).unwrap().clone();
            for entry in next.iter() {
                assert_ne!(previous.role_of(&entry.name), Some(entry.role));
            }
            previous = next;
        }
    }

    #[test]
    fn test_blank_name_leaves_state_unchanged() {
        let mut session = skt_session();
        let mut rng = StdRng::seed_from_u64(13);
        let before = session.roll_with(&mut rng).unwrap().clone();

        session.set_name(4, "").unwrap();
        let err = session.roll_with(&mut rng).unwrap_err();
        assert!(matches!(err, Error::EmptyName { slot: 4 }));
        assert_eq!(session.current(), Some(&before));
    }

    #[test]
    fn test_blank_name_on_first_roll() {
        let mut session =
            RollSession::new(["A", "B", "C", "D", ""].map(String::from));
        assert!(session.roll().is_err());
        assert!(session.current().is_none());
    }

    #[test]
    fn test_identical_names_keep_rolling() {
        let mut session = RollSession::new(["A"; ROSTER_SIZE].map(String::from));
        let mut rng = StdRng::seed_from_u64(15);
        for _ in 0..20 {
            let rolled = session.roll_with(&mut rng).unwrap();
            assert!(rolled.names().all(|n| n == "A"));
        }
    }

    #[test]
    fn test_set_name_out_of_range() {
        let mut session = skt_session();
        let err = session.set_name(5, "Faker").unwrap_err();
        assert!(matches!(err, Error::SlotOutOfRange { slot: 5 }));
        assert_eq!(session.names()[4], "Trok");
    }

    #[test]
    fn test_renamed_slot_is_unconstrained() {
        let mut session = skt_session();
        let mut rng = StdRng::seed_from_u64(14);
        let previous = session.roll_with(&mut rng).unwrap().clone();

        session.set_name(0, "Faker").unwrap();
        let next = session.roll_with(&mut rng).unwrap().clone();
        assert_eq!(next.entries()[0].name, "Faker");
        for entry in next.iter().skip(1) {
            assert_ne!(previous.role_of(&entry.name), Some(entry.role));
        }
    }

    #[test]
    fn test_clear_drops_assignment() {
        let mut session = skt_session();
        session.roll().unwrap();
        session.clear();
        assert!(session.current().is_none());
    }
}
