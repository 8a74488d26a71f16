//! Validated five-name roster

use crate::error::{Error, Result};

/// Number of roster slots; equals the number of roles
pub const ROSTER_SIZE: usize = 5;

/// Names that passed validation, in slot order
///
/// Names are kept exactly as entered. Two slots may hold the same name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    names: [String; ROSTER_SIZE],
}

impl Roster {
    /// Validate a roster; fails on the first slot that is blank after trimming
    pub fn new(names: [String; ROSTER_SIZE]) -> Result<Self> {
        if let Some(slot) = first_blank(&names) {
            return Err(Error::EmptyName { slot });
        }
        Ok(Self { names })
    }

    pub fn names(&self) -> &[String; ROSTER_SIZE] {
        &self.names
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl TryFrom<Vec<String>> for Roster {
    type Error = Error;

    fn try_from(names: Vec<String>) -> Result<Self> {
        let found = names.len();
        let names: [String; ROSTER_SIZE] = names.try_into().map_err(|_| Error::RosterSize {
            expected: ROSTER_SIZE,
            found,
        })?;
        Self::new(names)
    }
}

/// Index of the first slot that is empty after trimming
fn first_blank(names: &[String]) -> Option<usize> {
    names.iter().position(|n| n.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: [&str; ROSTER_SIZE]) -> [String; ROSTER_SIZE] {
        list.map(String::from)
    }

    #[test]
    fn test_valid_roster() {
        let roster = Roster::new(names(["Shauno", "Hinloke", "Martooga", "Zeeboh", "Trok"])).unwrap();
        assert_eq!(roster.iter().collect::<Vec<_>>()[4], "Trok");
    }

    #[test]
    fn test_empty_name_rejected() {
        let err = Roster::new(names(["A", "B", "C", "D", ""])).unwrap_err();
        assert!(matches!(err, Error::EmptyName { slot: 4 }));
        assert_eq!(err.to_string(), "Please enter all 5 names.");
    }

    #[test]
    fn test_whitespace_name_rejected() {
        let err = Roster::new(names(["A", "  \t", "C", "D", "E"])).unwrap_err();
        assert!(matches!(err, Error::EmptyName { slot: 1 }));
    }

    #[test]
    fn test_names_kept_verbatim() {
        let roster = Roster::new(names([" A ", "A", "A", "b", "B"])).unwrap();
        assert_eq!(roster.names()[0], " A ");
        assert_eq!(roster.names()[1], "A");
    }

    #[test]
    fn test_wrong_size_rejected() {
        let err = Roster::try_from(vec!["A".to_string(), "B".to_string()]).unwrap_err();
        assert!(matches!(
            err,
            Error::RosterSize {
                expected: 5,
                found: 2
            }
        ));
    }

    #[test]
    fn test_try_from_vec() {
        let list: Vec<String> = ["A", "B", "C", "D", "E"].iter().map(|s| s.to_string()).collect();
        let roster = Roster::try_from(list).unwrap();
        assert_eq!(roster.names()[2], "C");
    }
}
