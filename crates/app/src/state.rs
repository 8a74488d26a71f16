//! Application state management

use std::cell::RefCell;

use roleroll_core::{Assignment, Config, Result, Role, RollSession};
use slint::Image;

/// Role icons decoded once at startup, in `Role::ALL` order
pub struct RoleIcons {
    images: [Image; 5],
}

impl RoleIcons {
    pub fn load(config: &Config) -> Self {
        let images = Role::ALL.map(|role| match config.icon_path(role.style().icon) {
            Some(path) => Image::load_from_path(&path).unwrap_or_else(|e| {
                tracing::warn!(path = %path.display(), "Failed to load role icon: {:?}", e);
                Image::default()
            }),
            None => Image::default(),
        });

        Self { images }
    }

    pub fn get(&self, role: Role) -> Image {
        self.images[icon_slot(role)].clone()
    }
}

fn icon_slot(role: Role) -> usize {
    match role {
        Role::Jungle => 0,
        Role::Mid => 1,
        Role::Top => 2,
        Role::Support => 3,
        Role::Adc => 4,
    }
}

/// Main application state
///
/// Owned by the UI thread; callbacks never run concurrently.
pub struct AppState {
    pub session: RefCell<RollSession>,
    pub icons: RoleIcons,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let icons = RoleIcons::load(&config);
        let session = RollSession::new(config.roster.clone()).with_policy(config.retry_policy());

        Self {
            session: RefCell::new(session),
            icons,
        }
    }

    pub fn names(&self) -> Vec<String> {
        self.session.borrow().names().to_vec()
    }

    pub fn set_name(&self, slot: usize, value: &str) -> Result<()> {
        self.session.borrow_mut().set_name(slot, value)
    }

    /// Roll and return a copy of the new assignment
    pub fn roll(&self) -> Result<Assignment> {
        let mut session = self.session.borrow_mut();
        let assignment = session.roll()?.clone();
        tracing::info!(
            roles = ?assignment.iter().map(|e| (e.name.as_str(), e.role.label())).collect::<Vec<_>>(),
            "Roles assigned"
        );
        Ok(assignment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_slot_matches_canonical_order() {
        for (i, role) in Role::ALL.into_iter().enumerate() {
            assert_eq!(icon_slot(role), i);
        }
    }

    #[test]
    fn test_missing_icons_fall_back_to_empty_image() {
        let icons = RoleIcons::load(&Config::default());
        for role in Role::ALL {
            assert_eq!(icons.get(role).size(), Image::default().size());
        }
    }
}
