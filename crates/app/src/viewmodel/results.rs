//! Results view model

use std::rc::Rc;

use roleroll_core::{AssignedRole, Assignment};
use slint::{Color, ComponentHandle, ModelRc, VecModel};

use crate::state::{AppState, RoleIcons};
use crate::MainWindow;
use crate::RoleCard;

pub fn setup_result_bindings(window: &MainWindow, state: Rc<AppState>) {
    let state_assign = state.clone();
    let window_weak = window.as_weak();
    window.on_assign_roles(move || {
        let w = match window_weak.upgrade() {
            Some(w) => w,
            None => return,
        };

        match state_assign.roll() {
            Ok(assignment) => {
                let cards = role_cards(&assignment, &state_assign.icons);
                w.set_results(ModelRc::from(Rc::new(VecModel::from(cards))));
            }
            // Results stay as they were
            Err(e) => w.set_notice(e.to_string().into()),
        }
    });
}

fn role_cards(assignment: &Assignment, icons: &RoleIcons) -> Vec<RoleCard> {
    assignment
        .iter()
        .map(|entry| RoleCard {
            name: entry.name.clone().into(),
            role: entry.role.label().into(),
            icon: icons.get(entry.role),
            tint: card_tint(entry),
        })
        .collect()
}

fn card_tint(entry: &AssignedRole) -> Color {
    let (r, g, b) = entry.style().color.rgb;
    Color::from_rgb_u8(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use roleroll_core::{Config, Role, Roster};

    fn skt_assignment() -> Assignment {
        let roster =
            Roster::new(["Shauno", "Hinloke", "Martooga", "Zeeboh", "Trok"].map(String::from)).unwrap();
        Assignment::pair(&roster, Role::ALL)
    }

    #[test]
    fn test_cards_follow_roster_order() {
        let icons = RoleIcons::load(&Config::default());
        let cards = role_cards(&skt_assignment(), &icons);

        assert_eq!(cards.len(), 5);
        assert_eq!(cards[0].name, "Shauno");
        assert_eq!(cards[0].role, "Jungle");
        assert_eq!(cards[4].role, "ADC");
    }

    #[test]
    fn test_tint_matches_role_color() {
        let assignment = skt_assignment();
        let jungle = &assignment.entries()[0];
        assert_eq!(card_tint(jungle), Color::from_rgb_u8(0x22, 0xc5, 0x5e));
    }

    #[test]
    fn test_rerender_is_stable() {
        let icons = RoleIcons::load(&Config::default());
        let assignment = skt_assignment();
        let first = role_cards(&assignment, &icons);
        let second = role_cards(&assignment, &icons);
        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.tint, b.tint);
            assert_eq!(a.role, b.role);
        }
    }
}
