//! Roster form view model

use std::rc::Rc;

use slint::{ComponentHandle, ModelRc, SharedString, VecModel};

use crate::state::AppState;
use crate::MainWindow;

pub fn setup_roster_bindings(window: &MainWindow, state: Rc<AppState>) {
    // Pre-fill the name fields
    let names: Vec<SharedString> = state.names().into_iter().map(SharedString::from).collect();
    window.set_names(ModelRc::from(Rc::new(VecModel::from(names))));

    // Name edited
    let state_edit = state.clone();
    window.on_name_edited(move |index, value| {
        let slot = match usize::try_from(index) {
            Ok(slot) => slot,
            Err(_) => return,
        };

        if let Err(e) = state_edit.set_name(slot, value.as_str()) {
            tracing::warn!("Ignoring name edit: {}", e);
        }
    });

    // Notice dismissed
    let window_weak = window.as_weak();
    window.on_dismiss_notice(move || {
        if let Some(w) = window_weak.upgrade() {
            w.set_notice("".into());
        }
    });
}
