//! View model bindings for Slint UI

mod results;
mod roster;

use crate::state::AppState;
use crate::MainWindow;
use std::rc::Rc;

pub fn setup_bindings(window: &MainWindow, state: AppState) {
    let state = Rc::new(state);

    roster::setup_roster_bindings(window, state.clone());
    results::setup_result_bindings(window, state.clone());
}
