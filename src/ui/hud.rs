use std::cell::RefCell;
use std::rc::Rc;

use gtk4::prelude::*;

use super::state::{AppState, GameMode};

pub(super) fn set_header_menu(state: &Rc<RefCell<AppState>>) {
    let st = state.borrow();
    if let (Some(header), Some(title)) = (&st.header, &st.title_menu) {
        header.set_title_widget(Some(title));
    }
    if let Some(back) = &st.back_button {
        back.set_visible(false);
    }
}

pub(super) fn set_header_game(state: &Rc<RefCell<AppState>>) {
    let st = state.borrow();
    if let (Some(header), Some(title_box)) = (&st.header, &st.title_game) {
        update_subtitle(&st);
        header.set_title_widget(Some(title_box));
    }
    if let Some(back) = &st.back_button {
        back.set_visible(true);
    }
}

pub(super) fn update_subtitle(st: &AppState) {
    if let Some(subtitle) = &st.title_game_subtitle {
        let mode_label = match st.mode {
            GameMode::Numbers => st.difficulty.name(),
            GameMode::Arithmetic => "Arithmetic",
        };
        subtitle.set_text(&format!(
            "{} | Matches: {}/{} | Tries: {}",
            mode_label,
            st.matched_pairs,
            st.target_pairs(),
            st.attempts
        ));
    }
}
