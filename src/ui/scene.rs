use std::cell::RefCell;
use std::rc::Rc;

use gtk4 as gtk;
use gtk4::prelude::*;

use super::board::build_board_grid;
use super::hud::{set_header_game, set_header_menu};
use super::rules;
use super::state::{AppState, Difficulty};

pub(super) fn rebuild_board(state: &Rc<RefCell<AppState>>) {
    let board_container = state.borrow().board_container.clone();
    let Some(board_container) = board_container else {
        return;
    };

    while let Some(child) = board_container.first_child() {
        board_container.remove(&child);
    }
    let grid = build_board_grid(state);
    board_container.append(&grid);
}

pub(super) fn refresh_menu_scores(st: &AppState) {
    let difficulties = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];
    for (label, difficulty) in st.menu_score_labels.iter().zip(difficulties) {
        label.set_text(&format!(
            "{}: {}",
            difficulty.name(),
            st.scores.best(difficulty)
        ));
    }
}

pub(super) fn show_menu(state: &Rc<RefCell<AppState>>) {
    {
        let st = state.borrow();
        refresh_menu_scores(&st);
        if let Some(overlay) = &st.victory_overlay {
            overlay.set_visible(false);
        }
    }
    set_header_menu(state);
    let st = state.borrow();
    if let Some(stack) = &st.view_stack {
        stack.set_transition_type(gtk::StackTransitionType::SlideRight);
        stack.set_visible_child_name("menu");
    }
}

pub(super) fn show_game(state: &Rc<RefCell<AppState>>) {
    {
        let st = state.borrow();
        if let Some(overlay) = &st.victory_overlay {
            overlay.set_visible(false);
        }
    }
    set_header_game(state);
    let st = state.borrow();
    if let Some(stack) = &st.view_stack {
        stack.set_transition_type(gtk::StackTransitionType::SlideLeft);
        stack.set_visible_child_name("game");
    }
}

/// Game-over overlay inside the playing view: banner, star rating and the
/// way back to the menu.
pub(super) fn show_victory(state: &Rc<RefCell<AppState>>) {
    let st = state.borrow();
    if let Some(stars_label) = &st.victory_stars_label {
        let stars = rules::star_count(st.difficulty, st.attempts) as usize;
        stars_label.set_text(&"★ ".repeat(stars).trim_end().to_string());
    }
    if let Some(overlay) = &st.victory_overlay {
        overlay.set_visible(true);
    }
}
