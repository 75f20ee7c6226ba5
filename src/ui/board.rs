use std::cell::RefCell;
use std::rc::Rc;

use gtk4 as gtk;
use gtk4::glib;
use gtk4::pango;
use gtk4::prelude::*;

use super::app::handle_card_click;
use super::deck::{CARD_MARGIN, GridLayout};
use super::state::{AppState, CardValue};

pub fn build_board_grid(state: &Rc<RefCell<AppState>>) -> gtk::Grid {
    let grid = gtk::Grid::new();
    grid.add_css_class("match-board");
    grid.set_row_spacing(CARD_MARGIN as u32);
    grid.set_column_spacing(CARD_MARGIN as u32);
    grid.set_halign(gtk::Align::Center);
    grid.set_valign(gtk::Align::Center);
    grid.set_hexpand(true);
    grid.set_vexpand(true);

    let card_count = state.borrow().cards.len();
    let layout = GridLayout::for_card_count(card_count);

    let mut buttons = Vec::with_capacity(card_count);
    for index in 0..card_count {
        let button = gtk::Button::builder()
            .css_classes(vec!["match-card"])
            .build();
        button.set_size_request(layout.cell_size, layout.cell_size);

        let drawing_area = gtk::DrawingArea::builder()
            .hexpand(true)
            .vexpand(true)
            .build();

        let state_draw = state.clone();
        drawing_area.set_draw_func(move |area, cr, width, height| {
            let st = state_draw.borrow();
            let Some(card) = st.cards.get(index) else {
                return;
            };
            if !card.revealed && !card.matched {
                return;
            }

            let min_dim = width.min(height) as f64;
            // Expression faces carry three tokens, so they render smaller.
            let base_factor = match card.value {
                CardValue::Number(_) => 0.42,
                CardValue::Expression { .. } => 0.26,
            };
            let font_size = (min_dim * base_factor * card.scale).max(1.0);

            let layout = pangocairo::functions::create_layout(cr);
            let mut font_desc = pango::FontDescription::new();
            font_desc.set_family("Cantarell, Noto Sans, sans");
            font_desc.set_weight(pango::Weight::Bold);
            font_desc.set_size((font_size * pango::SCALE as f64) as i32);
            layout.set_font_description(Some(&font_desc));
            layout.set_text(&card.value.label());

            let fg = area.style_context().color();
            cr.set_source_rgba(
                fg.red() as f64,
                fg.green() as f64,
                fg.blue() as f64,
                fg.alpha() as f64,
            );

            let (text_width, text_height) = layout.pixel_size();
            cr.move_to(
                (width as f64 - text_width as f64) / 2.0,
                (height as f64 - text_height as f64) / 2.0,
            );
            pangocairo::functions::show_layout(cr, &layout);
        });

        button.set_child(Some(&drawing_area));

        if let Some(card) = state.borrow().cards.get(index) {
            if card.matched {
                button.add_css_class("matched");
            } else if card.revealed {
                button.add_css_class("revealed");
            }
        }

        let state_click = state.clone();
        button.connect_clicked(move |_| {
            handle_card_click(&state_click, index);
        });

        grid.attach(
            &button,
            index as i32 % layout.columns,
            index as i32 / layout.columns,
            1,
            1,
        );
        buttons.push(button);
    }

    // Drives the scale easing: cards drift toward their target each frame
    // and only moving faces are redrawn.
    let state_tick = state.clone();
    grid.add_tick_callback(move |_, _| {
        let mut st = state_tick.borrow_mut();
        let mut moving = Vec::new();
        for (index, card) in st.cards.iter_mut().enumerate() {
            if card.step_animation() {
                moving.push(index);
            }
        }
        for index in moving {
            if let Some(button) = st.grid_buttons.get(index)
                && let Some(child) = button.child()
            {
                child.queue_draw();
            }
        }
        glib::ControlFlow::Continue
    });

    state.borrow_mut().grid_buttons = buttons;

    grid
}

pub(super) fn redraw_card(st: &AppState, index: usize) {
    if let Some(button) = st.grid_buttons.get(index)
        && let Some(child) = button.child()
    {
        child.queue_draw();
    }
}

/// Mirrors a card's reveal/match flags onto its button CSS classes.
pub(super) fn sync_card_classes(st: &AppState, index: usize) {
    let (Some(card), Some(button)) = (st.cards.get(index), st.grid_buttons.get(index)) else {
        return;
    };
    if card.matched {
        button.remove_css_class("revealed");
        button.add_css_class("matched");
    } else if card.revealed {
        button.add_css_class("revealed");
    } else {
        button.remove_css_class("revealed");
        button.remove_css_class("matched");
    }
    redraw_card(st, index);
}
