use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Once;

use gettextrs::gettext;
use gtk4 as gtk;
use gtk4::glib;
use gtk4::prelude::*;
use libadwaita as adw;
use adw::prelude::*;
use gio::SimpleAction;

use super::audio::SoundBank;
use super::board::sync_card_classes;
use super::deck::{CANVAS_HEIGHT, CANVAS_WIDTH};
use super::dialogs::{show_about_dialog, show_instructions_dialog};
use super::hud::{set_header_menu, update_subtitle};
use super::rules::{self, SelectionOutcome};
use super::scene::{rebuild_board, refresh_menu_scores, show_game, show_menu, show_victory};
use super::scores;
use super::state::{AppState, Difficulty, GameMode};

const APP_ID: &str = "io.github.numbermatch.NumberMatch";

/// How long both cards of a mismatch stay visible before flipping back.
const MISMATCH_PAUSE_MS: u64 = 1000;

pub fn run() {
    glib::set_prgname(Some(APP_ID));
    let app = adw::Application::builder().application_id(APP_ID).build();
    app.connect_activate(build_ui);
    app.run();
}

fn build_ui(app: &adw::Application) {
    load_css();

    let state = Rc::new(RefCell::new(AppState::new()));

    let instructions_action = SimpleAction::new("instructions", None);
    instructions_action.connect_activate({
        let app = app.clone();
        move |_, _| {
            show_instructions_dialog(&app);
        }
    });
    app.add_action(&instructions_action);

    let about_action = SimpleAction::new("about", None);
    about_action.connect_activate({
        let app = app.clone();
        move |_, _| {
            show_about_dialog(&app);
        }
    });
    app.add_action(&about_action);

    // Quit behaves the same in every state: nothing extra is persisted.
    let quit_action = SimpleAction::new("quit", None);
    quit_action.connect_activate({
        let app = app.clone();
        move |_, _| app.quit()
    });
    app.add_action(&quit_action);

    let title_menu = gtk::Label::new(None);
    title_menu.set_markup("<b>Number Match</b>");
    title_menu.set_halign(gtk::Align::Center);

    let title_game_box = gtk::Box::new(gtk::Orientation::Vertical, 0);
    title_game_box.set_valign(gtk::Align::Center);
    title_game_box.set_halign(gtk::Align::Center);
    title_game_box.set_hexpand(true);

    let title_game_main = gtk::Label::builder()
        .label("Number Match")
        .halign(gtk::Align::Center)
        .build();

    let title_game_subtitle = gtk::Label::builder()
        .label("")
        .halign(gtk::Align::Center)
        .css_classes(vec!["game-subtitle", "caption"])
        .build();

    title_game_box.append(&title_game_main);
    title_game_box.append(&title_game_subtitle);

    let header = adw::HeaderBar::builder()
        .title_widget(&title_menu)
        .build();
    header.add_css_class("app-header");
    header.add_css_class("flat");

    let back_button = gtk::Button::builder()
        .icon_name("go-previous-symbolic")
        .build();
    back_button.set_tooltip_text(Some(&gettext("Back to menu")));
    back_button.connect_clicked({
        let state = state.clone();
        move |_| {
            show_menu(&state);
        }
    });
    header.pack_start(&back_button);

    let menu_model = gio::Menu::new();
    menu_model.append(Some(&gettext("Instructions")), Some("app.instructions"));
    menu_model.append(Some(&gettext("About Number Match")), Some("app.about"));
    menu_model.append(Some(&gettext("Quit")), Some("app.quit"));
    let menu_button = gtk::MenuButton::builder()
        .icon_name("open-menu-symbolic")
        .menu_model(&menu_model)
        .build();
    header.pack_end(&menu_button);

    let view_stack = gtk::Stack::new();
    view_stack.set_hexpand(true);
    view_stack.set_vexpand(true);
    view_stack.set_transition_type(gtk::StackTransitionType::SlideLeft);
    view_stack.set_transition_duration(300);

    let game_view = build_game_view(&state);
    view_stack.add_named(&game_view, Some("game"));

    let menu_view = build_menu_view(&state);
    view_stack.add_named(&menu_view, Some("menu"));

    view_stack.set_visible_child_name("menu");

    let toolbar = adw::ToolbarView::new();
    toolbar.set_hexpand(true);
    toolbar.set_vexpand(true);
    toolbar.add_top_bar(&header);
    toolbar.set_content(Some(&view_stack));

    let win = adw::ApplicationWindow::builder()
        .application(app)
        .title("Number Match")
        .default_width(CANVAS_WIDTH)
        .default_height(CANVAS_HEIGHT)
        .content(&toolbar)
        .build();
    win.set_resizable(false);
    win.add_css_class("app-window");

    {
        let mut st = state.borrow_mut();
        st.view_stack = Some(view_stack);
        st.header = Some(header);
        st.back_button = Some(back_button);
        st.title_menu = Some(title_menu);
        st.title_game = Some(title_game_box.upcast::<gtk::Widget>());
        st.title_game_subtitle = Some(title_game_subtitle);
        st.scores = scores::load();
        st.sounds = SoundBank::load();
        st.sounds.start_music();
        refresh_menu_scores(&st);
    }

    set_header_menu(&state);
    win.present();
}

fn load_css() {
    static RESOURCES_INIT: Once = Once::new();
    RESOURCES_INIT.call_once(|| {
        gio::resources_register_include!("number-match.gresource")
            .expect("failed to register embedded resources");
    });

    let Some(display) = gtk::gdk::Display::default() else {
        return;
    };

    let provider = gtk::CssProvider::new();
    provider.load_from_resource("/io/github/numbermatch/NumberMatch/style.css");
    gtk::style_context_add_provider_for_display(
        &display,
        &provider,
        gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
    );
}

fn build_menu_view(state: &Rc<RefCell<AppState>>) -> gtk::Box {
    let root = gtk::Box::new(gtk::Orientation::Vertical, 0);
    root.set_hexpand(true);
    root.set_vexpand(true);

    let center = gtk::CenterBox::new();
    center.set_hexpand(true);
    center.set_vexpand(true);

    let content = gtk::Box::new(gtk::Orientation::Vertical, 10);
    content.set_halign(gtk::Align::Center);
    content.set_valign(gtk::Align::Center);

    let title = gtk::Label::new(Some(&gettext("Fun Number Match!")));
    title.add_css_class("main-menu-title");

    let buttons_box = gtk::Box::new(gtk::Orientation::Vertical, 13);
    buttons_box.set_halign(gtk::Align::Center);
    buttons_box.set_margin_top(16);

    let modes: [(&str, GameMode, Difficulty); 4] = [
        ("Easy Mode", GameMode::Numbers, Difficulty::Easy),
        ("Medium Mode", GameMode::Numbers, Difficulty::Medium),
        ("Hard Mode", GameMode::Numbers, Difficulty::Hard),
        ("Arithmetic Mode", GameMode::Arithmetic, Difficulty::Medium),
    ];
    for (label, mode, difficulty) in modes {
        let button = gtk::Button::with_label(&gettext(label));
        button.add_css_class("main-menu-button");
        button.set_size_request(200, 50);
        button.connect_clicked({
            let state = state.clone();
            move |_| {
                start_mode(&state, mode, difficulty);
            }
        });
        buttons_box.append(&button);
    }

    let scores_box = gtk::Box::new(gtk::Orientation::Vertical, 6);
    scores_box.set_halign(gtk::Align::Center);
    scores_box.set_margin_top(24);
    let mut score_labels = Vec::new();
    for _ in 0..3 {
        let label = gtk::Label::new(None);
        label.add_css_class("menu-score-label");
        scores_box.append(&label);
        score_labels.push(label);
    }

    content.append(&title);
    content.append(&buttons_box);
    content.append(&scores_box);
    center.set_center_widget(Some(&content));
    root.append(&center);

    state.borrow_mut().menu_score_labels = score_labels;

    root
}

fn build_game_view(state: &Rc<RefCell<AppState>>) -> gtk::Box {
    let root = gtk::Box::new(gtk::Orientation::Vertical, 0);
    root.set_hexpand(true);
    root.set_vexpand(true);

    let overlay = gtk::Overlay::new();
    overlay.set_hexpand(true);
    overlay.set_vexpand(true);

    let board_container = gtk::Box::new(gtk::Orientation::Vertical, 0);
    board_container.set_hexpand(true);
    board_container.set_vexpand(true);
    board_container.set_halign(gtk::Align::Fill);
    board_container.set_valign(gtk::Align::Fill);
    overlay.set_child(Some(&board_container));

    let victory = gtk::Box::new(gtk::Orientation::Vertical, 12);
    victory.add_css_class("victory-card");
    victory.set_halign(gtk::Align::Center);
    victory.set_valign(gtk::Align::End);
    victory.set_margin_bottom(24);
    victory.set_visible(false);

    let banner = gtk::Label::new(Some(&gettext("You Won! Well Done!")));
    banner.add_css_class("victory-banner");

    let stars = gtk::Label::new(None);
    stars.add_css_class("victory-stars");

    let menu_button = gtk::Button::with_label(&gettext("Return to Menu"));
    menu_button.add_css_class("main-menu-button");
    menu_button.set_halign(gtk::Align::Center);
    menu_button.connect_clicked({
        let state = state.clone();
        move |_| {
            show_menu(&state);
        }
    });

    victory.append(&banner);
    victory.append(&stars);
    victory.append(&menu_button);
    overlay.add_overlay(&victory);

    root.append(&overlay);

    {
        let mut st = state.borrow_mut();
        st.board_container = Some(board_container);
        st.victory_overlay = Some(victory);
        st.victory_stars_label = Some(stars);
    }

    root
}

fn start_mode(state: &Rc<RefCell<AppState>>, mode: GameMode, difficulty: Difficulty) {
    {
        let mut st = state.borrow_mut();
        st.sounds.play_click();
        st.start_round(mode, difficulty);
    }
    rebuild_board(state);
    show_game(state);
}

pub fn handle_card_click(state: &Rc<RefCell<AppState>>, index: usize) {
    let outcome = rules::select_card(&mut state.borrow_mut(), index);

    match outcome {
        SelectionOutcome::Ignored => {}
        SelectionOutcome::FirstRevealed => {
            let st = state.borrow();
            st.sounds.play_click();
            sync_card_classes(&st, index);
        }
        SelectionOutcome::Matched { first, second, won } => {
            {
                let st = state.borrow();
                st.sounds.play_correct();
                sync_card_classes(&st, first);
                sync_card_classes(&st, second);
                update_subtitle(&st);
            }
            if won {
                finish_round(state);
            }
        }
        SelectionOutcome::Mismatched { first, second } => {
            let game_id = {
                let st = state.borrow();
                st.sounds.play_wrong();
                sync_card_classes(&st, first);
                sync_card_classes(&st, second);
                update_subtitle(&st);
                st.game_id
            };
            schedule_mismatch_reset(state, first, second, game_id);
        }
    }
}

fn finish_round(state: &Rc<RefCell<AppState>>) {
    {
        let mut st = state.borrow_mut();
        st.sounds.play_win();
        let difficulty = st.difficulty;
        let attempts = st.attempts;
        if st.scores.record(difficulty, attempts)
            && let Err(err) = scores::save(&st.scores)
        {
            glib::g_critical!("number-match", "failed to write high scores: {err}");
            std::process::exit(1);
        }
    }
    show_victory(state);
}

/// Leaves both mismatched cards visible for the pause, then flips them back.
/// Runs off the main loop so quitting stays responsive; a board rebuild
/// invalidates the callback through `game_id`.
fn schedule_mismatch_reset(
    state: &Rc<RefCell<AppState>>,
    first: usize,
    second: usize,
    game_id: u64,
) {
    let state_reset = state.clone();
    glib::timeout_add_local(
        std::time::Duration::from_millis(MISMATCH_PAUSE_MS),
        move || {
            let mut st = state_reset.borrow_mut();
            if st.game_id != game_id {
                return glib::ControlFlow::Break;
            }
            rules::resolve_mismatch(&mut st, first, second);
            sync_card_classes(&st, first);
            sync_card_classes(&st, second);
            glib::ControlFlow::Break
        },
    );
}
