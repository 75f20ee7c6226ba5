use gettextrs::gettext;
use gtk4 as gtk;
use libadwaita as adw;

use adw::prelude::*;

pub fn show_instructions_dialog(app: &adw::Application) -> adw::AlertDialog {
    let dialog = adw::AlertDialog::new(
        Some(&gettext("Instructions")),
        Some(&gettext(
            "Flip two cards at a time to find matching pairs.\n\
In Arithmetic mode, match each expression with its result.\n\
Fewer tries means a better score.",
        )),
    );
    dialog.add_response("ok", &gettext("Got it"));
    dialog.set_default_response(Some("ok"));
    dialog.set_close_response("ok");
    dialog.present(app.active_window().as_ref());
    dialog
}

pub fn show_about_dialog(app: &adw::Application) -> adw::AboutDialog {
    let dialog = adw::AboutDialog::builder()
        .application_name("Number Match")
        .application_icon("io.github.numbermatch.NumberMatch")
        .version("1.0.0")
        .comments(gettext("A number-matching memory game."))
        .build();
    dialog.add_legal_section(
        "Number Match",
        Some("© 2026 Number Match contributors"),
        gtk::License::MitX11,
        None,
    );
    dialog.present(app.active_window().as_ref());
    dialog
}
