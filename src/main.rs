use gettextrs::{LocaleCategory, setlocale};

fn main() {
    setlocale(LocaleCategory::LcAll, "");
    let _ = gettextrs::bindtextdomain("number-match", "/usr/share/locale");
    let _ = gettextrs::textdomain("number-match");

    number_match::ui::app::run();
}
