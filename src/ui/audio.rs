use std::path::Path;

use gtk4 as gtk;
use gtk4::prelude::*;

const SOUND_DIR: &str = "sounds";
const MUSIC_VOLUME: f64 = 0.3;

/// Tone clips generated by the `generate-sounds` and `generate-music` bins.
/// Any missing file degrades to silence; gameplay never depends on audio.
#[derive(Default)]
pub struct SoundBank {
    correct: Option<gtk::MediaFile>,
    wrong: Option<gtk::MediaFile>,
    win: Option<gtk::MediaFile>,
    click: Option<gtk::MediaFile>,
    music: Option<gtk::MediaFile>,
}

fn load_clip(file_name: &str) -> Option<gtk::MediaFile> {
    let path = Path::new(SOUND_DIR).join(file_name);
    if !path.is_file() {
        glib::g_warning!(
            "number-match",
            "sound {} missing, playing silence",
            path.display()
        );
        return None;
    }
    Some(gtk::MediaFile::for_filename(path))
}

fn play_clip(clip: &Option<gtk::MediaFile>) {
    if let Some(media) = clip {
        media.seek(0);
        media.play();
    }
}

impl SoundBank {
    pub fn load() -> Self {
        SoundBank {
            correct: load_clip("correct.wav"),
            wrong: load_clip("wrong.wav"),
            win: load_clip("win.wav"),
            click: load_clip("click.wav"),
            music: load_clip("background_music.wav"),
        }
    }

    pub fn play_correct(&self) {
        play_clip(&self.correct);
    }

    pub fn play_wrong(&self) {
        play_clip(&self.wrong);
    }

    pub fn play_win(&self) {
        play_clip(&self.win);
    }

    pub fn play_click(&self) {
        play_clip(&self.click);
    }

    pub fn start_music(&self) {
        if let Some(music) = &self.music {
            music.set_loop(true);
            music.set_volume(MUSIC_VOLUME);
            music.play();
        }
    }
}
