//! Regenerates the game's sound effects as WAV files under `sounds/`.

use std::fs;
use std::path::Path;
use std::process;

use number_match::synth;

const EFFECT_VOLUME: f64 = 0.5;

fn main() {
    let dir = Path::new("sounds");
    if let Err(err) = generate(dir) {
        eprintln!("generate-sounds: {err}");
        process::exit(1);
    }
}

fn generate(dir: &Path) -> std::io::Result<()> {
    fs::create_dir_all(dir)?;

    let effects: [(&str, f64, f64); 4] = [
        ("correct.wav", 800.0, 0.1),
        ("wrong.wav", 300.0, 0.2),
        ("win.wav", 600.0, 0.5),
        ("click.wav", 1000.0, 0.05),
    ];

    for (name, frequency, duration) in effects {
        let path = dir.join(name);
        synth::write_tone_file(&path, frequency, duration, EFFECT_VOLUME)?;
        println!("wrote {}", path.display());
    }
    Ok(())
}
