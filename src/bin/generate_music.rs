//! Regenerates the looping background melody as `sounds/background_music.wav`.

use std::fs;
use std::path::Path;
use std::process;

use number_match::synth;

fn main() {
    let dir = Path::new("sounds");
    if let Err(err) = generate(dir) {
        eprintln!("generate-music: {err}");
        process::exit(1);
    }
}

fn generate(dir: &Path) -> std::io::Result<()> {
    fs::create_dir_all(dir)?;
    let path = dir.join("background_music.wav");
    let mut rng = rand::rng();
    let samples = synth::render_melody(&mut rng);
    synth::write_wav(&path, &samples)?;
    println!("wrote {}", path.display());
    Ok(())
}
