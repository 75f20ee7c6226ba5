//! Sine-wave synthesis and WAV encoding for the bundled sound effects and
//! the looping background melody.

use std::fs;
use std::io;
use std::path::Path;

use rand::Rng;
use rand::seq::IndexedRandom;

pub const SAMPLE_RATE: u32 = 44_100;

/// C-major pentatonic: C5, D5, E5, G5, A5.
pub const PENTATONIC_NOTES: [f64; 5] = [523.25, 587.33, 659.25, 783.99, 880.0];

pub const MELODY_BARS: usize = 4;
pub const MELODY_NOTES_PER_BAR: usize = 4;
pub const MELODY_NOTE_SECONDS: f64 = 0.25;
pub const MELODY_VOLUME: f64 = 0.3;

/// Renders a constant-frequency sine tone as normalized samples.
pub fn render_tone(frequency: f64, duration_secs: f64, volume: f64) -> Vec<f64> {
    let sample_count = (duration_secs * SAMPLE_RATE as f64).round() as usize;
    (0..sample_count)
        .map(|i| {
            let t = i as f64 / SAMPLE_RATE as f64;
            volume * (2.0 * std::f64::consts::PI * frequency * t).sin()
        })
        .collect()
}

/// Renders the background melody: random pentatonic notes, four bars of
/// four quarter-second notes each.
pub fn render_melody<R: Rng + ?Sized>(rng: &mut R) -> Vec<f64> {
    let mut samples = Vec::new();
    for _ in 0..MELODY_BARS * MELODY_NOTES_PER_BAR {
        let note = *PENTATONIC_NOTES
            .choose(rng)
            .unwrap_or(&PENTATONIC_NOTES[0]);
        samples.extend(render_tone(note, MELODY_NOTE_SECONDS, MELODY_VOLUME));
    }
    samples
}

/// Packs normalized samples into little-endian 16-bit PCM, clamping
/// anything outside [-1, 1].
pub fn samples_to_pcm16(samples: &[f64]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(samples.len() * 2);
    for &sample in samples {
        let value = (sample.clamp(-1.0, 1.0) * 32767.0).round() as i16;
        bytes.extend_from_slice(&value.to_le_bytes());
    }
    bytes
}

/// Writes a mono 16-bit PCM WAV file.
pub fn write_wav(path: &Path, samples: &[f64]) -> io::Result<()> {
    let data = samples_to_pcm16(samples);
    let mut out = Vec::with_capacity(44 + data.len());

    let byte_rate = SAMPLE_RATE * 2;
    out.extend_from_slice(b"RIFF");
    out.extend_from_slice(&(36 + data.len() as u32).to_le_bytes());
    out.extend_from_slice(b"WAVE");

    out.extend_from_slice(b"fmt ");
    out.extend_from_slice(&16u32.to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes()); // PCM
    out.extend_from_slice(&1u16.to_le_bytes()); // mono
    out.extend_from_slice(&SAMPLE_RATE.to_le_bytes());
    out.extend_from_slice(&byte_rate.to_le_bytes());
    out.extend_from_slice(&2u16.to_le_bytes()); // block align
    out.extend_from_slice(&16u16.to_le_bytes()); // bits per sample

    out.extend_from_slice(b"data");
    out.extend_from_slice(&(data.len() as u32).to_le_bytes());
    out.extend_from_slice(&data);

    fs::write(path, out)
}

/// Renders a tone and writes it straight to `path`.
pub fn write_tone_file(
    path: &Path,
    frequency: f64,
    duration_secs: f64,
    volume: f64,
) -> io::Result<()> {
    write_wav(path, &render_tone(frequency, duration_secs, volume))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tone_length_matches_duration() {
        let samples = render_tone(800.0, 0.1, 0.5);
        assert_eq!(samples.len(), 4410);
        let samples = render_tone(1000.0, 0.05, 0.5);
        assert_eq!(samples.len(), 2205);
    }

    #[test]
    fn tone_starts_at_zero_and_stays_within_volume() {
        let samples = render_tone(440.0, 0.01, 0.5);
        assert_eq!(samples[0], 0.0);
        assert!(samples.iter().all(|s| s.abs() <= 0.5 + 1e-9));
        assert!(samples.iter().any(|s| s.abs() > 0.1));
    }

    #[test]
    fn tone_follows_sine_formula() {
        let samples = render_tone(600.0, 0.01, 0.5);
        let i = 97;
        let expected =
            0.5 * (2.0 * std::f64::consts::PI * 600.0 * i as f64 / SAMPLE_RATE as f64).sin();
        assert!((samples[i] - expected).abs() < 1e-12);
    }

    #[test]
    fn pcm16_packing_clamps_and_rounds() {
        let bytes = samples_to_pcm16(&[0.0, 1.0, -1.0, 2.0, -2.0, 0.5]);
        assert_eq!(bytes.len(), 12);
        assert_eq!(&bytes[0..2], &0i16.to_le_bytes());
        assert_eq!(&bytes[2..4], &32767i16.to_le_bytes());
        assert_eq!(&bytes[4..6], &(-32767i16).to_le_bytes());
        assert_eq!(&bytes[6..8], &32767i16.to_le_bytes());
        assert_eq!(&bytes[8..10], &(-32767i16).to_le_bytes());
        assert_eq!(&bytes[10..12], &16384i16.to_le_bytes());
    }

    #[test]
    fn wav_header_is_well_formed() {
        let dir = std::env::temp_dir().join("number-match-synth-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("tone.wav");
        write_tone_file(&path, 800.0, 0.1, 0.5).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        let data_len = 4410 * 2u32;
        assert_eq!(&bytes[0..4], b"RIFF");
        assert_eq!(
            u32::from_le_bytes(bytes[4..8].try_into().unwrap()),
            36 + data_len
        );
        assert_eq!(&bytes[8..12], b"WAVE");
        assert_eq!(&bytes[12..16], b"fmt ");
        assert_eq!(u32::from_le_bytes(bytes[16..20].try_into().unwrap()), 16);
        assert_eq!(u16::from_le_bytes(bytes[20..22].try_into().unwrap()), 1);
        assert_eq!(u16::from_le_bytes(bytes[22..24].try_into().unwrap()), 1);
        assert_eq!(
            u32::from_le_bytes(bytes[24..28].try_into().unwrap()),
            SAMPLE_RATE
        );
        assert_eq!(&bytes[36..40], b"data");
        assert_eq!(
            u32::from_le_bytes(bytes[40..44].try_into().unwrap()),
            data_len
        );
        assert_eq!(bytes.len(), 44 + data_len as usize);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn melody_spans_sixteen_notes() {
        let mut rng = rand::rng();
        let samples = render_melody(&mut rng);
        let per_note = (MELODY_NOTE_SECONDS * SAMPLE_RATE as f64).round() as usize;
        assert_eq!(samples.len(), per_note * 16);
        assert!(samples.iter().all(|s| s.abs() <= MELODY_VOLUME + 1e-9));
    }
}
