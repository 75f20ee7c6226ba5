pub mod synth;
pub mod ui;
