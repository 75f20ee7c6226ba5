pub mod app;
pub mod audio;
pub mod board;
pub mod deck;
pub mod dialogs;
pub mod hud;
pub mod rules;
pub mod scene;
pub mod scores;
pub mod state;
