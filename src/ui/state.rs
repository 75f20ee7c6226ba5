use gtk4 as gtk;
use libadwaita as adw;

use super::audio::SoundBank;
use super::deck;
use super::scores::HighScoreTable;

/// Easing factor applied once per animation tick.
const SCALE_EASING: f64 = 0.2;
const REVEALED_SCALE: f64 = 1.1;
const RESTING_SCALE: f64 = 1.0;
const SETTLE_EPSILON: f64 = 0.002;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Sub,
    Mul,
}

impl Operator {
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "×",
        }
    }
}

/// A card face is either a plain number or an arithmetic expression whose
/// partner card carries the evaluated result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CardValue {
    Number(u32),
    Expression { a: u32, op: Operator, b: u32 },
}

impl CardValue {
    pub fn label(&self) -> String {
        match self {
            CardValue::Number(value) => value.to_string(),
            CardValue::Expression { a, op, b } => format!("{} {} {}", a, op.symbol(), b),
        }
    }

    pub fn is_expression(&self) -> bool {
        matches!(self, CardValue::Expression { .. })
    }
}

#[derive(Clone, Debug)]
pub struct Card {
    pub value: CardValue,
    pub revealed: bool,
    pub matched: bool,
    pub scale: f64,
    pub target_scale: f64,
}

impl Card {
    pub fn new(value: CardValue) -> Self {
        Card {
            value,
            revealed: false,
            matched: false,
            scale: RESTING_SCALE,
            target_scale: RESTING_SCALE,
        }
    }

    pub fn reveal(&mut self) {
        self.revealed = true;
        self.target_scale = REVEALED_SCALE;
    }

    pub fn hide(&mut self) {
        self.revealed = false;
        self.target_scale = RESTING_SCALE;
    }

    /// Steps the scale toward its target. Returns true while still moving.
    pub fn step_animation(&mut self) -> bool {
        if (self.target_scale - self.scale).abs() < SETTLE_EPSILON {
            if self.scale != self.target_scale {
                self.scale = self.target_scale;
                return true;
            }
            return false;
        }
        self.scale += (self.target_scale - self.scale) * SCALE_EASING;
        true
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn pair_count(self) -> usize {
        match self {
            Difficulty::Easy => 5,
            Difficulty::Medium => 8,
            Difficulty::Hard => 12,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum GameMode {
    #[default]
    Numbers,
    Arithmetic,
}

pub struct AppState {
    pub view_stack: Option<gtk::Stack>,
    pub header: Option<adw::HeaderBar>,
    pub back_button: Option<gtk::Button>,
    pub title_menu: Option<gtk::Label>,
    pub title_game: Option<gtk::Widget>,
    pub title_game_subtitle: Option<gtk::Label>,
    pub board_container: Option<gtk::Box>,
    pub victory_overlay: Option<gtk::Box>,
    pub victory_stars_label: Option<gtk::Label>,
    pub menu_score_labels: Vec<gtk::Label>,
    pub grid_buttons: Vec<gtk::Button>,

    // Game state
    pub cards: Vec<Card>,
    pub mode: GameMode,
    pub difficulty: Difficulty,
    pub first_selected: Option<usize>,
    pub matched_pairs: usize,
    pub attempts: u32,
    pub game_won: bool,
    pub lock_input: bool,
    pub game_id: u64,
    pub scores: HighScoreTable,
    pub sounds: SoundBank,
}

impl Default for AppState {
    fn default() -> Self {
        AppState {
            view_stack: None,
            header: None,
            back_button: None,
            title_menu: None,
            title_game: None,
            title_game_subtitle: None,
            board_container: None,
            victory_overlay: None,
            victory_stars_label: None,
            menu_score_labels: Vec::new(),
            grid_buttons: Vec::new(),
            cards: Vec::new(),
            mode: GameMode::Numbers,
            difficulty: Difficulty::Easy,
            first_selected: None,
            matched_pairs: 0,
            attempts: 0,
            game_won: false,
            lock_input: false,
            game_id: 0,
            scores: HighScoreTable::default(),
            sounds: SoundBank::default(),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn target_pairs(&self) -> usize {
        self.difficulty.pair_count()
    }

    /// Switches mode/difficulty and deals a fresh board. Arithmetic mode
    /// always plays at the medium pair count and scores under `medium`.
    pub fn start_round(&mut self, mode: GameMode, difficulty: Difficulty) {
        self.mode = mode;
        self.difficulty = if mode == GameMode::Arithmetic {
            Difficulty::Medium
        } else {
            difficulty
        };
        self.reset_round();
    }

    pub fn reset_round(&mut self) {
        self.game_id = self.game_id.wrapping_add(1);
        self.first_selected = None;
        self.matched_pairs = 0;
        self.attempts = 0;
        self.game_won = false;
        self.lock_input = false;

        let mut rng = rand::rng();
        let values = deck::build_deck(self.mode, self.difficulty.pair_count(), &mut rng);
        self.cards = values.into_iter().map(Card::new).collect();
    }
}
