use std::collections::HashSet;

use rand::Rng;
use rand::seq::SliceRandom;

use super::state::{CardValue, GameMode, Operator};

pub const CANVAS_WIDTH: i32 = 800;
pub const CANVAS_HEIGHT: i32 = 600;
pub const NOMINAL_CARD_SIZE: i32 = 100;
pub const CARD_MARGIN: i32 = 20;

/// Vertical space reserved above the board for the title and counters.
const HUD_RESERVED_HEIGHT: i32 = 200;

const OPERAND_MAX: u32 = 10;
const RESULT_MAX: u32 = 20;

/// Retry budget for sampling distinct arithmetic triples. Once exhausted the
/// uniqueness constraint is dropped so the loop always terminates.
const UNIQUE_TRIPLE_ATTEMPTS: u32 = 10_000;

pub fn evaluate(op: Operator, a: u32, b: u32) -> u32 {
    match op {
        Operator::Add => a + b,
        Operator::Sub => a - b,
        Operator::Mul => a * b,
    }
}

pub fn build_deck<R: Rng + ?Sized>(
    mode: GameMode,
    pair_count: usize,
    rng: &mut R,
) -> Vec<CardValue> {
    match mode {
        GameMode::Numbers => build_numeric_deck(pair_count, rng),
        GameMode::Arithmetic => build_arithmetic_deck(pair_count, rng),
    }
}

/// Values `1..=pair_count`, each duplicated, uniformly shuffled.
pub fn build_numeric_deck<R: Rng + ?Sized>(pair_count: usize, rng: &mut R) -> Vec<CardValue> {
    let mut values: Vec<CardValue> = (1..=pair_count as u32)
        .flat_map(|n| [CardValue::Number(n), CardValue::Number(n)])
        .collect();
    values.shuffle(rng);
    values
}

/// Samples operand pairs and operators until `pair_count` triples are
/// accepted, emitting each triple card alongside its result card.
///
/// Subtraction swaps operands rather than going negative, and a triple is
/// accepted only when its result stays within `RESULT_MAX` and the triple has
/// not been used before.
pub fn build_arithmetic_deck<R: Rng + ?Sized>(pair_count: usize, rng: &mut R) -> Vec<CardValue> {
    const OPERATORS: [Operator; 3] = [Operator::Add, Operator::Sub, Operator::Mul];

    let mut values = Vec::with_capacity(pair_count * 2);
    let mut used: HashSet<(u32, Operator, u32)> = HashSet::new();
    let mut accepted = 0usize;
    let mut attempts = 0u32;

    while accepted < pair_count {
        let mut a = rng.random_range(1..=OPERAND_MAX);
        let mut b = rng.random_range(1..=OPERAND_MAX);
        let op = OPERATORS[rng.random_range(0..OPERATORS.len())];
        if op == Operator::Sub && a < b {
            std::mem::swap(&mut a, &mut b);
        }

        attempts = attempts.saturating_add(1);
        let result = evaluate(op, a, b);
        if result == 0 || result > RESULT_MAX {
            continue;
        }
        if !used.insert((a, op, b)) && attempts <= UNIQUE_TRIPLE_ATTEMPTS {
            continue;
        }

        values.push(CardValue::Expression { a, op, b });
        values.push(CardValue::Number(result));
        accepted += 1;
    }

    values.shuffle(rng);
    values
}

/// Board geometry for the fixed 800×600 canvas: wide decks get a sixth
/// column, cells shrink to fit, the grid is centered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridLayout {
    pub columns: i32,
    pub rows: i32,
    pub cell_size: i32,
    pub x_start: i32,
    pub y_start: i32,
}

impl GridLayout {
    pub fn for_card_count(card_count: usize) -> Self {
        let columns = if card_count <= 16 { 5 } else { 6 };
        let rows = (card_count as i32 + columns - 1) / columns;

        let fit_width = (CANVAS_WIDTH - (columns + 1) * CARD_MARGIN) / columns;
        let fit_height = (CANVAS_HEIGHT - HUD_RESERVED_HEIGHT - (rows + 1) * CARD_MARGIN) / rows;
        let cell_size = NOMINAL_CARD_SIZE.min(fit_width).min(fit_height);

        GridLayout {
            columns,
            rows,
            cell_size,
            x_start: (CANVAS_WIDTH - columns * (cell_size + CARD_MARGIN)) / 2,
            y_start: (CANVAS_HEIGHT - rows * (cell_size + CARD_MARGIN)) / 2,
        }
    }
}
