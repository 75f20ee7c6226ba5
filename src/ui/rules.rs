use super::deck::evaluate;
use super::state::{AppState, CardValue, Difficulty, GameMode};

/// Result of selecting a card, consumed by the UI layer to schedule sounds,
/// redraws and the mismatch reset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionOutcome {
    Ignored,
    FirstRevealed,
    Matched { first: usize, second: usize, won: bool },
    Mismatched { first: usize, second: usize },
}

pub fn values_match(a: &CardValue, b: &CardValue, mode: GameMode) -> bool {
    match mode {
        GameMode::Numbers => match (a, b) {
            (CardValue::Number(x), CardValue::Number(y)) => x == y,
            _ => false,
        },
        // A pair is always one expression plus its result; two results with
        // the same value never match here.
        GameMode::Arithmetic => match (a, b) {
            (CardValue::Expression { a, op, b }, CardValue::Number(result))
            | (CardValue::Number(result), CardValue::Expression { a, op, b }) => {
                evaluate(*op, *a, *b) == *result
            }
            _ => false,
        },
    }
}

/// Applies one card selection to the round state.
///
/// Clicks are ignored while the board is won, input is locked, or the card is
/// already face-up. The second selection of a pair costs an attempt and
/// resolves to a match or mismatch; the pending first card is cleared either
/// way. A mismatch locks input until [`resolve_mismatch`] runs.
pub fn select_card(st: &mut AppState, index: usize) -> SelectionOutcome {
    if st.game_won || st.lock_input || index >= st.cards.len() {
        return SelectionOutcome::Ignored;
    }
    if st.cards[index].revealed || st.cards[index].matched {
        return SelectionOutcome::Ignored;
    }

    st.cards[index].reveal();

    let Some(first) = st.first_selected.take() else {
        st.first_selected = Some(index);
        return SelectionOutcome::FirstRevealed;
    };

    st.attempts += 1;
    if values_match(&st.cards[first].value, &st.cards[index].value, st.mode) {
        st.cards[first].matched = true;
        st.cards[index].matched = true;
        st.matched_pairs += 1;
        if st.matched_pairs == st.target_pairs() {
            st.game_won = true;
        }
        SelectionOutcome::Matched {
            first,
            second: index,
            won: st.game_won,
        }
    } else {
        st.lock_input = true;
        SelectionOutcome::Mismatched {
            first,
            second: index,
        }
    }
}

/// Ends the mismatch pause: both cards flip back down and input unlocks.
pub fn resolve_mismatch(st: &mut AppState, first: usize, second: usize) {
    for index in [first, second] {
        if let Some(card) = st.cards.get_mut(index) {
            card.hide();
        }
    }
    st.lock_input = false;
}

/// Star rating shown on the victory overlay, from attempts against a
/// per-difficulty par.
pub fn star_count(difficulty: Difficulty, attempts: u32) -> u32 {
    let par = match difficulty {
        Difficulty::Easy => 7,
        Difficulty::Medium => 12,
        Difficulty::Hard => 20,
    };
    if attempts <= par {
        5
    } else if attempts * 2 <= par * 3 {
        4
    } else if attempts <= par * 2 {
        3
    } else {
        2
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::state::Operator;

    fn numeric_state(values: &[u32]) -> AppState {
        let mut st = AppState::new();
        st.mode = GameMode::Numbers;
        st.difficulty = Difficulty::Easy;
        st.cards = values
            .iter()
            .map(|n| crate::ui::state::Card::new(CardValue::Number(*n)))
            .collect();
        st
    }

    #[test]
    fn equal_numbers_match_and_bump_pair_count() {
        let mut st = numeric_state(&[1, 2, 1, 2, 3, 3, 4, 4, 5, 5]);
        assert_eq!(select_card(&mut st, 0), SelectionOutcome::FirstRevealed);
        let outcome = select_card(&mut st, 2);
        assert_eq!(
            outcome,
            SelectionOutcome::Matched {
                first: 0,
                second: 2,
                won: false
            }
        );
        assert!(st.cards[0].matched && st.cards[2].matched);
        assert_eq!(st.matched_pairs, 1);
        assert_eq!(st.attempts, 1);
        assert!(st.first_selected.is_none());
    }

    #[test]
    fn mismatch_leaves_cards_unmatched_after_resolution() {
        let mut st = numeric_state(&[1, 2, 1, 2, 3, 3, 4, 4, 5, 5]);
        select_card(&mut st, 0);
        let outcome = select_card(&mut st, 1);
        assert_eq!(
            outcome,
            SelectionOutcome::Mismatched {
                first: 0,
                second: 1
            }
        );
        assert!(st.lock_input);
        assert_eq!(st.matched_pairs, 0);

        // Input is locked until the pause resolves.
        assert_eq!(select_card(&mut st, 4), SelectionOutcome::Ignored);

        resolve_mismatch(&mut st, 0, 1);
        assert!(!st.lock_input);
        assert!(!st.cards[0].revealed && !st.cards[1].revealed);
        assert!(!st.cards[0].matched && !st.cards[1].matched);
    }

    #[test]
    fn revealed_and_matched_cards_ignore_clicks() {
        let mut st = numeric_state(&[1, 2, 1, 2, 3, 3, 4, 4, 5, 5]);
        select_card(&mut st, 0);
        assert_eq!(select_card(&mut st, 0), SelectionOutcome::Ignored);
        select_card(&mut st, 2);
        assert_eq!(select_card(&mut st, 2), SelectionOutcome::Ignored);
    }

    #[test]
    fn perfect_easy_run_wins_in_five_attempts() {
        let mut st = numeric_state(&[1, 1, 2, 2, 3, 3, 4, 4, 5, 5]);
        for pair in 0..4 {
            select_card(&mut st, pair * 2);
            let outcome = select_card(&mut st, pair * 2 + 1);
            assert!(matches!(outcome, SelectionOutcome::Matched { won: false, .. }));
        }
        select_card(&mut st, 8);
        let outcome = select_card(&mut st, 9);
        assert!(matches!(outcome, SelectionOutcome::Matched { won: true, .. }));
        assert!(st.game_won);
        assert_eq!(st.attempts, 5);
        assert_eq!(st.matched_pairs, 5);

        // Further clicks are ignored once the board is won.
        assert_eq!(select_card(&mut st, 0), SelectionOutcome::Ignored);
    }

    #[test]
    fn arithmetic_match_is_symmetric() {
        let expr = CardValue::Expression {
            a: 3,
            op: Operator::Add,
            b: 4,
        };
        assert!(values_match(&expr, &CardValue::Number(7), GameMode::Arithmetic));
        assert!(values_match(&CardValue::Number(7), &expr, GameMode::Arithmetic));
        assert!(!values_match(&expr, &CardValue::Number(8), GameMode::Arithmetic));
    }

    #[test]
    fn two_results_never_match_in_arithmetic_mode() {
        assert!(!values_match(
            &CardValue::Number(7),
            &CardValue::Number(7),
            GameMode::Arithmetic
        ));
        let lhs = CardValue::Expression {
            a: 2,
            op: Operator::Mul,
            b: 3,
        };
        let rhs = CardValue::Expression {
            a: 3,
            op: Operator::Mul,
            b: 2,
        };
        assert!(!values_match(&lhs, &rhs, GameMode::Arithmetic));
    }

    #[test]
    fn star_rating_thresholds() {
        assert_eq!(star_count(Difficulty::Easy, 5), 5);
        assert_eq!(star_count(Difficulty::Easy, 7), 5);
        assert_eq!(star_count(Difficulty::Easy, 10), 4);
        assert_eq!(star_count(Difficulty::Easy, 14), 3);
        assert_eq!(star_count(Difficulty::Easy, 15), 2);
        assert_eq!(star_count(Difficulty::Hard, 20), 5);
        assert_eq!(star_count(Difficulty::Hard, 41), 2);
    }
}
