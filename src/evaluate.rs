//! Static positional evaluation over 4-cell windows

use serde::{Deserialize, Serialize};

use crate::board::{Board, Cell};

/// Tunable scoring weights for a 4-cell window.
///
/// `opponent_three` and `center` are magnitudes: the first is subtracted when
/// the opponent holds three cells of a window, the second is added per own
/// piece in the centre column when the centre bonus is enabled.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Weights {
    pub window_four: i32,
    pub window_three: i32,
    pub window_two: i32,
    pub opponent_three: i32,
    pub center: i32,
}

impl Weights {
    /// Heavily win-biased scheme: completed windows dwarf every positional term
    pub const WIN_BIASED: Weights = Weights {
        window_four: 10_000,
        window_three: 100,
        window_two: 10,
        opponent_three: 100,
        center: 0,
    };

    /// Modest scheme with a small blocking penalty and a centre-column term
    pub const MODEST: Weights = Weights {
        window_four: 100,
        window_three: 5,
        window_two: 2,
        opponent_three: 4,
        center: 3,
    };
}

impl Default for Weights {
    fn default() -> Self {
        Weights::MODEST
    }
}

/// Which perspective the searcher evaluates cutoff nodes from
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EvalPolicy {
    /// Always score from the engine piece's perspective, whichever side the
    /// cutoff node belongs to. The minimizing branch consumes the maximizer's
    /// heuristic without negation; this is a known quirk kept on purpose.
    TwoSided,
    /// Score from the perspective of the side to move at the cutoff node,
    /// negated at minimizing nodes so values stay on the maximizer's axis
    OneSided,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalConfig {
    pub policy: EvalPolicy,
    pub center_bonus: bool,
    // last so the TOML serializer emits the scalar fields before this table
    pub weights: Weights,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            policy: EvalPolicy::TwoSided,
            center_bonus: true,
            weights: Weights::default(),
        }
    }
}

/// Scores a single 4-cell slice from `perspective`'s point of view.
///
/// Mixed windows (both players present without an opponent threat) and
/// anything else outside the case table score 0.
pub fn evaluate_window(window: [Cell; 4], perspective: Cell, weights: &Weights) -> i32 {
    let own = window.iter().filter(|&&c| c == perspective).count();
    let empty = window.iter().filter(|c| c.is_empty()).count();
    let opponent = 4 - own - empty;

    if own == 4 {
        weights.window_four
    } else if own == 3 && empty == 1 {
        weights.window_three
    } else if own == 2 && empty == 2 {
        weights.window_two
    } else if opponent == 3 && empty == 1 {
        -weights.opponent_three
    } else {
        0
    }
}

/// Sums `evaluate_window` over every horizontal, vertical and diagonal
/// 4-cell window on the board, plus the optional centre-column bonus
pub fn evaluate_position(board: &Board, perspective: Cell, config: &EvalConfig) -> i32 {
    let rows = board.rows();
    let cols = board.cols();
    let mut score = 0;

    if config.center_bonus && cols > 0 {
        let center = cols / 2;
        let count = (0..rows)
            .filter(|&row| board.get(row, center) == perspective)
            .count();
        score += count as i32 * config.weights.center;
    }

    // horizontal
    for row in 0..rows {
        for col in 0..cols.saturating_sub(3) {
            let window = [
                board.get(row, col),
                board.get(row, col + 1),
                board.get(row, col + 2),
                board.get(row, col + 3),
            ];
            score += evaluate_window(window, perspective, &config.weights);
        }
    }

    // vertical
    for row in 0..rows.saturating_sub(3) {
        for col in 0..cols {
            let window = [
                board.get(row, col),
                board.get(row + 1, col),
                board.get(row + 2, col),
                board.get(row + 3, col),
            ];
            score += evaluate_window(window, perspective, &config.weights);
        }
    }

    // diagonal /
    for row in 0..rows.saturating_sub(3) {
        for col in 0..cols.saturating_sub(3) {
            let window = [
                board.get(row, col),
                board.get(row + 1, col + 1),
                board.get(row + 2, col + 2),
                board.get(row + 3, col + 3),
            ];
            score += evaluate_window(window, perspective, &config.weights);
        }
    }

    // diagonal \
    for row in 3..rows {
        for col in 0..cols.saturating_sub(3) {
            let window = [
                board.get(row, col),
                board.get(row - 1, col + 1),
                board.get(row - 2, col + 2),
                board.get(row - 3, col + 3),
            ];
            score += evaluate_window(window, perspective, &config.weights);
        }
    }

    score
}
