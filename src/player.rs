//! A look-ahead agent that plays Connect 4 with plain minimax

use rand::Rng;

use std::fmt;

use crate::board::*;

/// The score of a column that cannot be played
pub const INVALID_MOVE: i32 = -1;
/// The score of a position lost by the player to move
pub const BAD_MOVE: i32 = 0;
/// The score of an undecided position
pub const OKAY_MOVE: i32 = 50;
/// The score of a position won by the player to move
pub const GOOD_MOVE: i32 = 100;

/// How to pick between columns sharing the best score
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum TieBreak {
    Random,
    LowestIndex,
}

/// The column scores of a search along with diagnostics
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct SearchReport {
    /// One score per column, see [Column Scoring]
    ///
    /// [Column Scoring]: Player#column-scoring
    pub scores: Vec<i32>,
    /// The number of positions whose columns were scored, the root included
    pub node_count: usize,
}

/// An agent that chooses moves by looking a fixed number of moves ahead
///
/// # Column Scoring
/// Full columns score [`INVALID_MOVE`]. If either side has already won, every
/// playable column scores [`GOOD_MOVE`] or [`BAD_MOVE`] from the current
/// position without being explored further. Otherwise a player with no ply
/// left scores every playable column [`OKAY_MOVE`], and a player with ply left
/// plays the column, lets its opponent score the reply with one less ply, and
/// scores the column [`GOOD_MOVE`] minus the opponent's best reply.
///
/// Note that the won-position check looks at the board *before* the column is
/// played, so a side with an open winning line will not be told apart from
/// the rest of the columns once the game is decided.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Player {
    side: Side,
    ply: u32,
    tie_break: TieBreak,
}

impl Player {
    pub fn new(side: Side, ply: u32, tie_break: TieBreak) -> Self {
        Self {
            side,
            ply,
            tie_break,
        }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn ply(&self) -> u32 {
        self.ply
    }

    pub fn tie_break(&self) -> TieBreak {
        self.tie_break
    }

    pub fn opponent(&self) -> Side {
        self.side.opponent()
    }

    /// Scores a decided board: [`GOOD_MOVE`] if this player has won,
    /// [`BAD_MOVE`] if the opponent has, [`OKAY_MOVE`] otherwise
    pub fn evaluate(&self, board: &Board) -> i32 {
        evaluate(board, self.side)
    }

    /// Scores every column of the board, leaving the board unchanged
    pub fn score_columns(&self, board: &mut Board) -> Vec<i32> {
        self.search(board).scores
    }

    /// Scores every column of the board, also counting the positions visited
    pub fn search(&self, board: &mut Board) -> SearchReport {
        let mut node_count = 0;
        let scores = score_columns(board, self.side, self.ply, &mut node_count);
        SearchReport { scores, node_count }
    }

    /// Picks the best-scoring column, breaking ties with the thread-local
    /// random number generator
    pub fn select_move(&self, scores: &[i32]) -> usize {
        self.select_move_with(scores, &mut rand::thread_rng())
    }

    /// Picks the best-scoring column, breaking ties with the given random
    /// number generator
    ///
    /// # Panics
    /// Panics if `scores` is empty.
    pub fn select_move_with<R: Rng + ?Sized>(&self, scores: &[i32], rng: &mut R) -> usize {
        assert!(!scores.is_empty(), "cannot select a move from no columns");
        let max_score = scores.iter().copied().fold(i32::MIN, i32::max);
        let tied: Vec<usize> = scores
            .iter()
            .enumerate()
            .filter(|&(_, &score)| score == max_score)
            .map(|(column, _)| column)
            .collect();

        match self.tie_break {
            TieBreak::Random => tied[rng.gen_range(0..tied.len())],
            TieBreak::LowestIndex => tied[0],
        }
    }

    /// Chooses the next column to play
    ///
    /// The board must have at least one playable column and no winner.
    pub fn next_move(&self, board: &mut Board) -> usize {
        self.next_move_with(board, &mut rand::thread_rng())
    }

    /// Chooses the next column to play, breaking ties with the given random
    /// number generator
    pub fn next_move_with<R: Rng + ?Sized>(&self, board: &mut Board, rng: &mut R) -> usize {
        let scores = self.score_columns(board);
        self.select_move_with(&scores, rng)
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tie_break = match self.tie_break {
            TieBreak::Random => "randomly",
            TieBreak::LowestIndex => "deterministically",
        };
        write!(
            f,
            "Player for {}, ply = {}, breaks ties {}",
            self.side, self.ply, tie_break
        )
    }
}

fn evaluate(board: &Board, side: Side) -> i32 {
    if board.has_won(side) {
        GOOD_MOVE
    } else if board.has_won(side.opponent()) {
        BAD_MOVE
    } else {
        OKAY_MOVE
    }
}

/// Minimax over every column for `side`, with `ply` moves of look-ahead
fn score_columns(board: &mut Board, side: Side, ply: u32, node_count: &mut usize) -> Vec<i32> {
    *node_count += 1;

    // a win on the board decides every column, whichever one is played
    let decided = board.has_won(side) || board.has_won(side.opponent());

    (0..board.width())
        .map(|column| {
            if !board.allows_move(column) {
                INVALID_MOVE
            } else if decided {
                evaluate(board, side)
            } else if ply == 0 {
                OKAY_MOVE
            } else {
                let mut next = board.play_scoped(column, side);
                let replies = score_columns(&mut next, side.opponent(), ply - 1, node_count);
                // a reply exists for every column, so the maximum is always defined
                GOOD_MOVE - replies.into_iter().fold(i32::MIN, i32::max)
            }
        })
        .collect()
}
