//! A look-ahead agent for playing the board game 'Connect 4'
//!
//! The agent scores every column with a plain minimax search of a
//! configurable depth (ply), then picks the best-scoring column using
//! either random or lowest-index tie-breaking.
//!
//! # Basic Usage
//!
//! ```
//! use connect4_player::{board::{Board, Side}, player::{Player, TieBreak}};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! // three 'X' pegs along the bottom row, 'O' stacked in the last column
//! let mut board = Board::from_moves(7, 6, "061626")?;
//! let player = Player::new(Side::First, 1, TieBreak::LowestIndex);
//!
//! assert_eq!(player.next_move(&mut board), 3);
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod board;

pub mod player;


/// The default width of the game board in tiles
pub const DEFAULT_WIDTH: usize = 7;

/// The default height of the game board in tiles
pub const DEFAULT_HEIGHT: usize = 6;

// move selection relies on illegal columns never outscoring a legal one
const_assert!(player::INVALID_MOVE < player::BAD_MOVE);
const_assert!(player::BAD_MOVE < player::OKAY_MOVE);
const_assert!(player::OKAY_MOVE < player::GOOD_MOVE);
