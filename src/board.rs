use anyhow::{anyhow, Result};

use std::fmt;
use std::ops::{Deref, DerefMut};

use crate::{DEFAULT_HEIGHT, DEFAULT_WIDTH};

/// One of the two players, displayed as 'X' and 'O'
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Side {
    First,
    Second,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Side::First => 'X',
            Side::Second => 'O',
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Cell {
    Empty,
    Occupied(Side),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            _ => false,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Occupied(side) => side.symbol(),
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum GameState {
    Playing,
    Won(Side),
    Draw,
}

/// A Connect 4 grid of arbitrary size
///
/// # Notes
/// Cells are stored row-major, with row 0 at the top of the board. Pegs only
/// ever enter a column at its lowest empty cell and leave it from its topmost
/// occupied cell, so the occupied cells of a column are always contiguous
/// from the bottom.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an empty board, failing if either dimension is zero
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(anyhow!(
                "Invalid board size {}x{}, both dimensions must be at least 1",
                width,
                height
            ));
        }
        Ok(Self::empty(width, height))
    }

    fn empty(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Empty; width * height],
        }
    }

    /// Creates a board from a string of zero-indexed columns, played
    /// alternately starting with [`Side::First`]
    pub fn from_moves<S: AsRef<str>>(width: usize, height: usize, moves: S) -> Result<Self> {
        let mut board = Self::new(width, height)?;
        board.set_board(moves)?;
        Ok(board)
    }

    /// Plays a string of zero-indexed columns onto this board, alternating
    /// sides starting with [`Side::First`]
    ///
    /// Won positions are not rejected, play simply continues.
    pub fn set_board<S: AsRef<str>>(&mut self, moves: S) -> Result<()> {
        let mut side = Side::First;
        for column_char in moves.as_ref().chars() {
            match column_char.to_digit(10) {
                Some(column) => self.play_checked(column as usize, side)?,
                None => return Err(anyhow!("could not parse '{}' as a valid move", column_char)),
            }
            side = side.opponent();
        }
        Ok(())
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cell(&self, row: usize, column: usize) -> Cell {
        self.cells[row * self.width + column]
    }

    /// Iterates over the rows of the board from the top down
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width)
    }

    pub fn clear(&mut self) {
        for cell in self.cells.iter_mut() {
            *cell = Cell::Empty;
        }
    }

    pub fn allows_move(&self, column: usize) -> bool {
        column < self.width && self.cell(0, column).is_empty()
    }

    pub fn is_full(&self) -> bool {
        !(0..self.width).any(|column| self.allows_move(column))
    }

    /// Drops a peg for `side` into `column`
    ///
    /// # Panics
    /// Panics if the column is already full. Legality is the caller's
    /// responsibility, see [`Board::play_checked`].
    pub fn apply_move(&mut self, column: usize, side: Side) {
        debug_assert!(column < self.width, "column {} out of range", column);
        // the peg comes to rest just above the first occupied cell from the top
        let row = (0..self.height)
            .take_while(|&row| self.cell(row, column).is_empty())
            .last();
        match row {
            Some(row) => self.cells[row * self.width + column] = Cell::Occupied(side),
            None => panic!("cannot play in full column {}", column),
        }
    }

    /// Removes the topmost peg from `column`, doing nothing if it is empty
    pub fn undo_move(&mut self, column: usize) {
        debug_assert!(column < self.width, "column {} out of range", column);
        if let Some(row) = (0..self.height).find(|&row| !self.cell(row, column).is_empty()) {
            self.cells[row * self.width + column] = Cell::Empty;
        }
    }

    /// Plays a move after checking that it is legal
    pub fn play_checked(&mut self, column: usize, side: Side) -> Result<()> {
        if column >= self.width {
            return Err(anyhow!(
                "Invalid move, column {} out of range. Columns must be between 0 and {}",
                column,
                self.width - 1
            ));
        }
        if !self.allows_move(column) {
            return Err(anyhow!("Invalid move, column {} full", column));
        }
        self.apply_move(column, side);
        Ok(())
    }

    /// Plays a move that is taken back when the returned guard is dropped
    pub fn play_scoped(&mut self, column: usize, side: Side) -> PlayedMove<'_> {
        self.apply_move(column, side);
        PlayedMove {
            board: self,
            column,
        }
    }

    /// Checks for four pegs of `side` in a row, column or either diagonal
    pub fn has_won(&self, side: Side) -> bool {
        let target = Cell::Occupied(side);
        // right, down, down-right and down-left
        for &(dy, dx) in [(0i32, 1i32), (1, 0), (1, 1), (1, -1)].iter() {
            for row in 0..self.height as i32 {
                for column in 0..self.width as i32 {
                    let (end_y, end_x) = (row + 3 * dy, column + 3 * dx);
                    if end_y >= self.height as i32 || end_x < 0 || end_x >= self.width as i32 {
                        continue;
                    }
                    if (0..4).all(|i| {
                        self.cell((row + i * dy) as usize, (column + i * dx) as usize) == target
                    }) {
                        return true;
                    }
                }
            }
        }
        false
    }

    pub fn state(&self) -> GameState {
        if self.has_won(Side::First) {
            GameState::Won(Side::First)
        } else if self.has_won(Side::Second) {
            GameState::Won(Side::Second)
        } else if self.is_full() {
            GameState::Draw
        } else {
            GameState::Playing
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for cell in row {
                write!(f, "|{}", cell.symbol())?;
            }
            writeln!(f, "|")?;
        }
        writeln!(f, "{}", "-".repeat(2 * self.width + 1))?;
        // labels wrap at 10 to keep them aligned with the cells
        for column in 0..self.width {
            write!(f, " {}", column % 10)?;
        }
        Ok(())
    }
}

/// A move played with [`Board::play_scoped`], undone when dropped
pub struct PlayedMove<'a> {
    board: &'a mut Board,
    column: usize,
}

impl Deref for PlayedMove<'_> {
    type Target = Board;

    fn deref(&self) -> &Self::Target {
        self.board
    }
}

impl DerefMut for PlayedMove<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.board
    }
}

impl Drop for PlayedMove<'_> {
    fn drop(&mut self) {
        self.board.undo_move(self.column);
    }
}
