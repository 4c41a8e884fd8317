use anyhow::Result;
use crossterm::{
    cursor::MoveTo,
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};

use std::io::{stdout, Write};

use connect4_player::board::{Board, Cell, Side};

/// Draws the board at the cursor with a row of column labels above it
pub fn draw(board: &Board) -> Result<()> {
    let mut stdout = stdout();

    let labels: String = (0..board.width()).map(|x| (x % 10).to_string()).collect();
    stdout.queue(PrintStyledContent(style(labels + "\n")))?;
    for _ in 0..board.height() {
        stdout.queue(PrintStyledContent(style("\n")))?;
    }
    stdout.flush()?;

    // the cursor now sits on the line below the bottom row
    let (origin_x, origin_y) = crossterm::cursor::position()?;
    let top = origin_y.saturating_sub(board.height() as u16);

    for (row_idx, row) in board.rows().enumerate() {
        for (column, cell) in row.iter().enumerate() {
            stdout
                .queue(MoveTo(origin_x + column as u16, top + row_idx as u16))?
                .queue(PrintStyledContent(
                    style(cell_glyph(cell))
                        .attribute(Attribute::Bold)
                        .on(Color::DarkBlue)
                        .with(match cell {
                            Cell::Occupied(Side::First) => Color::Red,
                            Cell::Occupied(Side::Second) => Color::Yellow,
                            Cell::Empty => Color::DarkBlue,
                        }),
                ))?;
        }
    }
    stdout
        .queue(MoveTo(origin_x, origin_y))?
        .queue(PrintStyledContent(style("\n")))?;
    stdout.flush()?;
    Ok(())
}

fn cell_glyph(cell: &Cell) -> char {
    match cell {
        Cell::Empty => 'O',
        Cell::Occupied(side) => side.symbol(),
    }
}
