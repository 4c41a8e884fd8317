use anyhow::{anyhow, Result};

use std::io::{stdin, stdout, Stdin, Write};

use connect4_player::{board::*, player::*};

mod display;

fn prompt(stdin: &Stdin, message: &str) -> Result<String> {
    print!("{}", message);
    stdout().flush()?;
    let mut buffer = String::new();
    if stdin.read_line(&mut buffer)? == 0 {
        return Err(anyhow!("input closed"));
    }
    Ok(buffer)
}

fn ask_yes_no(stdin: &Stdin, question: &str) -> Result<bool> {
    loop {
        let answer = prompt(stdin, &format!("{} y/n: ", question))?;
        match answer.to_lowercase().chars().next() {
            Some('y') => return Ok(true),
            Some('n') => return Ok(false),
            _ => println!("Unknown answer given"),
        }
    }
}

fn ask_ply(stdin: &Stdin, side: Side) -> Result<u32> {
    loop {
        let answer = prompt(stdin, &format!("How many moves ahead should {} look? ", side))?;
        match answer.trim().parse::<u32>() {
            Ok(ply) => return Ok(ply),
            Err(_) => println!("Invalid number: {}", answer.trim()),
        }
    }
}

/// Asks whether `side` is computer controlled, and if so how it should play
fn configure(stdin: &Stdin, side: Side) -> Result<Option<Player>> {
    if !ask_yes_no(stdin, &format!("Is player {} AI controlled?", side))? {
        return Ok(None);
    }
    let ply = ask_ply(stdin, side)?;
    let tie_break = if ask_yes_no(stdin, "Break ties randomly?")? {
        TieBreak::Random
    } else {
        TieBreak::LowestIndex
    };
    Ok(Some(Player::new(side, ply, tie_break)))
}

fn main() -> Result<()> {
    let mut board = Board::default();
    let stdin = stdin();

    println!("Welcome to Connect 4\n");

    let players = (
        configure(&stdin, Side::First)?,
        configure(&stdin, Side::Second)?,
    );
    for player in [&players.0, &players.1].iter().filter_map(|p| p.as_ref()) {
        println!("{}", player);
    }

    let mut side = Side::First;

    // game loop
    loop {
        display::draw(&board)?;

        match board.state() {
            GameState::Playing => {
                let ai = match side {
                    Side::First => players.0,
                    Side::Second => players.1,
                };
                let column = match ai {
                    Some(player) => {
                        println!("AI ({}) is thinking...", player);
                        stdout().flush()?;

                        // slow down play if both players are AI
                        if players.0.is_some() && players.1.is_some() {
                            std::thread::sleep(std::time::Duration::new(1, 0));
                        }

                        let report = player.search(&mut board);
                        let column = player.select_move(&report.scores);
                        println!(
                            "Column scores: {:?}, positions searched: {}",
                            report.scores, report.node_count
                        );
                        println!("{} plays column {}", side, column);
                        column
                    }
                    None => {
                        let input = prompt(&stdin, &format!("{}'s move > ", side))?;
                        match input.trim().parse::<usize>() {
                            Err(_) => {
                                println!("Invalid number: {}", input.trim());
                                continue;
                            }
                            Ok(column) => column,
                        }
                    }
                };

                if let Err(err) = board.play_checked(column, side) {
                    println!("{}", err);
                    // try the move again
                    continue;
                }
                side = side.opponent();
            }

            // end states
            GameState::Won(winner) => {
                println!("{}\n", board);
                println!("{} wins!", winner);
                break;
            }
            GameState::Draw => {
                println!("{}\n", board);
                println!("Draw!");
                break;
            }
        }
    }
    Ok(())
}
