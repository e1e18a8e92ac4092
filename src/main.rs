use anyhow::Result;

use std::io::{stdin, stdout, Write};
use std::path::Path;

use connect4_engine::config::GameConfig;
use connect4_engine::session::{GameSession, GameStatus};

mod display;
use display::draw_board;

fn main() -> Result<()> {
    let config = GameConfig::load_or_default(Path::new("connect4.toml"))?;
    let mut session = GameSession::new(&config);

    let stdin = stdin();

    println!("Welcome to Connect 4\n");

    let mut ai_players = (false, false);

    // choose AI control of player 1
    loop {
        let mut buffer = String::new();
        print!("Is player 1 AI controlled? y/n: ");
        stdout().flush().expect("failed to flush to stdout!");
        stdin.read_line(&mut buffer)?;
        match buffer.to_lowercase().chars().next() {
            Some(_letter @ 'y') => {
                ai_players.0 = true;
                break;
            }
            Some(_letter @ 'n') => break,
            _ => println!("Unknown answer given"),
        }
    }

    // choose AI control of player 2
    loop {
        let mut buffer = String::new();
        print!("Is player 2 AI controlled? y/n: ");
        stdout().flush().expect("failed to flush to stdout!");
        stdin.read_line(&mut buffer)?;
        match buffer.to_lowercase().chars().next() {
            Some(_letter @ 'y') => {
                ai_players.1 = true;
                break;
            }
            Some(_letter @ 'n') => break,
            _ => println!("Unknown answer given"),
        }
    }

    // game loop
    loop {
        draw_board(session.board()).expect("Failed to draw board!");

        match session.status() {
            GameStatus::Playing => {
                let ai_turn = if session.is_player_one_turn() {
                    ai_players.0
                } else {
                    ai_players.1
                };

                if ai_turn {
                    println!("AI is thinking...");
                    stdout().flush().expect("Failed to flush to stdout!");

                    // slow down play if both players are AI
                    if ai_players == (true, true) {
                        std::thread::sleep(std::time::Duration::new(1, 0));
                    }

                    let column = session.ai_move()?;
                    println!("AI plays column {}", column + 1);
                } else {
                    print!("Move input > ");
                    stdout().flush().expect("Failed to flush to stdout!");
                    let mut input_str = String::new();
                    stdin.read_line(&mut input_str)?;

                    let column_one_indexed = match input_str.trim().parse::<usize>() {
                        Err(_) => {
                            println!("Invalid number: {}", input_str.trim());
                            continue;
                        }
                        Ok(column) => column,
                    };
                    if column_one_indexed == 0 {
                        println!("Columns are numbered from 1");
                        continue;
                    }

                    if let Err(err) = session.play(column_one_indexed - 1) {
                        println!("{}", err);
                        // try the move again
                        continue;
                    }
                }
            }

            // end states
            GameStatus::PlayerOneWin => {
                println!("Player 1 wins!");
                break;
            }
            GameStatus::PlayerTwoWin => {
                println!("Player 2 wins!");
                break;
            }
            GameStatus::Draw => {
                println!("Draw!");
                break;
            }
        }
    }
    Ok(())
}
