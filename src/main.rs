//! # Deadblock Terminal Arena
//!
//! Interactive front end over the engine: human-vs-AI, AI-vs-AI, or
//! human-vs-human on stdin/stdout, with colored board rendering. The binary
//! owns the session loop (validate → commit → resolve → maybe AI move) and
//! the RNG; the engine library stays pure.
//!
//! ## Usage
//! ```text
//! deadblock                          # human (player 1) vs hard AI
//! deadblock --player1 ai --seed 7    # reproducible AI-vs-AI game
//! ```
//! Moves are entered as `(piece,rotation,reflect,row,col)`, for example
//! `(W,1,0,3,4)`. `undo` takes back the last two plies against an AI
//! opponent (one in human-vs-human); `quit` resigns.

use std::io::{self, BufRead, Write};

use clap::{Parser, ValueEnum};
use colored::Colorize;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

use deadblock::{
    select_move, Board, Difficulty, Game, Move, Outcome, Player, BOARD_SIZE,
};

/// Who controls a seat.
#[derive(Clone, Copy, PartialEq, Eq, Debug, ValueEnum)]
enum Seat {
    Human,
    Ai,
}

/// Pentomino blocking game on an 8×8 board.
#[derive(Parser, Debug)]
#[command(name = "deadblock", about = "Pentomino blocking game with AI opponents")]
struct Args {
    /// Controller for player 1
    #[arg(long, value_enum, default_value = "human")]
    player1: Seat,

    /// Controller for player 2
    #[arg(long, value_enum, default_value = "ai")]
    player2: Seat,

    /// AI difficulty for player 1 (unrecognized values fall back to easy)
    #[arg(long, default_value = "easy")]
    difficulty1: Difficulty,

    /// AI difficulty for player 2
    #[arg(long, default_value = "hard")]
    difficulty2: Difficulty,

    /// RNG seed for reproducible AI games; random when omitted
    #[arg(long)]
    seed: Option<u64>,
}

impl Args {
    fn seat(&self, player: Player) -> Seat {
        match player {
            Player::One => self.player1,
            Player::Two => self.player2,
        }
    }

    fn difficulty(&self, player: Player) -> Difficulty {
        match player {
            Player::One => self.difficulty1,
            Player::Two => self.difficulty2,
        }
    }
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let seed = args.seed.unwrap_or_else(rand::random);
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    log::info!("starting game with seed {}", seed);

    let mut game = Game::new();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!();
        print_board(game.board());
        print_pool(&game);

        let outcome = game.outcome();
        if outcome.is_over() {
            announce(outcome);
            break;
        }

        let mover = game.to_move();
        match args.seat(mover) {
            Seat::Ai => {
                let difficulty = args.difficulty(mover);
                match select_move(game.board(), game.used_pieces(), difficulty, mover, &mut rng) {
                    Ok(mv) => {
                        println!("{} ({} AI) plays {}", mover, difficulty, mv);
                        if let Err(err) = game.try_move(mv) {
                            // Unreachable: the selector only returns legal moves.
                            eprintln!("engine rejected its own move {}: {}", mv, err);
                            return;
                        }
                    }
                    Err(err) => {
                        // Unreachable: the outcome check above already ran.
                        eprintln!("{}", err);
                        return;
                    }
                }
            }
            Seat::Human => {
                print!("{} move (piece,rotation,reflect,row,col)> ", mover);
                let _ = io::stdout().flush();
                let line = match lines.next() {
                    Some(Ok(line)) => line,
                    _ => {
                        println!("input closed, exiting");
                        return;
                    }
                };
                match line.trim() {
                    "quit" | "q" => {
                        println!("{} resigns", mover);
                        return;
                    }
                    "undo" | "u" => {
                        // Take back the opponent's reply too when it was an AI.
                        if game.undo().is_some() && args.seat(game.to_move()) == Seat::Ai {
                            game.undo();
                        }
                        continue;
                    }
                    raw => match raw.parse::<Move>() {
                        Ok(mv) => match game.try_move(mv) {
                            Ok(_) => {}
                            Err(err) => println!("{} {}", "rejected:".red(), err),
                        },
                        Err(err) => println!("{} {}", "bad move:".red(), err),
                    },
                }
            }
        }
    }
}

/// Renders the board with provenance letters, colored by owner.
fn print_board(board: &Board) {
    print!("  ");
    for col in 0..BOARD_SIZE {
        print!(" {}", col);
    }
    println!();
    for row in 0..BOARD_SIZE {
        print!(" {}", row);
        for col in 0..BOARD_SIZE {
            match (board.owner(row, col), board.piece_at(row, col)) {
                (Some(Player::One), Some(piece)) => print!(" {}", piece.to_string().red().bold()),
                (Some(Player::Two), Some(piece)) => print!(" {}", piece.to_string().blue().bold()),
                _ => print!(" {}", ".".dimmed()),
            }
        }
        println!();
    }
}

/// Lists the pieces still available to either player.
fn print_pool(game: &Game) {
    let pool: Vec<String> = game
        .used_pieces()
        .complement()
        .iter()
        .map(|piece| piece.to_string())
        .collect();
    println!("unused pieces: {}", pool.join(" "));
}

fn announce(outcome: Outcome) {
    match outcome {
        Outcome::Ongoing => {}
        Outcome::BlockingWin(winner) => {
            println!("{}", format!("{} wins: opponent has no legal move", winner).green().bold());
        }
        Outcome::ExhaustionWin(winner) => {
            println!("{}", format!("{} wins on area", winner).green().bold());
        }
        Outcome::Draw => println!("{}", "draw: equal areas".yellow().bold()),
    }
}
