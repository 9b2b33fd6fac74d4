//! Boop console driver
//!
//! Text-mode game loop: renders the grid, parses `row,col,kind` moves, and
//! optionally hands one seat to the search agent.

use std::io::{self, BufRead, Write};
use std::time::Instant;

use boop::{ranked_placements, Agent, Color, Game, PieceKind, Pos, BOARD_SIZE};

/// Search depth for the computer seat
const AI_DEPTH: u8 = 4;

/// How many heuristic suggestions `hint` prints
const HINT_COUNT: usize = 5;

fn main() {
    println!("Welcome to Boop!");
    println!("Goal: line up 3 cats to win.");
    println!("3 kittens in a row graduate into cat placement rights.");
    println!("Placing a piece boops neighbors of equal or lesser weight away.");
    println!();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let vs_computer = prompt_yes_no(&mut lines, "Play against the computer? (y/n): ");
    let mut game = Game::new();
    let mut agent = if vs_computer {
        Some(Agent::new(Color::Gray))
    } else {
        None
    };

    while !game.game_over {
        render(&game);

        let computer_to_move = agent.is_some() && game.current == Color::Gray;
        if computer_to_move {
            if let Some(agent) = agent.as_mut() {
                if !computer_turn(agent, &mut game) {
                    println!("The computer has no legal move left. Game drawn.");
                    return;
                }
            }
        } else if !human_turn(&mut lines, &mut game) {
            println!("Goodbye!");
            return;
        }
    }

    println!();
    println!("========================================");
    println!("GAME OVER");
    if let Some(winner) = game.winner {
        let player = game.player(winner);
        println!("{} ({}) wins with 3 cats in a row!", player.name, color_name(winner));
    }
    println!("========================================");
    render(&game);
}

/// Let the agent pick and play a move. Returns `false` on stalemate.
fn computer_turn(agent: &mut Agent, game: &mut Game) -> bool {
    println!("Computer is thinking...");
    let start = Instant::now();
    let best = match agent.find_best_move(game, AI_DEPTH) {
        Some(best) => best,
        None => return false,
    };
    let elapsed = start.elapsed();

    println!(
        "Computer plays {},{} ({})  score {}  [{} nodes, {} ms]",
        best.pos.row,
        best.pos.col,
        kind_name(best.kind),
        best.score,
        agent.nodes_explored(),
        elapsed.as_millis()
    );
    game.place_piece(best.pos.row as i32, best.pos.col as i32, best.kind)
}

/// Prompt until the current player enters a valid move. Returns `false` on
/// `quit` or end of input.
fn human_turn(lines: &mut impl Iterator<Item = io::Result<String>>, game: &mut Game) -> bool {
    loop {
        let player = game.player(game.current);
        print!(
            "{} ({}), your move (row,col,kind; k=kitten, c=cat; 'hint', 'quit'): ",
            player.name,
            color_name(game.current)
        );
        let _ = io::stdout().flush();

        let line = match lines.next() {
            Some(Ok(line)) => line,
            _ => return false,
        };
        let input = line.trim();

        match input {
            "" => continue,
            "quit" => return false,
            "hint" => {
                print_hints(game);
                continue;
            }
            _ => {}
        }

        let (row, col, kind) = match parse_move(input) {
            Some(parsed) => parsed,
            None => {
                println!("Bad format. Example: 2,3,k");
                continue;
            }
        };

        match game.validate_placement(row, col, kind) {
            Ok(_) => {
                game.place_piece(row, col, kind);
                return true;
            }
            Err(reason) => println!("Invalid move: {}.", reason),
        }
    }
}

/// Parse `row,col,kind` where kind is `k` (kitten) or `c` (cat)
fn parse_move(input: &str) -> Option<(i32, i32, PieceKind)> {
    let mut parts = input.split(',').map(str::trim);
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    let kind = match parts.next()? {
        "k" | "K" => PieceKind::Kitten,
        "c" | "C" => PieceKind::Cat,
        _ => return None,
    };
    if parts.next().is_some() {
        return None;
    }
    Some((row, col, kind))
}

/// Top heuristic placements for the current player's cheapest available kind
fn print_hints(game: &Game) {
    let player = game.player(game.current);
    let kind = if player.can_place(PieceKind::Kitten) {
        PieceKind::Kitten
    } else if player.can_place(PieceKind::Cat) {
        PieceKind::Cat
    } else {
        println!("No placement rights left.");
        return;
    };

    println!("Top {} placements:", kind_name(kind));
    for (rank, (score, pos)) in ranked_placements(game, kind, game.current)
        .into_iter()
        .take(HINT_COUNT)
        .enumerate()
    {
        println!("  {}. {},{}  score {}", rank + 1, pos.row, pos.col, score);
    }
}

fn render(game: &Game) {
    println!();
    println!("==============================");
    let player = game.player(game.current);
    println!(
        "Turn: {} ({})   kittens: {}  cats: {}",
        player.name,
        color_name(game.current),
        player.kittens,
        player.cats
    );
    println!("==============================");

    print!("  ");
    for col in 0..BOARD_SIZE {
        print!(" {} ", col);
    }
    println!();

    for row in 0..BOARD_SIZE {
        print!("{} ", row);
        for col in 0..BOARD_SIZE {
            match game.board.get(Pos::new(row as u8, col as u8)) {
                Some(piece) => print!(" {} ", piece.symbol()),
                None => print!(" . "),
            }
        }
        println!();
    }
    println!("==============================");
}

fn prompt_yes_no(lines: &mut impl Iterator<Item = io::Result<String>>, prompt: &str) -> bool {
    loop {
        print!("{}", prompt);
        let _ = io::stdout().flush();
        match lines.next() {
            Some(Ok(line)) => match line.trim().to_lowercase().as_str() {
                "y" | "yes" => return true,
                "n" | "no" => return false,
                _ => println!("Please answer y or n."),
            },
            _ => return false,
        }
    }
}

fn color_name(color: Color) -> &'static str {
    match color {
        Color::Orange => "orange",
        Color::Gray => "gray",
    }
}

fn kind_name(kind: PieceKind) -> &'static str {
    match kind {
        PieceKind::Kitten => "kitten",
        PieceKind::Cat => "cat",
    }
}
