//! CLI Parcheesi example (type 'q' to quit).
//!
//! Set `RUST_LOG=parcheesi=debug` to see engine events.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::thread;
use std::time::{SystemTime, UNIX_EPOCH};

use parcheesi::{Color, GameState, Pawn, PawnId, PawnStatus, Session, SessionOptions};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    println!("Parcheesi CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let options = SessionOptions::default();
    let mut session = Session::new(options, seed);

    let name = prompt_line("Your name: ");
    if let Err(err) = session.join(if name.is_empty() { "Player" } else { name.as_str() }) {
        println!("Join error: {err}");
        return;
    }

    let mut shown = 0;
    loop {
        shown = print_new_logs(session.state(), shown);

        if let Some(winner) = session.state().winner {
            print_board(session.state());
            println!("\nGame over. Winner: {}", colorize(winner.as_str(), color_code(winner)));
            break;
        }

        // Let the computer players (and auto-skips) run until it is our move.
        if let Some(deadline) = session.next_deadline() {
            let wait = deadline.saturating_sub(session.now());
            thread::sleep(wait);
            session.advance(wait);
            continue;
        }

        print_board(session.state());

        if session.state().can_roll {
            match prompt_line("Press enter to roll: ").as_str() {
                "q" | "quit" => break,
                _ => {
                    if let Err(err) = session.roll() {
                        println!("Roll error: {err}");
                    }
                }
            }
            continue;
        }

        let movable = session.state().movable_pawns();
        let choices = movable
            .iter()
            .map(|id| format!("{}", id.index))
            .collect::<Vec<_>>()
            .join("/");
        let input = prompt_line(&format!("Move pawn [{choices}] or (s)kip: "));
        let result = match input.as_str() {
            "q" | "quit" => break,
            "s" | "skip" => session.skip(),
            other => match other.parse::<u8>() {
                Ok(index) => session.click_pawn(PawnId::new(Color::Red, index)),
                Err(_) => {
                    println!("Please enter a pawn number.");
                    continue;
                }
            },
        };
        if let Err(err) = result {
            println!("Move error: {err}");
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn print_new_logs(state: &GameState, shown: usize) -> usize {
    for entry in &state.logs[shown.min(state.logs.len())..] {
        println!("  {}", colorize(entry, "90"));
    }
    state.logs.len()
}

fn print_board(state: &GameState) {
    println!();
    for (seat, player) in state.players.iter().enumerate() {
        let marker = if seat == state.current_turn { ">" } else { " " };
        let pawns = player
            .pawns
            .iter()
            .map(format_pawn)
            .collect::<Vec<_>>()
            .join("  ");
        let name = colorize(&player.name, color_code(player.color));
        println!("{marker} {name:<20} {pawns}");
    }

    let dice = state.dice.faces();
    if !dice.is_empty() {
        println!("\nDice: {dice:?} (sum {})", state.dice.sum());
    }
}

fn format_pawn(pawn: &Pawn) -> String {
    let place = match pawn.status {
        PawnStatus::Start => "start".to_string(),
        PawnStatus::OnTrack { position } => format!("@{position}"),
        PawnStatus::InHomeLane { offset } => format!("lane {offset}"),
        PawnStatus::Home => "home".to_string(),
    };
    format!("{}:{place}", pawn.id.index)
}

const fn color_code(color: Color) -> &'static str {
    match color {
        Color::Red => "31",
        Color::Green => "32",
        Color::Yellow => "33",
        Color::Blue => "34",
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
