use std::io::{self, Write};
use std::thread;

use clap::Parser;

use tictactoe_duel::config::Args;
use tictactoe_duel::{Heuristic, Phase, Placement, RoundController, RoundOutcome, Side};

enum Command {
    Place(usize, usize),
    NewRound,
    Quit,
}

fn parse_command(input: &str) -> Option<Command> {
    match input.trim() {
        "q" | "quit" => return Some(Command::Quit),
        "n" | "new" => return Some(Command::NewRound),
        _ => {},
    }
    let mut parts = input.split_whitespace();
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(Command::Place(row, col))
}

fn read_line(prompt: &str) -> anyhow::Result<Option<String>> {
    print!("{}", prompt);
    io::stdout().flush()?;
    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }
    Ok(Some(input))
}

type Game = RoundController<Heuristic<rand::rngs::StdRng>>;

// A finished round is only credited once the next one starts
fn print_scores(game: &Game) {
    let (mut human, mut computer) = game.scores();
    if let Phase::RoundOver(outcome) = game.phase() {
        match outcome.winner() {
            Some(Side::Human) => human += 1,
            Some(Side::Opponent) => computer += 1,
            None => {},
        }
    }
    println!("You: {}  Computer: {}", human, computer);
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut game = RoundController::new(Heuristic::with_rng(args.rng()));
    game.set_observer(|board| println!("\n{}", board));

    print_scores(&game);
    println!("\n{}", game.board());

    loop {
        match game.phase() {
            Phase::AwaitingOpponent => {
                if let Some(turn) = game.pending_turn() {
                    thread::sleep(args.delay());
                    game.play_opponent_turn(turn)?;
                }
            },
            Phase::RoundOver(outcome) => {
                let message = match outcome {
                    RoundOutcome::Won(Side::Human, _) => "You won the game!",
                    RoundOutcome::Won(Side::Opponent, _) => "You lost the game!",
                    _ => "It's a draw!",
                };
                println!("{}\n", message);
                println!("{}", game.board().highlighted(game.winning_line().as_ref()));

                match read_line("Play again? [y/n] ")? {
                    Some(answer) if answer.trim().eq_ignore_ascii_case("y") => {
                        game.start_new_round();
                        print_scores(&game);
                    },
                    _ => break,
                }
            },
            Phase::AwaitingHuman => {
                let Some(input) = read_line("Your move (row col, n = new round, q = quit): ")? else {
                    break;
                };
                match parse_command(&input) {
                    Some(Command::Place(row, col)) => {
                        if game.attempt_human_placement(row, col)? == Placement::Ignored {
                            println!("You can't place there.");
                        }
                    },
                    Some(Command::NewRound) => {
                        game.start_new_round();
                        print_scores(&game);
                    },
                    Some(Command::Quit) => break,
                    None => println!("Enter a row and a column between 0 and 2, e.g. `1 2`"),
                }
            },
        }
    }

    print_scores(&game);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_command() {
        assert!(matches!(parse_command("1 2\n"), Some(Command::Place(1, 2))));
        assert!(matches!(parse_command("  0   0 "), Some(Command::Place(0, 0))));
        assert!(matches!(parse_command("q\n"), Some(Command::Quit)));
        assert!(matches!(parse_command("n"), Some(Command::NewRound)));
        assert!(parse_command("1").is_none());
        assert!(parse_command("1 2 3").is_none());
        assert!(parse_command("a b").is_none());
        assert!(parse_command("-1 0").is_none());
    }
}
