//! Console blackjack against the dealer.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use bjsim::{
    Action, BetError, Draw, Game, GameOptions, GameState, Hand, HandOutcome, RoundResult,
};
use clap::Parser;
use log::{LevelFilter, Log, Metadata, Record};

/// Play single-player blackjack in the terminal.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Number of decks in the shoe (prompted for if omitted).
    #[arg(long)]
    decks: Option<u8>,
    /// Seed for the shuffle (defaults to the current time).
    #[arg(long)]
    seed: Option<u64>,
    /// Print engine log records to stderr.
    #[arg(short, long)]
    verbose: bool,
}

struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        eprintln!("[{}] {}", record.level(), record.args());
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn main() {
    let args = Args::parse();

    if args.verbose && log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(LevelFilter::Debug);
    }

    let decks = match args.decks {
        Some(decks) if decks > 0 => decks,
        _ => prompt_decks(),
    };
    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });

    let mut game = match Game::new(GameOptions::default().with_decks(decks), seed) {
        Ok(game) => game,
        Err(err) => {
            println!("Cannot start game: {err}");
            return;
        }
    };

    loop {
        prompt_bet(&mut game);

        match game.deal() {
            Ok(draws) => report_reshuffles(&draws),
            Err(err) => {
                println!("Deal error: {err}");
                return;
            }
        }

        if game.state() == GameState::RoundComplete {
            print_hands(&game);
            if let Some(result) = game.result() {
                print_outcome(result);
            }
        }

        while game.state() == GameState::PlayerTurn {
            print_hands_with_bet(&game);
            let action = prompt_action();

            match game.act(action) {
                Ok(draw) => report_reshuffles(draw.as_slice()),
                Err(err) => {
                    println!("Action error: {err}");
                    return;
                }
            }

            if action == Action::DoubleDown {
                print_hands_with_bet(&game);
            }

            match game.state() {
                GameState::DealerTurn
                    if action != Action::DoubleDown && game.player_hand().value() == 21 =>
                {
                    print_hands_with_bet(&game);
                    println!("Your hand now has a value of 21.");
                }
                GameState::RoundComplete => {
                    if action != Action::DoubleDown {
                        print_hands_with_bet(&game);
                    }
                    if let Some(result) = game.result() {
                        print_outcome(result);
                    }
                }
                _ => {}
            }
        }

        if game.state() == GameState::DealerTurn {
            match game.dealer_play() {
                Ok(drawn) => {
                    let cards = game.dealer_hand().cards();
                    let mut shown = Hand::new();
                    for &card in &cards[..cards.len().saturating_sub(drawn.len())] {
                        shown.add_card(card);
                    }
                    for draw in &drawn {
                        println!("The dealer's hand must still be resolved.");
                        report_reshuffles(&[*draw]);
                        shown.add_card(draw.card);
                        println!("The dealer's hand: {shown}");
                    }
                }
                Err(err) => {
                    println!("Dealer error: {err}");
                    return;
                }
            }
        }

        if game.state() == GameState::Payout {
            match game.settle() {
                Ok(result) => {
                    println!("Outcome of this hand:");
                    print_hands_with_bet(&game);
                    print_outcome(&result);
                }
                Err(err) => {
                    println!("Showdown error: {err}");
                    return;
                }
            }
        }

        match game.clear_round() {
            Ok(result) => print_total(&result),
            Err(err) => {
                println!("Clear error: {err}");
                return;
            }
        }

        if !prompt_continue() {
            println!("Thanks for playing!");
            break;
        }
        println!();
    }
}

fn prompt_line(prompt: &str) -> Option<String> {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(input.trim().to_string()),
    }
}

fn read_or_exit(prompt: &str) -> String {
    prompt_line(prompt).unwrap_or_else(|| {
        println!();
        std::process::exit(0)
    })
}

fn prompt_decks() -> u8 {
    loop {
        match read_or_exit("Enter number of decks to be in the shoe: ").parse::<u8>() {
            Ok(decks) if decks > 0 => return decks,
            _ => println!("Please enter a positive number of decks."),
        }
    }
}

fn prompt_bet(game: &mut Game) {
    loop {
        let Ok(amount) = read_or_exit("Enter your bet in dollars: ").parse::<f64>() else {
            println!("Please enter a nonnegative bet.");
            continue;
        };

        match game.place_bet(amount) {
            Ok(()) => return,
            Err(BetError::Negative | BetError::NotFinite) => {
                println!("Please enter a nonnegative bet.");
            }
            Err(err @ BetError::InvalidState) => {
                println!("Bet error: {err}");
                std::process::exit(1);
            }
        }
    }
}

fn prompt_action() -> Action {
    loop {
        let input = read_or_exit("Enter hit, stand, or double down: ");
        match input.parse() {
            Ok(action) => return action,
            Err(_) => println!("Invalid input: {input}"),
        }
    }
}

fn prompt_continue() -> bool {
    loop {
        let input = read_or_exit("Would you like to play another hand? Enter yes or no: ");
        match input.as_str() {
            "yes" => return true,
            "no" => return false,
            _ => println!("Invalid input: {input}"),
        }
    }
}

fn report_reshuffles(draws: &[Draw]) {
    for draw in draws {
        if draw.reshuffled {
            println!("Discarded cards have been reshuffled and put back into the shoe.");
        }
    }
}

fn print_hands(game: &Game) {
    println!("The dealer's hand: {}", game.dealer_hand());
    println!("Your hand: {}", game.player_hand());
}

fn print_hands_with_bet(game: &Game) {
    print_hands(game);
    println!("Your bet: {} dollars", game.bet());
    println!();
}

fn print_outcome(result: &RoundResult) {
    let bet = result.bet;
    match result.outcome {
        HandOutcome::Blackjack => {
            println!("You got a blackjack! You win {} dollars.", result.net);
        }
        HandOutcome::Bust => println!("Bust! You lose {bet} dollars."),
        HandOutcome::DealerBust => {
            println!("The dealer busted, so you win {bet} dollars.");
        }
        HandOutcome::Lose => println!(
            "The dealer's hand had a higher value than yours, so you lose {bet} dollars."
        ),
        HandOutcome::Win => println!(
            "The dealer's hand had a lower value than yours, so you win {bet} dollars."
        ),
        HandOutcome::Push => println!(
            "The dealer's hand had the same value as yours, so you don't win or lose any money."
        ),
    }
    println!();
}

fn print_total(result: &RoundResult) {
    if result.bankroll < 0.0 {
        println!("So far you've lost a total of {} dollars.", -result.bankroll);
    } else {
        println!("So far you've won a total of {} dollars.", result.bankroll);
    }
}
