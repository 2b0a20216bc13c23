//! Game integration tests.

#![allow(clippy::float_cmp)]

use bjsim::{
    Action, ActionError, BetError, Card, DealError, Game, GameOptions, GameState, HandOutcome,
    OptionsError, Rank, RoundError, ShowdownError, Shoe, Suit,
};

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

fn set_shoe_from_draws(game: &mut Game, draws: &[Card]) {
    let mut cards: Vec<Card> = draws.to_vec();
    cards.reverse();
    game.shoe = Shoe::from_cards(cards);
}

fn new_game() -> Game {
    Game::new(GameOptions::default(), 42).unwrap()
}

#[test]
fn zero_decks_rejected() {
    let options = GameOptions::default().with_decks(0);
    assert_eq!(Game::new(options, 1).unwrap_err(), OptionsError::NoDecks);
}

#[test]
fn new_game_shuffles_full_shoe() {
    let game = Game::new(GameOptions::default().with_decks(4), 3).unwrap();
    assert_eq!(game.cards_remaining(), 4 * 52);
    assert_ne!(game.shoe, Shoe::new(4));
    assert!(game.discard.is_empty());
    assert_eq!(game.bankroll(), 0.0);
}

#[test]
fn bet_errors() {
    let mut game = new_game();

    assert_eq!(game.place_bet(-1.0).unwrap_err(), BetError::Negative);
    assert_eq!(game.place_bet(f64::NAN).unwrap_err(), BetError::NotFinite);
    assert_eq!(
        game.place_bet(f64::INFINITY).unwrap_err(),
        BetError::NotFinite
    );
    assert_eq!(game.state(), GameState::AwaitingBet);

    game.place_bet(0.0).unwrap();
    assert_eq!(game.state(), GameState::InitialDeal);
    assert_eq!(game.place_bet(5.0).unwrap_err(), BetError::InvalidState);
}

#[test]
fn deal_errors() {
    let mut game = new_game();
    assert_eq!(game.deal().unwrap_err(), DealError::InvalidState);

    game.place_bet(10.0).unwrap();
    set_shoe_from_draws(
        &mut game,
        &[card(Suit::Hearts, Rank::Nine), card(Suit::Clubs, Rank::Five)],
    );

    assert_eq!(game.deal().unwrap_err(), DealError::NotEnoughCards);
    assert_eq!(game.cards_remaining(), 2);
    assert!(game.player_hand().is_empty());
}

#[test]
fn actions_rejected_outside_player_turn() {
    let mut game = new_game();
    assert_eq!(game.hit().unwrap_err(), ActionError::InvalidState);
    assert_eq!(game.stand().unwrap_err(), ActionError::InvalidState);
    assert_eq!(game.double_down().unwrap_err(), ActionError::InvalidState);
    assert_eq!(game.dealer_play().unwrap_err(), ShowdownError::InvalidState);
    assert_eq!(game.settle().unwrap_err(), ShowdownError::InvalidState);
    assert_eq!(game.clear_round().unwrap_err(), ShowdownError::InvalidState);
}

#[test]
fn natural_blackjack_pays_three_to_two() {
    let mut game = new_game();
    game.place_bet(10.0).unwrap();
    set_shoe_from_draws(
        &mut game,
        &[
            card(Suit::Hearts, Rank::Eight), // dealer
            card(Suit::Spades, Rank::Ace),   // player
            card(Suit::Clubs, Rank::King),   // player
            card(Suit::Clubs, Rank::Two),
        ],
    );

    let draws = game.deal().unwrap();
    assert_eq!(draws.len(), 3);
    assert_eq!(game.state(), GameState::RoundComplete);
    assert_eq!(game.dealer_hand().len(), 1);

    let result = *game.result().unwrap();
    assert_eq!(result.outcome, HandOutcome::Blackjack);
    assert_eq!(result.net, 15.0);
    assert_eq!(game.bankroll(), 15.0);

    assert_eq!(game.hit().unwrap_err(), ActionError::InvalidState);
    assert_eq!(game.dealer_play().unwrap_err(), ShowdownError::InvalidState);
    assert_eq!(game.cards_remaining(), 1);
}

#[test]
fn higher_total_wins_bet() {
    let mut game = new_game();
    game.place_bet(10.0).unwrap();
    set_shoe_from_draws(
        &mut game,
        &[
            card(Suit::Hearts, Rank::Nine),  // dealer
            card(Suit::Spades, Rank::King),  // player
            card(Suit::Clubs, Rank::Queen),  // player
            card(Suit::Diamonds, Rank::Ten), // dealer draw
        ],
    );

    game.deal().unwrap();
    assert_eq!(game.state(), GameState::PlayerTurn);
    game.stand().unwrap();
    assert_eq!(game.state(), GameState::DealerTurn);

    let drawn = game.dealer_play().unwrap();
    assert_eq!(drawn.len(), 1);
    assert_eq!(game.dealer_hand().value(), 19);
    assert_eq!(game.state(), GameState::Payout);

    let result = game.settle().unwrap();
    assert_eq!(result.outcome, HandOutcome::Win);
    assert_eq!(result.player_value, 20);
    assert_eq!(result.dealer_value, 19);
    assert_eq!(result.net, 10.0);
    assert_eq!(game.bankroll(), 10.0);
    assert_eq!(game.state(), GameState::RoundComplete);
}

#[test]
fn lower_total_loses_bet() {
    let mut game = new_game();
    game.place_bet(10.0).unwrap();
    set_shoe_from_draws(
        &mut game,
        &[
            card(Suit::Hearts, Rank::Ten),    // dealer
            card(Suit::Spades, Rank::Ten),    // player
            card(Suit::Clubs, Rank::Seven),   // player
            card(Suit::Diamonds, Rank::Nine), // dealer draw
        ],
    );

    game.deal().unwrap();
    game.stand().unwrap();
    game.dealer_play().unwrap();

    let result = game.settle().unwrap();
    assert_eq!(result.outcome, HandOutcome::Lose);
    assert_eq!(result.net, -10.0);
    assert_eq!(game.bankroll(), -10.0);
}

#[test]
fn equal_totals_push() {
    let mut game = new_game();
    game.place_bet(10.0).unwrap();
    set_shoe_from_draws(
        &mut game,
        &[
            card(Suit::Hearts, Rank::Eight), // dealer
            card(Suit::Spades, Rank::Nine),  // player
            card(Suit::Clubs, Rank::Nine),   // player
            card(Suit::Diamonds, Rank::King), // dealer draw
        ],
    );

    game.deal().unwrap();
    game.stand().unwrap();
    game.dealer_play().unwrap();

    let result = game.settle().unwrap();
    assert_eq!(result.outcome, HandOutcome::Push);
    assert_eq!(result.net, 0.0);
    assert_eq!(game.bankroll(), 0.0);
}

#[test]
fn dealer_bust_pays_bet() {
    let mut game = new_game();
    game.place_bet(4.0).unwrap();
    set_shoe_from_draws(
        &mut game,
        &[
            card(Suit::Hearts, Rank::Six),    // dealer
            card(Suit::Spades, Rank::Two),    // player
            card(Suit::Clubs, Rank::Three),   // player
            card(Suit::Diamonds, Rank::King), // dealer draw -> 16
            card(Suit::Hearts, Rank::Queen),  // dealer draw -> 26
        ],
    );

    game.deal().unwrap();
    game.stand().unwrap();
    assert_eq!(game.dealer_play().unwrap().len(), 2);

    let result = game.settle().unwrap();
    assert_eq!(result.outcome, HandOutcome::DealerBust);
    assert_eq!(result.dealer_value, 26);
    assert_eq!(result.net, 4.0);
}

#[test]
fn player_bust_ends_round_without_dealer() {
    let mut game = new_game();
    game.place_bet(10.0).unwrap();
    set_shoe_from_draws(
        &mut game,
        &[
            card(Suit::Hearts, Rank::Five),     // dealer
            card(Suit::Spades, Rank::King),     // player
            card(Suit::Clubs, Rank::Three),     // player
            card(Suit::Diamonds, Rank::King),   // player hit -> 23
            card(Suit::Hearts, Rank::Two),
        ],
    );

    game.deal().unwrap();
    let draw = game.hit().unwrap();
    assert_eq!(draw.card.rank, Rank::King);

    assert_eq!(game.state(), GameState::RoundComplete);
    assert_eq!(game.player_hand().value(), 23);
    assert_eq!(game.dealer_hand().len(), 1);

    let result = *game.result().unwrap();
    assert_eq!(result.outcome, HandOutcome::Bust);
    assert_eq!(result.net, -10.0);
    assert_eq!(game.dealer_play().unwrap_err(), ShowdownError::InvalidState);
    assert_eq!(game.cards_remaining(), 1);
}

#[test]
fn reaching_21_ends_player_turn() {
    let mut game = new_game();
    game.place_bet(10.0).unwrap();
    set_shoe_from_draws(
        &mut game,
        &[
            card(Suit::Hearts, Rank::Ten),   // dealer
            card(Suit::Spades, Rank::Five),  // player
            card(Suit::Clubs, Rank::Six),    // player
            card(Suit::Diamonds, Rank::Ten), // player hit -> 21
            card(Suit::Hearts, Rank::Seven), // dealer draw -> 17
        ],
    );

    game.deal().unwrap();
    game.hit().unwrap();
    assert_eq!(game.state(), GameState::DealerTurn);
    assert_eq!(game.hit().unwrap_err(), ActionError::InvalidState);

    game.dealer_play().unwrap();
    let result = game.settle().unwrap();
    assert_eq!(result.outcome, HandOutcome::Win);
    assert_eq!(result.player_value, 21);
}

#[test]
fn double_down_on_11_doubles_bet_and_ends_turn() {
    let mut game = new_game();
    game.place_bet(10.0).unwrap();
    set_shoe_from_draws(
        &mut game,
        &[
            card(Suit::Hearts, Rank::Six),     // dealer
            card(Suit::Spades, Rank::Five),    // player
            card(Suit::Clubs, Rank::Six),      // player
            card(Suit::Diamonds, Rank::Queen), // double draw -> 21
            card(Suit::Hearts, Rank::King),    // dealer draw -> 16
            card(Suit::Clubs, Rank::Two),      // dealer draw -> 18
        ],
    );

    game.deal().unwrap();
    let draw = game.act(Action::DoubleDown).unwrap();
    assert_eq!(draw.map(|d| d.card.rank), Some(Rank::Queen));
    assert_eq!(game.bet(), 20.0);
    assert_eq!(game.state(), GameState::DealerTurn);

    game.dealer_play().unwrap();
    let result = game.settle().unwrap();
    assert_eq!(result.outcome, HandOutcome::Win);
    assert_eq!(result.bet, 20.0);
    assert_eq!(result.net, 20.0);
}

#[test]
fn double_down_below_21_still_ends_turn() {
    let mut game = new_game();
    game.place_bet(10.0).unwrap();
    set_shoe_from_draws(
        &mut game,
        &[
            card(Suit::Hearts, Rank::Ten),  // dealer
            card(Suit::Spades, Rank::Two),  // player
            card(Suit::Clubs, Rank::Three), // player
            card(Suit::Diamonds, Rank::Four), // double draw -> 9
        ],
    );

    game.deal().unwrap();
    game.double_down().unwrap();
    assert_eq!(game.player_hand().value(), 9);
    assert_eq!(game.state(), GameState::DealerTurn);
    assert_eq!(game.hit().unwrap_err(), ActionError::InvalidState);
}

#[test]
fn double_down_bust_loses_doubled_bet() {
    let mut game = new_game();
    game.place_bet(10.0).unwrap();
    set_shoe_from_draws(
        &mut game,
        &[
            card(Suit::Hearts, Rank::Ten),    // dealer
            card(Suit::Spades, Rank::Ten),    // player
            card(Suit::Clubs, Rank::Five),    // player
            card(Suit::Diamonds, Rank::King), // double draw -> 25
        ],
    );

    game.deal().unwrap();
    game.double_down().unwrap();

    assert_eq!(game.state(), GameState::RoundComplete);
    let result = *game.result().unwrap();
    assert_eq!(result.outcome, HandOutcome::Bust);
    assert_eq!(result.net, -20.0);
    assert_eq!(game.dealer_hand().len(), 1);
}

#[test]
fn dealer_hits_soft_17() {
    let mut game = new_game();
    game.place_bet(10.0).unwrap();
    set_shoe_from_draws(
        &mut game,
        &[
            card(Suit::Hearts, Rank::Ace),   // dealer
            card(Suit::Spades, Rank::Ten),   // player
            card(Suit::Clubs, Rank::Nine),   // player
            card(Suit::Diamonds, Rank::Six), // dealer draw -> soft 17
            card(Suit::Hearts, Rank::Two),   // dealer draw -> soft 19
        ],
    );

    game.deal().unwrap();
    game.stand().unwrap();
    let drawn = game.dealer_play().unwrap();
    assert_eq!(drawn.len(), 2);
    assert_eq!(game.dealer_hand().value(), 19);

    let result = game.settle().unwrap();
    assert_eq!(result.outcome, HandOutcome::Push);
}

#[test]
fn dealer_stands_on_hard_17() {
    let mut game = new_game();
    game.place_bet(10.0).unwrap();
    set_shoe_from_draws(
        &mut game,
        &[
            card(Suit::Hearts, Rank::Ten),     // dealer
            card(Suit::Spades, Rank::Ten),     // player
            card(Suit::Clubs, Rank::Eight),    // player
            card(Suit::Diamonds, Rank::Seven), // dealer draw -> hard 17
            card(Suit::Hearts, Rank::Two),
        ],
    );

    game.deal().unwrap();
    game.stand().unwrap();
    assert_eq!(game.dealer_play().unwrap().len(), 1);
    assert_eq!(game.dealer_hand().value(), 17);
    assert_eq!(game.settle().unwrap().outcome, HandOutcome::Win);
}

#[test]
fn clear_round_moves_dealer_then_player_cards_to_discard() {
    let mut game = new_game();
    game.place_bet(10.0).unwrap();
    let dealer_up = card(Suit::Hearts, Rank::Nine);
    let player_first = card(Suit::Spades, Rank::King);
    let player_second = card(Suit::Clubs, Rank::Queen);
    let dealer_draw = card(Suit::Diamonds, Rank::Ten);
    set_shoe_from_draws(
        &mut game,
        &[dealer_up, player_first, player_second, dealer_draw],
    );

    game.deal().unwrap();
    game.stand().unwrap();
    game.dealer_play().unwrap();
    game.settle().unwrap();

    let result = game.clear_round().unwrap();
    assert_eq!(result.outcome, HandOutcome::Win);
    assert_eq!(game.state(), GameState::AwaitingBet);
    assert_eq!(game.bet(), 0.0);
    assert!(game.player_hand().is_empty());
    assert!(game.dealer_hand().is_empty());
    assert!(game.result().is_none());
    assert_eq!(
        game.discard.cards(),
        &[dealer_up, dealer_draw, player_first, player_second]
    );
    assert_eq!(game.bankroll(), 10.0);
}

#[test]
fn empty_shoe_refills_from_discard_mid_deal() {
    let mut game = new_game();
    game.place_bet(1.0).unwrap();
    set_shoe_from_draws(
        &mut game,
        &[
            card(Suit::Hearts, Rank::Two),
            card(Suit::Spades, Rank::Three),
            card(Suit::Clubs, Rank::Four),
        ],
    );
    let discarded: Vec<Card> = (1..=5).filter_map(Card::from_index).collect();
    game.discard.extend(discarded.iter().copied());

    let draws = game.deal().unwrap();
    let flags: Vec<bool> = draws.iter().map(|d| d.reshuffled).collect();
    assert_eq!(flags, vec![false, false, true]);
    assert_eq!(game.cards_remaining(), 5);
    assert!(game.discard.is_empty());

    let mut refilled = game.shoe.cards().to_vec();
    refilled.sort();
    assert_eq!(refilled, discarded);
}

#[test]
fn hit_with_exhausted_shoe_and_discard_returns_error() {
    let mut game = new_game();
    game.place_bet(1.0).unwrap();
    set_shoe_from_draws(
        &mut game,
        &[
            card(Suit::Hearts, Rank::Two),
            card(Suit::Spades, Rank::Three),
            card(Suit::Clubs, Rank::Four),
        ],
    );

    game.deal().unwrap();
    assert_eq!(game.state(), GameState::PlayerTurn);
    assert_eq!(game.hit().unwrap_err(), ActionError::NoCards);
    assert_eq!(game.state(), GameState::PlayerTurn);

    game.stand().unwrap();
    assert_eq!(game.dealer_play().unwrap_err(), ShowdownError::NoCards);
}

#[test]
fn deal_from_empty_shoe_refills_from_discard_first() {
    let mut game = new_game();
    game.shoe = Shoe::from_cards(Vec::new());
    let discarded: Vec<Card> = (1..=10).filter_map(Card::from_index).collect();
    game.discard.extend(discarded.iter().copied());

    game.place_bet(1.0).unwrap();
    let draws = game.deal().unwrap();

    let flags: Vec<bool> = draws.iter().map(|d| d.reshuffled).collect();
    assert_eq!(flags, vec![true, false, false]);
    assert_eq!(game.cards_remaining(), 7);
    assert!(game.discard.is_empty());
    assert_eq!(game.dealer_hand().len(), 1);
    assert_eq!(game.player_hand().len(), 2);
    assert_ne!(game.state(), GameState::InitialDeal);
}

#[test]
fn dealer_draws_after_shoe_emptied_once_discard_has_cards() {
    let mut game = new_game();
    game.place_bet(1.0).unwrap();
    set_shoe_from_draws(
        &mut game,
        &[
            card(Suit::Hearts, Rank::Two),   // dealer
            card(Suit::Spades, Rank::Ten),   // player
            card(Suit::Clubs, Rank::Eight),  // player
        ],
    );

    game.deal().unwrap();
    game.stand().unwrap();
    assert!(game.shoe.is_empty());

    game.discard.extend([
        card(Suit::Diamonds, Rank::King),
        card(Suit::Diamonds, Rank::Queen),
        card(Suit::Diamonds, Rank::Jack),
    ]);

    let drawn = game.dealer_play().unwrap();
    assert!(drawn[0].reshuffled);
    assert_eq!(game.dealer_hand().value(), 22);
    assert_eq!(game.state(), GameState::Payout);
    assert_eq!(game.settle().unwrap().outcome, HandOutcome::DealerBust);
}

#[test]
fn bankroll_accumulates_across_rounds() {
    let mut game = new_game();

    let first = game.play_round(10.0, |_, _| Action::Stand).unwrap();
    let second = game.play_round(5.0, |_, _| Action::Stand).unwrap();

    assert_eq!(second.bankroll, first.net + second.net);
    assert_eq!(game.bankroll(), second.bankroll);
    assert_eq!(game.state(), GameState::AwaitingBet);
    assert_eq!(game.cards_remaining() + game.discard.len(), 52);
}

#[test]
fn play_round_reports_bet_errors() {
    let mut game = new_game();
    assert_eq!(
        game.play_round(-5.0, |_, _| Action::Stand).unwrap_err(),
        RoundError::Bet(BetError::Negative)
    );
    assert_eq!(game.state(), GameState::AwaitingBet);
}

#[test]
fn long_session_conserves_cards() {
    let mut game = Game::new(GameOptions::default(), 9).unwrap();

    for _ in 0..200 {
        game.play_round(1.0, |player, _| {
            if player.value() < 15 {
                Action::Hit
            } else {
                Action::Stand
            }
        })
        .unwrap();
        assert_eq!(game.cards_remaining() + game.discard.len(), 52);
    }
}

#[test]
fn start_round_deals_after_bet() {
    let mut game = new_game();
    let draws = game.start_round(10.0).unwrap();
    assert_eq!(draws.len(), 3);
    assert_eq!(game.dealer_hand().len(), 1);
    assert_eq!(game.player_hand().len(), 2);
    assert!(matches!(
        game.state(),
        GameState::PlayerTurn | GameState::RoundComplete
    ));
}
