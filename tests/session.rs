//! Interactive session tests.

use std::io::Cursor;

use blackjack::{Card, Command, Deck, Game, GameOptions, Outcome, Rank, Session, SessionError, Suit};

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

fn session(input: &str, draws: &[Card]) -> Session<Cursor<Vec<u8>>, Vec<u8>> {
    let mut deck = Deck::new(11);
    deck.stack(draws).unwrap();
    let game = Game::with_deck(GameOptions::default(), deck);
    Session::new(game, Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

fn output_of(session: Session<Cursor<Vec<u8>>, Vec<u8>>) -> String {
    let (_, _, output) = session.into_parts();
    String::from_utf8(output).unwrap()
}

fn position(haystack: &str, needle: &str) -> usize {
    haystack
        .find(needle)
        .unwrap_or_else(|| panic!("missing {needle:?} in output:\n{haystack}"))
}

const SHOWDOWN_DRAWS: [Card; 5] = [
    card(Suit::Hearts, Rank::Ten),   // player
    card(Suit::Clubs, Rank::Ten),    // dealer
    card(Suit::Spades, Rank::Eight), // player
    card(Suit::Diamonds, Rank::Two), // dealer
    card(Suit::Spades, Rank::Seven), // dealer draw
];

#[test]
fn commands_parse_case_insensitively() {
    assert_eq!("h".parse::<Command>(), Ok(Command::Hit));
    assert_eq!(" HIT \n".parse::<Command>(), Ok(Command::Hit));
    assert_eq!("S".parse::<Command>(), Ok(Command::Stand));
    assert_eq!("stand".parse::<Command>(), Ok(Command::Stand));
    assert_eq!("x".parse::<Command>(), Err(()));
    assert_eq!("".parse::<Command>(), Err(()));
}

#[test]
fn single_round_prints_in_order() {
    let mut session = session("s\nn\n", &SHOWDOWN_DRAWS);
    assert_eq!(session.run().unwrap(), 1);
    let output = output_of(session);

    let welcome = position(&output, "=== Welcome to Blackjack ===");
    let table = position(&output, "Your hand: 10 of Hearts, 8 of Spades");
    let hidden = position(&output, "Dealer's visible card(s): [Hidden Card], 2 of Diamonds");
    let results = position(&output, "=== Round Results ===");
    let deal = position(&output, "--- Initial deal ---");
    let verdict = position(&output, "Dealer wins!");
    let discard = position(&output, "Cards moved to discard pile: 5");
    let again = position(&output, "Play another round? (y/n): ");
    let bye = position(&output, "Thanks for playing!");

    assert!(welcome < table);
    assert!(table < hidden);
    assert!(hidden < results);
    assert!(results < deal);
    assert!(deal < verdict);
    assert!(verdict < discard);
    assert!(discard < again);
    assert!(again < bye);
}

#[test]
fn invalid_choice_reprompts_without_drawing() {
    let mut session = session(
        "x\nH\ns\nn\n",
        &[
            card(Suit::Hearts, Rank::Two),   // player
            card(Suit::Clubs, Rank::Ten),    // dealer
            card(Suit::Spades, Rank::Three), // player
            card(Suit::Diamonds, Rank::Eight), // dealer
            card(Suit::Hearts, Rank::Four),  // player hit
        ],
    );
    session.run().unwrap();
    let output = output_of(session);

    assert_eq!(output.matches("Invalid input, please type 'h' or 's'.").count(), 1);
    assert_eq!(output.matches("Hit or stand? (h/s): ").count(), 3);
    assert!(output.contains("Player hits and draws: 4 of Hearts"));
    assert!(output.contains("Player stands with 9"));
}

#[test]
fn bust_ends_turn_without_prompting() {
    let mut session = session(
        "h\nn\n",
        &[
            card(Suit::Hearts, Rank::Ten),    // player
            card(Suit::Clubs, Rank::Two),     // dealer
            card(Suit::Spades, Rank::Five),   // player
            card(Suit::Diamonds, Rank::Three), // dealer
            card(Suit::Clubs, Rank::Nine),    // player hit
        ],
    );
    let summary = session.play_round().unwrap();
    assert_eq!(summary.outcome, Outcome::PlayerBusted);
    assert_eq!(summary.discarded, 5);

    let output = output_of(session);
    assert_eq!(output.matches("Hit or stand? (h/s): ").count(), 1);
    assert!(output.contains("Your score: 24"));
    assert!(output.contains("Player busted! Dealer wins."));
    assert!(!output.contains("Dealer hits"));
}

#[test]
fn only_y_continues() {
    let mut session = session("s\n Y \ns\nyes\n", &SHOWDOWN_DRAWS);
    assert_eq!(session.run().unwrap(), 2);

    let output = output_of(session);
    assert_eq!(output.matches("=== Round Results ===").count(), 2);
    assert_eq!(output.matches("Thanks for playing!").count(), 1);
}

#[test]
fn end_of_input_at_play_again_quits() {
    let mut session = session("s\n", &SHOWDOWN_DRAWS);
    assert_eq!(session.run().unwrap(), 1);
    assert!(output_of(session).ends_with("Thanks for playing!\n"));
}

#[test]
fn end_of_input_mid_turn_is_an_error() {
    let mut session = session("", &SHOWDOWN_DRAWS);
    assert!(matches!(session.run(), Err(SessionError::InputClosed)));
}
