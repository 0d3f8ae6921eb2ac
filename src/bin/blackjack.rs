//! Play blackjack against the dealer on the terminal.

use std::io;
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use blackjack::{Game, GameOptions, Session};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off")).init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    log::debug!("seeding deck with {seed}");

    let game = Game::new(GameOptions::default(), seed);
    let mut session = Session::new(game, io::stdin().lock(), io::stdout().lock());

    match session.run() {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("session aborted: {err}");
            eprintln!("blackjack: {err}");
            ExitCode::FAILURE
        }
    }
}
