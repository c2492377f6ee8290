use std::io::{stdin, stdout};

use log::{error, info};
use rand::{rngs::StdRng, SeedableRng};
use tictactoe::{Session, SessionArgs};

fn main() {
    env_logger::init();

    let args = SessionArgs::from_env();
    info!("session settings: {:?}", args);

    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut session = Session::new(stdin().lock(), stdout(), rng, args);
    if let Err(err) = session.run() {
        error!("console session failed: {}", err);
        std::process::exit(1);
    }
}
