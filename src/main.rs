use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use log::info;

use supertrek::cli::args::{self, USAGE};
use supertrek::io::TerminalIO;
use supertrek::Game;

fn main() -> ExitCode {
    env_logger::init();

    let args = match args::parse() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("{}", USAGE);
            return ExitCode::from(2);
        }
    };
    if args.help {
        println!("{}", USAGE);
        return ExitCode::SUCCESS;
    }

    // Without a seed, take one from the clock
    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0)
    });
    info!("starting session with seed {}", seed);

    let mut game = Game::new(seed);
    let mut terminal = TerminalIO;
    let mut output = TerminalIO;
    match game.run(&mut terminal, &mut output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
