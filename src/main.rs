use std::process;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use log::{error, info};

use eightball::cli::args::Opt;
use eightball::cli::config::Config;
use eightball::coin::Coin;
use eightball::magic8ball::{Magic8Ball, SessionLog};
use eightball::rand_prev::{CryptoSource, RandomPrev, StandardSource, UniformSource};

fn main() {
    let opt = Opt::parse();

    // Initialize the logger
    colog::init();

    let config = match &opt.config {
        Some(config_file) => Config::load_config(config_file),
        None => Config::from_opt(&opt),
    };

    // Set seed if provided or derive one from `SystemTime`
    let seed = match config.seed {
        Some(val) => val,
        None => SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("Failed to get the current time")
            .as_secs(),
    };
    info!("Seed: {}", seed);

    if config.flip {
        run_coin(&config, seed);
    } else if config.draws.is_some() {
        run_draws(&config, seed);
    } else {
        run_eightball(&config, seed);
    }
}

/// Ask the ball `count` times and optionally dump the session log
fn run_eightball(config: &Config, seed: u64) {
    let mut ball = Magic8Ball::with_source(StandardSource::seeded(seed));
    let mut session = SessionLog::new(&config.workspace);

    for _ in 0..config.count {
        let answer = ball.answer_to_question(&config.question, config.answer_type);
        if config.question.is_empty() {
            println!("{}", answer);
        } else {
            println!("Q: {}", config.question);
            println!("A: {}", answer);
        }
        session.record(&config.question, config.answer_type, answer);
    }

    if config.logs {
        session.dump_json();
        info!("Session log stored in {}/sessions", config.workspace);
    }
}

/// Flip a coin `count` times
fn run_coin(config: &Config, seed: u64) {
    let mut coin = Coin::seeded(seed);
    for _ in 0..config.count {
        coin.flip();
        println!("{}", coin.side_name());
    }
}

/// Print raw generator draws using the configured range and source
fn run_draws(config: &Config, seed: u64) {
    let draws = config.draws.unwrap_or(0);

    if config.crypto {
        match RandomPrev::new(CryptoSource::new(), config.min, config.max, config.history) {
            Ok(generator) => print_draws(generator, draws),
            Err(e) => {
                error!("{}", e);
                process::exit(1);
            }
        }
    } else {
        match RandomPrev::new(
            StandardSource::seeded(seed),
            config.min,
            config.max,
            config.history,
        ) {
            Ok(generator) => print_draws(generator, draws),
            Err(e) => {
                error!("{}", e);
                process::exit(1);
            }
        }
    }
}

fn print_draws<S: UniformSource>(mut generator: RandomPrev<S>, draws: u32) {
    for _ in 0..draws {
        let value = if generator.has_history() {
            generator.next_but_not_prev()
        } else {
            generator.next()
        };
        println!("{}", value);
    }
}
