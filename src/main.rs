use anyhow::{anyhow, Result};
use clap::Parser;
use indicatif::*;
use rayon::prelude::*;

use std::io::{stdin, stdout, Write};

use connect4_engine::*;

mod display;
use display::*;

/// Play Connect 4 against the computer
#[derive(Parser, Debug)]
#[command(name = "connect4")]
struct Args {
    /// Strength of the computer: easy, medium or hard
    #[arg(short, long, default_value = "medium")]
    difficulty: Difficulty,

    /// Let the computer make the first move
    #[arg(long)]
    computer_first: bool,

    /// Two humans share the keyboard, no computer moves
    #[arg(long)]
    two_player: bool,

    /// Search depth of the medium tier
    #[arg(long, default_value_t = 2)]
    medium_depth: usize,

    /// Search depth of the hard tier
    #[arg(long, default_value_t = 5)]
    hard_depth: usize,

    /// Seed for reproducible random moves
    #[arg(long)]
    seed: Option<u64>,

    /// error, warn, info, debug or trace
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Play this many computer-vs-computer games instead of an interactive game
    #[arg(long, value_name = "GAMES")]
    self_play: Option<usize>,

    /// Strength of the second computer in self-play
    #[arg(long, default_value = "hard")]
    opponent: Difficulty,
}

fn label(player: Player, two_player: bool) -> &'static str {
    match (player, two_player) {
        (Player::Human, false) => "You",
        (Player::Computer, false) => "Computer",
        (Player::Human, true) => "Player 1",
        (Player::Computer, true) => "Player 2",
    }
}

fn ask_yes_no(question: &str) -> Result<bool> {
    let stdin = stdin();
    loop {
        let mut buffer = String::new();
        print!("{} y/n: ", question);
        stdout().flush()?;
        if stdin.read_line(&mut buffer)? == 0 {
            return Ok(false);
        }
        match buffer.to_lowercase().chars().next() {
            Some('y') => return Ok(true),
            Some('n') => return Ok(false),
            _ => println!("Unknown answer given"),
        }
    }
}

fn play_interactive(args: &Args, config: PolicyConfig) -> Result<()> {
    let first = if args.computer_first {
        Player::Computer
    } else {
        Player::Human
    };
    let mut game = Game::new(first);
    let mut policy = Policy::new(args.difficulty, config);
    let stdin = stdin();

    println!("Welcome to Connect 4\n");

    // game loop
    loop {
        match game.verdict().clone() {
            Verdict::InProgress => {
                display(game.board(), &[])?;
                let player = game.current();

                // AI player
                if !args.two_player && player == Player::Computer {
                    println!("Computer is thinking...");
                    stdout().flush()?;
                    let column = policy.choose_column(game.board(), player)?;
                    println!("Computer plays column {}", column + 1);
                    game.play(column)?;
                    continue;
                }

                // human player
                print!(
                    "{}: column 1-{}, u = undo, r = reset, q = quit > ",
                    label(player, args.two_player),
                    WIDTH
                );
                stdout().flush()?;
                let mut input_str = String::new();
                if stdin.read_line(&mut input_str)? == 0 {
                    break;
                }

                match input_str.trim() {
                    "q" => break,
                    "r" => game.reset(),
                    "u" => {
                        if game.undo().is_none() {
                            println!("Nothing to undo");
                        }
                        // take back the computer's reply as well
                        if !args.two_player && game.current() == Player::Computer {
                            game.undo();
                        }
                    }
                    input => match input.parse::<usize>() {
                        Ok(column @ 1..=WIDTH) => {
                            if let Err(err) = game.play(column - 1) {
                                println!("{}", err);
                            }
                        }
                        _ => println!("Invalid column: {}", input),
                    },
                }
            }

            // end states
            Verdict::Win { player, cells } => {
                display(game.board(), &cells)?;
                println!("{} won!", label(player, args.two_player));
                if !next_game(&mut game, args.two_player)? {
                    break;
                }
            }
            Verdict::Draw => {
                display(game.board(), &[])?;
                println!("Draw!");
                if !next_game(&mut game, args.two_player)? {
                    break;
                }
            }
        }
    }
    Ok(())
}

fn next_game(game: &mut Game, two_player: bool) -> Result<bool> {
    let score = game.scoreboard();
    println!(
        "Score: {} {}, {} {}, draws {}",
        label(Player::Human, two_player),
        score.human,
        label(Player::Computer, two_player),
        score.computer,
        score.draws
    );
    let again = ask_yes_no("Play again?")?;
    if again {
        game.reset();
    }
    Ok(again)
}

fn self_play(games: usize, args: &Args, config: PolicyConfig) -> Result<()> {
    let progress = ProgressBar::new(games as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("Self-play: {bar:40.cyan/blue} {pos}/{len} ~{eta} remaining")
            .progress_chars("█▓▒░  "),
    );

    // every game owns its boards and policies, only the games run in parallel
    let verdicts = (0..games)
        .into_par_iter()
        .map(|i| -> Result<Verdict, BoardError> {
            let seed = config.seed.map(|seed| seed.wrapping_add(i as u64));
            // alternate who starts
            let first = if i % 2 == 0 {
                Player::Computer
            } else {
                Player::Human
            };
            let mut game = Game::new(first);
            let mut computer = Policy::new(
                args.difficulty,
                PolicyConfig {
                    seed,
                    ..config.clone()
                },
            );
            let mut opponent = Policy::new(
                args.opponent,
                PolicyConfig {
                    seed: seed.map(|seed| !seed),
                    ..config.clone()
                },
            );

            while !game.is_over() {
                let player = game.current();
                let policy = match player {
                    Player::Computer => &mut computer,
                    Player::Human => &mut opponent,
                };
                let column = policy.choose_column(game.board(), player)?;
                game.play(column)?;
            }
            progress.inc(1);
            Ok(game.verdict().clone())
        })
        .collect::<Result<Vec<Verdict>, BoardError>>()?;
    progress.finish();

    let mut tally = Scoreboard::default();
    for verdict in verdicts.iter() {
        match verdict {
            Verdict::Win {
                player: Player::Computer,
                ..
            } => tally.computer += 1,
            Verdict::Win {
                player: Player::Human,
                ..
            } => tally.human += 1,
            _ => tally.draws += 1,
        }
    }
    println!(
        "{} vs {} over {} games: {} wins, {} losses, {} draws",
        args.difficulty, args.opponent, games, tally.computer, tally.human, tally.draws
    );
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = args
        .log_level
        .parse::<log::Level>()
        .map_err(|err| anyhow!("invalid log level '{}': {}", args.log_level, err))?;
    simple_logger::init_with_level(level)
        .map_err(|err| anyhow!("could not set up logging: {}", err))?;

    let config = PolicyConfig {
        medium_depth: args.medium_depth,
        hard_depth: args.hard_depth,
        seed: args.seed,
        ..PolicyConfig::default()
    };

    match args.self_play {
        Some(games) => self_play(games, &args, config),
        None => play_interactive(&args, config),
    }
}
