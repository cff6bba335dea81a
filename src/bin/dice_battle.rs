//! Dice Battle in the terminal.
//!
//! Interactive by default: press Enter to roll, type `reset` to start over,
//! `q` to quit. Arrow words (`up`, `down`, `left`, `right`) and `a`/`b` are
//! forwarded as key presses. With `--rounds N` it plays N rounds and exits.

use std::io::{BufRead, Write};

use clap::Parser;
use colored::Colorize;
use log::LevelFilter;

use dice_battle::controller::{NoPacer, Pacer, RoundController, ThreadPacer};
use dice_battle::core::{Player, RoundConfig};
use dice_battle::error::PresentError;
use dice_battle::input::{InputEvent, InputMapper, KeyCode, Target, Trigger};
use dice_battle::present::{DisplayLabel, Presenter, Scoreboard};
use dice_battle::{AnimationFrame, RoundResult};

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Two players, two dice, higher roll wins",
    long_about = None
)]
struct Args {
    /// RNG seed for a reproducible game
    #[arg(long)]
    seed: Option<u64>,

    /// Play this many rounds and exit
    #[arg(long)]
    rounds: Option<u32>,

    /// Skip the roll animation delay
    #[arg(long)]
    fast: bool,

    /// Roll animation length in milliseconds
    #[arg(long, default_value_t = 800)]
    roll_ms: u64,

    /// Time between animation frames in milliseconds
    #[arg(long, default_value_t = 100)]
    interval_ms: u64,

    /// Log level (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Renders to stdout with colors.
struct TerminalPresenter {
    out: std::io::Stdout,
}

impl TerminalPresenter {
    fn new() -> Self {
        Self { out: std::io::stdout() }
    }

    fn write(&mut self, text: &str) -> Result<(), PresentError> {
        write!(self.out, "{}", text)
            .and_then(|_| self.out.flush())
            .map_err(|e| PresentError::Render(e.to_string()))
    }

    fn die(board: &Scoreboard, player: Player) -> String {
        let face = format!("[{}]", board.face(player));
        if board.label.highlights(player) {
            face.green().bold().to_string()
        } else {
            face
        }
    }

    fn board(board: &Scoreboard) -> String {
        let headline = match board.label {
            DisplayLabel::Title => board.headline.bold(),
            DisplayLabel::Winner(_) => board.headline.green().bold(),
            DisplayLabel::Draw => board.headline.yellow().bold(),
        };
        format!(
            "\r  {}  {}   {}\n  {} | {} | rounds {} | draws {}\n",
            Self::die(board, Player::One),
            Self::die(board, Player::Two),
            headline,
            board.score_text(Player::One),
            board.score_text(Player::Two),
            board.total_rounds,
            board.total_draws
        )
    }
}

impl Presenter for TerminalPresenter {
    fn show_rolling(&mut self) -> Result<(), PresentError> {
        self.write(&format!("  {}\n", "rolling...".dimmed()))
    }

    fn show_frame(&mut self, frame: &AnimationFrame) -> Result<(), PresentError> {
        self.write(&format!("\r  [{}]  [{}]", frame.player1, frame.player2))
    }

    fn show_result(
        &mut self,
        _result: &RoundResult,
        board: &Scoreboard,
    ) -> Result<(), PresentError> {
        self.write(&Self::board(board))
    }

    fn show_reset(&mut self, board: &Scoreboard) -> Result<(), PresentError> {
        self.write(&Self::board(board))
    }
}

fn logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .build();
    if let Err(e) = simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    ) {
        eprintln!("logging disabled: {}", e);
    }
}

fn parse_line(line: &str) -> Option<InputEvent> {
    let event = match line.trim().to_ascii_lowercase().as_str() {
        "" | "roll" => InputEvent::Pointer(Target::RollButton),
        "reset" => InputEvent::Pointer(Target::ResetButton),
        "up" => InputEvent::key(KeyCode::ArrowUp),
        "down" => InputEvent::key(KeyCode::ArrowDown),
        "left" => InputEvent::key(KeyCode::ArrowLeft),
        "right" => InputEvent::key(KeyCode::ArrowRight),
        "a" => InputEvent::key(KeyCode::A),
        "b" => InputEvent::key(KeyCode::B),
        _ => return None,
    };
    Some(event)
}

fn secret() {
    let colors = ["red", "yellow", "green", "cyan", "blue", "magenta"];
    let banner: String = "*** RAINBOW MODE ***"
        .chars()
        .enumerate()
        .map(|(i, c)| c.to_string().color(colors[i % colors.len()]).to_string())
        .collect();
    println!("  {}", banner);
}

fn main() {
    let args = Args::parse();
    logging(args.verbose);

    let config = RoundConfig {
        roll_duration_ms: args.roll_ms,
        roll_interval_ms: args.interval_ms,
        seed: args.seed,
    };
    let mut game = match RoundController::new(config) {
        Ok(game) => game,
        Err(e) => {
            eprintln!("{}", e.to_string().red());
            std::process::exit(2);
        }
    };
    let mut screen = TerminalPresenter::new();
    let mut pacer: Box<dyn Pacer> = if args.fast {
        Box::new(NoPacer)
    } else {
        Box::new(ThreadPacer)
    };

    if let Err(e) = screen.show_reset(&game.scoreboard()) {
        log::warn!("{}", e);
    }

    if let Some(rounds) = args.rounds {
        for _ in 0..rounds {
            if let Err(e) = game.start_round(&mut screen, pacer.as_mut()) {
                log::error!("{}", e);
            }
        }
        return;
    }

    println!("  {}", "Enter: roll | reset | q: quit".dimmed());
    let mut input = InputMapper::new();
    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                log::error!("reading input: {}", e);
                break;
            }
        };
        if matches!(line.trim(), "q" | "quit") {
            break;
        }

        let Some(trigger) = parse_line(&line).and_then(|event| input.handle(event)) else {
            continue;
        };
        match trigger {
            Trigger::StartRound => {
                if let Err(e) = game.start_round(&mut screen, pacer.as_mut()) {
                    log::error!("{}", e);
                }
            }
            Trigger::Reset => {
                if let Err(e) = game.reset_game(&mut screen) {
                    log::warn!("{}", e);
                }
            }
            Trigger::SecretUnlocked => secret(),
        }
    }
}
