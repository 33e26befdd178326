mod prompt;
mod render;
mod settings;

use anyhow::{Context, Result};
use blackjack_core::{
    BoundaryError, EventBus, RngState, RoundError, Suit, Table, TableConfig, STAKE_CHOICES,
};
use prompt::TerminalIo;
use settings::{default_settings_path, load_settings, save_settings, Palette, COLOUR_NAMES};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::Level;

const MAX_HUMANS: usize = 4;
const MAX_CPUS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Play,
    ConfigColour,
    Help,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct CliOptions {
    command: Command,
    seed: Option<u64>,
    stake: Option<u32>,
    humans: Option<usize>,
    cpus: Option<usize>,
    verbose: bool,
    plain: bool,
    config_path: Option<PathBuf>,
}

const USAGE: &str = "\
usage: blackjack [play] [options]
       blackjack config colour

options:
  --seed N         shuffle with a fixed seed
  --stake N        table stake (15, 50, 100 or 500)
  --humans N       human seats, 1 to 4
  --cpus N         cpu seats, 0 to 4
  --config PATH    settings file (default $BLACKJACK_CONFIG or ~/.shell_blackjack.json)
  --plain          no colours
  -v, --verbose    debug logging on stderr";

fn parse_cli_options(args: &[String]) -> CliOptions {
    let mut options = CliOptions {
        command: Command::Play,
        seed: None,
        stake: None,
        humans: None,
        cpus: None,
        verbose: false,
        plain: std::env::var_os("NO_COLOR").is_some(),
        config_path: None,
    };
    let mut positional: Vec<&str> = Vec::new();
    let mut idx = 0usize;
    while idx < args.len() {
        match args[idx].as_str() {
            "--verbose" | "-v" => options.verbose = true,
            "--plain" => options.plain = true,
            "--help" | "-h" => options.command = Command::Help,
            "--seed" => {
                if let Some(value) = args.get(idx + 1) {
                    options.seed = value.parse::<u64>().ok();
                    idx += 1;
                }
            }
            "--stake" => {
                if let Some(value) = args.get(idx + 1) {
                    options.stake = value.parse::<u32>().ok();
                    idx += 1;
                }
            }
            "--humans" => {
                if let Some(value) = args.get(idx + 1) {
                    options.humans = value.parse::<usize>().ok();
                    idx += 1;
                }
            }
            "--cpus" => {
                if let Some(value) = args.get(idx + 1) {
                    options.cpus = value.parse::<usize>().ok();
                    idx += 1;
                }
            }
            "--config" => {
                if let Some(value) = args.get(idx + 1) {
                    options.config_path = Some(PathBuf::from(value));
                    idx += 1;
                }
            }
            other => positional.push(other),
        }
        idx += 1;
    }
    if options.command != Command::Help {
        options.command = match positional.as_slice() {
            [] | ["play"] => Command::Play,
            ["config", "colour" | "color" | "colours" | "colors"] => Command::ConfigColour,
            _ => Command::Help,
        };
    }
    options
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = parse_cli_options(&args);
    init_logging(options.verbose);
    let result = match options.command {
        Command::Play => run_play(&options),
        Command::ConfigColour => run_config_colour(&options),
        Command::Help => {
            println!("{USAGE}");
            Ok(())
        }
    };
    if let Err(err) = result {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn settings_path(options: &CliOptions) -> Option<PathBuf> {
    options.config_path.clone().or_else(default_settings_path)
}

fn run_play(options: &CliOptions) -> Result<()> {
    let settings = match settings_path(options) {
        Some(path) => load_settings(&path)?,
        None => settings::Settings::default(),
    };
    let palette = if options.plain {
        Palette::plain()
    } else {
        settings.palette()
    };
    let stdin = io::stdin();
    let mut io = TerminalIo::new(stdin.lock(), io::stdout(), palette);

    match play_session(options, settings.stake, &mut io) {
        Err(err) if is_closed(&err) => {
            println!();
            tracing::debug!("input closed, leaving");
            Ok(())
        }
        other => other,
    }
}

fn is_closed(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| {
        matches!(
            cause.downcast_ref::<BoundaryError>(),
            Some(BoundaryError::Closed)
        ) || matches!(
            cause.downcast_ref::<RoundError>(),
            Some(RoundError::Boundary(BoundaryError::Closed))
        )
    })
}

fn play_session<R: BufRead, W: Write>(
    options: &CliOptions,
    default_stake: u32,
    io: &mut TerminalIo<R, W>,
) -> Result<()> {
    let stake = match options.stake {
        Some(stake) => stake,
        None => ask_stake(io, default_stake)?,
    };
    let humans = match options.humans {
        Some(humans) => humans.clamp(1, MAX_HUMANS),
        None => io.ask_number(
            &format!("How many players (1-{MAX_HUMANS}) [1]: "),
            1..=MAX_HUMANS,
            Some(1),
        )?,
    };
    let cpus = match options.cpus {
        Some(cpus) => cpus.min(MAX_CPUS),
        None => io.ask_number(
            &format!("How many cpu players (0-{MAX_CPUS}) [0]: "),
            0..=MAX_CPUS,
            Some(0),
        )?,
    };

    let seed = options
        .seed
        .unwrap_or_else(|| RngState::from_entropy().seed());
    tracing::info!(seed, stake, humans, cpus, "starting table");
    let mut table =
        Table::new(TableConfig::with_stake(stake), seed).context("invalid table settings")?;
    let mut events = EventBus::default();
    table.seat_players(humans, cpus, io, &mut events)?;

    let rounds = table.run_session(io, &mut events)?;
    io.say(&format!("Thanks for playing. Rounds played: {rounds}"))?;
    Ok(())
}

fn ask_stake<R: BufRead, W: Write>(
    io: &mut TerminalIo<R, W>,
    default_stake: u32,
) -> Result<u32, BoundaryError> {
    let choices: Vec<String> = STAKE_CHOICES.iter().map(u32::to_string).collect();
    let choice_refs: Vec<&str> = choices.iter().map(String::as_str).collect();
    let current = default_stake.to_string();
    let answer = io.ask_choice(
        &format!("Table stake ({}) [{current}]: ", choices.join("/")),
        &choice_refs,
        Some(current.as_str()),
    )?;
    Ok(answer.parse().unwrap_or(default_stake))
}

fn run_config_colour(options: &CliOptions) -> Result<()> {
    let path = settings_path(options).context("no settings path: set BLACKJACK_CONFIG or HOME")?;
    let mut settings = load_settings(&path)?;
    let stdin = io::stdin();
    let mut io = TerminalIo::new(stdin.lock(), io::stdout(), Palette::plain());
    let mut bg_choices = vec!["none"];
    bg_choices.extend_from_slice(COLOUR_NAMES);

    for suit in Suit::ALL {
        let current = settings.suit(suit).clone();
        let fg = io.ask_choice(
            &format!("Foreground for {} [{}]: ", suit.id(), current.fg),
            COLOUR_NAMES,
            Some(current.fg.as_str()),
        )?;
        let current_bg = current.bg.as_deref().unwrap_or("none");
        let bg = io.ask_choice(
            &format!("Background for {} [{current_bg}]: ", suit.id()),
            &bg_choices,
            Some(current_bg),
        )?;
        let colours = settings.suit_mut(suit);
        colours.fg = fg;
        colours.bg = (bg != "none").then_some(bg);
    }
    save_settings(&settings, &path)?;
    io.say(&format!("Saved colours to {}", path.display()))?;
    Ok(())
}
