use crate::render::{dealer_line, describe, money, player_hand_line};
use crate::settings::Palette;
use blackjack_core::{BoundaryError, Dealer, EventBus, Player, PlayerAction, TableIo};
use std::io::{BufRead, Write};
use std::ops::RangeInclusive;

/// Capitalises the first letter of each word and lowercases the rest.
pub fn title_case(name: &str) -> String {
    name.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

pub fn parse_action(line: &str) -> Option<PlayerAction> {
    match line.trim().to_ascii_lowercase().as_str() {
        "h" | "hit" => Some(PlayerAction::Hit),
        "s" | "stand" => Some(PlayerAction::Stand),
        "d" | "double" | "double down" | "dd" => Some(PlayerAction::DoubleDown),
        _ => None,
    }
}

/// Line-oriented prompts over any reader/writer pair.
pub struct TerminalIo<R, W> {
    input: R,
    output: W,
    palette: Palette,
}

impl<R: BufRead, W: Write> TerminalIo<R, W> {
    pub fn new(input: R, output: W, palette: Palette) -> Self {
        Self {
            input,
            output,
            palette,
        }
    }

    pub fn say(&mut self, line: &str) -> Result<(), BoundaryError> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    /// Prints `prompt` and returns the answer without its line ending.
    /// End of input reads as `Closed`.
    pub fn read_line(&mut self, prompt: &str) -> Result<String, BoundaryError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(BoundaryError::Closed);
        }
        Ok(line.trim_end_matches(&['\n', '\r'][..]).to_string())
    }

    /// Re-asks until the answer parses and falls inside `range`. An empty
    /// answer picks `default` when there is one.
    pub fn ask_number<T>(
        &mut self,
        prompt: &str,
        range: RangeInclusive<T>,
        default: Option<T>,
    ) -> Result<T, BoundaryError>
    where
        T: std::str::FromStr + PartialOrd + Copy + std::fmt::Display,
    {
        loop {
            let line = self.read_line(prompt)?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                if let Some(value) = default {
                    return Ok(value);
                }
            }
            match trimmed.parse::<T>() {
                Ok(value) if range.contains(&value) => return Ok(value),
                _ => self.say(&format!(
                    "please enter a number from {} to {}",
                    range.start(),
                    range.end()
                ))?,
            }
        }
    }

    /// Re-asks until the answer is one of `choices`. Empty keeps `current`.
    pub fn ask_choice(
        &mut self,
        prompt: &str,
        choices: &[&str],
        current: Option<&str>,
    ) -> Result<String, BoundaryError> {
        loop {
            let line = self.read_line(prompt)?;
            let answer = line.trim().to_ascii_lowercase();
            if answer.is_empty() {
                if let Some(current) = current {
                    return Ok(current.to_string());
                }
            }
            if choices.contains(&answer.as_str()) {
                return Ok(answer);
            }
            self.say(&format!("choose one of: {}", choices.join(", ")))?;
        }
    }

    fn render_events(&mut self, events: &mut EventBus) -> Result<(), BoundaryError> {
        let lines: Vec<String> = events
            .drain()
            .filter_map(|event| describe(&self.palette, &event))
            .collect();
        for line in lines {
            self.say(&line)?;
        }
        Ok(())
    }
}

impl<R: BufRead, W: Write> TableIo for TerminalIo<R, W> {
    fn ask_player_name(&mut self, index: usize) -> Result<String, BoundaryError> {
        let line = self.read_line(&format!("Name for player {}: ", index + 1))?;
        Ok(title_case(&line))
    }

    fn ask_hand_count(&mut self, player: &Player, max_hands: u8) -> Result<u8, BoundaryError> {
        let prompt = format!(
            "{}, you have {}. How many hands (0 to leave, up to {max_hands})? ",
            player.name,
            money(player.cash)
        );
        self.ask_number(&prompt, 0..=u8::MAX, None)
    }

    fn ask_bet(
        &mut self,
        player: &Player,
        hand_index: usize,
        stake: u32,
    ) -> Result<u32, BoundaryError> {
        let prompt = format!(
            "{}, bet for hand {} (multiples of {stake}, cash {}) [{stake}]: ",
            player.name,
            hand_index + 1,
            money(player.cash)
        );
        self.ask_number(&prompt, 0..=u32::MAX, Some(stake))
    }

    fn ask_action(
        &mut self,
        player: &Player,
        hand_index: usize,
        dealer: &Dealer,
    ) -> Result<PlayerAction, BoundaryError> {
        self.say(&dealer_line(&self.palette, dealer))?;
        self.say(&player_hand_line(&self.palette, player, hand_index))?;
        loop {
            let line = self.read_line("hit, stand or double down? [h/s/d] ")?;
            if let Some(action) = parse_action(&line) {
                return Ok(action);
            }
            let labels: Vec<&str> = PlayerAction::ALL.iter().map(|a| a.label()).collect();
            self.say(&format!("choose one of: {}", labels.join(", ")))?;
        }
    }

    fn observe(&mut self, events: &mut EventBus) {
        if let Err(err) = self.render_events(events) {
            tracing::warn!(%err, "failed to write narration");
        }
    }
}
