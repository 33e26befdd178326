use anyhow::{bail, Context, Result};
use blackjack_core::{Suit, STAKE_CHOICES};
use crossterm::style::Color;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const SETTINGS_SCHEMA_VERSION: u32 = 1;

/// Colour names accepted in the settings file and by `config colour`.
pub const COLOUR_NAMES: &[&str] = &[
    "black",
    "red",
    "green",
    "yellow",
    "blue",
    "magenta",
    "cyan",
    "white",
    "grey",
    "dark_grey",
    "dark_red",
    "dark_green",
    "dark_yellow",
    "dark_blue",
    "dark_magenta",
    "dark_cyan",
];

pub fn parse_colour(name: &str) -> Option<Color> {
    let color = match name.trim().to_ascii_lowercase().as_str() {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "white" => Color::White,
        "grey" | "gray" => Color::Grey,
        "dark_grey" | "dark_gray" => Color::DarkGrey,
        "dark_red" => Color::DarkRed,
        "dark_green" => Color::DarkGreen,
        "dark_yellow" => Color::DarkYellow,
        "dark_blue" => Color::DarkBlue,
        "dark_magenta" => Color::DarkMagenta,
        "dark_cyan" => Color::DarkCyan,
        _ => return None,
    };
    Some(color)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuitColours {
    pub fg: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bg: Option<String>,
}

impl SuitColours {
    fn new(fg: &str) -> Self {
        Self {
            fg: fg.to_string(),
            bg: None,
        }
    }
}

fn default_version() -> u32 {
    SETTINGS_SCHEMA_VERSION
}

fn default_stake() -> u32 {
    STAKE_CHOICES[0]
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default = "default_stake")]
    pub stake: u32,
    pub clubs: SuitColours,
    pub spades: SuitColours,
    pub diamonds: SuitColours,
    pub hearts: SuitColours,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            version: SETTINGS_SCHEMA_VERSION,
            stake: default_stake(),
            clubs: SuitColours::new("white"),
            spades: SuitColours::new("white"),
            diamonds: SuitColours::new("red"),
            hearts: SuitColours::new("red"),
        }
    }
}

impl Settings {
    pub fn suit(&self, suit: Suit) -> &SuitColours {
        match suit {
            Suit::Clubs => &self.clubs,
            Suit::Spades => &self.spades,
            Suit::Diamonds => &self.diamonds,
            Suit::Hearts => &self.hearts,
        }
    }

    pub fn suit_mut(&mut self, suit: Suit) -> &mut SuitColours {
        match suit {
            Suit::Clubs => &mut self.clubs,
            Suit::Spades => &mut self.spades,
            Suit::Diamonds => &mut self.diamonds,
            Suit::Hearts => &mut self.hearts,
        }
    }

    /// Resolves colour names. Unknown names fall back to the default
    /// colour for that suit.
    pub fn palette(&self) -> Palette {
        let defaults = Settings::default();
        let styles = Suit::ALL.map(|suit| {
            let colours = self.suit(suit);
            let fg = parse_colour(&colours.fg).unwrap_or_else(|| {
                tracing::warn!(suit = suit.id(), colour = %colours.fg, "unknown colour");
                parse_colour(&defaults.suit(suit).fg).unwrap_or(Color::Reset)
            });
            let bg = colours.bg.as_deref().and_then(|name| {
                let parsed = parse_colour(name);
                if parsed.is_none() {
                    tracing::warn!(suit = suit.id(), colour = %name, "unknown colour");
                }
                parsed
            });
            SuitStyle { fg, bg }
        });
        Palette {
            enabled: true,
            suits: styles,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuitStyle {
    pub fg: Color,
    pub bg: Option<Color>,
}

/// Resolved display colours handed to the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub enabled: bool,
    suits: [SuitStyle; 4],
}

impl Palette {
    /// No escape codes at all.
    pub fn plain() -> Self {
        Self {
            enabled: false,
            suits: [SuitStyle {
                fg: Color::Reset,
                bg: None,
            }; 4],
        }
    }

    pub fn style(&self, suit: Suit) -> SuitStyle {
        let idx = Suit::ALL
            .iter()
            .position(|candidate| *candidate == suit)
            .unwrap_or(0);
        self.suits[idx]
    }
}

pub fn default_settings_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os("BLACKJACK_CONFIG") {
        return Some(PathBuf::from(path));
    }
    std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".shell_blackjack.json"))
}

/// Reads settings, or defaults when the file does not exist yet.
pub fn load_settings(path: &Path) -> Result<Settings> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no settings file, using defaults");
        return Ok(Settings::default());
    }
    let body = fs::read_to_string(path)
        .with_context(|| format!("reading settings from {}", path.display()))?;
    let settings: Settings = serde_json::from_str(&body)
        .with_context(|| format!("parsing settings in {}", path.display()))?;
    if settings.version != SETTINGS_SCHEMA_VERSION {
        bail!(
            "unsupported settings version {} (expected {})",
            settings.version,
            SETTINGS_SCHEMA_VERSION
        );
    }
    Ok(settings)
}

pub fn save_settings(settings: &Settings, path: &Path) -> Result<()> {
    let body = serde_json::to_string_pretty(settings)?;
    fs::write(path, body).with_context(|| format!("writing settings to {}", path.display()))?;
    tracing::info!(path = %path.display(), "settings saved");
    Ok(())
}
