use crate::settings::Palette;
use blackjack_core::{Card, Dealer, Event, Hand, Payout, Player, RoundPhase, Suit};
use crossterm::style::Stylize;

pub fn suit_symbol(suit: Suit) -> char {
    match suit {
        Suit::Clubs => '\u{2663}',
        Suit::Spades => '\u{2660}',
        Suit::Diamonds => '\u{2666}',
        Suit::Hearts => '\u{2665}',
    }
}

pub fn card_text(palette: &Palette, card: &Card) -> String {
    if card.hidden {
        return "??".to_string();
    }
    let text = format!("{}{}", card.rank.label(), suit_symbol(card.suit));
    if !palette.enabled {
        return text;
    }
    let style = palette.style(card.suit);
    match style.bg {
        Some(bg) => text.with(style.fg).on(bg).to_string(),
        None => text.with(style.fg).to_string(),
    }
}

/// `/`-separated totals, e.g. `7/17`.
pub fn totals_text(hand: &Hand) -> String {
    let totals: Vec<String> = hand.totals().iter().map(u8::to_string).collect();
    if totals.is_empty() {
        "-".to_string()
    } else {
        totals.join("/")
    }
}

pub fn hand_text(palette: &Palette, hand: &Hand) -> String {
    let cards: Vec<String> = hand
        .cards()
        .iter()
        .map(|card| card_text(palette, card))
        .collect();
    format!("{} ({})", cards.join(" "), totals_text(hand))
}

pub fn dealer_line(palette: &Palette, dealer: &Dealer) -> String {
    format!("{}: {}", dealer.name, hand_text(palette, &dealer.hand))
}

pub fn player_hand_line(palette: &Palette, player: &Player, hand_index: usize) -> String {
    let Some(hand) = player.hand(hand_index) else {
        return format!("{}: no hand {}", player.name, hand_index + 1);
    };
    let label = if player.hands().len() > 1 {
        format!("{} (hand {})", player.name, hand_index + 1)
    } else {
        player.name.clone()
    };
    format!(
        "{label}: {} bet {} cash {}",
        hand_text(palette, hand),
        hand.wager,
        money(player.cash)
    )
}

/// Whole amounts print without decimals, blackjack halves with two.
pub fn money(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("{amount:.0}")
    } else {
        format!("{amount:.2}")
    }
}

fn hand_label(player: &str, hand: usize) -> String {
    if hand == 0 {
        player.to_string()
    } else {
        format!("{player} (hand {})", hand + 1)
    }
}

/// One narration line per event, or `None` for events not worth a line.
pub fn describe(palette: &Palette, event: &Event) -> Option<String> {
    let line = match event {
        Event::PlayerSeated { name, cash, human } => {
            let kind = if *human { "" } else { " (cpu)" };
            format!("{name}{kind} sits down with {}", money(*cash))
        }
        Event::PlayerLeft { name, cash } => format!("{name} leaves the table with {}", money(*cash)),
        Event::PlayerBroke { name, cash } => {
            format!("{name} cannot cover the stake with {} and leaves", money(*cash))
        }
        Event::PhaseEntered {
            round,
            phase: RoundPhase::Betting,
        } => format!("--- round {round} ---"),
        Event::PhaseEntered { .. } => return None,
        Event::InputRejected { player, reason } => {
            use blackjack_core::Rejection::*;
            let why = match reason {
                NotStakeMultiple => "bets must be a multiple of the stake",
                NotPositive => "bets must be above zero",
                InsufficientCash => "not enough cash for that bet",
                TooManyHands => "too many hands",
                DoubleNotAllowed => "double down needs two cards and cash to match",
            };
            format!("{player}: {why}")
        }
        Event::BetPlaced {
            player,
            hand,
            amount,
            cash,
        } => format!(
            "{} bets {amount}, {} left",
            hand_label(player, *hand),
            money(*cash)
        ),
        Event::CardDealt { .. } | Event::DealerCardDealt { .. } => return None,
        Event::NaturalBlackjack { player, hand, paid } => {
            if *paid {
                format!("{} has blackjack!", hand_label(player, *hand))
            } else {
                format!(
                    "{} has blackjack, paid once the dealer checks",
                    hand_label(player, *hand)
                )
            }
        }
        Event::Hit {
            player,
            hand,
            card,
            value,
        } => format!(
            "{} draws {} ({value})",
            hand_label(player, *hand),
            card_text(palette, card)
        ),
        Event::Stood {
            player,
            hand,
            value,
        } => format!("{} stood on {value}", hand_label(player, *hand)),
        Event::DoubledDown {
            player,
            hand,
            wager,
            card,
            value,
        } => format!(
            "{} doubles to {wager} and draws {} ({value})",
            hand_label(player, *hand),
            card_text(palette, card)
        ),
        Event::Busted {
            player,
            hand,
            value,
        } => format!("{} busts on {value}", hand_label(player, *hand)),
        Event::DealerRevealed { card, value } => {
            format!("Dealer reveals {} ({value})", card_text(palette, card))
        }
        Event::DealerHits { card, value } => {
            format!("Dealer draws {} ({value})", card_text(palette, card))
        }
        Event::DealerStands { value } => format!("Dealer stands on {value}"),
        Event::DealerBusts { value } => format!("Dealer busts on {value}"),
        Event::HandSettled {
            player,
            hand,
            payout,
            credited,
            cash,
            ..
        } => {
            let who = hand_label(player, *hand);
            match payout {
                Payout::Blackjack => format!(
                    "{who} is paid {} for blackjack, now {}",
                    money(*credited),
                    money(*cash)
                ),
                Payout::Win => format!("{who} wins {}, now {}", money(*credited), money(*cash)),
                Payout::Push => format!("{who} pushes, now {}", money(*cash)),
                Payout::Loss => format!("{who} loses, now {}", money(*cash)),
            }
        }
        Event::RoundFinished { .. } => return None,
        Event::SessionEnded { rounds } => format!("Table closed after {rounds} rounds"),
    };
    Some(line)
}
