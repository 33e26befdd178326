use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Suit {
    Clubs,
    Spades,
    Diamonds,
    Hearts,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Spades, Suit::Diamonds, Suit::Hearts];

    pub fn id(self) -> &'static str {
        match self {
            Suit::Clubs => "clubs",
            Suit::Spades => "spades",
            Suit::Diamonds => "diamonds",
            Suit::Hearts => "hearts",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Every point value the rank may count as. Only the ace has two.
    pub fn values(self) -> &'static [u8] {
        match self {
            Rank::Ace => &[1, 11],
            Rank::Two => &[2],
            Rank::Three => &[3],
            Rank::Four => &[4],
            Rank::Five => &[5],
            Rank::Six => &[6],
            Rank::Seven => &[7],
            Rank::Eight => &[8],
            Rank::Nine => &[9],
            Rank::Ten | Rank::Jack | Rank::Queen | Rank::King => &[10],
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
    /// Face down. Only the dealer's hole card is ever dealt this way.
    #[serde(default)]
    pub hidden: bool,
}

impl Card {
    pub fn new(suit: Suit, rank: Rank) -> Self {
        Self {
            suit,
            rank,
            hidden: false,
        }
    }

    pub fn face_down(suit: Suit, rank: Rank) -> Self {
        Self {
            suit,
            rank,
            hidden: true,
        }
    }

    pub fn values(&self) -> &'static [u8] {
        self.rank.values()
    }

    /// True when the card can count as ten or eleven.
    pub fn is_ten_or_ace(&self) -> bool {
        self.values().iter().any(|value| *value >= 10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_ace_has_two_values() {
        for rank in Rank::ALL {
            let expected = if rank == Rank::Ace { 2 } else { 1 };
            assert_eq!(rank.values().len(), expected, "{rank:?}");
        }
    }

    #[test]
    fn ten_or_ace_covers_faces() {
        assert!(Card::new(Suit::Clubs, Rank::Ace).is_ten_or_ace());
        assert!(Card::new(Suit::Clubs, Rank::Ten).is_ten_or_ace());
        assert!(Card::new(Suit::Hearts, Rank::King).is_ten_or_ace());
        assert!(!Card::new(Suit::Hearts, Rank::Nine).is_ten_or_ace());
    }
}
