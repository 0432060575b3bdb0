use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::HandError;

/// Represents one of the four suits in a standard 52-card deck.
/// Used as a component of [`Card`] and matched by flush and nobs checks.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Suit {
    /// Clubs suit (♣)
    Clubs,
    /// Diamonds suit (♦)
    Diamonds,
    /// Hearts suit (♥)
    Hearts,
    /// Spades suit (♠)
    Spades,
}

impl Suit {
    pub fn letter(self) -> char {
        match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Suit::Clubs => '♣',
            Suit::Diamonds => '♦',
            Suit::Hearts => '♥',
            Suit::Spades => '♠',
        }
    }
}

impl FromStr for Suit {
    type Err = HandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "C" | "♣" => Ok(Suit::Clubs),
            "D" | "♦" => Ok(Suit::Diamonds),
            "H" | "♥" => Ok(Suit::Hearts),
            "S" | "♠" => Ok(Suit::Spades),
            _ => Err(HandError::InvalidSuit(s.to_string())),
        }
    }
}

/// Represents the rank of a playing card from Ace through King.
/// Discriminants are the low sequence positions (ace=1); see
/// [`Rank::high_position`] for the ace-high position.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Rank {
    /// Ace (1, or 14 when played high)
    Ace = 1,
    /// Rank 2
    Two,
    /// Rank 3
    Three,
    /// Rank 4
    Four,
    /// Rank 5
    Five,
    /// Rank 6
    Six,
    /// Rank 7
    Seven,
    /// Rank 8
    Eight,
    /// Rank 9
    Nine,
    /// Rank 10
    Ten,
    /// Jack (11)
    Jack,
    /// Queen (12)
    Queen,
    /// King (13)
    King,
}

/// Position of an ace played above the king.
pub const ACE_HIGH: u8 = 14;

impl Rank {
    pub fn position(self) -> u8 {
        self as u8
    }

    pub fn high_position(self) -> u8 {
        match self {
            Rank::Ace => ACE_HIGH,
            r => r as u8,
        }
    }

    /// Counting value: ace is one, face cards are ten.
    pub fn points(self) -> u8 {
        match self {
            Rank::Jack | Rank::Queen | Rank::King => 10,
            r => r as u8,
        }
    }

    pub fn from_position(v: u8) -> Option<Rank> {
        match v {
            1 | ACE_HIGH => Some(Rank::Ace),
            2 => Some(Rank::Two),
            3 => Some(Rank::Three),
            4 => Some(Rank::Four),
            5 => Some(Rank::Five),
            6 => Some(Rank::Six),
            7 => Some(Rank::Seven),
            8 => Some(Rank::Eight),
            9 => Some(Rank::Nine),
            10 => Some(Rank::Ten),
            11 => Some(Rank::Jack),
            12 => Some(Rank::Queen),
            13 => Some(Rank::King),
            _ => None,
        }
    }

    /// Text form used by `Display` and accepted by `FromStr`.
    pub fn token(self) -> &'static str {
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

impl FromStr for Rank {
    type Err = HandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "A" => Ok(Rank::Ace),
            "T" => Ok(Rank::Ten),
            "J" => Ok(Rank::Jack),
            "Q" => Ok(Rank::Queen),
            "K" => Ok(Rank::King),
            n => n
                .parse::<u8>()
                .ok()
                .filter(|v| (2..=10).contains(v))
                .and_then(Rank::from_position)
                .ok_or_else(|| HandError::InvalidRank(s.to_string())),
        }
    }
}

/// Read-only capability every evaluated card must provide.
///
/// Detectors only ever look at cards through this trait, so any card type
/// (including ones with jokers) can be scored. Positions define sequence
/// adjacency; `ranks` and `follows` are derived from them.
pub trait RankedCard: Copy + Eq + fmt::Debug {
    /// Low sequence position (ace=1 … king=13). Jokers report 0.
    fn position(&self) -> u8;

    fn suit(&self) -> Option<Suit>;

    fn rank(&self) -> Option<Rank>;

    fn points(&self) -> u8 {
        self.rank().map_or(0, Rank::points)
    }

    /// Position with the ace counted above the king.
    fn high_position(&self) -> u8 {
        self.rank().map_or(self.position(), Rank::high_position)
    }

    fn is_joker(&self) -> bool {
        self.rank().is_none()
    }

    fn is_jack(&self) -> bool {
        self.rank() == Some(Rank::Jack)
    }

    /// Same rank position.
    fn ranks(&self, other: &Self) -> bool {
        self.position() == other.position()
    }

    /// One position directly above `other`.
    fn follows(&self, other: &Self) -> bool {
        self.position() == other.position() + 1
    }
}

/// Represents a single playing card with a suit and rank.
/// Equality is by rank and suit, so two decks' copies of a card compare equal.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Card {
    /// The suit of the card (Clubs, Diamonds, Hearts, or Spades)
    pub suit: Suit,
    /// The rank of the card (Ace through King)
    pub rank: Rank,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self { suit, rank }
    }
}

impl RankedCard for Card {
    fn position(&self) -> u8 {
        self.rank.position()
    }

    fn suit(&self) -> Option<Suit> {
        Some(self.suit)
    }

    fn rank(&self) -> Option<Rank> {
        Some(self.rank)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.token(), self.suit.letter())
    }
}

impl FromStr for Card {
    type Err = HandError;

    /// Parses "AS", "10h", "TD", "Q♥".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let Some((split, _)) = s.char_indices().last() else {
            return Err(HandError::InvalidRank(s.to_string()));
        };
        let (rank, suit) = s.split_at(split);
        Ok(Card {
            rank: rank.parse()?,
            suit: suit.parse()?,
        })
    }
}

/// Parses a whitespace or comma separated list of cards.
///
/// ```
/// use crib_engine::cards::{parse_cards, Card, Rank, Suit};
///
/// let cards = parse_cards("AS, 10h QD").unwrap();
/// assert_eq!(cards[1], Card::new(Rank::Ten, Suit::Hearts));
/// assert_eq!(cards.len(), 3);
/// ```
pub fn parse_cards(input: &str) -> Result<Vec<Card>, HandError> {
    input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .map(str::parse)
        .collect()
}

pub fn all_suits() -> [Suit; 4] {
    [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades]
}

pub fn all_ranks() -> [Rank; 13] {
    [
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
    ]
}
