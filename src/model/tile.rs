use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Suit {
    Bamboo,
    Characters,
    Dots,
    Wind,
    Dragon,
    Flower,
    Season,
}

impl Suit {
    pub fn all() -> [Suit; 7] {
        [
            Suit::Bamboo,
            Suit::Characters,
            Suit::Dots,
            Suit::Wind,
            Suit::Dragon,
            Suit::Flower,
            Suit::Season,
        ]
    }

    /// single character used in board dumps, e.g. `5b`
    pub fn code(&self) -> char {
        match self {
            Suit::Bamboo => 'b',
            Suit::Characters => 'c',
            Suit::Dots => 'd',
            Suit::Wind => 'w',
            Suit::Dragon => 'r',
            Suit::Flower => 'f',
            Suit::Season => 's',
        }
    }

    pub fn from_code(code: char) -> Option<Suit> {
        Suit::all().into_iter().find(|suit| suit.code() == code)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Suit::Bamboo => "bamboo",
            Suit::Characters => "characters",
            Suit::Dots => "dots",
            Suit::Wind => "wind",
            Suit::Dragon => "dragon",
            Suit::Flower => "flower",
            Suit::Season => "season",
        }
    }
}

/// What two tiles must share to be matched. The face is not part of it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileIdentity {
    pub value: u8,
    pub suit: Suit,
}

#[derive(Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct Tile {
    pub value: u8,
    pub suit: Suit,
    /// display reference owned by the presentation layer, e.g. an image path
    #[serde(default)]
    pub face: String,
}

impl Tile {
    pub fn new(value: u8, suit: Suit) -> Self {
        Self {
            value,
            suit,
            face: format!("tiles/{}-{}.png", suit.name(), value),
        }
    }

    pub fn with_face(value: u8, suit: Suit, face: impl Into<String>) -> Self {
        Self {
            value,
            suit,
            face: face.into(),
        }
    }

    pub fn identity(&self) -> TileIdentity {
        TileIdentity {
            value: self.value,
            suit: self.suit,
        }
    }

    pub fn matches(&self, other: &Tile) -> bool {
        self.identity() == other.identity()
    }

    /// Parse a tile from its dump code, e.g. "5b" or "3r"
    pub fn parse(s: &str) -> Option<Self> {
        let mut chars = s.trim().chars();
        let suit = Suit::from_code(chars.next_back()?)?;
        let value = chars.as_str().parse::<u8>().ok()?;
        Some(Self::new(value, suit))
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.value, self.suit.code())
    }
}

impl std::fmt::Debug for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.value, self.suit.code())
    }
}
