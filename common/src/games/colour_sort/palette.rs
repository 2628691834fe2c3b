use serde::{Deserialize, Serialize};

pub const PALETTE_SIZE: usize = 10;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Colour {
    Red,
    Green,
    Blue,
    Yellow,
    Orange,
    Purple,
    Cyan,
    Magenta,
    Maroon,
    Grey,
}

const PALETTE: [Colour; PALETTE_SIZE] = [
    Colour::Red,
    Colour::Green,
    Colour::Blue,
    Colour::Yellow,
    Colour::Orange,
    Colour::Purple,
    Colour::Cyan,
    Colour::Magenta,
    Colour::Maroon,
    Colour::Grey,
];

impl Colour {
    /// Base palette in dealing order. Level generation always takes a prefix.
    pub fn palette() -> &'static [Colour] {
        &PALETTE
    }

    pub fn name(self) -> &'static str {
        match self {
            Colour::Red => "Red",
            Colour::Green => "Green",
            Colour::Blue => "Blue",
            Colour::Yellow => "Yellow",
            Colour::Orange => "Orange",
            Colour::Purple => "Purple",
            Colour::Cyan => "Cyan",
            Colour::Magenta => "Magenta",
            Colour::Maroon => "Maroon",
            Colour::Grey => "Grey",
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Colour::Red => 'R',
            Colour::Green => 'G',
            Colour::Blue => 'B',
            Colour::Yellow => 'Y',
            Colour::Orange => 'O',
            Colour::Purple => 'P',
            Colour::Cyan => 'C',
            Colour::Magenta => 'M',
            Colour::Maroon => 'W',
            Colour::Grey => 'E',
        }
    }
}
