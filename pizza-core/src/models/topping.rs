use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A topping from the fixed menu.
///
/// The derived ordering follows declaration order, so a `BTreeSet<Topping>`
/// iterates in menu order no matter when each topping was ticked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Topping {
    Pepperoni,
    Mushrooms,
    Onions,
    Sausage,
    Bacon,
    Pineapple,
}

impl Topping {
    pub fn all() -> &'static [Topping] {
        &[
            Topping::Pepperoni,
            Topping::Mushrooms,
            Topping::Onions,
            Topping::Sausage,
            Topping::Bacon,
            Topping::Pineapple,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Pepperoni => "Pepperoni",
            Self::Mushrooms => "Mushrooms",
            Self::Onions => "Onions",
            Self::Sausage => "Sausage",
            Self::Bacon => "Bacon",
            Self::Pineapple => "Pineapple",
        }
    }

    /// Parses a topping name, ignoring case.
    pub fn parse(s: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|topping| topping.label().eq_ignore_ascii_case(s.trim()))
    }
}

impl fmt::Display for Topping {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A topping paired with its configured surcharge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToppingOption {
    pub topping: Topping,
    pub unit_price: Decimal,
}
