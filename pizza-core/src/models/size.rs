use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::format_currency;

/// Pizza size. The base price of an order is looked up by size.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum PizzaSize {
    #[default]
    Small,
    Medium,
    Large,
    Super,
}

impl PizzaSize {
    /// All sizes in dropdown order. The first entry is the default.
    pub fn all() -> &'static [PizzaSize] {
        &[
            PizzaSize::Small,
            PizzaSize::Medium,
            PizzaSize::Large,
            PizzaSize::Super,
        ]
    }

    /// Zero-based position in the size dropdown.
    pub fn index(&self) -> usize {
        match self {
            Self::Small => 0,
            Self::Medium => 1,
            Self::Large => 2,
            Self::Super => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::all().get(index).copied()
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Small => "Small",
            Self::Medium => "Medium",
            Self::Large => "Large",
            Self::Super => "Super",
        }
    }

    /// Parses a size name, ignoring case.
    pub fn parse(s: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|size| size.label().eq_ignore_ascii_case(s.trim()))
    }
}

impl fmt::Display for PizzaSize {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A size paired with its configured base price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeOption {
    pub size: PizzaSize,
    pub base_price: Decimal,
}

impl SizeOption {
    pub fn label(&self) -> &'static str {
        self.size.label()
    }

    /// Label as shown in the size dropdown, e.g. `Small ($8.00)`.
    pub fn display_label(&self) -> String {
        format!("{} ({})", self.label(), format_currency(self.base_price))
    }
}
