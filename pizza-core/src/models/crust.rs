use std::fmt;

use serde::{Deserialize, Serialize};

/// The crust picked on the order form.
///
/// Only one crust can be active at a time. `Unselected` is the state of a
/// fresh or cleared form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CrustChoice {
    #[default]
    Unselected,
    Thin,
    Regular,
    DeepDish,
}

impl CrustChoice {
    /// The crusts a user can actually pick, in form order.
    pub fn all() -> &'static [CrustChoice] {
        &[CrustChoice::Thin, CrustChoice::Regular, CrustChoice::DeepDish]
    }

    /// Label printed on the receipt.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Unselected => "None",
            Self::Thin => "Thin",
            Self::Regular => "Regular",
            Self::DeepDish => "Deep-dish",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unselected => "none",
            Self::Thin => "thin",
            Self::Regular => "regular",
            Self::DeepDish => "deep-dish",
        }
    }

    /// Parses a crust name, ignoring case. Accepts `deepdish` and
    /// `deep dish` as spellings of `deep-dish`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Some(Self::Unselected),
            "thin" => Some(Self::Thin),
            "regular" => Some(Self::Regular),
            "deep-dish" | "deepdish" | "deep dish" => Some(Self::DeepDish),
            _ => None,
        }
    }

    pub fn is_selected(&self) -> bool {
        !matches!(self, Self::Unselected)
    }
}

impl fmt::Display for CrustChoice {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.label())
    }
}
