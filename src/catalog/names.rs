//! Kingdom and class names.
//!
//! Both are closed sets fixed by the game, so they are enums rather than
//! strings. Display names are what the game client and the option files
//! use, e.g. `"Scholar's Nest"` or `"Heavyblade"`.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

use super::items::CLASS_VICTORY_NAMES;

/// A kingdom of a run.
///
/// The five optional kingdoms are the ones a route picks from; `The Pale
/// Keep` and `Moonlit Pinnacle` close every run.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
pub enum Kingdom {
    #[strum(to_string = "Scholar's Nest")]
    #[serde(rename = "Scholar's Nest")]
    ScholarsNest,
    #[strum(to_string = "King's Arsenal")]
    #[serde(rename = "King's Arsenal")]
    KingsArsenal,
    #[strum(to_string = "Red Darkhouse")]
    #[serde(rename = "Red Darkhouse")]
    RedDarkhouse,
    #[strum(to_string = "Churchmouse Streets")]
    #[serde(rename = "Churchmouse Streets")]
    ChurchmouseStreets,
    #[strum(to_string = "Emerald Lakeside")]
    #[serde(rename = "Emerald Lakeside")]
    EmeraldLakeside,
    #[strum(to_string = "The Pale Keep")]
    #[serde(rename = "The Pale Keep")]
    PaleKeep,
    #[strum(to_string = "Moonlit Pinnacle")]
    #[serde(rename = "Moonlit Pinnacle")]
    MoonlitPinnacle,
}

impl Kingdom {
    /// Kingdoms a route chooses between, in catalog order.
    pub const OPTIONAL: [Kingdom; 5] = [
        Kingdom::ScholarsNest,
        Kingdom::KingsArsenal,
        Kingdom::RedDarkhouse,
        Kingdom::ChurchmouseStreets,
        Kingdom::EmeraldLakeside,
    ];

    /// Display name.
    #[must_use]
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Can this kingdom be ordered or excluded?
    #[must_use]
    pub fn is_optional(self) -> bool {
        !matches!(self, Kingdom::PaleKeep | Kingdom::MoonlitPinnacle)
    }

    /// Every kingdom except the terminal one, which has its own per-class
    /// layout.
    pub fn with_class_checks() -> impl Iterator<Item = Kingdom> {
        Kingdom::iter().filter(|k| *k != Kingdom::MoonlitPinnacle)
    }
}

/// A playable class.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
pub enum ClassName {
    Wizard,
    Assassin,
    Heavyblade,
    Dancer,
    Druid,
    Spellsword,
    Sniper,
    Bruiser,
    Defender,
    Ancient,
}

impl ClassName {
    /// Number of playable classes.
    pub const COUNT: usize = 10;

    /// Display name.
    #[must_use]
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Name of the synthetic token earned by finishing a run as this class.
    #[must_use]
    pub fn victory_token(self) -> &'static str {
        CLASS_VICTORY_NAMES[self as usize]
    }
}
