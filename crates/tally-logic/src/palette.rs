//! Fixed accent palette for player display

use serde::{Deserialize, Serialize};

/// Display accent assigned to a player at registration
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Accent {
    Red,
    Blue,
    Amber,
    Emerald,
    Violet,
    Pink,
}

/// Accents in assignment order
pub const PALETTE: [Accent; 6] = [
    Accent::Red,
    Accent::Blue,
    Accent::Amber,
    Accent::Emerald,
    Accent::Violet,
    Accent::Pink,
];

impl Accent {
    /// Accent for the player registered at `position` (0-indexed), cycling
    /// through the palette.
    pub fn for_position(position: usize) -> Accent {
        PALETTE[position % PALETTE.len()]
    }

    pub fn hex(self) -> &'static str {
        match self {
            Accent::Red => "#ef4444",
            Accent::Blue => "#3b82f6",
            Accent::Amber => "#f59e0b",
            Accent::Emerald => "#10b981",
            Accent::Violet => "#8b5cf6",
            Accent::Pink => "#ec4899",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Accent::Red => "Red",
            Accent::Blue => "Blue",
            Accent::Amber => "Amber",
            Accent::Emerald => "Emerald",
            Accent::Violet => "Violet",
            Accent::Pink => "Pink",
        }
    }
}
