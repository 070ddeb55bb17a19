use std::fmt;

/// Stable identity of a player, assigned once in creation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ordinal(pub u32);

impl fmt::Display for Ordinal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Player {
    ordinal: Ordinal,
    color: String,
}

impl Player {
    /// Create a player with an explicitly supplied ordinal
    pub fn new(ordinal: Ordinal, color: impl Into<String>) -> Self {
        Player {
            ordinal,
            color: color.into(),
        }
    }

    pub fn ordinal(&self) -> Ordinal {
        self.ordinal
    }

    /// Display attribute, e.g. "red" or "#ffcc00"
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Get player name for display
    pub fn name(&self) -> String {
        format!("Player {}", self.ordinal)
    }
}

/// Hands out player ordinals in creation order.
///
/// The factory is owned by whoever creates players (usually one per session),
/// so ordinals are never reused for as long as that owner lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerFactory {
    next: u32,
}

impl PlayerFactory {
    /// Start numbering at `first`
    pub fn starting_at(first: u32) -> Self {
        PlayerFactory { next: first }
    }

    /// The ordinal the next call to [`PlayerFactory::create`] will assign
    pub fn next_ordinal(&self) -> Ordinal {
        Ordinal(self.next)
    }

    pub fn create(&mut self, color: impl Into<String>) -> Player {
        let player = Player::new(Ordinal(self.next), color);
        self.next += 1;
        player
    }

    /// Create one player per color, in the given order
    pub fn roster<I, S>(&mut self, colors: I) -> Vec<Player>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        colors.into_iter().map(|color| self.create(color)).collect()
    }
}

impl Default for PlayerFactory {
    fn default() -> Self {
        Self::starting_at(1)
    }
}
