use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::TE_PREMIUM_PER_RECEPTION;

/// Lineup position a player can fill.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    QB,
    RB,
    WR,
    TE,
}

impl Position {
    pub const ALL: [Position; 4] = [Position::QB, Position::RB, Position::WR, Position::TE];

    pub fn as_str(&self) -> &'static str {
        match self {
            Position::QB => "QB",
            Position::RB => "RB",
            Position::WR => "WR",
            Position::TE => "TE",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Position {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Stat sheets use upper-case codes; anything else is not a lineup position
        match s.trim() {
            "QB" => Ok(Position::QB),
            "RB" => Ok(Position::RB),
            "WR" => Ok(Position::WR),
            "TE" => Ok(Position::TE),
            other => Err(format!("unsupported position: {other}")),
        }
    }
}

/// Season statistics for one player, as read from the team stat sheets.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub passing_yards: f64,
    pub passing_tds: u32,
    pub passing_ints: u32,
    pub rushing_yards: f64,
    pub rushing_tds: u32,
    pub receptions: u32,
    pub receiving_yards: f64,
    pub receiving_tds: u32,
    pub sacks: f64,
    pub defense_ints: u32,
    pub fumbles_forced: u32,
    pub fumbles_recovered: u32,
}

/// A rostered player.
///
/// Selection state (`used`) lives in the [`RosterStore`](crate::roster::RosterStore),
/// not on the player itself.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,

    /// Team abbreviation (e.g. "DEN")
    pub team: String,

    pub position: Position,

    /// Games played this season, may be zero
    pub games_played: u32,

    #[serde(default)]
    pub stats: PlayerStats,

    /// Season average fantasy points per game
    pub fpts_per_game: f64,

    /// Season total fantasy points
    #[serde(default)]
    pub total_fpts: f64,
}

impl Player {
    pub fn new(name: &str, team: &str, position: Position, games_played: u32, fpts_per_game: f64) -> Self {
        Player {
            name: name.to_string(),
            team: team.to_string(),
            position,
            games_played,
            stats: PlayerStats::default(),
            fpts_per_game,
            total_fpts: fpts_per_game * games_played as f64,
        }
    }

    /// Builder-style setter for receptions, mostly for fixtures.
    pub fn with_receptions(mut self, receptions: u32) -> Self {
        self.stats.receptions = receptions;
        self
    }

    /// Projected points for a single playoff game.
    ///
    /// Tight ends get `te_premium` extra points per reception, prorated per game.
    /// A player with zero games gets no premium.
    pub fn base_projection(&self, te_premium: f64) -> f64 {
        let mut points = self.fpts_per_game;
        if self.position == Position::TE && self.games_played > 0 {
            points += (self.stats.receptions as f64 * te_premium) / self.games_played as f64;
        }
        points
    }

    /// Projection with the standard half-point tight end premium.
    pub fn projection(&self) -> f64 {
        self.base_projection(TE_PREMIUM_PER_RECEPTION)
    }
}
