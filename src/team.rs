use serde::{Deserialize, Serialize};

use crate::roster::PlayerId;

/// Conference a playoff team belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Conference {
    AFC,
    NFC,
}

/// Playoff team with its seed and rostered players.
///
/// `eliminated` only ever flips from false to true during a run.
#[derive(Clone, Debug)]
pub struct Team {
    /// Team abbreviation (e.g. "SEA")
    pub abbr: String,

    /// Seed within the conference
    pub seed: u8,

    pub conference: Conference,

    /// Players owned by this team, in roster order
    pub players: Vec<PlayerId>,

    pub eliminated: bool,

    /// Team skips the wildcard round
    pub bye_week: bool,
}

impl Team {
    /// Create a new team with an empty roster.
    pub fn new(abbr: &str, seed: u8, conference: Conference, bye_week: bool) -> Self {
        Team {
            abbr: abbr.to_string(),
            seed,
            conference,
            players: Vec::new(),
            eliminated: false,
            bye_week,
        }
    }
}
