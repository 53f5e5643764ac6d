use serde::{Deserialize, Serialize};
use std::fmt;

use crate::player::Position;
use crate::roster::PlayerId;
use crate::round::Round;

/// One of the nine lineup slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Slot {
    QB,
    RB1,
    RB2,
    RB3,
    WR1,
    WR2,
    WR3,
    TE1,
    TE2,
}

impl Slot {
    /// Every slot in display order
    pub const ALL: [Slot; 9] = [
        Slot::QB,
        Slot::RB1,
        Slot::RB2,
        Slot::RB3,
        Slot::WR1,
        Slot::WR2,
        Slot::WR3,
        Slot::TE1,
        Slot::TE2,
    ];

    pub fn position(&self) -> Position {
        match self {
            Slot::QB => Position::QB,
            Slot::RB1 | Slot::RB2 | Slot::RB3 => Position::RB,
            Slot::WR1 | Slot::WR2 | Slot::WR3 => Position::WR,
            Slot::TE1 | Slot::TE2 => Position::TE,
        }
    }

    /// Slots a position fills, best pick first.
    pub fn for_position(position: Position) -> &'static [Slot] {
        match position {
            Position::QB => &[Slot::QB],
            Position::RB => &[Slot::RB1, Slot::RB2, Slot::RB3],
            Position::WR => &[Slot::WR1, Slot::WR2, Slot::WR3],
            Position::TE => &[Slot::TE1, Slot::TE2],
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Slot::QB => "QB",
            Slot::RB1 => "RB1",
            Slot::RB2 => "RB2",
            Slot::RB3 => "RB3",
            Slot::WR1 => "WR1",
            Slot::WR2 => "WR2",
            Slot::WR3 => "WR3",
            Slot::TE1 => "TE1",
            Slot::TE2 => "TE2",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A weekly lineup: one optional player handle per slot.
///
/// Lineups refer to players by [`PlayerId`]; the roster store keeps ownership.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Lineup {
    pub round: Round,
    pub qb: Option<PlayerId>,
    pub rb1: Option<PlayerId>,
    pub rb2: Option<PlayerId>,
    pub rb3: Option<PlayerId>,
    pub wr1: Option<PlayerId>,
    pub wr2: Option<PlayerId>,
    pub wr3: Option<PlayerId>,
    pub te1: Option<PlayerId>,
    pub te2: Option<PlayerId>,

    /// Sum of base projections of the filled slots
    pub total_projected: f64,
}

impl Lineup {
    pub fn new(round: Round) -> Self {
        Lineup {
            round,
            qb: None,
            rb1: None,
            rb2: None,
            rb3: None,
            wr1: None,
            wr2: None,
            wr3: None,
            te1: None,
            te2: None,
            total_projected: 0.0,
        }
    }

    pub fn get(&self, slot: Slot) -> Option<PlayerId> {
        match slot {
            Slot::QB => self.qb,
            Slot::RB1 => self.rb1,
            Slot::RB2 => self.rb2,
            Slot::RB3 => self.rb3,
            Slot::WR1 => self.wr1,
            Slot::WR2 => self.wr2,
            Slot::WR3 => self.wr3,
            Slot::TE1 => self.te1,
            Slot::TE2 => self.te2,
        }
    }

    fn slot_mut(&mut self, slot: Slot) -> &mut Option<PlayerId> {
        match slot {
            Slot::QB => &mut self.qb,
            Slot::RB1 => &mut self.rb1,
            Slot::RB2 => &mut self.rb2,
            Slot::RB3 => &mut self.rb3,
            Slot::WR1 => &mut self.wr1,
            Slot::WR2 => &mut self.wr2,
            Slot::WR3 => &mut self.wr3,
            Slot::TE1 => &mut self.te1,
            Slot::TE2 => &mut self.te2,
        }
    }

    pub fn set(&mut self, slot: Slot, player: PlayerId) {
        *self.slot_mut(slot) = Some(player);
    }

    /// All nine slots with their occupants, in display order.
    pub fn slots(&self) -> impl Iterator<Item = (Slot, Option<PlayerId>)> + '_ {
        Slot::ALL.into_iter().map(move |slot| (slot, self.get(slot)))
    }

    /// Handles of the filled slots, in display order.
    pub fn players(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.slots().filter_map(|(_, p)| p)
    }

    pub fn filled_count(&self) -> usize {
        self.players().count()
    }
}
