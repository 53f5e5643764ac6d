use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One stage of the playoff bracket.
///
/// Ordering follows the bracket: wildcard < divisional < championship < superbowl.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Round {
    Wildcard,
    Divisional,
    Championship,
    Superbowl,
}

impl Round {
    /// Every round in the order it is played
    pub const ALL: [Round; 4] = [
        Round::Wildcard,
        Round::Divisional,
        Round::Championship,
        Round::Superbowl,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Round::Wildcard => "wildcard",
            Round::Divisional => "divisional",
            Round::Championship => "championship",
            Round::Superbowl => "superbowl",
        }
    }

    /// Whether the save-for-later penalty can apply in this round.
    pub fn is_early(&self) -> bool {
        matches!(self, Round::Wildcard | Round::Divisional)
    }
}

impl fmt::Display for Round {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Round {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "wildcard" => Ok(Round::Wildcard),
            "divisional" => Ok(Round::Divisional),
            "championship" => Ok(Round::Championship),
            "superbowl" => Ok(Round::Superbowl),
            other => Err(format!("unknown round: {other}")),
        }
    }
}
