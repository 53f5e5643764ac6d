use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::constants::{
    DIVISIONAL_SAVE_PENALTY, ELITE_BASE_THRESHOLD, STRONG_TEAM_SUPERBOWL_PROB,
    TE_PREMIUM_PER_RECEPTION, WILDCARD_SAVE_PENALTY,
};
use crate::player::Player;
use crate::probabilities::AdvancementTable;
use crate::round::Round;

/// Tunable thresholds of the valuation heuristic.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValuationParams {
    /// Extra points per reception for tight ends
    pub te_premium: f64,

    /// Base projection a player must exceed to count as elite
    pub elite_threshold: f64,

    /// Superbowl probability a team must exceed to count as a contender
    pub strong_team_superbowl_prob: f64,

    pub wildcard_penalty: f64,
    pub divisional_penalty: f64,
}

impl Default for ValuationParams {
    fn default() -> Self {
        ValuationParams {
            te_premium: TE_PREMIUM_PER_RECEPTION,
            elite_threshold: ELITE_BASE_THRESHOLD,
            strong_team_superbowl_prob: STRONG_TEAM_SUPERBOWL_PROB,
            wildcard_penalty: WILDCARD_SAVE_PENALTY,
            divisional_penalty: DIVISIONAL_SAVE_PENALTY,
        }
    }
}

/// Converts a player's season numbers into a round-specific ranking score.
///
/// The score is the base projection weighted by the team's chance of playing
/// that round, with elite players on contenders discounted in the early rounds
/// so they are saved for later.
#[derive(Clone, Debug)]
pub struct Valuator {
    table: AdvancementTable,
    bye_teams: HashSet<String>,
    params: ValuationParams,
}

impl Valuator {
    pub fn new(table: AdvancementTable, bye_teams: HashSet<String>, params: ValuationParams) -> Self {
        Valuator {
            table,
            bye_teams,
            params,
        }
    }

    /// Valuator with the default heuristic thresholds.
    pub fn with_defaults<I, S>(table: AdvancementTable, bye_teams: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            table,
            bye_teams.into_iter().map(Into::into).collect(),
            ValuationParams::default(),
        )
    }

    pub fn table(&self) -> &AdvancementTable {
        &self.table
    }

    pub fn params(&self) -> &ValuationParams {
        &self.params
    }

    pub fn is_bye_team(&self, team: &str) -> bool {
        self.bye_teams.contains(team)
    }

    /// Projected points for one game, tight end premium included.
    pub fn base_projection(&self, player: &Player) -> f64 {
        player.base_projection(self.params.te_premium)
    }

    /// Probability of the player's team playing in a round, 0 if unlisted.
    pub fn advancement_probability(&self, team: &str, round: Round) -> f64 {
        self.table.get(team, round)
    }

    /// Effective value of a player for a round. Never negative for
    /// non-negative inputs, never fails.
    pub fn value(&self, player: &Player, round: Round) -> f64 {
        let base = self.base_projection(player);

        if round == Round::Wildcard && self.is_bye_team(&player.team) {
            return 0.0;
        }

        let mut effective = base * self.advancement_probability(&player.team, round);

        if round.is_early() {
            let elite = base > self.params.elite_threshold;
            let contender = self.table.get(&player.team, Round::Superbowl)
                > self.params.strong_team_superbowl_prob;

            if elite && contender {
                effective *= match round {
                    Round::Wildcard => self.params.wildcard_penalty,
                    _ => self.params.divisional_penalty,
                };
            }
        }

        effective
    }
}
