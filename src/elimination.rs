use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::info;

use crate::constants::{CHAMPIONSHIP_CUTOFF, SUPERBOWL_CUTOFF};
use crate::probabilities::AdvancementTable;
use crate::roster::RosterStore;
use crate::round::Round;

/// Probability cutoffs used when pruning the bracket.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EliminationParams {
    /// Teams with a championship probability below this are dropped
    pub championship_cutoff: f64,

    /// Teams with a superbowl probability below this are dropped
    pub superbowl_cutoff: f64,
}

impl Default for EliminationParams {
    fn default() -> Self {
        EliminationParams {
            championship_cutoff: CHAMPIONSHIP_CUTOFF,
            superbowl_cutoff: SUPERBOWL_CUTOFF,
        }
    }
}

/// Decides which teams drop out of the bracket once a round has been planned.
///
/// The wildcard results are a fixed prediction supplied up front; later
/// rounds are pruned by advancement probability.
#[derive(Clone, Debug)]
pub struct EliminationPolicy {
    wildcard_losers: BTreeSet<String>,
    table: AdvancementTable,
    params: EliminationParams,
}

impl EliminationPolicy {
    pub fn new<I, S>(wildcard_losers: I, table: AdvancementTable, params: EliminationParams) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        EliminationPolicy {
            wildcard_losers: wildcard_losers.into_iter().map(Into::into).collect(),
            table,
            params,
        }
    }

    pub fn wildcard_losers(&self) -> impl Iterator<Item = &str> {
        self.wildcard_losers.iter().map(String::as_str)
    }

    /// Teams this round's step would flag, independent of current state.
    pub fn targets(&self, round: Round, store: &RosterStore) -> Vec<String> {
        match round {
            Round::Wildcard => Vec::new(),
            Round::Divisional => self
                .wildcard_losers
                .iter()
                .filter(|abbr| store.team(abbr).is_some())
                .cloned()
                .collect(),
            Round::Championship => self.below_cutoff(store, Round::Championship, self.params.championship_cutoff),
            Round::Superbowl => self.below_cutoff(store, Round::Superbowl, self.params.superbowl_cutoff),
        }
    }

    fn below_cutoff(&self, store: &RosterStore, round: Round, cutoff: f64) -> Vec<String> {
        store
            .teams()
            .filter(|team| self.table.get(&team.abbr, round) < cutoff)
            .map(|team| team.abbr.clone())
            .collect()
    }

    /// Apply this round's elimination step to the store.
    ///
    /// Flags only move from active to eliminated, so applying a step twice is a no-op.
    /// Returns the teams newly eliminated by this call.
    pub fn apply(&self, round: Round, store: &mut RosterStore) -> Vec<String> {
        let newly: Vec<String> = self
            .targets(round, store)
            .into_iter()
            .filter(|abbr| store.eliminate_team(abbr))
            .collect();

        if !newly.is_empty() {
            info!(round = %round, teams = ?newly, "teams eliminated");
        }
        newly
    }
}
