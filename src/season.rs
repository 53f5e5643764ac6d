use serde::{Deserialize, Serialize};
use tracing::{info, info_span, warn};

use crate::allocator::allocate;
use crate::elimination::EliminationPolicy;
use crate::lineup::Lineup;
use crate::roster::RosterStore;
use crate::round::Round;
use crate::valuation::Valuator;

/// Lineups for every planned round plus run-wide totals.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SeasonPlan {
    /// One lineup per round, in the order the rounds were played
    pub lineups: Vec<Lineup>,

    /// Sum of every lineup's `total_projected`
    pub total_projected: f64,

    /// Players marked used by the end of the run
    pub players_used: usize,
}

impl SeasonPlan {
    pub fn lineup(&self, round: Round) -> Option<&Lineup> {
        self.lineups.iter().find(|l| l.round == round)
    }
}

/// Runs the greedy allocation round by round.
///
/// Owns the roster store for the length of a run; each round's picks and
/// eliminations are committed before the next round is planned.
pub struct SeasonDriver {
    store: RosterStore,
    valuator: Valuator,
    elimination: EliminationPolicy,
}

impl SeasonDriver {
    pub fn new(store: RosterStore, valuator: Valuator, elimination: EliminationPolicy) -> Self {
        SeasonDriver {
            store,
            valuator,
            elimination,
        }
    }

    pub fn store(&self) -> &RosterStore {
        &self.store
    }

    pub fn valuator(&self) -> &Valuator {
        &self.valuator
    }

    /// Give back the store with its used/eliminated state.
    pub fn into_store(self) -> RosterStore {
        self.store
    }

    /// Plan a single round: allocate, then apply that round's elimination step.
    pub fn play_round(&mut self, round: Round) -> Lineup {
        let _span = info_span!("round", round = %round).entered();

        let lineup = allocate(round, &mut self.store, &self.valuator);
        info!(
            filled = lineup.filled_count(),
            total_projected = lineup.total_projected,
            "lineup selected"
        );

        self.elimination.apply(round, &mut self.store);
        lineup
    }

    /// Plan the given rounds in bracket order.
    ///
    /// Rounds are always played wildcard through superbowl, whatever order
    /// they are passed in; repeated rounds are planned once.
    pub fn run(&mut self, rounds: &[Round]) -> SeasonPlan {
        let mut ordered = rounds.to_vec();
        ordered.sort();
        ordered.dedup();
        if ordered != rounds {
            warn!("rounds {:?} reordered to bracket order {:?}", rounds, ordered);
        }

        let lineups: Vec<Lineup> = ordered.into_iter().map(|round| self.play_round(round)).collect();
        let total_projected: f64 = lineups.iter().map(|l| l.total_projected).sum();
        let players_used = self.store.used_count();

        info!(total_projected, players_used, "season planned");

        SeasonPlan {
            lineups,
            total_projected,
            players_used,
        }
    }

    /// Plan the full bracket, wildcard through superbowl.
    pub fn run_all(&mut self) -> SeasonPlan {
        self.run(&Round::ALL)
    }
}
