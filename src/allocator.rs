use rayon::prelude::*;
use std::cmp::Ordering;
use tracing::debug;

use crate::lineup::{Lineup, Slot};
use crate::player::Position;
use crate::roster::{PlayerId, RosterStore};
use crate::round::Round;
use crate::valuation::Valuator;

/// Rank the available players at a position for a round.
///
/// Candidates are unused players on teams still alive, sorted by effective
/// value, highest first. The sort is stable: equal values keep roster order.
pub fn rank_candidates(
    round: Round,
    position: Position,
    store: &RosterStore,
    valuator: &Valuator,
) -> Vec<(PlayerId, f64)> {
    let mut scored: Vec<(PlayerId, f64)> = store
        .candidates(position)
        .into_iter()
        .map(|id| (id, valuator.value(store.player(id), round)))
        .collect();

    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    scored
}

/// Fill a lineup for a round and mark every chosen player as used.
///
/// Each position is ranked independently (in parallel); the chosen players
/// are then committed to the store in one serial pass. Positions with fewer
/// candidates than slots leave the trailing slots empty.
///
/// `total_projected` sums the base projections of the placed players, not the
/// effective values used for ranking.
pub fn allocate(round: Round, store: &mut RosterStore, valuator: &Valuator) -> Lineup {
    let view: &RosterStore = store;
    let ranked: Vec<(Position, Vec<(PlayerId, f64)>)> = Position::ALL
        .par_iter()
        .map(|&position| (position, rank_candidates(round, position, view, valuator)))
        .collect();

    let mut lineup = Lineup::new(round);
    for (position, candidates) in ranked {
        for (&slot, &(id, value)) in Slot::for_position(position).iter().zip(candidates.iter()) {
            lineup.set(slot, id);
            store.mark_used(id);
            debug!(
                round = %round,
                slot = %slot,
                player = %store.player(id).name,
                value,
                "slot filled"
            );
        }
    }

    lineup.total_projected = lineup
        .players()
        .map(|id| valuator.base_projection(store.player(id)))
        .sum();

    lineup
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::Player;
    use crate::probabilities::AdvancementTable;
    use crate::team::{Conference, Team};

    fn make_store() -> RosterStore {
        let mut store = RosterStore::new();
        store.add_team(Team::new("BUF", 2, Conference::AFC, false));
        store.add_team(Team::new("KC", 3, Conference::AFC, false));
        store.add_player(Player::new("Buf QB", "BUF", Position::QB, 17, 22.0));
        store.add_player(Player::new("KC QB", "KC", Position::QB, 17, 20.0));
        store.add_player(Player::new("Buf RB", "BUF", Position::RB, 17, 12.0));
        store.add_player(Player::new("KC RB", "KC", Position::RB, 17, 12.0));
        store.add_player(Player::new("Buf WR", "BUF", Position::WR, 17, 9.0));
        store.add_player(Player::new("KC TE", "KC", Position::TE, 10, 10.0).with_receptions(20));
        store
    }

    fn make_valuator() -> Valuator {
        let table = AdvancementTable::new()
            .with(Round::Wildcard, "BUF", 0.5)
            .with(Round::Wildcard, "KC", 0.5)
            .with(Round::Divisional, "KC", 0.4);
        Valuator::with_defaults(table, Vec::<String>::new())
    }

    #[test]
    fn test_ranking_is_stable_on_ties() {
        let store = make_store();
        let ranked = rank_candidates(Round::Wildcard, Position::RB, &store, &make_valuator());
        // Both RBs are worth 6.0; roster order decides
        assert_eq!(ranked.iter().map(|(id, _)| *id).collect::<Vec<_>>(), vec![PlayerId(2), PlayerId(3)]);
    }

    #[test]
    fn test_ranking_by_effective_value() {
        let store = make_store();
        let ranked = rank_candidates(Round::Divisional, Position::QB, &store, &make_valuator());
        // BUF has no divisional entry, so KC's QB ranks first
        assert_eq!(ranked[0].0, PlayerId(1));
        assert!((ranked[0].1 - 8.0).abs() < 1e-10);
        assert_eq!(ranked[1].1, 0.0);
    }

    #[test]
    fn test_allocate_fills_and_marks_used() {
        let mut store = make_store();
        let lineup = allocate(Round::Wildcard, &mut store, &make_valuator());

        assert_eq!(lineup.round, Round::Wildcard);
        assert_eq!(lineup.qb, Some(PlayerId(0)));
        assert_eq!(lineup.rb1, Some(PlayerId(2)));
        assert_eq!(lineup.rb2, Some(PlayerId(3)));
        assert_eq!(lineup.rb3, None);
        assert_eq!(lineup.wr1, Some(PlayerId(4)));
        assert_eq!(lineup.wr2, None);
        assert_eq!(lineup.te1, Some(PlayerId(5)));
        assert_eq!(lineup.te2, None);

        for id in lineup.players() {
            assert!(store.is_used(id));
        }
        assert_eq!(store.used_count(), 5);
        assert!(!store.is_used(PlayerId(1)));
    }

    #[test]
    fn test_total_uses_base_projection() {
        let mut store = make_store();
        let lineup = allocate(Round::Wildcard, &mut store, &make_valuator());
        // 22 + 12 + 12 + 9 + (10 + 20 * 0.5 / 10), no probability weighting
        assert!((lineup.total_projected - 66.0).abs() < 1e-10);
    }

    #[test]
    fn test_used_players_not_reselected() {
        let mut store = make_store();
        let valuator = make_valuator();
        let first = allocate(Round::Wildcard, &mut store, &valuator);
        let second = allocate(Round::Divisional, &mut store, &valuator);

        assert_eq!(second.qb, Some(PlayerId(1)));
        assert_eq!(second.filled_count(), 1);
        for id in second.players() {
            assert!(!first.players().any(|p| p == id));
        }
    }

    #[test]
    fn test_eliminated_team_contributes_nothing() {
        let mut store = make_store();
        store.eliminate_team("BUF");
        let lineup = allocate(Round::Wildcard, &mut store, &make_valuator());

        for id in lineup.players() {
            assert_eq!(store.player(id).team, "KC");
        }
        assert_eq!(lineup.wr1, None);
    }

    #[test]
    fn test_empty_store_yields_empty_lineup() {
        let mut store = RosterStore::new();
        let lineup = allocate(Round::Superbowl, &mut store, &make_valuator());
        assert_eq!(lineup.filled_count(), 0);
        assert_eq!(lineup.total_projected, 0.0);
    }
}
