use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

use crate::player::{Player, Position};
use crate::team::Team;

/// Handle to a player owned by a [`RosterStore`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub usize);

/// Owns every player and team of a run along with their selection state.
///
/// Both `used` and `eliminated` flags are monotonic: once set they are never cleared.
#[derive(Clone, Debug, Default)]
pub struct RosterStore {
    /// Players in enumeration (ingestion) order
    players: Vec<Player>,

    /// Parallel to `players`
    used: Vec<bool>,

    /// Teams by abbreviation
    teams: HashMap<String, Team>,

    /// Team abbreviations in registration order
    team_order: Vec<String>,
}

impl RosterStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a team. Re-registering an abbreviation replaces the team's
    /// metadata but keeps players already added to it.
    pub fn add_team(&mut self, mut team: Team) {
        if let Some(existing) = self.teams.get(&team.abbr) {
            team.players = existing.players.clone();
        } else {
            self.team_order.push(team.abbr.clone());
        }
        self.teams.insert(team.abbr.clone(), team);
    }

    /// Add a player to the store, attaching it to its team if that team is registered.
    pub fn add_player(&mut self, player: Player) -> PlayerId {
        let id = PlayerId(self.players.len());
        match self.teams.get_mut(&player.team) {
            Some(team) => team.players.push(id),
            None => debug!("player {} added for unregistered team {}", player.name, player.team),
        }
        self.players.push(player);
        self.used.push(false);
        id
    }

    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.0]
    }

    pub fn players(&self) -> impl Iterator<Item = (PlayerId, &Player)> {
        self.players.iter().enumerate().map(|(i, p)| (PlayerId(i), p))
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// First player with the given name, in enumeration order.
    pub fn find_player(&self, name: &str) -> Option<PlayerId> {
        self.players.iter().position(|p| p.name == name).map(PlayerId)
    }

    pub fn team(&self, abbr: &str) -> Option<&Team> {
        self.teams.get(abbr)
    }

    /// Teams in registration order.
    pub fn teams(&self) -> impl Iterator<Item = &Team> {
        self.team_order.iter().filter_map(|abbr| self.teams.get(abbr))
    }

    pub fn is_used(&self, id: PlayerId) -> bool {
        self.used[id.0]
    }

    /// Mark a player as spent for the rest of the run.
    pub fn mark_used(&mut self, id: PlayerId) {
        self.used[id.0] = true;
    }

    pub fn used_count(&self) -> usize {
        self.used.iter().filter(|&&u| u).count()
    }

    /// Whether a team is out of the bracket. Players of unregistered teams
    /// count as active.
    pub fn is_eliminated(&self, abbr: &str) -> bool {
        self.teams.get(abbr).map(|t| t.eliminated).unwrap_or(false)
    }

    /// Flag a team as eliminated. Returns true if the flag changed.
    pub fn eliminate_team(&mut self, abbr: &str) -> bool {
        match self.teams.get_mut(abbr) {
            Some(team) if !team.eliminated => {
                team.eliminated = true;
                true
            }
            _ => false,
        }
    }

    /// Abbreviations of every eliminated team, sorted.
    pub fn eliminated_teams(&self) -> Vec<String> {
        let mut out: Vec<String> = self
            .teams
            .values()
            .filter(|t| t.eliminated)
            .map(|t| t.abbr.clone())
            .collect();
        out.sort();
        out
    }

    /// Whether a team is registered with a first-round bye.
    pub fn has_bye(&self, abbr: &str) -> bool {
        self.teams.get(abbr).map(|t| t.bye_week).unwrap_or(false)
    }

    pub fn is_available(&self, id: PlayerId) -> bool {
        !self.used[id.0] && !self.is_eliminated(&self.players[id.0].team)
    }

    /// Unused players at a position whose team is still alive, in enumeration order.
    pub fn candidates(&self, position: Position) -> Vec<PlayerId> {
        self.players()
            .filter(|(id, p)| p.position == position && self.is_available(*id))
            .map(|(id, _)| id)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::team::Conference;

    fn make_store() -> RosterStore {
        let mut store = RosterStore::new();
        store.add_team(Team::new("DEN", 1, Conference::AFC, true));
        store.add_team(Team::new("BUF", 3, Conference::AFC, false));
        store.add_player(Player::new("Den QB", "DEN", Position::QB, 17, 20.0));
        store.add_player(Player::new("Buf QB", "BUF", Position::QB, 17, 22.0));
        store.add_player(Player::new("Buf RB", "BUF", Position::RB, 17, 14.0));
        store
    }

    #[test]
    fn test_players_attached_to_teams() {
        let store = make_store();
        assert_eq!(store.player_count(), 3);
        assert_eq!(store.team("BUF").unwrap().players, vec![PlayerId(1), PlayerId(2)]);
        assert_eq!(store.team("DEN").unwrap().players, vec![PlayerId(0)]);
        assert!(store.has_bye("DEN"));
        assert!(!store.has_bye("BUF"));
    }

    #[test]
    fn test_candidates_in_enumeration_order() {
        let store = make_store();
        assert_eq!(store.candidates(Position::QB), vec![PlayerId(0), PlayerId(1)]);
        assert_eq!(store.candidates(Position::RB), vec![PlayerId(2)]);
        assert!(store.candidates(Position::TE).is_empty());
    }

    #[test]
    fn test_used_players_excluded() {
        let mut store = make_store();
        store.mark_used(PlayerId(0));
        assert!(store.is_used(PlayerId(0)));
        assert_eq!(store.candidates(Position::QB), vec![PlayerId(1)]);
        assert_eq!(store.used_count(), 1);
    }

    #[test]
    fn test_eliminated_team_excluded() {
        let mut store = make_store();
        assert!(store.eliminate_team("BUF"));
        assert!(!store.eliminate_team("BUF"));
        assert!(!store.eliminate_team("XXX"));

        assert_eq!(store.candidates(Position::QB), vec![PlayerId(0)]);
        assert!(store.candidates(Position::RB).is_empty());
        assert_eq!(store.eliminated_teams(), vec!["BUF".to_string()]);
    }

    #[test]
    fn test_re_registering_team_keeps_players() {
        let mut store = make_store();
        store.add_team(Team::new("BUF", 2, Conference::AFC, false));
        assert_eq!(store.team("BUF").unwrap().seed, 2);
        assert_eq!(store.team("BUF").unwrap().players.len(), 2);
        assert_eq!(store.teams().count(), 2);
    }

    #[test]
    fn test_find_player() {
        let store = make_store();
        assert_eq!(store.find_player("Buf RB"), Some(PlayerId(2)));
        assert_eq!(store.find_player("Nobody"), None);
    }
}
