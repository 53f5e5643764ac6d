use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::elimination::{EliminationParams, EliminationPolicy};
use crate::error::{PlannerError, Result};
use crate::ingest::load_roster_file;
use crate::probabilities::AdvancementTable;
use crate::roster::RosterStore;
use crate::round::Round;
use crate::season::SeasonDriver;
use crate::team::{Conference, Team};
use crate::valuation::{ValuationParams, Valuator};

/// A playoff team and where its stat sheet lives.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamEntry {
    /// Team abbreviation (e.g. "DEN")
    pub abbr: String,

    /// Seed within the conference
    pub seed: u8,

    pub conference: Conference,

    /// Stat sheet path, relative to the roster directory
    pub roster_file: PathBuf,
}

/// Everything the planner needs besides the stat sheets themselves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Playoff field, in the order rosters are loaded
    pub teams: Vec<TeamEntry>,

    /// Per-round advancement probabilities
    #[serde(default)]
    pub probabilities: AdvancementTable,

    /// Optional `round,team,probability` CSV layered over `probabilities`,
    /// relative to the config file
    #[serde(default)]
    pub probabilities_file: Option<PathBuf>,

    /// Teams that skip the wildcard round
    #[serde(default)]
    pub bye_teams: Vec<String>,

    /// Predicted wildcard losers
    #[serde(default)]
    pub wildcard_losers: Vec<String>,

    #[serde(default)]
    pub valuation: ValuationParams,

    #[serde(default)]
    pub elimination: EliminationParams,
}

impl PlannerConfig {
    /// Load and validate a JSON configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| PlannerError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config: PlannerConfig = serde_json::from_str(&content).map_err(|source| PlannerError::Json {
            path: path.to_path_buf(),
            source,
        })?;

        if let Some(file) = &config.probabilities_file {
            let file = path.parent().unwrap_or_else(|| Path::new("")).join(file);
            let extra = AdvancementTable::read_from_file(&file)?;
            info!("Layering {} probability entries from {:?}", extra.len(), file);
            config.probabilities.merge(&extra);
        }
        config.validate()?;

        info!(
            "Loaded configuration for {} teams ({} probability entries) from {:?}",
            config.teams.len(),
            config.probabilities.len(),
            path
        );
        Ok(config)
    }

    /// Check that probabilities are in range and every referenced team is listed.
    pub fn validate(&self) -> Result<()> {
        let mut known = HashSet::new();
        for team in &self.teams {
            if !known.insert(team.abbr.as_str()) {
                return Err(PlannerError::InvalidConfig(format!("team {} listed twice", team.abbr)));
            }
        }

        for round in Round::ALL {
            for (team, prob) in self.probabilities.round_entries(round) {
                if !(0.0..=1.0).contains(&prob) {
                    return Err(PlannerError::InvalidConfig(format!(
                        "{} probability for {} is {}, expected a value in [0, 1]",
                        round, team, prob
                    )));
                }
                if !known.contains(team) {
                    warn!("{} probability given for {}, which is not in the playoff field", round, team);
                }
            }
        }

        for abbr in &self.bye_teams {
            if !known.contains(abbr.as_str()) {
                return Err(PlannerError::InvalidConfig(format!(
                    "bye team {} is not in the playoff field",
                    abbr
                )));
            }
        }

        if self.bye_teams.len() != 2 {
            warn!("expected two bye teams, found {}", self.bye_teams.len());
        }

        // Losers outside the field are harmless; elimination skips unknown teams
        for abbr in &self.wildcard_losers {
            if !known.contains(abbr.as_str()) {
                warn!("wildcard loser {} is not in the playoff field", abbr);
            }
        }

        if let Some(team) = self.bye_teams.iter().find(|t| self.wildcard_losers.contains(t)) {
            return Err(PlannerError::InvalidConfig(format!(
                "{} cannot both have a bye and lose in the wildcard round",
                team
            )));
        }

        Ok(())
    }

    pub fn valuator(&self) -> Valuator {
        Valuator::new(
            self.probabilities.clone(),
            self.bye_teams.iter().cloned().collect(),
            self.valuation.clone(),
        )
    }

    pub fn elimination_policy(&self) -> EliminationPolicy {
        EliminationPolicy::new(
            self.wildcard_losers.iter().cloned(),
            self.probabilities.clone(),
            self.elimination.clone(),
        )
    }

    /// Register every team and load its stat sheet from `roster_dir`.
    pub fn build_store<P: AsRef<Path>>(&self, roster_dir: P) -> Result<RosterStore> {
        let roster_dir = roster_dir.as_ref();
        let mut store = RosterStore::new();

        for entry in &self.teams {
            let bye = self.bye_teams.contains(&entry.abbr);
            store.add_team(Team::new(&entry.abbr, entry.seed, entry.conference, bye));

            let players = load_roster_file(roster_dir.join(&entry.roster_file), &entry.abbr)?;
            for player in players {
                store.add_player(player);
            }
        }

        info!(
            "Loaded {} players from {} teams",
            store.player_count(),
            self.teams.len()
        );
        Ok(store)
    }

    /// Build a ready-to-run driver.
    pub fn driver<P: AsRef<Path>>(&self, roster_dir: P) -> Result<SeasonDriver> {
        Ok(SeasonDriver::new(
            self.build_store(roster_dir)?,
            self.valuator(),
            self.elimination_policy(),
        ))
    }
}
