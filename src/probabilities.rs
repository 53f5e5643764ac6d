use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::File;
use std::path::Path;
use tracing::warn;

use crate::error::{PlannerError, Result};
use crate::round::Round;

/// Per-round probability of each team playing in (and advancing through) that round.
///
/// Lookups never fail: a team missing from a round is treated as a certain
/// non-participant with probability 0.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AdvancementTable {
    rounds: BTreeMap<Round, BTreeMap<String, f64>>,
}

impl AdvancementTable {
    pub fn new() -> Self {
        AdvancementTable {
            rounds: BTreeMap::new(),
        }
    }

    /// Read a table from a CSV file.
    /// Format: round,team,probability (`#` starts a comment line)
    pub fn read_from_file<P: AsRef<Path>>(filepath: P) -> Result<Self> {
        let path = filepath.as_ref();
        let file = File::open(path).map_err(|source| PlannerError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .comment(Some(b'#'))
            .trim(csv::Trim::All)
            .from_reader(file);
        let mut table = AdvancementTable::new();

        for result in reader.records() {
            let record = result.map_err(|source| PlannerError::Csv {
                path: path.to_path_buf(),
                source,
            })?;
            if record.len() != 3 {
                warn!("skipping probability line with {} fields: {:?}", record.len(), record);
                continue;
            }

            let round: Round = record[0].parse().map_err(PlannerError::InvalidConfig)?;
            let prob: f64 = record[2].parse().map_err(|e| {
                PlannerError::InvalidConfig(format!("invalid probability '{}': {}", &record[2], e))
            })?;

            table.set(round, &record[1], prob);
        }

        Ok(table)
    }

    /// Add or update a team's probability for a round.
    pub fn set(&mut self, round: Round, team: &str, prob: f64) {
        self.rounds
            .entry(round)
            .or_default()
            .insert(team.to_string(), prob);
    }

    /// Builder-style variant of [`set`](Self::set).
    pub fn with(mut self, round: Round, team: &str, prob: f64) -> Self {
        self.set(round, team, prob);
        self
    }

    /// Layer another table over this one; its entries win.
    pub fn merge(&mut self, other: &AdvancementTable) {
        for (round, teams) in &other.rounds {
            for (team, &prob) in teams {
                self.set(*round, team, prob);
            }
        }
    }

    /// Probability for a team in a round, 0 when absent.
    pub fn get(&self, team: &str, round: Round) -> f64 {
        self.lookup(team, round).unwrap_or(0.0)
    }

    /// Probability for a team in a round, if one is listed.
    pub fn lookup(&self, team: &str, round: Round) -> Option<f64> {
        self.rounds.get(&round).and_then(|teams| teams.get(team)).copied()
    }

    /// All (team, probability) entries for a round, sorted by team.
    pub fn round_entries(&self, round: Round) -> impl Iterator<Item = (&str, f64)> {
        self.rounds
            .get(&round)
            .into_iter()
            .flat_map(|teams| teams.iter().map(|(team, &p)| (team.as_str(), p)))
    }

    /// Total number of (round, team) entries.
    pub fn len(&self) -> usize {
        self.rounds.values().map(|teams| teams.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
