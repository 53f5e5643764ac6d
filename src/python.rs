use pyo3::exceptions::{PyIOError, PyValueError};
use pyo3::prelude::*;
use std::path::{Path, PathBuf};

use crate::config::PlannerConfig;
use crate::error::PlannerError;
use crate::report::{render_report, PlanSummary};
use crate::round::Round;

/// One filled slot as handed to Python: (slot, name, team, position, projection)
type PySlot = (String, String, String, String, f64);

/// One round as handed to Python: (round, picks, total_projected)
type PyRound = (String, Vec<PySlot>, f64);

fn to_py_err(e: PlannerError) -> PyErr {
    match e {
        PlannerError::Io { .. } => PyIOError::new_err(e.to_string()),
        _ => PyValueError::new_err(e.to_string()),
    }
}

fn parse_rounds(rounds: Option<Vec<String>>) -> PyResult<Vec<Round>> {
    match rounds {
        None => Ok(Round::ALL.to_vec()),
        Some(names) => names
            .iter()
            .map(|name| name.parse::<Round>().map_err(PyValueError::new_err))
            .collect(),
    }
}

/// Playoff lineup planner driven by a JSON configuration and team stat sheets.
///
/// Every call plans from a fresh roster, so repeated runs are independent.
#[pyclass(name = "PlayoffPlanner")]
pub struct PyPlayoffPlanner {
    config: PlannerConfig,
    roster_dir: PathBuf,
}

impl PyPlayoffPlanner {
    fn plan(&self, rounds: &[Round]) -> PyResult<PlanSummary> {
        let mut driver = self.config.driver(&self.roster_dir).map_err(to_py_err)?;
        let plan = driver.run(rounds);
        Ok(PlanSummary::new(&plan, driver.store(), driver.valuator()))
    }
}

#[pymethods]
impl PyPlayoffPlanner {
    /// Create a planner.
    ///
    /// Roster files are resolved against `roster_dir`, defaulting to the
    /// directory holding the configuration file.
    #[new]
    #[pyo3(signature = (config_path, roster_dir = None))]
    pub fn new(config_path: &str, roster_dir: Option<&str>) -> PyResult<Self> {
        let config = PlannerConfig::from_file(config_path).map_err(to_py_err)?;
        let roster_dir = match roster_dir {
            Some(dir) => PathBuf::from(dir),
            None => Path::new(config_path)
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_default(),
        };
        Ok(PyPlayoffPlanner { config, roster_dir })
    }

    /// Plan the given rounds (all four by default).
    ///
    /// Returns (rounds, total_projected, players_used).
    #[pyo3(signature = (rounds = None))]
    pub fn run(&self, rounds: Option<Vec<String>>) -> PyResult<(Vec<PyRound>, f64, usize)> {
        let summary = self.plan(&parse_rounds(rounds)?)?;
        let rounds = summary
            .rounds
            .iter()
            .map(|round| {
                let picks = round
                    .slots
                    .iter()
                    .filter_map(|(slot, pick)| {
                        pick.as_ref().map(|p| {
                            (
                                slot.to_string(),
                                p.name.clone(),
                                p.team.clone(),
                                p.position.to_string(),
                                p.projection,
                            )
                        })
                    })
                    .collect();
                (round.round.to_string(), picks, round.total_projected)
            })
            .collect();
        Ok((rounds, summary.total_projected, summary.players_used))
    }

    /// Text report for the full bracket.
    pub fn report(&self) -> PyResult<String> {
        Ok(render_report(&self.plan(&Round::ALL)?))
    }

    /// Effective value of a player for a round, before any picks are made.
    pub fn player_value(&self, name: &str, round: &str) -> PyResult<f64> {
        let round: Round = round.parse().map_err(PyValueError::new_err)?;
        let store = self.config.build_store(&self.roster_dir).map_err(to_py_err)?;
        let id = store
            .find_player(name)
            .ok_or_else(|| PyValueError::new_err(format!("player '{}' not found", name)))?;
        Ok(self.config.valuator().value(store.player(id), round))
    }

    fn __repr__(&self) -> String {
        format!(
            "PlayoffPlanner({} teams, roster_dir={:?})",
            self.config.teams.len(),
            self.roster_dir
        )
    }
}

/// Python module definition
#[pymodule]
fn playoff_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyPlayoffPlanner>()?;
    m.add(
        "ROUNDS",
        Round::ALL.iter().map(|r| r.as_str()).collect::<Vec<_>>(),
    )?;
    Ok(())
}
