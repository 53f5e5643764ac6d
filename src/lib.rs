//! Playoff Core - greedy fantasy lineup planning across a playoff bracket.
//!
//! Each round, every position is ranked by a probability-weighted value and
//! the best available players fill a fixed nine-slot lineup. A player can be
//! started only once per run, and teams knocked out of the bracket stop
//! contributing players. Optional Python bindings live behind the `python`
//! feature.

pub mod allocator;
pub mod config;
pub mod constants;
pub mod elimination;
pub mod error;
pub mod ingest;
pub mod lineup;
pub mod player;
pub mod probabilities;
pub mod report;
pub mod roster;
pub mod round;
pub mod season;
pub mod team;
pub mod valuation;

#[cfg(feature = "python")]
mod python;

pub use allocator::{allocate, rank_candidates};
pub use config::{PlannerConfig, TeamEntry};
pub use elimination::{EliminationParams, EliminationPolicy};
pub use error::{PlannerError, Result};
pub use lineup::{Lineup, Slot};
pub use player::{Player, PlayerStats, Position};
pub use probabilities::AdvancementTable;
pub use report::{render_report, write_report, PlanSummary};
pub use roster::{PlayerId, RosterStore};
pub use round::Round;
pub use season::{SeasonDriver, SeasonPlan};
pub use team::{Conference, Team};
pub use valuation::{ValuationParams, Valuator};
