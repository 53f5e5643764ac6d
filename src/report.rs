//! Plan summaries and the plain-text lineup report.

use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::path::Path;
use tracing::info;

use crate::error::{PlannerError, Result};
use crate::lineup::Slot;
use crate::player::Position;
use crate::roster::RosterStore;
use crate::round::Round;
use crate::season::SeasonPlan;
use crate::valuation::Valuator;

const RULE_WIDTH: usize = 80;

/// A filled slot, resolved to player details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotPick {
    pub name: String,
    pub team: String,
    pub position: Position,

    /// Base projection, tight end premium included
    pub projection: f64,

    /// Team's advancement probability for the round
    pub probability: f64,

    /// Projection weighted by probability (save-for-later penalty not shown)
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundSummary {
    pub round: Round,
    pub slots: Vec<(Slot, Option<SlotPick>)>,
    pub total_projected: f64,
}

/// Self-contained view of a [`SeasonPlan`] with player names resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanSummary {
    pub rounds: Vec<RoundSummary>,
    pub total_projected: f64,
    pub players_used: usize,
}

impl PlanSummary {
    pub fn new(plan: &SeasonPlan, store: &RosterStore, valuator: &Valuator) -> Self {
        let rounds = plan
            .lineups
            .iter()
            .map(|lineup| {
                let round = lineup.round;
                let slots = lineup
                    .slots()
                    .map(|(slot, id)| {
                        let pick = id.map(|id| {
                            let player = store.player(id);
                            let projection = valuator.base_projection(player);
                            let probability = valuator.advancement_probability(&player.team, round);
                            SlotPick {
                                name: player.name.clone(),
                                team: player.team.clone(),
                                position: player.position,
                                projection,
                                probability,
                                value: projection * probability,
                            }
                        });
                        (slot, pick)
                    })
                    .collect();
                RoundSummary {
                    round,
                    slots,
                    total_projected: lineup.total_projected,
                }
            })
            .collect();

        PlanSummary {
            rounds,
            total_projected: plan.total_projected,
            players_used: plan.players_used,
        }
    }

    pub fn to_json(&self) -> String {
        // Plain data with string keys only; serialization cannot fail
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn rule(out: &mut String, c: char) {
    out.extend(std::iter::repeat(c).take(RULE_WIDTH));
    out.push('\n');
}

/// One report line for a lineup slot.
pub fn format_slot(slot: Slot, pick: Option<&SlotPick>) -> String {
    match pick {
        Some(p) => format!(
            "{:5} | {:25} | {:4} | {:3} | Proj: {:5.1} | Prob: {:.0}% | Value: {:5.1}",
            slot.as_str(),
            p.name,
            p.team,
            p.position.as_str(),
            p.projection,
            p.probability * 100.0,
            p.value
        ),
        None => format!("{:5} | {:25} |", slot.as_str(), "EMPTY"),
    }
}

/// Render the full text report: every round's lineup, then the summary.
pub fn render_report(summary: &PlanSummary) -> String {
    let mut out = String::new();

    rule(&mut out, '=');
    out.push_str("PLAYOFF FANTASY LINEUP PLAN\n");
    rule(&mut out, '=');
    out.push_str("\nSTRATEGY:\n");
    out.push_str("- PPR scoring, tight ends earn 1.5 points per reception\n");
    out.push_str("- Each player can be started only once across the playoffs\n");
    out.push_str("- Player value is weighted by the team's chance to play that round\n");
    out.push_str("- Elite players on Super Bowl contenders are saved for later rounds\n\n");

    for round in &summary.rounds {
        rule(&mut out, '=');
        let _ = writeln!(out, "{} ROUND LINEUP", round.round.as_str().to_uppercase());
        rule(&mut out, '=');
        out.push('\n');

        for (slot, pick) in &round.slots {
            out.push_str(&format_slot(*slot, pick.as_ref()));
            out.push('\n');
        }

        rule(&mut out, '-');
        let _ = writeln!(out, "Total Projected Points: {:.1}\n", round.total_projected);
    }

    rule(&mut out, '=');
    out.push_str("SUMMARY\n");
    rule(&mut out, '=');
    let _ = writeln!(out, "\nTotal Projected Points Across All Weeks: {:.1}", summary.total_projected);
    let _ = writeln!(out, "Players Used: {}", summary.players_used);
    out.push_str("\nWeek-by-Week Breakdown:\n");
    for round in &summary.rounds {
        let _ = writeln!(
            out,
            "{:15} | {:6.1} points",
            capitalize(round.round.as_str()),
            round.total_projected
        );
    }

    out
}

/// Persist a rendered report.
pub fn write_report<P: AsRef<Path>>(path: P, report: &str) -> Result<()> {
    let path = path.as_ref();
    std::fs::write(path, report).map_err(|source| PlannerError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Results saved to {:?}", path);
    Ok(())
}
