//! Team stat sheet loading.
//!
//! Each playoff team ships one CSV export with two header rows followed by
//! one row per player:
//!
//! `RK, NAME, TEAM, POS, GP, YDS, TD, INT, YDS, TD, REC, YDS, TD, SCK, INT, FF, FR, FPTS/G, FPTS`
//!
//! (passing, rushing, receiving and defensive groups). Malformed rows are
//! skipped with a warning rather than failing the whole file.

use csv::StringRecord;
use std::fs::File;
use std::io::Read;
use std::num::{ParseFloatError, ParseIntError};
use std::path::Path;
use tracing::{debug, warn};

use crate::constants::MIN_FPTS_PER_GAME;
use crate::error::{PlannerError, Result};
use crate::player::{Player, PlayerStats, Position};

/// Number of columns a data row must have
pub const ROW_WIDTH: usize = 19;

/// Header rows before the first player (category row, then column names)
const HEADER_ROWS: usize = 2;

#[derive(Debug, thiserror::Error)]
enum RowError {
    #[error("expected {expected} columns, found {0}", expected = ROW_WIDTH)]
    Short(usize),

    #[error("missing name or position")]
    MissingIdentity,

    #[error("{0}")]
    Position(String),

    #[error("bad integer: {0}")]
    Int(#[from] ParseIntError),

    #[error("bad number: {0}")]
    Float(#[from] ParseFloatError),
}

fn float_field(record: &StringRecord, idx: usize) -> std::result::Result<f64, ParseFloatError> {
    match record.get(idx).map(str::trim) {
        Some(s) if !s.is_empty() => s.parse(),
        _ => Ok(0.0),
    }
}

fn int_field(record: &StringRecord, idx: usize) -> std::result::Result<u32, ParseIntError> {
    match record.get(idx).map(str::trim) {
        Some(s) if !s.is_empty() => s.parse(),
        _ => Ok(0),
    }
}

fn parse_row(record: &StringRecord, team_abbr: &str) -> std::result::Result<Player, RowError> {
    if record.len() < ROW_WIDTH {
        return Err(RowError::Short(record.len()));
    }

    let name = record.get(1).map(str::trim).unwrap_or_default();
    let pos = record.get(3).map(str::trim).unwrap_or_default();
    if name.is_empty() || pos.is_empty() {
        return Err(RowError::MissingIdentity);
    }
    let position: Position = pos.parse().map_err(RowError::Position)?;

    let stats = PlayerStats {
        passing_yards: float_field(record, 5)?,
        passing_tds: int_field(record, 6)?,
        passing_ints: int_field(record, 7)?,
        rushing_yards: float_field(record, 8)?,
        rushing_tds: int_field(record, 9)?,
        receptions: int_field(record, 10)?,
        receiving_yards: float_field(record, 11)?,
        receiving_tds: int_field(record, 12)?,
        sacks: float_field(record, 13)?,
        defense_ints: int_field(record, 14)?,
        fumbles_forced: int_field(record, 15)?,
        fumbles_recovered: int_field(record, 16)?,
    };

    Ok(Player {
        name: name.to_string(),
        team: team_abbr.to_string(),
        position,
        games_played: int_field(record, 4)?,
        stats,
        fpts_per_game: float_field(record, 17)?,
        total_fpts: float_field(record, 18)?,
    })
}

/// Whether a player makes the roster feed: quarterbacks and tight ends always
/// do, everyone else needs real production.
pub fn is_rosterable(player: &Player) -> bool {
    player.fpts_per_game > MIN_FPTS_PER_GAME || matches!(player.position, Position::QB | Position::TE)
}

/// Parse a team stat sheet from any reader.
///
/// The team abbreviation is taken from the caller, not the sheet.
pub fn load_roster_from_reader<R: Read>(rdr: R, team_abbr: &str) -> Vec<Player> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(rdr);

    let mut players = Vec::new();
    for (row, result) in reader.records().enumerate() {
        if row < HEADER_ROWS {
            continue;
        }
        let record = match result {
            Ok(record) => record,
            Err(e) => {
                warn!("{}: skipping unreadable row {}: {}", team_abbr, row + 1, e);
                continue;
            }
        };

        match parse_row(&record, team_abbr) {
            Ok(player) if is_rosterable(&player) => players.push(player),
            Ok(player) => debug!("{}: leaving out {} ({:.1} fpts/g)", team_abbr, player.name, player.fpts_per_game),
            Err(e @ RowError::Position(_)) => debug!("{}: skipping row {}: {}", team_abbr, row + 1, e),
            Err(e) => warn!("{}: skipping malformed row {}: {}", team_abbr, row + 1, e),
        }
    }
    players
}

/// Load a team stat sheet from disk.
pub fn load_roster_file<P: AsRef<Path>>(path: P, team_abbr: &str) -> Result<Vec<Player>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| PlannerError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let players = load_roster_from_reader(file, team_abbr);
    debug!("loaded {} players for {} from {:?}", players.len(), team_abbr, path);
    Ok(players)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = ",,,,,PASSING,,,RUSHING,,RECEIVING,,,DEFENSE,,,,,\n\
RK,NAME,TEAM,POS,GP,YDS,TD,INT,YDS,TD,REC,YDS,TD,SCK,INT,FF,FR,FPTS/G,FPTS\n";

    fn sheet(rows: &[&str]) -> String {
        let mut out = HEADER.to_string();
        for row in rows {
            out.push_str(row);
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_parses_player_rows() {
        let data = sheet(&[
            "1,Bo Nix,DEN,QB,17,3931,25,11,430,4,0,0,0,0,0,0,0,18.9,321.3",
            "2,Evan Engram,DEN,TE,14,,,,,,50,461,1,,,,,6.8,95.2",
        ]);
        let players = load_roster_from_reader(data.as_bytes(), "DEN");

        assert_eq!(players.len(), 2);
        let qb = &players[0];
        assert_eq!(qb.name, "Bo Nix");
        assert_eq!(qb.position, Position::QB);
        assert_eq!(qb.games_played, 17);
        assert_eq!(qb.stats.passing_tds, 25);
        assert!((qb.fpts_per_game - 18.9).abs() < 1e-10);

        let te = &players[1];
        assert_eq!(te.stats.receptions, 50);
        assert_eq!(te.stats.passing_yards, 0.0);
        assert_eq!(te.team, "DEN");
    }

    #[test]
    fn test_team_comes_from_caller() {
        let data = sheet(&["1,Someone,XXX,WR,16,0,0,0,0,0,60,800,5,0,0,0,0,9.1,145.6"]);
        let players = load_roster_from_reader(data.as_bytes(), "SEA");
        assert_eq!(players[0].team, "SEA");
    }

    #[test]
    fn test_skips_malformed_rows() {
        let data = sheet(&[
            "1,Short Row,DEN,WR,17",
            "2,,DEN,WR,17,0,0,0,0,0,60,800,5,0,0,0,0,9.1,145.6",
            "3,Bad Games,DEN,WR,x,0,0,0,0,0,60,800,5,0,0,0,0,9.1,145.6",
            "4,Kicker,DEN,K,17,0,0,0,0,0,0,0,0,0,0,0,0,8.0,136.0",
            "5,Good Receiver,DEN,WR,17,0,0,0,0,0,60,800,5,0,0,0,0,9.1,145.6",
        ]);
        let players = load_roster_from_reader(data.as_bytes(), "DEN");
        assert_eq!(players.len(), 1);
        assert_eq!(players[0].name, "Good Receiver");
    }

    #[test]
    fn test_row_error_messages() {
        assert_eq!(RowError::Short(5).to_string(), "expected 19 columns, found 5");

        let err: RowError = "x".parse::<u32>().unwrap_err().into();
        assert!(matches!(err, RowError::Int(_)));
        assert!(err.to_string().starts_with("bad integer: "));

        let err: RowError = "1.2.3".parse::<f64>().unwrap_err().into();
        assert!(err.to_string().starts_with("bad number: "));
    }

    #[test]
    fn test_position_codes_are_case_sensitive() {
        let data = sheet(&[
            "1,Lower QB,DEN,qb,17,3931,25,11,430,4,0,0,0,0,0,0,0,18.9,321.3",
            "2,Lower TE,DEN,te,14,0,0,0,0,0,50,461,1,0,0,0,0,6.8,95.2",
            "3,Upper TE,DEN,TE,14,0,0,0,0,0,50,461,1,0,0,0,0,6.8,95.2",
        ]);
        let players = load_roster_from_reader(data.as_bytes(), "DEN");
        let names: Vec<&str> = players.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Upper TE"]);
    }

    #[test]
    fn test_inclusion_rule() {
        let data = sheet(&[
            "1,Backup QB,DEN,QB,3,120,0,1,5,0,0,0,0,0,0,0,0,1.2,3.6",
            "2,Blocking TE,DEN,TE,17,0,0,0,0,0,6,40,0,0,0,0,0,0.8,13.6",
            "3,Depth RB,DEN,RB,10,0,0,0,120,0,4,20,0,0,0,0,0,5.0,50.0",
            "4,Lead RB,DEN,RB,17,0,0,0,900,7,30,200,1,0,0,0,0,11.5,195.5",
        ]);
        let players = load_roster_from_reader(data.as_bytes(), "DEN");
        let names: Vec<&str> = players.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Backup QB", "Blocking TE", "Lead RB"]);
    }

    #[test]
    fn test_header_only_sheet_is_empty() {
        let players = load_roster_from_reader(HEADER.as_bytes(), "DEN");
        assert!(players.is_empty());
        assert!(load_roster_from_reader("".as_bytes(), "DEN").is_empty());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = load_roster_file("/nonexistent/roster.csv", "DEN").unwrap_err();
        assert!(matches!(err, PlannerError::Io { .. }));
    }
}
