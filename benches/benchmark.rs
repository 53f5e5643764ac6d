use criterion::{black_box, criterion_group, criterion_main, Criterion};
use playoff_core::allocator::{allocate, rank_candidates};
use playoff_core::elimination::{EliminationParams, EliminationPolicy};
use playoff_core::player::{Player, Position};
use playoff_core::probabilities::AdvancementTable;
use playoff_core::roster::RosterStore;
use playoff_core::round::Round;
use playoff_core::season::SeasonDriver;
use playoff_core::team::{Conference, Team};
use playoff_core::valuation::Valuator;

const TEAMS: [&str; 14] = [
    "DEN", "NE", "JAX", "PIT", "HOU", "LAC", "BUF", "SEA", "CHI", "PHI", "CAR", "LAR", "GB", "SF",
];

fn create_table() -> AdvancementTable {
    let mut table = AdvancementTable::new();
    for (i, team) in TEAMS.iter().enumerate() {
        let strength = 1.0 - i as f64 / TEAMS.len() as f64;
        table.set(Round::Wildcard, team, 0.35 + 0.3 * strength);
        table.set(Round::Divisional, team, 0.7 * strength);
        table.set(Round::Championship, team, 0.55 * strength);
        table.set(Round::Superbowl, team, 0.35 * strength);
    }
    table
}

fn create_store(players_per_team: usize) -> RosterStore {
    let mut store = RosterStore::new();
    for (i, team) in TEAMS.iter().enumerate() {
        let conference = if i < 7 { Conference::AFC } else { Conference::NFC };
        store.add_team(Team::new(team, (i % 7) as u8 + 1, conference, i == 0 || i == 7));

        for j in 0..players_per_team {
            let position = Position::ALL[j % 4];
            let fpts = 4.0 + ((i * 7 + j * 13) % 20) as f64;
            let name = format!("{}_{}", team, j);
            store.add_player(Player::new(&name, team, position, 17, fpts).with_receptions((j * 5) as u32));
        }
    }
    store
}

fn create_driver(players_per_team: usize) -> SeasonDriver {
    let table = create_table();
    SeasonDriver::new(
        create_store(players_per_team),
        Valuator::with_defaults(table.clone(), ["DEN", "SEA"]),
        EliminationPolicy::new(["LAC", "JAX", "PIT", "GB", "SF", "CAR"], table, EliminationParams::default()),
    )
}

fn bench_value(c: &mut Criterion) {
    let valuator = Valuator::with_defaults(create_table(), ["DEN", "SEA"]);
    let player = Player::new("Star", "SEA", Position::TE, 17, 16.0).with_receptions(90);

    c.bench_function("player_value", |b| {
        b.iter(|| valuator.value(black_box(&player), black_box(Round::Divisional)))
    });
}

fn bench_rank_candidates(c: &mut Criterion) {
    let store = create_store(40);
    let valuator = Valuator::with_defaults(create_table(), ["DEN", "SEA"]);

    c.bench_function("rank_candidates_wr_560", |b| {
        b.iter(|| rank_candidates(Round::Wildcard, Position::WR, black_box(&store), &valuator))
    });
}

fn bench_allocate(c: &mut Criterion) {
    let store = create_store(40);
    let valuator = Valuator::with_defaults(create_table(), ["DEN", "SEA"]);

    c.bench_function("allocate_wildcard_560", |b| {
        b.iter(|| {
            let mut fresh = store.clone();
            allocate(Round::Wildcard, black_box(&mut fresh), &valuator)
        })
    });
}

fn bench_full_season(c: &mut Criterion) {
    c.bench_function("season_14_teams", |b| {
        b.iter(|| create_driver(black_box(25)).run_all())
    });
}

criterion_group!(
    benches,
    bench_value,
    bench_rank_candidates,
    bench_allocate,
    bench_full_season,
);
criterion_main!(benches);
