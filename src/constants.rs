/// Extra points per reception credited to tight ends (1.5 PPR instead of 1.0)
pub const TE_PREMIUM_PER_RECEPTION: f64 = 0.5;

/// Base projection above which a player counts as elite
pub const ELITE_BASE_THRESHOLD: f64 = 15.0;

/// Superbowl advancement probability above which a team counts as a contender
pub const STRONG_TEAM_SUPERBOWL_PROB: f64 = 0.25;

/// Multiplier applied to elite contenders in the wildcard round
pub const WILDCARD_SAVE_PENALTY: f64 = 0.4;

/// Multiplier applied to elite contenders in the divisional round
pub const DIVISIONAL_SAVE_PENALTY: f64 = 0.65;

/// Teams below this championship probability are dropped after the championship round
pub const CHAMPIONSHIP_CUTOFF: f64 = 0.18;

/// Teams below this superbowl probability are dropped after the superbowl round
pub const SUPERBOWL_CUTOFF: f64 = 0.08;

/// Lineup template: QB, RB, WR, TE slot counts
pub const QB_SLOTS: usize = 1;
pub const RB_SLOTS: usize = 3;
pub const WR_SLOTS: usize = 3;
pub const TE_SLOTS: usize = 2;

/// Total number of slots in a weekly lineup
pub const LINEUP_SIZE: usize = QB_SLOTS + RB_SLOTS + WR_SLOTS + TE_SLOTS;

/// Skill players at or below this per-game average are left out of the roster feed
pub const MIN_FPTS_PER_GAME: f64 = 5.0;
