//! Tunable constants for the hex-flotilla ruleset.

/// Missiles each ship starts the match with.
pub const MAX_MISSILES: u32 = 6;

/// A single move can fire at most this many missile targets.
pub const MAX_MISSILES_EACH_TURN: usize = 2;

/// Fraction of gold lost when hit by exactly one missile this turn.
pub const MISSILE_DAMAGE_ONE: f64 = 0.20;

/// Fraction of gold lost when hit by two or more missiles this turn.
pub const MISSILE_DAMAGE_TWO: f64 = 0.30;

/// Lower bound (as a fraction of max_moves) of the treasure spawn window.
pub const TREASURE_MIN_THRESHOLD: f64 = 0.6;

/// Upper bound (as a fraction of max_moves) of the treasure spawn window.
pub const TREASURE_MAX_THRESHOLD: f64 = 0.7;

/// Floor on the spawned treasure's value, regardless of total gold collected.
pub const TREASURE_MIN_VALUE: i64 = 10;

/// Divisor applied to total gold collected when computing treasure value.
pub const TREASURE_VALUE_DIVISOR: i64 = 12;

/// Hex-distance radius within which lost gold is scattered.
pub const GOLD_DISTRIBUTION_RADIUS: i32 = 2;

/// Default per-agent timeout, in seconds, for a single ask.
pub const DEFAULT_TIMEOUT_SECS: u64 = 2;

/// Default RNG seed used when the CLI caller does not supply one.
pub const DEFAULT_SEED: u64 = 0xC11C_4E0F_CAFE_D00D;
