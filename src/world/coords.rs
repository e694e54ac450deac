use std::fmt;

use crate::world::prelude::*;

/// A cube coordinate on the hex board: `q + r + s` must always equal zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coord {
    pub q: i32,
    pub r: i32,
    pub s: i32,
}

impl Coord {
    pub const ORIGIN: Coord = Coord { q: 0, r: 0, s: 0 };

    /// Constructs a coordinate, without checking the sum-zero invariant.
    ///
    /// Callers that read coordinates from untrusted input (map files, agent
    /// replies) should follow up with [`Coord::is_valid`].
    pub const fn new(q: i32, r: i32, s: i32) -> Coord {
        Coord { q, r, s }
    }

    /// `q + r + s == 0`.
    pub fn sums_to_zero(&self) -> bool {
        self.q + self.r + self.s == 0
    }

    /// Sum-zero AND within `radius` of the origin.
    pub fn is_valid(&self, radius: i32) -> bool {
        self.sums_to_zero() && self.in_radius(radius)
    }

    pub fn in_radius(&self, radius: i32) -> bool {
        self.q.abs().max(self.r.abs()).max(self.s.abs()) <= radius
    }

    /// Pure move in `dir`; does not check bounds.
    pub fn step(&self, dir: Direction) -> Coord {
        let (dq, dr, ds) = dir.offset();
        Coord::new(self.q + dq, self.r + dr, self.s + ds)
    }

    /// The six unit neighbours (excludes the origin-direction no-op).
    pub fn neighbors(&self) -> [Coord; 6] {
        Direction::all_non_origin().map(|d| self.step(d))
    }

    /// Hex distance, i.e. half the taxicab distance in cube space.
    pub fn distance(&self, other: &Coord) -> i32 {
        ((self.q - other.q).abs() + (self.r - other.r).abs() + (self.s - other.s).abs()) / 2
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.q, self.r, self.s)
    }
}

/// One of the seven legal move tokens: `O` (no-op) plus six unit vectors.
///
/// The mapping below is the canonical one: it is consistent with the
/// team-wedge constraints and is the table agents are expected to speak.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    O,
    E,
    NE,
    NW,
    W,
    SW,
    SE,
}

impl Direction {
    pub fn offset(&self) -> (i32, i32, i32) {
        match self {
            Direction::O => (0, 0, 0),
            Direction::E => (1, 0, -1),
            Direction::NE => (1, -1, 0),
            Direction::NW => (0, -1, 1),
            Direction::W => (-1, 0, 1),
            Direction::SW => (-1, 1, 0),
            Direction::SE => (0, 1, -1),
        }
    }

    pub fn all() -> [Direction; 7] {
        [
            Direction::O,
            Direction::E,
            Direction::NE,
            Direction::NW,
            Direction::W,
            Direction::SW,
            Direction::SE,
        ]
    }

    pub fn all_non_origin() -> [Direction; 6] {
        [
            Direction::E,
            Direction::NE,
            Direction::NW,
            Direction::W,
            Direction::SW,
            Direction::SE,
        ]
    }

    /// Parses a direction token case-insensitively. Unlike most parsers in
    /// this crate, this one cannot fail: an unrecognized token is the
    /// judge's documented fallback to `Direction::O`, not a parse error.
    pub fn parse_lenient(s: &str) -> Direction {
        match s.trim().to_ascii_uppercase().as_str() {
            "E" => Direction::E,
            "NE" => Direction::NE,
            "NW" => Direction::NW,
            "W" => Direction::W,
            "SW" => Direction::SW,
            "SE" => Direction::SE,
            _ => Direction::O,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tok = match self {
            Direction::O => "O",
            Direction::E => "E",
            Direction::NE => "NE",
            Direction::NW => "NW",
            Direction::W => "W",
            Direction::SW => "SW",
            Direction::SE => "SE",
        };
        write!(f, "{tok}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbors_are_all_sum_zero_and_distance_one() {
        let c = Coord::new(1, -2, 1);
        for n in c.neighbors() {
            assert!(n.sums_to_zero());
            assert_eq!(c.distance(&n), 1);
        }
    }

    #[test]
    fn unrecognized_direction_token_falls_back_to_o() {
        assert_eq!(Direction::parse_lenient("nonsense"), Direction::O);
        assert_eq!(Direction::parse_lenient("ne"), Direction::NE);
        assert_eq!(Direction::parse_lenient("Se"), Direction::SE);
    }

    #[test]
    fn radius_bound_is_chebyshev_on_cube_coords() {
        assert!(Coord::new(3, -3, 0).in_radius(3));
        assert!(!Coord::new(4, -3, -1).in_radius(3));
    }
}
