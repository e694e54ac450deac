//! The plain-text protocol spoken with agent subprocesses.
//!
//! Parsing here is deliberately defensive: agents are untrusted, and every
//! malformed-input case has a documented degradation instead of an error.
//! Only the Phase-0 coordinate reply can come back as `None` (the judge
//! overrides it with a random legal cell); every other parse path always
//! produces *something* usable.

use itertools::Itertools;

use crate::world::prelude::*;

/// Parses a Phase-0 reply (`"q r s"`). Returns `None` on anything that
/// doesn't parse as exactly three integers; the caller then falls back to
/// a random legal cell in the team's wedge.
pub fn parse_phase0_reply(reply: &str) -> Option<Coord> {
    let mut toks = reply.split_whitespace();
    let q = toks.next()?.parse::<i32>().ok()?;
    let r = toks.next()?.parse::<i32>().ok()?;
    let s = toks.next()?.parse::<i32>().ok()?;
    if toks.next().is_some() {
        return None;
    }
    Some(Coord::new(q, r, s))
}

/// Parses a Phase-N reply:
/// ```text
/// DIRECTION
/// M
/// q r s
/// ... (M lines)
/// ```
/// Never fails: an unrecognized direction token degrades to `Direction::O`
/// (per `Direction::parse_lenient`), and a malformed or absent missile
/// block degrades to an empty target list. A blank reply is legal and
/// parses to the no-op move.
pub fn parse_turn_reply(reply: &str) -> Move {
    let mut lines = reply.lines();

    let direction = match lines.next() {
        Some(line) => Direction::parse_lenient(line),
        None => Direction::O,
    };

    let missile_targets = parse_missile_block(&mut lines).unwrap_or_default();

    Move {
        direction,
        missile_targets,
    }
}

fn parse_missile_block<'a>(lines: &mut impl Iterator<Item = &'a str>) -> Option<Vec<Coord>> {
    let count_line = lines.next()?;
    let count: usize = count_line.trim().parse().ok()?;

    let mut targets = Vec::with_capacity(count);
    for _ in 0..count {
        let line = lines.next()?;
        let mut toks = line.split_whitespace();
        let q = toks.next()?.parse::<i32>().ok()?;
        let r = toks.next()?.parse::<i32>().ok()?;
        let s = toks.next()?.parse::<i32>().ok()?;
        if toks.next().is_some() {
            return None;
        }
        targets.push(Coord::new(q, r, s));
    }
    Some(targets)
}

fn cell_lines(map: &Map) -> (usize, String) {
    let cells: Vec<(Coord, Item)> = map.non_empty_cells().collect();
    let body = cells
        .iter()
        .map(|(c, item)| format!("{c} {}", item.value_token()))
        .join("\n");
    (cells.len(), body)
}

/// Builds the Phase-0 input string for the agent representing `team_id`
/// (1-indexed).
pub fn format_phase0_input(radius: i32, moves_left: i64, team_id: u8, map: &Map) -> String {
    let (count, body) = cell_lines(map);
    let mut out = format!("{radius} {moves_left} 0\n{team_id}\n{count}");
    if count > 0 {
        out.push('\n');
        out.push_str(&body);
    }
    out
}

/// Builds the Phase-N input string for `viewer_index` (0-based), describing
/// its own ship followed by the other two in rotated team order.
pub fn format_turn_input(radius: i32, moves_left: i64, viewer_index: usize, players: &[Player; 3], map: &Map) -> String {
    let me = &players[viewer_index];
    let other1 = &players[(viewer_index + 1) % 3];
    let other2 = &players[(viewer_index + 2) % 3];

    let mut lines = vec![
        format!("{radius} {moves_left} 1"),
        format!("{} {} {} {}", me.position, me.gold, me.shield as u8, me.missiles),
    ];
    for other in [other1, other2] {
        lines.push(format!(
            "{} {} {} {}",
            other.position,
            other.alive as u8,
            other.gold,
            other.shield as u8
        ));
    }

    let (count, body) = cell_lines(map);
    lines.push(count.to_string());
    let mut out = lines.join("\n");
    if count > 0 {
        out.push('\n');
        out.push_str(&body);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_well_formed_phase0_reply() {
        assert_eq!(parse_phase0_reply("2 -1 -1"), Some(Coord::new(2, -1, -1)));
    }

    #[test]
    fn rejects_malformed_phase0_reply() {
        assert_eq!(parse_phase0_reply("not a coord"), None);
        assert_eq!(parse_phase0_reply("1 2"), None);
    }

    #[test]
    fn blank_reply_is_a_legal_noop() {
        let mv = parse_turn_reply("");
        assert_eq!(mv, Move::noop());
    }

    #[test]
    fn unrecognized_direction_falls_back_to_o_but_keeps_missiles() {
        let mv = parse_turn_reply("blorp\n1\n0 0 0");
        assert_eq!(mv.direction, Direction::O);
        assert_eq!(mv.missile_targets, vec![Coord::ORIGIN]);
    }

    #[test]
    fn missing_missile_lines_discards_the_whole_block() {
        let mv = parse_turn_reply("E\n2\n0 0 0");
        assert_eq!(mv.direction, Direction::E);
        assert!(mv.missile_targets.is_empty());
    }

    #[test]
    fn unparseable_missile_line_discards_the_whole_block() {
        let mv = parse_turn_reply("E\n1\nnot a coord");
        assert!(mv.missile_targets.is_empty());
    }

    #[test]
    fn phase0_input_has_no_trailing_cell_section_when_empty() {
        let map = Map::new(3);
        let s = format_phase0_input(3, 100, 2, &map);
        assert_eq!(s, "3 100 0\n2\n0");
    }
}
