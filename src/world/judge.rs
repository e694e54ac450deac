use std::collections::HashMap;

use rand::Rng;

use crate::world::prelude::*;

/// Drives one match's rules: Phase-0 placement, then the fixed per-turn
/// resolution order (move, collide, treasure, items, missiles, items
/// again). Owns the [`GameState`] it mutates.
pub struct Judge {
    pub state: GameState,
}

impl Judge {
    /// Parses the map file and builds the initial, unplaced state.
    pub fn initialize(file: &MapFile, seed: u64) -> Judge {
        Judge {
            state: GameState::from_map_file(file, seed),
        }
    }

    /// Builds the input string for agent `viewer_index` (0-based), in
    /// whichever phase the match is currently in.
    pub fn agent_input(&self, viewer_index: usize) -> String {
        if !self.state.started {
            let team_id = self.state.players[viewer_index].team_id;
            format_phase0_input(self.state.map.radius, self.state.moves_left, team_id, &self.state.map)
        } else {
            format_turn_input(self.state.map.radius, self.state.moves_left, viewer_index, &self.state.players, &self.state.map)
        }
    }

    /// Resolves the three Phase-0 replies into starting positions,
    /// overriding anything out-of-wedge, out-of-bounds, or occupied with a
    /// uniformly random legal cell in that team's wedge.
    pub fn apply_phase0(&mut self, replies: &[String; 3]) {
        for i in 0..3 {
            let team_id = self.state.players[i].team_id;
            let proposed = parse_phase0_reply(&replies[i]);

            let coord = match proposed {
                Some(c)
                    if self.state.map.is_valid(&c)
                        && in_wedge(team_id, &c)
                        && self.state.map.get(&c).is_empty() =>
                {
                    c
                }
                _ => random_legal_start(&self.state.map, team_id, &mut self.state.rng),
            };

            self.state.players[i].position = coord;
            self.state.players[i].previous_position = coord;
        }
        self.state.started = true;
    }

    /// Runs one full turn (Phase >= 1): move, resolve collisions, maybe
    /// spawn treasure, apply item effects, handle missiles.
    pub fn apply_turn(&mut self, replies: &[String; 3]) {
        let moves: Vec<Move> = replies
            .iter()
            .enumerate()
            .map(|(i, reply)| {
                if self.state.players[i].alive && !reply.trim().is_empty() {
                    parse_turn_reply(reply)
                } else {
                    Move::noop()
                }
            })
            .collect();

        self.state.moves_left -= 1;
        self.state.turn += 1;

        self.move_players(&moves);
        self.resolve_collisions();
        self.maybe_spawn_treasure();
        self.apply_item_effects();
        self.handle_missiles(&moves);
        self.apply_item_effects();
    }

    pub fn is_over(&self) -> bool {
        self.state.is_over()
    }

    fn move_players(&mut self, moves: &[Move]) {
        for i in 0..3 {
            if self.state.players[i].alive {
                self.state.players[i].move_in(moves[i].direction, &self.state.map);
            }
        }
    }

    /// Co-location and swap collisions, resolved simultaneously: every
    /// player's fate is decided against the pre-collision positions, so a
    /// three-way meeting kills all three and a two-way swap kills both.
    fn resolve_collisions(&mut self) {
        let positions: [(Coord, Coord); 3] = std::array::from_fn(|i| {
            (self.state.players[i].position, self.state.players[i].previous_position)
        });

        let mut dies = [false; 3];
        for i in 0..3 {
            if !self.state.players[i].alive {
                continue;
            }
            let (pos_i, prev_i) = positions[i];
            for j in 0..3 {
                if i == j {
                    continue;
                }
                let (pos_j, prev_j) = positions[j];
                if pos_i == pos_j {
                    dies[i] = true;
                }
                if pos_i == prev_j && prev_i == pos_j {
                    dies[i] = true;
                }
            }
        }

        for i in 0..3 {
            if dies[i] {
                self.state.players[i].alive = false;
            }
        }
    }

    fn maybe_spawn_treasure(&mut self) {
        if self.state.treasure_appeared || self.state.turn != self.state.treasure_spawn_turn {
            return;
        }

        let mut value = (self.state.total_gold() / TREASURE_VALUE_DIVISOR).max(TREASURE_MIN_VALUE);
        if let Some(Item::Gold(g)) = self.state.map.get(&Coord::ORIGIN).item() {
            value += g;
        }
        self.state.map.remove_item(Coord::ORIGIN);
        self.state.map.add_item(Coord::ORIGIN, Item::Treasure(value));
        self.state.treasure_appeared = true;
        self.state.treasure_remaining = true;
    }

    fn apply_item_effects(&mut self) {
        for i in 0..3 {
            if !self.state.players[i].alive {
                continue;
            }
            let pos = self.state.players[i].position;
            if let Some(item) = self.state.map.get(&pos).item() {
                let remaining = item.apply(&mut self.state.players[i], &mut self.state.treasure_remaining);
                self.state.map.set_cell_item(pos, remaining);
            }
        }
    }

    fn handle_missiles(&mut self, moves: &[Move]) {
        for player in &mut self.state.players {
            player.missiles_fired.clear();
        }

        let mut hit_counts: HashMap<Coord, u32> = HashMap::new();

        for i in 0..3 {
            let player = &self.state.players[i];
            let targets = &moves[i].missile_targets;
            if !valid_missile_set(player, targets, &self.state.map) {
                continue;
            }

            for &t in targets {
                *hit_counts.entry(t).or_insert(0) += 1;
            }

            let player = &mut self.state.players[i];
            player.missiles_fired.extend(targets.iter().copied());
            player.missiles -= targets.len() as u32;
        }

        for i in 0..3 {
            if !self.state.players[i].alive {
                continue;
            }
            let pos = self.state.players[i].position;
            if let Some(&count) = hit_counts.get(&pos) {
                if count >= 1 {
                    let lost = self.state.players[i].hit_by_missile(count);
                    if lost > 0 {
                        scatter_gold(&mut self.state.map, pos, lost, &mut self.state.rng);
                    }
                }
            }
        }
    }
}

/// Team-wedge legality for Phase-0 placement.
pub fn in_wedge(team_id: u8, c: &Coord) -> bool {
    match team_id {
        1 => c.q > 0 && c.r < 0,
        2 => c.r > 0 && c.s < 0,
        3 => c.s > 0 && c.q < 0,
        _ => false,
    }
}

fn random_legal_start(map: &Map, team_id: u8, rng: &mut impl Rng) -> Coord {
    let mut candidates = vec![];
    for q in -map.radius..=map.radius {
        let r_lo = (-map.radius).max(-q - map.radius);
        let r_hi = map.radius.min(-q + map.radius);
        for r in r_lo..=r_hi {
            let s = -q - r;
            let c = Coord::new(q, r, s);
            if map.is_valid(&c) && in_wedge(team_id, &c) && map.get(&c).is_empty() {
                candidates.push(c);
            }
        }
    }
    let idx = rng.gen_range(0..candidates.len());
    candidates[idx]
}

fn valid_missile_set(player: &Player, targets: &[Coord], map: &Map) -> bool {
    if !player.alive {
        return false;
    }
    if targets.is_empty() || targets.len() > MAX_MISSILES_EACH_TURN {
        return false;
    }
    if targets.len() as u32 > player.missiles {
        return false;
    }
    targets.iter().all(|t| map.is_valid(t) && *t != player.position)
}

/// Scatters `amount` units of lost gold into cells within hex distance ≤ 2
/// of `origin` (excluding `origin` itself), each independently and
/// uniformly chosen with replacement from the fixed set of eligible
/// cells computed up front. If no cell qualifies, the gold is destroyed.
fn scatter_gold(map: &mut Map, origin: Coord, amount: i64, rng: &mut impl Rng) {
    let mut candidates = vec![];
    for dq in -GOLD_DISTRIBUTION_RADIUS..=GOLD_DISTRIBUTION_RADIUS {
        let dr_lo = (-GOLD_DISTRIBUTION_RADIUS).max(-dq - GOLD_DISTRIBUTION_RADIUS);
        let dr_hi = GOLD_DISTRIBUTION_RADIUS.min(-dq + GOLD_DISTRIBUTION_RADIUS);
        for dr in dr_lo..=dr_hi {
            let ds = -dq - dr;
            if dq == 0 && dr == 0 {
                continue;
            }
            let c = Coord::new(origin.q + dq, origin.r + dr, origin.s + ds);
            if !map.is_valid(&c) {
                continue;
            }
            match map.get(&c).item() {
                None | Some(Item::Gold(_)) | Some(Item::Treasure(_)) => candidates.push(c),
                Some(Item::Shield) | Some(Item::Danger) => {}
            }
        }
    }

    if candidates.is_empty() {
        return;
    }

    for _ in 0..amount {
        let c = candidates[rng.gen_range(0..candidates.len())];
        let updated = match map.get(&c).item() {
            None => Item::Gold(1),
            Some(Item::Gold(g)) => Item::Gold(g + 1),
            Some(Item::Treasure(t)) => Item::Treasure(t + 1),
            Some(other) => other,
        };
        map.set_cell_item(c, Some(updated));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file_with(max_moves: u32, radius: i32, cells: Vec<CellRecord>) -> MapFile {
        MapFile {
            max_moves,
            map_radius: radius,
            cells,
        }
    }

    fn num(v: i64) -> CellValue {
        CellValue::Number(v)
    }

    fn tok(s: &str) -> CellValue {
        CellValue::Token(s.to_string())
    }

    #[test]
    fn phase0_override_lands_in_wedge_on_an_empty_cell() {
        let file = file_with(100, 3, vec![]);
        let mut judge = Judge::initialize(&file, 11);
        let replies = [
            "1 -1 0".to_string(),
            "0 0 0".to_string(), // not in team 2's wedge
            "-1 0 1".to_string(),
        ];
        judge.apply_phase0(&replies);
        let p2 = &judge.state.players[1];
        assert!(in_wedge(2, &p2.position));
        assert!(judge.state.map.is_valid(&p2.position));
    }

    #[test]
    fn swap_collision_kills_both_players() {
        let file = file_with(100, 3, vec![]);
        let mut judge = Judge::initialize(&file, 1);
        judge.state.started = true;
        judge.state.players[0].position = Coord::new(1, 0, -1);
        judge.state.players[0].previous_position = Coord::new(1, 0, -1);
        judge.state.players[1].position = Coord::new(0, 0, 0);
        judge.state.players[1].previous_position = Coord::new(0, 0, 0);
        judge.state.players[2].position = Coord::new(3, -3, 0);
        judge.state.players[2].previous_position = Coord::new(3, -3, 0);

        let replies = ["W".to_string(), "E".to_string(), "O".to_string()];
        judge.apply_turn(&replies);

        assert!(!judge.state.players[0].alive);
        assert!(!judge.state.players[1].alive);
        assert!(judge.state.players[2].alive);
    }

    #[test]
    fn double_missile_hit_applies_thirty_percent_once() {
        let file = file_with(100, 5, vec![]);
        let mut judge = Judge::initialize(&file, 3);
        judge.state.started = true;
        judge.state.players[0].position = Coord::new(2, -1, -1);
        judge.state.players[0].previous_position = Coord::new(2, -1, -1);
        judge.state.players[0].gold = 50;
        judge.state.players[1].position = Coord::new(-2, 1, 1);
        judge.state.players[1].previous_position = Coord::new(-2, 1, 1);
        judge.state.players[2].position = Coord::new(-2, -1, 3);
        judge.state.players[2].previous_position = Coord::new(-2, -1, 3);

        let replies = [
            "O\n0".to_string(),
            "O\n1\n2 -1 -1".to_string(),
            "O\n1\n2 -1 -1".to_string(),
        ];
        judge.apply_turn(&replies);

        assert_eq!(judge.state.players[0].gold, 35);
    }

    #[test]
    fn shield_does_not_mitigate_missile_damage() {
        let file = file_with(100, 5, vec![]);
        let mut judge = Judge::initialize(&file, 4);
        judge.state.started = true;
        judge.state.players[0].position = Coord::new(2, -1, -1);
        judge.state.players[0].previous_position = Coord::new(2, -1, -1);
        judge.state.players[0].gold = 50;
        judge.state.players[0].shield = true;
        judge.state.players[1].position = Coord::new(-2, 1, 1);
        judge.state.players[1].previous_position = Coord::new(-2, 1, 1);
        judge.state.players[2].position = Coord::new(-2, -1, 3);
        judge.state.players[2].previous_position = Coord::new(-2, -1, 3);

        let replies = [
            "O\n0".to_string(),
            "O\n1\n2 -1 -1".to_string(),
            "O\n0".to_string(),
        ];
        judge.apply_turn(&replies);

        assert_eq!(judge.state.players[0].gold, 40);
        assert!(judge.state.players[0].shield);
    }

    #[test]
    fn danger_without_shield_kills_and_cell_persists() {
        let file = file_with(100, 3, vec![CellRecord { q: 1, r: -1, s: 0, value: tok("D") }]);
        let mut judge = Judge::initialize(&file, 5);
        judge.state.started = true;
        judge.state.players[0].position = Coord::new(0, 0, 0);
        judge.state.players[0].previous_position = Coord::new(0, 0, 0);
        judge.state.players[1].position = Coord::new(-3, 3, 0);
        judge.state.players[1].previous_position = Coord::new(-3, 3, 0);
        judge.state.players[2].position = Coord::new(-3, 1, 2);
        judge.state.players[2].previous_position = Coord::new(-3, 1, 2);

        let replies = ["E".to_string(), "O".to_string(), "O".to_string()];
        judge.apply_turn(&replies);

        assert!(!judge.state.players[0].alive);
        assert_eq!(judge.state.map.get(&Coord::new(1, -1, 0)).item(), Some(Item::Danger));
    }

    #[test]
    fn treasure_spawns_onto_existing_gold_at_origin() {
        let file = file_with(100, 5, vec![CellRecord { q: 0, r: 0, s: 0, value: num(4) }]);
        let mut judge = Judge::initialize(&file, 9);
        judge.state.started = true;
        judge.state.treasure_spawn_turn = 1;
        judge.state.players[0].gold = 60;
        judge.state.players[1].gold = 40;
        judge.state.players[2].gold = 20;
        for p in &mut judge.state.players {
            p.position = Coord::new(5, -5, 0);
            p.previous_position = p.position;
        }
        judge.state.players[0].position = Coord::new(-5, 5, 0);
        judge.state.players[0].previous_position = Coord::new(-5, 5, 0);

        let replies = ["O".to_string(), "O".to_string(), "O".to_string()];
        judge.apply_turn(&replies);

        assert_eq!(judge.state.map.get(&Coord::ORIGIN).item(), Some(Item::Treasure(14)));
        assert!(judge.state.treasure_appeared);
        assert!(judge.state.treasure_remaining);
    }

    #[test]
    fn gold_lost_with_no_scatter_cells_is_destroyed() {
        let file = file_with(100, 0, vec![]);
        let mut judge = Judge::initialize(&file, 2);
        scatter_gold(&mut judge.state.map, Coord::ORIGIN, 50, &mut judge.state.rng);
        assert!(judge.state.map.non_empty_cells().next().is_none());
    }
}
