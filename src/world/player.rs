use crate::world::prelude::*;

/// A team's ship and its mutable match state.
#[derive(Clone, Debug)]
pub struct Player {
    pub team_id: u8,
    pub position: Coord,
    pub previous_position: Coord,
    pub gold: i64,
    pub shield: bool,
    pub alive: bool,
    pub missiles: u32,
    pub missiles_fired: Vec<Coord>,
}

impl Player {
    pub fn new(team_id: u8, missiles: u32) -> Player {
        Player {
            team_id,
            position: Coord::ORIGIN,
            previous_position: Coord::ORIGIN,
            gold: 0,
            shield: false,
            alive: true,
            missiles,
            missiles_fired: vec![],
        }
    }

    /// Attempts to move in `dir`. Records `previous_position` regardless of
    /// whether the attempted step turned out to be legal; a player that
    /// bounces off the boundary still "spent" its turn looking that way.
    pub fn move_in(&mut self, dir: Direction, map: &Map) {
        if !self.alive {
            return;
        }
        self.previous_position = self.position;
        let target = self.position.step(dir);
        if map.is_valid(&target) {
            self.position = target;
        }
    }

    pub fn collect_gold(&mut self, amount: i64) {
        if self.alive {
            self.gold += amount;
        }
    }

    pub fn equip_shield(&mut self) {
        if self.alive {
            self.shield = true;
        }
    }

    /// Applies missile damage for `count` simultaneous hits this turn,
    /// deducting and returning the lost gold. Does not itself kill the
    /// player — missiles only ever drain gold.
    pub fn hit_by_missile(&mut self, count: u32) -> i64 {
        if count == 0 {
            return 0;
        }
        let fraction = if count == 1 {
            MISSILE_DAMAGE_ONE
        } else {
            MISSILE_DAMAGE_TWO
        };
        let lost = ((self.gold as f64) * fraction).ceil() as i64;
        self.gold -= lost;
        lost
    }
}
