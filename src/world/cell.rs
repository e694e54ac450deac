use crate::world::prelude::*;

/// The closed set of things a cell can hold. Deliberately not open to
/// extension: every consumer of `Item` is expected to match exhaustively.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Item {
    Gold(i64),
    Shield,
    Danger,
    Treasure(i64),
}

impl Item {
    /// The wire/JSON value token for this item: the integer value for
    /// Gold/Treasure, or the literal `S`/`D` for Shield/Danger.
    pub fn value_token(&self) -> String {
        match self {
            Item::Gold(v) => v.to_string(),
            Item::Treasure(v) => v.to_string(),
            Item::Shield => "S".to_string(),
            Item::Danger => "D".to_string(),
        }
    }

    /// Applies this item's pickup effect to `player`, returning the item
    /// that should remain in the cell afterwards (`None` clears it).
    ///
    /// Only called for living players that end a turn on the cell; callers
    /// are responsible for that precondition.
    pub fn apply(self, player: &mut Player, treasure_remaining: &mut bool) -> Option<Item> {
        match self {
            Item::Gold(v) => {
                player.collect_gold(v);
                None
            }
            Item::Shield => {
                player.equip_shield();
                None
            }
            Item::Danger => {
                if !player.shield {
                    player.alive = false;
                }
                Some(Item::Danger)
            }
            Item::Treasure(v) => {
                player.collect_gold(v);
                *treasure_remaining = false;
                None
            }
        }
    }
}

/// A single board cell. Holds at most one item; setting a new one discards
/// whatever was there before.
#[derive(Clone, Copy, Debug, Default)]
pub struct Cell {
    item: Option<Item>,
}

impl Cell {
    pub fn empty() -> Cell {
        Cell { item: None }
    }

    pub fn with_item(item: Item) -> Cell {
        Cell { item: Some(item) }
    }

    pub fn is_empty(&self) -> bool {
        self.item.is_none()
    }

    pub fn item(&self) -> Option<Item> {
        self.item
    }

    pub fn set_item(&mut self, item: Option<Item>) {
        self.item = item;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alive_player() -> Player {
        Player::new(1, 0)
    }

    #[test]
    fn gold_pickup_credits_player_and_empties_cell() {
        let mut p = alive_player();
        let remaining = Item::Gold(5).apply(&mut p, &mut false);
        assert_eq!(p.gold, 5);
        assert_eq!(remaining, None);
    }

    #[test]
    fn danger_without_shield_kills_but_cell_persists() {
        let mut p = alive_player();
        let remaining = Item::Danger.apply(&mut p, &mut false);
        assert!(!p.alive);
        assert_eq!(remaining, Some(Item::Danger));
    }

    #[test]
    fn danger_with_shield_is_survived_and_shield_is_not_consumed() {
        let mut p = alive_player();
        p.shield = true;
        let _ = Item::Danger.apply(&mut p, &mut false);
        assert!(p.alive);
        assert!(p.shield);
    }

    #[test]
    fn treasure_pickup_clears_the_remaining_flag() {
        let mut p = alive_player();
        let mut remaining_flag = true;
        let remaining = Item::Treasure(14).apply(&mut p, &mut remaining_flag);
        assert_eq!(p.gold, 14);
        assert_eq!(remaining, None);
        assert!(!remaining_flag);
    }
}
