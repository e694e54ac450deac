use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::world::prelude::*;

/// Sparse hex grid bounded by `radius`. Coordinates absent from the
/// backing map read as empty cells; reading never inserts, so iteration
/// and serialization only ever see cells someone actually wrote to.
///
/// Backed by a `BTreeMap`, not a `HashMap`: iteration order must be
/// deterministic across separate process runs (ledger snapshots and
/// agent cell listings both walk it in order), and `HashMap`'s
/// `RandomState` hasher is reseeded per process regardless of the
/// match's own RNG seed.
#[derive(Clone, Debug)]
pub struct Map {
    pub radius: i32,
    cells: BTreeMap<Coord, Cell>,
}

impl Map {
    pub fn new(radius: i32) -> Map {
        Map {
            radius,
            cells: BTreeMap::new(),
        }
    }

    pub fn is_valid(&self, c: &Coord) -> bool {
        c.is_valid(self.radius)
    }

    /// Reads the cell at `c`, defaulting to empty for unseen coordinates.
    /// Does not materialize the default into the backing map.
    pub fn get(&self, c: &Coord) -> Cell {
        self.cells.get(c).copied().unwrap_or_default()
    }

    pub fn add_item(&mut self, c: Coord, item: Item) {
        self.cells.entry(c).or_default().set_item(Some(item));
    }

    pub fn remove_item(&mut self, c: Coord) {
        if let Some(cell) = self.cells.get_mut(&c) {
            cell.set_item(None);
        }
    }

    /// Sets or clears the item at `c` depending on whether `item` is `Some`.
    pub fn set_cell_item(&mut self, c: Coord, item: Option<Item>) {
        match item {
            Some(i) => self.add_item(c, i),
            None => self.remove_item(c),
        }
    }

    /// Enumerates every cell that currently holds an item, for
    /// serialization and per-agent wire output.
    pub fn non_empty_cells(&self) -> impl Iterator<Item = (Coord, Item)> + '_ {
        self.cells
            .iter()
            .filter_map(|(&c, cell)| cell.item().map(|item| (c, item)))
    }

    /// Builds a map from the parsed map-file JSON shape.
    pub fn from_file(file: &MapFile) -> Map {
        let mut map = Map::new(file.map_radius);
        for record in &file.cells {
            let coord = Coord::new(record.q, record.r, record.s);
            if let Some(item) = record.value.to_item() {
                map.add_item(coord, item);
            }
        }
        map
    }
}

/// The `value` field of a map-file cell record: a positive integer (Gold),
/// or the literal strings `"S"`/`"D"` (Shield/Danger). Untagged so `serde`
/// accepts either JSON shape directly, matching the map-file format.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Number(i64),
    Token(String),
}

impl CellValue {
    fn to_item(&self) -> Option<Item> {
        match self {
            CellValue::Number(v) if *v > 0 => Some(Item::Gold(*v)),
            CellValue::Number(_) => None,
            CellValue::Token(s) if s == "S" => Some(Item::Shield),
            CellValue::Token(s) if s == "D" => Some(Item::Danger),
            CellValue::Token(_) => None,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CellRecord {
    pub q: i32,
    pub r: i32,
    pub s: i32,
    pub value: CellValue,
}

/// The top-level shape of the `--map` input file.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MapFile {
    pub max_moves: u32,
    pub map_radius: i32,
    #[serde(default)]
    pub cells: Vec<CellRecord>,
}
