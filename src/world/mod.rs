/*
 *  The hex-flotilla world model: coordinates, cells, items, players, the
 *  map, game state, the turn pipeline, and the wire protocol that ties
 *  all of it to the three external agents.
 */

pub(crate) mod cell;
pub(crate) mod consts;
pub mod coords;
pub mod judge;
pub mod map;
pub(crate) mod mv;
pub mod state;
pub(crate) mod wire;

pub(crate) mod player;

pub mod prelude {
    pub(crate) use crate::utils::prelude::*;

    pub use super::{
        cell::{Cell, Item},
        consts::*,
        coords::{Coord, Direction},
        judge::Judge,
        map::{CellRecord, CellValue, Map, MapFile},
        mv::Move,
        player::Player,
        state::{GameState, Snapshot},
        wire::{format_phase0_input, format_turn_input, parse_phase0_reply, parse_turn_reply},
    };
}
