//! Tile occupancy.
//!
//! Only reports which solid entity sits where. Blocking movement is the
//! caller's policy.

use std::collections::HashMap;

use crate::entity::{Entity, EntityId};
use crate::types::Pos;

/// Grid position -> id of the solid entity occupying it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Occupancy {
    cells: HashMap<Pos, EntityId>,
}

impl Occupancy {
    pub fn get(&self, pos: Pos) -> Option<EntityId> {
        self.cells.get(&pos).copied()
    }

    pub fn is_occupied(&self, pos: Pos) -> bool {
        self.cells.contains_key(&pos)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Pos, EntityId)> + '_ {
        self.cells.iter().map(|(p, id)| (*p, *id))
    }
}

/// Build the occupancy map for `entities`.
///
/// Entities without a solid collider are skipped. When several solid entities
/// share a position, the last one in list order wins.
pub fn resolve(entities: &[Entity]) -> Occupancy {
    let mut cells = HashMap::new();
    for (id, e) in entities.iter().enumerate() {
        if e.is_solid() {
            cells.insert(e.pos(), id);
        }
    }
    Occupancy { cells }
}
