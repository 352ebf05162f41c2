//! Entities and their optional components.

use crate::types::{Pos, Tint, DEFAULT_GLYPH};

/// Index of an entity in its scene's list (append order).
pub type EntityId = usize;

/// Marks an entity as taking part in occupancy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Collider {
    pub solid: bool,
}

impl Collider {
    pub const fn solid() -> Self {
        Self { solid: true }
    }

    pub const fn passable() -> Self {
        Self { solid: false }
    }
}

impl Default for Collider {
    fn default() -> Self {
        Self::solid()
    }
}

/// A point light carried by an entity.
///
/// `radius` is expected to be positive. `intensity` is usually in `[0, 1]`
/// but may be negative to darken.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    pub radius: f64,
    pub intensity: f64,
}

impl Light {
    pub const fn new(radius: f64, intensity: f64) -> Self {
        Self { radius, intensity }
    }
}

impl Default for Light {
    fn default() -> Self {
        Self::new(5.0, 1.0)
    }
}

/// Something that lives on the grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    pub x: i32,
    pub y: i32,
    pub glyph: char,
    pub tint: Tint,
    pub collider: Option<Collider>,
    pub light: Option<Light>,
}

impl Entity {
    /// A white full block at `(x, y)` with no components.
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            glyph: DEFAULT_GLYPH,
            tint: Tint::default(),
            collider: None,
            light: None,
        }
    }

    pub fn with_glyph(mut self, glyph: char) -> Self {
        self.glyph = glyph;
        self
    }

    pub fn with_tint(mut self, tint: Tint) -> Self {
        self.tint = tint;
        self
    }

    pub fn with_collider(mut self, collider: Collider) -> Self {
        self.collider = Some(collider);
        self
    }

    pub fn with_light(mut self, light: Light) -> Self {
        self.light = Some(light);
        self
    }

    pub fn pos(&self) -> Pos {
        Pos::new(self.x, self.y)
    }

    pub fn set_pos(&mut self, pos: Pos) {
        self.x = pos.x;
        self.y = pos.y;
    }

    /// True if the entity carries a solid collider.
    pub fn is_solid(&self) -> bool {
        matches!(self.collider, Some(Collider { solid: true }))
    }
}
