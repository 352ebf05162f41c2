//! Scene: the entity list plus the per-frame update/render passes.

use crate::collision::{self, Occupancy};
use crate::entity::{Entity, EntityId};
use crate::light::{light_at, Emitter};
use crate::types::{Pos, Tint};
use crate::Canvas;

#[derive(Debug, Clone, Default)]
pub struct Scene {
    entities: Vec<Entity>,
    occupancy: Occupancy,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entity. Append order is render and collision order.
    pub fn add(&mut self, entity: Entity) -> EntityId {
        self.entities.push(entity);
        self.entities.len() - 1
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn entity(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(id)
    }

    pub fn entity_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.get_mut(id)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Recompute occupancy for the current entity positions.
    pub fn update(&mut self) {
        self.occupancy = collision::resolve(&self.entities);
    }

    /// Occupancy as of the last [`Scene::update`].
    pub fn occupancy(&self) -> &Occupancy {
        &self.occupancy
    }

    /// The solid entity at `(x, y)` as of the last [`Scene::update`].
    pub fn occupant(&self, x: i32, y: i32) -> Option<&Entity> {
        self.occupancy
            .get(Pos::new(x, y))
            .and_then(|id| self.entities.get(id))
    }

    pub fn is_blocked(&self, x: i32, y: i32) -> bool {
        self.occupancy.is_occupied(Pos::new(x, y))
    }

    /// Every light in the scene, placed at its entity's position.
    pub fn emitters(&self) -> Vec<Emitter> {
        self.entities
            .iter()
            .filter_map(|e| e.light.map(|light| Emitter::new(light, e.x, e.y)))
            .collect()
    }

    /// Brightness at `(x, y)` from the scene's current lights.
    pub fn brightness_at(&self, x: i32, y: i32) -> f64 {
        light_at(x as f64, y as f64, &self.emitters())
    }

    /// Draw every entity, in list order, tinted by the light at its position.
    pub fn render(&self, canvas: &mut impl Canvas) {
        let lights = self.emitters();
        for e in &self.entities {
            let brightness = light_at(e.x as f64, e.y as f64, &lights);
            let tint = Tint::for_brightness(brightness, e.tint);
            canvas.draw(e.x, e.y, e.glyph, tint);
        }
    }
}
