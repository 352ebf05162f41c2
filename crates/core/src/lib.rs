//! Scene logic - pure, deterministic, and testable
//!
//! This crate owns the simulation side of the engine: entities and their
//! optional components, tile-occupancy collisions, and point-light brightness.
//! It has **zero dependencies** on terminals or I/O; rendering goes through the
//! [`Canvas`] seam, which the terminal renderer implements.
//!
//! # Module Structure
//!
//! - [`entity`]: Entity, Collider and Light data
//! - [`collision`]: occupancy map of solid entities
//! - [`light`]: linear-falloff brightness from point lights
//! - [`scene`]: entity list plus per-frame update/render
//!
//! # Example
//!
//! ```
//! use fog2d_core::{Canvas, Entity, Light, Scene};
//! use fog2d_core::types::Tint;
//!
//! #[derive(Default)]
//! struct Recorder(Vec<(i32, i32, char, Tint)>);
//!
//! impl Canvas for Recorder {
//!     fn draw(&mut self, x: i32, y: i32, ch: char, tint: Tint) {
//!         self.0.push((x, y, ch, tint));
//!     }
//! }
//!
//! let mut scene = Scene::new();
//! scene.add(Entity::new(3, 3).with_glyph('@').with_tint(Tint::Yellow).with_light(Light::default()));
//! scene.add(Entity::new(30, 10));
//!
//! let mut canvas = Recorder::default();
//! scene.update();
//! scene.render(&mut canvas);
//!
//! // The lit entity keeps its tint; the far one falls into the darkest tier.
//! assert_eq!(canvas.0[0], (3, 3, '@', Tint::Yellow));
//! assert_eq!(canvas.0[1].3, Tint::Black);
//! ```

pub mod collision;
pub mod entity;
pub mod light;
pub mod scene;

pub use fog2d_types as types;

pub use collision::{resolve, Occupancy};
pub use entity::{Collider, Entity, EntityId, Light};
pub use light::{light_at, Emitter};
pub use scene::Scene;

/// Anything a scene can be drawn onto.
///
/// Implementations must silently ignore out-of-bounds positions.
pub trait Canvas {
    fn draw(&mut self, x: i32, y: i32, ch: char, tint: types::Tint);
}
