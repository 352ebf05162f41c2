//! The fixed-rate frame loop.

use std::thread;
use std::time::Instant;

use anyhow::Result;

use crate::config::EngineConfig;
use crate::core::Scene;
use crate::input::{InputLatch, KeySource};
use crate::shutdown::Shutdown;
use crate::term::{draw_splash, Renderer, Surface};

pub struct Engine<S: Surface> {
    config: EngineConfig,
    scene: Scene,
    renderer: Renderer,
    input: InputLatch,
    surface: S,
    shutdown: Shutdown,
}

impl<S: Surface> Engine<S> {
    pub fn new(config: EngineConfig, surface: S, keys: impl KeySource + 'static) -> Self {
        Self {
            config,
            scene: Scene::new(),
            renderer: Renderer::new(),
            input: InputLatch::new(keys),
            surface,
            shutdown: Shutdown::new(),
        }
    }

    /// Use an externally owned stop flag (e.g. one wired to signals).
    pub fn with_shutdown(mut self, shutdown: Shutdown) -> Self {
        self.shutdown = shutdown;
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub fn input(&self) -> &InputLatch {
        &self.input
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    pub fn shutdown(&self) -> Shutdown {
        self.shutdown.clone()
    }

    /// Show the splash (if enabled) and leave a cleared screen behind.
    pub fn boot(&mut self) -> Result<()> {
        if self.config.splash {
            draw_splash(&mut self.surface)?;
            thread::sleep(self.config.splash_duration());
        }
        self.surface.clear()?;
        self.surface.flush()?;
        self.renderer.invalidate();
        Ok(())
    }

    /// Run one frame without sleeping. Returns the number of cells written.
    pub fn step<F>(&mut self, logic: &mut F) -> Result<usize>
    where
        F: FnMut(&mut Scene, &InputLatch, &Shutdown),
    {
        self.input.update();
        logic(&mut self.scene, &self.input, &self.shutdown);
        self.scene.update();
        self.scene.render(&mut self.renderer);
        let written = self.renderer.present(&mut self.surface)?;
        self.input.clear();
        Ok(written)
    }

    /// Loop until the shutdown token is cancelled. Returns the frame count.
    ///
    /// Surface errors end the loop immediately.
    pub fn run<F>(&mut self, mut logic: F) -> Result<u64>
    where
        F: FnMut(&mut Scene, &InputLatch, &Shutdown),
    {
        let period = self.config.frame_period();
        tracing::info!(
            fps = self.config.fps,
            entities = self.scene.len(),
            "engine running"
        );

        let mut frames: u64 = 0;
        while !self.shutdown.is_cancelled() {
            let started = Instant::now();
            let written = self.step(&mut logic)?;
            frames += 1;

            let busy = started.elapsed();
            tracing::trace!(frame = frames, written, ?busy, "frame done");
            if busy > period {
                tracing::trace!(frame = frames, ?busy, ?period, "frame over budget");
            }

            thread::sleep(period);
        }

        tracing::info!(frames, "engine stopped");
        Ok(frames)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Entity;
    use crate::input::ScriptedKeys;
    use crate::term::Cell;
    use crate::types::Tint;

    #[derive(Default)]
    struct CountingSurface {
        puts: Vec<(u16, u16, Cell)>,
        cursor: (u16, u16),
        clears: usize,
        flushes: usize,
    }

    impl Surface for CountingSurface {
        fn move_to(&mut self, x: u16, y: u16) -> Result<()> {
            self.cursor = (x, y);
            Ok(())
        }

        fn clear(&mut self) -> Result<()> {
            self.clears += 1;
            Ok(())
        }

        fn put(&mut self, cell: Cell) -> Result<()> {
            self.puts.push((self.cursor.0, self.cursor.1, cell));
            self.cursor.0 += 1;
            Ok(())
        }

        fn flush(&mut self) -> Result<()> {
            self.flushes += 1;
            Ok(())
        }
    }

    fn quiet_config() -> EngineConfig {
        EngineConfig {
            fps: 1000,
            splash: false,
            splash_ms: 0,
        }
    }

    fn idle_engine() -> Engine<CountingSurface> {
        Engine::new(
            quiet_config(),
            CountingSurface::default(),
            ScriptedKeys::default(),
        )
    }

    #[test]
    fn step_runs_logic_between_input_and_render() {
        let mut engine = Engine::new(
            quiet_config(),
            CountingSurface::default(),
            ScriptedKeys::new([Some("d")]),
        );
        let id = engine.scene_mut().add(Entity::new(0, 0).with_glyph('@'));

        let mut logic = |scene: &mut Scene, input: &InputLatch, _: &Shutdown| {
            if input.is_pressed("d") {
                if let Some(e) = scene.entity_mut(id) {
                    e.x += 1;
                }
            }
        };

        assert_eq!(engine.step(&mut logic).unwrap(), 1);
        assert_eq!(
            engine.surface().puts,
            vec![(1, 0, Cell::new('@', Tint::Black))]
        );
        // Latched keys do not leak into the next frame.
        assert_eq!(engine.input().pressed().count(), 0);
    }

    #[test]
    fn unchanged_frames_write_nothing() {
        let mut engine = idle_engine();
        engine.scene_mut().add(Entity::new(3, 3));

        let mut idle = |_: &mut Scene, _: &InputLatch, _: &Shutdown| {};
        assert_eq!(engine.step(&mut idle).unwrap(), 1);
        assert_eq!(engine.step(&mut idle).unwrap(), 0);
        assert_eq!(engine.step(&mut idle).unwrap(), 0);
        assert_eq!(engine.surface().flushes, 3);
    }

    #[test]
    fn run_stops_when_logic_cancels() {
        let mut engine = idle_engine();
        let mut seen = 0;
        let frames = engine
            .run(|_, _, shutdown| {
                seen += 1;
                if seen == 3 {
                    shutdown.cancel();
                }
            })
            .unwrap();
        assert_eq!(frames, 3);
    }

    #[test]
    fn run_does_nothing_when_already_cancelled() {
        let shutdown = Shutdown::new();
        shutdown.cancel();
        let mut engine = idle_engine().with_shutdown(shutdown);
        assert_eq!(engine.run(|_, _, _| {}).unwrap(), 0);
        assert_eq!(engine.surface().flushes, 0);
    }

    #[test]
    fn boot_without_splash_only_clears() {
        let mut engine = idle_engine();
        engine.boot().unwrap();
        assert_eq!(engine.surface().clears, 1);
        assert!(engine.surface().puts.is_empty());
    }
}
