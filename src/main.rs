//! Fog2D demo runner (default binary).
//!
//! Walk a lit `@` around a walled room with WASD or the arrow keys.
//! `q`, `esc` or `ctrl+c` quits. Logs go to a file, never to the terminal.

use std::path::PathBuf;

use anyhow::Result;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use fog2d::core::{Collider, Entity, EntityId, Light, Scene};
use fog2d::engine::{Engine, EngineConfig, Shutdown};
use fog2d::input::{CrosstermKeySource, InputLatch};
use fog2d::term::TerminalSurface;
use fog2d::types::{Pos, Tint, HEIGHT, WIDTH};

fn main() -> Result<()> {
    // Dropping the guard flushes buffered log lines.
    let _log_guard = setup_logging()?;

    let config = EngineConfig::from_env();
    config.validate()?;
    tracing::info!(?config, "starting");

    let shutdown = Shutdown::new();
    shutdown.register_signals()?;

    let mut term = TerminalSurface::new();
    term.enter()?;

    let result = run(config, &mut term, shutdown);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(err) = &result {
        tracing::error!(%err, "engine failed");
    }
    result
}

fn run(config: EngineConfig, term: &mut TerminalSurface, shutdown: Shutdown) -> Result<()> {
    let mut engine = Engine::new(config, term, CrosstermKeySource).with_shutdown(shutdown);
    let player = build_room(engine.scene_mut());

    engine.boot()?;
    engine.run(|scene, input, shutdown| play(scene, input, shutdown, player))?;
    Ok(())
}

/// Floor, walls, a torch and the player. Returns the player's id.
fn build_room(scene: &mut Scene) -> EntityId {
    let (w, h) = (WIDTH as i32, HEIGHT as i32);

    for y in 0..h {
        for x in 0..w {
            scene.add(Entity::new(x, y).with_glyph('.'));
        }
    }

    for x in 0..w {
        for y in [0, h - 1] {
            scene.add(wall(x, y));
        }
    }
    for y in 1..h - 1 {
        for x in [0, w - 1] {
            scene.add(wall(x, y));
        }
    }

    scene.add(
        Entity::new(30, 5)
            .with_glyph('*')
            .with_tint(Tint::Red)
            .with_collider(Collider::solid())
            .with_light(Light::new(8.0, 0.8)),
    );

    scene.add(
        Entity::new(5, 10)
            .with_glyph('@')
            .with_tint(Tint::Cyan)
            .with_collider(Collider::solid())
            .with_light(Light::new(6.0, 1.0)),
    )
}

fn wall(x: i32, y: i32) -> Entity {
    Entity::new(x, y)
        .with_glyph('#')
        .with_tint(Tint::Yellow)
        .with_collider(Collider::solid())
}

fn play(scene: &mut Scene, input: &InputLatch, shutdown: &Shutdown, player: EntityId) {
    if input.any_pressed(&["q", "esc", "ctrl+c"]) {
        shutdown.cancel();
        return;
    }

    let (dx, dy) = if input.any_pressed(&["w", "up"]) {
        (0, -1)
    } else if input.any_pressed(&["s", "down"]) {
        (0, 1)
    } else if input.any_pressed(&["a", "left"]) {
        (-1, 0)
    } else if input.any_pressed(&["d", "right"]) {
        (1, 0)
    } else {
        return;
    };

    let Some(from) = scene.entity(player).map(Entity::pos) else {
        return;
    };
    let to: Pos = from.offset(dx, dy);
    if scene.is_blocked(to.x, to.y) {
        return;
    }
    if let Some(e) = scene.entity_mut(player) {
        e.set_pos(to);
    }
}

/// Log to `<log dir>/fog2d.log` only; stderr would tear the grid.
fn setup_logging() -> Result<WorkerGuard> {
    let log_dir = get_log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = tracing_appender::rolling::never(&log_dir, "fog2d.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = log_filter(std::env::var("RUST_LOG").ok().as_deref());

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    tracing::info!("log file: {}", log_dir.join("fog2d.log").display());
    Ok(guard)
}

/// `RUST_LOG` as given, or `info` when it is unset or blank.
fn log_filter(rust_log: Option<&str>) -> EnvFilter {
    match rust_log.map(str::trim) {
        Some(directives) if !directives.is_empty() => EnvFilter::new(directives),
        _ => EnvFilter::new("info"),
    }
}

/// `FOG2D_LOG_DIR`, else the platform cache directory.
fn get_log_directory() -> PathBuf {
    if let Some(dir) = std::env::var_os("FOG2D_LOG_DIR") {
        return PathBuf::from(dir);
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home).join("Library/Caches/fog2d/logs");
        }
    }

    #[cfg(target_os = "linux")]
    {
        if let Some(xdg_cache) = std::env::var_os("XDG_CACHE_HOME") {
            return PathBuf::from(xdg_cache).join("fog2d/logs");
        } else if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home).join(".cache/fog2d/logs");
        }
    }

    #[cfg(target_os = "windows")]
    {
        if let Some(local_appdata) = std::env::var_os("LOCALAPPDATA") {
            return PathBuf::from(local_appdata).join("fog2d").join("logs");
        }
    }

    std::env::temp_dir().join("fog2d/logs")
}
