//! VaxerMan entry point
//!
//! Runs the simulation headless at the fixed tick rate with a scripted pilot
//! on the keyboard. A windowed host drives the same `tick` / `build_frame`
//! pair from its own loop and blits the resulting frame.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::path::Path;

    use vaxerman::consts::TICKS_PER_SECOND;
    use vaxerman::platform::{InputTracker, KeyBindings};
    use vaxerman::renderer::build_frame;
    use vaxerman::settings::SETTINGS_FILE;
    use vaxerman::sim::{GameState, tick};
    use vaxerman::{Level, Settings};

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("VaxerMan (headless) starting...");

    let settings = Settings::load(Path::new(SETTINGS_FILE));
    let level = match &settings.level_path {
        Some(path) => Level::load(path),
        None => Level::builtin(),
    };
    let level = match level {
        Ok(level) => level,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };

    let seed = settings.seed.unwrap_or_else(demo::clock_seed);
    let (width, height) = settings.window_size();
    log::info!(
        "{} {}x{}, seed {}, {} keys",
        settings.title,
        width,
        height,
        seed,
        settings.key_scheme.as_str()
    );

    let bindings = KeyBindings::for_scheme(settings.key_scheme);
    let mut input = InputTracker::new(bindings);
    let mut state = GameState::new(seed, settings.tuning);
    let mut stats = demo::RunStats::default();

    for t in 0..demo::DEMO_SECONDS * TICKS_PER_SECOND {
        let keys = demo::pilot_keys(&bindings, &state, t);
        let tick_input = input.poll(&keys);
        tick(&mut state, &tick_input);
        stats.record(&state.events);

        let frame = build_frame(&state, &level);
        if t % TICKS_PER_SECOND == 0 {
            log::debug!(
                "t={}s sprites={} bytes={} health={}%",
                t / TICKS_PER_SECOND,
                frame.instances.len(),
                frame.as_bytes().len(),
                state.health_percent()
            );
        }
    }

    log::info!(
        "Demo finished: {} shots, {} enemies shot, {} infections, {} deaths",
        stats.shots,
        stats.kills,
        stats.infections,
        stats.deaths
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The web host drives the simulation directly; nothing to do here
}

#[cfg(not(target_arch = "wasm32"))]
mod demo {
    use std::time::{SystemTime, UNIX_EPOCH};

    use vaxerman::platform::{HeldKeys, KeyBindings};
    use vaxerman::sim::{GameEvent, GameState};

    /// Length of the headless run
    pub const DEMO_SECONDS: u32 = 60;

    /// Ticks spent walking each way
    const LEG_TICKS: u32 = 45;

    pub fn clock_seed() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0)
    }

    /// Scripted keyboard: walk a square, tap fire, restart after dying
    pub fn pilot_keys(bindings: &KeyBindings, state: &GameState, t: u32) -> HeldKeys {
        let mut keys = HeldKeys::new();
        // Taps are 4 ticks down, 4 up, so every press is a fresh edge
        let tap = t % 8 < 4;

        if state.is_game_over() {
            if tap {
                keys.press(bindings.restart);
            }
            return keys;
        }

        let walk = [bindings.left, bindings.down, bindings.right, bindings.up];
        keys.press(walk[((t / LEG_TICKS) % 4) as usize]);
        if tap {
            keys.press(bindings.fire);
        }
        keys
    }

    #[derive(Debug, Default)]
    pub struct RunStats {
        pub shots: u32,
        pub kills: u32,
        pub infections: u32,
        pub deaths: u32,
    }

    impl RunStats {
        pub fn record(&mut self, events: &[GameEvent]) {
            for event in events {
                match event {
                    GameEvent::BulletFired { .. } => self.shots += 1,
                    GameEvent::EnemyShot { .. } => self.kills += 1,
                    GameEvent::PlayerInfected { .. } => self.infections += 1,
                    GameEvent::PlayerDied => self.deaths += 1,
                    GameEvent::EnemySpawned { .. } | GameEvent::Restarted => {}
                }
            }
        }
    }
}
