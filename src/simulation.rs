use legion::*;
use log::debug;
use rand::SeedableRng;
use rand_pcg::Pcg64;
use std::time::{Duration, Instant};

use crate::{particle::Particles, wall::Walls};

/// Target wall-clock milliseconds per frame (~60 FPS).
pub const FRAME_TIME_CAP: u64 = 16;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationConfig {
    pub width: u32,
    pub height: u32,
    pub seed: u64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameClock {
    pub started: Instant,
    pub frame_start: Instant,
    pub hue_offset: f32,
}

impl FrameClock {
    pub fn new() -> FrameClock {
        let now = Instant::now();
        FrameClock {
            started: now,
            frame_start: now,
            hue_offset: 0.,
        }
    }
}

pub fn init_simulation(resources: &mut Resources, simulation_config: SimulationConfig) {
    resources.insert(Walls::new(
        simulation_config.width as i32,
        simulation_config.height as i32,
    ));
    resources.insert(Particles::default());
    resources.insert(Pcg64::seed_from_u64(simulation_config.seed));
    resources.insert(FrameClock::new());
    resources.insert(simulation_config);
}

/// Rainbow rotation shared by everything drawn this frame: one degree per 10ms.
pub fn hue_offset(elapsed: Duration) -> f32 {
    (elapsed.as_millis() as f32 / 10.) % 360.
}

/// Whole milliseconds left in the frame budget; zero once the budget is spent.
pub fn ms_to_sleep(frame_time_ms: u64) -> u64 {
    FRAME_TIME_CAP.saturating_sub(frame_time_ms)
}

#[system]
pub fn advance_time(#[resource] clock: &mut FrameClock) {
    clock.hue_offset = hue_offset(clock.started.elapsed());
}

#[system]
pub fn pace_frame(#[resource] clock: &mut FrameClock) {
    let frame_time = clock.frame_start.elapsed().as_millis() as u64;
    let ms_to_sleep = ms_to_sleep(frame_time);
    debug!("Frame time: {}ms, sleeping {}ms", frame_time, ms_to_sleep);
    if ms_to_sleep > 0 {
        std::thread::sleep(Duration::from_millis(ms_to_sleep));
    }
    clock.frame_start = Instant::now();
}
